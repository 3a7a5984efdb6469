//! Serde support for constrained containers (feature-gated)
//!
//! This module provides a `Serialize` implementation for
//! [`Constrained<T, N>`] when the `serde` feature is enabled: the container
//! serializes transparently as its owned value.
//!
//! There is deliberately no `Deserialize` implementation for the container.
//! Admission requires a schema, and a schema is a runtime collaborator that
//! a deserializer has no way to obtain; deserialize the underlying value
//! and admit it through [`Schema::try_of`](super::Schema::try_of) instead.
//! [`Config`](super::Config) derives both directions, so schema
//! configurations round-trip through serialized settings.

use serde::{Serialize, Serializer};

use super::Constrained;

impl<T, N> Serialize for Constrained<T, N>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use crate::combinator::{eq, len_lt};
    use crate::{Config, OptionNull, Schema};

    #[test]
    fn test_serialize_is_transparent() {
        let name = Schema::<String>::new().add_rule(len_lt(10));
        let joshua = name.try_of("Joshua".to_string()).unwrap();

        let json = serde_json::to_string(&joshua).unwrap();
        assert_eq!(json, r#""Joshua""#);
    }

    #[test]
    fn test_serialize_sentinel() {
        let exactly_42 = Schema::<Option<i32>, OptionNull>::new().add_rule(eq(Some(42)));

        let hit = exactly_42.of(Some(42));
        assert_eq!(serde_json::to_string(&hit).unwrap(), "42");

        let miss = exactly_42.of(Some(43));
        assert_eq!(serde_json::to_string(&miss).unwrap(), "null");
    }

    #[test]
    fn test_config_round_trip() {
        let config = Config::opaque();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
