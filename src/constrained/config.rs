//! Schema configuration
//!
//! A [`Config`] is a plain record of independent boolean switches
//! controlling container ergonomics. It is copied by value into a schema at
//! definition time, never mutated afterwards, and carried verbatim through
//! every derivation operation.
//!
//! The transparency flags gate the container's forwarding accessors at
//! runtime: with a flag off, the corresponding transparent accessor yields
//! `None` and only the opaque fallback remains. The explicitness flags
//! record the construction/query discipline a specialization advertises;
//! Rust has no implicit conversions to toggle, so the discipline lives in
//! which named surface (`of` vs `try_of`, `is_present`) calling code
//! reaches for.

/// Independent ergonomics switches for a container specialization.
///
/// The default enables every flag.
///
/// # Example
///
/// ```rust
/// use palisade::{Config, Schema};
///
/// let schema = Schema::<Box<i32>>::new().configured(Config::opaque());
/// let boxed = schema.try_of(Box::new(7)).unwrap();
///
/// // Transparency disabled: only the opaque view remains
/// assert_eq!(boxed.through(), None);
/// assert_eq!(**boxed.get(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Whether presence queries are an explicit, named operation.
    pub explicit_presence: bool,
    /// Whether forwarding construction is an explicit, named operation.
    pub explicit_lift: bool,
    /// Whether dereference forwards into the wrapped value.
    pub deref_through: bool,
    /// Whether member access forwards into the wrapped value.
    pub access_through: bool,
    /// Whether pointer-like access forwards into the wrapped value.
    pub pointer_through: bool,
}

impl Config {
    /// Configuration with every flag enabled (the default).
    pub fn new() -> Self {
        Self {
            explicit_presence: true,
            explicit_lift: true,
            deref_through: true,
            access_through: true,
            pointer_through: true,
        }
    }

    /// Configuration with all transparency disabled.
    ///
    /// Dereference and member access stay opaque: they act on the container
    /// itself rather than forwarding into the wrapped value.
    pub fn opaque() -> Self {
        Self {
            deref_through: false,
            access_through: false,
            pointer_through: false,
            ..Self::new()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let config = Config::default();
        assert!(config.explicit_presence);
        assert!(config.explicit_lift);
        assert!(config.deref_through);
        assert!(config.access_through);
        assert!(config.pointer_through);
    }

    #[test]
    fn test_opaque_disables_transparency_only() {
        let config = Config::opaque();
        assert!(config.explicit_presence);
        assert!(config.explicit_lift);
        assert!(!config.deref_through);
        assert!(!config.access_through);
        assert!(!config.pointer_through);
    }

    #[test]
    fn test_field_override() {
        let config = Config {
            deref_through: false,
            ..Config::default()
        };
        assert!(!config.deref_through);
        assert!(config.access_through);
    }
}
