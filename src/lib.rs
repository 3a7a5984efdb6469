//! # Palisade
//!
//! > *"Good fences make good values"*
//!
//! A Rust library for constrained value types: containers that wrap a
//! value together with an ordered list of predicate rules and guarantee,
//! for the container's entire lifetime, that the rules hold for the
//! wrapped value.
//!
//! ## Philosophy
//!
//! **Palisade** embodies the principle of **validate once, hold forever**:
//! - A [`Schema`] defines a container type: underlying type, null policy,
//!   configuration, and an ordered rule pack
//! - A [`Constrained`] instance is living proof its rules passed
//! - Rules are built from a small closed [`combinator`] algebra instead of
//!   ad-hoc boolean functions
//!
//! ## Quick Example
//!
//! ```rust
//! use palisade::Schema;
//! use palisade::combinator::{len_ge, len_lt};
//!
//! // A name: non-empty, shorter than 10 bytes
//! let name = Schema::<String>::new()
//!     .add_rule(len_ge(1))
//!     .add_rule(len_lt(10));
//!
//! let joshua = name.try_of("Joshua".to_string()).unwrap();
//! assert_eq!(joshua.get(), "Joshua");
//!
//! // Violations fail visibly under the default, non-nullable policy
//! assert!(name.try_of("0123456789".to_string()).is_err());
//! ```
//!
//! ## Nullable policies
//!
//! A type with a designated "null" sentinel can recover from violations
//! locally: the sentinel is stored instead and the operation succeeds
//! structurally.
//!
//! ```rust
//! use palisade::{OptionNull, Schema};
//! use palisade::combinator::eq;
//!
//! let exactly_42 = Schema::<Option<i32>, OptionNull>::new().add_rule(eq(Some(42)));
//!
//! assert!(exactly_42.of(Some(42)).is_present());
//! assert!(!exactly_42.of(Some(43)).is_present());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod combinator;
pub mod constrained;
pub mod error;
pub mod pack;

// Re-exports
pub use constrained::{Config, Constrained, NoNull, Nullable, OptionNull, Policy, Schema};
pub use error::ConstraintViolation;
pub use pack::RulePack;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combinator::{Predicate, PredicateExt};
    pub use crate::constrained::{
        Config, Constrained, NoNull, Nullable, OptionNull, Policy, Schema,
    };
    pub use crate::error::ConstraintViolation;
    pub use crate::pack::RulePack;
}
