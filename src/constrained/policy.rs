//! Null policies: per-type sentinel resolution
//!
//! A policy decides, for one underlying value type, whether that type has a
//! designated "null" sentinel and, if so, what it is. The container consults
//! its policy to select a failure behavior when a candidate value violates
//! its rules:
//!
//! - **Nullable** policy: the sentinel is stored in place of the offending
//!   value and the operation succeeds structurally. Violation is observable
//!   (via [`is_present`](crate::Constrained::is_present)), not fatal.
//! - **Non-nullable** policy ([`NoNull`], the default): the operation fails
//!   with [`ConstraintViolation`](crate::ConstraintViolation).
//!
//! Policies are pure, stateless type-to-sentinel mappings; they hold no
//! data and are never mutated. The sentinel is the designated escape hatch
//! from validation: it is stored without re-running constraint checks.
//!
//! # Custom policies
//!
//! Library types without a built-in null concept get one from client code:
//!
//! ```rust
//! use palisade::{Nullable, Policy, Schema};
//! use palisade::combinator::gt;
//!
//! // Treat 0 as the "no such id" sentinel
//! struct ZeroId;
//!
//! impl Policy<u64> for ZeroId {
//!     fn null() -> Option<u64> {
//!         Some(0)
//!     }
//! }
//!
//! impl Nullable<u64> for ZeroId {
//!     fn sentinel() -> u64 {
//!         0
//!     }
//!
//!     fn is_sentinel(value: &u64) -> bool {
//!         *value == 0
//!     }
//! }
//!
//! let schema = Schema::<u64, ZeroId>::new().add_rule(gt(1000u64));
//! assert!(schema.of(4242).is_present());
//! assert!(!schema.of(17).is_present());
//! ```

/// Per-type failure policy: whether T designates a null sentinel.
///
/// `null()` returning `None` selects the non-nullable policy: constraint
/// violations are reported as errors. Returning `Some(sentinel)` selects
/// silent substitution.
pub trait Policy<T>: Send + Sync + 'static {
    /// The designated sentinel for T, if the type has one.
    fn null() -> Option<T> {
        None
    }
}

/// Marker for policies that designate a sentinel.
///
/// Implementations must agree with [`Policy::null`]: `null()` returns
/// `Some(sentinel())`.
pub trait Nullable<T>: Policy<T> {
    /// The sentinel value.
    fn sentinel() -> T;

    /// Whether `value` is the sentinel.
    fn is_sentinel(value: &T) -> bool;
}

/// The default, non-nullable policy: no sentinel for any type.
///
/// Containers under this policy report violations as
/// [`ConstraintViolation`](crate::ConstraintViolation) errors.
#[derive(Clone, Copy, Default, Debug)]
pub struct NoNull;

impl<T> Policy<T> for NoNull {}

/// The nullable policy for `Option<U>`: the sentinel is `None`.
///
/// # Example
///
/// ```rust
/// use palisade::{OptionNull, Schema};
/// use palisade::combinator::eq;
///
/// let schema = Schema::<Option<i32>, OptionNull>::new().add_rule(eq(Some(42)));
///
/// let hit = schema.of(Some(42));
/// assert!(hit.is_present());
/// assert_eq!(*hit.get(), Some(42));
///
/// let miss = schema.of(Some(43));
/// assert!(!miss.is_present());
/// assert_eq!(*miss.get(), None);
/// ```
#[derive(Clone, Copy, Default, Debug)]
pub struct OptionNull;

impl<U> Policy<Option<U>> for OptionNull {
    fn null() -> Option<Option<U>> {
        Some(None)
    }
}

impl<U> Nullable<Option<U>> for OptionNull {
    fn sentinel() -> Option<U> {
        None
    }

    fn is_sentinel(value: &Option<U>) -> bool {
        value.is_none()
    }
}
