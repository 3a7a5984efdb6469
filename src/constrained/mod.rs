//! Constrained value containers
//!
//! This module implements the "validate once, hold forever" pattern: a
//! [`Constrained`] container owns one value of an underlying type and
//! guarantees, for its entire lifetime, that the ordered rule list of its
//! [`Schema`] holds for the owned value.
//!
//! # Philosophy
//!
//! Instead of scattering validation checks throughout your code, attach the
//! rules to the value's container once:
//!
//! ```rust
//! use palisade::Schema;
//! use palisade::combinator::len_lt;
//!
//! let name = Schema::<String>::new().add_rule(len_lt(10));
//!
//! let joshua = name.try_of("Joshua".to_string()).unwrap();
//! // joshua is GUARANTEED shorter than 10 bytes from here on
//! assert_eq!(joshua.get(), "Joshua");
//!
//! assert!(name.try_of("0123456789".to_string()).is_err());
//! ```
//!
//! # Failure policies
//!
//! The container's null [`Policy`] selects what a constraint violation
//! means:
//!
//! - [`NoNull`] (default): construction and assignment fail visibly with
//!   [`ConstraintViolation`]; an instance that exists is always valid.
//! - A [`Nullable`] policy (e.g. [`OptionNull`]): the policy's sentinel is
//!   silently stored instead, the operation succeeds structurally, and
//!   [`is_present`](Constrained::is_present) reports which way it went.
//!
//! ```rust
//! use palisade::{OptionNull, Schema};
//! use palisade::combinator::eq;
//!
//! let exactly_42 = Schema::<Option<i32>, OptionNull>::new().add_rule(eq(Some(42)));
//!
//! let hit = exactly_42.of(Some(42));
//! assert!(hit.is_present());
//!
//! let miss = exactly_42.of(Some(43));
//! assert!(!miss.is_present());
//! assert_eq!(*miss.get(), None);
//! ```

mod config;
mod policy;
mod schema;
#[cfg(feature = "serde")]
mod serde_impl;

pub use config::Config;
pub use policy::{NoNull, Nullable, OptionNull, Policy};
pub use schema::Schema;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::error::ConstraintViolation;

/// A value of type T guaranteed to satisfy its schema's rules.
///
/// The guarantee holds at every externally observable moment: after
/// successful construction and after every successful assignment, either
/// all rules hold for the owned value, or - for nullable policies - the
/// owned value is the policy's sentinel.
///
/// Instances carry a handle to the schema that admitted them, so
/// assignment re-checks against the same rules. Rule storage is shared,
/// not copied.
///
/// # Access
///
/// The opaque surface is always available: [`get`](Self::get),
/// [`into_inner`](Self::into_inner), [`as_ptr`](Self::as_ptr), plus
/// `Deref` to the wrapped value. The transparent surface
/// ([`through`](Self::through), [`view`](Self::view),
/// [`through_ptr`](Self::through_ptr)) forwards *into* the wrapped value
/// and is gated by the schema's [`Config`] transparency flags.
///
/// There is deliberately no mutable dereference: reaching into the owned
/// value without a re-check would void the guarantee. Use
/// [`try_set`](Self::try_set) or [`try_map`](Self::try_map) instead.
pub struct Constrained<T, N = NoNull> {
    value: T,
    schema: Schema<T, N>,
}

impl<T, N: Policy<T>> Constrained<T, N> {
    /// Wrap an already-screened value. Callers guarantee the invariant.
    pub(crate) fn admitted(value: T, schema: Schema<T, N>) -> Self {
        Self { value, schema }
    }

    /// A reference to the owned value.
    ///
    /// This is zero-cost - no runtime check.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consume the container, returning the owned value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// The schema this instance was admitted under.
    pub fn schema(&self) -> &Schema<T, N> {
        &self.schema
    }

    /// Assign a new value, re-running the rules.
    ///
    /// On violation, a nullable policy stores its sentinel and the
    /// assignment succeeds; the non-nullable policy retains the previous
    /// valid value and reports the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use palisade::Schema;
    /// use palisade::combinator::gt;
    ///
    /// let positive = Schema::<i32>::new().add_rule(gt(0));
    /// let mut n = positive.try_of(3).unwrap();
    ///
    /// n.try_set(7).unwrap();
    /// assert_eq!(*n.get(), 7);
    ///
    /// // The failed assignment leaves the previous value in place
    /// assert!(n.try_set(-1).is_err());
    /// assert_eq!(*n.get(), 7);
    /// ```
    pub fn try_set(&mut self, value: T) -> Result<(), ConstraintViolation> {
        let value = self.schema.resolve(value)?;
        self.value = value;
        Ok(())
    }

    /// Transform the owned value, re-running the rules on the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use palisade::Schema;
    /// use palisade::combinator::gt;
    ///
    /// let positive = Schema::<i32>::new().add_rule(gt(0));
    /// let n = positive.try_of(21).unwrap();
    ///
    /// let doubled = n.try_map(|x| x * 2).unwrap();
    /// assert_eq!(*doubled.get(), 42);
    ///
    /// assert!(doubled.try_map(|x| -x).is_err());
    /// ```
    pub fn try_map<F>(self, f: F) -> Result<Self, ConstraintViolation>
    where
        F: FnOnce(T) -> T,
    {
        let Self { value, schema } = self;
        let value = schema.resolve(f(value))?;
        Ok(Self { value, schema })
    }

    /// Transparent dereference: forward into the wrapped value.
    ///
    /// Yields `None` when the schema's configuration keeps dereference
    /// opaque; use [`get`](Self::get) for the opaque view.
    ///
    /// # Example
    ///
    /// ```rust
    /// use palisade::Schema;
    ///
    /// let schema = Schema::<Box<i32>>::new();
    /// let boxed = schema.try_of(Box::new(7)).unwrap();
    /// assert_eq!(boxed.through(), Some(&7));
    /// ```
    pub fn through(&self) -> Option<&T::Target>
    where
        T: Deref,
    {
        self.schema
            .config()
            .deref_through
            .then(|| self.value.deref())
    }

    /// Transparent member access: a reference view into the wrapped value.
    ///
    /// Yields `None` when the schema's configuration keeps member access
    /// opaque.
    ///
    /// # Example
    ///
    /// ```rust
    /// use palisade::Schema;
    ///
    /// let schema = Schema::<String>::new();
    /// let s = schema.try_of("abc".to_string()).unwrap();
    /// assert_eq!(s.view::<str>(), Some("abc"));
    /// ```
    pub fn view<U: ?Sized>(&self) -> Option<&U>
    where
        T: AsRef<U>,
    {
        self.schema
            .config()
            .access_through
            .then(|| self.value.as_ref())
    }

    /// Pointer-like forwarding: the address the wrapped value points at.
    ///
    /// Yields `None` when the schema's configuration keeps pointer access
    /// opaque.
    pub fn through_ptr(&self) -> Option<*const T::Target>
    where
        T: Deref,
    {
        self.schema
            .config()
            .pointer_through
            .then(|| self.value.deref() as *const T::Target)
    }

    /// The address of the owned value itself (the opaque fallback).
    pub fn as_ptr(&self) -> *const T {
        &self.value
    }
}

impl<T, N: Nullable<T>> Constrained<T, N> {
    /// Assign a new value under a nullable policy.
    ///
    /// Always succeeds structurally: a violating value is replaced by the
    /// sentinel.
    pub fn set(&mut self, value: T) {
        self.value = match self.schema.screen(value) {
            Ok(value) => value,
            Err(_) => N::sentinel(),
        };
    }

    /// Transform the owned value under a nullable policy.
    ///
    /// A violating result is replaced by the sentinel.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        let Self { value, schema } = self;
        let value = match schema.screen(f(value)) {
            Ok(value) => value,
            Err(_) => N::sentinel(),
        };
        Self { value, schema }
    }

    /// Boolean conversion: whether the owned value is a valid domain value
    /// rather than the substituted sentinel.
    ///
    /// # Example
    ///
    /// ```rust
    /// use palisade::{OptionNull, Schema};
    /// use palisade::combinator::eq;
    ///
    /// let exactly_42 = Schema::<Option<i32>, OptionNull>::new().add_rule(eq(Some(42)));
    /// assert!(exactly_42.of(Some(42)).is_present());
    /// assert!(!exactly_42.of(Some(43)).is_present());
    /// ```
    pub fn is_present(&self) -> bool {
        !N::is_sentinel(&self.value)
    }
}

// Copy construction: two independently valid instances. No re-check -
// constraints are a property of values, and the source was valid.
impl<T: Clone, N: Policy<T>> Clone for Constrained<T, N> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            schema: self.schema.clone(),
        }
    }
}

impl<T: fmt::Debug, N> fmt::Debug for Constrained<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constrained")
            .field("value", &self.value)
            .field("schema", &self.schema)
            .finish()
    }
}

impl<T: fmt::Display, N> fmt::Display for Constrained<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

// Comparisons delegate to the owned value
impl<T: PartialEq, N> PartialEq for Constrained<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, N> Eq for Constrained<T, N> {}

impl<T: PartialOrd, N> PartialOrd for Constrained<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, N> Ord for Constrained<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, N> Hash for Constrained<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, N> AsRef<T> for Constrained<T, N> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

// The opaque dereference: the owned value. Always available; the
// transparent variant is `through`.
impl<T, N> Deref for Constrained<T, N> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{between, eq, ge, gt, len_lt, lt, sorted};

    fn name_schema() -> Schema<String> {
        Schema::<String>::new().add_rule(len_lt(10))
    }

    #[test]
    fn test_construction_enforces_rules() {
        let name = name_schema();
        assert!(name.try_of("0123456789".to_string()).is_err());
        assert_eq!(name.try_of("Joshua".to_string()).unwrap().get(), "Joshua");
    }

    #[test]
    fn test_default_construction() {
        let name = name_schema();
        assert_eq!(name.try_default().unwrap().get(), "");
    }

    #[test]
    fn test_copy_construction_yields_equal_instances() {
        let name = name_schema();
        let x = name.try_of("abc".to_string()).unwrap();
        let y = x.clone();
        assert_eq!(x, y);
        assert_eq!(x.get(), "abc");
        assert_eq!(y.get(), "abc");
    }

    #[test]
    fn test_move_preserves_value() {
        let name = name_schema();
        let x = name.try_of("abc".to_string()).unwrap();
        let y = x;
        assert_eq!(y.get(), "abc");
    }

    #[test]
    fn test_assignment() {
        let name = name_schema();
        let mut x = name.try_of("abc".to_string()).unwrap();

        x.try_set("def".to_string()).unwrap();
        assert_eq!(x.get(), "def");

        let err = x.try_set("0123456789".to_string()).unwrap_err();
        assert_eq!(err.index(), 0);
        // Previous valid value retained
        assert_eq!(x.get(), "def");
    }

    #[test]
    fn test_nullable_substitution() {
        let exactly_42 = Schema::<Option<i32>, OptionNull>::new().add_rule(eq(Some(42)));

        let hit = exactly_42.of(Some(42));
        assert!(hit.is_present());
        assert_eq!(*hit.get(), Some(42));

        let miss = exactly_42.of(Some(43));
        assert!(!miss.is_present());
        assert_eq!(*miss.get(), None);
    }

    #[test]
    fn test_nullable_passthrough_is_not_spurious() {
        let under_ten = Schema::<Option<i32>, OptionNull>::new()
            .add_rule(|x: &Option<i32>| x.map_or(false, |v| v < 10));

        let ok = under_ten.of(Some(7));
        assert!(ok.is_present());
        assert_eq!(*ok.get(), Some(7));
    }

    #[test]
    fn test_nullable_set() {
        let exactly_42 = Schema::<Option<i32>, OptionNull>::new().add_rule(eq(Some(42)));
        let mut x = exactly_42.of(Some(42));

        x.set(Some(43));
        assert!(!x.is_present());

        x.set(Some(42));
        assert!(x.is_present());
    }

    #[test]
    fn test_try_map() {
        let positive = Schema::<i32>::new().add_rule(gt(0));
        let n = positive.try_of(21).unwrap();
        let doubled = n.try_map(|x| x * 2).unwrap();
        assert_eq!(*doubled.get(), 42);
        assert!(doubled.try_map(|x| -x).is_err());
    }

    #[test]
    fn test_nullable_map() {
        let exactly_42 = Schema::<Option<i32>, OptionNull>::new().add_rule(eq(Some(42)));
        let x = exactly_42.of(Some(42));
        let bumped = x.map(|v| v.map(|n| n + 1));
        assert!(!bumped.is_present());
    }

    #[test]
    fn test_transparent_deref() {
        let schema = Schema::<Box<i32>>::new();
        let boxed = schema.try_of(Box::new(7)).unwrap();
        assert_eq!(boxed.through(), Some(&7));
        assert_eq!(**boxed.get(), 7);
    }

    #[test]
    fn test_opaque_deref() {
        let schema = Schema::<Box<i32>>::new().configured(Config::opaque());
        let boxed = schema.try_of(Box::new(7)).unwrap();
        assert_eq!(boxed.through(), None);
        assert_eq!(**boxed.get(), 7);
    }

    #[test]
    fn test_view() {
        let schema = Schema::<String>::new();
        let s = schema.try_of("abc".to_string()).unwrap();
        assert_eq!(s.view::<str>(), Some("abc"));

        let opaque = Schema::<String>::new().configured(Config::opaque());
        let s = opaque.try_of("abc".to_string()).unwrap();
        assert_eq!(s.view::<str>(), None);
    }

    #[test]
    fn test_pointer_access() {
        let schema = Schema::<Box<i32>>::new();
        let boxed = schema.try_of(Box::new(7)).unwrap();

        let forwarded = boxed.through_ptr().unwrap();
        assert_eq!(forwarded, &**boxed.get() as *const i32);
        assert!(!boxed.as_ptr().is_null());

        let opaque = Schema::<Box<i32>>::new().configured(Config::opaque());
        let boxed = opaque.try_of(Box::new(7)).unwrap();
        assert_eq!(boxed.through_ptr(), None);
    }

    #[test]
    fn test_deref_is_opaque_fallback() {
        let name = name_schema();
        let x = name.try_of("abc".to_string()).unwrap();
        // Deref targets the owned String, so str methods forward
        assert_eq!(x.len(), 3);
        assert_eq!(&*x, "abc");
    }

    #[test]
    fn test_display_and_debug() {
        let name = name_schema();
        let x = name.try_of("abc".to_string()).unwrap();
        assert_eq!(format!("{}", x), "abc");
        let debug = format!("{:?}", x);
        assert!(debug.contains("Constrained"));
        assert!(debug.contains("abc"));
    }

    #[test]
    fn test_ord_and_hash_delegate() {
        use std::collections::HashSet;

        let positive = Schema::<i32>::new().add_rule(gt(0));
        let a = positive.try_of(1).unwrap();
        let b = positive.try_of(2).unwrap();
        assert!(a < b);

        let mut set = HashSet::new();
        set.insert(positive.try_of(1).unwrap());
        set.insert(positive.try_of(1).unwrap());
        set.insert(positive.try_of(2).unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_between_scenario() {
        let schema = Schema::<i32>::new().add_rule(between(1, 4));
        assert!(schema.try_of(0).is_err());
        assert!(schema.try_of(1).is_ok());
        assert!(schema.try_of(3).is_ok());
        assert!(schema.try_of(5).is_err());
    }

    #[test]
    fn test_rule_order_observed() {
        let schema = Schema::<Vec<i32>>::new()
            .add_rule(|v: &Vec<i32>| !v.is_empty())
            .add_rule(sorted());

        assert_eq!(schema.try_of(vec![]).unwrap_err().index(), 0);
        assert_eq!(schema.try_of(vec![2, 1]).unwrap_err().index(), 1);
        assert!(schema.try_of(vec![1, 2]).is_ok());
    }

    #[test]
    fn test_invariant_holds_after_every_operation() {
        let schema = Schema::<i32>::new().add_rule(ge(0)).add_rule(lt(100));
        let mut n = schema.try_of(50).unwrap();

        for candidate in [-5, 42, 100, 7, -1] {
            let _ = n.try_set(candidate);
            let value = *n.get();
            assert!((0..100).contains(&value));
        }
    }
}
