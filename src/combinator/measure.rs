//! Method-derived comparison combinators
//!
//! The comparison family from [`compare`](super::compare), evaluated against
//! the result of a named accessor on the candidate rather than the candidate
//! itself. This enables constraints like "collection length is at least N"
//! without bespoke predicate code.
//!
//! Accessors are modeled as small capability traits implemented for the
//! standard library types that carry them:
//!
//! - [`HasLen`]: an element count (`size`/`length` collapse to Rust's `len`)
//! - [`HasCapacity`]: an allocated capacity
//! - [`HasFront`] / [`HasBack`]: the first/last element
//!
//! # Example
//!
//! ```rust
//! use palisade::combinator::*;
//!
//! let short = len_lt(10);
//! assert!(short.check(&String::from("Joshua")));
//! assert!(!short.check(&String::from("0123456789")));
//!
//! let starts_high = front_ge(100);
//! assert!(starts_high.check(&vec![100, 1, 2]));
//! assert!(!starts_high.check(&vec![99, 1, 2]));
//! ```

use super::core::Predicate;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

/// Types reporting an element count.
pub trait HasLen {
    /// Number of elements (bytes for string types).
    fn length(&self) -> usize;
}

impl HasLen for String {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl HasLen for str {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLen for Vec<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLen for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLen for VecDeque<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> HasLen for HashMap<K, V, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasLen for BTreeMap<K, V> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> HasLen for HashSet<T, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

/// Types reporting an allocated capacity.
pub trait HasCapacity {
    /// Currently allocated capacity.
    fn cap(&self) -> usize;
}

impl HasCapacity for String {
    #[inline]
    fn cap(&self) -> usize {
        self.capacity()
    }
}

impl<T> HasCapacity for Vec<T> {
    #[inline]
    fn cap(&self) -> usize {
        self.capacity()
    }
}

impl<T> HasCapacity for VecDeque<T> {
    #[inline]
    fn cap(&self) -> usize {
        self.capacity()
    }
}

/// Sequences exposing their first element.
pub trait HasFront {
    /// Element type.
    type Item;

    /// The first element, if any.
    fn front(&self) -> Option<&Self::Item>;
}

impl<T> HasFront for Vec<T> {
    type Item = T;

    #[inline]
    fn front(&self) -> Option<&T> {
        self.first()
    }
}

impl<T> HasFront for [T] {
    type Item = T;

    #[inline]
    fn front(&self) -> Option<&T> {
        self.first()
    }
}

impl<T> HasFront for VecDeque<T> {
    type Item = T;

    #[inline]
    fn front(&self) -> Option<&T> {
        self.front()
    }
}

/// Sequences exposing their last element.
pub trait HasBack {
    /// Element type.
    type Item;

    /// The last element, if any.
    fn back(&self) -> Option<&Self::Item>;
}

impl<T> HasBack for Vec<T> {
    type Item = T;

    #[inline]
    fn back(&self) -> Option<&T> {
        self.last()
    }
}

impl<T> HasBack for [T] {
    type Item = T;

    #[inline]
    fn back(&self) -> Option<&T> {
        self.last()
    }
}

impl<T> HasBack for VecDeque<T> {
    type Item = T;

    #[inline]
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

// One struct + factory per (accessor, operator) pair; the families are
// uniform, so they are generated rather than hand-written.
macro_rules! len_rule {
    ($Name:ident, $factory:ident, $op:tt) => {
        #[doc = concat!("Predicate that checks `value.len() ", stringify!($op), " n`.")]
        #[derive(Clone, Copy, Debug)]
        pub struct $Name(pub usize);

        impl<T: HasLen + ?Sized> Predicate<T> for $Name {
            #[inline]
            fn check(&self, value: &T) -> bool {
                value.length() $op self.0
            }

            fn is_infallible(&self) -> bool {
                true
            }
        }

        #[doc = concat!("Create a predicate that checks `value.len() ", stringify!($op), " n`.")]
        pub fn $factory(n: usize) -> $Name {
            $Name(n)
        }
    };
}

len_rule!(LenEq, len_eq, ==);
len_rule!(LenNe, len_ne, !=);
len_rule!(LenGt, len_gt, >);
len_rule!(LenGe, len_ge, >=);
len_rule!(LenLt, len_lt, <);
len_rule!(LenLe, len_le, <=);

macro_rules! capacity_rule {
    ($Name:ident, $factory:ident, $op:tt) => {
        #[doc = concat!("Predicate that checks `value.capacity() ", stringify!($op), " n`.")]
        #[derive(Clone, Copy, Debug)]
        pub struct $Name(pub usize);

        impl<T: HasCapacity + ?Sized> Predicate<T> for $Name {
            #[inline]
            fn check(&self, value: &T) -> bool {
                value.cap() $op self.0
            }

            fn is_infallible(&self) -> bool {
                true
            }
        }

        #[doc = concat!("Create a predicate that checks `value.capacity() ", stringify!($op), " n`.")]
        pub fn $factory(n: usize) -> $Name {
            $Name(n)
        }
    };
}

capacity_rule!(CapacityEq, capacity_eq, ==);
capacity_rule!(CapacityNe, capacity_ne, !=);
capacity_rule!(CapacityGt, capacity_gt, >);
capacity_rule!(CapacityGe, capacity_ge, >=);
capacity_rule!(CapacityLt, capacity_lt, <);
capacity_rule!(CapacityLe, capacity_le, <=);

macro_rules! front_rule {
    ($Name:ident, $factory:ident, $op:tt, $bound:ident) => {
        #[doc = concat!("Predicate that checks `value.front() ", stringify!($op), " v`.")]
        #[doc = ""]
        #[doc = "False for an empty sequence."]
        #[derive(Clone, Copy, Debug)]
        pub struct $Name<V>(pub V);

        impl<T, V> Predicate<T> for $Name<V>
        where
            T: HasFront + ?Sized,
            T::Item: $bound<V>,
            V: Send + Sync,
        {
            #[inline]
            fn check(&self, value: &T) -> bool {
                value.front().map_or(false, |item| item $op &self.0)
            }

            fn is_infallible(&self) -> bool {
                true
            }
        }

        #[doc = concat!("Create a predicate that checks `value.front() ", stringify!($op), " v`.")]
        pub fn $factory<V: Send + Sync>(v: V) -> $Name<V> {
            $Name(v)
        }
    };
}

front_rule!(FrontEq, front_eq, ==, PartialEq);
front_rule!(FrontNe, front_ne, !=, PartialEq);
front_rule!(FrontGt, front_gt, >, PartialOrd);
front_rule!(FrontGe, front_ge, >=, PartialOrd);
front_rule!(FrontLt, front_lt, <, PartialOrd);
front_rule!(FrontLe, front_le, <=, PartialOrd);

macro_rules! back_rule {
    ($Name:ident, $factory:ident, $op:tt, $bound:ident) => {
        #[doc = concat!("Predicate that checks `value.back() ", stringify!($op), " v`.")]
        #[doc = ""]
        #[doc = "False for an empty sequence."]
        #[derive(Clone, Copy, Debug)]
        pub struct $Name<V>(pub V);

        impl<T, V> Predicate<T> for $Name<V>
        where
            T: HasBack + ?Sized,
            T::Item: $bound<V>,
            V: Send + Sync,
        {
            #[inline]
            fn check(&self, value: &T) -> bool {
                value.back().map_or(false, |item| item $op &self.0)
            }

            fn is_infallible(&self) -> bool {
                true
            }
        }

        #[doc = concat!("Create a predicate that checks `value.back() ", stringify!($op), " v`.")]
        pub fn $factory<V: Send + Sync>(v: V) -> $Name<V> {
            $Name(v)
        }
    };
}

back_rule!(BackEq, back_eq, ==, PartialEq);
back_rule!(BackNe, back_ne, !=, PartialEq);
back_rule!(BackGt, back_gt, >, PartialOrd);
back_rule!(BackGe, back_ge, >=, PartialOrd);
back_rule!(BackLt, back_lt, <, PartialOrd);
back_rule!(BackLe, back_le, <=, PartialOrd);

/// Predicate for a half-open length range: inclusive low, exclusive high.
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    low: usize,
    high: usize,
}

impl<T: HasLen + ?Sized> Predicate<T> for LenBetween {
    #[inline]
    fn check(&self, value: &T) -> bool {
        let len = value.length();
        len >= self.low && len < self.high
    }

    fn is_infallible(&self) -> bool {
        true
    }
}

/// Create a predicate that checks `low <= value.len() < high`.
///
/// The lower bound is inclusive, the upper bound exclusive.
///
/// # Example
///
/// ```rust
/// use palisade::combinator::*;
///
/// let p = len_between(1, 4);
/// assert!(!p.check(""));
/// assert!(p.check("a"));
/// assert!(p.check("abc"));
/// assert!(!p.check("abcd"));
/// ```
pub fn len_between(low: usize, high: usize) -> LenBetween {
    LenBetween { low, high }
}

/// Predicate for a half-open capacity range: inclusive low, exclusive high.
#[derive(Clone, Copy, Debug)]
pub struct CapacityBetween {
    low: usize,
    high: usize,
}

impl<T: HasCapacity + ?Sized> Predicate<T> for CapacityBetween {
    #[inline]
    fn check(&self, value: &T) -> bool {
        let cap = value.cap();
        cap >= self.low && cap < self.high
    }

    fn is_infallible(&self) -> bool {
        true
    }
}

/// Create a predicate that checks `low <= value.capacity() < high`.
pub fn capacity_between(low: usize, high: usize) -> CapacityBetween {
    CapacityBetween { low, high }
}

/// Alias for [`len_ge`]: length is at least `n`.
pub fn min_len(n: usize) -> LenGe {
    LenGe(n)
}

/// Alias for [`len_le`]: length is at most `n`.
pub fn max_len(n: usize) -> LenLe {
    LenLe(n)
}

/// Alias for [`capacity_ge`]: capacity is at least `n`.
pub fn min_capacity(n: usize) -> CapacityGe {
    CapacityGe(n)
}

/// Alias for [`capacity_le`]: capacity is at most `n`.
pub fn max_capacity(n: usize) -> CapacityLe {
    CapacityLe(n)
}
