//! Predicate combinators for composable constraint logic
//!
//! This module provides the rule vocabulary consumed by
//! [`Constrained`](crate::Constrained) containers: a small closed algebra
//! for expressing "does this value satisfy property P" without requiring
//! every predicate author to hand-write a boolean function.
//!
//! # Philosophy
//!
//! Instead of writing verbose boolean expressions or ad-hoc helper
//! functions, predicate combinators allow you to:
//!
//! - Build complex predicates from simple, reusable pieces
//! - Compose predicates using familiar logical operators
//! - Attach them to container schemas as ordered constraint lists
//!
//! # Example
//!
//! ```rust
//! use palisade::combinator::*;
//!
//! // A username: 3 to 20 bytes, no spaces
//! let valid_len = len_between(3, 21);
//! let no_spaces = |s: &String| !s.contains(' ');
//!
//! let username = valid_len.and(no_spaces);
//! assert!(username.check(&String::from("john_doe")));
//! assert!(!username.check(&String::from("jd")));
//! assert!(!username.check(&String::from("john doe")));
//! ```
//!
//! # Failure classification
//!
//! Every combinator reports whether its evaluation is statically known not
//! to fail via [`Predicate::is_infallible`]. The classification is
//! compositional: a combinator built entirely from no-fail primitives is
//! itself no-fail, while an arbitrary closure operand makes the composition
//! report unknown (`false`).

mod compare;
mod core;
mod measure;
mod sequence;

// Core trait and lifting
pub use self::core::{constant, thunk, Constant, Predicate, PredicateExt, Thunk};

// Logical combinators
pub use self::core::{
    all_of, any_of, if_, none_of, AllOf, And, AnyOf, If, NoneOf, Not, Or,
};

// Comparison combinators
pub use compare::{
    between, eq, ge, gt, le, lt, ne, one_of, Between, Eq, Ge, Gt, Le, Lt, Ne, OneOf,
};

// Method-derived comparison combinators
pub use measure::{
    back_eq, back_ge, back_gt, back_le, back_lt, back_ne, capacity_between, capacity_eq,
    capacity_ge, capacity_gt, capacity_le, capacity_lt, capacity_ne, front_eq, front_ge, front_gt,
    front_le, front_lt, front_ne, len_between, len_eq, len_ge, len_gt, len_le, len_lt, len_ne,
    max_capacity, max_len, min_capacity, min_len, BackEq, BackGe, BackGt, BackLe, BackLt, BackNe,
    CapacityBetween, CapacityEq, CapacityGe, CapacityGt, CapacityLe, CapacityLt, CapacityNe,
    FrontEq, FrontGe, FrontGt, FrontLe, FrontLt, FrontNe, HasBack, HasCapacity, HasFront, HasLen,
    LenBetween, LenEq, LenGe, LenGt, LenLe, LenLt, LenNe,
};

// Collection combinators
pub use sequence::{all, any, has, is, none, sorted, Every, Has, Lacks, Sorted};
