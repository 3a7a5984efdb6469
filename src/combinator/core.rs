//! Core predicate trait, lifting, and logical combinators
//!
//! This module provides the foundational `Predicate` trait, the lifting
//! wrappers that turn non-predicate values into predicates, and the logical
//! combinators for composing predicates.
//!
//! # Lifting
//!
//! Anything used where a combinator is expected is normalized into one.
//! Resolution prefers, in order:
//!
//! | Value                         | Lift                                    |
//! |-------------------------------|-----------------------------------------|
//! | an existing combinator        | used as-is                              |
//! | a `Fn(&T) -> bool` closure    | a predicate via the blanket impl        |
//! | a zero-argument callable      | [`thunk`] - argument ignored, invoked   |
//! | a plain boolean constant      | [`constant`] - argument ignored         |
//!
//! In Rust the first two cases coincide through the trait itself; the last
//! two are the explicit wrappers [`Thunk`] and [`Constant`].

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use palisade::combinator::*;
///
/// let is_valid_age = ge(0).and(le(150));
/// assert!(is_valid_age.check(&25));
/// assert!(!is_valid_age.check(&-5));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;

    /// Whether evaluating this predicate is statically known not to fail.
    ///
    /// Every built-in combinator reports `true`; the classification of a
    /// composed combinator is derived from its operands, so a combinator
    /// built entirely from no-fail primitives is itself no-fail. Arbitrary
    /// closures default to `false` because nothing is known about them.
    fn is_infallible(&self) -> bool {
        false
    }
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods return concrete types for zero-cost abstraction.
///
/// # Example
///
/// ```rust
/// use palisade::combinator::*;
///
/// let p = gt(0).and(lt(100)).not();
/// assert!(p.check(&-5));  // not (> 0 and < 100)
/// assert!(!p.check(&50)); // 50 is in range, so not() inverts to false
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// Returns a predicate that is true only when both predicates are true.
    /// The left operand is evaluated first and short-circuits the right.
    ///
    /// # Example
    ///
    /// ```rust
    /// use palisade::combinator::*;
    ///
    /// let p = gt(0).and(lt(100));
    /// assert!(p.check(&50));
    /// assert!(!p.check(&0));
    /// assert!(!p.check(&100));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// Returns a predicate that is true when either predicate is true.
    /// The left operand is evaluated first and short-circuits the right.
    ///
    /// # Example
    ///
    /// ```rust
    /// use palisade::combinator::*;
    ///
    /// let p = lt(0).or(gt(100));
    /// assert!(p.check(&-5));
    /// assert!(p.check(&150));
    /// assert!(!p.check(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// Returns a predicate that is true when the original predicate is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use palisade::combinator::*;
    ///
    /// let p = gt(0).not();
    /// assert!(p.check(&-5));
    /// assert!(p.check(&0));
    /// assert!(!p.check(&5));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }

    fn is_infallible(&self) -> bool {
        self.0.is_infallible() && self.1.is_infallible()
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }

    fn is_infallible(&self) -> bool {
        self.0.is_infallible() && self.1.is_infallible()
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }

    fn is_infallible(&self) -> bool {
        self.0.is_infallible()
    }
}

/// Conditional combinator - selects a branch based on a condition predicate.
///
/// Evaluates the condition against the candidate; if it holds, the result is
/// the `when_true` branch applied to the candidate, otherwise the
/// `when_false` branch. Only the selected branch is evaluated.
#[derive(Clone, Copy, Debug)]
pub struct If<C, A, B>(pub C, pub A, pub B);

impl<T: ?Sized, C, A, B> Predicate<T> for If<C, A, B>
where
    C: Predicate<T>,
    A: Predicate<T>,
    B: Predicate<T>,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        if self.0.check(value) {
            self.1.check(value)
        } else {
            self.2.check(value)
        }
    }

    fn is_infallible(&self) -> bool {
        self.0.is_infallible() && self.1.is_infallible() && self.2.is_infallible()
    }
}

/// Create a conditional predicate.
///
/// Only the selected branch is evaluated.
///
/// # Example
///
/// ```rust
/// use palisade::combinator::*;
///
/// // Negative values must be even, non-negative values must be < 100
/// let p = if_(lt(0), |x: &i32| x % 2 == 0, lt(100));
/// assert!(p.check(&-4));
/// assert!(!p.check(&-3));
/// assert!(p.check(&50));
/// assert!(!p.check(&150));
/// ```
pub fn if_<T: ?Sized, C, A, B>(cond: C, when_true: A, when_false: B) -> If<C, A, B>
where
    C: Predicate<T>,
    A: Predicate<T>,
    B: Predicate<T>,
{
    If(cond, when_true, when_false)
}

/// A boolean constant lifted into a predicate.
///
/// The candidate value is ignored.
#[derive(Clone, Copy, Debug)]
pub struct Constant(pub bool);

impl<T: ?Sized> Predicate<T> for Constant {
    #[inline]
    fn check(&self, _value: &T) -> bool {
        self.0
    }

    fn is_infallible(&self) -> bool {
        true
    }
}

/// Lift a plain boolean constant into a predicate that ignores its argument.
///
/// # Example
///
/// ```rust
/// use palisade::combinator::*;
///
/// assert!(constant(true).check(&42));
/// assert!(!constant(false).check(&42));
/// ```
pub fn constant(value: bool) -> Constant {
    Constant(value)
}

/// A zero-argument callable lifted into a predicate.
///
/// The candidate value is ignored; the callable is invoked fresh on each
/// check. Useful for wrapping a pre-computed or externally-observed
/// condition.
#[derive(Clone, Copy, Debug)]
pub struct Thunk<F>(pub F);

impl<T: ?Sized, F> Predicate<T> for Thunk<F>
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, _value: &T) -> bool {
        (self.0)()
    }
}

/// Lift a zero-argument callable into a predicate that ignores its argument.
///
/// # Example
///
/// ```rust
/// use palisade::combinator::*;
///
/// let flag = true;
/// let p = thunk(move || flag);
/// assert!(p.check(&"anything"));
/// ```
pub fn thunk<F: Fn() -> bool + Send + Sync>(f: F) -> Thunk<F> {
    Thunk(f)
}

/// Check if all predicates are satisfied (const generic, zero-allocation).
///
/// Uses a fixed-size array to avoid heap allocation. Requires homogeneous
/// predicate types; for mixed predicates, use `.and()` chaining instead.
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AllOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }

    fn is_infallible(&self) -> bool {
        self.0.iter().all(|p| p.is_infallible())
    }
}

/// Create a predicate that checks if all given predicates are satisfied.
///
/// N-ary conjunction, evaluated left-to-right with short-circuit.
///
/// # Example
///
/// ```rust
/// use palisade::combinator::*;
///
/// let bounds = all_of([gt(0), gt(-10), gt(-100)]);
/// assert!(bounds.check(&50));
/// assert!(!bounds.check(&-50));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}

/// Check if any predicate is satisfied (const generic, zero-allocation).
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AnyOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().any(|p| p.check(value))
    }

    fn is_infallible(&self) -> bool {
        self.0.iter().all(|p| p.is_infallible())
    }
}

/// Create a predicate that checks if any given predicate is satisfied.
///
/// N-ary disjunction, evaluated left-to-right with short-circuit.
///
/// # Example
///
/// ```rust
/// use palisade::combinator::*;
///
/// let special = any_of([eq(1), eq(5), eq(10)]);
/// assert!(special.check(&5));
/// assert!(!special.check(&7));
/// ```
pub fn any_of<P, const N: usize>(predicates: [P; N]) -> AnyOf<P, N> {
    AnyOf(predicates)
}

/// Check if no predicates are satisfied (const generic, zero-allocation).
///
/// Equivalent to `not(any_of(...))`.
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for NoneOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.iter().any(|p| p.check(value))
    }

    fn is_infallible(&self) -> bool {
        self.0.iter().all(|p| p.is_infallible())
    }
}

/// Create a predicate that checks if no given predicates are satisfied.
///
/// # Example
///
/// ```rust
/// use palisade::combinator::*;
///
/// let no_special = none_of([eq(1), eq(5), eq(10)]);
/// assert!(no_special.check(&7));
/// assert!(!no_special.check(&5));
/// ```
pub fn none_of<P, const N: usize>(predicates: [P; N]) -> NoneOf<P, N> {
    NoneOf(predicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{eq, gt, lt};

    #[test]
    fn test_and() {
        let p = gt(0).and(lt(10));
        assert!(p.check(&5));
        assert!(!p.check(&0));
        assert!(!p.check(&10));
    }

    #[test]
    fn test_or() {
        let p = lt(0).or(gt(100));
        assert!(p.check(&-5));
        assert!(p.check(&150));
        assert!(!p.check(&50));
    }

    #[test]
    fn test_not() {
        let p = gt(0).not();
        assert!(p.check(&-5));
        assert!(p.check(&0));
        assert!(!p.check(&5));
    }

    #[test]
    fn test_if_selects_branch() {
        let p = if_(lt(0), |x: &i32| x % 2 == 0, lt(100));
        assert!(p.check(&-4));
        assert!(!p.check(&-3));
        assert!(p.check(&50));
        assert!(!p.check(&150));
    }

    #[test]
    fn test_if_only_selected_branch_runs() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static TRUE_RUNS: AtomicUsize = AtomicUsize::new(0);
        static FALSE_RUNS: AtomicUsize = AtomicUsize::new(0);

        let when_true = |_: &i32| {
            TRUE_RUNS.fetch_add(1, Ordering::SeqCst);
            true
        };
        let when_false = |_: &i32| {
            FALSE_RUNS.fetch_add(1, Ordering::SeqCst);
            true
        };
        let p = if_(gt(0), when_true, when_false);

        assert!(p.check(&1));
        assert_eq!(TRUE_RUNS.load(Ordering::SeqCst), 1);
        assert_eq!(FALSE_RUNS.load(Ordering::SeqCst), 0);

        assert!(p.check(&-1));
        assert_eq!(TRUE_RUNS.load(Ordering::SeqCst), 1);
        assert_eq!(FALSE_RUNS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_constant() {
        assert!(constant(true).check(&0));
        assert!(!constant(false).check(&0));
        assert!(Predicate::<i32>::is_infallible(&constant(true)));
    }

    #[test]
    fn test_thunk() {
        let p = thunk(|| true);
        assert!(p.check(&"ignored"));
        // Nothing is known about an arbitrary callable
        assert!(!Predicate::<str>::is_infallible(&p));
    }

    #[test]
    fn test_closure_as_predicate() {
        let is_even = |x: &i32| x % 2 == 0;
        assert!(is_even.check(&4));
        assert!(!is_even.check(&3));

        let even_and_positive = is_even.and(gt(0));
        assert!(even_and_positive.check(&4));
        assert!(!even_and_positive.check(&-4));
    }

    #[test]
    fn test_all_of() {
        let bounds = all_of([gt(0), gt(-10), gt(-100)]);
        assert!(bounds.check(&50));
        assert!(!bounds.check(&-50));
    }

    #[test]
    fn test_any_of() {
        let p = any_of([eq(1), eq(5), eq(10)]);
        assert!(p.check(&1));
        assert!(p.check(&5));
        assert!(p.check(&10));
        assert!(!p.check(&2));
    }

    #[test]
    fn test_none_of() {
        let p = none_of([eq(1), eq(5), eq(10)]);
        assert!(!p.check(&1));
        assert!(!p.check(&5));
        assert!(p.check(&2));
        assert!(p.check(&7));
    }

    #[test]
    fn test_infallible_composition() {
        // Built from no-fail primitives: no-fail
        assert!(Predicate::<i32>::is_infallible(&gt(0).and(lt(10))));
        assert!(Predicate::<i32>::is_infallible(&gt(0).or(lt(10)).not()));
        assert!(Predicate::<i32>::is_infallible(&if_(gt(0), eq(1), eq(2))));

        // A closure operand poisons the classification
        let opaque = |x: &i32| *x > 0;
        assert!(!Predicate::<i32>::is_infallible(&gt(0).and(opaque)));
    }

    #[test]
    fn test_complex_chain() {
        let p = gt(0).and(lt(10)).or(gt(100)).not();
        assert!(p.check(&0));
        assert!(p.check(&50));
        assert!(!p.check(&5));
        assert!(!p.check(&150));
    }
}
