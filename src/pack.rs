//! Persistent ordered rule packs
//!
//! A [`RulePack`] is the ordered constraint list attached to a container
//! schema. Insertion order is evaluation order, and every structural
//! operation preserves it.
//!
//! Packs are persistent values: no operation mutates an existing pack, each
//! returns a new one. Rules themselves are reference-counted, so derived
//! packs share their elements with their ancestors.
//!
//! # Example
//!
//! ```rust
//! use palisade::RulePack;
//! use palisade::combinator::{ge, lt, Predicate};
//!
//! let base = RulePack::new().add(ge(0)).add(lt(100));
//! let strict = base.add(|x: &i32| x % 2 == 0);
//!
//! assert_eq!(base.len(), 2);
//! assert_eq!(strict.len(), 3);
//! assert!(strict.check(&42));
//! assert!(!strict.check(&43));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::combinator::Predicate;

/// An ordered, persistent sequence of rules over values of type T.
///
/// Evaluation runs in insertion order with short-circuit AND semantics.
/// Structural operations (append, concatenate, retrieve, slice) never
/// mutate; they produce new packs that share rule storage with the
/// originals.
///
/// Index-based retrieval permits duplication and reordering: an index may
/// be selected more than once, and indices may be given in any order. An
/// out-of-range index is a programmer error and panics like slice indexing.
pub struct RulePack<T> {
    rules: Arc<[Arc<dyn Predicate<T>>]>,
}

impl<T> RulePack<T> {
    /// Create an empty pack.
    pub fn new() -> Self {
        Self::from_rules(Vec::new())
    }

    fn from_rules(rules: Vec<Arc<dyn Predicate<T>>>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// Append a rule, returning a new pack.
    ///
    /// # Example
    ///
    /// ```rust
    /// use palisade::RulePack;
    /// use palisade::combinator::gt;
    ///
    /// let empty = RulePack::<i32>::new();
    /// let one = empty.add(gt(0));
    /// assert_eq!(empty.len(), 0);
    /// assert_eq!(one.len(), 1);
    /// ```
    pub fn add<P>(&self, rule: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        let mut rules = self.rules.to_vec();
        rules.push(Arc::new(rule));
        Self::from_rules(rules)
    }

    /// Concatenate another pack onto this one, returning a new pack.
    ///
    /// The other pack's rules follow this pack's, in their own order.
    pub fn add_pack(&self, other: &Self) -> Self {
        let mut rules = self.rules.to_vec();
        rules.extend(other.rules.iter().cloned());
        Self::from_rules(rules)
    }

    /// The empty pack.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Retrieve the rule at `index` as a singleton pack.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> Self {
        Self::from_rules(vec![self.rules[index].clone()])
    }

    /// Retrieve the rules at the given positions, in the given order.
    ///
    /// The result's order is exactly the order of the requested indices,
    /// not their sorted order; duplicates are allowed.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use palisade::RulePack;
    /// use palisade::combinator::{eq, gt, lt, Predicate};
    ///
    /// let pack = RulePack::<i32>::new().add(eq(1)).add(gt(0)).add(lt(9));
    /// let reordered = pack.get_many(&[2, 0, 2]);
    /// assert_eq!(reordered.len(), 3);
    /// ```
    pub fn get_many(&self, indices: &[usize]) -> Self {
        Self::from_rules(indices.iter().map(|&i| self.rules[i].clone()).collect())
    }

    /// Retrieve a contiguous slice of `len` rules starting at `start`.
    ///
    /// Equal to `get_many(&[start, start + 1, ..., start + len - 1])`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn get_range(&self, start: usize, len: usize) -> Self {
        Self::from_rules(self.rules[start..start + len].to_vec())
    }

    /// Number of rules in the pack.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the pack contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Position of the first rule that `value` violates, if any.
    ///
    /// Rules are evaluated in pack order; evaluation stops at the first
    /// failure.
    pub fn first_violation(&self, value: &T) -> Option<usize> {
        self.rules.iter().position(|rule| !rule.check(value))
    }
}

// A pack is itself a predicate: the ordered AND of its rules.
impl<T> Predicate<T> for RulePack<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.first_violation(value).is_none()
    }

    fn is_infallible(&self) -> bool {
        self.rules.iter().all(|rule| rule.is_infallible())
    }
}

impl<T> Clone for RulePack<T> {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
        }
    }
}

impl<T> Default for RulePack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RulePack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RulePack")
            .field("len", &self.rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{eq, ge, gt, lt};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_add_preserves_order() {
        let pack = RulePack::new().add(ge(0)).add(lt(10));
        assert_eq!(pack.len(), 2);
        assert!(pack.check(&5));
        assert!(!pack.check(&-1));
        assert!(!pack.check(&10));
    }

    #[test]
    fn test_add_is_persistent() {
        let base = RulePack::<i32>::new().add(gt(0));
        let extended = base.add(lt(10));
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert!(base.check(&50));
        assert!(!extended.check(&50));
    }

    #[test]
    fn test_add_pack() {
        let low = RulePack::<i32>::new().add(ge(0));
        let high = RulePack::<i32>::new().add(lt(10));
        let both = low.add_pack(&high);
        assert_eq!(both.len(), 2);
        assert!(both.check(&5));
        assert!(!both.check(&-1));
        assert!(!both.check(&99));
    }

    #[test]
    fn test_clear() {
        let pack = RulePack::<i32>::new().add(gt(0)).add(lt(10));
        let cleared = pack.clear();
        assert!(cleared.is_empty());
        assert_eq!(pack.len(), 2);
        // An empty pack admits everything
        assert!(cleared.check(&-999));
    }

    #[test]
    fn test_get_singleton() {
        let pack = RulePack::<i32>::new().add(gt(0)).add(lt(10));
        let only_upper = pack.get(1);
        assert_eq!(only_upper.len(), 1);
        assert!(only_upper.check(&-5));
        assert!(!only_upper.check(&10));
    }

    #[test]
    fn test_get_many_order_and_duplicates() {
        let pack = RulePack::<i32>::new().add(eq(1)).add(eq(2)).add(eq(3));
        // Requested order, not sorted order; duplicates allowed
        let picked = pack.get_many(&[2, 0, 2]);
        assert_eq!(picked.len(), 3);
        // eq(3) AND eq(1) AND eq(3) is unsatisfiable, but each rule is intact
        assert!(!picked.check(&3));
        assert!(picked.get(0).check(&3));
        assert!(picked.get(1).check(&1));
        assert!(picked.get(2).check(&3));
    }

    #[test]
    fn test_get_range() {
        let pack = RulePack::<i32>::new()
            .add(eq(1))
            .add(eq(2))
            .add(eq(3))
            .add(eq(4));
        let middle = pack.get_range(1, 2);
        assert_eq!(middle.len(), 2);
        assert!(middle.get(0).check(&2));
        assert!(middle.get(1).check(&3));
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let pack = RulePack::<i32>::new().add(eq(1));
        let _ = pack.get(1);
    }

    #[test]
    fn test_first_violation_reports_first_index() {
        let pack = RulePack::<i32>::new().add(ge(0)).add(lt(10)).add(eq(5));
        assert_eq!(pack.first_violation(&5), None);
        assert_eq!(pack.first_violation(&-1), Some(0));
        assert_eq!(pack.first_violation(&20), Some(1));
        assert_eq!(pack.first_violation(&7), Some(2));
    }

    #[test]
    fn test_evaluation_order_and_short_circuit() {
        let order = Arc::new(AtomicUsize::new(0));

        let o1 = Arc::clone(&order);
        let first = move |_: &i32| {
            o1.fetch_add(1, Ordering::SeqCst);
            false
        };
        let o2 = Arc::clone(&order);
        let second = move |_: &i32| {
            o2.fetch_add(1, Ordering::SeqCst);
            true
        };

        let pack = RulePack::new().add(first).add(second);
        assert_eq!(pack.first_violation(&0), Some(0));
        // The failing first rule short-circuits the second
        assert_eq!(order.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_pack_is_a_predicate() {
        let inner = RulePack::<i32>::new().add(ge(0)).add(lt(10));
        let outer = RulePack::<i32>::new().add(inner);
        assert!(outer.check(&5));
        assert!(!outer.check(&-1));
    }

    #[test]
    fn test_infallible_classification() {
        let built_in = RulePack::<i32>::new().add(ge(0)).add(lt(10));
        assert!(built_in.is_infallible());

        let with_closure = built_in.add(|x: &i32| *x != 7);
        assert!(!with_closure.is_infallible());
    }

    #[test]
    fn test_debug() {
        let pack = RulePack::<i32>::new().add(ge(0));
        let debug = format!("{:?}", pack);
        assert!(debug.contains("RulePack"));
        assert!(debug.contains('1'));
    }
}
