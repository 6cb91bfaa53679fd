//! Match tests for the grep and slice-boundary families.
//!
//! A matcher is a first-class match test over borrowed elements. The
//! three constructors cover the usual shapes: an arbitrary predicate, an
//! equality target, and a range containment test.

use std::ops::RangeBounds;

/// A match test applied to borrowed elements.
pub trait Matcher<T> {
    fn matches(&mut self, value: &T) -> bool;
}

/// Matches through an arbitrary predicate. See [`by`].
pub struct Pred<F> {
    pred: F,
}

/// Matcher from a predicate.
pub fn by<T, F: FnMut(&T) -> bool>(pred: F) -> Pred<F> {
    Pred { pred }
}

impl<T, F: FnMut(&T) -> bool> Matcher<T> for Pred<F> {
    fn matches(&mut self, value: &T) -> bool {
        (self.pred)(value)
    }
}

/// Matches elements equal to a target value. See [`eq`].
pub struct EqTo<V> {
    target: V,
}

/// Matcher by equality with `target`.
pub fn eq<V>(target: V) -> EqTo<V> {
    EqTo { target }
}

impl<T, V> Matcher<T> for EqTo<V>
where
    T: PartialEq<V>,
{
    fn matches(&mut self, value: &T) -> bool {
        *value == self.target
    }
}

/// Matches elements contained in a range. See [`within`].
pub struct Within<R> {
    range: R,
}

/// Matcher by range containment.
pub fn within<R>(range: R) -> Within<R> {
    Within { range }
}

impl<T, R> Matcher<T> for Within<R>
where
    T: PartialOrd,
    R: RangeBounds<T>,
{
    fn matches(&mut self, value: &T) -> bool {
        self.range.contains(value)
    }
}
