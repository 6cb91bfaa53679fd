use crate::numeric::{Number, Summation};
use crate::ops::TraverseExt;
use crate::traverse::Flow;

/// Algorithms that fold a traversal down to a single value.
pub trait TraverseReduce: TraverseExt {
    /// Fold the elements left to right, seeding with the first element.
    /// `None` on empty input.
    fn inject<F: FnMut(Self::Item, Self::Item) -> Self::Item>(
        mut self,
        mut f: F,
    ) -> Option<Self::Item> {
        let mut acc: Option<Self::Item> = None;
        self.drive(&mut |item| {
            acc = Some(match acc.take() {
                None => item,
                Some(so_far) => f(so_far, item),
            });
            Flow::Continue
        });
        acc
    }

    /// Fold the elements left to right onto an explicit seed. The seed
    /// comes back untouched on empty input.
    fn inject_with<A, F: FnMut(A, Self::Item) -> A>(mut self, seed: A, mut f: F) -> A {
        let mut acc = Some(seed);
        self.drive(&mut |item| {
            if let Some(so_far) = acc.take() {
                acc = Some(f(so_far, item));
            }
            Flow::Continue
        });
        match acc {
            Some(folded) => folded,
            None => unreachable!("fold accumulator is refilled on every step"),
        }
    }

    /// Numerically exact sum of the elements. Empty input sums to the
    /// integer zero; otherwise the result takes the widest kind seen.
    fn sum(self) -> Number
    where
        Self::Item: Into<Number>,
    {
        let mut acc = Summation::new();
        self.each(|item| acc.absorb(item.into()));
        acc.finish()
    }

    /// Sum onto an explicit starting value, which also seeds the result
    /// kind.
    fn sum_with(self, init: impl Into<Number>) -> Number
    where
        Self::Item: Into<Number>,
    {
        let mut acc = Summation::seeded(init.into());
        self.each(|item| acc.absorb(item.into()));
        acc.finish()
    }

    /// Sum a numeric projection of the elements.
    fn sum_by<N, F>(self, mut f: F) -> Number
    where
        N: Into<Number>,
        F: FnMut(Self::Item) -> N,
    {
        let mut acc = Summation::new();
        self.each(|item| acc.absorb(f(item).into()));
        acc.finish()
    }
}

impl<P: TraverseExt> TraverseReduce for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Kind;
    use crate::traverse::from_iter;

    #[test]
    fn test_inject() {
        assert_eq!(from_iter([1, 2, 3, 1, 2]).inject(|a, b| a * b), Some(12));
        assert_eq!(
            from_iter([1, 2, 3, 1, 2]).inject(|z, x| z * 2 + x),
            Some(48)
        );
        assert_eq!(from_iter([5, 7]).inject(|a, b| a * b), Some(35));
        assert_eq!(from_iter([42]).inject(|a, b| a + b), Some(42));
        assert_eq!(from_iter(Vec::<i64>::new()).inject(|a, b| a + b), None);
    }

    #[test]
    fn test_inject_with() {
        assert_eq!(from_iter([1, 2, 3, 1, 2]).inject_with(2, |a, b| a * b), 24);
        assert_eq!(from_iter([5, 7]).inject_with(3, |a, b| a * b), 105);
        assert_eq!(from_iter(Vec::<i64>::new()).inject_with(9, |a, b| a + b), 9);
    }

    #[test]
    fn test_inject_with_non_numeric() {
        let joined = from_iter(["a", "b", "c"]).inject_with(String::new(), |acc, s| acc + s);
        assert_eq!(joined, "abc");
        let flat = from_iter([vec![1], vec![2, 3]]).inject_with(Vec::new(), |mut acc, mut v| {
            acc.append(&mut v);
            acc
        });
        assert_eq!(flat, vec![1, 2, 3]);
    }

    #[test]
    fn test_inject_widens_on_overflow() {
        let total = from_iter([Number::from(i64::MAX), Number::from(i64::MAX)])
            .inject(|a, b| a + b);
        let total = total.unwrap();
        assert_eq!(total.kind(), Kind::Integer);
        assert_eq!(total, Number::from(i64::MAX) + Number::from(i64::MAX));
    }

    #[test]
    fn test_sum() {
        assert_eq!(from_iter([3, 5, 7]).sum(), Number::from(15));
        assert_eq!(from_iter(Vec::<i64>::new()).sum(), Number::from(0));
        assert_eq!(from_iter(Vec::<i64>::new()).sum().kind(), Kind::Integer);
        assert_eq!(from_iter([3, 5, 7]).sum_with(10), Number::from(25));
    }

    #[test]
    fn test_sum_kind_follows_the_seed() {
        let total = from_iter([1, 2]).sum_with(10.0);
        assert_eq!(total.kind(), Kind::Float);
        assert_eq!(total, Number::from(13.0));
    }

    #[test]
    fn test_sum_by() {
        assert_eq!(from_iter([1, 2]).sum_by(|v| v * 2), Number::from(6));
        let doubled = from_iter([1, 2]).map(|v| v * 2);
        assert_eq!(from_iter(doubled).sum_with(10), Number::from(16));
    }

    #[test]
    fn test_sum_widens_exactly() {
        let total = from_iter([
            Number::from(1),
            Number::ratio(1, 2),
            Number::ratio(1, 3),
        ])
        .sum();
        assert_eq!(total.kind(), Kind::Ratio);
        assert_eq!(total, Number::ratio(11, 6));
    }
}
