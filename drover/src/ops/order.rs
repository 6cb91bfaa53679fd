use std::cmp::Ordering;

use crate::ops::TraverseExt;
use crate::traverse::{Flow, Traverse};

/// Keep at most `k` elements of a traversal, best first under `cmp`.
///
/// The buffer never grows past `k + 1` entries regardless of input
/// length. Ties insert after existing equals, so selection is stable.
fn select_bounded<P, F>(mut producer: P, k: usize, mut cmp: F) -> Vec<P::Item>
where
    P: Traverse,
    F: FnMut(&P::Item, &P::Item) -> Ordering,
{
    if k == 0 {
        return Vec::new();
    }
    let mut buf: Vec<P::Item> = Vec::with_capacity(k + 1);
    producer.drive(&mut |item| {
        let pos = match buf.binary_search_by(|probe| match cmp(probe, &item) {
            Ordering::Equal => Ordering::Less,
            other => other,
        }) {
            Ok(pos) | Err(pos) => pos,
        };
        if pos < k {
            buf.insert(pos, item);
            buf.truncate(k);
        }
        Flow::Continue
    });
    buf
}

/// Algorithms that rank or order the elements of a traversal.
///
/// The full-sort operations materialize everything; the `min`/`max`
/// family holds a single candidate, and the `_n` variants a buffer of at
/// most `n`, so those never realize the whole input at once.
pub trait TraverseOrder: TraverseExt {
    fn sort(self) -> Vec<Self::Item>
    where
        Self::Item: Ord,
    {
        let mut items = self.to_vec();
        items.sort();
        items
    }

    /// Sort under a caller comparison. The underlying sort is stable.
    fn sort_by<F: FnMut(&Self::Item, &Self::Item) -> Ordering>(
        self,
        cmp: F,
    ) -> Vec<Self::Item> {
        let mut items = self.to_vec();
        items.sort_by(cmp);
        items
    }

    fn min(self) -> Option<Self::Item>
    where
        Self::Item: Ord,
    {
        self.min_by(|a, b| a.cmp(b))
    }

    fn max(self) -> Option<Self::Item>
    where
        Self::Item: Ord,
    {
        self.max_by(|a, b| a.cmp(b))
    }

    /// Smallest and largest element in one pass; `None` on empty input.
    fn minmax(self) -> Option<(Self::Item, Self::Item)>
    where
        Self::Item: Ord + Clone,
    {
        self.minmax_by(|a, b| a.cmp(b))
    }

    /// The first of the smallest elements under `cmp`.
    fn min_by<F: FnMut(&Self::Item, &Self::Item) -> Ordering>(
        mut self,
        mut cmp: F,
    ) -> Option<Self::Item> {
        let mut best: Option<Self::Item> = None;
        self.drive(&mut |item| {
            match &best {
                Some(b) if cmp(&item, b) != Ordering::Less => {}
                _ => best = Some(item),
            }
            Flow::Continue
        });
        best
    }

    /// The first of the largest elements under `cmp`.
    fn max_by<F: FnMut(&Self::Item, &Self::Item) -> Ordering>(
        mut self,
        mut cmp: F,
    ) -> Option<Self::Item> {
        let mut best: Option<Self::Item> = None;
        self.drive(&mut |item| {
            match &best {
                Some(b) if cmp(&item, b) != Ordering::Greater => {}
                _ => best = Some(item),
            }
            Flow::Continue
        });
        best
    }

    fn minmax_by<F: FnMut(&Self::Item, &Self::Item) -> Ordering>(
        mut self,
        mut cmp: F,
    ) -> Option<(Self::Item, Self::Item)>
    where
        Self::Item: Clone,
    {
        let mut extremes: Option<(Self::Item, Self::Item)> = None;
        self.drive(&mut |item| {
            match &mut extremes {
                None => extremes = Some((item.clone(), item)),
                Some((min, max)) => {
                    if cmp(&item, min) == Ordering::Less {
                        *min = item.clone();
                    }
                    if cmp(&item, max) == Ordering::Greater {
                        *max = item;
                    }
                }
            }
            Flow::Continue
        });
        extremes
    }

    fn min_by_key<K: Ord, F: FnMut(&Self::Item) -> K>(self, mut key: F) -> Option<Self::Item> {
        self.min_by(move |a, b| key(a).cmp(&key(b)))
    }

    fn max_by_key<K: Ord, F: FnMut(&Self::Item) -> K>(self, mut key: F) -> Option<Self::Item> {
        self.max_by(move |a, b| key(a).cmp(&key(b)))
    }

    fn minmax_by_key<K: Ord, F: FnMut(&Self::Item) -> K>(
        self,
        mut key: F,
    ) -> Option<(Self::Item, Self::Item)>
    where
        Self::Item: Clone,
    {
        self.minmax_by(move |a, b| key(a).cmp(&key(b)))
    }

    /// The `n` smallest elements, ascending. Short input yields fewer.
    fn min_n(self, n: usize) -> Vec<Self::Item>
    where
        Self::Item: Ord,
    {
        self.min_n_by(n, |a, b| a.cmp(b))
    }

    /// The `n` largest elements, descending.
    fn max_n(self, n: usize) -> Vec<Self::Item>
    where
        Self::Item: Ord,
    {
        self.max_n_by(n, |a, b| a.cmp(b))
    }

    fn min_n_by<F: FnMut(&Self::Item, &Self::Item) -> Ordering>(
        self,
        n: usize,
        cmp: F,
    ) -> Vec<Self::Item> {
        select_bounded(self, n, cmp)
    }

    fn max_n_by<F: FnMut(&Self::Item, &Self::Item) -> Ordering>(
        self,
        n: usize,
        mut cmp: F,
    ) -> Vec<Self::Item> {
        select_bounded(self, n, move |a, b| cmp(b, a))
    }

    fn min_n_by_key<K: Ord, F: FnMut(&Self::Item) -> K>(
        self,
        n: usize,
        mut key: F,
    ) -> Vec<Self::Item> {
        self.min_n_by(n, move |a, b| key(a).cmp(&key(b)))
    }

    fn max_n_by_key<K: Ord, F: FnMut(&Self::Item) -> K>(
        self,
        n: usize,
        mut key: F,
    ) -> Vec<Self::Item> {
        self.max_n_by(n, move |a, b| key(a).cmp(&key(b)))
    }
}

impl<P: TraverseExt> TraverseOrder for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::from_iter;

    #[test]
    fn test_sort() {
        assert_eq!(from_iter([1, 2, 3, 1, 2]).sort(), vec![1, 1, 2, 2, 3]);
        assert_eq!(
            from_iter([1, 2, 3, 1, 2]).sort_by(|a, b| b.cmp(a)),
            vec![3, 2, 2, 1, 1]
        );
        assert!(from_iter(Vec::<i64>::new()).sort().is_empty());
    }

    #[test]
    fn test_min_max() {
        assert_eq!(from_iter([1, 2, 3, 1, 2]).min(), Some(1));
        assert_eq!(from_iter([1, 2, 3, 1, 2]).max(), Some(3));
        assert_eq!(from_iter(Vec::<i64>::new()).min(), None);
        assert_eq!(from_iter(Vec::<i64>::new()).max(), None);
        // reversed comparison flips the extremes
        assert_eq!(from_iter([1, 2, 3, 1, 2]).min_by(|a, b| b.cmp(a)), Some(3));
        assert_eq!(from_iter([1, 2, 3, 1, 2]).max_by(|a, b| b.cmp(a)), Some(1));
    }

    #[test]
    fn test_min_max_by_key() {
        let words = ["albatross", "dog", "horse"];
        assert_eq!(from_iter(words).min(), Some("albatross"));
        assert_eq!(from_iter(words).min_by_key(|w| w.len()), Some("dog"));
        assert_eq!(from_iter(words).max(), Some("horse"));
        assert_eq!(from_iter(words).max_by_key(|w| w.len()), Some("albatross"));
    }

    #[test]
    fn test_min_max_first_wins_ties() {
        let pairs = [("a", 2), ("b", 1), ("c", 1), ("d", 2)];
        assert_eq!(from_iter(pairs).min_by_key(|(_, v)| *v), Some(("b", 1)));
        assert_eq!(from_iter(pairs).max_by_key(|(_, v)| *v), Some(("a", 2)));
    }

    #[test]
    fn test_minmax() {
        assert_eq!(from_iter([1, 2, 3, 1, 2]).minmax(), Some((1, 3)));
        assert_eq!(from_iter([7]).minmax(), Some((7, 7)));
        assert_eq!(from_iter(Vec::<i64>::new()).minmax(), None);
        assert_eq!(
            from_iter([1, 2, 3, 1, 2]).minmax_by(|a, b| b.cmp(a)),
            Some((3, 1))
        );
        let words = ["albatross", "dog", "horse"];
        assert_eq!(
            from_iter(words).minmax_by_key(|w| w.len()),
            Some(("dog", "albatross"))
        );
    }

    #[test]
    fn test_min_n_max_n() {
        let src = [20, 32, 32, 21, 30, 25, 29, 13, 14];
        assert_eq!(from_iter(src).min_n(2), vec![13, 14]);
        assert_eq!(from_iter(src).max_n(2), vec![32, 32]);
        assert_eq!(from_iter([2, 4, 8, 6, 7]).min_n(4), vec![2, 4, 6, 7]);
        assert_eq!(from_iter([0, 0, 0, 0, 0, 0, 1, 3, 2]).max_n(2), vec![3, 2]);
        // n past the input length yields everything, ordered
        assert_eq!(from_iter([3, 1, 2]).min_n(10), vec![1, 2, 3]);
        assert_eq!(from_iter([3, 1, 2]).max_n(10), vec![3, 2, 1]);
        assert!(from_iter([3, 1, 2]).min_n(0).is_empty());
        assert!(from_iter(Vec::<i64>::new()).max_n(3).is_empty());
    }

    #[test]
    fn test_min_n_max_n_by_key() {
        let words = ["albatross", "dog", "horse", "ox"];
        assert_eq!(
            from_iter(words).min_n(2),
            vec!["albatross", "dog"]
        );
        assert_eq!(from_iter(words).max_n(2), vec!["ox", "horse"]);
        assert_eq!(
            from_iter(words).max_n_by_key(2, |w| w.len()),
            vec!["albatross", "horse"]
        );
        assert_eq!(
            from_iter(words).min_n_by_key(2, |w| w.len()),
            vec!["ox", "dog"]
        );
    }

    #[test]
    fn test_min_n_is_stable() {
        let pairs = [("a", 1), ("b", 1), ("c", 0), ("d", 1)];
        assert_eq!(
            from_iter(pairs).min_n_by_key(3, |(_, v)| *v),
            vec![("c", 0), ("a", 1), ("b", 1)]
        );
    }

    #[test]
    fn test_min_n_handles_long_input() {
        let picked = from_iter((0..10_000).rev()).min_n(3);
        assert_eq!(picked, vec![0, 1, 2]);
        assert_eq!(from_iter(0..10_000).max_n(3), vec![9999, 9998, 9997]);
    }
}
