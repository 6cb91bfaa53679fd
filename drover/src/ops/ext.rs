use std::hash::Hash;

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};

use crate::cursor::Cursor;
use crate::matcher::Matcher;
use crate::traverse::{ByRef, Cycle, Flow, SizeHint, Traverse, WithIndex, WithState};

/// The general-purpose algorithm suite every producer gets for free.
///
/// Everything here is derived purely from [`Traverse::drive`]; traversal
/// order is always the producer's natural order and nothing in this trait
/// reorders elements. Operations that can stop early do so through the
/// visitor protocol, so a `Stop` never costs a full pass.
pub trait TraverseExt: Traverse + Sized {
    /// Borrow this producer so a consuming operation leaves it usable.
    fn by_ref(&mut self) -> ByRef<'_, Self> {
        ByRef(self)
    }

    /// Materialize every element, in order.
    ///
    /// A producer hinting [`SizeHint::Infinite`] yields an empty vector
    /// instead of an attempt to realize an unbounded traversal.
    fn to_vec(mut self) -> Vec<Self::Item> {
        let mut out = match self.size_hint() {
            SizeHint::Infinite => return Vec::new(),
            SizeHint::Exact(n) | SizeHint::AtMost(n) => Vec::with_capacity(n),
            SizeHint::Unknown => Vec::new(),
        };
        self.drive(&mut |item| {
            out.push(item);
            Flow::Continue
        });
        out
    }

    /// Collect `(key, value)` elements into a hash map. A key seen more
    /// than once keeps its last value. Elements of any other shape do not
    /// satisfy the item bound, so there is no wrong-shape failure to
    /// report at run time.
    fn to_map<K, V>(mut self) -> HashMap<K, V>
    where
        Self: Traverse<Item = (K, V)>,
        K: Hash + Eq,
    {
        let mut out = HashMap::new();
        self.drive(&mut |(key, value)| {
            out.insert(key, value);
            Flow::Continue
        });
        out
    }

    /// Collect into a hash map through a function producing the
    /// `(key, value)` pair per element.
    fn to_map_by<K, V, F>(mut self, mut f: F) -> HashMap<K, V>
    where
        K: Hash + Eq,
        F: FnMut(Self::Item) -> (K, V),
    {
        let mut out = HashMap::new();
        self.drive(&mut |item| {
            let (key, value) = f(item);
            out.insert(key, value);
            Flow::Continue
        });
        out
    }

    /// Visit every element for its side effect.
    fn each<F: FnMut(Self::Item)>(mut self, mut f: F) {
        self.drive(&mut |item| {
            f(item);
            Flow::Continue
        });
    }

    fn map<B, F: FnMut(Self::Item) -> B>(mut self, mut f: F) -> Vec<B> {
        let mut out = Vec::new();
        self.drive(&mut |item| {
            out.push(f(item));
            Flow::Continue
        });
        out
    }

    fn flat_map<B, I, F>(mut self, mut f: F) -> Vec<B>
    where
        I: IntoIterator<Item = B>,
        F: FnMut(Self::Item) -> I,
    {
        let mut out = Vec::new();
        self.drive(&mut |item| {
            out.extend(f(item));
            Flow::Continue
        });
        out
    }

    fn first(mut self) -> Option<Self::Item> {
        let mut out = None;
        self.drive(&mut |item| {
            out = Some(item);
            Flow::Stop
        });
        out
    }

    /// The first `n` elements; short input yields fewer.
    fn first_n(self, n: usize) -> Vec<Self::Item> {
        self.take(n)
    }

    fn take(mut self, n: usize) -> Vec<Self::Item> {
        if n == 0 {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(n);
        self.drive(&mut |item| {
            out.push(item);
            if out.len() == n {
                Flow::Stop
            } else {
                Flow::Continue
            }
        });
        out
    }

    fn take_while<F: FnMut(&Self::Item) -> bool>(mut self, mut pred: F) -> Vec<Self::Item> {
        let mut out = Vec::new();
        self.drive(&mut |item| {
            if pred(&item) {
                out.push(item);
                Flow::Continue
            } else {
                Flow::Stop
            }
        });
        out
    }

    fn drop(mut self, n: usize) -> Vec<Self::Item> {
        let mut skipped = 0;
        let mut out = Vec::new();
        self.drive(&mut |item| {
            if skipped < n {
                skipped += 1;
            } else {
                out.push(item);
            }
            Flow::Continue
        });
        out
    }

    fn drop_while<F: FnMut(&Self::Item) -> bool>(mut self, mut pred: F) -> Vec<Self::Item> {
        let mut dropping = true;
        let mut out = Vec::new();
        self.drive(&mut |item| {
            if dropping && pred(&item) {
                return Flow::Continue;
            }
            dropping = false;
            out.push(item);
            Flow::Continue
        });
        out
    }

    fn contains(mut self, target: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        let mut found = false;
        self.drive(&mut |item| {
            if item == *target {
                found = true;
                Flow::Stop
            } else {
                Flow::Continue
            }
        });
        found
    }

    /// Visit elements in reverse order. Materializes the traversal first.
    fn reverse_each<F: FnMut(Self::Item)>(self, mut f: F) {
        for item in self.to_vec().into_iter().rev() {
            f(item);
        }
    }

    /// Keep the elements satisfying the predicate, in order.
    fn select<F: FnMut(&Self::Item) -> bool>(mut self, mut pred: F) -> Vec<Self::Item> {
        let mut out = Vec::new();
        self.drive(&mut |item| {
            if pred(&item) {
                out.push(item);
            }
            Flow::Continue
        });
        out
    }

    /// Drop the elements satisfying the predicate, in order.
    fn reject<F: FnMut(&Self::Item) -> bool>(self, mut pred: F) -> Vec<Self::Item> {
        self.select(move |item| !pred(item))
    }

    /// Keep the elements the matcher accepts.
    fn grep<M: Matcher<Self::Item>>(mut self, mut matcher: M) -> Vec<Self::Item> {
        let mut out = Vec::new();
        self.drive(&mut |item| {
            if matcher.matches(&item) {
                out.push(item);
            }
            Flow::Continue
        });
        out
    }

    /// Keep the elements the matcher accepts, transformed through `f`.
    fn grep_map<M, B, F>(mut self, mut matcher: M, mut f: F) -> Vec<B>
    where
        M: Matcher<Self::Item>,
        F: FnMut(Self::Item) -> B,
    {
        let mut out = Vec::new();
        self.drive(&mut |item| {
            if matcher.matches(&item) {
                out.push(f(item));
            }
            Flow::Continue
        });
        out
    }

    /// Keep the elements the matcher rejects.
    fn grep_v<M: Matcher<Self::Item>>(mut self, mut matcher: M) -> Vec<Self::Item> {
        let mut out = Vec::new();
        self.drive(&mut |item| {
            if !matcher.matches(&item) {
                out.push(item);
            }
            Flow::Continue
        });
        out
    }

    /// Keep the elements the matcher rejects, transformed through `f`.
    fn grep_v_map<M, B, F>(mut self, mut matcher: M, mut f: F) -> Vec<B>
    where
        M: Matcher<Self::Item>,
        F: FnMut(Self::Item) -> B,
    {
        let mut out = Vec::new();
        self.drive(&mut |item| {
            if !matcher.matches(&item) {
                out.push(f(item));
            }
            Flow::Continue
        });
        out
    }

    /// The first element satisfying the predicate, in traversal order.
    fn find<F: FnMut(&Self::Item) -> bool>(mut self, mut pred: F) -> Option<Self::Item> {
        let mut out = None;
        self.drive(&mut |item| {
            if pred(&item) {
                out = Some(item);
                Flow::Stop
            } else {
                Flow::Continue
            }
        });
        out
    }

    /// Like [`find`](TraverseExt::find), with a fallback for no match.
    fn find_or<F: FnMut(&Self::Item) -> bool>(self, fallback: Self::Item, pred: F) -> Self::Item {
        self.find(pred).unwrap_or(fallback)
    }

    /// Position of the first element equal to `target`.
    fn find_index(self, target: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.find_index_by(|item| item == target)
    }

    /// Position of the first element satisfying the predicate.
    fn find_index_by<F: FnMut(&Self::Item) -> bool>(mut self, mut pred: F) -> Option<usize> {
        let mut index = 0;
        let mut out = None;
        self.drive(&mut |item| {
            if pred(&item) {
                out = Some(index);
                Flow::Stop
            } else {
                index += 1;
                Flow::Continue
            }
        });
        out
    }

    fn count(mut self) -> usize {
        let mut n = 0;
        self.drive(&mut |_| {
            n += 1;
            Flow::Continue
        });
        n
    }

    fn count_value(self, target: &Self::Item) -> usize
    where
        Self::Item: PartialEq,
    {
        self.count_by(|item| item == target)
    }

    fn count_by<F: FnMut(&Self::Item) -> bool>(mut self, mut pred: F) -> usize {
        let mut n = 0;
        self.drive(&mut |item| {
            if pred(&item) {
                n += 1;
            }
            Flow::Continue
        });
        n
    }

    /// True when every element satisfies the predicate; vacuously true on
    /// empty input.
    fn all<F: FnMut(&Self::Item) -> bool>(mut self, mut pred: F) -> bool {
        let mut ok = true;
        self.drive(&mut |item| {
            if pred(&item) {
                Flow::Continue
            } else {
                ok = false;
                Flow::Stop
            }
        });
        ok
    }

    fn any<F: FnMut(&Self::Item) -> bool>(mut self, mut pred: F) -> bool {
        let mut found = false;
        self.drive(&mut |item| {
            if pred(&item) {
                found = true;
                Flow::Stop
            } else {
                Flow::Continue
            }
        });
        found
    }

    fn none<F: FnMut(&Self::Item) -> bool>(self, pred: F) -> bool {
        !self.any(pred)
    }

    /// True when exactly one element satisfies the predicate. A first
    /// match alone is not enough to stop: the scan continues until a
    /// second match rules the answer out or the producer exhausts.
    fn one<F: FnMut(&Self::Item) -> bool>(mut self, mut pred: F) -> bool {
        let mut matches = 0;
        self.drive(&mut |item| {
            if pred(&item) {
                matches += 1;
                if matches > 1 {
                    return Flow::Stop;
                }
            }
            Flow::Continue
        });
        matches == 1
    }

    /// Pair every element with its running index.
    fn with_index(self) -> WithIndex<Self> {
        WithIndex::new(self)
    }

    /// Pair every element with a caller-threaded accumulator snapshot.
    fn with_state<S, F>(self, seed: S, step: F) -> WithState<Self, S, F>
    where
        S: Clone,
        F: FnMut(&mut S, &Self::Item),
    {
        WithState::new(self, seed, step)
    }

    /// Hand this producer to the suspension engine for pull-style
    /// consumption.
    fn into_cursor<'a>(self) -> Cursor<'a, Self::Item>
    where
        Self: 'a,
    {
        Cursor::new(self)
    }

    /// Repeat the full traversal `times` times, or indefinitely for
    /// `None`. Cycling an empty producer terminates immediately either
    /// way.
    fn cycle(self, times: Option<usize>) -> Cycle<Self>
    where
        Self: Clone,
    {
        Cycle::new(self, times)
    }

    /// Pair elements positionally with another producer's. The other side
    /// is materialized, so it may be push-only; when it is shorter, the
    /// missing positions fill with `None`. The output always has exactly
    /// this producer's length.
    fn zip<Q: Traverse>(self, other: Q) -> Vec<(Self::Item, Option<Q::Item>)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// [`zip`](TraverseExt::zip) through a combining function.
    fn zip_with<Q, B, F>(mut self, other: Q, mut f: F) -> Vec<B>
    where
        Q: Traverse,
        F: FnMut(Self::Item, Option<Q::Item>) -> B,
    {
        let mut rest = other.to_vec().into_iter();
        let mut out = Vec::new();
        self.drive(&mut |item| {
            out.push(f(item, rest.next()));
            Flow::Continue
        });
        out
    }

    /// Drop duplicate elements, keeping the first occurrence of each and
    /// the relative order of what is kept.
    fn uniq(self) -> Vec<Self::Item>
    where
        Self::Item: Hash + Eq + Clone,
    {
        self.uniq_by(|item| item.clone())
    }

    /// Deduplicate by a derived key.
    fn uniq_by<K, F>(mut self, mut key: F) -> Vec<Self::Item>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        self.drive(&mut |item| {
            if seen.insert(key(&item)) {
                out.push(item);
            }
            Flow::Continue
        });
        out
    }
}

impl<P: Traverse> TraverseExt for P {}
