use std::collections::VecDeque;
use std::hash::Hash;
use std::mem;

use ahash::{HashMap, HashMapExt};

use crate::error::{Error, Result};
use crate::matcher::Matcher;
use crate::ops::TraverseExt;
use crate::traverse::{Flow, SizeHint};

/// Per-element classification for [`TraverseGroup::chunk`].
///
/// `Key` extends the current run when the key matches it and starts a new
/// run otherwise. `Alone` always forms a single-element run of its own.
/// `Drop` discards the element and terminates the current run, so the
/// neighbours on either side never merge. Elements and control flow travel
/// in separate variants; no key value is reserved as a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKey<K> {
    Key(K),
    Alone(K),
    Drop,
}

/// Algorithms that reshape a traversal into groups of elements.
pub trait TraverseGroup: TraverseExt {
    /// Split the elements into those satisfying the predicate and the
    /// rest, both in traversal order.
    fn partition<F: FnMut(&Self::Item) -> bool>(
        mut self,
        mut pred: F,
    ) -> (Vec<Self::Item>, Vec<Self::Item>) {
        let mut yes = Vec::new();
        let mut no = Vec::new();
        self.drive(&mut |item| {
            if pred(&item) {
                yes.push(item);
            } else {
                no.push(item);
            }
            Flow::Continue
        });
        (yes, no)
    }

    /// Group the elements by a derived key. Groups appear in order of
    /// their key's first occurrence; within a group the elements keep
    /// traversal order.
    fn group_by<K, F>(mut self, mut key: F) -> Vec<(K, Vec<Self::Item>)>
    where
        K: Hash + Eq + Clone,
        F: FnMut(&Self::Item) -> K,
    {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<(K, Vec<Self::Item>)> = Vec::new();
        self.drive(&mut |item| {
            let k = key(&item);
            let slot = *index.entry(k.clone()).or_insert_with(|| {
                groups.push((k, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(item);
            Flow::Continue
        });
        groups
    }

    /// Break the traversal into consecutive runs of `size` elements; the
    /// final run may be shorter.
    fn each_slice(mut self, size: usize) -> Result<Vec<Vec<Self::Item>>> {
        if size == 0 {
            return Err(Error::InvalidSize);
        }
        if let SizeHint::Infinite = self.size_hint() {
            return Err(Error::Unbounded);
        }
        let mut out = Vec::new();
        let mut current = Vec::with_capacity(size);
        self.drive(&mut |item| {
            current.push(item);
            if current.len() == size {
                out.push(mem::replace(&mut current, Vec::with_capacity(size)));
            }
            Flow::Continue
        });
        if !current.is_empty() {
            out.push(current);
        }
        Ok(out)
    }

    /// Every window of `size` consecutive elements, advancing one element
    /// at a time. Shorter input yields no windows at all.
    fn each_cons(mut self, size: usize) -> Result<Vec<Vec<Self::Item>>>
    where
        Self::Item: Clone,
    {
        if size == 0 {
            return Err(Error::InvalidSize);
        }
        if let SizeHint::Infinite = self.size_hint() {
            return Err(Error::Unbounded);
        }
        let mut out = Vec::new();
        let mut window: VecDeque<Self::Item> = VecDeque::with_capacity(size);
        self.drive(&mut |item| {
            window.push_back(item);
            if window.len() == size {
                out.push(window.iter().cloned().collect());
                window.pop_front();
            }
            Flow::Continue
        });
        Ok(out)
    }

    /// Group consecutive elements sharing a key, as classified per element
    /// by [`ChunkKey`].
    fn chunk<K, F>(mut self, mut classify: F) -> Vec<(K, Vec<Self::Item>)>
    where
        K: PartialEq,
        F: FnMut(&Self::Item) -> ChunkKey<K>,
    {
        let mut out: Vec<(K, Vec<Self::Item>)> = Vec::new();
        let mut current: Option<(K, Vec<Self::Item>)> = None;
        self.drive(&mut |item| {
            match classify(&item) {
                ChunkKey::Key(k) => match &mut current {
                    Some((run_key, items)) if *run_key == k => items.push(item),
                    _ => {
                        if let Some(done) = current.take() {
                            out.push(done);
                        }
                        current = Some((k, vec![item]));
                    }
                },
                ChunkKey::Alone(k) => {
                    if let Some(done) = current.take() {
                        out.push(done);
                    }
                    out.push((k, vec![item]));
                }
                ChunkKey::Drop => {
                    if let Some(done) = current.take() {
                        out.push(done);
                    }
                }
            }
            Flow::Continue
        });
        if let Some(done) = current {
            out.push(done);
        }
        out
    }

    /// Group consecutive elements as long as each adjacent pair satisfies
    /// `same`.
    fn chunk_while<F>(mut self, mut same: F) -> Vec<Vec<Self::Item>>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let mut out = Vec::new();
        let mut current: Vec<Self::Item> = Vec::new();
        self.drive(&mut |item| {
            if let Some(last) = current.last() {
                if !same(last, &item) {
                    out.push(mem::take(&mut current));
                }
            }
            current.push(item);
            Flow::Continue
        });
        if !current.is_empty() {
            out.push(current);
        }
        out
    }

    /// Cut the traversal between every adjacent pair satisfying `split`.
    fn slice_when<F>(self, mut split: F) -> Vec<Vec<Self::Item>>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        self.chunk_while(move |a, b| !split(a, b))
    }

    /// Start a new slice before every element the matcher accepts.
    fn slice_before<M: Matcher<Self::Item>>(self, mut matcher: M) -> Vec<Vec<Self::Item>> {
        self.slice_before_by(move |item| matcher.matches(item))
    }

    /// Start a new slice before every element satisfying the predicate.
    /// The first element always opens the first slice, matching or not.
    fn slice_before_by<F: FnMut(&Self::Item) -> bool>(
        mut self,
        mut pred: F,
    ) -> Vec<Vec<Self::Item>> {
        let mut out = Vec::new();
        let mut current: Vec<Self::Item> = Vec::new();
        self.drive(&mut |item| {
            if pred(&item) && !current.is_empty() {
                out.push(mem::take(&mut current));
            }
            current.push(item);
            Flow::Continue
        });
        if !current.is_empty() {
            out.push(current);
        }
        out
    }

    /// End the current slice after every element the matcher accepts.
    fn slice_after<M: Matcher<Self::Item>>(self, mut matcher: M) -> Vec<Vec<Self::Item>> {
        self.slice_after_by(move |item| matcher.matches(item))
    }

    /// End the current slice after every element satisfying the predicate.
    fn slice_after_by<F: FnMut(&Self::Item) -> bool>(
        mut self,
        mut pred: F,
    ) -> Vec<Vec<Self::Item>> {
        let mut out = Vec::new();
        let mut current: Vec<Self::Item> = Vec::new();
        self.drive(&mut |item| {
            let cut = pred(&item);
            current.push(item);
            if cut {
                out.push(mem::take(&mut current));
            }
            Flow::Continue
        });
        if !current.is_empty() {
            out.push(current);
        }
        out
    }
}

impl<P: TraverseExt> TraverseGroup for P {}
