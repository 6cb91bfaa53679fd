use std::marker::PhantomData;

use super::core::{Driven, Flow, SizeHint, Traverse};

/// A producer backed by any [`Iterator`].
///
/// The pull and push worlds are kept deliberately separate: iterators do
/// not implement [`Traverse`] directly, they are wrapped through
/// [`from_iter`]. This keeps method names from colliding with the
/// iterator adapters of the same name.
#[derive(Debug, Clone)]
pub struct IterProducer<I> {
    iter: I,
}

/// Wrap anything iterable as a producer.
pub fn from_iter<I: IntoIterator>(iterable: I) -> IterProducer<I::IntoIter> {
    IterProducer {
        iter: iterable.into_iter(),
    }
}

impl<I: Iterator> Traverse for IterProducer<I> {
    type Item = I::Item;

    fn drive(&mut self, visitor: &mut dyn FnMut(Self::Item) -> Flow) -> Driven {
        for item in &mut self.iter {
            if let Flow::Stop = visitor(item) {
                return Driven::Stopped;
            }
        }
        Driven::Completed
    }

    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint().into()
    }
}

/// A push-only producer defined by a plain drive function.
///
/// This is the smallest possible way to implement the contract and the
/// shape the tests use to model sources that genuinely cannot be pulled.
#[derive(Debug, Clone)]
pub struct FnProducer<T, F> {
    f: F,
    // ties the element type to the producer; the drive function alone
    // leaves it unconstrained
    _item: PhantomData<fn() -> T>,
}

/// Build a producer from its drive function.
pub fn from_fn<T, F>(f: F) -> FnProducer<T, F>
where
    F: FnMut(&mut dyn FnMut(T) -> Flow) -> Driven,
{
    FnProducer {
        f,
        _item: PhantomData,
    }
}

impl<T, F> Traverse for FnProducer<T, F>
where
    F: FnMut(&mut dyn FnMut(T) -> Flow) -> Driven,
{
    type Item = T;

    fn drive(&mut self, visitor: &mut dyn FnMut(T) -> Flow) -> Driven {
        (self.f)(visitor)
    }
}

/// Repeats a producer's full traversal a bounded or unbounded number of
/// times. Built by [`TraverseExt::cycle`](crate::ops::TraverseExt::cycle).
///
/// The inner producer must be `Clone` so every pass starts fresh.
/// Indefinite cycling of an empty producer completes immediately instead
/// of looping forever.
#[derive(Debug, Clone)]
pub struct Cycle<P> {
    inner: P,
    times: Option<usize>,
}

impl<P> Cycle<P> {
    pub(crate) fn new(inner: P, times: Option<usize>) -> Self {
        Cycle { inner, times }
    }
}

impl<P: Traverse + Clone> Traverse for Cycle<P> {
    type Item = P::Item;

    fn drive(&mut self, visitor: &mut dyn FnMut(Self::Item) -> Flow) -> Driven {
        let mut remaining = self.times;
        if remaining == Some(0) {
            return Driven::Completed;
        }
        loop {
            let mut produced = false;
            let mut pass = self.inner.clone();
            let outcome = pass.drive(&mut |item| {
                produced = true;
                visitor(item)
            });
            if let Driven::Stopped = outcome {
                return Driven::Stopped;
            }
            if !produced {
                // empty input: even an unbounded cycle terminates
                return Driven::Completed;
            }
            if let Some(n) = &mut remaining {
                *n -= 1;
                if *n == 0 {
                    return Driven::Completed;
                }
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        match (self.times, self.inner.size_hint()) {
            (_, SizeHint::Exact(0)) => SizeHint::Exact(0),
            (Some(0), _) => SizeHint::Exact(0),
            (Some(times), SizeHint::Exact(len)) => match len.checked_mul(times) {
                Some(total) => SizeHint::Exact(total),
                None => SizeHint::Unknown,
            },
            (Some(times), SizeHint::AtMost(len)) => match len.checked_mul(times) {
                Some(total) => SizeHint::AtMost(total),
                None => SizeHint::Unknown,
            },
            (Some(_), _) => SizeHint::Unknown,
            // the inner producer may still turn out to be empty, but a
            // hint must never promise less than the truth
            (None, _) => SizeHint::Infinite,
        }
    }
}
