use super::core::{Driven, Flow, SizeHint, Traverse};

/// Re-exposes another producer's elements paired with a running index.
///
/// `WithIndex` is itself a producer, so every downstream algorithm
/// operates transparently on the `(element, index)` pairs. Wrapping a
/// cursor works the same way: each advance bumps the counter by one.
#[derive(Debug, Clone)]
pub struct WithIndex<P> {
    inner: P,
    index: usize,
}

impl<P> WithIndex<P> {
    pub(crate) fn new(inner: P) -> Self {
        WithIndex { inner, index: 0 }
    }
}

impl<P: Traverse> Traverse for WithIndex<P> {
    type Item = (P::Item, usize);

    fn drive(&mut self, visitor: &mut dyn FnMut(Self::Item) -> Flow) -> Driven {
        let index = &mut self.index;
        self.inner.drive(&mut |item| {
            let i = *index;
            *index += 1;
            visitor((item, i))
        })
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

/// Re-exposes another producer's elements paired with a caller-threaded
/// accumulator: the step closure mutates the state once per element and
/// the producer emits the element alongside a snapshot of the state.
#[derive(Debug, Clone)]
pub struct WithState<P, S, F> {
    inner: P,
    state: S,
    step: F,
}

impl<P, S, F> WithState<P, S, F> {
    pub(crate) fn new(inner: P, state: S, step: F) -> Self {
        WithState { inner, state, step }
    }
}

impl<P, S, F> Traverse for WithState<P, S, F>
where
    P: Traverse,
    S: Clone,
    F: FnMut(&mut S, &P::Item),
{
    type Item = (P::Item, S);

    fn drive(&mut self, visitor: &mut dyn FnMut(Self::Item) -> Flow) -> Driven {
        let state = &mut self.state;
        let step = &mut self.step;
        self.inner.drive(&mut |item| {
            step(state, &item);
            visitor((item, state.clone()))
        })
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::super::producers::from_iter;
    use super::*;

    #[test]
    fn test_with_index_pairs_in_order() {
        let mut collected = Vec::new();
        WithIndex::new(from_iter(["a", "b", "c"])).drive(&mut |pair| {
            collected.push(pair);
            Flow::Continue
        });
        assert_eq!(collected, vec![("a", 0), ("b", 1), ("c", 2)]);
    }

    #[test]
    fn test_with_index_counter_survives_partial_drives() {
        let mut paired = WithIndex::new(from_iter([10, 20, 30]));
        let mut first = None;
        paired.drive(&mut |pair| {
            first = Some(pair);
            Flow::Stop
        });
        assert_eq!(first, Some((10, 0)));
        let mut rest = Vec::new();
        paired.drive(&mut |pair| {
            rest.push(pair);
            Flow::Continue
        });
        assert_eq!(rest, vec![(20, 1), (30, 2)]);
    }

    #[test]
    fn test_with_state_threads_accumulator() {
        let mut collected = Vec::new();
        WithState::new(from_iter([1, 2, 3]), 0, |acc: &mut i32, x: &i32| *acc += x)
            .drive(&mut |pair| {
                collected.push(pair);
                Flow::Continue
            });
        assert_eq!(collected, vec![(1, 1), (2, 3), (3, 6)]);
    }
}
