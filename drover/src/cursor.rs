//! The suspension engine: pull-style cursors over push-only producers.
//!
//! A producer only knows how to push its elements through a visitor. A
//! [`Cursor`] lets a caller advance through those elements one at a time
//! anyway: the producer's drive loop runs on a scoped stackful coroutine
//! and is parked at the exact point where the visitor is invoked, handing
//! the element - and control - back to the caller until the next
//! [`advance`](Cursor::advance).
//!
//! The handoff is synchronous and ordered. At most one of {driver,
//! consumer} runs at a time, suspension is a pure control-flow transfer
//! (no I/O wait, no preemption), and a cursor is never safe to share
//! between threads.

use generator::{done, Gn, LocalGenerator};

use crate::traverse::{Driven, Flow, Traverse};

/// Lifecycle of a cursor's paused drive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// The producer has not been entered yet.
    Fresh,
    /// The drive loop is executing right now.
    Running,
    /// The drive loop is parked mid-flight, waiting for an advance.
    Suspended,
    /// The producer is exhausted. Terminal; advancing further is a no-op.
    Finished,
}

/// A pull-style, resumable view over a producer's traversal.
///
/// Obtained from [`Cursor::new`] or
/// [`TraverseExt::into_cursor`](crate::ops::TraverseExt::into_cursor).
/// The cursor takes exclusive control of the producer for its lifetime.
/// Dropping an unexhausted cursor cancels the coroutine, which unwinds
/// the suspended drive loop immediately: the producer's remaining side
/// effects never run, and its `Drop` impls do. Resuming a torn-down
/// execution context is unrepresentable here - the coroutine is owned by
/// the cursor and nothing else can reach it.
pub struct Cursor<'a, T: 'a> {
    gen: LocalGenerator<'a, (), T>,
    lookahead: Option<T>,
    state: CursorState,
}

impl<'a, T: 'a> Cursor<'a, T> {
    pub fn new<P>(mut producer: P) -> Self
    where
        P: Traverse<Item = T> + 'a,
    {
        let gen = Gn::new_scoped_local(move |mut scope| {
            producer.drive(&mut |item| {
                scope.yield_with(item);
                Flow::Continue
            });
            done!();
        });
        Cursor {
            gen,
            lookahead: None,
            state: CursorState::Fresh,
        }
    }

    /// Resume the drive loop until it yields the next element, or report
    /// exhaustion. Advancing a finished cursor keeps returning `None`;
    /// it is not an error.
    pub fn advance(&mut self) -> Option<T> {
        if let Some(item) = self.lookahead.take() {
            return Some(item);
        }
        if self.state == CursorState::Finished {
            return None;
        }
        self.state = CursorState::Running;
        match self.gen.next() {
            Some(item) => {
                self.state = CursorState::Suspended;
                Some(item)
            }
            None => {
                self.state = CursorState::Finished;
                None
            }
        }
    }

    /// Look at the next element without consuming it.
    ///
    /// The lookahead buffer holds at most one pending element; peeking
    /// twice does not advance the producer further.
    pub fn peek(&mut self) -> Option<&T> {
        if self.lookahead.is_none() {
            self.lookahead = self.advance();
        }
        self.lookahead.as_ref()
    }

    pub fn state(&self) -> CursorState {
        self.state
    }
}

impl<'a, T: 'a> Traverse for Cursor<'a, T> {
    type Item = T;

    fn drive(&mut self, visitor: &mut dyn FnMut(T) -> Flow) -> Driven {
        while let Some(item) = self.advance() {
            if let Flow::Stop = visitor(item) {
                return Driven::Stopped;
            }
        }
        Driven::Completed
    }
}

/// Iterator face of a cursor, for feeding pull-style consumers.
pub struct IntoIter<'a, T: 'a>(Cursor<'a, T>);

impl<'a, T: 'a> Iterator for IntoIter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.advance()
    }
}

impl<'a, T: 'a> IntoIterator for Cursor<'a, T> {
    type Item = T;
    type IntoIter = IntoIter<'a, T>;

    fn into_iter(self) -> IntoIter<'a, T> {
        IntoIter(self)
    }
}
