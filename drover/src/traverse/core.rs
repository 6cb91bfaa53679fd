/// Verdict a visitor hands back after seeing one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep driving.
    Continue,
    /// Halt the drive promptly; no further elements are visited.
    Stop,
}

/// How a drive ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driven {
    /// The producer ran out of elements.
    Completed,
    /// The visitor requested an early stop.
    Stopped,
}

/// A cheap estimate of how many elements a producer will visit.
///
/// Eagerly materializing operations consult this before driving:
/// [`Infinite`](SizeHint::Infinite) makes them refuse (or produce an empty
/// result) instead of attempting to realize an unbounded producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeHint {
    /// Exactly this many elements.
    Exact(usize),
    /// No more than this many elements.
    AtMost(usize),
    /// No usable estimate.
    Unknown,
    /// The producer never exhausts on its own.
    Infinite,
}

impl From<(usize, Option<usize>)> for SizeHint {
    fn from((lower, upper): (usize, Option<usize>)) -> Self {
        match upper {
            Some(upper) if upper == lower => SizeHint::Exact(upper),
            Some(upper) => SizeHint::AtMost(upper),
            None => SizeHint::Unknown,
        }
    }
}

/// The producer contract: drive a visitor across all elements, in order,
/// until exhaustion or until the visitor signals [`Flow::Stop`].
///
/// This is the single capability a source type has to supply; everything
/// in [`ops`](crate::ops) is derived from it. A stateless producer may be
/// driven repeatedly; a stateful one (a [`Cursor`](crate::Cursor)) is
/// drivable once. The contract itself swallows nothing: whatever the
/// concrete producer does as a side effect happens, and nothing else.
pub trait Traverse {
    type Item;

    /// Visit every element once, in the producer's natural order.
    fn drive(&mut self, visitor: &mut dyn FnMut(Self::Item) -> Flow) -> Driven;

    /// Optional cheap size estimate; see [`SizeHint`].
    fn size_hint(&self) -> SizeHint {
        SizeHint::Unknown
    }
}

/// A borrowing handle so a producer can be driven by a consuming
/// algorithm without giving it up. Obtained via
/// [`TraverseExt::by_ref`](crate::ops::TraverseExt::by_ref).
pub struct ByRef<'p, P: ?Sized>(pub(crate) &'p mut P);

impl<'p, P: Traverse + ?Sized> Traverse for ByRef<'p, P> {
    type Item = P::Item;

    fn drive(&mut self, visitor: &mut dyn FnMut(Self::Item) -> Flow) -> Driven {
        self.0.drive(visitor)
    }

    fn size_hint(&self) -> SizeHint {
        self.0.size_hint()
    }
}
