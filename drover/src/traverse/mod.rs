//! The producer contract and the concrete producer adapters.
//!
//! A producer is anything that can drive a visitor across its elements
//! exactly once per request, push-style. The [`Traverse`] trait is the
//! whole contract; the algorithm suite in [`ops`](crate::ops) and the
//! pull-style [`Cursor`](crate::Cursor) are built purely on top of it.

mod core;
mod pair;
mod producers;

pub use self::core::{ByRef, Driven, Flow, SizeHint, Traverse};
pub use pair::{WithIndex, WithState};
pub use producers::{from_fn, from_iter, Cycle, FnProducer, IterProducer};
