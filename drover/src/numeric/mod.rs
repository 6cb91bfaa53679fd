//! Type-aware numeric aggregation.
//!
//! Numbers live in a kind lattice (integer, ratio, float, complex) and an
//! accumulation widens its representation monotonically as operands are
//! absorbed. The rules for how kinds combine live in one place, the
//! coerce module, the way binary arithmetic casts usually do.

mod coerce;
mod kind;
mod number;
mod op_add;
mod sum;

pub use kind::Kind;
pub use number::Number;
pub use sum::Summation;
