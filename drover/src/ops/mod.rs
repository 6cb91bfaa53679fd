//! The derived algorithm suite.
//!
//! Everything in this module is implemented purely against
//! [`Traverse::drive`](crate::traverse::Traverse::drive), split into four
//! blanket-implemented trait families: [`TraverseExt`] for the
//! general-purpose operations, [`TraverseGroup`] for grouping and
//! slicing, [`TraverseOrder`] for ranking, and [`TraverseReduce`] for
//! folds and numeric summation. Importing the traits is all a producer
//! type needs to do.

mod ext;
mod group;
mod order;
mod reduce;

pub use ext::TraverseExt;
pub use group::{ChunkKey, TraverseGroup};
pub use order::TraverseOrder;
pub use reduce::TraverseReduce;
