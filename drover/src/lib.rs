pub mod cursor;
pub mod error;
pub mod matcher;
pub mod numeric;
pub mod ops;
pub mod traverse;

pub use crate::cursor::{Cursor, CursorState};
pub use crate::error::{Error, Result};
pub use crate::numeric::{Kind, Number, Summation};
pub use crate::ops::{ChunkKey, TraverseExt, TraverseGroup, TraverseOrder, TraverseReduce};
pub use crate::traverse::{from_fn, from_iter, Driven, Flow, SizeHint, Traverse};
