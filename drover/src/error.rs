/// Errors raised by traversal operations.
///
/// Argument errors are reported at the offending call, before any element
/// of the producer has been visited. Collecting operations either succeed
/// completely or fail completely; no partial collection is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Window or chunk size of zero.
    ///
    /// `each_slice` and `each_cons` require a size of at least one.
    #[error("size must be at least 1")]
    InvalidSize,

    /// Refused to materialize an unbounded producer.
    ///
    /// The producer advertises [`SizeHint::Infinite`](crate::SizeHint) and
    /// the operation would have to realize every element to complete.
    #[error("cannot materialize an unbounded producer")]
    Unbounded,
}

pub type Result<T> = std::result::Result<T, Error>;
