//! Error types for rvector.
use thiserror::Error;

/// Errors returned by the checked accessors of [`SimpleVector`](crate::SimpleVector).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum VectorError {
  /// The index is not below the logical size.
  #[error("index {index} is out of range for a vector of size {size}")]
  OutOfRange {
    /// The index that was requested.
    index: usize,
    /// The logical size at the time of the call.
    size: usize,
  },
}
