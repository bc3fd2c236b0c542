//! Error types.

use alloc::string::String;

use thiserror::Error;

/// Errors reported by the validated range operations of
/// [`MutableBitVector`](crate::MutableBitVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitVectorError {
    /// The range ends before it starts.
    #[error("invalid bit range: end {end} is before start {start}")]
    InvalidRange {
        /// First bit of the range
        start: usize,
        /// Exclusive end of the range
        end: usize,
    },

    /// The operation needs an upper bound to size storage, but the range has
    /// none.
    #[error("bit range starting at {start} has no upper bound")]
    UnboundedRange {
        /// First bit of the range
        start: usize,
    },
}

/// Errors that can occur when parsing a bit vector from its display form,
/// e.g. `[1, 2, 4]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBitVectorError {
    /// The input is not wrapped in `[` and `]`.
    #[error("bit vector must be enclosed in '[' and ']'")]
    MissingBrackets,

    /// An element is not a bit index.
    #[error("invalid bit index '{token}' at element {pos}")]
    InvalidIndex {
        /// The offending element, trimmed
        token: String,
        /// Zero-based position of the element in the list
        pos: usize,
    },
}
