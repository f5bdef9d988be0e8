//! Error types for accessor decoding.

use thiserror::Error;

/// Main error type for accessor decoding.
///
/// Every variant is a hard resolution failure: it means the document is
/// malformed or truncated, and the primitive depending on the accessor
/// cannot be built. Combinations the decoder merely does not implement are
/// not errors; they surface as unsupported outcomes on the decode result.
#[derive(Error, Debug)]
pub enum Error {
    /// Buffer view index out of range
    #[error("Buffer view index {index} out of bounds (count: {count})")]
    ViewOutOfBounds { index: usize, count: usize },

    /// Buffer index referenced by a view out of range
    #[error("Buffer index {index} out of bounds (count: {count})")]
    BufferOutOfBounds { index: usize, count: usize },

    /// A view window extends past the end of its backing buffer
    #[error("Buffer view [{offset}..+{len}] exceeds buffer of {buffer_len} bytes")]
    ViewOutOfBuffer {
        offset: usize,
        len: usize,
        buffer_len: usize,
    },

    /// Accessor byte offset lies past the end of the view window
    #[error("Byte offset {offset} past end of buffer view ({len} bytes)")]
    OffsetOutOfBounds { offset: usize, len: usize },

    /// Resolved window is shorter than the accessor's element count implies
    #[error("Buffer too short: needed {needed} bytes, got {available}")]
    BufferTooShort { needed: usize, available: usize },
}

/// Result type alias for accessor decoding.
pub type Result<T> = std::result::Result<T, Error>;
