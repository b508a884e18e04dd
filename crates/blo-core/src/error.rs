//! Error types for the pane codec and tree assembler.

use thiserror::Error;

/// Result type for pane operations.
pub type Result<T> = std::result::Result<T, BloError>;

/// Errors that can occur while decoding, encoding, or linking panes.
///
/// A name lookup miss is not an error; `search` returns `None` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BloError {
    /// A required argument was missing or referred to nothing.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested wire format is not one this codec implements.
    #[error("format is not implemented: {0}")]
    UnsupportedFormat(String),

    /// A record ended before a field could be read.
    #[error("unexpected end of record at offset {offset}: needed {needed} bytes, {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },
}
