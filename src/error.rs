//! Error types for buffer generation, fixture decoding and replay
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Buffer Error Enum ==
/// Unified error type for the crate.
#[derive(Error, Debug)]
pub enum BufferError {
    /// Identifier source could not produce entropy
    #[error("Identifier generation failed: {0}")]
    IdentifierGeneration(String),

    /// Assembled record does not match the fixed record width
    #[error("Layout overflow: expected {expected} bytes, assembled {actual}")]
    LayoutOverflow { expected: usize, actual: usize },

    /// Fixture token is not exactly two hex digits
    #[error("Malformed hex token {token:?} on line {line}")]
    MalformedHex { line: usize, token: String },

    /// Decoded fixture line has the wrong byte count
    #[error("Line {line} decoded to {actual} bytes, expected {expected}")]
    LineLength {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// Requested batch cannot be sized
    #[error("Batch of {requested} buffers per command is too large")]
    BatchSize { requested: usize },

    /// Record starts with a byte that is not a known command
    #[error("Unknown command byte: 0x{0:02x}")]
    UnknownCommand(u8),

    /// Reserved padding contains a non-zero byte
    #[error("Reserved byte at offset {offset} is not zero")]
    ReservedBytes { offset: usize },

    /// External process could not be driven
    #[error("Transport error: {0}")]
    Transport(String),

    /// Fixture or transport I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, BufferError>;
