//! Report models
//!
//! Serializable views of buffers and replay runs for logs and output.

pub mod report;
pub mod summary;

// Re-export commonly used types
pub use report::{ReplayOutcome, ReplayReport};
pub use summary::BufferSummary;
