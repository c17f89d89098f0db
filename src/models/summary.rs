//! Buffer summary DTO
//!
//! Human-readable view of a single command buffer.

use serde::Serialize;

/// Decoded fields of a command buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BufferSummary {
    /// Command name (`insert`, `get`, `remove`)
    pub command: String,
    /// Hyphenated initial identifier
    pub initial_id: String,
    /// Hyphenated final identifier
    pub final_id: String,
    /// RFC 3339 creation time, or raw seconds if out of range
    pub created_at: String,
    /// TTL in seconds
    pub ttl: i16,
}
