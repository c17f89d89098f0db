//! Replay report DTOs
//!
//! Outcome of driving a fixture through a transport.

use serde::Serialize;

/// Response captured for one replayed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayOutcome {
    /// Position of the record in the fixture
    pub index: usize,
    /// Command name, or the raw byte in hex when unknown
    pub command: String,
    /// Number of payload bytes written
    pub bytes_sent: usize,
    /// Process exit code, None if killed by a signal
    pub exit_code: Option<i32>,
    /// Standard output (lossy UTF-8)
    pub stdout: String,
    /// Standard error (lossy UTF-8)
    pub stderr: String,
}

/// Summary of a replay run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// One entry per record that reached the transport
    pub outcomes: Vec<ReplayOutcome>,
    /// Index of the record whose send failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<usize>,
    /// Transport error message for `failed_at`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReplayReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records delivered.
    pub fn sent(&self) -> usize {
        self.outcomes.len()
    }

    /// True when every record was delivered.
    pub fn is_complete(&self) -> bool {
        self.failed_at.is_none()
    }
}
