//! Transport Module
//!
//! Delivers raw record bytes to an external cache process and captures its
//! response.
//!
//! # Components
//! - `Transport`: the send capability, replaceable by test doubles
//! - `ProcessTransport`: runs a configured executable per send
//! - `replay`: drives a fixture through any transport

mod process;
mod replay;

use std::future::Future;
use std::str::FromStr;

use crate::buffer::COMMAND_LEN;
use crate::error::{BufferError, Result};

pub use process::ProcessTransport;
pub use replay::replay;

// == Response ==
/// Opaque output of the external process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Exit code, None if terminated by a signal
    pub status: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl Response {
    /// True when the process exited with code 0.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

// == Transport ==
/// Sends one payload and waits for the response.
pub trait Transport {
    fn send(&mut self, payload: &[u8]) -> impl Future<Output = Result<Response>> + Send;
}

// == Payload Mode ==
/// Portion of each record written to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadMode {
    /// The whole record
    Full,
    /// Only the leading command byte
    #[default]
    CommandOnly,
}

impl PayloadMode {
    /// Returns the bytes of `record` to send.
    pub fn payload<'a>(&self, record: &'a [u8]) -> &'a [u8] {
        match self {
            PayloadMode::Full => record,
            PayloadMode::CommandOnly => &record[..record.len().min(COMMAND_LEN)],
        }
    }
}

impl FromStr for PayloadMode {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(PayloadMode::Full),
            "command" => Ok(PayloadMode::CommandOnly),
            other => Err(BufferError::Transport(format!(
                "unknown payload mode: {}",
                other
            ))),
        }
    }
}
