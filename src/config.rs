//! Configuration Module
//!
//! Handles loading generator and replay settings from environment variables.

use std::env;
use std::path::PathBuf;

use crate::buffer::DEFAULT_TTL;
use crate::codec::DEFAULT_FIXTURE_PATH;
use crate::transport::PayloadMode;

/// Generator configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixture file to write and reload
    pub fixture_path: PathBuf,
    /// Buffers generated per command
    pub buffer_count: usize,
    /// TTL in seconds stamped on every buffer
    pub ttl: i16,
    /// External cache executable; replay is skipped when None
    pub cache_binary: Option<PathBuf>,
    /// Portion of each record sent during replay
    pub payload_mode: PayloadMode,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `FIXTURE_PATH` - Fixture file path (default: testcachevals.env)
    /// - `BUFFER_COUNT` - Buffers per command (default: 1)
    /// - `BUFFER_TTL` - TTL in seconds, -32768..=32767 (default: 10)
    /// - `CACHE_BINARY` - External cache executable (default: unset)
    /// - `PAYLOAD_MODE` - `full` or `command` (default: command)
    pub fn from_env() -> Self {
        Self {
            fixture_path: env::var("FIXTURE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_FIXTURE_PATH)),
            buffer_count: env::var("BUFFER_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            ttl: env::var("BUFFER_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL),
            cache_binary: env::var("CACHE_BINARY")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            payload_mode: env::var("PAYLOAD_MODE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixture_path: PathBuf::from(DEFAULT_FIXTURE_PATH),
            buffer_count: 1,
            ttl: DEFAULT_TTL,
            cache_binary: None,
            payload_mode: PayloadMode::CommandOnly,
        }
    }
}
