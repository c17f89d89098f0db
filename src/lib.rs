//! cachebuf - Cache command buffer fixtures
//!
//! Generates fixed-width 128-byte cache command records, stores them as hex
//! line fixtures and replays them against an external cache process.

pub mod buffer;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use buffer::{BufferEncoder, Command, CommandBuffer, RECORD_LEN};
pub use codec::{decode_lines, encode_lines, Width};
pub use config::Config;
pub use error::{BufferError, Result};
