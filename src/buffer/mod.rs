//! Buffer Module
//!
//! Fixed-width command buffers: layout constants, trailer packing, identifier
//! sources and the encoder that assembles records.

mod command;
mod encoder;
mod layout;
mod record;
mod source;
mod trailer;


// Re-export public types
pub use command::Command;
pub use encoder::BufferEncoder;
pub use layout::FixedWidthBuilder;
pub use record::CommandBuffer;
pub use source::{Clock, FixedClock, IdentifierSource, SystemClock, UuidSource};
pub use trailer::{pack_trailer, unpack_trailer, MAX_TIMESTAMP};

/// A 16-byte random token used as a cache key component.
pub type Identifier = [u8; ID_LEN];

// == Layout Constants ==
/// Total width of every serialized record
pub const RECORD_LEN: usize = 128;

/// Width of the leading operation selector
pub const COMMAND_LEN: usize = 1;

/// Width of each identifier
pub const ID_LEN: usize = 16;

/// Reserved zero bytes between the initial and final identifier.
/// Places the final identifier at offset 68.
pub const INITIAL_GAP_LEN: usize = 51;

/// Reserved zero bytes between the final identifier and the trailer.
/// Places the trailer at offset 120.
pub const FINAL_GAP_LEN: usize = 36;

/// Low-order bytes kept from the 64-bit big-endian timestamp
pub const TIMESTAMP_LEN: usize = 6;

/// Width of the signed big-endian TTL
pub const TTL_LEN: usize = 2;

/// Timestamp plus TTL
pub const TRAILER_LEN: usize = TIMESTAMP_LEN + TTL_LEN;

// == Field Offsets ==
pub const COMMAND_OFFSET: usize = 0;
pub const INITIAL_ID_OFFSET: usize = COMMAND_OFFSET + COMMAND_LEN;
pub const INITIAL_GAP_OFFSET: usize = INITIAL_ID_OFFSET + ID_LEN;
pub const FINAL_ID_OFFSET: usize = INITIAL_GAP_OFFSET + INITIAL_GAP_LEN;
pub const FINAL_GAP_OFFSET: usize = FINAL_ID_OFFSET + ID_LEN;
pub const TIMESTAMP_OFFSET: usize = FINAL_GAP_OFFSET + FINAL_GAP_LEN;
pub const TTL_OFFSET: usize = TIMESTAMP_OFFSET + TIMESTAMP_LEN;

const _: () = assert!(TTL_OFFSET + TTL_LEN == RECORD_LEN);
const _: () = assert!(FINAL_ID_OFFSET == 68 && TIMESTAMP_OFFSET == 120);

/// TTL applied when no scenario overrides it
pub const DEFAULT_TTL: i16 = 10;
