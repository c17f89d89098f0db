//! Record Module
//!
//! The immutable command buffer and its 128-byte serialized form.

use chrono::DateTime;
use uuid::Uuid;

use crate::buffer::{
    pack_trailer, unpack_trailer, Command, FixedWidthBuilder, Identifier, COMMAND_OFFSET,
    FINAL_GAP_LEN, FINAL_GAP_OFFSET, FINAL_ID_OFFSET, ID_LEN, INITIAL_GAP_LEN,
    INITIAL_GAP_OFFSET, INITIAL_ID_OFFSET, RECORD_LEN, TIMESTAMP_OFFSET, TRAILER_LEN,
};
use crate::error::{BufferError, Result};
use crate::models::BufferSummary;

// == Command Buffer ==
/// One cache command: operation, two identifiers, creation time and TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandBuffer {
    command: Command,
    initial_id: Identifier,
    final_id: Identifier,
    /// Seconds since epoch; only the low 48 bits are serialized
    created_at: u64,
    ttl: i16,
}

impl CommandBuffer {
    // == Constructor ==
    pub fn new(
        command: Command,
        initial_id: Identifier,
        final_id: Identifier,
        created_at: u64,
        ttl: i16,
    ) -> Self {
        Self {
            command,
            initial_id,
            final_id,
            created_at,
            ttl,
        }
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn initial_id(&self) -> &Identifier {
        &self.initial_id
    }

    pub fn final_id(&self) -> &Identifier {
        &self.final_id
    }

    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    pub fn ttl(&self) -> i16 {
        self.ttl
    }

    // == Serialize ==
    /// Assembles the fixed-width record.
    ///
    /// `command ‖ initial_id ‖ zeros(51) ‖ final_id ‖ zeros(36) ‖ trailer`
    pub fn to_bytes(&self) -> Result<[u8; RECORD_LEN]> {
        let mut builder = FixedWidthBuilder::<RECORD_LEN>::new();
        builder
            .put(&[self.command.as_byte()])?
            .put(&self.initial_id)?
            .zeros(INITIAL_GAP_LEN)?
            .put(&self.final_id)?
            .zeros(FINAL_GAP_LEN)?
            .put(&pack_trailer(self.created_at, self.ttl))?;
        builder.finish()
    }

    // == Parse ==
    /// Parses a record, checking its width, command byte and reserved padding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != RECORD_LEN {
            return Err(BufferError::LayoutOverflow {
                expected: RECORD_LEN,
                actual: bytes.len(),
            });
        }

        let command = Command::try_from(bytes[COMMAND_OFFSET])?;

        for (start, len) in [
            (INITIAL_GAP_OFFSET, INITIAL_GAP_LEN),
            (FINAL_GAP_OFFSET, FINAL_GAP_LEN),
        ] {
            if let Some(pos) = bytes[start..start + len].iter().position(|&b| b != 0) {
                return Err(BufferError::ReservedBytes { offset: start + pos });
            }
        }

        let mut initial_id = [0u8; ID_LEN];
        initial_id.copy_from_slice(&bytes[INITIAL_ID_OFFSET..INITIAL_ID_OFFSET + ID_LEN]);
        let mut final_id = [0u8; ID_LEN];
        final_id.copy_from_slice(&bytes[FINAL_ID_OFFSET..FINAL_ID_OFFSET + ID_LEN]);
        let mut trailer = [0u8; TRAILER_LEN];
        trailer.copy_from_slice(&bytes[TIMESTAMP_OFFSET..]);

        let (created_at, ttl) = unpack_trailer(&trailer);
        Ok(Self::new(command, initial_id, final_id, created_at, ttl))
    }

    // == Summary ==
    /// Returns a human-readable view for logs and reports.
    pub fn summary(&self) -> BufferSummary {
        let created_at = i64::try_from(self.created_at)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| self.created_at.to_string());

        BufferSummary {
            command: self.command.name().to_string(),
            initial_id: Uuid::from_bytes(self.initial_id).hyphenated().to_string(),
            final_id: Uuid::from_bytes(self.final_id).hyphenated().to_string(),
            created_at,
            ttl: self.ttl,
        }
    }
}
