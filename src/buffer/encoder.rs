//! Encoder Module
//!
//! Generates batches of command buffers from injected identifier and time sources.

use tracing::{debug, warn};

use crate::buffer::{
    Clock, Command, CommandBuffer, IdentifierSource, SystemClock, UuidSource, DEFAULT_TTL,
    RECORD_LEN,
};
use crate::error::{BufferError, Result};

// == Buffer Encoder ==
/// Builds command buffers stamped with fresh identifiers, the current time
/// and a configured TTL.
#[derive(Debug)]
pub struct BufferEncoder<S, C> {
    ids: S,
    clock: C,
    ttl: i16,
}

impl BufferEncoder<UuidSource, SystemClock> {
    /// Creates an encoder using OS entropy and the system clock.
    pub fn system(ttl: i16) -> Self {
        Self::new(UuidSource::new(), SystemClock, ttl)
    }
}

impl Default for BufferEncoder<UuidSource, SystemClock> {
    fn default() -> Self {
        Self::system(DEFAULT_TTL)
    }
}

impl<S: IdentifierSource, C: Clock> BufferEncoder<S, C> {
    // == Constructor ==
    pub fn new(ids: S, clock: C, ttl: i16) -> Self {
        Self { ids, clock, ttl }
    }

    /// TTL stamped on every buffer.
    pub fn ttl(&self) -> i16 {
        self.ttl
    }

    // == Build ==
    /// Creates a single buffer for `command`.
    pub fn build(&mut self, command: Command) -> Result<CommandBuffer> {
        let initial_id = self.ids.next_identifier()?;
        let final_id = self.ids.next_identifier()?;
        let created_at = self.clock.now_seconds();

        Ok(CommandBuffer::new(
            command, initial_id, final_id, created_at, self.ttl,
        ))
    }

    // == Generate ==
    /// Creates `count` buffers for `command`, in generation order.
    ///
    /// The first failure aborts the batch. `count` is not used to pre-size
    /// the output, so the batch only grows as buffers are built.
    pub fn generate(&mut self, command: Command, count: usize) -> Result<Vec<CommandBuffer>> {
        let mut batch = Vec::new();
        for index in 0..count {
            match self.build(command) {
                Ok(buffer) => batch.push(buffer),
                Err(e) => {
                    warn!("Buffer generation aborted at index {}: {}", index, e);
                    return Err(e);
                }
            }
        }

        debug!("Generated {} {} buffer(s)", batch.len(), command);
        Ok(batch)
    }

    // == Encode ==
    /// Creates `count` serialized records for `command`.
    ///
    /// Accepts a [`Command`] or its raw byte; bytes outside the command set
    /// fail with [`BufferError::UnknownCommand`].
    pub fn encode(
        &mut self,
        command: impl Into<u8>,
        count: usize,
    ) -> Result<Vec<[u8; RECORD_LEN]>> {
        let command = Command::try_from(command.into())?;
        self.generate(command, count)?
            .iter()
            .map(CommandBuffer::to_bytes)
            .collect()
    }

    // == Scenario ==
    /// Generates the insert, get, remove fixture batch with `per_command`
    /// buffers for each command, grouped in that order.
    pub fn scenario(&mut self, per_command: usize) -> Result<Vec<CommandBuffer>> {
        per_command
            .checked_mul(Command::SCENARIO.len())
            .ok_or(BufferError::BatchSize {
                requested: per_command,
            })?;

        let mut batch = Vec::new();
        for command in Command::SCENARIO {
            batch.extend(self.generate(command, per_command)?);
        }
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{unpack_trailer, FixedClock, Identifier, TIMESTAMP_OFFSET};
    use std::collections::HashSet;

    const NOW: u64 = 1_700_000_000;

    /// Source that fails after `remaining` identifiers.
    struct ExhaustedSource {
        remaining: usize,
    }

    impl IdentifierSource for ExhaustedSource {
        fn next_identifier(&mut self) -> Result<Identifier> {
            if self.remaining == 0 {
                return Err(BufferError::IdentifierGeneration(
                    "entropy exhausted".to_string(),
                ));
            }
            self.remaining -= 1;
            Ok([self.remaining as u8; 16])
        }
    }

    fn seeded_encoder() -> BufferEncoder<UuidSource<rand::rngs::StdRng>, FixedClock> {
        BufferEncoder::new(UuidSource::seeded(42), FixedClock(NOW), DEFAULT_TTL)
    }

    fn trailer(record: &[u8; RECORD_LEN]) -> (u64, i16) {
        let mut trailer = [0u8; 8];
        trailer.copy_from_slice(&record[TIMESTAMP_OFFSET..]);
        unpack_trailer(&trailer)
    }

    #[test]
    fn test_encode_insert_scenario() {
        let mut encoder = BufferEncoder::system(DEFAULT_TTL);

        let records = encoder.encode(0x49u8, 1).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.len(), 128);
        assert_eq!(record[0], 0x49);
        assert_eq!(i16::from_be_bytes([record[126], record[127]]), 10);
    }

    #[test]
    fn test_encode_stamps_clock_and_ttl() {
        let mut encoder = BufferEncoder::new(UuidSource::seeded(1), FixedClock(NOW), -5);
        let records = encoder.encode(Command::Remove, 3).unwrap();

        for record in &records {
            assert_eq!(record[0], b'R');
            assert_eq!(trailer(record), (NOW, -5));
        }
    }

    #[test]
    fn test_encode_timestamp_near_wall_clock() {
        let mut encoder = BufferEncoder::system(DEFAULT_TTL);
        let before = SystemClock.now_seconds();
        let records = encoder.encode(Command::Get, 2).unwrap();

        for record in &records {
            let (created_at, _) = trailer(record);
            assert!(created_at.abs_diff(before) <= 2);
        }
    }

    #[test]
    fn test_identifiers_unique_across_batch() {
        let mut encoder = seeded_encoder();
        let batch = encoder.generate(Command::Insert, 50).unwrap();

        let ids: HashSet<_> = batch
            .iter()
            .flat_map(|b| [*b.initial_id(), *b.final_id()])
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_seeded_encoder_is_reproducible() {
        let a = seeded_encoder().encode(Command::Get, 4).unwrap();
        let b = seeded_encoder().encode(Command::Get, 4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_zero_count() {
        let mut encoder = seeded_encoder();
        assert!(encoder.generate(Command::Insert, 0).unwrap().is_empty());
    }

    #[test]
    fn test_scenario_order() {
        let mut encoder = seeded_encoder();
        let batch = encoder.scenario(2).unwrap();

        let commands: Vec<_> = batch.iter().map(|b| b.command()).collect();
        assert_eq!(
            commands,
            vec![
                Command::Insert,
                Command::Insert,
                Command::Get,
                Command::Get,
                Command::Remove,
                Command::Remove,
            ]
        );
    }

    #[test]
    fn test_encode_cleanup_command() {
        let mut encoder = seeded_encoder();

        let records = encoder.encode(b'H', 2).unwrap();
        assert!(records.iter().all(|r| r[0] == b'H'));

        let typed = encoder.encode(Command::Cleanup, 1).unwrap();
        assert_eq!(typed[0][0], 0x48);
    }

    #[test]
    fn test_encode_unknown_byte() {
        let mut encoder = seeded_encoder();
        let result = encoder.encode(b'X', 1);
        assert!(matches!(result, Err(BufferError::UnknownCommand(b'X'))));
    }

    #[test]
    fn test_scenario_oversized_count() {
        let mut encoder = seeded_encoder();
        let result = encoder.scenario(usize::MAX / 2);
        assert!(matches!(
            result,
            Err(BufferError::BatchSize { requested }) if requested == usize::MAX / 2
        ));
    }

    #[test]
    fn test_identifier_failure_aborts_batch() {
        // enough entropy for one buffer only
        let mut encoder =
            BufferEncoder::new(ExhaustedSource { remaining: 2 }, FixedClock(NOW), 10);

        let result = encoder.generate(Command::Insert, 2);
        assert!(matches!(result, Err(BufferError::IdentifierGeneration(_))));
    }
}
