//! Source Module
//!
//! Injected capabilities for identifier entropy and wall-clock time.

use chrono::Utc;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use uuid::Builder;

use crate::buffer::Identifier;
use crate::error::{BufferError, Result};

// == Identifier Source ==
/// Produces fresh 16-byte identifiers.
pub trait IdentifierSource {
    /// Returns the next identifier, or an error if entropy is unavailable.
    fn next_identifier(&mut self) -> Result<Identifier>;
}

// == Clock ==
/// Provides the current time in whole seconds since the Unix epoch.
pub trait Clock {
    fn now_seconds(&self) -> u64;
}

// == UUID Source ==
/// Identifier source producing random (version 4) UUID bytes from `R`.
///
/// [`UuidSource::new`] draws from the operating system; [`UuidSource::seeded`]
/// yields a reproducible sequence for tests.
#[derive(Debug, Clone)]
pub struct UuidSource<R = OsRng> {
    rng: R,
}

impl UuidSource<OsRng> {
    /// Creates a source backed by the operating system RNG.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for UuidSource<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl UuidSource<StdRng> {
    /// Creates a deterministic source from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> UuidSource<R> {
    /// Wraps an arbitrary RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> IdentifierSource for UuidSource<R> {
    fn next_identifier(&mut self) -> Result<Identifier> {
        let mut random = [0u8; 16];
        self.rng
            .try_fill_bytes(&mut random)
            .map_err(|e| BufferError::IdentifierGeneration(e.to_string()))?;

        // sets the version 4 and RFC 4122 variant bits
        let uuid = Builder::from_random_bytes(random).into_uuid();
        Ok(*uuid.as_bytes())
    }
}

// == System Clock ==
/// Wall-clock time via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seconds(&self) -> u64 {
        // pre-epoch clocks clamp to zero
        Utc::now().timestamp().max(0) as u64
    }
}

// == Fixed Clock ==
/// Clock frozen at a given second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_seconds(&self) -> u64 {
        self.0
    }
}
