//! Trailer Module
//!
//! Packs the creation timestamp and TTL into the last 8 bytes of a record.

use crate::buffer::{TIMESTAMP_LEN, TRAILER_LEN, TTL_LEN};

/// Largest timestamp the 48-bit field can hold.
pub const MAX_TIMESTAMP: u64 = (1 << 48) - 1;

// == Pack ==
/// Encodes a Unix timestamp and a signed TTL as an 8-byte trailer.
///
/// The timestamp is written as a 64-bit big-endian integer with the two
/// most-significant bytes dropped, so values above [`MAX_TIMESTAMP`] wrap.
/// The TTL follows as a 16-bit big-endian signed integer.
pub fn pack_trailer(timestamp_seconds: u64, ttl_seconds: i16) -> [u8; TRAILER_LEN] {
    let mut trailer = [0u8; TRAILER_LEN];
    let timestamp = timestamp_seconds.to_be_bytes();
    trailer[..TIMESTAMP_LEN].copy_from_slice(&timestamp[8 - TIMESTAMP_LEN..]);
    trailer[TIMESTAMP_LEN..].copy_from_slice(&ttl_seconds.to_be_bytes());
    trailer
}

// == Unpack ==
/// Decodes a trailer back into `(timestamp_seconds, ttl_seconds)`.
pub fn unpack_trailer(trailer: &[u8; TRAILER_LEN]) -> (u64, i16) {
    let mut timestamp = [0u8; 8];
    timestamp[8 - TIMESTAMP_LEN..].copy_from_slice(&trailer[..TIMESTAMP_LEN]);

    let mut ttl = [0u8; TTL_LEN];
    ttl.copy_from_slice(&trailer[TIMESTAMP_LEN..]);

    (u64::from_be_bytes(timestamp), i16::from_be_bytes(ttl))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_known_values() {
        // 0x0000_0102_0304_0506, ttl 10
        let trailer = pack_trailer(0x0102_0304_0506, 10);
        assert_eq!(trailer, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x00, 0x0a]);
    }

    #[test]
    fn test_pack_negative_ttl() {
        let trailer = pack_trailer(0, -1);
        assert_eq!(&trailer[6..], &[0xff, 0xff]);

        let trailer = pack_trailer(0, i16::MIN);
        assert_eq!(&trailer[6..], &[0x80, 0x00]);
    }

    #[test]
    fn test_pack_drops_high_bytes() {
        let trailer = pack_trailer(0xaabb_0000_0000_0001, 0);
        assert_eq!(&trailer[..6], &[0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_unpack_inverts_pack() {
        let trailer = pack_trailer(1_700_000_000, 10);
        assert_eq!(unpack_trailer(&trailer), (1_700_000_000, 10));

        let trailer = pack_trailer(MAX_TIMESTAMP, i16::MAX);
        assert_eq!(unpack_trailer(&trailer), (MAX_TIMESTAMP, i16::MAX));
    }
}
