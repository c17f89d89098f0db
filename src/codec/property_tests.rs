//! Property-Based Tests for Codec Module
//!
//! Uses proptest to check the hex line round-trip over arbitrary records.

use proptest::prelude::*;

use crate::codec::{decode_lines, encode_lines, Width};

fn record_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Decoding encoded text returns the original records, in order
    #[test]
    fn prop_roundtrip_any_width(records in prop::collection::vec(record_strategy(), 0..10)) {
        let decoded = decode_lines(&encode_lines(&records), Width::Any).unwrap();
        prop_assert_eq!(decoded, records);
    }

    // Empty records keep their position when a non-empty record follows
    #[test]
    fn prop_roundtrip_with_empty_records(
        head in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 0..10),
        last in record_strategy()
    ) {
        let mut records = head;
        records.push(last);

        let decoded = decode_lines(&encode_lines(&records), Width::Any).unwrap();
        prop_assert_eq!(decoded, records);
    }

    // Fixed-width records round-trip under strict checking
    #[test]
    fn prop_roundtrip_fixed_width(records in prop::collection::vec(prop::collection::vec(any::<u8>(), 128), 1..5)) {
        let decoded = decode_lines(&encode_lines(&records), Width::Fixed(128)).unwrap();
        prop_assert_eq!(decoded, records);
    }

    // Encoded text is lowercase hex, single spaces, one line per record
    #[test]
    fn prop_encoded_shape(record in record_strategy()) {
        let text = encode_lines(&[record.clone()]);
        prop_assert!(text.ends_with('\n'));

        let line = &text[..text.len() - 1];
        prop_assert_eq!(line.len(), record.len() * 3 - 1);
        for token in line.split(' ') {
            prop_assert_eq!(token.len(), 2);
            prop_assert!(token.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        }
    }
}
