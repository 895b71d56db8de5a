//! Property-based tests using proptest

use proptest::prelude::*;
use seclink_core::constants::{DATA_FIELD_SIZE, KEY_SIZE};
use seclink_core::defragment::decode_sequence;
use seclink_core::fragment::encode_sequence;
use seclink_core::{defragment, fragment};

const KEY: [u8; KEY_SIZE] = *b"your-16-byte-key";

proptest! {
    #[test]
    fn prop_round_trip_fragment_defragment(
        payload in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let frames = fragment(&payload, &KEY).unwrap();
        let reassembled = defragment(&frames, &KEY).unwrap();

        prop_assert_eq!(reassembled.as_ref(), &payload[..]);
    }

    #[test]
    fn prop_frame_count_matches_ceiling(
        payload in prop::collection::vec(any::<u8>(), 1..512)
    ) {
        let frames = fragment(&payload, &KEY).unwrap();
        let expected = payload.len().div_ceil(DATA_FIELD_SIZE);

        prop_assert_eq!(frames.len(), expected);
    }

    #[test]
    fn prop_packet_counts_descend_to_one(
        payload in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let frames = fragment(&payload, &KEY).unwrap();
        let total = frames.len() as u16;

        for (i, frame) in frames.iter().enumerate() {
            prop_assert_eq!(frame.expected_count, total);
            prop_assert_eq!(frame.packet_count, total - i as u16);
        }
        prop_assert_eq!(frames.last().unwrap().packet_count, 1);
    }

    #[test]
    fn prop_wire_round_trip(
        payload in prop::collection::vec(any::<u8>(), 0..512),
        key in prop::array::uniform16(any::<u8>())
    ) {
        let frames = fragment(&payload, &key).unwrap();
        let wire = encode_sequence(&frames);

        let decoded = decode_sequence(&wire).unwrap();
        let reassembled = defragment(&decoded, &key).unwrap();

        prop_assert_eq!(reassembled.as_ref(), &payload[..]);
    }

    #[test]
    fn prop_decode_never_panics(
        data in prop::collection::vec(any::<u8>(), 0..2048)
    ) {
        // Should never panic, even on random data
        let result = decode_sequence(&data);
        prop_assert!(result.is_ok() || result.is_err());
    }

    #[test]
    fn prop_single_bit_header_tamper_detected(
        payload in prop::collection::vec(any::<u8>(), 1..128),
        byte in 0usize..9,
        bit in 0u8..8
    ) {
        let frames = fragment(&payload, &KEY).unwrap();
        let mut wire = encode_sequence(&frames).to_vec();
        wire[byte] ^= 1 << bit;

        let result = decode_sequence(&wire)
            .and_then(|frames| defragment(&frames, &KEY).map(|_| ()));
        prop_assert!(result.is_err());
    }
}
