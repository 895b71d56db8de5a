//! Integration tests for the complete fragment → wire → defragment flow

use seclink_core::constants::{DATA_FIELD_SIZE, FRAME_SIZE, KEY_SIZE};
use seclink_core::defragment::decode_sequence;
use seclink_core::fragment::encode_sequence;
use seclink_core::{defragment, fragment, Aes128FieldCipher, Defragmenter, FrameError, Fragmenter};

const KEY: [u8; KEY_SIZE] = *b"your-16-byte-key";

fn round_trip(payload: &[u8]) -> Vec<u8> {
    let frames = fragment(payload, &KEY).unwrap();
    defragment(&frames, &KEY).unwrap().to_vec()
}

#[test]
fn test_round_trip_all_short_lengths() {
    // Every length from empty up to several times the per-frame capacity,
    // crossing each frame boundary.
    for len in 0..=DATA_FIELD_SIZE * 4 {
        let payload: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();
        assert_eq!(round_trip(&payload), payload, "length {} corrupted", len);
    }
}

#[test]
fn test_round_trip_binary_with_interior_zero() {
    // 50 bytes with a zero byte at position 10: a C-string length scan would
    // truncate here, the explicit length field must not.
    let mut payload: Vec<u8> = (1..=50u8).collect();
    payload[10] = 0x00;

    let frames = fragment(&payload, &KEY).unwrap();
    assert_eq!(frames.len(), 3);

    let reassembled = defragment(&frames, &KEY).unwrap();
    assert_eq!(reassembled.as_ref(), &payload[..]);
}

#[test]
fn test_round_trip_all_zero_payload() {
    let payload = vec![0u8; DATA_FIELD_SIZE + 7];
    assert_eq!(round_trip(&payload), payload);
}

#[test]
fn test_capacity_boundary_exact_multiples() {
    for n in 1..=3usize {
        let payload = vec![0x7Eu8; DATA_FIELD_SIZE * n];
        let frames = fragment(&payload, &KEY).unwrap();

        assert_eq!(frames.len(), n, "expected {} frames, not {}", n, n + 1);
        assert_eq!(frames.last().unwrap().packet_count, 1);
        assert_eq!(round_trip(&payload), payload);
    }
}

#[test]
fn test_reference_scenario_single_a() {
    let frames = fragment(b"a", &KEY).unwrap();

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].packet_count, 1);
    assert_eq!(frames[0].expected_count, 1);

    let payload = defragment(&frames, &KEY).unwrap();
    assert_eq!(payload.as_ref(), b"a");
}

#[test]
fn test_wire_level_round_trip() {
    let payload: Vec<u8> = (0..100u8).collect();
    let frames = fragment(&payload, &KEY).unwrap();

    let wire = encode_sequence(&frames);
    assert_eq!(wire.len(), frames.len() * FRAME_SIZE);

    let decoded = decode_sequence(&wire).unwrap();
    let reassembled = defragment(&decoded, &KEY).unwrap();
    assert_eq!(reassembled.as_ref(), &payload[..]);
}

#[test]
fn test_tampering_any_header_byte_detected() {
    let payload = [0xC3u8; DATA_FIELD_SIZE + 1];
    let frames = fragment(&payload, &KEY).unwrap();
    let wire = encode_sequence(&frames);

    // Flip one bit in each checksum-covered header byte of each frame.
    for frame_idx in 0..frames.len() {
        for offset in 0..9 {
            let mut corrupted = wire.to_vec();
            corrupted[frame_idx * FRAME_SIZE + offset] ^= 0x01;

            let result = decode_sequence(&corrupted)
                .and_then(|frames| defragment(&frames, &KEY).map(|_| ()));
            assert!(
                matches!(result, Err(FrameError::ChecksumMismatch { .. })),
                "tampered byte {} of frame {} slipped through",
                offset,
                frame_idx
            );
        }
    }
}

#[test]
fn test_builder_pipeline_with_custom_opcode() {
    let payload = b"builder pipeline payload";

    let frames = Fragmenter::new(Aes128FieldCipher::new(&KEY))
        .opcode(0x4242)
        .max_frames(16)
        .fragment(payload)
        .unwrap();
    assert!(frames.iter().all(|f| f.opcode == 0x4242));

    let reassembled = Defragmenter::new(Aes128FieldCipher::new(&KEY))
        .defragment(&frames)
        .unwrap();
    assert_eq!(reassembled.as_ref(), payload);
}

#[test]
fn test_ciphertext_differs_from_plaintext() {
    let payload = [0x61u8; DATA_FIELD_SIZE];
    let frames = fragment(&payload, &KEY).unwrap();

    assert_ne!(frames[0].data, payload);
}

#[test]
fn test_sequences_are_independent() {
    // No state leaks between calls: fragmenting the same payload twice gives
    // identical frames.
    let payload = b"no shared state across calls";
    let a = fragment(payload, &KEY).unwrap();
    let b = fragment(payload, &KEY).unwrap();
    assert_eq!(a, b);
}
