//! Fuzzing placeholder for the seclink wire decoder and defragmenter
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decode

/// Wire decoding must never panic, whatever the input bytes.
pub fn fuzz_decode(data: &[u8]) {
    use seclink_core::defragment::decode_sequence;

    let _ = decode_sequence(data);
}

/// Decode plus defragmentation must never panic either.
pub fn fuzz_defragment(data: &[u8]) {
    use seclink_core::defragment::{decode_sequence, defragment};

    if let Ok(frames) = decode_sequence(data) {
        let _ = defragment(&frames, b"fuzzing-16b-key!");
    }
}
