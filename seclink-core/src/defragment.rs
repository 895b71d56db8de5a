//! Frame validation and payload reassembly (decode side)

use crate::cipher::{Aes128FieldCipher, BlockCipher};
use crate::constants::{DATA_FIELD_SIZE, FRAME_SIZE, KEY_SIZE};
use crate::error::FrameError;
use crate::types::Frame;
use alloc::vec::Vec;
use bytes::{BufMut, Bytes, BytesMut};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Validates ordered frame sequences and reassembles their payload
///
/// Frames are consumed strictly in the order given; the transport is trusted
/// to deliver them in order, so packet counts are cross-checked, never used
/// to resort.
pub struct Defragmenter<C> {
    cipher: C,
}

impl<C: BlockCipher> Defragmenter<C> {
    /// Create a defragmenter around a cipher
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Reassemble the original payload from an ordered frame sequence
    ///
    /// Validation happens before any plaintext is produced:
    /// - every frame's stored header checksum must match a recomputation;
    /// - `expected_count` and `payload_len` must agree across frames, the
    ///   sequence length must equal `expected_count`, and packet counts must
    ///   descend to exactly 1;
    /// - the declared payload length must be reconcilable with the frame
    ///   count, otherwise the split between real bytes and padding in the
    ///   last frame is ambiguous.
    pub fn defragment(&self, frames: &[Frame]) -> Result<Bytes, FrameError> {
        let declared = Self::validate(frames)?;

        #[cfg(feature = "logging")]
        debug!(
            "Reassembling {} payload bytes from {} frames",
            declared,
            frames.len()
        );

        let mut payload = BytesMut::with_capacity(declared);
        let mut remaining = declared;
        for frame in frames {
            let mut data = frame.data;
            self.cipher.decrypt_field(&mut data);

            let take = remaining.min(DATA_FIELD_SIZE);
            payload.put_slice(&data[..take]);
            remaining -= take;
        }

        Ok(payload.freeze())
    }

    /// Check sequence consistency and return the declared payload length
    fn validate(frames: &[Frame]) -> Result<usize, FrameError> {
        let first = frames.first().ok_or(FrameError::SequenceIncomplete {
            declared: 1,
            observed: 0,
        })?;

        // Header integrity first: a corrupted frame must surface as a
        // checksum mismatch, not as whatever structural check its garbled
        // fields happen to trip.
        for frame in frames {
            frame.verify_checksum()?;
        }

        let expected = first.expected_count as usize;
        if frames.len() != expected {
            #[cfg(feature = "logging")]
            warn!(
                "Sequence declares {} frames but {} arrived",
                expected,
                frames.len()
            );
            return Err(FrameError::SequenceIncomplete {
                declared: expected,
                observed: frames.len(),
            });
        }

        for (i, frame) in frames.iter().enumerate() {
            if frame.expected_count != first.expected_count {
                return Err(FrameError::SequenceIncomplete {
                    declared: expected,
                    observed: frame.expected_count as usize,
                });
            }
            if frame.payload_len != first.payload_len {
                return Err(FrameError::SequenceIncomplete {
                    declared: first.payload_len as usize,
                    observed: frame.payload_len as usize,
                });
            }

            let position = expected - i;
            if frame.packet_count as usize != position {
                return Err(FrameError::SequenceIncomplete {
                    declared: position,
                    observed: frame.packet_count as usize,
                });
            }
        }

        // The last frame's real length is declared - (count - 1) * capacity;
        // reject declarations that would make it negative or oversized.
        let declared = first.payload_len as usize;
        let fits = declared <= expected * DATA_FIELD_SIZE
            && (expected == 1 || declared > (expected - 1) * DATA_FIELD_SIZE);
        if !fits {
            return Err(FrameError::TruncationAmbiguous {
                declared: first.payload_len,
                frames: expected,
            });
        }

        Ok(declared)
    }
}

/// Defragment `frames` with the built-in AES-128 field cipher
///
/// Convenience wrapper over [`Defragmenter`].
pub fn defragment(frames: &[Frame], key: &[u8; KEY_SIZE]) -> Result<Bytes, FrameError> {
    Defragmenter::new(Aes128FieldCipher::new(key)).defragment(frames)
}

/// Split a wire byte stream into frames
///
/// The stream must consist of whole frames; a ragged tail is reported as
/// [`FrameError::IncompleteFrame`].
pub fn decode_sequence(data: &[u8]) -> Result<Vec<Frame>, FrameError> {
    if data.len() % FRAME_SIZE != 0 {
        return Err(FrameError::IncompleteFrame {
            expected: data.len().div_ceil(FRAME_SIZE) * FRAME_SIZE,
            actual: data.len(),
        });
    }

    data.chunks_exact(FRAME_SIZE).map(Frame::from_bytes).collect()
}
