//! Payload fragmentation (encode side)

use crate::cipher::{Aes128FieldCipher, BlockCipher};
use crate::constants::{
    DATA_FIELD_SIZE, DEFAULT_OPCODE, FRAME_SIZE, KEY_SIZE, MAX_PAYLOAD_SIZE,
};
use crate::error::FrameError;
use crate::types::Frame;
use alloc::vec::Vec;
use bytes::{BufMut, Bytes, BytesMut};

#[cfg(feature = "logging")]
use tracing::debug;

/// Splits payloads into ordered, encrypted frame sequences
///
/// Built in the builder style:
///
/// ```
/// use seclink_core::{Aes128FieldCipher, Fragmenter};
///
/// let cipher = Aes128FieldCipher::new(b"sixteen byte key");
/// let frames = Fragmenter::new(cipher)
///     .opcode(0x2001)
///     .max_frames(8)
///     .fragment(b"hello")
///     .unwrap();
/// assert_eq!(frames.len(), 1);
/// ```
pub struct Fragmenter<C> {
    cipher: C,
    opcode: u16,
    max_frames: Option<usize>,
}

impl<C: BlockCipher> Fragmenter<C> {
    /// Create a fragmenter with the default opcode and no frame budget
    pub fn new(cipher: C) -> Self {
        Self {
            cipher,
            opcode: DEFAULT_OPCODE,
            max_frames: None,
        }
    }

    /// Set the application opcode stamped into every frame
    pub fn opcode(mut self, opcode: u16) -> Self {
        self.opcode = opcode;
        self
    }

    /// Bound the number of frames one payload may fragment into
    pub fn max_frames(mut self, limit: usize) -> Self {
        self.max_frames = Some(limit);
        self
    }

    /// Split `payload` into an ordered sequence of encrypted frames
    ///
    /// Produces `ceil(len / capacity)` frames, each of constant total size,
    /// with descending packet counts ending at 1. A payload whose length is
    /// an exact capacity multiple ends on a full frame; an empty payload
    /// produces a single all-padding frame so the receiver always has a
    /// sequence to validate.
    pub fn fragment(&self, payload: &[u8]) -> Result<Vec<Frame>, FrameError> {
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(FrameError::PayloadTooLarge(payload.len(), MAX_PAYLOAD_SIZE));
        }

        let count = payload.len().div_ceil(DATA_FIELD_SIZE).max(1);
        if let Some(limit) = self.max_frames {
            if count > limit {
                return Err(FrameError::CapacityExceeded {
                    required: count,
                    limit,
                });
            }
        }

        #[cfg(feature = "logging")]
        debug!(
            "Fragmenting {} payload bytes into {} frames",
            payload.len(),
            count
        );

        let mut frames = Vec::with_capacity(count);
        for i in 0..count {
            let offset = i * DATA_FIELD_SIZE;
            let end = (offset + DATA_FIELD_SIZE).min(payload.len());
            let chunk = &payload[offset.min(payload.len())..end];

            let mut data = [0u8; DATA_FIELD_SIZE];
            data[..chunk.len()].copy_from_slice(chunk);
            self.cipher.encrypt_field(&mut data);

            let mut frame = Frame {
                opcode: self.opcode,
                packet_count: (count - i) as u16,
                expected_count: count as u16,
                payload_len: payload.len() as u16,
                data,
                checksum: 0,
            };
            frame.checksum = frame.compute_checksum();

            #[cfg(feature = "logging")]
            debug!(
                "Frame {}/{}: {} real bytes, crc {:#06x}",
                i + 1,
                count,
                chunk.len(),
                frame.checksum
            );

            frames.push(frame);
        }

        Ok(frames)
    }
}

/// Fragment `payload` with the built-in AES-128 field cipher
///
/// Convenience wrapper over [`Fragmenter`] using [`DEFAULT_OPCODE`] and no
/// frame budget.
pub fn fragment(payload: &[u8], key: &[u8; KEY_SIZE]) -> Result<Vec<Frame>, FrameError> {
    Fragmenter::new(Aes128FieldCipher::new(key)).fragment(payload)
}

/// Concatenate a frame sequence into its wire form
pub fn encode_sequence(frames: &[Frame]) -> Bytes {
    let mut buf = BytesMut::with_capacity(frames.len() * FRAME_SIZE);
    for frame in frames {
        buf.put_slice(&frame.to_bytes());
    }
    buf.freeze()
}
