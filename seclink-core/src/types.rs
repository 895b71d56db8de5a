//! Core frame type and wire encoding

use crate::constants::{
    CHECKSUM_SIZE, DATA_FIELD_SIZE, END_FLAG, FRAME_SIZE, HEADER_SIZE, START_FLAG,
};
use crate::crc::crc16_ccitt;
use crate::error::FrameError;
use serde::{Deserialize, Serialize};

/// One fixed-size unit of the framing protocol
///
/// The start and end sentinel bytes are not stored; they are written and
/// validated by [`Frame::to_bytes`] / [`Frame::from_bytes`]. All multi-byte
/// fields are big-endian on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Application-defined tag, identical across one sequence
    pub opcode: u16,

    /// Frames remaining including this one (descending; the last frame is 1)
    pub packet_count: u16,

    /// Total frames in this sequence, identical across frames
    pub expected_count: u16,

    /// Total payload bytes across the whole sequence, identical across frames
    pub payload_len: u16,

    /// Encrypted payload chunk, zero-padded past the real bytes
    pub data: [u8; DATA_FIELD_SIZE],

    /// CRC-16/CCITT over the header bytes (start flag through payload length)
    pub checksum: u16,
}

impl Frame {
    /// Serialize the checksum-covered header prefix
    fn header_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut header = [0u8; HEADER_SIZE];
        header[0] = START_FLAG;
        header[1..3].copy_from_slice(&self.opcode.to_be_bytes());
        header[3..5].copy_from_slice(&self.packet_count.to_be_bytes());
        header[5..7].copy_from_slice(&self.expected_count.to_be_bytes());
        header[7..9].copy_from_slice(&self.payload_len.to_be_bytes());
        header
    }

    /// Compute the CRC-16/CCITT checksum of this frame's header
    ///
    /// The checksum covers only the fixed-position header bytes; the data
    /// field and end flag are deliberately outside its scope.
    pub fn compute_checksum(&self) -> u16 {
        crc16_ccitt(&self.header_bytes())
    }

    /// Verify the stored checksum against a recomputation
    pub fn verify_checksum(&self) -> Result<(), FrameError> {
        let actual = self.compute_checksum();
        if actual != self.checksum {
            return Err(FrameError::ChecksumMismatch {
                expected: self.checksum,
                actual,
            });
        }
        Ok(())
    }

    /// Encode the frame into its fixed 34-byte wire form
    pub fn to_bytes(&self) -> [u8; FRAME_SIZE] {
        let mut buf = [0u8; FRAME_SIZE];
        buf[..HEADER_SIZE].copy_from_slice(&self.header_bytes());
        buf[HEADER_SIZE..HEADER_SIZE + DATA_FIELD_SIZE].copy_from_slice(&self.data);

        let checksum_at = HEADER_SIZE + DATA_FIELD_SIZE;
        buf[checksum_at..checksum_at + CHECKSUM_SIZE]
            .copy_from_slice(&self.checksum.to_be_bytes());
        buf[FRAME_SIZE - 1] = END_FLAG;
        buf
    }

    /// Decode one frame from the start of `buf`
    ///
    /// Strict mode: the stored checksum is validated first, so any corruption
    /// of a checksum-covered header byte reports [`FrameError::ChecksumMismatch`]
    /// rather than a structural error. The sentinel bytes are checked after.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, FrameError> {
        if buf.len() < FRAME_SIZE {
            return Err(FrameError::IncompleteFrame {
                expected: FRAME_SIZE,
                actual: buf.len(),
            });
        }

        let mut data = [0u8; DATA_FIELD_SIZE];
        data.copy_from_slice(&buf[HEADER_SIZE..HEADER_SIZE + DATA_FIELD_SIZE]);

        let checksum_at = HEADER_SIZE + DATA_FIELD_SIZE;
        let frame = Self {
            opcode: u16::from_be_bytes([buf[1], buf[2]]),
            packet_count: u16::from_be_bytes([buf[3], buf[4]]),
            expected_count: u16::from_be_bytes([buf[5], buf[6]]),
            payload_len: u16::from_be_bytes([buf[7], buf[8]]),
            data,
            checksum: u16::from_be_bytes([buf[checksum_at], buf[checksum_at + 1]]),
        };

        // The checksum covers the start flag, so a flipped flag byte also
        // surfaces as a mismatch here.
        let actual = crc16_ccitt(&buf[..HEADER_SIZE]);
        if actual != frame.checksum {
            return Err(FrameError::ChecksumMismatch {
                expected: frame.checksum,
                actual,
            });
        }

        if buf[0] != START_FLAG {
            return Err(FrameError::BadFlag {
                offset: 0,
                expected: START_FLAG,
                actual: buf[0],
            });
        }
        if buf[FRAME_SIZE - 1] != END_FLAG {
            return Err(FrameError::BadFlag {
                offset: FRAME_SIZE - 1,
                expected: END_FLAG,
                actual: buf[FRAME_SIZE - 1],
            });
        }

        Ok(frame)
    }
}
