//! Constants and limits for the seclink frame format

/// Sentinel byte marking the start of every frame
pub const START_FLAG: u8 = 0x7E;

/// Sentinel byte marking the end of every frame
pub const END_FLAG: u8 = 0x7E;

/// Opcode used when the caller does not supply one
pub const DEFAULT_OPCODE: u16 = 0x1234;

/// Size of the pre-shared cipher key in bytes
pub const KEY_SIZE: usize = 16;

/// Size of the encrypted data field in bytes
///
/// This is also the per-frame payload capacity and the block size of the
/// [`BlockCipher`](crate::cipher::BlockCipher) contract.
pub const DATA_FIELD_SIZE: usize = 22;

/// Header size: start flag (1) + opcode (2) + packet count (2)
/// + expected count (2) + payload length (2)
pub const HEADER_SIZE: usize = 9;

/// Size of the CRC-16 checksum field in bytes
pub const CHECKSUM_SIZE: usize = 2;

/// Total wire size of one frame
///
/// Header + data field + checksum + end flag = 34 bytes. Constant regardless
/// of how much of the data field carries real payload.
pub const FRAME_SIZE: usize = HEADER_SIZE + DATA_FIELD_SIZE + CHECKSUM_SIZE + 1;

/// Largest payload the 16-bit length field can declare
pub const MAX_PAYLOAD_SIZE: usize = u16::MAX as usize;
