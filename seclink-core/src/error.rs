//! Error types for seclink operations

/// Errors that can occur during seclink frame operations
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Payload does not fit the 16-bit length field
    #[cfg_attr(feature = "std", error("Payload size {0} exceeds maximum {1}"))]
    PayloadTooLarge(usize, usize),

    /// Caller-configured frame budget too small for the payload
    #[cfg_attr(
        feature = "std",
        error("Payload needs {required} frames but the configured limit is {limit}")
    )]
    CapacityExceeded {
        /// Frames the payload fragments into.
        required: usize,
        /// The caller-supplied maximum frame count.
        limit: usize,
    },

    /// Recomputed header checksum disagrees with the stored one
    #[cfg_attr(
        feature = "std",
        error("Checksum mismatch: expected {expected:#06x}, got {actual:#06x}")
    )]
    ChecksumMismatch {
        /// The checksum stored in the frame.
        expected: u16,
        /// The checksum recomputed over the header.
        actual: u16,
    },

    /// Frame counts disagree with what the sequence declares
    #[cfg_attr(
        feature = "std",
        error("Incomplete sequence: declared {declared}, observed {observed}")
    )]
    SequenceIncomplete {
        /// The value the sequence declares.
        declared: usize,
        /// The value actually observed.
        observed: usize,
    },

    /// Declared payload length cannot be reconciled with the frame count
    #[cfg_attr(
        feature = "std",
        error("Declared payload length {declared} does not fit {frames} frames")
    )]
    TruncationAmbiguous {
        /// The payload length the sequence declares.
        declared: u16,
        /// The number of frames in the sequence.
        frames: usize,
    },

    /// Start or end sentinel byte is wrong
    #[cfg_attr(
        feature = "std",
        error("Bad flag byte at offset {offset}: expected {expected:#04x}, got {actual:#04x}")
    )]
    BadFlag {
        /// Byte offset of the flag within the frame.
        offset: usize,
        /// The sentinel value expected there.
        expected: u8,
        /// The byte actually found.
        actual: u8,
    },

    /// Incomplete frame - not enough data
    #[cfg_attr(
        feature = "std",
        error("Incomplete frame: expected {expected} bytes, got {actual}")
    )]
    IncompleteFrame {
        /// The number of bytes expected.
        expected: usize,
        /// The number of bytes actually found.
        actual: usize,
    },
}
