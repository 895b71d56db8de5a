//! # Seclink Core
//!
//! An encrypted link-layer framing codec: payloads are split into fixed-size
//! flag-delimited frames, each frame's data field is encrypted with a
//! pre-shared key, and a CRC-16/CCITT checksum protects the header.
//!
//! ## Modules
//!
//! - `constants`: Wire layout constants and limits
//! - `types`: Core types (Frame, FrameError) and wire encoding
//! - `crc`: CRC-16/CCITT header checksum
//! - `cipher`: Block cipher seam and the built-in AES-128 field cipher
//! - `fragment`: Payload fragmentation (encode side)
//! - `defragment`: Frame validation and payload reassembly (decode side)

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod cipher;
pub mod constants;
pub mod crc;
pub mod defragment;
pub mod error;
pub mod fragment;
pub mod types;

// Re-export commonly used types
pub use cipher::{Aes128FieldCipher, BlockCipher};
pub use defragment::{defragment, Defragmenter};
pub use error::FrameError;
pub use fragment::{fragment, Fragmenter};
pub use types::Frame;

/// Result type alias for seclink operations
pub type Result<T> = core::result::Result<T, FrameError>;
