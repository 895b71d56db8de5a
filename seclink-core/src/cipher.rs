//! Block cipher seam and the built-in AES-128 field cipher
//!
//! The codec only needs a deterministic, length-preserving permutation of the
//! whole data field under a pre-shared key, applied independently per frame.
//! [`BlockCipher`] is that seam; [`Aes128FieldCipher`] is the implementation
//! shipped with the crate.

use crate::constants::{DATA_FIELD_SIZE, KEY_SIZE};
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Block};

/// Cipher primitive operating on one frame's data field
///
/// Implementations must be deterministic and must not chain state between
/// calls: encrypting the same field twice yields the same ciphertext, and
/// frames can be processed in any order.
pub trait BlockCipher {
    /// Encrypt the data field in place
    fn encrypt_field(&self, field: &mut [u8; DATA_FIELD_SIZE]);

    /// Decrypt the data field in place
    fn decrypt_field(&self, field: &mut [u8; DATA_FIELD_SIZE]);
}

/// AES block size in bytes
const AES_BLOCK: usize = 16;

/// Full AES blocks in one data field
const FULL_BLOCKS: usize = DATA_FIELD_SIZE / AES_BLOCK;

/// Leftover bytes after the last full AES block
const TAIL: usize = DATA_FIELD_SIZE % AES_BLOCK;

// Ciphertext stealing needs at least one full block to steal from.
const _: () = assert!(DATA_FIELD_SIZE >= AES_BLOCK);

/// AES-128 over the data field, ECB with ciphertext stealing
///
/// The 22-byte field is not a multiple of the AES block size, so the final
/// short block borrows ciphertext from the preceding full block (CS3 ciphertext
/// stealing). The result is exactly [`DATA_FIELD_SIZE`] bytes, no padding, no
/// IV, and no state shared between frames.
#[derive(Clone)]
pub struct Aes128FieldCipher {
    inner: Aes128,
}

impl Aes128FieldCipher {
    /// Create a field cipher from a 16-byte pre-shared key
    pub fn new(key: &[u8; KEY_SIZE]) -> Self {
        Self {
            inner: Aes128::new(GenericArray::from_slice(key)),
        }
    }
}

impl BlockCipher for Aes128FieldCipher {
    fn encrypt_field(&self, field: &mut [u8; DATA_FIELD_SIZE]) {
        let last = (FULL_BLOCKS - 1) * AES_BLOCK;

        for i in 0..FULL_BLOCKS - 1 {
            let mut block = Block::clone_from_slice(&field[i * AES_BLOCK..(i + 1) * AES_BLOCK]);
            self.inner.encrypt_block(&mut block);
            field[i * AES_BLOCK..(i + 1) * AES_BLOCK].copy_from_slice(&block);
        }

        let mut block = Block::clone_from_slice(&field[last..last + AES_BLOCK]);
        self.inner.encrypt_block(&mut block);

        if TAIL == 0 {
            field[last..].copy_from_slice(&block);
            return;
        }

        // Steal the trailing ciphertext of the last full block to pad the
        // short tail up to a whole block, then encrypt that.
        let tail_start = FULL_BLOCKS * AES_BLOCK;
        let mut stolen = Block::default();
        stolen[..TAIL].copy_from_slice(&field[tail_start..]);
        stolen[TAIL..].copy_from_slice(&block[TAIL..]);
        self.inner.encrypt_block(&mut stolen);

        field[tail_start..].copy_from_slice(&block[..TAIL]);
        field[last..last + AES_BLOCK].copy_from_slice(&stolen);
    }

    fn decrypt_field(&self, field: &mut [u8; DATA_FIELD_SIZE]) {
        let last = (FULL_BLOCKS - 1) * AES_BLOCK;

        for i in 0..FULL_BLOCKS - 1 {
            let mut block = Block::clone_from_slice(&field[i * AES_BLOCK..(i + 1) * AES_BLOCK]);
            self.inner.decrypt_block(&mut block);
            field[i * AES_BLOCK..(i + 1) * AES_BLOCK].copy_from_slice(&block);
        }

        let mut block = Block::clone_from_slice(&field[last..last + AES_BLOCK]);
        self.inner.decrypt_block(&mut block);

        if TAIL == 0 {
            field[last..].copy_from_slice(&block);
            return;
        }

        // `block` now holds the tail plaintext followed by the stolen
        // ciphertext; reassemble the original last full block and decrypt it.
        let tail_start = FULL_BLOCKS * AES_BLOCK;
        let mut full = Block::default();
        full[..TAIL].copy_from_slice(&field[tail_start..]);
        full[TAIL..].copy_from_slice(&block[TAIL..]);
        self.inner.decrypt_block(&mut full);

        field[last..last + AES_BLOCK].copy_from_slice(&full);
        field[tail_start..].copy_from_slice(&block[..TAIL]);
    }
}
