//! Library entry for seclink-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

use anyhow::{bail, Result};
use seclink_core::constants::KEY_SIZE;

/// Parse a 32-hex-digit pre-shared key from the command line
pub fn parse_key(key_hex: &str) -> Result<[u8; KEY_SIZE]> {
    let bytes = hex::decode(key_hex)?;
    let Ok(key) = <[u8; KEY_SIZE]>::try_from(bytes) else {
        bail!("key must be exactly {} bytes ({} hex digits)", KEY_SIZE, KEY_SIZE * 2);
    };
    Ok(key)
}

/// Format bytes as a hex dump, 16 per line
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::new();
    for (i, byte) in data.iter().enumerate() {
        out.push_str(&format!("{:02X} ", byte));
        if (i + 1) % 16 == 0 {
            out.push('\n');
        }
    }
    if data.len() % 16 != 0 {
        out.push('\n');
    }
    out
}
