use crate::parse_key;
use anyhow::{Context, Result};
use seclink_core::fragment::encode_sequence;
use seclink_core::{Aes128FieldCipher, Fragmenter};
use std::fs;
use tracing::info;

pub fn execute(
    input: &str,
    output: &str,
    key_hex: &str,
    opcode: Option<u16>,
    max_frames: Option<usize>,
) -> Result<()> {
    info!("Packing payload from {} to {}", input, output);

    let key = parse_key(key_hex)?;
    let payload =
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    let mut fragmenter = Fragmenter::new(Aes128FieldCipher::new(&key));
    if let Some(opcode) = opcode {
        fragmenter = fragmenter.opcode(opcode);
    }
    if let Some(limit) = max_frames {
        fragmenter = fragmenter.max_frames(limit);
    }

    let frames = fragmenter
        .fragment(&payload)
        .with_context(|| format!("Failed to fragment {} payload bytes", payload.len()))?;

    for (i, frame) in frames.iter().enumerate() {
        info!(
            "Frame {} - Packet Count: {}, CRC: {:#06x}",
            i + 1,
            frame.packet_count,
            frame.checksum
        );
    }

    let wire = encode_sequence(&frames);
    fs::write(output, &wire)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!(
        "Successfully packed {} frames ({} bytes total)",
        frames.len(),
        wire.len()
    );

    Ok(())
}
