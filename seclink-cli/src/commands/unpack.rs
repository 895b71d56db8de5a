use crate::parse_key;
use anyhow::{Context, Result};
use seclink_core::defragment::{decode_sequence, Defragmenter};
use seclink_core::Aes128FieldCipher;
use std::fs;
use tracing::info;

pub fn execute(input: &str, output: &str, key_hex: &str) -> Result<()> {
    info!("Unpacking frame stream from {} to {}", input, output);

    let key = parse_key(key_hex)?;
    let data =
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    let frames = decode_sequence(&data)
        .with_context(|| format!("Failed to parse frame stream ({} bytes)", data.len()))?;

    info!("Parsed {} frames", frames.len());

    let payload = Defragmenter::new(Aes128FieldCipher::new(&key))
        .defragment(&frames)
        .context("Failed to defragment sequence")?;

    fs::write(output, &payload)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!("Recovered {} payload bytes", payload.len());

    Ok(())
}
