use crate::hex_dump;
use anyhow::{Context, Result};
use seclink_core::defragment::decode_sequence;
use std::fs;
use tracing::info;

pub fn execute(input: &str, json: bool) -> Result<()> {
    info!("Inspecting frame stream: {}", input);

    let data =
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    let frames = decode_sequence(&data)
        .with_context(|| format!("Failed to parse frame stream ({} bytes)", data.len()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&frames)?);
        return Ok(());
    }

    println!("=== Frame Stream ===");
    println!("Total frames: {}", frames.len());

    for (i, frame) in frames.iter().enumerate() {
        println!("\nFrame {}:", i + 1);
        println!("  Opcode:         {:#06x}", frame.opcode);
        println!("  Packet count:   {}", frame.packet_count);
        println!("  Expected count: {}", frame.expected_count);
        println!("  Payload length: {}", frame.payload_len);
        println!("  Checksum:       {:#06x}", frame.checksum);
        println!("  Data field (encrypted):");
        print!("{}", hex_dump(&frame.data));
    }

    Ok(())
}
