//! CRC-16/CCITT header checksum
//!
//! The variant used on the wire is CRC-16/CCITT-FALSE: initial value
//! `0xFFFF`, polynomial `0x1021`, no input/output reflection, no final XOR.

/// CRC-16-CCITT generator polynomial
const POLY: u16 = 0x1021;

/// Compute the CRC-16/CCITT checksum of `data`
///
/// Pure function: equal inputs always yield equal outputs, independent of
/// any prior calls.
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    let mut crc: u16 = 0xFFFF;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLY;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}
