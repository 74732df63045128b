//! Record checksum.
//!
//! CRC-16 with polynomial 0x1021, fed MSB-first, followed by sixteen
//! zero-bit flush iterations. The flush loop is what the console actually
//! computes; a table-driven CRC-16/XMODEM over the same bytes gives a
//! different answer for this record length, so the routine is spelled out
//! bit by bit.

const POLY: u16 = 0x1021;

/// Checksum over an arbitrary byte run.
pub(crate) fn checksum(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;

    for &byte in data {
        for bit in (0..8).rev() {
            let flag = if crc & 0x8000 != 0 { POLY } else { 0 };
            crc = ((crc << 1) | ((byte >> bit) & 1) as u16) ^ flag;
        }
    }

    for _ in 0..16 {
        let flag = if crc & 0x8000 != 0 { POLY } else { 0 };
        crc = (crc << 1) ^ flag;
    }

    crc
}

/// Recompute the checksum of the first 94 bytes and store it big-endian in
/// the last two.
pub(crate) fn fix_checksum(record: &mut [u8; 96]) {
    let crc = checksum(&record[..94]);
    record[94..].copy_from_slice(&crc.to_be_bytes());
}
