//! Fuzzing entry points for the efm-core decoder
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decode

use efm_core::bitstream::get_bits;
use efm_core::decode_frame_with_stats;

/// Read the input as little-endian i32 T-values; any trailing bytes are dropped
fn t_values(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

pub fn fuzz_decode(data: &[u8]) {
    let runs = t_values(data);

    // Only an empty sequence may fail, and nothing may panic
    match decode_frame_with_stats(&runs) {
        Ok((frame, stats)) => {
            assert!(stats.expansion.runs_consumed <= runs.len());
            assert!(!(frame.is_sync0() && frame.is_sync1()));
        }
        Err(_) => assert!(runs.is_empty()),
    }
}

pub fn fuzz_small_runs(data: &[u8]) {
    // One byte per run keeps most values near the legal 3..=11 window
    let runs: Vec<i32> = data.iter().map(|&b| (b % 16) as i32).collect();
    let _ = decode_frame_with_stats(&runs);
}

pub fn fuzz_get_bits(data: &[u8]) {
    if data.len() < 3 {
        return;
    }
    let offset = u16::from_le_bytes([data[0], data[1]]) as usize;
    let width = data[2] as u32 % 40;
    let _ = get_bits(&data[3..], offset, width);
}
