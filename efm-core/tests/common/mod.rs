//! Helpers that lay out a channel frame bit by bit and turn it into T-values

#![allow(dead_code)]

use efm_core::constants::{CHANNEL_FRAME_BITS, DATA_SYMBOLS, SYMBOL_BITS};
use efm_core::table::EFM_TABLE;

/// Frame sync pattern: two T11 runs and the start of a third run
const SYNC_PATTERN: &str = "100000000001000000000010";

/// Merging bit candidates, tried in order
const MERGING_CHOICES: [&str; 4] = ["000", "001", "010", "100"];

fn text_bits(text: &str) -> Vec<bool> {
    text.chars().map(|c| c == '1').collect()
}

/// A 14-bit channel code as bits, MSB first
pub fn code_bits(code: u16) -> Vec<bool> {
    (0..SYMBOL_BITS)
        .rev()
        .map(|b| (code >> b) & 1 == 1)
        .collect()
}

/// Every zero run between two ones is 2..=10 long
fn gaps_legal(bits: &[bool]) -> bool {
    let mut last_one = None;
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            if let Some(last) = last_one {
                let gap = i - last - 1;
                if !(2..=10).contains(&gap) {
                    return false;
                }
            }
            last_one = Some(i);
        }
    }
    true
}

fn push_with_merging(bits: &mut Vec<bool>, next: &[bool]) {
    for choice in MERGING_CHOICES {
        let mut candidate = bits.clone();
        candidate.extend(text_bits(choice));
        candidate.extend_from_slice(next);
        if gaps_legal(&candidate) {
            *bits = candidate;
            return;
        }
    }
    panic!("no merging bits keep the run lengths legal");
}

/// The 588 channel bits of a frame with the given subcode and data codes
pub fn frame_bits(subcode: u16, data: &[u16; DATA_SYMBOLS]) -> Vec<bool> {
    let mut bits = text_bits(SYNC_PATTERN);
    push_with_merging(&mut bits, &code_bits(subcode));
    for &code in data {
        push_with_merging(&mut bits, &code_bits(code));
    }

    // The next frame's sync pattern starts with a one
    push_with_merging(&mut bits, &[true]);
    bits.pop();

    assert_eq!(bits.len(), CHANNEL_FRAME_BITS);
    bits
}

/// Run lengths between consecutive ones, closing on the next frame's first bit
pub fn bits_to_t_values(bits: &[bool]) -> Vec<i32> {
    assert!(bits[0], "channel frame must start on a transition");
    let ones: Vec<usize> = bits
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b)
        .map(|(i, _)| i)
        .collect();

    let mut runs: Vec<i32> = ones.windows(2).map(|w| (w[1] - w[0]) as i32).collect();
    runs.push((bits.len() - ones[ones.len() - 1]) as i32);

    assert!(runs.iter().all(|t| (3..=11).contains(t)), "{runs:?}");
    runs
}

/// T-values for a frame with a raw subcode code and raw data codes
pub fn frame_t_values(subcode: u16, data: &[u16; DATA_SYMBOLS]) -> Vec<i32> {
    bits_to_t_values(&frame_bits(subcode, data))
}

/// Channel codes for 32 data bytes
pub fn data_codes(values: &[u8; DATA_SYMBOLS]) -> [u16; DATA_SYMBOLS] {
    let mut codes = [0u16; DATA_SYMBOLS];
    for (code, &value) in codes.iter_mut().zip(values.iter()) {
        *code = EFM_TABLE[value as usize];
    }
    codes
}

/// T-values for a frame carrying `subcode` and `data` as plain byte values
pub fn encode_frame(subcode: u8, data: &[u8; DATA_SYMBOLS]) -> Vec<i32> {
    frame_t_values(EFM_TABLE[subcode as usize], &data_codes(data))
}

/// 32 distinct-looking data bytes starting at `seed`
pub fn sample_data(seed: u8) -> [u8; DATA_SYMBOLS] {
    let mut data = [0u8; DATA_SYMBOLS];
    for (i, d) in data.iter_mut().enumerate() {
        *d = seed.wrapping_add((i as u8).wrapping_mul(29));
    }
    data
}
