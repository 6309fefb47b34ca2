//! Constants and limits for the EFM channel frame (ECMA-130 clause 18)

/// Number of meaningful channel bits in one frame
///
/// 1 * (24 + 3) sync pattern + 1 * (14 + 3) subcode + 32 * (14 + 3) data = 588
pub const CHANNEL_FRAME_BITS: usize = 588;

/// Size of the channel bitstream buffer in bytes (588 bits rounded up, 4 bits of padding)
pub const CHANNEL_BUFFER_BYTES: usize = 74;

/// Capacity of the channel bitstream buffer in bits
pub const CHANNEL_BUFFER_BITS: usize = CHANNEL_BUFFER_BYTES * 8;

/// Length of the frame sync pattern in channel bits
pub const SYNC_PATTERN_BITS: usize = 24;

/// Merging bits placed after the sync pattern and after every symbol
pub const MERGING_BITS: usize = 3;

/// Bit offset of the first channel symbol (sync pattern plus its merging bits)
pub const FIRST_SYMBOL_OFFSET: usize = SYNC_PATTERN_BITS + MERGING_BITS;

/// Width of one channel symbol in bits
pub const SYMBOL_BITS: usize = 14;

/// Distance between the starts of two consecutive channel symbols
pub const SYMBOL_STRIDE: usize = SYMBOL_BITS + MERGING_BITS;

/// Channel symbols per frame (1 subcode + 32 data)
pub const SYMBOLS_PER_FRAME: usize = 33;

/// Data symbols per frame
pub const DATA_SYMBOLS: usize = 32;

/// Shortest legal run length (T-value)
pub const MIN_T_VALUE: i32 = 3;

/// Longest legal run length (T-value)
pub const MAX_T_VALUE: i32 = 11;

/// Subcode channel pattern marking the first frame of a subcode block (S0)
pub const SYNC0_PATTERN: u16 = 0x801;

/// Subcode channel pattern marking the second frame of a subcode block (S1)
pub const SYNC1_PATTERN: u16 = 0x012;

/// Mask for a 14-bit channel symbol
pub const SYMBOL_MASK: u16 = (1 << SYMBOL_BITS) - 1;

/// Widest field `get_bits` will extract
pub const MAX_FIELD_WIDTH: u32 = 31;

/// Clamp a raw run length into the legal `[MIN_T_VALUE, MAX_T_VALUE]` range
pub const fn clamp_t_value(t: i32) -> i32 {
    if t < MIN_T_VALUE {
        MIN_T_VALUE
    } else if t > MAX_T_VALUE {
        MAX_T_VALUE
    } else {
        t
    }
}

/// Bit offset of channel symbol `index` (0 = subcode, 1..=32 = data)
pub const fn symbol_offset(index: usize) -> usize {
    FIRST_SYMBOL_OFFSET + index * SYMBOL_STRIDE
}
