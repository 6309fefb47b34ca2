//! Channel bitstream reconstruction from run-length T-values

use crate::constants::{
    clamp_t_value, CHANNEL_BUFFER_BITS, CHANNEL_BUFFER_BYTES, MAX_FIELD_WIDTH,
};
use crate::error::FrameError;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Outcome of expanding a T-value sequence into a [`ChannelBitstream`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionReport {
    /// Runs that contributed bits (a run cut short by the buffer ceiling counts)
    pub runs_consumed: usize,

    /// Runs that were outside 3..=11 and had to be clamped
    pub runs_clamped: usize,

    /// Channel bits written, including the cleared bits of each run
    pub bits_written: usize,

    /// Expansion hit the buffer ceiling before all runs were written
    pub truncated: bool,
}

/// Fixed 74-byte channel bitstream, MSB first within each byte
///
/// Only the first 588 bits carry frame data. Bits past the end of the
/// expanded runs are always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelBitstream {
    bytes: [u8; CHANNEL_BUFFER_BYTES],
    len_bits: usize,
}

impl ChannelBitstream {
    /// Expand run lengths into a channel bitstream
    ///
    /// Each run `T` writes a one followed by `T - 1` zeros. Runs are clamped
    /// into 3..=11 first. Expansion stops at the 592-bit ceiling; the report
    /// says how far it got.
    pub fn from_t_values(t_values: &[i32]) -> (Self, ExpansionReport) {
        let mut stream = Self {
            bytes: [0u8; CHANNEL_BUFFER_BYTES],
            len_bits: 0,
        };
        let mut report = ExpansionReport::default();

        for &raw in t_values {
            if stream.len_bits >= CHANNEL_BUFFER_BITS {
                report.truncated = true;
                break;
            }

            let t = clamp_t_value(raw);
            if t != raw {
                report.runs_clamped += 1;
            }

            stream.set_bit(stream.len_bits);
            let end = stream.len_bits + t as usize;
            if end > CHANNEL_BUFFER_BITS {
                report.truncated = true;
            }
            stream.len_bits = end.min(CHANNEL_BUFFER_BITS);
            report.runs_consumed += 1;
        }

        report.bits_written = stream.len_bits;

        #[cfg(feature = "logging")]
        {
            if report.runs_clamped > 0 {
                debug!("Clamped {} out-of-range T-values", report.runs_clamped);
            }
            if report.truncated {
                warn!(
                    "Channel bitstream overflow: consumed {} of {} T-values",
                    report.runs_consumed,
                    t_values.len()
                );
            }
        }

        (stream, report)
    }

    fn set_bit(&mut self, position: usize) {
        self.bytes[position / 8] |= 0x80 >> (position % 8);
    }

    /// Raw buffer contents
    pub fn as_bytes(&self) -> &[u8; CHANNEL_BUFFER_BYTES] {
        &self.bytes
    }

    /// Number of channel bits written by expansion
    pub fn len_bits(&self) -> usize {
        self.len_bits
    }

    /// Read `width` bits starting at `bit_offset`, see [`get_bits`]
    pub fn get_bits(&self, bit_offset: usize, width: u32) -> Result<u32, FrameError> {
        get_bits(&self.bytes, bit_offset, width)
    }
}

/// Extract `width` bits (1..=31) from `data` starting at `bit_offset`
///
/// Bits are read most significant first and may span byte boundaries.
/// A field reaching past the end of `data` is rejected instead of read.
pub fn get_bits(data: &[u8], bit_offset: usize, width: u32) -> Result<u32, FrameError> {
    if width == 0 || width > MAX_FIELD_WIDTH {
        return Err(FrameError::InvalidWidth(width));
    }

    let available = data.len() * 8;
    let end = bit_offset
        .checked_add(width as usize)
        .filter(|&end| end <= available)
        .ok_or(FrameError::BitRangeOutOfBounds {
            offset: bit_offset,
            width,
            available,
        })?;

    let mut value = 0u32;
    for position in bit_offset..end {
        let bit = (data[position / 8] >> (7 - position % 8)) & 1;
        value = (value << 1) | bit as u32;
    }

    Ok(value)
}
