//! F3 frame decoding from channel run-lengths
//!
//! Decoding one frame runs four steps:
//! 1. Expand T-values into a 588-bit channel bitstream
//! 2. Skip the 24-bit sync pattern and its merging bits, then read 33
//!    14-bit channel symbols, skipping 3 merging bits after each
//! 3. Check the first symbol for the S0/S1 sync patterns, otherwise
//!    translate it as the subcode symbol
//! 4. Translate the remaining 32 symbols, flagging any that do not translate
//!
//! Every call is independent; nothing is carried from one frame to the next.

use crate::bitstream::ChannelBitstream;
use crate::constants::{
    symbol_offset, SYMBOLS_PER_FRAME, SYMBOL_BITS, SYNC0_PATTERN, SYNC1_PATTERN,
};
use crate::error::FrameError;
use crate::table::SymbolTable;
use crate::types::{DecodeStats, F3Frame, SubcodeSync};

#[cfg(feature = "logging")]
use tracing::{debug, trace, warn};

/// Decode one frame's T-values with the ECMA-130 table
///
/// Returns [`FrameError::MissingInput`] for an empty sequence. Out-of-range
/// T-values, overlong input and untranslatable symbols never fail the call.
pub fn decode_frame(t_values: &[i32]) -> Result<F3Frame, FrameError> {
    FrameDecoder::new().decode(t_values)
}

/// Like [`decode_frame`], also reporting how the input was consumed
pub fn decode_frame_with_stats(t_values: &[i32]) -> Result<(F3Frame, DecodeStats), FrameError> {
    FrameDecoder::new().decode_with_stats(t_values)
}

/// Read the 33 channel symbols (subcode first) out of a channel bitstream
pub fn extract_symbols(stream: &ChannelBitstream) -> Result<[u16; SYMBOLS_PER_FRAME], FrameError> {
    let mut symbols = [0u16; SYMBOLS_PER_FRAME];
    for (index, symbol) in symbols.iter_mut().enumerate() {
        *symbol = stream.get_bits(symbol_offset(index), SYMBOL_BITS as u32)? as u16;
    }
    Ok(symbols)
}

/// Frame decoder bound to a translation table
#[derive(Debug, Clone, Copy)]
pub struct FrameDecoder<'a> {
    table: &'a SymbolTable,
}

impl FrameDecoder<'static> {
    /// Decoder using the ECMA-130 table
    pub fn new() -> Self {
        Self {
            table: SymbolTable::ecma130(),
        }
    }
}

impl Default for FrameDecoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FrameDecoder<'a> {
    /// Decoder using a caller-supplied table
    pub fn with_table(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    /// The table this decoder translates with
    pub fn table(&self) -> &'a SymbolTable {
        self.table
    }

    /// Decode one frame's T-values
    pub fn decode(&self, t_values: &[i32]) -> Result<F3Frame, FrameError> {
        self.decode_with_stats(t_values).map(|(frame, _)| frame)
    }

    /// Decode one frame's T-values and report how the input was consumed
    pub fn decode_with_stats(
        &self,
        t_values: &[i32],
    ) -> Result<(F3Frame, DecodeStats), FrameError> {
        if t_values.is_empty() {
            #[cfg(feature = "logging")]
            warn!("T-value sequence is empty, no frame decoded");
            return Err(FrameError::MissingInput);
        }

        let (stream, expansion) = ChannelBitstream::from_t_values(t_values);
        let symbols = extract_symbols(&stream)?;
        let frame = self.decode_symbols(&symbols);

        let stats = DecodeStats {
            runs_supplied: t_values.len(),
            expansion,
            symbol_errors: frame.error_count(),
        };

        #[cfg(feature = "logging")]
        debug!(
            "Decoded F3 frame: sync={:?} subcode={:#04x} symbol_errors={}",
            frame.sync, frame.subcode_symbol, stats.symbol_errors
        );

        Ok((frame, stats))
    }

    /// Build a frame from 33 already extracted channel symbols
    pub fn decode_symbols(&self, symbols: &[u16; SYMBOLS_PER_FRAME]) -> F3Frame {
        let mut frame = F3Frame::default();

        match symbols[0] {
            SYNC0_PATTERN => frame.sync = SubcodeSync::Sync0,
            SYNC1_PATTERN => frame.sync = SubcodeSync::Sync1,
            code => match self.table.translate(code) {
                Some(value) => frame.subcode_symbol = value,
                None => {
                    #[cfg(feature = "logging")]
                    trace!("Subcode symbol {:#06x} did not translate", code);
                    frame.subcode_error = true;
                }
            },
        }

        for (i, &code) in symbols[1..].iter().enumerate() {
            match self.table.translate(code) {
                Some(value) => frame.data_symbols[i] = value,
                None => {
                    #[cfg(feature = "logging")]
                    trace!("Data symbol {} ({:#06x}) did not translate", i, code);
                    frame.error_symbols[i] = true;
                }
            }
        }

        frame
    }
}
