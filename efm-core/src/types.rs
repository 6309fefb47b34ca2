//! Core types for decoded F3 frames

use crate::bitstream::ExpansionReport;
use crate::constants::DATA_SYMBOLS;
use serde::{Deserialize, Serialize};

/// Sync state of a frame's subcode symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubcodeSync {
    /// Ordinary subcode symbol
    None,
    /// Subcode held the S0 pattern
    Sync0,
    /// Subcode held the S1 pattern
    Sync1,
}

/// One F3 frame: 1 subcode symbol and 32 data symbols with error flags
///
/// Frames are built by the decoder and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct F3Frame {
    pub(crate) data_symbols: [u8; DATA_SYMBOLS],
    pub(crate) error_symbols: [bool; DATA_SYMBOLS],
    pub(crate) subcode_symbol: u8,
    pub(crate) sync: SubcodeSync,
    pub(crate) subcode_error: bool,
}

impl F3Frame {
    /// The 32 data symbols; a flagged symbol reads as 0
    pub fn data_symbols(&self) -> &[u8; DATA_SYMBOLS] {
        &self.data_symbols
    }

    /// Error flags, index-aligned with [`F3Frame::data_symbols`]
    pub fn error_symbols(&self) -> &[bool; DATA_SYMBOLS] {
        &self.error_symbols
    }

    /// Subcode symbol; 0 when the frame carries a sync pattern or the
    /// subcode failed to translate
    pub fn subcode_symbol(&self) -> u8 {
        self.subcode_symbol
    }

    /// Sync state of the subcode symbol
    pub fn sync(&self) -> SubcodeSync {
        self.sync
    }

    /// Subcode symbol was the S0 pattern
    pub fn is_sync0(&self) -> bool {
        self.sync == SubcodeSync::Sync0
    }

    /// Subcode symbol was the S1 pattern
    pub fn is_sync1(&self) -> bool {
        self.sync == SubcodeSync::Sync1
    }

    /// Subcode symbol was either sync pattern
    pub fn is_sync(&self) -> bool {
        self.sync != SubcodeSync::None
    }

    /// Subcode symbol was neither sync pattern and did not translate
    pub fn subcode_error(&self) -> bool {
        self.subcode_error
    }

    /// Number of flagged data symbols
    pub fn error_count(&self) -> usize {
        self.error_symbols.iter().filter(|&&e| e).count()
    }

    /// No flagged data symbols and a usable subcode
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0 && !self.subcode_error
    }
}

impl Default for F3Frame {
    fn default() -> Self {
        Self {
            data_symbols: [0u8; DATA_SYMBOLS],
            error_symbols: [false; DATA_SYMBOLS],
            subcode_symbol: 0,
            sync: SubcodeSync::None,
            subcode_error: false,
        }
    }
}

/// Bookkeeping for one decode call, for callers that resynchronise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeStats {
    /// T-values handed to the decoder
    pub runs_supplied: usize,

    /// Bit expansion details
    pub expansion: ExpansionReport,

    /// Data symbols that failed translation
    pub symbol_errors: usize,
}

impl DecodeStats {
    /// T-values that did not fit in the frame buffer
    pub fn runs_unconsumed(&self) -> usize {
        self.runs_supplied.saturating_sub(self.expansion.runs_consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame() {
        let frame = F3Frame::default();
        assert_eq!(frame.data_symbols(), &[0u8; 32]);
        assert_eq!(frame.error_symbols(), &[false; 32]);
        assert_eq!(frame.subcode_symbol(), 0);
        assert!(!frame.is_sync0());
        assert!(!frame.is_sync1());
        assert!(frame.is_clean());
    }

    #[test]
    fn test_error_count() {
        let mut frame = F3Frame::default();
        frame.error_symbols[3] = true;
        frame.error_symbols[31] = true;
        assert_eq!(frame.error_count(), 2);
        assert!(!frame.is_clean());
    }

    #[test]
    fn test_sync_flags_are_exclusive() {
        let frame = F3Frame {
            sync: SubcodeSync::Sync1,
            ..F3Frame::default()
        };
        assert!(frame.is_sync());
        assert!(frame.is_sync1());
        assert!(!frame.is_sync0());
    }

    #[test]
    fn test_runs_unconsumed() {
        let stats = DecodeStats {
            runs_supplied: 90,
            expansion: ExpansionReport {
                runs_consumed: 84,
                ..ExpansionReport::default()
            },
            symbol_errors: 0,
        };
        assert_eq!(stats.runs_unconsumed(), 6);
    }

    #[test]
    fn test_runs_unconsumed_with_inconsistent_counts() {
        let stats = DecodeStats {
            runs_supplied: 1,
            expansion: ExpansionReport {
                runs_consumed: 2,
                ..ExpansionReport::default()
            },
            symbol_errors: 0,
        };
        assert_eq!(stats.runs_unconsumed(), 0);
    }
}
