//! Error types for EFM decoding operations

/// Errors that can occur while decoding EFM channel data
///
/// Noisy run lengths, buffer truncation and untranslatable symbols are not
/// errors; they are reported through [`crate::types::DecodeStats`] and the
/// per-symbol flags of [`crate::types::F3Frame`].
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// No T-values were supplied for the frame
    #[cfg_attr(feature = "std", error("T-value sequence is empty"))]
    MissingInput,

    /// Requested bit field width is zero or wider than 31 bits
    #[cfg_attr(feature = "std", error("Invalid bit field width: {0} (must be 1..=31)"))]
    InvalidWidth(u32),

    /// Requested bit field runs past the end of the buffer
    #[cfg_attr(
        feature = "std",
        error("Bit field out of bounds: offset {offset}, width {width}, buffer holds {available} bits")
    )]
    BitRangeOutOfBounds {
        /// First bit requested.
        offset: usize,
        /// Number of bits requested.
        width: u32,
        /// Number of bits the buffer holds.
        available: usize,
    },

    /// A supplied translation table holds a code wider than 14 bits
    #[cfg_attr(feature = "std", error("Table entry {value} holds non 14-bit code {code:#x}"))]
    InvalidTableCode {
        /// Source value whose entry is invalid.
        value: u8,
        /// The offending channel code.
        code: u16,
    },
}
