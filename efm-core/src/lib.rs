//! # EFM Core
//!
//! Decodes EFM (Eight-to-Fourteen Modulation, ECMA-130) channel run-lengths
//! into F3 frames: one subcode symbol plus 32 data symbols with error flags.
//!
//! ## Modules
//!
//! - `constants`: Channel frame geometry, T-value limits and sync patterns
//! - `table`: The EFM symbol translation table and its inverse lookup
//! - `bitstream`: T-value expansion and bit field extraction
//! - `types`: Core types (F3Frame, DecodeStats)
//! - `decoder`: Frame decoding

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod bitstream;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod table;
pub mod types;

// Re-export commonly used types
pub use decoder::{decode_frame, decode_frame_with_stats, FrameDecoder};
pub use error::FrameError;
pub use table::SymbolTable;
pub use types::{DecodeStats, F3Frame, SubcodeSync};

/// Result type alias for EFM operations
pub type Result<T> = core::result::Result<T, FrameError>;
