//! Symbol translation between 8-bit source values and 14-bit EFM channel codes
//!
//! The forward table is indexed by source value. Decoding needs the inverse
//! direction, so every [`SymbolTable`] carries a precomputed code → value map
//! covering the whole 14-bit code space. When a table is not injective the
//! lowest source value holding a code is the one that code translates to.

use crate::constants::{SYMBOL_BITS, SYMBOL_MASK};
use crate::error::FrameError;
use core::fmt;

/// Number of entries in a translation table
pub const TABLE_SIZE: usize = 256;

const INVERSE_LEN: usize = 1 << SYMBOL_BITS;

const NOT_FOUND: u16 = u16::MAX;

/// EFM channel codes indexed by source value
///
/// Every code obeys the EFM run-length limits and neither sync pattern appears.
pub const EFM_TABLE: [u16; TABLE_SIZE] = [
    0x1220, 0x2100, 0x2420, 0x2220, 0x1100, 0x0110, 0x0420, 0x0900,
    0x1240, 0x2040, 0x2440, 0x2240, 0x1040, 0x0040, 0x0440, 0x0840,
    0x2020, 0x2080, 0x2480, 0x0820, 0x1080, 0x0080, 0x0480, 0x0880,
    0x1210, 0x2010, 0x2410, 0x2210, 0x1010, 0x0210, 0x0410, 0x0810,
    0x0020, 0x2108, 0x0220, 0x0920, 0x1108, 0x0108, 0x1020, 0x0908,
    0x1248, 0x2048, 0x2448, 0x2248, 0x1048, 0x0048, 0x0448, 0x0848,
    0x0100, 0x2088, 0x2488, 0x2110, 0x1088, 0x0088, 0x0488, 0x0888,
    0x1208, 0x2008, 0x2408, 0x2208, 0x1008, 0x0208, 0x0408, 0x0808,
    0x1224, 0x2124, 0x2424, 0x2224, 0x1124, 0x0024, 0x0424, 0x0924,
    0x1244, 0x2044, 0x2444, 0x2244, 0x1044, 0x0044, 0x0444, 0x0844,
    0x2024, 0x2084, 0x2484, 0x0824, 0x1084, 0x0084, 0x0484, 0x0884,
    0x1204, 0x2004, 0x2404, 0x2204, 0x1004, 0x0204, 0x0404, 0x0804,
    0x1222, 0x2122, 0x2422, 0x2222, 0x1122, 0x0022, 0x1024, 0x0922,
    0x1242, 0x2042, 0x2442, 0x2242, 0x1042, 0x0042, 0x0442, 0x0842,
    0x2022, 0x2082, 0x2482, 0x0822, 0x1082, 0x0082, 0x0482, 0x0882,
    0x1202, 0x0248, 0x2402, 0x2202, 0x1002, 0x0202, 0x0402, 0x0802,
    0x1221, 0x2121, 0x2421, 0x2221, 0x1121, 0x0021, 0x0421, 0x0921,
    0x1241, 0x2041, 0x2441, 0x2241, 0x1041, 0x0041, 0x0441, 0x0841,
    0x2021, 0x2081, 0x2481, 0x0821, 0x1081, 0x0081, 0x0481, 0x0881,
    0x1201, 0x2090, 0x2401, 0x2201, 0x1090, 0x0201, 0x0401, 0x0890,
    0x0120, 0x2104, 0x0240, 0x0909, 0x1104, 0x0104, 0x1109, 0x0904,
    0x1249, 0x2049, 0x2449, 0x2249, 0x1049, 0x0049, 0x0449, 0x0849,
    0x0109, 0x2089, 0x2489, 0x2109, 0x1089, 0x0089, 0x0489, 0x0889,
    0x1209, 0x2009, 0x2409, 0x2209, 0x1009, 0x0209, 0x0409, 0x0809,
    0x1120, 0x2111, 0x2490, 0x0224, 0x1111, 0x0111, 0x0490, 0x0911,
    0x0241, 0x2101, 0x0244, 0x0249, 0x1101, 0x0101, 0x0090, 0x0901,
    0x1021, 0x2091, 0x2491, 0x0221, 0x1091, 0x0091, 0x0491, 0x0891,
    0x1211, 0x2011, 0x2411, 0x2211, 0x1011, 0x0211, 0x0411, 0x0811,
    0x0122, 0x2112, 0x2120, 0x0242, 0x1112, 0x0112, 0x0422, 0x0912,
    0x0124, 0x2102, 0x0121, 0x1110, 0x1102, 0x0102, 0x0910, 0x0902,
    0x1022, 0x2092, 0x2492, 0x0222, 0x1092, 0x0092, 0x0492, 0x0892,
    0x1212, 0x2012, 0x2412, 0x2212, 0x1012, 0x0212, 0x0412, 0x0812,
];

static ECMA130: SymbolTable = SymbolTable::from_codes(EFM_TABLE);

/// Read-only forward table plus its inverse lookup
#[derive(Clone)]
pub struct SymbolTable {
    codes: [u16; TABLE_SIZE],
    inverse: [u16; INVERSE_LEN],
}

impl SymbolTable {
    /// The process-wide ECMA-130 table
    pub fn ecma130() -> &'static SymbolTable {
        &ECMA130
    }

    /// Build a table from 256 channel codes indexed by source value
    ///
    /// Every code must fit in 14 bits.
    pub fn new(codes: [u16; TABLE_SIZE]) -> Result<Self, FrameError> {
        if let Some((value, &code)) = codes
            .iter()
            .enumerate()
            .find(|(_, code)| **code > SYMBOL_MASK)
        {
            return Err(FrameError::InvalidTableCode {
                value: value as u8,
                code,
            });
        }

        Ok(Self::from_codes(codes))
    }

    const fn from_codes(codes: [u16; TABLE_SIZE]) -> Self {
        let mut inverse = [NOT_FOUND; INVERSE_LEN];

        // Walk downwards so the lowest source value is written last and wins
        let mut value = TABLE_SIZE;
        while value > 0 {
            value -= 1;
            inverse[(codes[value] & SYMBOL_MASK) as usize] = value as u16;
        }

        Self { codes, inverse }
    }

    /// Translate a 14-bit channel code back to its source value
    ///
    /// Returns `None` when no table entry holds `code`.
    pub fn translate(&self, code: u16) -> Option<u8> {
        if code > SYMBOL_MASK {
            return None;
        }
        match self.inverse[code as usize] {
            NOT_FOUND => None,
            value => Some(value as u8),
        }
    }

    /// Channel code stored for a source value
    pub fn code_for(&self, value: u8) -> u16 {
        self.codes[value as usize]
    }

    /// All 256 channel codes, indexed by source value
    pub fn codes(&self) -> &[u16; TABLE_SIZE] {
        &self.codes
    }

    /// Whether every source value maps to a distinct channel code
    pub fn is_injective(&self) -> bool {
        self.codes
            .iter()
            .enumerate()
            .all(|(value, &code)| self.inverse[code as usize] as usize == value)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        ECMA130.clone()
    }
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolTable")
            .field("entries", &TABLE_SIZE)
            .field("injective", &self.is_injective())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SYNC0_PATTERN, SYNC1_PATTERN};

    /// Zero runs between ones in a 14-bit code, including the leading and trailing runs
    fn zero_runs(code: u16) -> (u32, Vec<u32>, u32) {
        let ones: Vec<u32> = (0..14).rev().filter(|b| code & (1 << b) != 0).collect();
        let leading = 13 - ones[0];
        let trailing = *ones.last().unwrap();
        let inner = ones.windows(2).map(|w| w[0] - w[1] - 1).collect();
        (leading, inner, trailing)
    }

    #[test]
    fn test_known_entries() {
        let table = SymbolTable::ecma130();
        assert_eq!(table.code_for(0), 0b01001000100000);
        assert_eq!(table.code_for(1), 0b10000100000000);
        assert_eq!(table.code_for(2), 0b10010000100000);
        assert_eq!(table.code_for(255), 0b00100000010010);
    }

    #[test]
    fn test_first_rows_match_published_codes() {
        const ROWS: [&str; 32] = [
            "01001000100000", "10000100000000", "10010000100000", "10001000100000",
            "01000100000000", "00000100010000", "00010000100000", "00100100000000",
            "01001001000000", "10000001000000", "10010001000000", "10001001000000",
            "01000001000000", "00000001000000", "00010001000000", "00100001000000",
            "10000000100000", "10000010000000", "10010010000000", "00100000100000",
            "01000010000000", "00000010000000", "00010010000000", "00100010000000",
            "01001000010000", "10000000010000", "10010000010000", "10001000010000",
            "01000000010000", "00001000010000", "00010000010000", "00100000010000",
        ];
        for (value, bits) in ROWS.iter().enumerate() {
            let expected = u16::from_str_radix(bits, 2).unwrap();
            assert_eq!(EFM_TABLE[value], expected, "value {value}");
        }
    }

    #[test]
    fn test_every_value_translates_back() {
        let table = SymbolTable::ecma130();
        for value in 0..=255u8 {
            assert_eq!(table.translate(table.code_for(value)), Some(value));
        }
        assert!(table.is_injective());
    }

    #[test]
    fn test_sync_patterns_are_not_data() {
        let table = SymbolTable::ecma130();
        assert_eq!(table.translate(SYNC0_PATTERN), None);
        assert_eq!(table.translate(SYNC1_PATTERN), None);
    }

    #[test]
    fn test_codes_obey_run_length_limits() {
        for &code in EFM_TABLE.iter() {
            let (leading, inner, trailing) = zero_runs(code);
            assert!(leading <= 8, "{code:#06x} leading run {leading}");
            assert!(trailing <= 8, "{code:#06x} trailing run {trailing}");
            for run in inner {
                assert!((2..=10).contains(&run), "{code:#06x} inner run {run}");
            }
        }
    }

    #[test]
    fn test_unknown_codes() {
        let table = SymbolTable::ecma130();
        assert_eq!(table.translate(0), None);
        assert_eq!(table.translate(0x3FFF), None);
        assert_eq!(table.translate(0x4000), None);
        assert_eq!(table.translate(u16::MAX), None);
    }

    #[test]
    fn test_duplicate_code_first_value_wins() {
        let mut codes = EFM_TABLE;
        codes[200] = codes[7];
        codes[9] = codes[7];
        let table = SymbolTable::new(codes).unwrap();

        assert_eq!(table.translate(codes[7]), Some(7));
        assert!(!table.is_injective());
        // The displaced codes no longer translate at all
        assert_eq!(table.translate(EFM_TABLE[200]), None);
        assert_eq!(table.translate(EFM_TABLE[9]), None);
    }

    #[test]
    fn test_new_rejects_wide_codes() {
        let mut codes = EFM_TABLE;
        codes[42] = 0x4001;
        assert_eq!(
            SymbolTable::new(codes).unwrap_err(),
            FrameError::InvalidTableCode {
                value: 42,
                code: 0x4001
            }
        );
    }

    #[test]
    fn test_default_is_ecma130() {
        assert_eq!(SymbolTable::default().codes(), SymbolTable::ecma130().codes());
    }
}
