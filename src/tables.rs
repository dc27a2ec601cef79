//! Code128 width patterns and the symbol values used by the encoder.

/// Width patterns of every Code128 symbol value, indexed 0..=106. Each digit
/// is the width in modules of one bar or space, starting with a bar. Every
/// pattern is 11 modules wide except the stop pattern (13 modules).
pub const CODE128_TABLE: [&str; 107] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", "132212", "221213",
    "221312", "231212", "112232", "122132", "122231", "113222", "123122", "123221", "223211", "221132",
    "221231", "213212", "223112", "312131", "311222", "321122", "321221", "312212", "322112", "322211",
    "212123", "212321", "232121", "111323", "131123", "131321", "112313", "132113", "132311", "211313",
    "231113", "231311", "112133", "112331", "132131", "113123", "113321", "133121", "313121", "211331",
    "231131", "213113", "213311", "213131", "311123", "311321", "331121", "312113", "312311", "332111",
    "314111", "221411", "431111", "111224", "111422", "121124", "121421", "141122", "141221", "112214",
    "112412", "122114", "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111",
    "111242", "121142", "121241", "114212", "124112", "124211", "411212", "421112", "421211", "212141",
    "214121", "412121", "111143", "111341", "131141", "114113", "114311", "411113", "411311", "113141",
    "114131", "311141", "411131", "211412", "211214", "211232", "2331112",
];

/// Symbol value of the start pattern (Start A).
pub const START_CODE: u8 = 103;
/// Symbol value of the stop pattern.
pub const STOP_CODE: u8 = 106;
/// Modulus of the check symbol. Equal to [START_CODE], which is why the
/// start symbol never contributes to the weighted sum.
pub const CHECKSUM_MODULO: u32 = 103;

/// Returns the symbol value of a supported payload character (`%` or an
/// ASCII digit), or `None` if the character can not be encoded.
#[inline]
pub const fn symbol_value(c: char) -> Option<u8> {
    match c {
        '%' => Some(5),
        '0'..='9' => Some(16 + (c as u8 - b'0')),
        _ => None,
    }
}

/// Width pattern of a symbol value.
#[inline]
pub const fn pattern(value: u8) -> &'static str {
    CODE128_TABLE[value as usize]
}

/// Number of modules covered by a width pattern.
pub const fn pattern_modules(pattern: &str) -> u32 {
    let bytes = pattern.as_bytes();
    let mut sum = 0;
    let mut i = 0;
    while i < bytes.len() {
        sum += (bytes[i] - b'0') as u32;
        i += 1;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_values() {
        assert_eq!(symbol_value('%'), Some(5));
        assert_eq!(symbol_value('0'), Some(16));
        assert_eq!(symbol_value('9'), Some(25));
        assert_eq!(symbol_value('A'), None);
        assert_eq!(symbol_value(' '), None);
        assert_eq!(symbol_value('٣'), None);
    }

    #[test]
    fn test_pattern_widths() {
        for (value, pat) in CODE128_TABLE.iter().enumerate() {
            assert!(pat.bytes().all(|b| (b'1'..=b'4').contains(&b)), "pattern {value}");
            let expected = if value == STOP_CODE as usize { 13 } else { 11 };
            assert_eq!(pattern_modules(pat), expected, "pattern {value}");
        }
    }

    #[test]
    fn test_start_stop() {
        assert_eq!(pattern(START_CODE), "211412");
        assert_eq!(pattern(STOP_CODE), "2331112");
    }
}
