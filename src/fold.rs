//! Latin-1 lower-casing by table lookup.
//!
//! The table is reproduced bit-exactly from the historical filesystem
//! wrapper so that case-insensitive filename matching keeps its exact
//! behavior, quirks included: entry 0x00 maps to 0xFFFF, the accented
//! upper-case letters of rows 0xC0 and 0xD0 are left alone except for the
//! Æ ligature and the eth/o-slash/thorn aliases (0xC6, 0xD0, 0xD8,
//! 0xDE), and everything at or above 0x100 is identity.

#[rustfmt::skip]
static LATIN1_LOWER: [u16; 256] = [
    /* 0 */ 0xFFFF, 0x0001, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007,
            0x0008, 0x0009, 0x000A, 0x000B, 0x000C, 0x000D, 0x000E, 0x000F,
    /* 1 */ 0x0010, 0x0011, 0x0012, 0x0013, 0x0014, 0x0015, 0x0016, 0x0017,
            0x0018, 0x0019, 0x001A, 0x001B, 0x001C, 0x001D, 0x001E, 0x001F,
    /* 2 */ 0x0020, 0x0021, 0x0022, 0x0023, 0x0024, 0x0025, 0x0026, 0x0027,
            0x0028, 0x0029, 0x002A, 0x002B, 0x002C, 0x002D, 0x002E, 0x002F,
    /* 3 */ 0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037,
            0x0038, 0x0039, 0x003A, 0x003B, 0x003C, 0x003D, 0x003E, 0x003F,
    /* 4 */ 0x0040, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067,
            0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x006F,
    /* 5 */ 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077,
            0x0078, 0x0079, 0x007A, 0x005B, 0x005C, 0x005D, 0x005E, 0x005F,
    /* 6 */ 0x0060, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067,
            0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x006F,
    /* 7 */ 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077,
            0x0078, 0x0079, 0x007A, 0x007B, 0x007C, 0x007D, 0x007E, 0x007F,
    /* 8 */ 0x0080, 0x0081, 0x0082, 0x0083, 0x0084, 0x0085, 0x0086, 0x0087,
            0x0088, 0x0089, 0x008A, 0x008B, 0x008C, 0x008D, 0x008E, 0x008F,
    /* 9 */ 0x0090, 0x0091, 0x0092, 0x0093, 0x0094, 0x0095, 0x0096, 0x0097,
            0x0098, 0x0099, 0x009A, 0x009B, 0x009C, 0x009D, 0x009E, 0x009F,
    /* A */ 0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7,
            0x00A8, 0x00A9, 0x00AA, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
    /* B */ 0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
            0x00B8, 0x00B9, 0x00BA, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00BF,
    /* C */ 0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00E6, 0x00C7,
            0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
    /* D */ 0x00F0, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x00D7,
            0x00F8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x00DD, 0x00FE, 0x00DF,
    /* E */ 0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x00E7,
            0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
    /* F */ 0x00F0, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x00F7,
            0x00F8, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x00FD, 0x00FE, 0x00FF,
];

/// Lower-cases a single code point, Latin-1 range only.
///
/// Code points below 0x100 go through the driver's lookup table; anything at
/// or above 0x100 is returned unchanged. This layer performs no Unicode case
/// folding.
///
/// # Examples
///
/// ```
/// # use fsstr::to_lower;
/// assert_eq!(to_lower(u16::from(b'A')), u16::from(b'a'));
/// assert_eq!(to_lower(0x00C6), 0x00E6); // Æ to æ
/// assert_eq!(to_lower(0x0100), 0x0100);
/// ```
#[inline]
#[must_use]
pub fn to_lower(code_point: u16) -> u16 {
    if code_point < 0x100 {
        LATIN1_LOWER[usize::from(code_point)]
    } else {
        code_point
    }
}

#[cfg(test)]
mod tests {
    use super::to_lower;

    #[test]
    fn test_ascii_letters() {
        for (upper, lower) in (b'A'..=b'Z').zip(b'a'..=b'z') {
            assert_eq!(to_lower(upper.into()), u16::from(lower));
        }
        for lower in b'a'..=b'z' {
            assert_eq!(to_lower(lower.into()), u16::from(lower));
        }
    }

    #[test]
    fn test_digits_and_punctuation() {
        for code_point in b'0'..=b'9' {
            assert_eq!(to_lower(code_point.into()), u16::from(code_point));
        }
        for code_point in [b'.', b'/', b'_', b'-', b' ', b'~'] {
            assert_eq!(to_lower(code_point.into()), u16::from(code_point));
        }
    }

    #[test]
    fn test_latin1_aliases() {
        assert_eq!(to_lower(0x00C6), 0x00E6);
        assert_eq!(to_lower(0x00D0), 0x00F0);
        assert_eq!(to_lower(0x00D8), 0x00F8);
        assert_eq!(to_lower(0x00DE), 0x00FE);
        // the other accented capitals are deliberately left alone
        assert_eq!(to_lower(0x00C0), 0x00C0);
        assert_eq!(to_lower(0x00DD), 0x00DD);
    }

    #[test]
    fn test_nul_quirk() {
        assert_eq!(to_lower(0x0000), 0xFFFF);
    }

    #[test]
    fn test_above_latin1_is_identity() {
        assert_eq!(to_lower(0x0100), 0x0100);
        assert_eq!(to_lower(0x20AC), 0x20AC);
        assert_eq!(to_lower(0xFFFF), 0xFFFF);
    }
}
