//! Encoding tags and scalar readers shared by the comparison and coercion
//! engines.

/// Character encoding of a string descriptor.
///
/// Every descriptor carries one of these tags, supplied by whoever produced
/// the string (the on-disk format, the host interface, a literal). Nothing in
/// this crate ever guesses an encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Distinguished zero-length state. Compares equal to a zero-length
    /// string of any other encoding.
    Empty,
    /// ISO 8859-1, one byte per character.
    Latin1,
    /// UTF-8, lengths counted in decoded scalars.
    Utf8,
    /// UTF-16 in native byte order, lengths counted in 16-bit units.
    Utf16,
    /// UTF-16 with both bytes of every unit swapped, as read verbatim from a
    /// disk or host with the opposite byte order.
    Utf16Swapped,
}

impl Encoding {
    /// Width in bytes of one code unit, `0` for [`Empty`](Encoding::Empty).
    #[inline]
    #[must_use]
    pub const fn unit_width(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Latin1 | Self::Utf8 => 1,
            Self::Utf16 | Self::Utf16Swapped => 2,
        }
    }
}

/// Lenient UTF-8 scalar reader.
///
/// A malformed or truncated sequence yields its leading byte as a raw scalar
/// and resynchronizes on the next byte. On-disk names are not trusted to be
/// well-formed, and comparison must be deterministic rather than fail.
pub(crate) struct Utf8Units<'a> {
    bytes: &'a [u8],
}

impl<'a> Utf8Units<'a> {
    #[inline]
    pub(crate) const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl Iterator for Utf8Units<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let (&first, rest) = self.bytes.split_first()?;
        let (len, init) = match first {
            0x00..=0x7F => {
                self.bytes = rest;
                return Some(first.into());
            }
            0xC0..=0xDF => (2, u32::from(first & 0x1F)),
            0xE0..=0xEF => (3, u32::from(first & 0x0F)),
            0xF0..=0xF7 => (4, u32::from(first & 0x07)),
            _ => {
                // stray continuation or invalid lead byte
                self.bytes = rest;
                return Some(first.into());
            }
        };
        if self.bytes.len() < len {
            self.bytes = rest;
            return Some(first.into());
        }
        let mut scalar = init;
        for &byte in &self.bytes[1..len] {
            if byte & 0xC0 != 0x80 {
                self.bytes = rest;
                return Some(first.into());
            }
            scalar = (scalar << 6) | u32::from(byte & 0x3F);
        }
        self.bytes = &self.bytes[len..];
        Some(scalar)
    }
}

/// UTF-16 unit reader over a raw byte buffer.
///
/// Units are read two bytes at a time in native order, swapped first if the
/// buffer is byte-swapped. Surrogate halves are *not* combined: each 16-bit
/// unit is one scalar, bit-compatible with the historical driver. A trailing
/// odd byte is ignored.
pub(crate) struct Utf16Units<'a> {
    bytes: &'a [u8],
    swapped: bool,
}

impl<'a> Utf16Units<'a> {
    #[inline]
    pub(crate) const fn new(bytes: &'a [u8], swapped: bool) -> Self {
        Self { bytes, swapped }
    }
}

impl Iterator for Utf16Units<'_> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        let (pair, rest) = self.bytes.split_first_chunk::<2>()?;
        self.bytes = rest;
        let mut unit = u16::from_ne_bytes(*pair);
        if self.swapped {
            unit = unit.swap_bytes();
        }
        Some(unit.into())
    }
}
