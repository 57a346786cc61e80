//! Coercion engine: owned duplicates of a descriptor in a requested
//! encoding.

use core::fmt;

use alloc::vec::Vec;

use super::FsString;
use crate::encoding::{Encoding, Utf16Units, Utf8Units};

/// A possible error value when coercing a descriptor with
/// [`FsString::duplicate_as`].
///
/// Out-of-memory and a missing converter are distinct conditions: the first
/// is a resource failure the caller may recover from, the second is a caller
/// logic error that no retry will fix.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CoerceError {
    /// Allocation of the destination buffer failed.
    OutOfMemory,
    /// No converter exists for the requested ordered encoding pair.
    Unsupported {
        /// Source encoding.
        from: Encoding,
        /// Requested target encoding.
        to: Encoding,
    },
}

impl fmt::Display for CoerceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => f.write_str("destination buffer allocation failed"),
            Self::Unsupported { from, to } => {
                write!(f, "unsupported conversion from {from:?} to {to:?}")
            }
        }
    }
}

impl core::error::Error for CoerceError {}

impl FsString<'_> {
    /// Creates an owned duplicate of this descriptor in the `target`
    /// encoding.
    ///
    /// A zero-length source (including `Empty`) duplicates to a zero-length
    /// descriptor *tagged with the target encoding*, so later same-encoding
    /// fast paths apply to it. A source already in the target encoding is
    /// duplicated byte for byte. Anything else dispatches to the fixed
    /// converter table; ordered pairs outside that table fail with
    /// [`CoerceError::Unsupported`] rather than approximating.
    ///
    /// Scalars with no Latin-1 form narrow to `?`; scalars above the Basic
    /// Multilingual Plane become surrogate pairs in UTF-16. Surrogate halves
    /// arriving from UTF-16 pass through UTF-8 coercion uncombined, so a
    /// UTF-16 to UTF-8 to UTF-16 chain is lossless.
    ///
    /// The source is never mutated; the result owns its buffer and releases
    /// it on drop.
    ///
    /// # Errors
    ///
    /// [`CoerceError::OutOfMemory`] if the destination buffer cannot be
    /// allocated, [`CoerceError::Unsupported`] if the ordered encoding pair
    /// has no converter.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fsstr::{CoerceError, Encoding, FsString};
    /// let host = FsString::borrowed_latin1(b"syslinux");
    ///
    /// let owned = host.duplicate_as(Encoding::Utf16)?;
    /// assert_eq!(owned.encoding(), Encoding::Utf16);
    /// assert_eq!(owned.len(), 8);
    /// assert_eq!(owned.byte_size(), 16);
    /// assert_eq!(owned, host);
    ///
    /// // No converter is defined towards the byte-swapped order.
    /// assert_eq!(
    ///     host.duplicate_as(Encoding::Utf16Swapped),
    ///     Err(CoerceError::Unsupported {
    ///         from: Encoding::Latin1,
    ///         to: Encoding::Utf16Swapped,
    ///     }),
    /// );
    /// # Ok::<(), CoerceError>(())
    /// ```
    pub fn duplicate_as(&self, target: Encoding) -> Result<FsString<'static>, CoerceError> {
        if self.is_empty() {
            return Ok(Self::zero_length(target));
        }

        let bytes = self.as_bytes();
        if self.encoding == target {
            let mut buf = try_vec(bytes.len(), 1)?;
            buf.extend_from_slice(bytes);
            return Ok(Self::owned(target, self.len, buf));
        }

        use Encoding::{Latin1, Utf16, Utf16Swapped, Utf8};
        match (self.encoding, target) {
            (Utf8, Latin1) => to_latin1(Utf8Units::new(bytes), bytes.len()),
            (Utf16, Latin1) => to_latin1(Utf16Units::new(bytes, false), self.len),
            (Utf16Swapped, Latin1) => to_latin1(Utf16Units::new(bytes, true), self.len),
            (Latin1, Utf8) => latin1_to_utf8(bytes),
            (Utf16, Utf8) => wide_to_utf8(Utf16Units::new(bytes, false), self.len),
            (Utf16Swapped, Utf8) => wide_to_utf8(Utf16Units::new(bytes, true), self.len),
            (Latin1, Utf16) => latin1_to_utf16(bytes),
            (Utf8, Utf16) => utf8_to_utf16(bytes, self.len),
            (Utf16Swapped, Utf16) => swapped_to_utf16(bytes),
            (from, to) => Err(CoerceError::Unsupported { from, to }),
        }
    }
}

/// Fallible allocation of a destination buffer for `units` units of
/// `bytes_per_unit` bytes each.
fn try_vec(units: usize, bytes_per_unit: usize) -> Result<Vec<u8>, CoerceError> {
    let capacity = units
        .checked_mul(bytes_per_unit)
        .ok_or(CoerceError::OutOfMemory)?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| CoerceError::OutOfMemory)?;
    Ok(buf)
}

/// Narrows decoded scalars to Latin-1 bytes, substituting `?` for anything
/// above 0xFF.
#[allow(clippy::cast_possible_truncation)]
fn to_latin1(
    scalars: impl Iterator<Item = u32>,
    worst_case: usize,
) -> Result<FsString<'static>, CoerceError> {
    let mut buf = try_vec(worst_case, 1)?;
    for scalar in scalars {
        buf.push(if scalar <= 0xFF { scalar as u8 } else { b'?' });
    }
    let len = buf.len();
    Ok(FsString::owned(Encoding::Latin1, len, buf))
}

fn latin1_to_utf8(bytes: &[u8]) -> Result<FsString<'static>, CoerceError> {
    let mut buf = try_vec(bytes.len(), 2)?;
    for &byte in bytes {
        push_utf8(&mut buf, byte.into());
    }
    Ok(FsString::owned(Encoding::Utf8, bytes.len(), buf))
}

fn wide_to_utf8(units: Utf16Units<'_>, unit_count: usize) -> Result<FsString<'static>, CoerceError> {
    let mut buf = try_vec(unit_count, 3)?;
    for unit in units {
        push_utf8(&mut buf, unit);
    }
    Ok(FsString::owned(Encoding::Utf8, unit_count, buf))
}

#[allow(clippy::cast_possible_truncation)]
fn latin1_to_utf16(bytes: &[u8]) -> Result<FsString<'static>, CoerceError> {
    let mut buf = try_vec(bytes.len(), 2)?;
    for &byte in bytes {
        push_utf16(&mut buf, byte.into());
    }
    Ok(FsString::owned(Encoding::Utf16, bytes.len(), buf))
}

/// Re-encodes UTF-8 scalars as native-order UTF-16 units.
///
/// `scalar_count` is the descriptor's logical length, used only to size the
/// buffer for the worst case of one surrogate pair per scalar.
#[allow(clippy::cast_possible_truncation)]
fn utf8_to_utf16(bytes: &[u8], scalar_count: usize) -> Result<FsString<'static>, CoerceError> {
    let mut buf = try_vec(scalar_count, 4)?;
    let mut len = 0;
    for scalar in Utf8Units::new(bytes) {
        if scalar <= 0xFFFF {
            push_utf16(&mut buf, scalar as u16);
            len += 1;
        } else if scalar <= 0x10_FFFF {
            let v = scalar - 0x1_0000;
            push_utf16(&mut buf, 0xD800 | (v >> 10) as u16);
            push_utf16(&mut buf, 0xDC00 | (v & 0x3FF) as u16);
            len += 2;
        } else {
            // out-of-range scalar from a malformed sequence
            push_utf16(&mut buf, 0xFFFD);
            len += 1;
        }
    }
    Ok(FsString::owned(Encoding::Utf16, len, buf))
}

#[allow(clippy::cast_possible_truncation)]
fn swapped_to_utf16(bytes: &[u8]) -> Result<FsString<'static>, CoerceError> {
    let mut buf = try_vec(bytes.len(), 1)?;
    let mut len = 0;
    for unit in Utf16Units::new(bytes, true) {
        push_utf16(&mut buf, unit as u16);
        len += 1;
    }
    Ok(FsString::owned(Encoding::Utf16, len, buf))
}

#[allow(clippy::cast_possible_truncation)]
fn push_utf8(buf: &mut Vec<u8>, scalar: u32) {
    match scalar {
        0..=0x7F => buf.push(scalar as u8),
        0x80..=0x7FF => {
            buf.push(0xC0 | (scalar >> 6) as u8);
            buf.push(0x80 | (scalar & 0x3F) as u8);
        }
        0x800..=0xFFFF => {
            buf.push(0xE0 | (scalar >> 12) as u8);
            buf.push(0x80 | ((scalar >> 6) & 0x3F) as u8);
            buf.push(0x80 | (scalar & 0x3F) as u8);
        }
        _ => {
            buf.push(0xF0 | (scalar >> 18) as u8);
            buf.push(0x80 | ((scalar >> 12) & 0x3F) as u8);
            buf.push(0x80 | ((scalar >> 6) & 0x3F) as u8);
            buf.push(0x80 | (scalar & 0x3F) as u8);
        }
    }
}

#[inline]
fn push_utf16(buf: &mut Vec<u8>, unit: u16) {
    buf.extend_from_slice(&unit.to_ne_bytes());
}
