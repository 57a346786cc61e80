//! Equality engine: same-encoding byte comparison plus the cross-encoding
//! dispatch matrix.

use super::FsString;
use crate::encoding::{Encoding, Utf16Units, Utf8Units};
use crate::macros::symmetric_eq;

impl Eq for FsString<'_> {}

impl PartialEq<FsString<'_>> for FsString<'_> {
    #[inline]
    fn eq(&self, other: &FsString<'_>) -> bool {
        eq(self, other)
    }
}

/// Decides equality between two descriptors. Never allocates, never mutates.
///
/// The logical length of `Empty` is zero, so the length precheck makes
/// `Empty` and a zero-length string of any encoding take the same path as
/// two zero-length strings: equal. Equal-length same-encoding strings get a
/// raw byte compare (the slice comparison also catches a byte-size mismatch
/// from a violated invariant); everything else goes through the pairwise
/// comparators.
fn eq(s1: &FsString<'_>, s2: &FsString<'_>) -> bool {
    if s1.len() != s2.len() {
        return false;
    }
    if s1.len() == 0 {
        return true;
    }

    // both sides non-empty here, so neither tag is Empty
    if s1.encoding() == s2.encoding() {
        return s1.as_bytes() == s2.as_bytes();
    }

    cross_eq(s1, s2)
}

/// Cross-encoding dispatch: one fixed comparator per unordered encoding
/// pair, probed with both argument orders.
fn cross_eq(s1: &FsString<'_>, s2: &FsString<'_>) -> bool {
    use Encoding::{Latin1, Utf16, Utf16Swapped, Utf8};

    let (a, b) = (s1.as_bytes(), s2.as_bytes());
    match (s1.encoding(), s2.encoding()) {
        (Latin1, Utf8) => eq_latin1_utf8(a, b),
        (Utf8, Latin1) => eq_latin1_utf8(b, a),
        (Latin1, Utf16) => eq_latin1_utf16(a, b, false),
        (Utf16, Latin1) => eq_latin1_utf16(b, a, false),
        (Latin1, Utf16Swapped) => eq_latin1_utf16(a, b, true),
        (Utf16Swapped, Latin1) => eq_latin1_utf16(b, a, true),
        (Utf8, Utf16) => eq_utf8_utf16(a, b, false),
        (Utf16, Utf8) => eq_utf8_utf16(b, a, false),
        (Utf8, Utf16Swapped) => eq_utf8_utf16(a, b, true),
        (Utf16Swapped, Utf8) => eq_utf8_utf16(b, a, true),
        (Utf16, Utf16Swapped) => eq_utf16_swapped(a, b),
        (Utf16Swapped, Utf16) => eq_utf16_swapped(b, a),
        // unreachable given the caller's same-encoding and Empty handling,
        // but a missing comparator must report unequal, not lie
        _ => false,
    }
}

/// Case-sensitive comparison of Latin-1 bytes against decoded UTF-8 scalars.
fn eq_latin1_utf8(latin1: &[u8], utf8: &[u8]) -> bool {
    let mut units = Utf8Units::new(utf8);
    for &byte in latin1 {
        if units.next() != Some(byte.into()) {
            return false;
        }
    }
    units.next().is_none()
}

/// Case-sensitive comparison of Latin-1 bytes against UTF-16 units.
fn eq_latin1_utf16(latin1: &[u8], utf16: &[u8], swapped: bool) -> bool {
    let mut units = Utf16Units::new(utf16, swapped);
    for &byte in latin1 {
        if units.next() != Some(byte.into()) {
            return false;
        }
    }
    units.next().is_none()
}

/// Lockstep comparison of decoded UTF-8 scalars against UTF-16 units.
///
/// Surrogate halves stay uncombined on the UTF-16 side, so text above the
/// Basic Multilingual Plane never compares equal across this pair; the
/// filesystem engine's names are BMP-only in practice.
fn eq_utf8_utf16(utf8: &[u8], utf16: &[u8], swapped: bool) -> bool {
    Utf8Units::new(utf8).eq(Utf16Units::new(utf16, swapped))
}

fn eq_utf16_swapped(native: &[u8], swapped: &[u8]) -> bool {
    Utf16Units::new(native, false).eq(Utf16Units::new(swapped, true))
}

// Literal comparisons: a narrow byte literal is wrapped as a zero-copy
// Latin-1 view, a str as a UTF-8 view.

fn eq_latin1_literal(lit: &(impl AsRef<[u8]> + ?Sized), s: &FsString<'_>) -> bool {
    eq(s, &FsString::borrowed_latin1(lit.as_ref()))
}

fn eq_str_literal(lit: &(impl AsRef<str> + ?Sized), s: &FsString<'_>) -> bool {
    eq(s, &FsString::from(lit.as_ref()))
}

symmetric_eq! {
    ['borrow] ([u8], FsString<'borrow>) = eq_latin1_literal;
    ['a, 'borrow] (&'a [u8], FsString<'borrow>) = eq_latin1_literal;
    ['borrow, const N: usize] ([u8; N], FsString<'borrow>) = eq_latin1_literal;
    ['a, 'borrow, const N: usize] (&'a [u8; N], FsString<'borrow>) = eq_latin1_literal;
    ['borrow] (str, FsString<'borrow>) = eq_str_literal;
    ['a, 'borrow] (&'a str, FsString<'borrow>) = eq_str_literal;
}
