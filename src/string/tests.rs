use alloc::format;
use alloc::vec::Vec;

use crate::{Encoding, FsString};

fn utf16_ne(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_ne_bytes).collect()
}

#[test]
fn test_new() {
    let s = FsString::new();
    assert_eq!(s.encoding(), Encoding::Empty);
    assert_eq!(s.len(), 0);
    assert!(s.is_empty());
    assert_eq!(s.byte_size(), 0);
    assert!(s.as_bytes().is_empty());
    assert!(!s.is_view());
    assert!(!s.is_owned());
}

#[test]
fn test_default() {
    assert_eq!(FsString::default(), FsString::new());
}

#[test]
fn test_borrowed_latin1() {
    let buffer = b"boot.cfg";
    let s = FsString::borrowed_latin1(buffer);
    assert_eq!(s.encoding(), Encoding::Latin1);
    assert_eq!(s.len(), 8);
    assert_eq!(s.byte_size(), 8);
    assert!(s.is_view());
    // zero copy: the view points into the caller's buffer
    assert!(core::ptr::eq(s.as_bytes().as_ptr(), buffer.as_ptr()));
}

#[test]
fn test_borrowed_utf8_counts_scalars() {
    let s = FsString::borrowed(Encoding::Utf8, "élément".as_bytes());
    assert_eq!(s.len(), 7);
    assert_eq!(s.byte_size(), 9);
}

#[test]
fn test_borrowed_utf16_truncates_odd_byte() {
    let s = FsString::borrowed(Encoding::Utf16, &[0x41, 0x00, 0x42, 0x00, 0xFF]);
    assert_eq!(s.len(), 2);
    assert_eq!(s.byte_size(), 4);
}

#[test]
fn test_borrowed_empty_encoding_ignores_bytes() {
    let s = FsString::borrowed(Encoding::Empty, b"ignored");
    assert_eq!(s.encoding(), Encoding::Empty);
    assert_eq!(s.len(), 0);
    assert!(s.as_bytes().is_empty());
}

#[test]
fn test_from_str_is_utf8_view() {
    let s = FsString::from("noyau");
    assert_eq!(s.encoding(), Encoding::Utf8);
    assert_eq!(s.len(), 5);
    assert!(s.is_view());
}

#[test]
fn test_clone_view_shares_storage() {
    let buffer = b"shared";
    let s = FsString::borrowed_latin1(buffer);
    let c = s.clone();
    assert!(c.is_view());
    assert!(core::ptr::eq(c.as_bytes().as_ptr(), buffer.as_ptr()));
}

#[test]
fn test_clone_owned_duplicates_storage() {
    let s = FsString::borrowed_latin1(b"own")
        .duplicate_as(Encoding::Latin1)
        .unwrap();
    let c = s.clone();
    assert!(c.is_owned());
    assert_eq!(c, s);
    assert!(!core::ptr::eq(c.as_bytes().as_ptr(), s.as_bytes().as_ptr()));
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", FsString::new()), "");
    assert_eq!(format!("{}", FsString::borrowed_latin1(b"m\xE9dia")), "média");
    assert_eq!(format!("{}", FsString::from("café")), "café");

    let bytes = utf16_ne("écran");
    let utf16 = FsString::borrowed(Encoding::Utf16, &bytes);
    assert_eq!(format!("{utf16}"), "écran");

    // a lone surrogate unit renders as the replacement character
    let lone = 0xD800u16.to_ne_bytes();
    let s = FsString::borrowed(Encoding::Utf16, &lone);
    assert_eq!(format!("{s}"), "\u{FFFD}");
}

#[test]
fn test_debug_names_encoding() {
    let s = FsString::borrowed_latin1(b"a");
    let out = format!("{s:?}");
    assert!(out.contains("Latin1"), "{out}");
    assert!(out.contains("len: 1"), "{out}");
}

#[test]
fn test_logical_length_ignores_empty_tag_payload() {
    // a zero-length descriptor of a concrete encoding is not Empty but has
    // the same logical length
    let s = FsString::borrowed_latin1(b"");
    assert_eq!(s.encoding(), Encoding::Latin1);
    assert_eq!(s.len(), 0);
    assert!(s.is_empty());
}
