use serde_test::{assert_de_tokens_error, assert_tokens, Token};

use crate::{Encoding, FsString};

#[test]
fn test_serde_empty() {
    let empty = FsString::new();
    assert_tokens(
        &empty,
        &[
            Token::Tuple { len: 2 },
            Token::UnitVariant {
                name: "Encoding",
                variant: "Empty",
            },
            Token::Seq { len: Some(0) },
            Token::SeqEnd,
            Token::TupleEnd,
        ],
    );
}

#[test]
fn test_serde_latin1() {
    let s = FsString::borrowed_latin1(b"ab");
    assert_tokens(
        &s,
        &[
            Token::Tuple { len: 2 },
            Token::UnitVariant {
                name: "Encoding",
                variant: "Latin1",
            },
            Token::Seq { len: Some(2) },
            Token::U8(b'a'),
            Token::U8(b'b'),
            Token::SeqEnd,
            Token::TupleEnd,
        ],
    );
}

#[test]
fn test_serde_utf16() {
    let bytes: alloc::vec::Vec<u8> = "A".encode_utf16().flat_map(u16::to_ne_bytes).collect();
    let s = FsString::borrowed(Encoding::Utf16, &bytes);
    let [lo, hi] = 0x41u16.to_ne_bytes();
    assert_tokens(
        &s,
        &[
            Token::Tuple { len: 2 },
            Token::UnitVariant {
                name: "Encoding",
                variant: "Utf16",
            },
            Token::Seq { len: Some(2) },
            Token::U8(lo),
            Token::U8(hi),
            Token::SeqEnd,
            Token::TupleEnd,
        ],
    );
}

#[test]
fn test_serde_encoding_tag() {
    for (encoding, variant) in [
        (Encoding::Empty, "Empty"),
        (Encoding::Latin1, "Latin1"),
        (Encoding::Utf8, "Utf8"),
        (Encoding::Utf16, "Utf16"),
        (Encoding::Utf16Swapped, "Utf16Swapped"),
    ] {
        assert_tokens(
            &encoding,
            &[Token::UnitVariant {
                name: "Encoding",
                variant,
            }],
        );
    }

    let back: Encoding = serde_json::from_str(r#""Utf16Swapped""#).unwrap();
    assert_eq!(back, Encoding::Utf16Swapped);
    assert!(serde_json::from_str::<Encoding>(r#""Utf32""#).is_err());
}

#[test]
fn test_serde_err() {
    assert_de_tokens_error::<FsString>(
        &[Token::Str("not a descriptor")],
        "invalid type: string \"not a descriptor\", expected a tuple of size 2",
    );
}

#[test]
fn test_serde_json_round_trip() {
    let source = FsString::borrowed_latin1(b"grub.cfg");
    let json = serde_json::to_string(&source).unwrap();
    let back: FsString = serde_json::from_str(&json).unwrap();
    assert!(back.is_owned());
    assert_eq!(back, source);
    assert_eq!(back.encoding(), Encoding::Latin1);
}

#[test]
fn test_deserialized_length_is_rederived() {
    // odd byte count for a UTF-16 descriptor: the tail byte is dropped
    let json = r#"["Utf16", [65, 0, 66]]"#;
    let s: FsString = serde_json::from_str(json).unwrap();
    assert_eq!(s.len(), 1);
    assert_eq!(s.byte_size(), 2);
}
