use std::hint::black_box;

use fsstr::{Encoding, FsString};

fn utf16_ne(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_ne_bytes).collect()
}

#[test]
fn test_eq() {
    let h = FsString::borrowed_latin1(b"abc");
    let h2 = black_box(h.clone());
    assert_eq!(h, h2);
}

// The path-walk loop of a filesystem driver: a host-supplied UTF-16 path is
// split into components and each component is matched against on-disk names.
#[test]
fn test_path_walk() {
    let path_units = utf16_ne("boot/grub/grub.cfg");
    let mut buffer = FsString::borrowed(Encoding::Utf16, &path_units);

    let directory: [&[u8]; 3] = [b"boot", b"grub", b"grub.cfg"];
    for &entry_name in &directory {
        let remainder = {
            let (component, rest) = buffer.split_once(b'/');
            assert_eq!(component, entry_name);

            // directory entries come off the disk as Latin-1 views
            let on_disk = FsString::borrowed_latin1(entry_name);
            assert_eq!(component, on_disk);

            // the driver keeps the matched component past the buffer's life
            // by coercing it to an owned descriptor
            let kept = component.duplicate_as(Encoding::Utf16).unwrap();
            assert!(kept.is_owned());
            assert_eq!(kept, on_disk);

            rest.duplicate_as(Encoding::Utf16).unwrap()
        };
        buffer = remainder;
    }
    assert!(buffer.is_empty());
}
