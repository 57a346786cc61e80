//! Splitter: partitions a descriptor at the first occurrence of a separator,
//! without allocating.

use super::FsString;
use crate::encoding::Encoding;

impl FsString<'_> {
    /// Splits at the first occurrence of `separator`, returning a
    /// `(head, tail)` pair of views into this descriptor's storage.
    ///
    /// The separator is a single code unit, compared in the buffer's native
    /// unit width. On a match at unit `i`, the head covers units `..i` and
    /// the tail starts at `i + 1` (the separator belongs to neither). If the
    /// separator does not occur, the head is the whole descriptor and the
    /// tail is a zero-length view that keeps this descriptor's encoding. A
    /// zero-length or `Empty` input yields an `Empty` head and the input
    /// unchanged.
    ///
    /// Only Latin-1 and native-order UTF-16 buffers are scanned. A UTF-8 or
    /// byte-swapped UTF-16 buffer is not searched at all: the head is the
    /// whole descriptor and the tail is `Empty`. That is a deliberate
    /// limitation kept from the original driver, preferred over scanning in
    /// the wrong unit width.
    ///
    /// Nothing is copied; both results borrow from this descriptor, which
    /// must outlive them.
    ///
    /// # Examples
    ///
    /// Walking a path one component at a time:
    ///
    /// ```
    /// # use fsstr::FsString;
    /// let path = FsString::borrowed_latin1(b"usr/share/fonts");
    ///
    /// let (head, tail) = path.split_once(b'/');
    /// assert_eq!(head, b"usr");
    /// assert_eq!(tail, b"share/fonts");
    ///
    /// let (head, tail) = tail.split_once(b'/');
    /// assert_eq!(head, b"share");
    ///
    /// let (head, rest) = tail.split_once(b'/');
    /// assert_eq!(head, b"fonts");
    /// assert_eq!(rest.len(), 0);
    /// ```
    #[must_use]
    pub fn split_once(&self, separator: u8) -> (FsString<'_>, FsString<'_>) {
        if self.is_empty() {
            return (FsString::new(), self.reborrow());
        }

        let bytes = self.as_bytes();
        match self.encoding {
            Encoding::Latin1 => match bytes.iter().position(|&b| b == separator) {
                Some(i) => (
                    FsString::borrowed(Encoding::Latin1, &bytes[..i]),
                    FsString::borrowed(Encoding::Latin1, &bytes[i + 1..]),
                ),
                None => (
                    self.reborrow(),
                    FsString::borrowed(Encoding::Latin1, &bytes[bytes.len()..]),
                ),
            },
            Encoding::Utf16 => {
                let sep = u16::from(separator);
                let hit = bytes
                    .chunks_exact(2)
                    .position(|pair| u16::from_ne_bytes([pair[0], pair[1]]) == sep);
                match hit {
                    Some(i) => (
                        FsString::borrowed(Encoding::Utf16, &bytes[..2 * i]),
                        FsString::borrowed(Encoding::Utf16, &bytes[2 * (i + 1)..]),
                    ),
                    None => (
                        self.reborrow(),
                        FsString::borrowed(Encoding::Utf16, &bytes[bytes.len()..]),
                    ),
                }
            }
            // not scanned: splitting these in the wrong unit width would be
            // silently wrong, degrading the tail is detectable
            Encoding::Utf8 | Encoding::Utf16Swapped => (self.reborrow(), FsString::new()),
            // unreachable, is_empty() returned above
            Encoding::Empty => (FsString::new(), FsString::new()),
        }
    }
}
