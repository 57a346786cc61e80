//! Encoding-tagged string descriptor, the crate's sole entity.

use core::fmt;

use alloc::vec::Vec;

use crate::encoding::{Encoding, Utf16Units, Utf8Units};

mod cmp;
mod convert;
mod split;

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
mod tests;

pub use convert::CoerceError;

/// String descriptor: an encoding tag, a logical length in code units, and a
/// reference to the character bytes.
///
/// A descriptor is either a **view** borrowing storage owned by someone else
/// (an on-disk buffer, a literal, a larger descriptor it was split out of) or
/// an **owned** buffer allocated by [`duplicate_as`](Self::duplicate_as).
/// Views cost nothing to create and are never freed; owned buffers are
/// released on drop.
///
/// # Examples
///
/// Wrapping a directory-entry name without copying:
///
/// ```
/// # use fsstr::FsString;
/// let name = FsString::borrowed_latin1(b"lost+found");
/// assert_eq!(name.len(), 10);
/// assert!(name.is_view());
/// ```
///
/// Strings of different encodings compare without conversion:
///
/// ```
/// # use fsstr::{Encoding, FsString};
/// let latin1 = FsString::borrowed_latin1(b"boot");
/// let utf8 = FsString::borrowed(Encoding::Utf8, b"boot");
/// assert_eq!(latin1, utf8);
/// ```
#[derive(Clone)]
pub struct FsString<'borrow> {
    encoding: Encoding,
    len: usize,
    data: Data<'borrow>,
}

/// Storage behind a descriptor.
///
/// Keeping the view/owned distinction in the type makes releasing a view (or
/// leaking an owned buffer) impossible rather than a caller convention.
#[derive(Clone)]
enum Data<'borrow> {
    /// No referenced storage: `Empty` and zero-length descriptors.
    None,
    /// View into caller-owned storage.
    Borrowed(&'borrow [u8]),
    /// Buffer allocated by this crate, released on drop.
    Owned(Vec<u8>),
}

impl<'borrow> FsString<'borrow> {
    /// Creates an [`Empty`](Encoding::Empty) descriptor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fsstr::FsString;
    /// let s = FsString::new();
    /// assert_eq!(s.len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            encoding: Encoding::Empty,
            len: 0,
            data: Data::None,
        }
    }

    /// Creates a view over caller-owned bytes in the given encoding, without
    /// copying.
    ///
    /// The logical length is derived from the bytes: their count for Latin-1,
    /// the number of decoded scalars for UTF-8, the number of 16-bit units
    /// for the UTF-16 encodings (a trailing odd byte is excluded from the
    /// view). Passing [`Encoding::Empty`] ignores the bytes entirely.
    ///
    /// The view borrows `bytes`: it is valid exactly as long as that storage
    /// is, which the borrow checker enforces.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fsstr::{Encoding, FsString};
    /// let s = FsString::borrowed(Encoding::Utf16, &[0x41, 0x00, 0x42, 0x00, 0xFF][..]);
    /// assert_eq!(s.len(), 2);
    /// assert_eq!(s.byte_size(), 4);
    /// ```
    #[must_use]
    pub fn borrowed(encoding: Encoding, bytes: &'borrow [u8]) -> Self {
        match encoding {
            Encoding::Empty => Self::new(),
            Encoding::Latin1 => Self::borrowed_latin1(bytes),
            Encoding::Utf8 => Self {
                encoding,
                len: Utf8Units::new(bytes).count(),
                data: Data::Borrowed(bytes),
            },
            Encoding::Utf16 | Encoding::Utf16Swapped => {
                let len = bytes.len() / 2;
                let (bytes, _) = bytes.split_at(len * 2);
                Self {
                    encoding,
                    len,
                    data: Data::Borrowed(bytes),
                }
            }
        }
    }

    /// Creates a Latin-1 view over a narrow text constant, without copying.
    ///
    /// This is how filesystem code compares on-disk names against literals
    /// like `b"lost+found"`; see also the `PartialEq<&[u8]>` implementation
    /// which wraps and compares in one step.
    #[inline]
    #[must_use]
    pub const fn borrowed_latin1(bytes: &'borrow [u8]) -> Self {
        Self {
            encoding: Encoding::Latin1,
            len: bytes.len(),
            data: Data::Borrowed(bytes),
        }
    }

    /// Logical length: bytes for Latin-1, decoded scalars for UTF-8, 16-bit
    /// units for the UTF-16 encodings, `0` for `Empty`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        match self.encoding {
            Encoding::Empty => 0,
            _ => self.len,
        }
    }

    /// Returns `true` if the logical length is zero.
    ///
    /// True both for [`Empty`](Encoding::Empty) and for zero-length
    /// descriptors of any encoding.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encoding tag of this descriptor.
    #[inline]
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Referenced character bytes; empty for `Empty` and zero-length
    /// descriptors.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.data {
            Data::None => &[],
            Data::Borrowed(bytes) => bytes,
            Data::Owned(buf) => buf,
        }
    }

    /// Total size in bytes of the referenced data.
    ///
    /// `len() * encoding().unit_width()` for the fixed-width encodings; for
    /// UTF-8 the byte size can exceed the logical length.
    #[inline]
    #[must_use]
    pub fn byte_size(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns `true` if this descriptor is a view into caller-owned
    /// storage.
    #[inline]
    #[must_use]
    pub const fn is_view(&self) -> bool {
        matches!(self.data, Data::Borrowed(_))
    }

    /// Returns `true` if this descriptor owns its buffer (it was produced by
    /// [`duplicate_as`](Self::duplicate_as)); the buffer is released on
    /// drop.
    #[inline]
    #[must_use]
    pub const fn is_owned(&self) -> bool {
        matches!(self.data, Data::Owned(_))
    }

    /// Re-borrows as a view of the same bytes, tied to `self` instead of the
    /// original storage.
    #[inline]
    #[must_use]
    pub(crate) fn reborrow(&self) -> FsString<'_> {
        FsString {
            encoding: self.encoding,
            len: self.len,
            data: match &self.data {
                Data::None => Data::None,
                Data::Borrowed(bytes) => Data::Borrowed(bytes),
                Data::Owned(buf) => Data::Borrowed(buf),
            },
        }
    }

    /// Owned descriptor with no buffer: zero-length in the given encoding.
    ///
    /// Not `Empty` unless `encoding` is: keeping the tag lets a later
    /// same-encoding fast path apply to the result.
    #[inline]
    pub(crate) const fn zero_length(encoding: Encoding) -> FsString<'static> {
        FsString {
            encoding,
            len: 0,
            data: Data::None,
        }
    }

    /// Owned descriptor over a buffer this crate allocated.
    #[inline]
    pub(crate) const fn owned(encoding: Encoding, len: usize, buf: Vec<u8>) -> FsString<'static> {
        FsString {
            encoding,
            len,
            data: Data::Owned(buf),
        }
    }

    /// Owned descriptor from a buffer produced outside the coercion engine,
    /// with the length derived the same way as for views.
    #[cfg(feature = "serde")]
    pub(crate) fn from_vec(encoding: Encoding, mut bytes: Vec<u8>) -> FsString<'static> {
        match encoding {
            Encoding::Empty => FsString::new(),
            Encoding::Latin1 => {
                let len = bytes.len();
                FsString::owned(encoding, len, bytes)
            }
            Encoding::Utf8 => {
                let len = Utf8Units::new(&bytes).count();
                FsString::owned(encoding, len, bytes)
            }
            Encoding::Utf16 | Encoding::Utf16Swapped => {
                let len = bytes.len() / 2;
                bytes.truncate(len * 2);
                FsString::owned(encoding, len, bytes)
            }
        }
    }
}

impl Default for FsString<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// UTF-8 view over a host-supplied `&str`.
impl<'borrow> From<&'borrow str> for FsString<'borrow> {
    #[inline]
    fn from(value: &'borrow str) -> Self {
        Self::borrowed(Encoding::Utf8, value.as_bytes())
    }
}

impl fmt::Debug for FsString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FsString")
            .field("encoding", &self.encoding)
            .field("len", &self.len())
            .field("data", &format_args!("\"{self}\""))
            .finish()
    }
}

/// Lossy human-readable rendition, mainly for driver diagnostics.
///
/// Scalars with no `char` equivalent (lone surrogates, malformed UTF-8
/// bytes) render as U+FFFD.
impl fmt::Display for FsString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_scalars(
            f: &mut fmt::Formatter<'_>,
            scalars: impl Iterator<Item = u32>,
        ) -> fmt::Result {
            for scalar in scalars {
                let c = char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER);
                fmt::Write::write_char(f, c)?;
            }
            Ok(())
        }

        let bytes = self.as_bytes();
        match self.encoding {
            Encoding::Empty => Ok(()),
            Encoding::Latin1 => write_scalars(f, bytes.iter().map(|&b| u32::from(b))),
            Encoding::Utf8 => write_scalars(f, Utf8Units::new(bytes)),
            Encoding::Utf16 => write_scalars(f, Utf16Units::new(bytes, false)),
            Encoding::Utf16Swapped => write_scalars(f, Utf16Units::new(bytes, true)),
        }
    }
}
