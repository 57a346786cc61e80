//! Encoding-tagged **string descriptors** for read-only filesystem drivers.
//!
//! * zero-copy **views** over on-disk buffers and host path components
//! * lazy **cross-encoding equality** (Latin-1, UTF-8, UTF-16, byte-swapped
//!   UTF-16) without a conversion pass
//! * explicit, fallible **coercion** to an owned descriptor in another
//!   encoding
//! * allocation-free **path splitting**
//!
//! # Examples
//!
//! ```rust
//! use fsstr::{Encoding, FsString};
//!
//! // A directory entry straight from a disk buffer, no copy.
//! let on_disk = FsString::borrowed_latin1(b"kernel.img");
//!
//! // A host-supplied path component in native UTF-16.
//! let units: Vec<u8> = "kernel.img"
//!     .encode_utf16()
//!     .flat_map(u16::to_ne_bytes)
//!     .collect();
//! let host = FsString::borrowed(Encoding::Utf16, &units);
//!
//! // Equal, without converting either side.
//! assert_eq!(on_disk, host);
//!
//! // Coercion allocates; the result owns its buffer and frees it on drop.
//! let owned = host.duplicate_as(Encoding::Latin1).unwrap();
//! assert_eq!(owned.as_bytes(), b"kernel.img");
//! ```
//!
//! # Descriptors
//!
//! The only entity is [`FsString`], a descriptor carrying an [`Encoding`]
//! tag, a logical length in code units, and a reference to the character
//! bytes. A descriptor is either a *view* borrowing caller-owned storage or
//! an *owned* buffer allocated by [`FsString::duplicate_as`]; the two are
//! distinct variants behind one interface, so an owned buffer is released by
//! `Drop` and a view never is.
//!
//! # Encodings
//!
//! Five tags: [`Empty`](Encoding::Empty) (a distinguished zero-length state
//! that compares equal to a zero-length string of any encoding),
//! [`Latin1`](Encoding::Latin1), [`Utf8`](Encoding::Utf8),
//! [`Utf16`](Encoding::Utf16) in native byte order, and
//! [`Utf16Swapped`](Encoding::Utf16Swapped). The encoding of a string is
//! always supplied by its producer, never guessed.
//!
//! # Platform notes
//!
//! The crate is `no_std` + `alloc`; disable the default `std` feature for
//! boot environments. No operation performs I/O or blocks, and every
//! operation is bounded by its input length.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod encoding;
mod fold;
mod macros;
pub mod string;

pub use encoding::Encoding;
pub use fold::to_lower;
pub use string::{CoerceError, FsString};
