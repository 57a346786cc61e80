//! Serde support: a descriptor serializes as an `(encoding, bytes)` pair.

use core::fmt;

use alloc::vec::Vec;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::FsString;
use crate::encoding::Encoding;

const ENCODING_VARIANTS: &[&str] = &["Empty", "Latin1", "Utf8", "Utf16", "Utf16Swapped"];

impl Serialize for Encoding {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let (index, name) = match self {
            Self::Empty => (0, "Empty"),
            Self::Latin1 => (1, "Latin1"),
            Self::Utf8 => (2, "Utf8"),
            Self::Utf16 => (3, "Utf16"),
            Self::Utf16Swapped => (4, "Utf16Swapped"),
        };
        serializer.serialize_unit_variant("Encoding", index, name)
    }
}

impl<'de> Deserialize<'de> for Encoding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        /// Variant identifier, accepted as an index or a name.
        struct Tag(Encoding);

        impl<'de> Deserialize<'de> for Tag {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct IdentVisitor;

                impl de::Visitor<'_> for IdentVisitor {
                    type Value = Tag;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str("an encoding variant name or index")
                    }

                    fn visit_u64<E>(self, value: u64) -> Result<Tag, E>
                    where
                        E: de::Error,
                    {
                        let encoding = match value {
                            0 => Encoding::Empty,
                            1 => Encoding::Latin1,
                            2 => Encoding::Utf8,
                            3 => Encoding::Utf16,
                            4 => Encoding::Utf16Swapped,
                            _ => {
                                return Err(E::invalid_value(
                                    de::Unexpected::Unsigned(value),
                                    &"a variant index between 0 and 4",
                                ))
                            }
                        };
                        Ok(Tag(encoding))
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Tag, E>
                    where
                        E: de::Error,
                    {
                        let encoding = match value {
                            "Empty" => Encoding::Empty,
                            "Latin1" => Encoding::Latin1,
                            "Utf8" => Encoding::Utf8,
                            "Utf16" => Encoding::Utf16,
                            "Utf16Swapped" => Encoding::Utf16Swapped,
                            _ => return Err(E::unknown_variant(value, ENCODING_VARIANTS)),
                        };
                        Ok(Tag(encoding))
                    }
                }

                deserializer.deserialize_identifier(IdentVisitor)
            }
        }

        struct TagVisitor;

        impl<'de> de::Visitor<'de> for TagVisitor {
            type Value = Encoding;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an encoding tag")
            }

            fn visit_enum<A>(self, data: A) -> Result<Encoding, A::Error>
            where
                A: de::EnumAccess<'de>,
            {
                use serde::de::VariantAccess;

                let (tag, variant) = data.variant::<Tag>()?;
                variant.unit_variant()?;
                Ok(tag.0)
            }
        }

        deserializer.deserialize_enum("Encoding", ENCODING_VARIANTS, TagVisitor)
    }
}

impl Serialize for FsString<'_> {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.encoding(), self.as_bytes()).serialize(serializer)
    }
}

/// Deserializes to an owned descriptor.
///
/// The logical length is rederived from the bytes, the same way
/// [`FsString::borrowed`] derives it, so serialized data cannot smuggle in a
/// length that violates the descriptor invariants.
impl<'de> Deserialize<'de> for FsString<'_> {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (encoding, bytes) = <(Encoding, Vec<u8>)>::deserialize(deserializer)?;
        Ok(Self::from_vec(encoding, bytes))
    }
}

#[cfg(test)]
mod tests;
