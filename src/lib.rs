//! pocketnbt decodes the Named Binary Tag (NBT) format that Minecraft-family
//! games use for world data, player inventories and most everything else they
//! persist.
//!
//! * For decoding byte buffers, see [`from_bytes`] and [`from_bytes_with_opts`].
//! * For the resulting tree type, see [`Value`] and [`NamedTag`].
//! * For opening save files with their fixed headers, see [`load_path`].
//!
//! Both the canonical big-endian wire format of Java Edition and the
//! little-endian variant written by Bedrock/Pocket Edition are supported; the
//! byte order is a decode option, not a separate API.
//!
//! # Quick example
//!
//! Decoding a buffer and pulling one field out of the root compound:
//!
//! ```
//! use pocketnbt::from_bytes;
//! # use pocketnbt::error::Result;
//! # fn main() -> Result<()> {
//! // A root compound holding a single Int named "DataVersion".
//! let buf = [
//!     10, 0, 0, 3, 0, 11, 68, 97, 116, 97, 86, 101, 114, 115, 105, 111, 110,
//!     0, 0, 15, 103, 0,
//! ];
//! let root = from_bytes(&buf)?;
//! assert_eq!(
//!     root.value.get("DataVersion").and_then(|v| v.as_i64()),
//!     Some(3943),
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Scope
//!
//! This crate only reads. There is no encoder, no tree editing, and no
//! compression handling; gzipped Java Edition files need inflating before the
//! bytes get here. Decoding makes no assumptions about which names a given
//! save file should contain.

pub mod de;
pub mod error;

mod cursor;
mod files;
mod value;

pub use cursor::{Cursor, Endian};
pub use de::{from_bytes, from_bytes_with_opts, DecodeOpts, Decoder};
pub use files::*;
pub use value::*;

#[cfg(test)]
mod test;

/// An NBT tag type. This identifies the shape of a payload but carries no
/// value or name itself.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Terminates a Compound. Never carries a payload.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// An array of Byte (i8).
    ByteArray = 7,
    /// A length-prefixed modified-UTF-8 string.
    String = 8,
    /// A counted sequence of payloads sharing one declared element type.
    List = 9,
    /// Named members in written order, terminated by End.
    Compound = 10,
    /// An array of Int (i32).
    IntArray = 11,
    /// An array of Long (i64).
    LongArray = 12,
}

// Written out by hand rather than derived; the set of tags is fixed by the
// format and will essentially never change.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}
