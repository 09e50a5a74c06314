//! The tag-tree decoder.
//!
//! The entry points are [`from_bytes`] for canonical big-endian NBT and
//! [`from_bytes_with_opts`] when the byte order or nesting limit needs to be
//! picked explicitly:
//!
//! ```
//! use pocketnbt::{from_bytes_with_opts, DecodeOpts, Endian};
//! # use pocketnbt::error::Result;
//! # fn main() -> Result<()> {
//! // {"pi": Float(3.25)} in Bedrock byte order.
//! let buf = [10, 0, 0, 5, 2, 0, b'p', b'i', 0, 0, 80, 64, 0];
//! let root = from_bytes_with_opts(&buf, DecodeOpts::new().endian(Endian::Little))?;
//! assert_eq!(root.value.get("pi").and_then(|v| v.as_f64()), Some(3.25));
//! # Ok(())
//! # }
//! ```
//!
//! Decoding walks the buffer depth-first with ordinary recursion. Because the
//! input controls the nesting, recursion is bounded by [`DecodeOpts::max_depth`]
//! rather than by whatever the stack happens to tolerate. All errors abort the
//! decode; once a stream is misaligned there is no way to find the next tag
//! boundary, so no recovery is attempted.

use indexmap::IndexMap;

use crate::cursor::{Cursor, Endian};
use crate::error::{Error, Result};
use crate::value::{NamedTag, Value};
use crate::Tag;

/// Default limit for [`DecodeOpts::max_depth`]. Deep enough for any save file
/// produced by the game, small enough that hostile input cannot exhaust the
/// stack.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options controlling a decode. The default is canonical NBT: big-endian,
/// nesting limited to [`DEFAULT_MAX_DEPTH`].
#[derive(Debug, Clone, Copy)]
pub struct DecodeOpts {
    endian: Endian,
    max_depth: usize,
}

impl Default for DecodeOpts {
    fn default() -> Self {
        DecodeOpts {
            endian: Endian::Big,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOpts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte order of multi-byte fields.
    pub fn endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    /// Maximum nesting of compounds and lists before the decode fails with
    /// [`ErrorKind::NestingTooDeep`](crate::error::ErrorKind::NestingTooDeep).
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Decode a whole document from big-endian bytes.
pub fn from_bytes(data: &[u8]) -> Result<NamedTag> {
    from_bytes_with_opts(data, DecodeOpts::default())
}

/// Decode a whole document with explicit options.
pub fn from_bytes_with_opts(data: &[u8], opts: DecodeOpts) -> Result<NamedTag> {
    Decoder::new(data, opts).root()
}

/// Recursive-descent decoder over a byte buffer.
///
/// Most callers want [`from_bytes`]. The decoder itself is public for the
/// cases where a payload sits bare in a buffer without the leading tag and
/// name, such as decoding a single compound body out of a larger blob.
///
/// A decoder owns its cursor and keeps no state between documents; decoding
/// the same buffer with two decoders yields two structurally equal,
/// independent trees.
pub struct Decoder<'a> {
    cursor: Cursor<'a>,
    max_depth: usize,
    depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8], opts: DecodeOpts) -> Self {
        Decoder {
            cursor: Cursor::new(data, opts.endian),
            max_depth: opts.max_depth,
            depth: 0,
        }
    }

    /// Offset of the next unread byte. After a successful decode this is the
    /// total number of bytes the value occupied.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Decode the root named tag: one type byte, a name, then the payload.
    ///
    /// A root type byte of End fails with `UnexpectedEnd`; an empty input is
    /// not a tree.
    pub fn root(&mut self) -> Result<NamedTag> {
        let start = self.cursor.position();
        let tag = self.tag()?;
        if tag == Tag::End {
            return Err(Error::unexpected_end(start));
        }
        let name = self.string()?;
        let value = self.value(tag)?;
        Ok(NamedTag { name, value })
    }

    /// Decode one payload of the given kind, without a leading tag or name.
    pub fn value(&mut self, tag: Tag) -> Result<Value> {
        match tag {
            // End carries no payload. Landing here means the caller asked for
            // one, which only a malformed stream can cause.
            Tag::End => Err(Error::unexpected_end(self.cursor.position())),
            Tag::Byte => Ok(Value::Byte(self.cursor.read_i8()?)),
            Tag::Short => Ok(Value::Short(self.cursor.read_i16()?)),
            Tag::Int => Ok(Value::Int(self.cursor.read_i32()?)),
            Tag::Long => Ok(Value::Long(self.cursor.read_i64()?)),
            Tag::Float => Ok(Value::Float(self.cursor.read_f32()?)),
            Tag::Double => Ok(Value::Double(self.cursor.read_f64()?)),
            Tag::ByteArray => {
                let len = self.array_len(1)?;
                let bs = self.cursor.take(len)?;
                Ok(Value::ByteArray(bs.iter().map(|&b| b as i8).collect()))
            }
            Tag::String => Ok(Value::String(self.string()?)),
            Tag::List => self.list(),
            Tag::Compound => self.compound(),
            Tag::IntArray => {
                let len = self.array_len(std::mem::size_of::<i32>())?;
                let mut data = Vec::with_capacity(len);
                for _ in 0..len {
                    data.push(self.cursor.read_i32()?);
                }
                Ok(Value::IntArray(data))
            }
            Tag::LongArray => {
                let len = self.array_len(std::mem::size_of::<i64>())?;
                let mut data = Vec::with_capacity(len);
                for _ in 0..len {
                    data.push(self.cursor.read_i64()?);
                }
                Ok(Value::LongArray(data))
            }
        }
    }

    fn tag(&mut self) -> Result<Tag> {
        let pos = self.cursor.position();
        let b = self.cursor.read_u8()?;
        Tag::try_from(b).map_err(|_| Error::invalid_tag(pos, b))
    }

    /// Length-prefixed modified-UTF-8 string, shared by names and String
    /// payloads. The length is unsigned 16-bit; zero lengths consume nothing
    /// further.
    fn string(&mut self) -> Result<String> {
        let len = self.cursor.read_u16()? as usize;
        if len == 0 {
            return Ok(String::new());
        }
        let pos = self.cursor.position();
        let bs = self.cursor.take(len)?;
        let s = cesu8::from_java_cesu8(bs).map_err(|_| Error::invalid_encoding(pos, bs))?;
        Ok(s.into_owned())
    }

    /// Signed 32-bit array length prefix. Rejects negative lengths, and
    /// lengths claiming more element bytes than the buffer holds, before any
    /// allocation happens.
    fn array_len(&mut self, elem_size: usize) -> Result<usize> {
        let pos = self.cursor.position();
        let raw = self.cursor.read_i32()?;
        let len: usize = raw
            .try_into()
            .map_err(|_| Error::negative_length(pos, raw))?;
        let bytes = len.saturating_mul(elem_size);
        if bytes > self.cursor.remaining() {
            return Err(Error::truncated(pos, bytes, self.cursor.remaining()));
        }
        Ok(len)
    }

    fn list(&mut self) -> Result<Value> {
        self.descend()?;
        let tag_pos = self.cursor.position();
        let element = self.tag()?;
        let len_pos = self.cursor.position();
        let len = self.cursor.read_i32()?;
        if len < 0 {
            return Err(Error::negative_length(len_pos, len));
        }
        // An empty list still declares an element type, often End. Elements
        // of type End do not exist, so a nonzero count is malformed.
        if element == Tag::End && len > 0 {
            return Err(Error::invalid_list_type(tag_pos, len));
        }
        let mut items = Vec::new();
        for _ in 0..len {
            items.push(self.value(element)?);
        }
        self.depth -= 1;
        Ok(Value::List(element, items))
    }

    fn compound(&mut self) -> Result<Value> {
        self.descend()?;
        let mut fields = IndexMap::new();
        loop {
            let tag = self.tag()?;
            if tag == Tag::End {
                break;
            }
            let name = self.string()?;
            let value = self.value(tag)?;
            // Last occurrence of a repeated name wins, including its position.
            fields.shift_remove(&name);
            fields.insert(name, value);
        }
        self.depth -= 1;
        Ok(Value::Compound(fields))
    }

    fn descend(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(Error::nesting_too_deep(
                self.cursor.position(),
                self.max_depth,
            ));
        }
        Ok(())
    }
}
