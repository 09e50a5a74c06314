//! The forward-only byte cursor the decoder reads through.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{Error, Result};

/// Byte order of multi-byte fields in the input.
///
/// Java Edition writes big-endian NBT. Bedrock/Pocket Edition save files
/// write the same structure little-endian. Single-byte fields are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    #[default]
    Big,
    Little,
}

/// A bounds-checked reading position over an in-memory buffer.
///
/// The cursor only ever moves forward. It never copies or mutates the
/// underlying data; every read hands back a subslice of the original buffer
/// or a value decoded from one.
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    endian: Endian,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8], endian: Endian) -> Self {
        Cursor {
            data,
            pos: 0,
            endian,
        }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Take the next `n` bytes, advancing the cursor past them.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(Error::truncated(self.pos, n, self.remaining()));
        }
        let bs = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bs)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let bs = self.take(2)?;
        Ok(match self.endian {
            Endian::Big => BigEndian::read_u16(bs),
            Endian::Little => LittleEndian::read_u16(bs),
        })
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let bs = self.take(2)?;
        Ok(match self.endian {
            Endian::Big => BigEndian::read_i16(bs),
            Endian::Little => LittleEndian::read_i16(bs),
        })
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let bs = self.take(4)?;
        Ok(match self.endian {
            Endian::Big => BigEndian::read_i32(bs),
            Endian::Little => LittleEndian::read_i32(bs),
        })
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let bs = self.take(8)?;
        Ok(match self.endian {
            Endian::Big => BigEndian::read_i64(bs),
            Endian::Little => LittleEndian::read_i64(bs),
        })
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let bs = self.take(4)?;
        Ok(match self.endian {
            Endian::Big => BigEndian::read_f32(bs),
            Endian::Little => LittleEndian::read_f32(bs),
        })
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let bs = self.take(8)?;
        Ok(match self.endian {
            Endian::Big => BigEndian::read_f64(bs),
            Endian::Little => LittleEndian::read_f64(bs),
        })
    }
}
