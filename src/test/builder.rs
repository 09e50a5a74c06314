use crate::{Endian, Tag};

/// Builder for NBT test data. It specifically does *not* guarantee the
/// resulting bytes are valid NBT; broken input is half the point of having
/// it. Multi-byte fields are written in the builder's byte order, so Bedrock
/// shaped payloads can be built with [`Builder::little`].
pub struct Builder {
    payload: Vec<u8>,
    endian: Endian,
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            payload: Vec::new(),
            endian: Endian::Big,
        }
    }

    pub fn little() -> Self {
        Builder {
            payload: Vec::new(),
            endian: Endian::Little,
        }
    }

    pub fn tag(mut self, t: Tag) -> Self {
        self.payload.push(t as u8);
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        let name = cesu8::to_java_cesu8(name);
        self = self.raw_str_len(name.len());
        self.payload.extend_from_slice(&name);
        self
    }

    pub fn start_compound(self, name: &str) -> Self {
        self.tag(Tag::Compound).name(name)
    }

    pub fn end_compound(self) -> Self {
        self.tag(Tag::End)
    }

    pub fn start_list(self, name: &str, element_tag: Tag, size: i32) -> Self {
        self.tag(Tag::List)
            .name(name)
            .tag(element_tag)
            .int_payload(size)
    }

    pub fn byte(self, name: &str, b: i8) -> Self {
        self.tag(Tag::Byte).name(name).byte_payload(b)
    }

    pub fn short(self, name: &str, s: i16) -> Self {
        self.tag(Tag::Short).name(name).short_payload(s)
    }

    pub fn int(self, name: &str, i: i32) -> Self {
        self.tag(Tag::Int).name(name).int_payload(i)
    }

    pub fn long(self, name: &str, l: i64) -> Self {
        self.tag(Tag::Long).name(name).long_payload(l)
    }

    pub fn float(self, name: &str, f: f32) -> Self {
        self.tag(Tag::Float).name(name).float_payload(f)
    }

    pub fn double(self, name: &str, d: f64) -> Self {
        self.tag(Tag::Double).name(name).double_payload(d)
    }

    pub fn string(self, name: &str, s: &str) -> Self {
        self.tag(Tag::String).name(name).string_payload(s)
    }

    pub fn byte_array(self, name: &str, bs: &[i8]) -> Self {
        self.tag(Tag::ByteArray)
            .name(name)
            .int_payload(bs.len() as i32)
            .byte_array_payload(bs)
    }

    pub fn int_array(self, name: &str, arr: &[i32]) -> Self {
        self.tag(Tag::IntArray)
            .name(name)
            .int_payload(arr.len() as i32)
            .int_array_payload(arr)
    }

    pub fn long_array(self, name: &str, arr: &[i64]) -> Self {
        self.tag(Tag::LongArray)
            .name(name)
            .int_payload(arr.len() as i32)
            .long_array_payload(arr)
    }

    pub fn string_payload(self, s: &str) -> Self {
        self.name(s)
    }

    pub fn byte_payload(mut self, b: i8) -> Self {
        self.payload.push(b as u8);
        self
    }

    pub fn short_payload(mut self, s: i16) -> Self {
        let bs = match self.endian {
            Endian::Big => s.to_be_bytes(),
            Endian::Little => s.to_le_bytes(),
        };
        self.payload.extend_from_slice(&bs);
        self
    }

    pub fn int_payload(mut self, i: i32) -> Self {
        let bs = match self.endian {
            Endian::Big => i.to_be_bytes(),
            Endian::Little => i.to_le_bytes(),
        };
        self.payload.extend_from_slice(&bs);
        self
    }

    pub fn long_payload(mut self, l: i64) -> Self {
        let bs = match self.endian {
            Endian::Big => l.to_be_bytes(),
            Endian::Little => l.to_le_bytes(),
        };
        self.payload.extend_from_slice(&bs);
        self
    }

    pub fn float_payload(mut self, f: f32) -> Self {
        let bs = match self.endian {
            Endian::Big => f.to_be_bytes(),
            Endian::Little => f.to_le_bytes(),
        };
        self.payload.extend_from_slice(&bs);
        self
    }

    pub fn double_payload(mut self, d: f64) -> Self {
        let bs = match self.endian {
            Endian::Big => d.to_be_bytes(),
            Endian::Little => d.to_le_bytes(),
        };
        self.payload.extend_from_slice(&bs);
        self
    }

    pub fn byte_array_payload(mut self, bs: &[i8]) -> Self {
        for b in bs {
            self.payload.push(*b as u8);
        }
        self
    }

    pub fn int_array_payload(mut self, arr: &[i32]) -> Self {
        for i in arr {
            self = self.int_payload(*i);
        }
        self
    }

    pub fn long_array_payload(mut self, arr: &[i64]) -> Self {
        for l in arr {
            self = self.long_payload(*l);
        }
        self
    }

    pub fn raw_str_len(mut self, len: usize) -> Self {
        let len: u16 = len.try_into().expect("test given length beyond u16");
        let bs = match self.endian {
            Endian::Big => len.to_be_bytes(),
            Endian::Little => len.to_le_bytes(),
        };
        self.payload.extend_from_slice(&bs);
        self
    }

    /// Add arbitrary bytes, for corner cases no dedicated method covers.
    pub fn raw_bytes(mut self, bs: &[u8]) -> Self {
        self.payload.extend_from_slice(bs);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.payload
    }
}
