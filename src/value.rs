use indexmap::IndexMap;

use crate::Tag;

/// A complete NBT value. It owns its data. Compounds and lists hold their
/// children recursively.
///
/// Lists carry the element tag they declared in the input, so an empty list
/// of Int stays distinguishable from an empty list of Compound. Compounds
/// keep their entries in insertion order; when the input repeats a name, the
/// later entry wins and sits at the position of its last occurrence.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(Tag, Vec<Value>),
    Compound(IndexMap<String, Value>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Value {
    /// The wire tag this value would be written with.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(..) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }

    /// Look up a member of a compound. `None` for any other kind of value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Compound(fields) => fields.get(name),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }
}

/// The pairing of a name and a value that forms the top level of a document.
///
/// Names only exist at compound member level and at the root; for the root of
/// most real save files the name is the empty string and the value is a
/// [`Value::Compound`].
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTag {
    pub name: String,
    pub value: Value,
}
