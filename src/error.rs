//! Contains the Error and Result type used by the decoder.

/// An error produced while decoding NBT data.
///
/// Every decode error records the byte offset it was detected at, which is
/// usually the offset of the field that failed to read. Use [`kind`] to
/// distinguish failure classes programmatically and the `Display`
/// implementation for a human-readable message.
///
/// [`kind`]: Error::kind
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
    pos: usize,
}

/// The class of a decode failure.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Fewer bytes remained in the input than a field required.
    TruncatedInput,

    /// An array or list length prefix decoded to a negative value.
    NegativeLength,

    /// A list declared element type End while claiming a nonzero count.
    InvalidListType,

    /// A tag type byte was not one of the known ids 0..=12.
    InvalidTag,

    /// String bytes were not valid modified UTF-8.
    InvalidEncoding,

    /// The root tag was End, meaning the input holds no tree at all.
    UnexpectedEnd,

    /// Nesting of compounds and lists exceeded the configured depth limit.
    NestingTooDeep,

    /// An I/O failure while loading a file, before decoding started.
    Io,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The class of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Byte offset into the input at which the error was detected. Zero for
    /// [`ErrorKind::Io`], where no decoding has happened yet.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn truncated(pos: usize, needed: usize, remaining: usize) -> Error {
        Error {
            msg: format!(
                "truncated input: needed {} bytes at offset {}, {} remain",
                needed, pos, remaining
            ),
            kind: ErrorKind::TruncatedInput,
            pos,
        }
    }

    pub(crate) fn negative_length(pos: usize, len: i32) -> Error {
        Error {
            msg: format!("negative length {} at offset {}", len, pos),
            kind: ErrorKind::NegativeLength,
            pos,
        }
    }

    pub(crate) fn invalid_list_type(pos: usize, len: i32) -> Error {
        Error {
            msg: format!(
                "list of End with nonzero length {} at offset {}",
                len, pos
            ),
            kind: ErrorKind::InvalidListType,
            pos,
        }
    }

    pub(crate) fn invalid_tag(pos: usize, tag: u8) -> Error {
        Error {
            msg: format!("invalid tag type {} at offset {}", tag, pos),
            kind: ErrorKind::InvalidTag,
            pos,
        }
    }

    pub(crate) fn invalid_encoding(pos: usize, data: &[u8]) -> Error {
        Error {
            msg: format!(
                "invalid string at offset {}: {}",
                pos,
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::InvalidEncoding,
            pos,
        }
    }

    pub(crate) fn unexpected_end(pos: usize) -> Error {
        Error {
            msg: format!("unexpected End tag at offset {}: input holds no tree", pos),
            kind: ErrorKind::UnexpectedEnd,
            pos,
        }
    }

    pub(crate) fn nesting_too_deep(pos: usize, limit: usize) -> Error {
        Error {
            msg: format!(
                "nesting exceeded {} levels at offset {}",
                limit, pos
            ),
            kind: ErrorKind::NestingTooDeep,
            pos,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error {
            msg: format!("io error: {}", e),
            kind: ErrorKind::Io,
            pos: 0,
        }
    }
}
