//! Loading NBT save files from disk.
//!
//! This is the thin collaborator wrapped around the decoder: open a file,
//! strip the fixed header a couple of known Bedrock save files carry, pick
//! the matching byte order, and hand the rest to the decoder. Nothing here is
//! required to use the decoder on bytes obtained some other way.
//!
//! Compressed files are out of scope; Java Edition `.dat` files are usually
//! gzipped and need decompressing before they reach this crate.

use std::fs;
use std::path::Path;

use log::debug;

use crate::cursor::Endian;
use crate::de::{from_bytes_with_opts, DecodeOpts};
use crate::error::{Error, Result};
use crate::value::NamedTag;

/// Size of the storage-version and payload-length header on a Bedrock
/// `level.dat`.
pub const LEVEL_DAT_HEADER: usize = 8;

/// Size of the header on a Bedrock `entities.dat`.
pub const ENTITIES_DAT_HEADER: usize = 12;

/// Load and decode a save file.
///
/// Files with the stem `level` or `entities` are treated as the Bedrock kinds
/// of those names: their fixed leading header is skipped and the body is
/// decoded little-endian. Anything else is decoded whole, big-endian.
pub fn load_path(path: impl AsRef<Path>) -> Result<NamedTag> {
    let path = path.as_ref();
    let data = fs::read(path)?;

    let stem = path.file_stem().and_then(|s| s.to_str());
    let (skip, endian) = match stem {
        Some("level") => (LEVEL_DAT_HEADER, Endian::Little),
        Some("entities") => (ENTITIES_DAT_HEADER, Endian::Little),
        _ => (0, Endian::Big),
    };

    if skip != 0 {
        debug!(
            "{}: bedrock save file, skipping {} header bytes, decoding little-endian",
            path.display(),
            skip
        );
    }

    let body = data
        .get(skip..)
        .ok_or_else(|| Error::truncated(0, skip, data.len()))?;

    from_bytes_with_opts(body, DecodeOpts::new().endian(endian))
}
