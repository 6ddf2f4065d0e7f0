//! Lexicon authoring format (JSON) and compiled format (rkyv archive).

use std::fs;
use std::path::Path;

use kotok_protocol::Lexicon;
use rkyv::AlignedVec;

use crate::error::ConfigError;

pub fn parse_json(input: &str) -> Result<Lexicon, ConfigError> {
    Ok(serde_json::from_str(input)?)
}

pub fn compile(lexicon: &Lexicon) -> Result<AlignedVec, ConfigError> {
    rkyv::to_bytes::<_, 256>(lexicon).map_err(|e| ConfigError::Archive(e.to_string()))
}

/// Validates and deserializes a compiled archive.
pub fn load(bytes: &[u8]) -> Result<Lexicon, ConfigError> {
    // Archived data must be aligned; bytes read from disk may not be.
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    rkyv::from_bytes::<Lexicon>(&aligned).map_err(|e| ConfigError::CorruptArchive(e.to_string()))
}

pub fn read_archive(path: &Path) -> Result<Lexicon, ConfigError> {
    let bytes = fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load(&bytes)
}
