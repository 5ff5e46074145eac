use std::path::Path;

use rkyv::{AlignedVec, Deserialize};
use sloka_protocol::Dictionary;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("lexicon archive is corrupt: {0}")]
    Corrupt(String),
    #[error("failed to encode lexicon: {0}")]
    Encode(String),
    #[error("failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializes a dictionary document into an `rkyv` archive.
pub fn encode_dictionary(dict: &Dictionary) -> Result<Vec<u8>, LexiconError> {
    let bytes = rkyv::to_bytes::<_, 1024>(dict).map_err(|e| LexiconError::Encode(format!("{:?}", e)))?;
    Ok(bytes.to_vec())
}

/// Validates and decodes an archive produced by [`encode_dictionary`].
///
/// The bytes are copied into an aligned buffer first, so slices read
/// straight from disk are accepted.
pub fn decode_dictionary(bytes: &[u8]) -> Result<Dictionary, LexiconError> {
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    let archived = rkyv::check_archived_root::<Dictionary>(&aligned)
        .map_err(|e| LexiconError::Corrupt(format!("{:?}", e)))?;

    let dict: Dictionary = archived
        .deserialize(&mut rkyv::Infallible)
        .map_err(|e| LexiconError::Corrupt(format!("{:?}", e)))?;
    Ok(dict)
}

/// Reads and decodes a compiled lexicon file.
pub fn read_dictionary(path: impl AsRef<Path>) -> Result<Dictionary, LexiconError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let dict = decode_dictionary(&bytes)?;
    info!(path = %path.display(), version = dict.version, entries = dict.entries.len(), "compiled lexicon loaded");
    Ok(dict)
}
