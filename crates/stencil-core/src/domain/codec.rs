//! Content codec: hashing and optional compression of file bytes.
//!
//! ## Storage policy
//!
//! | Content                      | Stored as                         |
//! |------------------------------|-----------------------------------|
//! | UTF-8, < 1024 bytes          | verbatim                          |
//! | UTF-8, >= 1024 bytes         | base64(gzip) if strictly shorter, |
//! |                              | verbatim otherwise                |
//! | not UTF-8                    | base64(gzip), always              |
//!
//! JSON strings cannot carry arbitrary bytes, so binary content always takes
//! the encoded form regardless of size.

use std::io::{Read, Write};

use base64::{Engine as _, engine::general_purpose};
use flate2::{Compression, read::GzDecoder, write::GzEncoder};
use sha2::{Digest, Sha256};

use crate::domain::{error::DomainError, schema::TemplateSchema};

/// Content shorter than this is never compressed.
pub const COMPRESSION_THRESHOLD: usize = 1024;

/// Encode `content` for storage inside a schema.
///
/// Returns the stored string and whether it is the compressed form.
pub fn compress(content: &[u8]) -> Result<(String, bool), DomainError> {
    let text = std::str::from_utf8(content).ok();

    if let Some(text) = text.filter(|_| content.len() < COMPRESSION_THRESHOLD) {
        return Ok((text.to_owned(), false));
    }

    let encoded = gzip_base64(content)?;

    match text {
        Some(text) if encoded.len() >= content.len() => Ok((text.to_owned(), false)),
        _ => Ok((encoded, true)),
    }
}

/// Reverse [`compress`].
pub fn decompress(stored: &str, compressed: bool) -> Result<Vec<u8>, DomainError> {
    if !compressed {
        return Ok(stored.as_bytes().to_vec());
    }

    let gz = general_purpose::STANDARD
        .decode(stored)
        .map_err(|e| DomainError::Decode {
            reason: format!("invalid base64: {e}"),
        })?;

    let mut out = Vec::new();
    GzDecoder::new(gz.as_slice())
        .read_to_end(&mut out)
        .map_err(|e| DomainError::Decode {
            reason: format!("invalid gzip stream: {e}"),
        })?;
    Ok(out)
}

/// SHA-256 of `content`, lowercase hex.
pub fn content_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Whole-schema hash over identity and each file's `(path, hash)` in order.
///
/// File contents are not hashed directly; a changed file changes its own
/// hash, which changes this one.
pub fn schema_hash(schema: &TemplateSchema) -> String {
    let mut hasher = Sha256::new();
    hasher.update(schema.name.as_bytes());
    hasher.update(schema.template_type.as_bytes());
    hasher.update(schema.version.as_bytes());

    for file in &schema.files {
        hasher.update(file.path.as_bytes());
        hasher.update(file.hash.as_bytes());
    }

    hex::encode(hasher.finalize())
}

fn gzip_base64(content: &[u8]) -> Result<String, DomainError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(content)
        .and_then(|()| encoder.finish())
        .map(|gz| general_purpose::STANDARD.encode(gz))
        .map_err(|e| DomainError::Encode {
            reason: e.to_string(),
        })
}
