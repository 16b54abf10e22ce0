//! Hashing utilities for comparing derived configuration.
//!
//! This module provides:
//! - `ObjectHash`: A truncated 20-character hash of a serialized value
//! - `Hashable`: Blanket hashing for any `Serialize` type
//! - `hash_bytes()`: Full-length hashing of arbitrary bytes

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::consts::OBJ_HASH_PREFIX_LEN;

pub type HashError = serde_json::Error;

/// A content hash identifying a serialized value.
///
/// The hash is a 20-character truncated SHA-256 of the JSON-serialized struct.
/// Two values with equal serialized forms always produce the same hash, which
/// lets downstream matching detect "nothing changed" without field-by-field
/// comparison.
///
/// # Format
///
/// The hash is a lowercase hexadecimal string, e.g., `"a1b2c3d4e5f6789012ab"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectHash(pub String);

impl std::fmt::Display for ObjectHash {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

pub trait Hashable: Serialize {
  fn compute_hash(&self) -> Result<ObjectHash, HashError> {
    let serialized = serde_json::to_string(self)?;
    let full = hash_bytes(serialized.as_bytes());
    Ok(ObjectHash(full[..OBJ_HASH_PREFIX_LEN].to_string()))
  }
}

/// Hash arbitrary bytes.
///
/// Returns the full 64-character SHA256 hash as lowercase hex.
pub fn hash_bytes(data: &[u8]) -> String {
  let mut hasher = Sha256::new();
  hasher.update(data);
  format!("{:x}", hasher.finalize())
}
