//! Hash algorithm selection for the whitening extractor.

use blake3::Hasher as Blake3Hasher;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Digest width in bits. Both supported algorithms emit 256 bits, so
/// every whitened chunk contributes exactly this many pool bits.
pub const DIGEST_BITS: usize = 256;

/// Supported hash algorithms for whitening.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// BLAKE3 - fast, secure, recommended default.
    #[default]
    Blake3,
    /// SHA-256 - widely deployed, conservative choice.
    Sha256,
}

/// One-shot chunk hasher.
///
/// Each chunk is hashed with a fresh hash state so that its digest
/// depends only on that chunk's samples, never on earlier chunks.
pub struct ChunkHasher {
    algorithm: HashAlgorithm,
}

impl ChunkHasher {
    /// Creates a hasher using the specified algorithm.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Hashes one serialized chunk into a 32-byte digest.
    pub fn digest(&self, chunk_text: &[u8]) -> [u8; 32] {
        match self.algorithm {
            HashAlgorithm::Blake3 => {
                let mut hasher = Blake3Hasher::new();
                hasher.update(chunk_text);
                *hasher.finalize().as_bytes()
            }
            HashAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(chunk_text);
                let result = hasher.finalize();
                let mut data = [0u8; 32];
                data.copy_from_slice(&result);
                data
            }
        }
    }
}

impl Default for ChunkHasher {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}
