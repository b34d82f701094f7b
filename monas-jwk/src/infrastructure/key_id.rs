use crate::domain::key_id::{KeyId, KeyIdGenerator};
use sha2::{Digest, Sha256};

/// Derives the key id as the lowercase hex SHA-256 digest of the public key export.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256KeyIdGenerator;

impl KeyIdGenerator for Sha256KeyIdGenerator {
    fn generate(&self, public_key: &[u8]) -> KeyId {
        let mut hasher = Sha256::new();
        hasher.update(public_key);
        let hash = hasher.finalize();
        KeyId::new(hex::encode(hash))
    }
}
