use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::jwk::Jwk;
use crate::domain::key_id::{KeyId, KeyIdGenerator};
use crate::error::KeyGenerationError;

/// One generated asymmetric key together with its key id.
///
/// The key id is computed from the public members when the value is built, so a
/// `KeyPair` never exists without its `kid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    kid: KeyId,
    jwk: Jwk,
}

impl KeyPair {
    pub fn new<G: KeyIdGenerator>(
        material: Jwk,
        generator: &G,
    ) -> Result<Self, KeyGenerationError> {
        let kid = generator.generate(&material.public_key_bytes()?);
        let jwk = material.with_kid(&kid);
        Ok(Self { kid, jwk })
    }

    pub fn kid(&self) -> &KeyId {
        &self.kid
    }

    pub fn export_private(&self) -> Jwk {
        self.jwk.clone()
    }

    pub fn export_public(&self) -> Jwk {
        self.jwk.to_public()
    }

    /// Full export. For asymmetric keys this carries the same members as
    /// [`KeyPair::export_private`].
    pub fn export(&self) -> Jwk {
        self.jwk.clone()
    }

    pub fn to_view(&self) -> GeneratedKeyPair {
        GeneratedKeyPair {
            private_key: self.export_private(),
            public_key: self.export_public(),
            private_public_pair: self.export(),
        }
    }
}

/// Externally visible shape of a generated key pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedKeyPair {
    pub private_key: Jwk,
    pub public_key: Jwk,
    pub private_public_pair: Jwk,
}

impl GeneratedKeyPair {
    /// Ordered map with `private_key`, `public_key` and `private_public_pair`.
    pub fn as_structured(&self) -> Result<Value, KeyGenerationError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn as_text(&self) -> Result<String, KeyGenerationError> {
        Ok(serde_json::to_string(&self.as_structured()?)?)
    }

    pub fn as_pretty_text(&self) -> Result<String, KeyGenerationError> {
        Ok(serde_json::to_string_pretty(&self.as_structured()?)?)
    }
}
