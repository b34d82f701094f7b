pub mod ec_key_pair;
pub mod rsa_key_pair;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::domain::jwk::Jwk;
use crate::domain::key_parameter::{Curve, RsaKeySize};
use crate::error::KeyGenerationError;
use crate::infrastructure::key_pair::ec_key_pair::EcKeyPair;
use crate::infrastructure::key_pair::rsa_key_pair::RsaKeyPair;

/// Raw key material produced by the RustCrypto primitives.
pub enum KeyMaterial {
    Rsa(RsaKeyPair),
    Ec(EcKeyPair),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    Rsa(RsaKeySize),
    Ec(Curve),
}

impl KeyMaterial {
    pub fn generate(key_type: KeyType) -> Result<KeyMaterial, KeyGenerationError> {
        match key_type {
            KeyType::Rsa(size) => Ok(KeyMaterial::Rsa(RsaKeyPair::generate(size)?)),
            KeyType::Ec(curve) => Ok(KeyMaterial::Ec(EcKeyPair::generate(curve))),
        }
    }

    pub fn to_jwk(&self) -> Result<Jwk, KeyGenerationError> {
        match self {
            KeyMaterial::Rsa(rsa) => rsa.to_jwk(),
            KeyMaterial::Ec(ec) => ec.to_jwk(),
        }
    }
}

/// base64url without padding, as required for JWK members.
pub(crate) fn encode_member(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}
