use serde_json::Value;

use crate::domain::key_pair::{GeneratedKeyPair, KeyPair};
use crate::domain::key_parameter::{Curve, RsaKeySize};
use crate::error::KeyGenerationError;
use crate::infrastructure::key_id::Sha256KeyIdGenerator;
use crate::infrastructure::key_pair::{KeyMaterial, KeyType};

/// Generator for RSA keys of a fixed, validated size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RsaKeyGenerator {
    key_size: RsaKeySize,
}

impl RsaKeyGenerator {
    pub fn new(key_size: usize) -> Result<Self, KeyGenerationError> {
        Ok(Self {
            key_size: RsaKeySize::new(key_size)?,
        })
    }

    pub fn key_size(&self) -> RsaKeySize {
        self.key_size
    }

    pub fn generate(&self) -> Result<KeyPair, KeyGenerationError> {
        generate_key_pair(KeyType::Rsa(self.key_size))
    }
}

/// Generator for EC keys on a fixed, validated curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EcKeyGenerator {
    curve: Curve,
}

impl EcKeyGenerator {
    pub fn new(crv: &str) -> Result<Self, KeyGenerationError> {
        Ok(Self { curve: crv.parse()? })
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn generate(&self) -> Result<KeyPair, KeyGenerationError> {
        generate_key_pair(KeyType::Ec(self.curve))
    }
}

/// Key generator selected from a `kty` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyGenerator {
    Rsa(RsaKeyGenerator),
    Ec(EcKeyGenerator),
}

impl KeyGenerator {
    /// Validates `kty` and `params` without generating anything.
    ///
    /// For `RSA`, `params` is the key size in bits; for `EC` it is the curve name.
    /// A missing or empty `params` selects the default (4096 bits / `P-521`).
    pub fn from_request(kty: &str, params: Option<&str>) -> Result<Self, KeyGenerationError> {
        let params = params.filter(|p| !p.is_empty());
        match kty {
            "RSA" => {
                let key_size = match params {
                    Some(p) => p.parse()?,
                    None => RsaKeySize::default(),
                };
                Ok(KeyGenerator::Rsa(RsaKeyGenerator { key_size }))
            }
            "EC" => match params {
                Some(crv) => Ok(KeyGenerator::Ec(EcKeyGenerator::new(crv)?)),
                None => Ok(KeyGenerator::Ec(EcKeyGenerator::default())),
            },
            _ => Err(KeyGenerationError::InvalidParameter(
                "kty must be either RSA or EC".to_string(),
            )),
        }
    }

    pub fn generate(&self) -> Result<KeyPair, KeyGenerationError> {
        match self {
            KeyGenerator::Rsa(rsa) => rsa.generate(),
            KeyGenerator::Ec(ec) => ec.generate(),
        }
    }
}

fn generate_key_pair(key_type: KeyType) -> Result<KeyPair, KeyGenerationError> {
    let material = KeyMaterial::generate(key_type)?;
    let key_pair = KeyPair::new(material.to_jwk()?, &Sha256KeyIdGenerator)?;
    tracing::debug!(?key_type, kid = %key_pair.kid(), "generated key pair");
    Ok(key_pair)
}

pub fn generate_keys(
    kty: &str,
    params: Option<&str>,
) -> Result<GeneratedKeyPair, KeyGenerationError> {
    let generator = KeyGenerator::from_request(kty, params).inspect_err(|e| {
        tracing::debug!(kty, ?params, error = %e, "rejected key parameters");
    })?;
    Ok(generator.generate()?.to_view())
}

pub fn generate_keys_as_json(
    kty: &str,
    params: Option<&str>,
) -> Result<String, KeyGenerationError> {
    generate_keys(kty, params)?.as_text()
}

pub fn generate_keys_as_dict(kty: &str, params: Option<&str>) -> Result<Value, KeyGenerationError> {
    generate_keys(kty, params)?.as_structured()
}
