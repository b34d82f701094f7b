use std::fmt;

use serde::{Deserialize, Serialize};

/// Key identifier (`kid`) attached to every generated JWK.
///
/// The value is derived from the public key only; how it is derived is left to a
/// [`KeyIdGenerator`] implementation in the infrastructure layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyId(String);

impl KeyId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Port for deriving a [`KeyId`] from the canonical public-key export.
pub trait KeyIdGenerator {
    fn generate(&self, public_key: &[u8]) -> KeyId;
}
