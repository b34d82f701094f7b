/// Errors raised while validating parameters or producing key material.
///
/// `InvalidParameter` is always raised before any key material is generated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyGenerationError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("key generation failed: {0}")]
    GenerationFailure(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl KeyGenerationError {
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, KeyGenerationError::InvalidParameter(_))
    }
}

impl From<serde_json::Error> for KeyGenerationError {
    fn from(e: serde_json::Error) -> Self {
        KeyGenerationError::Serialization(e.to_string())
    }
}
