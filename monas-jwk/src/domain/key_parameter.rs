use std::str::FromStr;

use crate::error::KeyGenerationError;

/// RSA modulus lengths accepted by the generator.
pub const SUPPORTED_RSA_KEY_SIZES: [usize; 3] = [1024, 2048, 4096];

/// Curve names accepted by the generator, as they appear in the `crv` member.
pub const SUPPORTED_CURVES: [&str; 3] = ["P-256", "P-384", "P-521"];

/// Validated RSA modulus length in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RsaKeySize(usize);

impl RsaKeySize {
    pub const DEFAULT: RsaKeySize = RsaKeySize(4096);

    pub fn new(bits: usize) -> Result<Self, KeyGenerationError> {
        if !SUPPORTED_RSA_KEY_SIZES.contains(&bits) {
            return Err(KeyGenerationError::InvalidParameter(format!(
                "unsupported RSA key size: {bits}, must be 1024, 2048 or 4096"
            )));
        }
        Ok(Self(bits))
    }

    pub fn bits(&self) -> usize {
        self.0
    }
}

impl Default for RsaKeySize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for RsaKeySize {
    type Err = KeyGenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s.trim().parse::<usize>().map_err(|_| {
            KeyGenerationError::InvalidParameter(format!(
                "RSA params must be an integer key size, got {s:?}"
            ))
        })?;
        Self::new(bits)
    }
}

/// Named NIST curve for EC keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Curve {
    P256,
    P384,
    #[default]
    P521,
}

impl Curve {
    pub const ALL: [Curve; 3] = [Curve::P256, Curve::P384, Curve::P521];

    pub fn as_str(&self) -> &'static str {
        match self {
            Curve::P256 => SUPPORTED_CURVES[0],
            Curve::P384 => SUPPORTED_CURVES[1],
            Curve::P521 => SUPPORTED_CURVES[2],
        }
    }

    /// Byte length of a field element, which is also the length of `x`, `y` and `d`.
    pub fn field_size(&self) -> usize {
        match self {
            Curve::P256 => 32,
            Curve::P384 => 48,
            Curve::P521 => 66,
        }
    }
}

impl FromStr for Curve {
    type Err = KeyGenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Curve::ALL
            .into_iter()
            .find(|curve| curve.as_str() == s)
            .ok_or_else(|| {
                KeyGenerationError::InvalidParameter(format!(
                    "unsupported EC curve: {s}, must be P-256, P-384 or P-521"
                ))
            })
    }
}
