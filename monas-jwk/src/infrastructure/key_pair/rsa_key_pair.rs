use rand_core::OsRng;
use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use rsa::RsaPrivateKey;

use crate::domain::jwk::{Jwk, RsaJwk};
use crate::domain::key_parameter::RsaKeySize;
use crate::error::KeyGenerationError;
use crate::infrastructure::key_pair::encode_member;

#[derive(Clone)]
pub struct RsaKeyPair {
    secret_key: RsaPrivateKey,
}

impl RsaKeyPair {
    pub fn secret_key(&self) -> &RsaPrivateKey {
        &self.secret_key
    }

    /// Generates a two-prime key with public exponent 65537.
    pub fn generate(size: RsaKeySize) -> Result<RsaKeyPair, KeyGenerationError> {
        let secret_key = RsaPrivateKey::new(&mut OsRng, size.bits())
            .map_err(|e| KeyGenerationError::GenerationFailure(e.to_string()))?;
        Ok(RsaKeyPair { secret_key })
    }

    pub fn to_jwk(&self) -> Result<Jwk, KeyGenerationError> {
        let key = &self.secret_key;
        let (p, q) = match key.primes() {
            [p, q] => (p, q),
            primes => {
                return Err(KeyGenerationError::GenerationFailure(format!(
                    "expected 2 RSA primes, found {}",
                    primes.len()
                )))
            }
        };
        let missing_crt =
            || KeyGenerationError::GenerationFailure("RSA CRT values are not precomputed".into());
        let dp = key.dp().ok_or_else(missing_crt)?;
        let dq = key.dq().ok_or_else(missing_crt)?;
        // qinv = q^-1 mod p, always reduced to a positive value
        let (_, qi) = key.qinv().ok_or_else(missing_crt)?.to_bytes_be();

        Ok(Jwk::Rsa(RsaJwk {
            kid: None,
            n: encode_member(&key.n().to_bytes_be()),
            e: encode_member(&key.e().to_bytes_be()),
            d: Some(encode_member(&key.d().to_bytes_be())),
            p: Some(encode_member(&p.to_bytes_be())),
            q: Some(encode_member(&q.to_bytes_be())),
            dp: Some(encode_member(&dp.to_bytes_be())),
            dq: Some(encode_member(&dq.to_bytes_be())),
            qi: Some(encode_member(&qi)),
        }))
    }
}

impl PartialEq for RsaKeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.secret_key == other.secret_key
    }
}
