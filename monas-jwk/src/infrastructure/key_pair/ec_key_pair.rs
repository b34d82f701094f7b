use p256::elliptic_curve::rand_core::OsRng;
use p256::elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use p256::elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytesSize, SecretKey};

use crate::domain::jwk::{EcJwk, Jwk};
use crate::domain::key_parameter::Curve;
use crate::error::KeyGenerationError;
use crate::infrastructure::key_pair::encode_member;

#[derive(Clone)]
pub enum EcKeyPair {
    P256(p256::SecretKey),
    P384(p384::SecretKey),
    P521(p521::SecretKey),
}

impl EcKeyPair {
    pub fn generate(curve: Curve) -> EcKeyPair {
        match curve {
            Curve::P256 => EcKeyPair::P256(p256::SecretKey::random(&mut OsRng)),
            Curve::P384 => EcKeyPair::P384(p384::SecretKey::random(&mut OsRng)),
            Curve::P521 => EcKeyPair::P521(p521::SecretKey::random(&mut OsRng)),
        }
    }

    pub fn curve(&self) -> Curve {
        match self {
            EcKeyPair::P256(_) => Curve::P256,
            EcKeyPair::P384(_) => Curve::P384,
            EcKeyPair::P521(_) => Curve::P521,
        }
    }

    pub fn to_jwk(&self) -> Result<Jwk, KeyGenerationError> {
        match self {
            EcKeyPair::P256(secret_key) => ec_jwk(self.curve(), secret_key),
            EcKeyPair::P384(secret_key) => ec_jwk(self.curve(), secret_key),
            EcKeyPair::P521(secret_key) => ec_jwk(self.curve(), secret_key),
        }
    }
}

fn ec_jwk<C>(curve: Curve, secret_key: &SecretKey<C>) -> Result<Jwk, KeyGenerationError>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let point = secret_key.public_key().to_encoded_point(false);
    let (Some(x), Some(y)) = (point.x(), point.y()) else {
        return Err(KeyGenerationError::GenerationFailure(
            "EC public key has no affine coordinates".into(),
        ));
    };

    Ok(Jwk::Ec(EcJwk {
        kid: None,
        crv: curve.as_str().to_string(),
        x: encode_member(x.as_slice()),
        y: encode_member(y.as_slice()),
        d: Some(encode_member(secret_key.to_bytes().as_slice())),
    }))
}

impl PartialEq for EcKeyPair {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EcKeyPair::P256(a), EcKeyPair::P256(b)) => a == b,
            (EcKeyPair::P384(a), EcKeyPair::P384(b)) => a == b,
            (EcKeyPair::P521(a), EcKeyPair::P521(b)) => a == b,
            _ => false,
        }
    }
}
