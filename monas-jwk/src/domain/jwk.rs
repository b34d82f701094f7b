//! JSON Web Key ([RFC 7517]) representation of RSA and EC key material.
//!
//! Members are stored already encoded as base64url without padding, so a [`Jwk`]
//! serializes directly into the wire format.
//!
//! [RFC 7517]: https://www.rfc-editor.org/rfc/rfc7517

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::key_id::KeyId;
use crate::error::KeyGenerationError;

/// A JWK for one of the supported key types, tagged by `kty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kty")]
pub enum Jwk {
    #[serde(rename = "RSA")]
    Rsa(RsaJwk),
    #[serde(rename = "EC")]
    Ec(EcJwk),
}

/// RSA key members (RFC 7518 section 6.3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaJwk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    pub n: String,
    pub e: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qi: Option<String>,
}

/// EC key members (RFC 7518 section 6.2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcJwk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    pub crv: String,
    pub x: String,
    pub y: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

impl Jwk {
    pub fn kty(&self) -> &'static str {
        match self {
            Jwk::Rsa(_) => "RSA",
            Jwk::Ec(_) => "EC",
        }
    }

    pub fn kid(&self) -> Option<&str> {
        match self {
            Jwk::Rsa(rsa) => rsa.kid.as_deref(),
            Jwk::Ec(ec) => ec.kid.as_deref(),
        }
    }

    pub fn has_private_members(&self) -> bool {
        match self {
            Jwk::Rsa(rsa) => [&rsa.d, &rsa.p, &rsa.q, &rsa.dp, &rsa.dq, &rsa.qi]
                .iter()
                .any(|member| member.is_some()),
            Jwk::Ec(ec) => ec.d.is_some(),
        }
    }

    /// Copy of this key without any private members. `kid` is kept.
    pub fn to_public(&self) -> Jwk {
        match self {
            Jwk::Rsa(rsa) => Jwk::Rsa(RsaJwk {
                kid: rsa.kid.clone(),
                n: rsa.n.clone(),
                e: rsa.e.clone(),
                d: None,
                p: None,
                q: None,
                dp: None,
                dq: None,
                qi: None,
            }),
            Jwk::Ec(ec) => Jwk::Ec(EcJwk {
                kid: ec.kid.clone(),
                crv: ec.crv.clone(),
                x: ec.x.clone(),
                y: ec.y.clone(),
                d: None,
            }),
        }
    }

    pub fn with_kid(mut self, kid: &KeyId) -> Jwk {
        let slot = match &mut self {
            Jwk::Rsa(rsa) => &mut rsa.kid,
            Jwk::Ec(ec) => &mut ec.kid,
        };
        *slot = Some(kid.as_str().to_string());
        self
    }

    /// Canonical serialization of the public portion: compact JSON with members
    /// sorted by name and no `kid`. This is the input of key id derivation and
    /// matches the RFC 7638 thumbprint input.
    pub fn public_key_bytes(&self) -> Result<Vec<u8>, KeyGenerationError> {
        let members: BTreeMap<&str, &str> = match self {
            Jwk::Rsa(rsa) => BTreeMap::from([("kty", "RSA"), ("n", &*rsa.n), ("e", &*rsa.e)]),
            Jwk::Ec(ec) => BTreeMap::from([
                ("kty", "EC"),
                ("crv", &*ec.crv),
                ("x", &*ec.x),
                ("y", &*ec.y),
            ]),
        };
        Ok(serde_json::to_vec(&members)?)
    }
}

#[cfg(test)]
mod jwk_tests {
    use super::*;

    fn rsa_private() -> Jwk {
        Jwk::Rsa(RsaJwk {
            kid: None,
            n: "bg".into(),
            e: "AQAB".into(),
            d: Some("ZA".into()),
            p: Some("cA".into()),
            q: Some("cQ".into()),
            dp: Some("ZHA".into()),
            dq: Some("ZHE".into()),
            qi: Some("cWk".into()),
        })
    }

    fn ec_private() -> Jwk {
        Jwk::Ec(EcJwk {
            kid: None,
            crv: "P-256".into(),
            x: "eA".into(),
            y: "eQ".into(),
            d: Some("ZA".into()),
        })
    }

    #[test]
    fn serializes_kty_tag_first() {
        let json = serde_json::to_string(&ec_private()).unwrap();
        assert!(json.starts_with(r#"{"kty":"EC""#), "{json}");
    }

    #[test]
    fn public_copy_drops_private_members() {
        assert!(rsa_private().has_private_members());
        assert!(!rsa_private().to_public().has_private_members());
        assert!(ec_private().has_private_members());
        assert!(!ec_private().to_public().has_private_members());

        let value = serde_json::to_value(rsa_private().to_public()).unwrap();
        let members: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(members, vec!["kty", "n", "e"]);
    }

    #[test]
    fn with_kid_sets_identifier() {
        let kid = KeyId::new("abc".to_string());
        let jwk = ec_private().with_kid(&kid);
        assert_eq!(jwk.kid(), Some("abc"));
        assert_eq!(jwk.to_public().kid(), Some("abc"));
    }

    #[test]
    fn public_key_bytes_ignore_kid_and_private_members() {
        let plain = ec_private().public_key_bytes().unwrap();
        let with_kid = ec_private()
            .with_kid(&KeyId::new("abc".to_string()))
            .public_key_bytes()
            .unwrap();
        assert_eq!(plain, with_kid);
        assert_eq!(
            String::from_utf8(plain).unwrap(),
            r#"{"crv":"P-256","kty":"EC","x":"eA","y":"eQ"}"#
        );
    }

    #[test]
    fn public_key_bytes_sort_rsa_members() {
        let plain = rsa_private().public_key_bytes().unwrap();
        assert_eq!(plain, rsa_private().to_public().public_key_bytes().unwrap());
        assert_eq!(
            String::from_utf8(plain).unwrap(),
            r#"{"e":"AQAB","kty":"RSA","n":"bg"}"#
        );
    }

    #[test]
    fn deserializes_by_kty() {
        let jwk: Jwk = serde_json::from_str(r#"{"kty":"RSA","n":"bg","e":"AQAB"}"#).unwrap();
        assert_eq!(jwk.kty(), "RSA");
        assert!(!jwk.has_private_members());
    }
}
