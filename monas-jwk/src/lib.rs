pub mod application_service;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use application_service::key_service::{
    generate_keys, generate_keys_as_dict, generate_keys_as_json, EcKeyGenerator, KeyGenerator,
    RsaKeyGenerator,
};
pub use domain::jwk::Jwk;
pub use domain::key_pair::{GeneratedKeyPair, KeyPair};
pub use error::KeyGenerationError;
