pub mod jwk;
pub mod key_id;
pub mod key_pair;
pub mod key_parameter;
