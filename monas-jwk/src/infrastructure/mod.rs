pub mod key_id;
pub mod key_pair;
