pub mod header;
pub mod tx;

pub use crypto_hashes::{double_sha256, scrypt_hash};
