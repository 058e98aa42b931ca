use crate::{Hash, HASH_SIZE};
use once_cell::sync::Lazy;
use scrypt::Params;

/// scrypt cost parameters of the block hash: N = 2^10, r = 1, p = 1, 32-byte output.
pub const SCRYPT_LOG_N: u8 = 10;
pub const SCRYPT_R: u32 = 1;
pub const SCRYPT_P: u32 = 1;

static SCRYPT_PARAMS: Lazy<Params> = Lazy::new(|| {
    Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, HASH_SIZE).expect("scrypt block-hash parameters are statically valid")
});

/// Hashes serialized header bytes with scrypt, using the input as its own salt.
///
/// This is the block identity hash as well as the proof-of-work hash.
pub fn scrypt_hash(data: &[u8]) -> Hash {
    let mut out = [0u8; HASH_SIZE];
    scrypt::scrypt(data, data, &SCRYPT_PARAMS, &mut out).expect("output buffer matches configured scrypt length");
    Hash::from_bytes(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrypt_uses_input_as_salt() {
        let hash = scrypt_hash(b"abc");
        assert_eq!(hex::encode(hash.as_bytes()), "e652c1c3b7a8cd99d2edc49d4509f545c80e4395765e7225c4dde5d80dd76519");
    }

    #[test]
    fn scrypt_is_deterministic() {
        assert_eq!(scrypt_hash(&[7u8; 80]), scrypt_hash(&[7u8; 80]));
        assert_ne!(scrypt_hash(&[7u8; 80]), scrypt_hash(&[8u8; 80]));
    }
}
