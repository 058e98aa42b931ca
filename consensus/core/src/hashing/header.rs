use crate::constants::HEADER_SIZE;
use crate::encoding::serialize;
use crate::header::Header;
use crate::Hash;

/// The 80 serialized header bytes the block hash commits to
pub fn header_bytes(header: &Header) -> [u8; HEADER_SIZE] {
    let mut bytes = [0u8; HEADER_SIZE];
    bytes.copy_from_slice(&serialize(header));
    bytes
}

/// Computes the identity hash of a block header: scrypt over its serialization
pub fn calc_header_hash(header: &Header) -> Hash {
    super::scrypt_hash(&header_bytes(header))
}
