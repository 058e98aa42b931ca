use crate::encoding::Encodable;
use crate::{hashing, Hash};
use serde::Serialize;
use std::io::{self, Write};

/// Block header. Serializes to exactly 80 bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub version: i32,
    pub hash_prev_block: Hash,
    pub hash_merkle_root: Hash,
    /// Unix seconds
    pub timestamp: u32,
    /// Proof-of-work target in compact form
    pub bits: u32,
    pub nonce: u32,
}

impl Header {
    pub fn new(version: i32, hash_prev_block: Hash, hash_merkle_root: Hash, timestamp: u32, bits: u32, nonce: u32) -> Self {
        Self { version, hash_prev_block, hash_merkle_root, timestamp, bits, nonce }
    }

    pub fn hash(&self) -> Hash {
        hashing::header::calc_header_hash(self)
    }
}

impl Encodable for Header {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<usize> {
        let mut len = self.version.consensus_encode(writer)?;
        len += self.hash_prev_block.consensus_encode(writer)?;
        len += self.hash_merkle_root.consensus_encode(writer)?;
        len += self.timestamp.consensus_encode(writer)?;
        len += self.bits.consensus_encode(writer)?;
        len += self.nonce.consensus_encode(writer)?;
        Ok(len)
    }
}
