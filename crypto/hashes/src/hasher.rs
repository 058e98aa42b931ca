use crate::Hash;
use sha2::{Digest, Sha256};
use std::io::Write;

/// Compute SHA256(SHA256(data))
pub fn double_sha256(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    Hash::from_bytes(second.into())
}

/// Compute SHA256(data)
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// HashWriter wraps a Sha256 hasher to implement Write trait, so consensus
/// encoders can stream straight into the digest.
#[derive(Clone)]
pub struct HashWriter(Sha256);

impl HashWriter {
    pub fn new() -> Self {
        Self(Sha256::new())
    }

    pub fn finalize(self) -> [u8; 32] {
        self.0.finalize().into()
    }

    /// Finalizes as SHA256d, the ledger's transaction and merkle node hash.
    pub fn finalize_double(self) -> Hash {
        let first = self.0.finalize();
        Hash::from_bytes(Sha256::digest(first).into())
    }
}

impl Write for HashWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Default for HashWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_sha256() {
        let hash = double_sha256(b"hello");
        assert_eq!(hex::encode(hash.as_bytes()), "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50");
    }

    #[test]
    fn test_sha256() {
        assert_eq!(hex::encode(sha256(b"hello")), "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824");
        assert_eq!(HashWriter::new().finalize(), sha256(b""));
    }

    #[test]
    fn test_hash_writer() {
        let mut writer = HashWriter::new();
        writer.write_all(b"hello").unwrap();
        let hash = writer.finalize();
        assert_eq!(hex::encode(hash), "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824");
    }

    #[test]
    fn streamed_double_matches_one_shot() {
        let mut writer = HashWriter::new();
        writer.write_all(b"hel").unwrap();
        writer.write_all(b"lo").unwrap();
        assert_eq!(writer.finalize_double(), double_sha256(b"hello"));
    }
}
