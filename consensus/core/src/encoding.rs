//! Consensus serialization: little-endian integers and compact-size length prefixes.
//!
//! Encoders stream into any [`Write`], so the same code feeds both byte
//! buffers and [`HashWriter`](crypto_hashes::HashWriter).

use crate::Hash;
use std::io::{self, Write};

pub trait Encodable {
    /// Writes the consensus encoding of `self`, returning the number of bytes written.
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<usize>;
}

/// Serializes into a fresh buffer.
pub fn serialize<T: Encodable + ?Sized>(value: &T) -> Vec<u8> {
    let mut buf = Vec::new();
    value.consensus_encode(&mut buf).expect("writes into a Vec cannot fail");
    buf
}

/// Writes a compact-size unsigned integer.
pub fn write_compact_size<W: Write + ?Sized>(writer: &mut W, n: u64) -> io::Result<usize> {
    match n {
        0..=0xfc => {
            writer.write_all(&[n as u8])?;
            Ok(1)
        }
        0xfd..=0xffff => {
            writer.write_all(&[0xfd])?;
            writer.write_all(&(n as u16).to_le_bytes())?;
            Ok(3)
        }
        0x1_0000..=0xffff_ffff => {
            writer.write_all(&[0xfe])?;
            writer.write_all(&(n as u32).to_le_bytes())?;
            Ok(5)
        }
        _ => {
            writer.write_all(&[0xff])?;
            writer.write_all(&n.to_le_bytes())?;
            Ok(9)
        }
    }
}

/// Writes a compact-size length followed by the raw bytes.
pub fn write_var_bytes<W: Write + ?Sized>(writer: &mut W, bytes: &[u8]) -> io::Result<usize> {
    let len = write_compact_size(writer, bytes.len() as u64)?;
    writer.write_all(bytes)?;
    Ok(len + bytes.len())
}

macro_rules! impl_int_encodable {
    ($($ty:ty),*) => {$(
        impl Encodable for $ty {
            fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<usize> {
                let bytes = self.to_le_bytes();
                writer.write_all(&bytes)?;
                Ok(bytes.len())
            }
        }
    )*};
}

impl_int_encodable!(u8, u16, u32, u64, i32, i64);

impl Encodable for Hash {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<usize> {
        writer.write_all(self.as_bytes())?;
        Ok(self.as_bytes().len())
    }
}

impl<T: Encodable> Encodable for [T] {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<usize> {
        let mut len = write_compact_size(writer, self.len() as u64)?;
        for item in self {
            len += item.consensus_encode(writer)?;
        }
        Ok(len)
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<usize> {
        self.as_slice().consensus_encode(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact(n: u64) -> Vec<u8> {
        let mut buf = Vec::new();
        write_compact_size(&mut buf, n).unwrap();
        buf
    }

    #[test]
    fn compact_size_boundaries() {
        assert_eq!(compact(0), vec![0x00]);
        assert_eq!(compact(0xfc), vec![0xfc]);
        assert_eq!(compact(0xfd), vec![0xfd, 0xfd, 0x00]);
        assert_eq!(compact(0x1_0000), vec![0xfe, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(compact(0x1_0000_0000).len(), 9);
    }

    #[test]
    fn integers_are_little_endian() {
        assert_eq!(serialize(&1i32), vec![1, 0, 0, 0]);
        assert_eq!(serialize(&0x0102_0304u32), vec![4, 3, 2, 1]);
        assert_eq!(serialize(&-1i64), vec![0xff; 8]);
    }

    #[test]
    fn vectors_carry_length_prefix() {
        assert_eq!(serialize(&vec![7u8, 8u8]), vec![2, 7, 8]);
        assert_eq!(serialize(&Vec::<u32>::new()), vec![0]);
    }
}
