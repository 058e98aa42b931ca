//! Minimal script construction: just enough to assemble coinbase signature
//! scripts and empty output scripts.

use crate::encoding::{write_var_bytes, Encodable};
use buy_utils::hex::ToHex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::io::{self, Write};

pub mod opcodes {
    pub const OP_0: u8 = 0x00;
    pub const OP_PUSHDATA1: u8 = 0x4c;
    pub const OP_PUSHDATA2: u8 = 0x4d;
    pub const OP_PUSHDATA4: u8 = 0x4e;
    pub const OP_1NEGATE: u8 = 0x4f;
    pub const OP_1: u8 = 0x51;
    pub const OP_16: u8 = 0x60;
}

use opcodes::*;

/// Raw script bytes
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.0.to_hex())
    }
}

impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl Encodable for Script {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<usize> {
        write_var_bytes(writer, &self.0)
    }
}

/// Encodes an integer as a minimal little-endian sign-magnitude stack number.
pub fn encode_script_num(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The top bit of the last byte carries the sign; add a byte if it is taken.
    if out.last().is_some_and(|b| b & 0x80 != 0) {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        if let Some(last) = out.last_mut() {
            *last |= 0x80;
        }
    }
    out
}

/// Appends opcodes and data pushes to a script.
#[derive(Default)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a small integer as an opcode where one exists, otherwise as a stack number.
    pub fn push_int(&mut self, n: i64) -> &mut Self {
        match n {
            0 => self.script.push(OP_0),
            -1 => self.script.push(OP_1NEGATE),
            1..=16 => self.script.push(OP_1 + (n as u8) - 1),
            _ => {
                self.push_num(n);
            }
        }
        self
    }

    /// Pushes an integer as stack-number data, never as a small-integer opcode.
    pub fn push_num(&mut self, n: i64) -> &mut Self {
        let data = encode_script_num(n);
        self.push_slice(&data)
    }

    /// Pushes raw data with the shortest length prefix for its size.
    pub fn push_slice(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.script.push(len as u8);
        } else if len <= 0xff {
            self.script.push(OP_PUSHDATA1);
            self.script.push(len as u8);
        } else if len <= 0xffff {
            self.script.push(OP_PUSHDATA2);
            self.script.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.script.push(OP_PUSHDATA4);
            self.script.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.script.extend_from_slice(data);
        self
    }

    pub fn script(&self) -> Script {
        Script(self.script.clone())
    }

    pub fn into_script(self) -> Script {
        Script(self.script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_num_encoding() {
        assert_eq!(encode_script_num(0), Vec::<u8>::new());
        assert_eq!(encode_script_num(42), vec![0x2a]);
        assert_eq!(encode_script_num(-1), vec![0x81]);
        assert_eq!(encode_script_num(127), vec![0x7f]);
        assert_eq!(encode_script_num(128), vec![0x80, 0x00]);
        assert_eq!(encode_script_num(-128), vec![0x80, 0x80]);
        assert_eq!(encode_script_num(486604799), vec![0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn small_ints_use_opcodes() {
        let mut builder = ScriptBuilder::new();
        builder.push_int(0).push_int(1).push_int(16).push_int(-1).push_int(17);
        assert_eq!(builder.script().as_bytes(), &[OP_0, OP_1, OP_16, OP_1NEGATE, 0x01, 0x11]);
    }

    #[test]
    fn push_num_always_pushes_data() {
        let mut builder = ScriptBuilder::new();
        builder.push_num(4);
        assert_eq!(builder.into_script().as_bytes(), &[0x01, 0x04]);
    }

    #[test]
    fn push_slice_length_prefixes() {
        let mut builder = ScriptBuilder::new();
        builder.push_slice(&[0xaa; 75]);
        assert_eq!(builder.script().as_bytes()[0], 75);

        let mut builder = ScriptBuilder::new();
        builder.push_slice(&[0xaa; 76]);
        assert_eq!(&builder.script().as_bytes()[..2], &[OP_PUSHDATA1, 76]);

        let mut builder = ScriptBuilder::new();
        builder.push_slice(&[0xaa; 300]);
        assert_eq!(&builder.script().as_bytes()[..3], &[OP_PUSHDATA2, 0x2c, 0x01]);
    }

    #[test]
    fn encodes_with_length_prefix() {
        let script = Script::from_bytes(vec![1, 2, 3]);
        assert_eq!(crate::encoding::serialize(&script), vec![3, 1, 2, 3]);
        assert_eq!(crate::encoding::serialize(&Script::new()), vec![0]);
    }
}
