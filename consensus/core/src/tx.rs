//!
//! # Transaction
//!
//! Timestamped transactions: each transaction carries its own `time`
//! field between the version and the inputs.
//!

use crate::constants::{NULL_OUTPOINT_INDEX, SEQUENCE_FINAL};
use crate::encoding::Encodable;
use crate::hashing;
use crate::script::Script;
use crate::{Hash, ZERO_HASH};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

/// A 32-byte transaction identifier.
pub type TransactionId = Hash;

/// Reference to an output of a previous transaction
#[derive(Eq, Default, Hash, PartialEq, Debug, Copy, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOutpoint {
    pub transaction_id: TransactionId,
    pub index: u32,
}

impl TransactionOutpoint {
    pub fn new(transaction_id: TransactionId, index: u32) -> Self {
        Self { transaction_id, index }
    }

    /// The outpoint spent by coinbase inputs, which reference no real output.
    pub fn null() -> Self {
        Self { transaction_id: ZERO_HASH, index: NULL_OUTPOINT_INDEX }
    }

    pub fn is_null(&self) -> bool {
        self.transaction_id.is_zero() && self.index == NULL_OUTPOINT_INDEX
    }
}

impl Display for TransactionOutpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.transaction_id, self.index)
    }
}

impl Encodable for TransactionOutpoint {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<usize> {
        Ok(self.transaction_id.consensus_encode(writer)? + self.index.consensus_encode(writer)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    pub previous_outpoint: TransactionOutpoint,
    pub signature_script: Script,
    pub sequence: u32,
}

impl TransactionInput {
    pub fn new(previous_outpoint: TransactionOutpoint, signature_script: Script, sequence: u32) -> Self {
        Self { previous_outpoint, signature_script, sequence }
    }

    /// An input spending the null outpoint with a free-form signature script.
    pub fn coinbase(signature_script: Script) -> Self {
        Self::new(TransactionOutpoint::null(), signature_script, SEQUENCE_FINAL)
    }
}

impl Encodable for TransactionInput {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<usize> {
        let mut len = self.previous_outpoint.consensus_encode(writer)?;
        len += self.signature_script.consensus_encode(writer)?;
        len += self.sequence.consensus_encode(writer)?;
        Ok(len)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOutput {
    pub value: i64,
    pub script_public_key: Script,
}

impl TransactionOutput {
    pub fn new(value: i64, script_public_key: Script) -> Self {
        Self { value, script_public_key }
    }

    /// A zero-value output with no script. Nothing can ever spend it.
    pub fn empty() -> Self {
        Self::new(0, Script::new())
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_public_key.is_empty()
    }
}

impl Encodable for TransactionOutput {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<usize> {
        Ok(self.value.consensus_encode(writer)? + self.script_public_key.consensus_encode(writer)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub version: i32,
    pub time: u32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn new(version: i32, time: u32, inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>, lock_time: u32) -> Self {
        Self { version, time, inputs, outputs, lock_time }
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_outpoint.is_null()
    }

    pub fn id(&self) -> TransactionId {
        hashing::tx::calc_transaction_hash(self)
    }
}

impl Encodable for Transaction {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<usize> {
        let mut len = self.version.consensus_encode(writer)?;
        len += self.time.consensus_encode(writer)?;
        len += self.inputs.consensus_encode(writer)?;
        len += self.outputs.consensus_encode(writer)?;
        len += self.lock_time.consensus_encode(writer)?;
        Ok(len)
    }
}
