use crate::encoding::{write_var_bytes, Encodable};
use crate::header::Header;
use crate::merkle::calc_merkle_root;
use crate::tx::Transaction;
use crate::Hash;
use std::io::{self, Write};

/// Complete block structure including header and transactions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Block header containing metadata and parent information
    pub header: Header,
    /// List of transactions in the block
    pub transactions: Vec<Transaction>,
    /// Block signature of the staker; empty for proof-of-work blocks
    pub signature: Vec<u8>,
}

impl Block {
    /// Creates a new unsigned block with the given header and transactions
    pub fn new(header: Header, transactions: Vec<Transaction>) -> Self {
        Self { header, transactions, signature: Vec::new() }
    }

    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Computes the merkle root of the block's transactions
    pub fn build_merkle_root(&self) -> Hash {
        calc_merkle_root(self.transactions.iter().map(Transaction::id))
    }
}

impl Encodable for Block {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<usize> {
        let mut len = self.header.consensus_encode(writer)?;
        len += self.transactions.consensus_encode(writer)?;
        len += write_var_bytes(writer, &self.signature)?;
        Ok(len)
    }
}
