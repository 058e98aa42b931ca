use crate::block::Block;
use crate::constants::{BLOCK_VERSION, TX_VERSION};
use crate::header::Header;
use crate::script::ScriptBuilder;
use crate::tx::{Transaction, TransactionInput, TransactionOutput};
use crate::{Hash, ZERO_HASH};
use serde::Serialize;

/// The constants uniquely representing a genesis block, together with the
/// hashes it is expected to produce.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisBlock {
    pub hash: Hash,
    pub hash_merkle_root: Hash,
    pub version: i32,
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
    /// Text embedded in the coinbase signature script
    pub coinbase_text: &'static str,
    /// Number pushed ahead of the text in the coinbase signature script
    pub coinbase_script_number: i64,
    /// Timestamp of the coinbase transaction itself
    pub coinbase_time: u32,
}

impl GenesisBlock {
    /// Builds the single coinbase transaction. Its only output is empty, so
    /// the genesis reward can never be spent.
    pub fn build_genesis_transactions(&self) -> Vec<Transaction> {
        let mut builder = ScriptBuilder::new();
        builder.push_int(0).push_num(self.coinbase_script_number).push_slice(self.coinbase_text.as_bytes());
        let input = TransactionInput::coinbase(builder.into_script());
        vec![Transaction::new(TX_VERSION, self.coinbase_time, vec![input], vec![TransactionOutput::empty()], 0)]
    }

    /// Deterministically reconstructs the genesis block. Does not check the
    /// result against `hash` or `hash_merkle_root`.
    pub fn build_block(&self) -> Block {
        let mut block = Block::new(Header::new(self.version, ZERO_HASH, ZERO_HASH, self.timestamp, self.bits, self.nonce), self.build_genesis_transactions());
        block.header.hash_merkle_root = block.build_merkle_root();
        block
    }
}

impl From<&GenesisBlock> for Block {
    fn from(genesis: &GenesisBlock) -> Self {
        genesis.build_block()
    }
}

pub const GENESIS_COINBASE_TEXT: &str = "2017, November 18, BuyCoin POS Based make for swap";

/// Merkle root shared by every network: they all use the same coinbase transaction
pub const GENESIS_MERKLE_ROOT: Hash = Hash::from_uint256_hex("c8160e0606a8b63ef4735f35814544502c2bdf61878853898059654ca4fe53b6");

pub const MAINNET_GENESIS_HASH: Hash = Hash::from_uint256_hex("00000762d57623d4801bbfba5d951550caca5f7f23cc684c124f702f8441703f");
pub const TESTNET_GENESIS_HASH: Hash = Hash::from_uint256_hex("0000c10df3830440cae780ba8854c3d3eb3c4c5ae2b301588ae8e48dce83768a");
pub const REGTEST_GENESIS_HASH: Hash = Hash::from_uint256_hex("00b48e118decd60d250bafae6c2972f5fbfc3ef9596d97ea8447f22205c7ec0c");

pub const TESTNET_GENESIS_NONCE: u32 = 7811;
pub const REGTEST_GENESIS_NONCE: u32 = 4;

pub const GENESIS: GenesisBlock = GenesisBlock {
    hash: MAINNET_GENESIS_HASH,
    hash_merkle_root: GENESIS_MERKLE_ROOT,
    version: BLOCK_VERSION,
    timestamp: 1508461261,
    bits: 0x1e0f_ffff,
    nonce: 88632,
    coinbase_text: GENESIS_COINBASE_TEXT,
    coinbase_script_number: 42,
    coinbase_time: 1508461261,
};
