use super::constants::{pow_limit_shifts, ports, Base58Prefixes, Base58Type, MAINNET_BASE58_PREFIXES, TESTNET_BASE58_PREFIXES};
use super::genesis::{GenesisBlock, GENESIS, REGTEST_GENESIS_HASH, REGTEST_GENESIS_NONCE, TESTNET_GENESIS_HASH, TESTNET_GENESIS_NONCE};
use super::seeds::{convert_seed6, SeedSpec6, MAINNET_SEEDS, TESTNET_SEEDS};
use crate::block::Block;
use crate::network::NetworkType;
use crate::{Hash, U256};
use buy_math::{pow_limit_from_shift, target_to_compact};
use buy_utils::networking::NetAddress;
use buy_utils::time::unix_now;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// A DNS seeder: a display name and the host queried for peer addresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

impl DnsSeed {
    pub const fn new(name: &'static str, host: &'static str) -> Self {
        Self { name, host }
    }
}

/// Everything that distinguishes one network from another.
///
/// Built once per network and never mutated afterwards. Building a set
/// reconstructs its genesis block and panics if the result does not match the
/// compiled-in hashes: a node with inconsistent consensus constants must not run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    pub net: NetworkType,
    /// Prefixed to every wire message
    #[serde(with = "hex::serde")]
    pub message_start: [u8; 4],
    /// Public key authenticating network alerts; may be empty
    #[serde(with = "hex::serde")]
    pub alert_key: Vec<u8>,
    pub default_port: u16,
    pub rpc_port: u16,
    /// Easiest permitted proof-of-work target
    pub pow_limit: U256,
    pub genesis: GenesisBlock,
    #[serde(skip)]
    pub genesis_block: Block,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: Vec<NetAddress>,
    pub base58_prefixes: Base58Prefixes,
    /// Subdirectory of the data directory; empty for mainnet
    pub data_dir: &'static str,
    pub require_rpc_password: bool,
}

impl Params {
    pub fn mainnet() -> Self {
        let pow_limit = pow_limit_from_shift(pow_limit_shifts::MAINNET);
        let genesis = GENESIS;
        let genesis_block = verify_genesis(NetworkType::Mainnet, &genesis, &pow_limit);

        Self {
            net: NetworkType::Mainnet,
            // Rarely used upper ASCII, not valid as UTF-8, and a large 4-byte int at any alignment.
            message_start: [0x40, 0xfb, 0xa7, 0xd4],
            alert_key: Vec::new(),
            default_port: ports::MAINNET_P2P_PORT,
            rpc_port: ports::MAINNET_RPC_PORT,
            pow_limit,
            genesis,
            genesis_block,
            dns_seeds: vec![
                DnsSeed::new("nodea.buy-coin.me", "nodea.buy-coin.me"),
                DnsSeed::new("nodeb.buy-coin.me", "nodeb.buy-coin.me"),
                DnsSeed::new("nodec.buy-coin.me", "nodec.buy-coin.me"),
            ],
            fixed_seeds: expand_seeds(MAINNET_SEEDS),
            base58_prefixes: MAINNET_BASE58_PREFIXES,
            data_dir: "",
            require_rpc_password: true,
        }
    }

    /// Testnet: mainnet with a looser ceiling and its own magic, ports and
    /// prefixes. The genesis keeps mainnet's transaction and timestamp but is
    /// re-targeted and re-mined.
    pub fn testnet(mainnet: &Params) -> Self {
        let pow_limit = pow_limit_from_shift(pow_limit_shifts::TESTNET);
        let genesis = GenesisBlock {
            hash: TESTNET_GENESIS_HASH,
            bits: target_to_compact(&pow_limit),
            nonce: TESTNET_GENESIS_NONCE,
            ..mainnet.genesis.clone()
        };
        let genesis_block = verify_genesis(NetworkType::Testnet, &genesis, &pow_limit);

        Self {
            net: NetworkType::Testnet,
            message_start: [0xfd, 0xf7, 0xa4, 0x0c],
            alert_key: Vec::new(),
            default_port: ports::TESTNET_P2P_PORT,
            rpc_port: ports::TESTNET_RPC_PORT,
            pow_limit,
            genesis,
            genesis_block,
            dns_seeds: Vec::new(),
            fixed_seeds: expand_seeds(TESTNET_SEEDS),
            base58_prefixes: TESTNET_BASE58_PREFIXES,
            data_dir: "testnet",
            ..mainnet.clone()
        }
    }

    /// Regtest: testnet with a trivially satisfiable ceiling and no peer
    /// discovery. Nodes are connected by hand.
    pub fn regtest(testnet: &Params) -> Self {
        let pow_limit = pow_limit_from_shift(pow_limit_shifts::REGTEST);
        let genesis = GenesisBlock {
            hash: REGTEST_GENESIS_HASH,
            timestamp: 0,
            bits: target_to_compact(&pow_limit),
            nonce: REGTEST_GENESIS_NONCE,
            ..testnet.genesis.clone()
        };
        let genesis_block = verify_genesis(NetworkType::Regtest, &genesis, &pow_limit);

        Self {
            net: NetworkType::Regtest,
            message_start: [0xfc, 0xac, 0xbd, 0xcd],
            default_port: ports::REGTEST_P2P_PORT,
            pow_limit,
            genesis,
            genesis_block,
            dns_seeds: Vec::new(),
            fixed_seeds: Vec::new(),
            data_dir: "regtest",
            require_rpc_password: false,
            ..testnet.clone()
        }
    }

    pub fn network_id(&self) -> NetworkType {
        self.net
    }

    pub fn genesis_hash(&self) -> Hash {
        self.genesis.hash
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis_block
    }

    pub fn proof_of_work_limit(&self) -> &U256 {
        &self.pow_limit
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    /// The network magic as the little-endian integer read off the wire
    pub fn magic(&self) -> u32 {
        u32::from_le_bytes(self.message_start)
    }

    /// Where this network keeps its on-disk state under `base`
    pub fn data_dir_under(&self, base: &Path) -> PathBuf {
        if self.data_dir.is_empty() {
            base.to_path_buf()
        } else {
            base.join(self.data_dir)
        }
    }
}

fn expand_seeds(seeds: &[SeedSpec6]) -> Vec<NetAddress> {
    convert_seed6(seeds, unix_now(), &mut rand::thread_rng())
}

/// Rebuilds `genesis` and checks it against its compiled-in hashes.
///
/// # Panics
///
/// On any mismatch. The binary was built with consensus constants that cannot
/// interoperate with the live network, and continuing would silently fork it.
pub fn verify_genesis(net: NetworkType, genesis: &GenesisBlock, pow_limit: &U256) -> Block {
    let expected_bits = target_to_compact(pow_limit);
    if genesis.bits != expected_bits {
        error!(network = %net, bits = genesis.bits, expected_bits, "genesis bits do not encode the proof-of-work limit");
        panic!("{net} genesis bits {:#010x} do not encode the proof-of-work limit {expected_bits:#010x}", genesis.bits);
    }

    let block = genesis.build_block();

    let merkle_root = block.header.hash_merkle_root;
    if merkle_root != genesis.hash_merkle_root {
        error!(network = %net, %merkle_root, expected = %genesis.hash_merkle_root, "genesis merkle root mismatch");
        panic!("{net} genesis merkle root mismatch: computed {merkle_root}, expected {}", genesis.hash_merkle_root);
    }

    let hash = block.hash();
    if hash != genesis.hash {
        error!(network = %net, %hash, expected = %genesis.hash, "genesis hash mismatch");
        panic!("{net} genesis hash mismatch: computed {hash}, expected {}", genesis.hash);
    }

    debug!(network = %net, %hash, "genesis block verified");
    block
}
