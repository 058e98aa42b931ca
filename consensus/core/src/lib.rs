//! Consensus primitives and the per-network chain parameters of a BuyCoin node.
//!
//! The [`config`] module owns the immutable parameter sets for mainnet,
//! testnet and regtest, each of which reconstructs and verifies its genesis
//! block on first use.

pub mod block;
pub mod config;
pub mod constants;
pub mod encoding;
pub mod errors;
pub mod hashing;
pub mod header;
pub mod merkle;
pub mod network;
pub mod script;
pub mod tx;

pub use buy_math::U256;
pub use crypto_hashes::{Hash, ZERO_HASH};
