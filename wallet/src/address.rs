//! Base58check rendering of addresses and keys with a network's version prefixes.

use consensus_core::config::{Base58Type, Params};
use consensus_core::script::Script;
use crypto_hashes::{double_sha256, sha256};
use ripemd::{Digest, Ripemd160};
use thiserror::Error;

const CHECKSUM_LEN: usize = 4;

/// Length of a BIP32 extended key without its version prefix
pub const EXTENDED_KEY_BODY_LEN: usize = 74;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid base58: {0}")]
    Base58(String),

    #[error("checksum mismatch")]
    Checksum,

    #[error("address does not belong to the {0} network")]
    WrongNetwork(String),

    #[error("invalid payload length {0}")]
    InvalidLength(usize),
}

/// A standard payment destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address {
    PubkeyHash([u8; 20]),
    ScriptHash([u8; 20]),
}

/// RIPEMD160(SHA256(data))
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(sha256(data)).into()
}

/// Prepends `prefix`, appends a 4-byte SHA256d checksum and base58-encodes.
pub fn encode_base58check(prefix: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(prefix.len() + payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);
    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum.as_bytes()[..CHECKSUM_LEN]);
    bs58::encode(data).into_string()
}

/// Decodes and verifies a base58check string, returning prefix and payload together.
pub fn decode_base58check(s: &str) -> Result<Vec<u8>, AddressError> {
    let mut data = bs58::decode(s).into_vec().map_err(|e| AddressError::Base58(e.to_string()))?;
    if data.len() < CHECKSUM_LEN {
        return Err(AddressError::InvalidLength(data.len()));
    }
    let split = data.len() - CHECKSUM_LEN;
    let checksum = double_sha256(&data[..split]);
    if data[split..] != checksum.as_bytes()[..CHECKSUM_LEN] {
        return Err(AddressError::Checksum);
    }
    data.truncate(split);
    Ok(data)
}

impl Address {
    /// Pay-to-pubkey-hash address of a serialized public key
    pub fn from_public_key(public_key: &[u8]) -> Self {
        Address::PubkeyHash(hash160(public_key))
    }

    /// Renders the address with the given network's version byte
    pub fn encode(&self, params: &Params) -> String {
        match self {
            Address::PubkeyHash(hash) => encode_base58check(params.base58_prefix(Base58Type::PubkeyAddress), hash),
            Address::ScriptHash(hash) => encode_base58check(params.base58_prefix(Base58Type::ScriptAddress), hash),
        }
    }

    /// Parses an address, rejecting those rendered for another network
    pub fn decode(s: &str, params: &Params) -> Result<Self, AddressError> {
        let data = decode_base58check(s)?;
        if data.len() != 21 {
            return Err(AddressError::InvalidLength(data.len()));
        }
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&data[1..]);

        let version = &data[..1];
        if version == params.base58_prefix(Base58Type::PubkeyAddress) {
            Ok(Address::PubkeyHash(hash))
        } else if version == params.base58_prefix(Base58Type::ScriptAddress) {
            Ok(Address::ScriptHash(hash))
        } else {
            Err(AddressError::WrongNetwork(params.net.to_string()))
        }
    }

    /// The output script paying to this address
    pub fn to_script_pub_key(&self) -> Script {
        match self {
            Address::PubkeyHash(hash) => {
                let mut script = vec![0x76, 0xa9, 0x14]; // OP_DUP OP_HASH160 PUSH(20)
                script.extend_from_slice(hash);
                script.extend_from_slice(&[0x88, 0xac]); // OP_EQUALVERIFY OP_CHECKSIG
                Script::from_bytes(script)
            }
            Address::ScriptHash(hash) => {
                let mut script = vec![0xa9, 0x14]; // OP_HASH160 PUSH(20)
                script.extend_from_slice(hash);
                script.push(0x87); // OP_EQUAL
                Script::from_bytes(script)
            }
        }
    }
}

/// Wallet import format of a secret key
pub fn encode_secret_key(params: &Params, secret: &[u8; 32], compressed: bool) -> String {
    let mut payload = secret.to_vec();
    if compressed {
        payload.push(0x01);
    }
    encode_base58check(params.base58_prefix(Base58Type::SecretKey), &payload)
}

/// Renders a serialized extended key body (depth, fingerprint, child number,
/// chain code and key) with the network's extended public or private prefix.
pub fn encode_extended_key(params: &Params, private: bool, body: &[u8; EXTENDED_KEY_BODY_LEN]) -> String {
    let kind = if private { Base58Type::ExtSecretKey } else { Base58Type::ExtPublicKey };
    encode_base58check(params.base58_prefix(kind), body)
}
