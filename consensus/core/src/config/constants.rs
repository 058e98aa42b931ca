use serde::Serialize;

/// Kinds of base58-encoded payloads that carry a network-specific version prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub fn iter() -> impl Iterator<Item = Base58Type> {
        [Base58Type::PubkeyAddress, Base58Type::ScriptAddress, Base58Type::SecretKey, Base58Type::ExtPublicKey, Base58Type::ExtSecretKey]
            .into_iter()
    }
}

/// Version bytes prepended to base58 payloads. Single bytes for addresses and
/// secret keys, four bytes for extended keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Base58Prefixes {
    pub pubkey_address: u8,
    pub script_address: u8,
    pub secret_key: u8,
    #[serde(with = "hex::serde")]
    pub ext_public_key: [u8; 4],
    #[serde(with = "hex::serde")]
    pub ext_secret_key: [u8; 4],
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => std::slice::from_ref(&self.pubkey_address),
            Base58Type::ScriptAddress => std::slice::from_ref(&self.script_address),
            Base58Type::SecretKey => std::slice::from_ref(&self.secret_key),
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }
}

pub const MAINNET_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: 26,
    script_address: 55,
    secret_key: 191,
    ext_public_key: [0x04, 0x68, 0xb2, 0x1e],
    ext_secret_key: [0x04, 0x58, 0xad, 0xe4],
};

pub const TESTNET_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: 111,
    script_address: 196,
    secret_key: 239,
    ext_public_key: [0x04, 0x35, 0x87, 0xcf],
    ext_secret_key: [0x04, 0x35, 0x83, 0x94],
};

pub mod ports {
    pub const MAINNET_P2P_PORT: u16 = 9037;
    pub const MAINNET_RPC_PORT: u16 = 9038;
    pub const TESTNET_P2P_PORT: u16 = 19037;
    pub const TESTNET_RPC_PORT: u16 = 19038;
    pub const REGTEST_P2P_PORT: u16 = 19444;
}

/// Right shifts applied to the all-ones 256-bit value to obtain each network's proof-of-work ceiling
pub mod pow_limit_shifts {
    pub const MAINNET: u32 = 20;
    pub const TESTNET: u32 = 16;
    pub const REGTEST: u32 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_lengths() {
        for kind in Base58Type::iter() {
            let expected = match kind {
                Base58Type::ExtPublicKey | Base58Type::ExtSecretKey => 4,
                _ => 1,
            };
            assert_eq!(MAINNET_BASE58_PREFIXES.get(kind).len(), expected);
            assert_eq!(TESTNET_BASE58_PREFIXES.get(kind).len(), expected);
        }
    }

    #[test]
    fn lookup_by_kind() {
        assert_eq!(MAINNET_BASE58_PREFIXES.get(Base58Type::PubkeyAddress), &[26]);
        assert_eq!(TESTNET_BASE58_PREFIXES.get(Base58Type::ExtSecretKey), &[0x04, 0x35, 0x83, 0x94]);
    }
}
