//! Selection of the active network.
//!
//! The three parameter sets are process-wide statics, built on first access
//! (which is when their genesis blocks are verified). Which one is active is
//! held by a [`ParamsRegistry`] value owned by the startup code and handed to
//! the subsystems that need it.
//!
//! Selection takes `&mut self`, so it can only happen while the registry has
//! a single owner. Once it is shared (e.g. behind an `Arc`) with networking
//! and validation threads it is read-only.

use super::params::Params;
use crate::network::NetworkType;
use once_cell::sync::Lazy;
use tracing::{info, warn};

pub static MAINNET_PARAMS: Lazy<Params> = Lazy::new(Params::mainnet);
pub static TESTNET_PARAMS: Lazy<Params> = Lazy::new(|| Params::testnet(&MAINNET_PARAMS));
pub static REGTEST_PARAMS: Lazy<Params> = Lazy::new(|| Params::regtest(&TESTNET_PARAMS));

/// Flag names read by [`ParamsRegistry::select_from_environment`]
pub const TESTNET_FLAG: &str = "testnet";
pub const REGTEST_FLAG: &str = "regtest";

/// A source of named startup flags, typically the command line merged with a config file.
pub trait ConfigSource {
    fn get_bool_arg(&self, name: &str, default: bool) -> bool;
}

impl NetworkType {
    /// The parameter set of this network
    pub fn params(self) -> &'static Params {
        match self {
            NetworkType::Mainnet => &*MAINNET_PARAMS,
            NetworkType::Testnet => &*TESTNET_PARAMS,
            NetworkType::Regtest => &*REGTEST_PARAMS,
        }
    }
}

/// Holds which network's parameters are active. Mainnet until told otherwise.
///
/// Once shared, the selection cannot be copied out and re-selected:
///
/// ```compile_fail
/// use consensus_core::config::ParamsRegistry;
/// use consensus_core::network::NetworkType;
/// use std::sync::Arc;
///
/// let shared = Arc::new(ParamsRegistry::new());
/// let mut detached = *shared;
/// detached.select(NetworkType::Regtest);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParamsRegistry {
    active: NetworkType,
}

impl ParamsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_network(&self) -> NetworkType {
        self.active
    }

    pub fn active_params(&self) -> &'static Params {
        self.active.params()
    }

    pub fn select(&mut self, network: NetworkType) {
        self.active = network;
        info!(%network, "selected network parameters");
    }

    /// Selects regtest, testnet or mainnet from the `regtest`/`testnet` flags.
    ///
    /// Returns `false` and leaves the selection untouched when both flags are
    /// set; the caller must treat that as a startup error.
    pub fn select_from_environment<S: ConfigSource + ?Sized>(&mut self, source: &S) -> bool {
        let regtest = source.get_bool_arg(REGTEST_FLAG, false);
        let testnet = source.get_bool_arg(TESTNET_FLAG, false);

        if testnet && regtest {
            warn!("both testnet and regtest were requested");
            return false;
        }

        let network = if regtest {
            NetworkType::Regtest
        } else if testnet {
            NetworkType::Testnet
        } else {
            NetworkType::Mainnet
        };
        self.select(network);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Flags(HashMap<&'static str, bool>);

    impl Flags {
        fn new(flags: &[(&'static str, bool)]) -> Self {
            Self(flags.iter().copied().collect())
        }
    }

    impl ConfigSource for Flags {
        fn get_bool_arg(&self, name: &str, default: bool) -> bool {
            self.0.get(name).copied().unwrap_or(default)
        }
    }

    #[test]
    fn defaults_to_mainnet() {
        let registry = ParamsRegistry::new();
        assert_eq!(registry.active_network(), NetworkType::Mainnet);
        assert_eq!(registry.active_params().net, NetworkType::Mainnet);
    }

    #[test]
    fn select_switches_active_set() {
        let mut registry = ParamsRegistry::new();
        for network in NetworkType::iter() {
            registry.select(network);
            assert_eq!(registry.active_params().network_id(), network);
        }
    }

    #[test]
    fn clones_select_independently() {
        let frozen = std::sync::Arc::new(ParamsRegistry::new());
        let mut clone = (*frozen).clone();
        clone.select(NetworkType::Regtest);
        assert_eq!(frozen.active_network(), NetworkType::Mainnet);
        assert_eq!(clone.active_network(), NetworkType::Regtest);
    }

    #[test]
    fn conflicting_flags_are_rejected() {
        let mut registry = ParamsRegistry::new();
        registry.select(NetworkType::Testnet);
        assert!(!registry.select_from_environment(&Flags::new(&[(TESTNET_FLAG, true), (REGTEST_FLAG, true)])));
        assert_eq!(registry.active_network(), NetworkType::Testnet);
    }

    #[test]
    fn regtest_flag_selects_regtest() {
        let mut registry = ParamsRegistry::new();
        assert!(registry.select_from_environment(&Flags::new(&[(REGTEST_FLAG, true)])));
        assert_eq!(registry.active_params().data_dir, "regtest");
        assert!(!registry.active_params().require_rpc_password);
    }

    #[test]
    fn testnet_flag_selects_testnet() {
        let mut registry = ParamsRegistry::new();
        assert!(registry.select_from_environment(&Flags::new(&[(TESTNET_FLAG, true), (REGTEST_FLAG, false)])));
        assert_eq!(registry.active_network(), NetworkType::Testnet);
    }

    #[test]
    fn no_flags_select_mainnet() {
        let mut registry = ParamsRegistry::new();
        registry.select(NetworkType::Regtest);
        assert!(registry.select_from_environment(&Flags::new(&[])));
        assert_eq!(registry.active_network(), NetworkType::Mainnet);
    }

    #[test]
    fn statics_are_built_once() {
        assert!(std::ptr::eq(NetworkType::Mainnet.params(), NetworkType::Mainnet.params()));
        assert_eq!(NetworkType::Regtest.params().genesis_hash(), REGTEST_PARAMS.genesis_hash());
    }
}
