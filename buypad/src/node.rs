use crate::config::{Config, ConfigError};
use consensus_core::config::{Params, ParamsRegistry};
use consensus_core::network::NetworkType;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// Startup context: the frozen network selection and where this network's data lives.
///
/// Subsystems receive a clone of the shared registry; nothing can change the
/// selection once a `Node` exists.
#[derive(Debug, Clone)]
pub struct Node {
    registry: Arc<ParamsRegistry>,
    data_dir: PathBuf,
}

impl Node {
    /// Selects the network from the merged configuration and freezes the choice.
    pub fn init(config: &Config) -> Result<Self, ConfigError> {
        let mut registry = ParamsRegistry::new();
        if !registry.select_from_environment(config) {
            error!("refusing to start with both testnet and regtest selected");
            return Err(ConfigError::ConflictingNetworks);
        }

        let params = registry.active_params();
        let data_dir = params.data_dir_under(&config.storage.data_dir);
        info!(
            network = %params.net,
            genesis = %params.genesis_hash(),
            p2p_port = params.default_port,
            rpc_port = params.rpc_port,
            data_dir = %data_dir.display(),
            "network parameters ready"
        );

        Ok(Self { registry: Arc::new(registry), data_dir })
    }

    pub fn registry(&self) -> Arc<ParamsRegistry> {
        self.registry.clone()
    }

    pub fn network(&self) -> NetworkType {
        self.registry.active_network()
    }

    pub fn params(&self) -> &'static Params {
        self.registry.active_params()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
