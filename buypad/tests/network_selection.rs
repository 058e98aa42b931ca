use buypad::{Args, Config, ConfigError, Node};
use consensus_core::network::NetworkType;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("buypad.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn missing_config_file_selects_mainnet() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(&dir.path().join("absent.toml")).unwrap();

    let node = Node::init(&config).unwrap();
    assert_eq!(node.network(), NetworkType::Mainnet);
    assert_eq!(node.params().default_port, 9037);
    assert_eq!(node.data_dir(), config.storage.data_dir.as_path());
}

#[test]
fn config_file_selects_regtest() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("chain");
    let path = write_config(&dir, &format!("[network]\nregtest = true\n\n[storage]\ndata_dir = {:?}\n", data.display().to_string()));

    let config = Config::load(&path).unwrap();
    let node = Node::init(&config).unwrap();

    assert_eq!(node.network(), NetworkType::Regtest);
    assert_eq!(node.data_dir(), data.join("regtest"));
    assert!(!node.params().require_rpc_password);
    assert!(node.params().fixed_seeds.is_empty());
}

#[test]
fn command_line_flag_adds_to_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[network]\ntestnet = true\n");
    let mut config = Config::load(&path).unwrap();

    let args = Args { regtest: true, ..Default::default() };
    config.apply_cli_overrides(&args);

    assert!(matches!(Node::init(&config), Err(ConfigError::ConflictingNetworks)));
}

#[test]
fn command_line_data_dir_wins() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[network]\ntestnet = true\n\n[storage]\ndata_dir = \"/var/lib/buycoin\"\n");
    let mut config = Config::load(&path).unwrap();

    let args = Args { data_dir: Some(dir.path().to_path_buf()), ..Default::default() };
    config.apply_cli_overrides(&args);

    let node = Node::init(&config).unwrap();
    assert_eq!(node.network(), NetworkType::Testnet);
    assert_eq!(node.data_dir(), dir.path().join("testnet"));
    assert_eq!(node.registry().active_params().rpc_port, 19038);
}

#[test]
fn malformed_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[network]\ntestnet = \"yes please\"\n");
    assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
}
