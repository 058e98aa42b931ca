//! User interface utilities for better console output

use buy_utils::hex::ToHex;
use consensus_core::config::{Base58Type, Params};

/// ANSI color codes for terminal output
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
    pub const BRIGHT_WHITE: &str = "\x1b[97m";
}

/// Print startup banner
pub fn print_banner(version: &str, network: &str) {
    println!();
    println!("{}╔══════════════════════════════════════════════════════════════╗{}", colors::BRIGHT_CYAN, colors::RESET);
    println!("{}║{}          {}BUYCOIN NODE - BUYPAD v{:<10}{}                    {}║{}",
        colors::BRIGHT_CYAN, colors::RESET, colors::BOLD, version, colors::RESET, colors::BRIGHT_CYAN, colors::RESET);
    println!("{}║{}  Network: {}{:<50}{}  {}║{}",
        colors::BRIGHT_CYAN, colors::RESET, colors::BRIGHT_GREEN, network, colors::RESET, colors::BRIGHT_CYAN, colors::RESET);
    println!("{}╚══════════════════════════════════════════════════════════════╝{}", colors::BRIGHT_CYAN, colors::RESET);
    println!();
}

/// Status types for colored output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusType {
    Success,
    Info,
    Warning,
    Error,
}

/// Print status line with icon and color
pub fn print_status(icon: &str, message: &str, status: StatusType) {
    let color = match status {
        StatusType::Success => colors::BRIGHT_GREEN,
        StatusType::Info => colors::BRIGHT_CYAN,
        StatusType::Warning => colors::BRIGHT_YELLOW,
        StatusType::Error => colors::BRIGHT_RED,
    };

    println!("{}[{}]{} {} {}", color, icon, colors::RESET, color, message);
}

/// Print a section header
pub fn print_section(title: &str) {
    println!();
    println!("{}━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━{}", colors::DIM, colors::RESET);
    println!("{}  {}{}{}", colors::BRIGHT_CYAN, colors::BOLD, title, colors::RESET);
    println!("{}━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━{}", colors::DIM, colors::RESET);
    println!();
}

/// Print key-value pair in a formatted way
pub fn print_kv(key: &str, value: &str) {
    println!("  {}{}:{} {}{}{}", colors::BRIGHT_WHITE, key, colors::RESET, colors::BRIGHT_CYAN, value, colors::RESET);
}

fn prefix_label(kind: Base58Type) -> &'static str {
    match kind {
        Base58Type::PubkeyAddress => "Pubkey Address Prefix",
        Base58Type::ScriptAddress => "Script Address Prefix",
        Base58Type::SecretKey => "Secret Key Prefix",
        Base58Type::ExtPublicKey => "Ext Public Key Prefix",
        Base58Type::ExtSecretKey => "Ext Secret Key Prefix",
    }
}

/// Print the active parameter set
pub fn print_params_summary(params: &Params, data_dir: &std::path::Path, show_seeds: bool) {
    print_section("Chain Parameters");

    print_kv("Network", params.net.name());
    print_kv("Message Start", &params.message_start.to_hex());
    print_kv("P2P Port", &params.default_port.to_string());
    print_kv("RPC Port", &params.rpc_port.to_string());
    print_kv("RPC Password", if params.require_rpc_password { "Required" } else { "Not required" });
    print_kv("PoW Limit", &format!("{:#x}", params.pow_limit));
    print_kv("Genesis Hash", &params.genesis_hash().to_string());
    print_kv("Genesis Bits", &format!("{:#010x}", params.genesis_block().header.bits));
    print_kv("Data Directory", &data_dir.display().to_string());
    for kind in Base58Type::iter() {
        print_kv(prefix_label(kind), &params.base58_prefix(kind).to_hex());
    }
    print_kv("DNS Seeds", &params.dns_seeds.len().to_string());
    print_kv("Fixed Seeds", &params.fixed_seeds.len().to_string());

    let (message, status) = peer_discovery_status(params);
    print_status(if status == StatusType::Warning { "!" } else { "i" }, &message, status);

    if show_seeds {
        print_section("Bootstrap Peers");
        for seed in &params.dns_seeds {
            print_kv("dns", seed.host);
        }
        for address in &params.fixed_seeds {
            print_kv("fixed", &address.to_string());
        }
    }
}

/// How the node will find its first peers
pub fn peer_discovery_status(params: &Params) -> (String, StatusType) {
    if params.dns_seeds.is_empty() && params.fixed_seeds.is_empty() {
        ("No bootstrap peers; connect nodes manually".to_string(), StatusType::Warning)
    } else {
        (
            format!("Bootstrapping from {} DNS seeds and {} fixed seeds", params.dns_seeds.len(), params.fixed_seeds.len()),
            StatusType::Info,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consensus_core::network::NetworkType;

    #[test]
    fn test_peer_discovery_status() {
        let (message, status) = peer_discovery_status(NetworkType::Mainnet.params());
        assert_eq!(status, StatusType::Info);
        assert!(message.contains("3 DNS seeds"));

        for network in [NetworkType::Testnet, NetworkType::Regtest] {
            let (_, status) = peer_discovery_status(network.params());
            assert_eq!(status, StatusType::Warning);
        }
    }
}
