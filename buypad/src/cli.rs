use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "buypad")]
#[command(about = "BuyCoin node bootstrap: selects the network and reports its chain parameters", long_about = None)]
pub struct Args {
    /// Path to configuration file (optional, uses defaults if not provided)
    #[arg(short, long)]
    pub config_path: Option<PathBuf>,

    /// Base data directory; testnet and regtest use a subdirectory of it
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Use the test network
    #[arg(long)]
    pub testnet: bool,

    /// Use the local regression-test network
    #[arg(long)]
    pub regtest: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Print the active parameter set as JSON
    #[arg(long)]
    pub json: bool,

    /// Also list the fixed seed addresses
    #[arg(long)]
    pub show_seeds: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
