// Seed table generator for the BuyCoin network
// Run with: cargo run --bin generate_seeds -- nodes_main.txt

use buypad::seedgen::{parse_seed_list, render_seed_table};
use clap::Parser;
use consensus_core::network::NetworkType;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "generate_seeds")]
struct Opts {
    /// File with one address per line
    input: PathBuf,

    /// Network whose default port is used for entries without one
    #[arg(long, default_value = "mainnet")]
    network: String,
}

fn main() {
    let opts = Opts::parse();

    let network: NetworkType = match opts.network.parse() {
        Ok(network) => network,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let content = match fs::read_to_string(&opts.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read {}: {}", opts.input.display(), e);
            std::process::exit(1);
        }
    };

    let entries = match parse_seed_list(&content, network.params().default_port) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let name = format!("{}_SEEDS", network.name().to_uppercase());
    println!("// Generated by `generate_seeds` from the maintained node list.");
    print!("{}", render_seed_table(&name, &entries));
}
