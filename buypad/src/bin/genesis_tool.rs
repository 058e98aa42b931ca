use clap::Parser;
use consensus_core::encoding::serialize;
use consensus_core::network::NetworkType;
use serde::Serialize;

/// Small genesis tool that rebuilds, verifies and prints a network's genesis block.
#[derive(Parser, Debug)]
#[command(name = "genesis_tool")]
struct Opts {
	/// Network whose genesis to print (mainnet, testnet, regtest)
	#[arg(long, default_value = "mainnet")]
	network: String,

	/// Print the consensus-serialized block as hex
	#[arg(long)]
	hex: bool,

	/// Print the genesis description as JSON
	#[arg(long)]
	json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenesisReport {
	network: NetworkType,
	hash: String,
	merkle_root: String,
	coinbase_txid: String,
	version: i32,
	timestamp: u32,
	bits: String,
	nonce: u32,
	coinbase_text: &'static str,
	size: usize,
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

	// First access rebuilds and verifies the block
	let params = network.params();
	let block = params.genesis_block();
	let bytes = serialize(block);

	let report = GenesisReport {
		network,
		hash: block.hash().to_string(),
		merkle_root: block.header.hash_merkle_root.to_string(),
		coinbase_txid: block.transactions[0].id().to_string(),
		version: block.header.version,
		timestamp: block.header.timestamp,
		bits: format!("{:#010x}", block.header.bits),
		nonce: block.header.nonce,
		coinbase_text: params.genesis.coinbase_text,
		size: bytes.len(),
	};

	if opts.json {
		match serde_json::to_string_pretty(&report) {
			Ok(json) => println!("{}", json),
			Err(e) => {
				eprintln!("Failed to serialize genesis report: {}", e);
				std::process::exit(1);
			}
		}
	} else {
		println!("Network:      {}", report.network);
		println!("Hash:         {}", report.hash);
		println!("Merkle root:  {}", report.merkle_root);
		println!("Coinbase tx:  {}", report.coinbase_txid);
		println!("Version:      {}", report.version);
		println!("Timestamp:    {}", report.timestamp);
		println!("Bits:         {}", report.bits);
		println!("Nonce:        {}", report.nonce);
		println!("Coinbase msg: {}", report.coinbase_text);
		println!("Size:         {} bytes", report.size);
	}

	if opts.hex {
		println!("{}", hex::encode(&bytes));
	}
}
