use buypad::{cli, ui, Config, Node};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse command line arguments
    let args = cli::parse_args();

    // Initialize logging
    init_logging(&args);

    // Load configuration (use defaults unless config file is provided)
    let mut config = match &args.config_path {
        Some(path) => Config::load(path).unwrap_or_else(|e| fail(&format!("Failed to load configuration: {}", e))),
        None => Config::default(),
    };

    // Apply CLI overrides
    config.apply_cli_overrides(&args);

    let node = Node::init(&config).unwrap_or_else(|e| fail(&e.to_string()));
    let params = node.params();

    if args.json {
        match serde_json::to_string_pretty(params) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&format!("Failed to serialize parameters: {}", e)),
        }
        return;
    }

    ui::print_banner(env!("CARGO_PKG_VERSION"), node.network().name());
    ui::print_params_summary(params, node.data_dir(), args.show_seeds);
    ui::print_status("✓", &format!("Genesis block {} verified", params.genesis_hash()), ui::StatusType::Success);
    info!(network = %node.network(), "buypad bootstrap complete");
}

fn fail(message: &str) -> ! {
    ui::print_status("✗", message, ui::StatusType::Error);
    error!("{}", message);
    process::exit(1);
}

fn init_logging(args: &cli::Args) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt().with_env_filter(filter).with_target(true).with_thread_ids(true).with_writer(std::io::stderr).init();
}
