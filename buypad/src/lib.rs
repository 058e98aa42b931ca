//! Buypad - BuyCoin node bootstrap
//!
//! Merges command line and config file settings, selects the active network
//! and exposes its chain parameters to the rest of the node.

pub mod cli;
pub mod config;
pub mod node;
pub mod seedgen;
pub mod ui;

pub use cli::Args;
pub use config::{Config, ConfigError};
pub use node::Node;
