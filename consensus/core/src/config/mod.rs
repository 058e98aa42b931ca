pub mod constants;
pub mod genesis;
pub mod params;
pub mod registry;
pub mod seeds;

pub use constants::{Base58Prefixes, Base58Type};
pub use params::{DnsSeed, Params};
pub use registry::{ConfigSource, ParamsRegistry, MAINNET_PARAMS, REGTEST_PARAMS, TESTNET_PARAMS};
