/// Block header version used by the genesis blocks
pub const BLOCK_VERSION: i32 = 1;

/// Transaction version used by the genesis coinbase
pub const TX_VERSION: i32 = 1;

/// Input sequence number that disables lock-time semantics
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

/// Output index of the null outpoint spent by a coinbase input
pub const NULL_OUTPOINT_INDEX: u32 = 0xffff_ffff;

/// Serialized size of a block header in bytes
pub const HEADER_SIZE: usize = 80;
