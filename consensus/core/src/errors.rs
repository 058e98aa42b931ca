use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkTypeError {
    #[error("unknown network type: {0}")]
    Unknown(String),
}
