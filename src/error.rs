use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the toolkit.
///
/// Every engine operation is pure: it either completes with a defined result
/// or fails with `InvalidArgument` immediately. There is no retry logic and
/// no partial-failure state.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
