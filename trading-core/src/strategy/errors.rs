// =================================================================
// strategy/errors.rs - Error Types
// =================================================================

use thiserror::Error;
use trading_common::DataError;

/// Error types for strategy construction and tick handling
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<DataError> for StrategyError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::InvalidArgument(msg) => StrategyError::InvalidArgument(msg),
        }
    }
}
