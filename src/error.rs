use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KioskError {
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KioskError>;

/// Failures of the payment gateway itself, as opposed to a declined payment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("gateway did not answer within {0:?}")]
    Timeout(Duration),
    #[error("gateway unavailable: {0}")]
    Unavailable(String),
}
