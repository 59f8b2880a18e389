//! Typed failures of the rate engine

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FxError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("No exchange rate available for {from}-{to}")]
    RateUnavailable { from: String, to: String },

    #[error("Invalid rate {rate} for {from}-{to}")]
    InvalidRate { from: String, to: String, rate: f64 },

    #[error("Duplicate rate for {from}-{to}")]
    DuplicateRate { from: String, to: String },

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Converting {amount} {from} to {to} overflows")]
    Overflow { amount: f64, from: String, to: String },
}

pub type Result<T> = std::result::Result<T, FxError>;
