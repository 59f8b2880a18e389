use super::error::{FxError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionQuery {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl ConversionQuery {
    pub fn new(amount: f64, from: &str, to: &str) -> Self {
        ConversionQuery {
            amount,
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Builds a query from user-entered amount text.
    pub fn parse(amount: &str, from: &str, to: &str) -> Result<Self> {
        Ok(ConversionQuery::new(parse_amount(amount)?, from, to))
    }

    /// Same amount, currencies exchanged.
    pub fn swapped(&self) -> Self {
        ConversionQuery {
            amount: self.amount,
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

/// Parses an amount typed by a user. Rejects empty, non-numeric,
/// non-finite and negative input.
pub fn parse_amount(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| FxError::InvalidAmount(text.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(FxError::InvalidAmount(text.to_string()));
    }
    Ok(value)
}
