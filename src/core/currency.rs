//! Currency catalog and the rate provider abstraction

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

impl Currency {
    pub fn new(code: &str, name: &str, symbol: &str) -> Self {
        Currency {
            code: code.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
        }
    }
}

/// The currencies offered by the converter, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyCatalog {
    currencies: Vec<Currency>,
}

impl CurrencyCatalog {
    pub fn new(currencies: Vec<Currency>) -> Self {
        CurrencyCatalog { currencies }
    }

    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Display symbol for `code`, or the code itself when it is not in the catalog.
    pub fn symbol_for<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code).map_or(code, |c| c.symbol.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.iter()
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

impl Default for CurrencyCatalog {
    fn default() -> Self {
        CurrencyCatalog::new(default_currencies())
    }
}

pub fn default_currencies() -> Vec<Currency> {
    vec![
        Currency::new("USD", "US Dollar", "$"),
        Currency::new("EUR", "Euro", "€"),
        Currency::new("GBP", "British Pound", "£"),
        Currency::new("JPY", "Japanese Yen", "¥"),
        Currency::new("CAD", "Canadian Dollar", "C$"),
        Currency::new("AUD", "Australian Dollar", "A$"),
        Currency::new("CHF", "Swiss Franc", "CHF"),
        Currency::new("CNY", "Chinese Yuan", "¥"),
        Currency::new("INR", "Indian Rupee", "₹"),
    ]
}

#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64>;
}
