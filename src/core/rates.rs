//! Rate table and the resolver that answers pair queries against it.
//!
//! Only a subset of ordered pairs is stored. A query for `(from, to)` is
//! answered from the stored pair, then from the reciprocal of `(to, from)`.
//! What happens when neither direction is stored depends on the caller:
//! [`RateResolver::resolve_rate`] returns `1.0`, [`RateResolver::try_resolve_rate`]
//! returns [`FxError::RateUnavailable`].

use super::currency::CurrencyCatalog;
use super::error::{FxError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use tracing::debug;

/// `1 from = rate to`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub from: String,
    pub to: String,
    pub rate: f64,
}

impl RateEntry {
    pub fn new(from: &str, to: &str, rate: f64) -> Self {
        RateEntry {
            from: from.to_string(),
            to: to.to_string(),
            rate,
        }
    }
}

pub fn default_rates() -> Vec<RateEntry> {
    vec![
        RateEntry::new("USD", "EUR", 0.85),
        RateEntry::new("USD", "GBP", 0.73),
        RateEntry::new("USD", "JPY", 110.0),
        RateEntry::new("USD", "CAD", 1.25),
        RateEntry::new("USD", "AUD", 1.35),
        RateEntry::new("USD", "CHF", 0.92),
        RateEntry::new("USD", "CNY", 6.45),
        RateEntry::new("USD", "INR", 74.5),
        RateEntry::new("EUR", "USD", 1.18),
        RateEntry::new("EUR", "GBP", 0.86),
        RateEntry::new("EUR", "JPY", 129.4),
        RateEntry::new("GBP", "USD", 1.37),
        RateEntry::new("GBP", "EUR", 1.16),
        RateEntry::new("JPY", "USD", 0.0091),
    ]
}

/// Immutable set of stored pair rates.
#[derive(Debug, Clone)]
pub struct RateTable {
    entries: Vec<RateEntry>,
    // from -> to -> rate
    index: HashMap<String, HashMap<String, f64>>,
}

impl RateTable {
    pub fn new(entries: Vec<RateEntry>) -> Result<Self> {
        let mut index: HashMap<String, HashMap<String, f64>> = HashMap::new();
        for entry in &entries {
            if entry.from == entry.to || !entry.rate.is_finite() || entry.rate <= 0.0 {
                return Err(FxError::InvalidRate {
                    from: entry.from.clone(),
                    to: entry.to.clone(),
                    rate: entry.rate,
                });
            }
            let targets = index.entry(entry.from.clone()).or_default();
            if targets.insert(entry.to.clone(), entry.rate).is_some() {
                return Err(FxError::DuplicateRate {
                    from: entry.from.clone(),
                    to: entry.to.clone(),
                });
            }
        }
        let table = RateTable { entries, index };
        debug!("Built rate table with {} entries", table.len());
        Ok(table)
    }

    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.index.get(from).and_then(|t| t.get(to)).copied()
    }

    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which branch of the lookup produced a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    Identity,
    Direct,
    Reciprocal,
    /// Neither direction is stored; the rate is a placeholder `1.0`.
    Fallback,
}

impl Display for RateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RateSource::Identity => "identity",
                RateSource::Direct => "direct",
                RateSource::Reciprocal => "reciprocal",
                RateSource::Fallback => "fallback",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub rate: f64,
    pub source: RateSource,
}

/// How unknown pairs are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionPolicy {
    /// Unknown pairs resolve to `1.0`.
    #[default]
    Lenient,
    /// Unknown codes and unlinked pairs are errors.
    Strict,
}

#[derive(Debug, Clone)]
pub struct RateResolver {
    table: RateTable,
    catalog: CurrencyCatalog,
}

impl RateResolver {
    pub fn new(table: RateTable, catalog: CurrencyCatalog) -> Self {
        RateResolver { table, catalog }
    }

    /// Resolver over the built-in currencies and rates.
    pub fn with_defaults() -> Result<Self> {
        Ok(RateResolver::new(
            RateTable::new(default_rates())?,
            CurrencyCatalog::default(),
        ))
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    pub fn catalog(&self) -> &CurrencyCatalog {
        &self.catalog
    }

    pub fn resolve(&self, from: &str, to: &str) -> Resolution {
        if from == to {
            return Resolution {
                rate: 1.0,
                source: RateSource::Identity,
            };
        }
        if let Some(rate) = self.table.get(from, to) {
            return Resolution {
                rate,
                source: RateSource::Direct,
            };
        }
        if let Some(reverse) = self.table.get(to, from) {
            return Resolution {
                rate: 1.0 / reverse,
                source: RateSource::Reciprocal,
            };
        }
        debug!("No rate stored for {from}-{to} in either direction");
        Resolution {
            rate: 1.0,
            source: RateSource::Fallback,
        }
    }

    /// Rate for converting `from` into `to`. Pairs absent in both directions
    /// resolve to `1.0`, indistinguishable from real parity.
    pub fn resolve_rate(&self, from: &str, to: &str) -> f64 {
        self.resolve(from, to).rate
    }

    pub fn convert(&self, amount: f64, from: &str, to: &str) -> f64 {
        amount * self.resolve_rate(from, to)
    }

    pub fn try_resolve(&self, from: &str, to: &str) -> Result<Resolution> {
        for code in [from, to] {
            if !self.catalog.contains(code) {
                return Err(FxError::UnknownCurrency(code.to_string()));
            }
        }
        let resolution = self.resolve(from, to);
        if resolution.source == RateSource::Fallback {
            return Err(FxError::RateUnavailable {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(resolution)
    }

    pub fn try_resolve_rate(&self, from: &str, to: &str) -> Result<f64> {
        self.try_resolve(from, to).map(|r| r.rate)
    }

    pub fn try_convert(&self, amount: f64, from: &str, to: &str) -> Result<f64> {
        checked_product(amount, self.try_resolve_rate(from, to)?, from, to)
    }

    pub fn resolve_with(
        &self,
        policy: ResolutionPolicy,
        from: &str,
        to: &str,
    ) -> Result<Resolution> {
        match policy {
            ResolutionPolicy::Lenient => Ok(self.resolve(from, to)),
            ResolutionPolicy::Strict => self.try_resolve(from, to),
        }
    }
}

/// `amount * rate`, or [`FxError::Overflow`] when the product is not finite.
pub fn checked_product(amount: f64, rate: f64, from: &str, to: &str) -> Result<f64> {
    let converted = amount * rate;
    if !converted.is_finite() {
        return Err(FxError::Overflow {
            amount,
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    Ok(converted)
}
