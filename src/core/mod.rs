//! Core rate engine and application plumbing

pub mod config;
pub mod converter;
pub mod currency;
pub mod error;
pub mod format;
pub mod log;
pub mod query;
pub mod quick;
pub mod rates;

// Re-export main types for cleaner imports
pub use converter::{ConversionResult, Converter, DelayStrategy, FixedDelay, NoDelay};
pub use currency::{Currency, CurrencyCatalog, CurrencyRateProvider};
pub use error::FxError;
pub use query::{ConversionQuery, parse_amount};
pub use quick::{QuickConversion, QuotedConversion, quick_rates};
pub use rates::{RateEntry, RateResolver, RateSource, RateTable, Resolution, ResolutionPolicy};
