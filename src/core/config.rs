use super::currency::{Currency, CurrencyCatalog, default_currencies};
use super::quick::{QuickConversion, default_quick_conversions};
use super::rates::{RateEntry, RateResolver, RateTable, ResolutionPolicy, default_rates};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::{fs, path::PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_currencies")]
    pub currencies: Vec<Currency>,
    #[serde(default = "default_rates")]
    pub rates: Vec<RateEntry>,
    #[serde(default = "default_quick_conversions")]
    pub popular: Vec<QuickConversion>,
    #[serde(default)]
    pub policy: ResolutionPolicy,
    /// Simulated lookup latency, in milliseconds
    #[serde(default)]
    pub latency_ms: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            currencies: default_currencies(),
            rates: default_rates(),
            popular: default_quick_conversions(),
            policy: ResolutionPolicy::default(),
            latency_ms: None,
        }
    }
}

impl AppConfig {
    /// Loads the default config file, or the built-in defaults if none exists.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "tripfx", "tripfx")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn build_resolver(&self) -> Result<RateResolver> {
        let table = RateTable::new(self.rates.clone()).context("Invalid rate table in config")?;
        if table.is_empty() {
            warn!("No rates configured, conversions between different currencies have no rate");
        }
        for code in self.uncatalogued_codes() {
            warn!(
                code = %code,
                "Currency used in rates or popular conversions is missing from currencies"
            );
        }
        Ok(RateResolver::new(
            table,
            CurrencyCatalog::new(self.currencies.clone()),
        ))
    }

    /// Codes named by `rates` or `popular` that are not listed in `currencies`.
    /// Strict resolution rejects every query that involves one of them.
    pub fn uncatalogued_codes(&self) -> Vec<String> {
        let known: BTreeSet<&str> = self.currencies.iter().map(|c| c.code.as_str()).collect();
        let rate_codes = self.rates.iter().flat_map(|r| [&r.from, &r.to]);
        let popular_codes = self.popular.iter().flat_map(|p| [&p.from, &p.to]);

        rate_codes
            .chain(popular_codes)
            .filter(|code| !known.contains(code.as_str()))
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }
}
