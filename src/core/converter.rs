//! The convert action: optional simulated latency, rate resolution and a
//! timestamped result.

use super::currency::CurrencyRateProvider;
use super::query::ConversionQuery;
use super::rates::{RateResolver, RateSource, ResolutionPolicy, checked_product};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait DelayStrategy: Send + Sync {
    async fn wait(&self);
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl DelayStrategy for NoDelay {
    async fn wait(&self) {}
}

/// Sleeps for a fixed duration before every conversion, to mimic a remote call.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl DelayStrategy for FixedDelay {
    async fn wait(&self) {
        debug!("Simulating latency of {:?}", self.0);
        tokio::time::sleep(self.0).await;
    }
}

/// `None` or zero means no delay.
pub fn delay_from_millis(latency_ms: Option<u64>) -> Box<dyn DelayStrategy> {
    match latency_ms {
        Some(ms) if ms > 0 => Box::new(FixedDelay(Duration::from_millis(ms))),
        _ => Box::new(NoDelay),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    pub query: ConversionQuery,
    pub rate: f64,
    pub converted: f64,
    pub source: RateSource,
    /// When the result was computed. Not the age of the rate data.
    pub last_updated: DateTime<Local>,
}

pub struct Converter {
    resolver: RateResolver,
    policy: ResolutionPolicy,
    delay: Box<dyn DelayStrategy>,
}

impl Converter {
    pub fn new(resolver: RateResolver, policy: ResolutionPolicy) -> Self {
        Converter {
            resolver,
            policy,
            delay: Box::new(NoDelay),
        }
    }

    pub fn with_delay(mut self, delay: Box<dyn DelayStrategy>) -> Self {
        self.delay = delay;
        self
    }

    pub fn resolver(&self) -> &RateResolver {
        &self.resolver
    }

    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    pub async fn convert(&self, query: &ConversionQuery) -> Result<ConversionResult> {
        self.delay.wait().await;

        let resolution = self
            .resolver
            .resolve_with(self.policy, &query.from, &query.to)?;
        let converted = checked_product(query.amount, resolution.rate, &query.from, &query.to)?;
        debug!(
            from = %query.from,
            to = %query.to,
            rate = resolution.rate,
            source = %resolution.source,
            "Converted {} -> {}",
            query.amount,
            converted
        );

        Ok(ConversionResult {
            query: query.clone(),
            rate: resolution.rate,
            converted,
            source: resolution.source,
            last_updated: Local::now(),
        })
    }

    pub async fn convert_text(
        &self,
        amount: &str,
        from: &str,
        to: &str,
    ) -> Result<ConversionResult> {
        let query = ConversionQuery::parse(amount, from, to)?;
        self.convert(&query).await
    }
}

#[async_trait]
impl CurrencyRateProvider for Converter {
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64> {
        Ok(self.resolver.resolve_with(self.policy, from, to)?.rate)
    }
}
