//! Popular conversion shortcuts and their current rates

use super::error::FxError;
use super::rates::{RateResolver, Resolution, ResolutionPolicy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickConversion {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl QuickConversion {
    pub fn new(from: &str, to: &str) -> Self {
        QuickConversion {
            from: from.to_string(),
            to: to.to_string(),
            label: None,
        }
    }

    /// Configured label, or "FROM to TO".
    pub fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("{} to {}", self.from, self.to))
    }

    pub fn pair(&self) -> String {
        format!("{}/{}", self.from, self.to)
    }
}

pub fn default_quick_conversions() -> Vec<QuickConversion> {
    vec![
        QuickConversion::new("USD", "EUR"),
        QuickConversion::new("USD", "GBP"),
        QuickConversion::new("USD", "JPY"),
        QuickConversion::new("EUR", "USD"),
        QuickConversion::new("GBP", "USD"),
        QuickConversion::new("USD", "INR"),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuotedConversion {
    pub conversion: QuickConversion,
    pub quote: Result<Resolution, FxError>,
}

/// Resolves every shortcut. A failure on one entry does not affect the others.
pub fn quick_rates(
    resolver: &RateResolver,
    policy: ResolutionPolicy,
    conversions: &[QuickConversion],
) -> Vec<QuotedConversion> {
    conversions
        .iter()
        .map(|c| QuotedConversion {
            conversion: c.clone(),
            quote: resolver.resolve_with(policy, &c.from, &c.to),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rates::RateSource;

    #[test]
    fn test_default_labels() {
        let labels: Vec<String> = default_quick_conversions()
            .iter()
            .map(QuickConversion::label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "USD to EUR",
                "USD to GBP",
                "USD to JPY",
                "EUR to USD",
                "GBP to USD",
                "USD to INR"
            ]
        );
    }

    #[test]
    fn test_custom_label_and_pair() {
        let mut c = QuickConversion::new("EUR", "JPY");
        c.label = Some("Tokyo trip".to_string());
        assert_eq!(c.label(), "Tokyo trip");
        assert_eq!(c.pair(), "EUR/JPY");
    }

    #[test]
    fn test_quick_rates_match_resolver() {
        let resolver = RateResolver::with_defaults().unwrap();
        let quotes = quick_rates(
            &resolver,
            ResolutionPolicy::Lenient,
            &default_quick_conversions(),
        );
        let rates: Vec<f64> = quotes
            .iter()
            .map(|q| q.quote.as_ref().unwrap().rate)
            .collect();
        assert_eq!(rates, vec![0.85, 0.73, 110.0, 1.18, 1.37, 74.5]);
        assert!(
            quotes
                .iter()
                .all(|q| q.quote.as_ref().unwrap().source == RateSource::Direct)
        );
    }

    #[test]
    fn test_strict_quick_rates_keep_going_after_failure() {
        let resolver = RateResolver::with_defaults().unwrap();
        let conversions = vec![
            QuickConversion::new("CAD", "AUD"),
            QuickConversion::new("INR", "USD"),
        ];
        let quotes = quick_rates(&resolver, ResolutionPolicy::Strict, &conversions);
        assert!(matches!(
            quotes[0].quote,
            Err(FxError::RateUnavailable { .. })
        ));
        let inr_usd = quotes[1].quote.as_ref().unwrap();
        assert_eq!(inr_usd.source, RateSource::Reciprocal);
        assert!((inr_usd.rate - 1.0 / 74.5).abs() < 1e-12);
    }
}
