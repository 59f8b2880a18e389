//! Display formatting for amounts and rates. Values are only rounded here,
//! never in what the resolver returns.

use super::converter::ConversionResult;
use super::currency::CurrencyCatalog;

/// Two decimals with comma thousands separators: `1234567.891` -> `1,234,567.89`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

pub fn format_rate(rate: f64) -> String {
    format!("{rate:.4}")
}

/// `$ 100.00 USD = € 85.00 EUR`
pub fn conversion_line(result: &ConversionResult, catalog: &CurrencyCatalog) -> String {
    let query = &result.query;
    format!(
        "{} {} {} = {} {} {}",
        catalog.symbol_for(&query.from),
        format_amount(query.amount),
        query.from,
        catalog.symbol_for(&query.to),
        format_amount(result.converted),
        query.to
    )
}

/// `1 USD = 0.8500 EUR`
pub fn rate_line(from: &str, to: &str, rate: f64) -> String {
    format!("1 {from} = {} {to}", format_rate(rate))
}
