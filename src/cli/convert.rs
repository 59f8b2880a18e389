use super::ui;
use crate::core::format::{conversion_line, format_amount, rate_line};
use crate::core::{ConversionResult, Converter, RateSource};
use anyhow::Result;

pub async fn run(
    converter: &Converter,
    amount: &str,
    from: &str,
    to: &str,
    json: bool,
) -> Result<()> {
    let pb = (!json).then(|| ui::new_spinner("Fetching exchange rate..."));
    let result = converter.convert_text(amount, from, to).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    let result = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render(converter, &result));
    }
    Ok(())
}

pub fn rate(converter: &Converter, from: &str, to: &str) -> Result<()> {
    println!("{}", render_rate(converter, from, to)?);
    Ok(())
}

fn render_rate(converter: &Converter, from: &str, to: &str) -> Result<String> {
    let resolution = converter
        .resolver()
        .resolve_with(converter.policy(), from, to)?;

    let mut lines = vec![rate_line(from, to, resolution.rate)];
    if resolution.source == RateSource::Fallback {
        lines.push(fallback_warning(from, to));
    }
    Ok(lines.join("\n"))
}

fn fallback_warning(from: &str, to: &str) -> String {
    ui::style_text(
        &format!("No rate known for {from}-{to}, assumed 1:1"),
        ui::StyleType::Warning,
    )
}

fn render(converter: &Converter, result: &ConversionResult) -> String {
    let catalog = converter.resolver().catalog();
    let query = &result.query;

    let mut lines = vec![
        ui::style_text(
            &format!(
                "{} {}",
                catalog.symbol_for(&query.to),
                format_amount(result.converted)
            ),
            ui::StyleType::Result,
        ),
        conversion_line(result, catalog),
        rate_line(&query.from, &query.to, result.rate),
    ];
    if result.source == RateSource::Fallback {
        lines.push(fallback_warning(&query.from, &query.to));
    }
    lines.push(ui::style_text(
        &format!(
            "Last updated: {}",
            result.last_updated.format("%Y-%m-%d %H:%M:%S")
        ),
        ui::StyleType::Subtle,
    ));
    lines.join("\n")
}
