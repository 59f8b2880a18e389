use super::ui;
use crate::core::format::{format_rate, rate_line};
use crate::core::{Converter, QuickConversion, QuotedConversion, RateSource, quick_rates};
use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn run(converter: &Converter, conversions: &[QuickConversion]) -> Result<()> {
    if conversions.is_empty() {
        println!("No popular conversions configured.");
        return Ok(());
    }

    let quotes = quick_rates(converter.resolver(), converter.policy(), conversions);

    println!("\n{}", ui::style_text("Popular Conversions", ui::StyleType::Title));
    for quote in &quotes {
        println!("{}", popular_line(quote));
    }

    ui::print_separator();

    println!("\n{}", ui::style_text("Exchange Rates", ui::StyleType::Title));
    println!("{}", rates_table(&quotes));
    Ok(())
}

fn popular_line(quote: &QuotedConversion) -> String {
    let c = &quote.conversion;
    let detail = match &quote.quote {
        Ok(r) => rate_line(&c.from, &c.to, r.rate),
        Err(e) => ui::style_text(&e.to_string(), ui::StyleType::Warning),
    };
    format!("{:<20} {}", c.label(), detail)
}

fn rates_table(quotes: &[QuotedConversion]) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency Pair"),
        ui::header_cell("Rate"),
        ui::header_cell("Source"),
    ]);

    for quote in quotes {
        let (rate, source) = match &quote.quote {
            Ok(r) => (
                ui::rate_cell(format_rate(r.rate), r.source == RateSource::Fallback),
                Cell::new(r.source.to_string()),
            ),
            Err(_) => (ui::rate_cell("N/A".to_string(), true), Cell::new("unavailable")),
        };
        table.add_row(vec![Cell::new(quote.conversion.pair()), rate, source]);
    }
    table
}
