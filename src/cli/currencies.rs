use super::ui;
use crate::core::CurrencyCatalog;
use comfy_table::{Cell, Table};

pub fn run(catalog: &CurrencyCatalog) {
    if catalog.is_empty() {
        println!("No currencies configured.");
        return;
    }
    println!("{}", currencies_table(catalog));
}

fn currencies_table(catalog: &CurrencyCatalog) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Name"),
        ui::header_cell("Symbol"),
    ]);
    for currency in catalog.iter() {
        table.add_row(vec![
            Cell::new(&currency.code),
            Cell::new(&currency.name),
            Cell::new(&currency.symbol),
        ]);
    }
    table
}
