use dailygen_core::{Entry, Fuel, Totals};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Diesel (L)")]
    diesel: String,
    #[tabled(rename = "Gas Engine (kWh)")]
    gas: String,
    #[tabled(rename = "HFO (L)")]
    hfo: String,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Summary Statistics")]
    label: String,
    #[tabled(rename = "")]
    value: String,
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

pub fn show_entries(entries: &[Entry]) {
    if entries.is_empty() {
        println!("No data available to display");
        return;
    }

    let rows = entries
        .iter()
        .map(|e| EntryRow {
            date: e.date.clone(),
            diesel: e.quantity(Fuel::Diesel).to_string(),
            gas: e.quantity(Fuel::Gas).to_string(),
            hfo: e.quantity(Fuel::Hfo).to_string(),
        })
        .collect();
    println!("{}", render::<EntryRow>(rows));
}

pub fn show_summary(totals: &Totals) {
    let rows = totals
        .lines()
        .into_iter()
        .map(|(label, value)| SummaryRow { label, value })
        .collect();
    println!("{}", render::<SummaryRow>(rows));
}
