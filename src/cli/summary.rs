//! Summary panel for a completed projection.
use super::ui;
use crate::core::{CalculationMode, ProjectionInput, ProjectionSummary};
use comfy_table::Cell;

/// Prints the summary panel: the resolved inputs followed by the derived
/// totals, as a styled two-column table.
pub fn print_summary(currency: &str, input: &ProjectionInput, summary: &ProjectionSummary) {
    let title = match input.mode {
        CalculationMode::Sip => "SIP Summary",
        CalculationMode::Lumpsum => "Lumpsum Summary",
    };
    println!("{}\n", ui::style_text(title, ui::StyleType::Title));
    println!("{}", summary_table(currency, input, summary));
}

fn summary_table(
    currency: &str,
    input: &ProjectionInput,
    summary: &ProjectionSummary,
) -> comfy_table::Table {
    let amount_label = match input.mode {
        CalculationMode::Sip => "Monthly Investment",
        CalculationMode::Lumpsum => "Lumpsum Investment",
    };

    let mut table = ui::new_styled_table();
    table.add_row(vec![
        Cell::new(amount_label),
        ui::money_cell(currency, input.amount),
    ]);
    table.add_row(vec![
        Cell::new("Annual Interest Rate"),
        Cell::new(format!("{}%", input.annual_rate_pct)),
    ]);
    table.add_row(vec![
        Cell::new("Investment Period"),
        Cell::new(format!("{} years", input.years)),
    ]);
    table.add_row(vec![
        Cell::new("Total Amount Invested"),
        ui::money_cell(currency, summary.invested),
    ]);
    table.add_row(vec![
        Cell::new("Total Future Value"),
        ui::money_cell(currency, summary.future_value),
    ]);
    table.add_row(vec![
        Cell::new("Total Return (Profit)"),
        ui::gain_cell(currency, summary.gain),
    ]);
    table
}
