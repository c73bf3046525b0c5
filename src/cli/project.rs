//! The projection command: resolve inputs, compute, render, export.
use super::{chart, export, summary, ui};
use crate::ProjectionRequest;
use crate::core::config::AppConfig;
use crate::core::{CalculationMode, ProjectionInput, compute_projection};
use anyhow::Result;
use tracing::warn;

pub fn run(mode: CalculationMode, request: &ProjectionRequest, config: &AppConfig) -> Result<()> {
    let input = resolve_input(mode, request, config);
    let projection = compute_projection(&input)?;

    chart::print_chart(mode, &projection.points);
    ui::print_separator();
    summary::print_summary(&config.currency, &input, &projection.summary);

    if request.export {
        let path = export::write_pdf_report(config, &input, &projection)?;
        println!(
            "\nSaved report to {}",
            ui::style_text(&path.display().to_string(), ui::StyleType::TotalValue)
        );
    }

    Ok(())
}

/// Fills unset arguments from the configured defaults, then clamps each
/// value independently to its configured bounds.
fn resolve_input(
    mode: CalculationMode,
    request: &ProjectionRequest,
    config: &AppConfig,
) -> ProjectionInput {
    let amount = clamped(
        "amount",
        request.amount.unwrap_or(config.defaults.amount),
        &config.bounds.amount,
    );
    let rate = clamped(
        "rate",
        request.rate.unwrap_or(config.defaults.rate),
        &config.bounds.rate,
    );
    let years = clamped(
        "years",
        request.years.unwrap_or(config.defaults.years),
        &config.bounds.years,
    );

    ProjectionInput {
        mode,
        amount,
        annual_rate_pct: rate,
        years,
    }
}

fn clamped<T>(field: &str, value: T, bounds: &crate::core::config::Bounds<T>) -> T
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    let clamped = bounds.clamp(value);
    if clamped != value {
        warn!(
            "Clamped {field} from {value} to {clamped} (allowed range {}..={})",
            bounds.min, bounds.max
        );
    }
    clamped
}
