//! Future value projection for recurring (SIP) and lumpsum investments.
use rust_decimal::{Decimal, RoundingStrategy, prelude::*};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Selects which growth series is generated and the period unit of the
/// resulting points (months for SIP, years for lumpsum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalculationMode {
    Sip,
    Lumpsum,
}

impl CalculationMode {
    /// Unit of the `period` axis, used for chart category labels.
    pub fn period_label(&self) -> &'static str {
        match self {
            CalculationMode::Sip => "Month",
            CalculationMode::Lumpsum => "Year",
        }
    }
}

impl std::fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculationMode::Sip => write!(f, "SIP"),
            CalculationMode::Lumpsum => write!(f, "Lumpsum"),
        }
    }
}

/// Inputs for a single projection. Callers clamp the raw values to the
/// configured bounds before building this; the engine still validates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionInput {
    pub mode: CalculationMode,
    /// Monthly contribution (SIP) or one-time investment (Lumpsum).
    pub amount: f64,
    /// Annual interest rate in percent, e.g. 12.0 for 12%.
    pub annual_rate_pct: f64,
    /// Horizon in whole years.
    pub years: u32,
}

/// Cumulative value at the end of one elapsed period.
///
/// The engine generates these; the rendering layer just draws them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    /// 1-based month (SIP) or year (Lumpsum) index.
    pub period: u32,
    /// Future value after `period` periods, rounded to 2 fractional digits.
    pub value: f64,
}

/// Display totals for a completed projection, each rounded to 2 digits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionSummary {
    pub invested: f64,
    pub future_value: f64,
    pub gain: f64,
}

/// The complete result of one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub points: Vec<ProjectionPoint>,
    pub summary: ProjectionSummary,
}

/// Rejected inputs. The only failure mode of the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("investment amount must be a positive number, got {0}")]
    NonPositiveAmount(f64),
    #[error("investment period must be at least 1 year")]
    ZeroDuration,
    #[error("annual rate must be a finite non-negative percentage, got {0}")]
    InvalidRate(f64),
}

/// Projects the growth of an investment over its full horizon.
///
/// Returns one point per elapsed month (SIP) or year (Lumpsum), ordered by
/// period starting at 1, together with the derived totals. The summary's
/// `future_value` reuses the last point's already-rounded value so the
/// displayed totals always agree with the chart.
///
/// Pure and deterministic: identical inputs yield identical outputs.
pub fn compute_projection(input: &ProjectionInput) -> Result<Projection, InvalidInput> {
    validate(input)?;

    debug!("Computing projection for {input:?}");
    let points = match input.mode {
        CalculationMode::Sip => sip_points(input),
        CalculationMode::Lumpsum => lumpsum_points(input),
    };

    let invested = match input.mode {
        CalculationMode::Sip => round2(input.amount * points.len() as f64),
        CalculationMode::Lumpsum => round2(input.amount),
    };
    // Reuse the rounded final point rather than recomputing, so the summary
    // is always consistent with the rendered series.
    let future_value = points
        .last()
        .map(|p| p.value)
        .unwrap_or(invested);
    let summary = ProjectionSummary {
        invested,
        future_value,
        gain: round2(future_value - invested),
    };

    Ok(Projection { points, summary })
}

fn validate(input: &ProjectionInput) -> Result<(), InvalidInput> {
    if !input.amount.is_finite() || input.amount <= 0.0 {
        return Err(InvalidInput::NonPositiveAmount(input.amount));
    }
    if input.years < 1 {
        return Err(InvalidInput::ZeroDuration);
    }
    if !input.annual_rate_pct.is_finite() || input.annual_rate_pct < 0.0 {
        return Err(InvalidInput::InvalidRate(input.annual_rate_pct));
    }
    Ok(())
}

/// Annuity-due series: equal contributions at the start of each month, each
/// compounding monthly from its own start date.
fn sip_points(input: &ProjectionInput) -> Vec<ProjectionPoint> {
    let monthly_rate = input.annual_rate_pct / 12.0 / 100.0;
    let total_months = input.years * 12;

    (1..=total_months)
        .map(|month| {
            let value = if monthly_rate == 0.0 {
                // Zero rate degenerates to plain accumulation.
                input.amount * f64::from(month)
            } else {
                input.amount * ((1.0 + monthly_rate).powi(month as i32) - 1.0) / monthly_rate
                    * (1.0 + monthly_rate)
            };
            ProjectionPoint {
                period: month,
                value: round2(value),
            }
        })
        .collect()
}

/// Single investment at time zero, compounded annually.
fn lumpsum_points(input: &ProjectionInput) -> Vec<ProjectionPoint> {
    let annual_rate = input.annual_rate_pct / 100.0;

    (1..=input.years)
        .map(|year| ProjectionPoint {
            period: year,
            value: round2(input.amount * (1.0 + annual_rate).powi(year as i32)),
        })
        .collect()
}

/// Rounds to 2 fractional digits, half away from zero.
fn round2(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
