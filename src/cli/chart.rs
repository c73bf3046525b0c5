//! Terminal bar chart for a projection series.
use super::ui;
use crate::core::{CalculationMode, ProjectionPoint};

const BAR_GLYPH: char = '█';
const MIN_BAR_WIDTH: usize = 10;

/// Prints the growth chart for a completed projection: a title, then one
/// horizontal bar per period scaled to the terminal width.
pub fn print_chart(mode: CalculationMode, points: &[ProjectionPoint]) {
    let title = match mode {
        CalculationMode::Sip => "SIP Growth Over Time",
        CalculationMode::Lumpsum => "Lumpsum Growth Over Time",
    };
    println!("{}\n", ui::style_text(title, ui::StyleType::Title));

    for row in chart_rows(mode, points, ui::terminal_width()) {
        println!("{row}");
    }
}

/// Builds the chart rows without printing them. Bars are proportional to
/// the point's value relative to the series maximum; the rounded value is
/// right-aligned after each bar.
fn chart_rows(mode: CalculationMode, points: &[ProjectionPoint], term_width: usize) -> Vec<String> {
    let Some(last) = points.last() else {
        return Vec::new();
    };

    let max_value = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

    let label_width = format!("{} {}", mode.period_label(), last.period).len();
    let value_width = format!("{max_value:.2}").len();
    let bar_width = term_width
        .saturating_sub(label_width + value_width + 3)
        .max(MIN_BAR_WIDTH);

    points
        .iter()
        .map(|point| {
            let label = format!("{} {}", mode.period_label(), point.period);
            let bar = BAR_GLYPH
                .to_string()
                .repeat(bar_len(point.value, max_value, bar_width));
            format!(
                "{label:>label_width$} {bar:<bar_width$} {value:>value_width$.2}",
                value = point.value
            )
        })
        .collect()
}

fn bar_len(value: f64, max_value: f64, bar_width: usize) -> usize {
    if max_value <= 0.0 || value <= 0.0 {
        return 0;
    }
    // Every positive value gets at least one glyph so early periods stay
    // visible next to a large final value.
    (((value / max_value) * bar_width as f64).round() as usize).max(1)
}
