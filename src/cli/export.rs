//! PDF report export for a rendered projection.
use crate::core::config::AppConfig;
use crate::core::{CalculationMode, Projection, ProjectionInput, ProjectionPoint};
use anyhow::{Context, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

// A4 page, text lines laid out top to bottom.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_STEP_MM: f32 = 4.8;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 9.0;

/// Widest chart that fits the page in the monospace body font.
const PDF_BAR_WIDTH: usize = 50;
/// Chart rows are sampled down to this many so the report stays one page.
const MAX_CHART_ROWS: usize = 36;

/// Writes the current projection view (inputs, chart, summary) as a
/// single-page PDF named `<Mode>-Investment-Data.pdf` and returns its path.
pub fn write_pdf_report(
    config: &AppConfig,
    input: &ProjectionInput,
    projection: &Projection,
) -> Result<PathBuf> {
    let file_name = format!("{}-Investment-Data.pdf", input.mode);
    let path = match &config.export_dir {
        Some(dir) => PathBuf::from(dir).join(&file_name),
        None => PathBuf::from(&file_name),
    };

    let title = "Investment Calculator";
    let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Report");
    let layer = doc.get_page(page).get_layer(layer);
    let title_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .context("Failed to register PDF title font")?;
    let body_font = doc
        .add_builtin_font(BuiltinFont::Courier)
        .context("Failed to register PDF body font")?;

    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
    layer.use_text(title, TITLE_SIZE, Mm(MARGIN_MM), Mm(y), &title_font);
    y -= 2.0 * LINE_STEP_MM;

    for line in report_lines(&config.currency, input, projection) {
        if !line.is_empty() {
            layer.use_text(line, BODY_SIZE, Mm(MARGIN_MM), Mm(y), &body_font);
        }
        y -= LINE_STEP_MM;
    }

    let file = File::create(&path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    doc.save(&mut BufWriter::new(file))
        .with_context(|| format!("Failed to write PDF report: {}", path.display()))?;

    info!("Wrote projection report to {}", path.display());
    Ok(path)
}

/// Builds the text body of the report: input panel, sampled chart, summary.
fn report_lines(currency: &str, input: &ProjectionInput, projection: &Projection) -> Vec<String> {
    let amount_label = match input.mode {
        CalculationMode::Sip => "Monthly Investment",
        CalculationMode::Lumpsum => "Lumpsum Investment",
    };

    let mut lines = vec![
        format!("Generated on {}", chrono::Local::now().format("%Y-%m-%d")),
        String::new(),
        format!("{}: {} {:.2}", amount_label, currency, input.amount),
        format!("Annual Interest Rate: {}%", input.annual_rate_pct),
        format!("Investment Period: {} years", input.years),
        String::new(),
        format!("{} Growth Over Time", input.mode),
        String::new(),
    ];

    lines.extend(chart_lines(input.mode, &projection.points));

    let summary = &projection.summary;
    lines.push(String::new());
    lines.push(format!(
        "Total Amount Invested: {} {:.2}",
        currency, summary.invested
    ));
    lines.push(format!(
        "Total Future Value: {} {:.2}",
        currency, summary.future_value
    ));
    lines.push(format!(
        "Total Return (Profit): {} {:.2}",
        currency, summary.gain
    ));
    lines
}

/// Monospace bar chart rows, downsampled to fit one page. Bars use '#'
/// because the builtin PDF fonts only cover WinAnsi glyphs.
fn chart_lines(mode: CalculationMode, points: &[ProjectionPoint]) -> Vec<String> {
    let Some(last) = points.last() else {
        return Vec::new();
    };
    let max_value = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let label_width = format!("{} {}", mode.period_label(), last.period).len();

    sample_indices(points.len(), MAX_CHART_ROWS)
        .into_iter()
        .map(|i| {
            let point = &points[i];
            let bar_len = if max_value > 0.0 {
                (((point.value / max_value) * PDF_BAR_WIDTH as f64).round() as usize).max(1)
            } else {
                0
            };
            let label = format!("{} {}", mode.period_label(), point.period);
            format!(
                "{label:>label_width$} {:<PDF_BAR_WIDTH$} {:.2}",
                "#".repeat(bar_len),
                point.value
            )
        })
        .collect()
}

/// Picks at most `max_rows` evenly strided indices out of `0..len`, always
/// including the final index.
fn sample_indices(len: usize, max_rows: usize) -> Vec<usize> {
    if len <= max_rows {
        return (0..len).collect();
    }
    let stride = len.div_ceil(max_rows);
    let mut indices: Vec<usize> = (0..len).filter(|i| (i + 1) % stride == 0).collect();
    if indices.last() != Some(&(len - 1)) {
        indices.push(len - 1);
    }
    indices
}
