//! Terminal rendering of catalogs, reports and history.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use strip_core::StripCatalog;
use strip_model::{AnalysisReport, BiomarkerResult, HistoryEntry, Status};

use crate::commands::HistoryView;

/// Width of a 100% bar in the history trend chart.
const TREND_BAR_WIDTH: usize = 20;

pub fn strips_table(catalog: &StripCatalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Strip"),
        header_cell("Biomarkers"),
        header_cell("Color"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for strip in catalog {
        table.add_row(vec![
            Cell::new(&strip.id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&strip.name),
            Cell::new(strip.biomarkers.len()),
            swatch_cell(&strip.color),
            Cell::new(&strip.description),
        ]);
    }
    table
}

/// Overview block: headline, guidance, counts, quick stats and summary.
pub fn overview_text(report: &AnalysisReport) -> String {
    let counts = report.counts;
    let confidence = report
        .average_confidence
        .map_or_else(|| "-".to_string(), |value| format!("{value}%"));
    [
        format!(
            "{} analysis {}",
            report.strip_name,
            report.timestamp.format("%Y-%m-%d %H:%M UTC")
        ),
        format!(
            "{} ({})",
            report.overall_status.banner_text(),
            report.overall_status
        ),
        report.summary.clone(),
        format!(
            "{} Normal | {} Attention | {} Critical",
            counts.normal, counts.attention, counts.critical
        ),
        format!(
            "Total biomarkers: {} | Avg. confidence: {}",
            report.biomarker_results.len(),
            confidence
        ),
        String::new(),
        "Analysis Summary".to_string(),
        analysis_summary(report),
    ]
    .join("\n")
}

/// Closing paragraph of the overview, worded by whether the run is all normal.
pub fn analysis_summary(report: &AnalysisReport) -> String {
    let outcome = if report.overall_status == Status::Normal {
        "All detected values fall within expected reference ranges."
    } else {
        "Some biomarkers show variations from expected ranges and may warrant further investigation."
    };
    format!(
        "The {} analysis detected {} biomarkers using advanced AI-powered color interpretation. \
         The analysis utilized LAB color-space processing with white reference normalization \
         for clinical-grade accuracy. {outcome}",
        report.strip_name.to_lowercase(),
        report.biomarker_results.len(),
    )
}

pub fn biomarker_table(results: &[BiomarkerResult]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Biomarker"),
        header_cell("Status"),
        header_cell("Value"),
        header_cell("Reference range"),
        header_cell("Detected color"),
        header_cell("Confidence"),
    ]);
    apply_detail_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);
    for result in results {
        table.add_row(vec![
            Cell::new(&result.name).add_attribute(Attribute::Bold),
            status_cell(result.status),
            Cell::new(&result.value),
            Cell::new(&result.reference_range),
            swatch_cell(&result.detected_color),
            Cell::new(format!("{}%", result.confidence)),
        ]);
    }
    table
}

pub fn print_report(report: &AnalysisReport) {
    println!("{}", overview_text(report));
    println!();
    println!("{}", biomarker_table(&report.biomarker_results));
}

pub fn history_table(entries: &[HistoryEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Run"),
        header_cell("Date"),
        header_cell("Status"),
        header_cell("Normal"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.id),
            Cell::new(entry.date.format("%Y-%m-%d %H:%M")),
            status_cell(entry.status),
            Cell::new(format!(
                "{} of {} biomarkers",
                entry.normal_count, entry.biomarker_count
            )),
        ]);
    }
    table
}

/// One bar per run, oldest first, scaled to percent normal.
pub fn trend_text(entries: &[HistoryEntry]) -> String {
    strip_core::trend(entries)
        .into_iter()
        .map(|(date, percent)| {
            let filled = ((percent / 100.0) * TREND_BAR_WIDTH as f64).round() as usize;
            let filled = filled.min(TREND_BAR_WIDTH);
            format!(
                "{:<6} {}{} {:>3.0}% Normal",
                date.format("%b %-d").to_string(),
                "#".repeat(filled),
                ".".repeat(TREND_BAR_WIDTH - filled),
                percent
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_history(view: &HistoryView) {
    println!("{} history (filter: {})", view.strip_name, view.filter);
    println!("{}", trend_text(&view.entries));
    println!();
    if view.shown.is_empty() {
        println!("No runs match the filter.");
        return;
    }
    println!("{}", history_table(&view.shown));
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_detail_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: Status) -> Cell {
    let cell = Cell::new(status.label()).fg(status_color(status));
    if status == Status::Critical {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Normal => Color::Green,
        Status::Attention => Color::Yellow,
        Status::Critical => Color::Red,
    }
}

/// A colored block followed by the hex code.
fn swatch_cell(hex: &str) -> Cell {
    let cell = Cell::new(format!("■ {hex}"));
    match parse_hex(hex) {
        Some((r, g, b)) => cell.fg(Color::Rgb { r, g, b }),
        None => cell,
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_swatches() {
        assert_eq!(parse_hex("#22C55E"), Some((0x22, 0xC5, 0x5E)));
        assert_eq!(parse_hex("22C55E"), None);
        assert_eq!(parse_hex("#22C5"), None);
    }
}
