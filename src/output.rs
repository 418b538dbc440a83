//! Report rendering.
//!
//! Supports a bordered grid table, pretty JSON and CSV.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table, TableComponent};
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use crate::analyzers::report::{Report, ReportKind};
use crate::analyzers::types::ReportRow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered text table
    #[default]
    Grid,
    /// Pretty-printed JSON document
    Json,
    /// CSV with a header row
    Csv,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    report: ReportKind,
    generated_at: DateTime<Utc>,
    rows: &'a [ReportRow],
}

/// Writes `report` to `out` in the requested format.
pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> Result<()> {
    debug!(?format, rows = report.rows.len(), "Rendering report");

    match format {
        OutputFormat::Grid => writeln!(out, "{}", render_grid(report))?,
        OutputFormat::Json => writeln!(out, "{}", render_json(report)?)?,
        OutputFormat::Csv => write_csv(out, report)?,
    }

    Ok(())
}

/// Renders the report as a grid table with a 1-based index column at least
/// two characters wide.
///
/// An empty report renders as a one-line notice instead of a table.
pub fn render_grid(report: &Report) -> String {
    if report.is_empty() {
        return format!("No data for report {}", report.kind);
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_style(TableComponent::LeftBorderIntersections, '+')
        .set_style(TableComponent::RightBorderIntersections, '+')
        .set_header(vec!["", "Position", "Performance"]);

    for (index, row) in report.rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("{:>2}", index + 1)),
            Cell::new(&row.position),
            Cell::new(format!("{:.2}", row.performance)),
        ]);
    }

    for index in [0, 2] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.to_string()
}

/// Serializes the report with a generation timestamp as pretty JSON.
pub fn render_json(report: &Report) -> Result<String> {
    let doc = JsonReport {
        report: report.kind,
        generated_at: Utc::now(),
        rows: &report.rows,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Writes `position,performance` rows, header included even when empty.
pub fn write_csv<W: Write>(out: W, report: &Report) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);

    writer.write_record(["position", "performance"])?;
    for row in &report.rows {
        let performance = format!("{:.2}", row.performance);
        writer.write_record([row.position.as_str(), performance.as_str()])?;
    }
    writer.flush()?;

    Ok(())
}
