//! Report rendering for the command line
//!
//! Turns a [`DashboardSnapshot`] into plain text (metric cards followed by
//! one section per chart) or pretty-printed JSON.

use std::fmt::Write;

use clap::ValueEnum;

use crate::dashboard::DashboardSnapshot;
use crate::filter::WILDCARD;
use crate::listing::Field;

/// Width of the metric label column
const LABEL_WIDTH: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

pub fn render(snapshot: &DashboardSnapshot, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(snapshot)),
        OutputFormat::Json => render_json(snapshot),
    }
}

pub fn render_text(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::from("Bike Sales Dashboard\n");

    let filters = if snapshot.filters.is_empty() {
        "none".to_string()
    } else {
        snapshot
            .filters
            .iter()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let _ = writeln!(out, "Filters: {}", filters);

    out.push('\n');
    let _ = writeln!(out, "{:<w$}{}", "Average Price", snapshot.average_price, w = LABEL_WIDTH);
    let _ = writeln!(out, "{:<w$}{}", "Total Brands", snapshot.metrics.total_brands, w = LABEL_WIDTH);
    let _ = writeln!(out, "{:<w$}{}", "Total Bikes", snapshot.metrics.total_bikes, w = LABEL_WIDTH);

    for chart in &snapshot.charts {
        out.push('\n');
        let _ = writeln!(out, "{} Distribution", chart.field().title());

        if chart.is_empty() {
            out.push_str("  (no listings)\n");
            continue;
        }

        let width = chart
            .buckets()
            .iter()
            .map(|bucket| bucket.label().chars().count())
            .max()
            .unwrap_or(0);
        for bucket in chart.buckets() {
            let _ = writeln!(out, "  {:<width$}  {}", bucket.label(), bucket.count);
        }
    }

    out
}

pub fn render_json(snapshot: &DashboardSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}

/// The selectable values for a field's filter, wildcard first
pub fn render_options(field: Field, options: &[String]) -> String {
    let mut out = format!("{} ({} options)\n", field.title(), options.len());
    let _ = writeln!(out, "  {}", WILDCARD);
    for option in options {
        let _ = writeln!(out, "  {}", option);
    }
    out
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
