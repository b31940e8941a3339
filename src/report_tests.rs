//! Tests for report rendering

use super::*;
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::filter::Selection;
use crate::listing::parser::parse;
use crate::test_utils::test_helpers::{SCENARIO_CSV, test_dashboard};
use insta::assert_snapshot;

fn scenario_dashboard() -> Dashboard {
    let mut dashboard = Dashboard::from_parsed(parse(SCENARIO_CSV).unwrap(), &Config::default());
    dashboard.set_charts(vec![Field::City, Field::Brand]);
    dashboard
}

#[test]
fn test_render_text_scenario() {
    let text = render_text(&scenario_dashboard().snapshot());

    assert_snapshot!(text.trim_end(), @r"
Bike Sales Dashboard
Filters: none

Average Price  N/A
Total Brands   2
Total Bikes    3

City Distribution
  Delhi   2
  Mumbai  1

Brand Distribution
  Hero   1
  Honda  2
");
}

#[test]
fn test_render_text_with_filters_and_prices() {
    let mut dashboard = test_dashboard();
    dashboard.set_charts(vec![Field::Owner]);
    dashboard.set_filter(Field::City, Selection::parse("Delhi"));
    dashboard.set_filter(Field::Brand, Selection::parse("Royal Enfield"));

    let text = render_text(&dashboard.snapshot());

    assert!(text.contains("Filters: city=Delhi, brand=Royal Enfield\n"));
    // (119900 + 88000) / 2
    assert!(text.contains("Average Price  ₹1,03,950.00\n"));
    assert!(text.contains("Total Brands   1\n"));
    assert!(text.contains("Total Bikes    2\n"));
    assert!(text.contains("Owner Distribution\n  First Owner   1\n  Second Owner  1\n"));
}

#[test]
fn test_render_text_empty_chart() {
    let mut dashboard = scenario_dashboard();
    dashboard.set_filter(Field::City, Selection::parse("Chennai"));

    let text = render_text(&dashboard.snapshot());

    assert!(text.contains("City Distribution\n  (no listings)\n"));
    assert!(text.contains("Total Bikes    0\n"));
}

#[test]
fn test_render_text_missing_bucket_label() {
    let mut dashboard = Dashboard::from_parsed(
        parse("city,owner\nDelhi,First Owner\nPune\n").unwrap(),
        &Config::default(),
    );
    dashboard.set_charts(vec![Field::Owner]);

    let text = render_text(&dashboard.snapshot());

    assert!(text.contains("  First Owner          1\n"));
    assert!(text.contains("  (missing, no value)  1\n"));
}

#[test]
fn test_missing_bucket_is_distinct_from_a_literal_value() {
    let mut dashboard = Dashboard::from_parsed(
        parse("city,brand\nDelhi,(missing)\nPune\n").unwrap(),
        &Config::default(),
    );
    dashboard.set_charts(vec![Field::Brand]);

    let text = render_text(&dashboard.snapshot());

    assert!(text.contains("  (missing)            1\n"));
    assert!(text.contains("  (missing, no value)  1\n"));
}

#[test]
fn test_render_json_round_trips_through_serde() {
    let snapshot = scenario_dashboard().snapshot();
    let json = render(&snapshot, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["metrics"]["total_bikes"], 3);
    assert_eq!(value["charts"][1]["field"], "brand");
    assert_eq!(value["charts"][1]["buckets"][1]["name"], "Honda");
    assert_eq!(value["charts"][1]["buckets"][1]["count"], 2);
}

#[test]
fn test_render_dispatches_text() {
    let snapshot = scenario_dashboard().snapshot();
    assert_eq!(
        render(&snapshot, OutputFormat::Text).unwrap(),
        render_text(&snapshot)
    );
}

#[test]
fn test_render_options() {
    let options = vec!["Delhi".to_string(), "Mumbai".to_string()];
    assert_eq!(
        render_options(Field::City, &options),
        "City (2 options)\n  all\n  Delhi\n  Mumbai\n"
    );
}
