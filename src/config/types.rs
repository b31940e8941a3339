// Configuration type definitions

use clap::ValueEnum;
use serde::Deserialize;

use crate::filter::FilterState;
use crate::listing::{Field, RowPolicy};

/// Record set used when the listing source cannot be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FallbackData {
    /// No listings at all
    #[default]
    Empty,
    /// The bundled sample listings
    Sample,
}

/// Data loading configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub fallback: FallbackData,
    #[serde(default)]
    pub row_policy: RowPolicy,
}

/// Dashboard layout configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Fields to chart, one distribution each, in display order
    #[serde(default = "default_charts")]
    pub charts: Vec<Field>,
}

fn default_charts() -> Vec<Field> {
    vec![Field::Power, Field::Owner, Field::Brand, Field::City]
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            charts: default_charts(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Filters applied on startup, `field = "value"`
    #[serde(default)]
    pub filters: FilterState,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
