use std::collections::BTreeMap;

use serde::Serialize;

use super::fallback::fallback_records;
use crate::config::{Config, FallbackData};
use crate::error::BikeDashError;
use crate::filter::{self, FilterState, Selection};
use crate::listing::{Field, Parsed, RecordSet};
use crate::stats::{Aggregator, Distribution, Metrics};

/// Where the dashboard's listings came from
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Parsed from the requested source
    Loaded {
        warnings: usize,
        rejected: usize,
        ignored_columns: Vec<String>,
    },
    /// The source failed to load; a fallback set is shown instead
    Fallback {
        reason: BikeDashError,
        data: FallbackData,
    },
}

/// Everything a dashboard view shows, computed from the current filters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub filters: BTreeMap<Field, String>,
    pub metrics: Metrics,
    /// Average price formatted for display
    pub average_price: String,
    pub charts: Vec<Distribution>,
}

pub struct Dashboard {
    records: RecordSet,
    filters: FilterState,
    filtered: RecordSet,
    charts: Vec<Field>,
    source: DataSource,
}

impl Dashboard {
    /// Build a dashboard over `records` with the configured charts and startup filters
    pub fn new(records: RecordSet, source: DataSource, config: &Config) -> Self {
        let filters = config.filters.clone();
        let filtered = filters.apply(&records);

        Self {
            records,
            filters,
            filtered,
            charts: config.dashboard.charts.clone(),
            source,
        }
    }

    pub fn from_parsed(parsed: Parsed, config: &Config) -> Self {
        let source = DataSource::Loaded {
            warnings: parsed.warnings.len(),
            rejected: parsed.rejected.len(),
            ignored_columns: parsed.ignored_columns,
        };
        Self::new(parsed.records, source, config)
    }

    /// Build from a load outcome, substituting the configured fallback on failure
    pub fn from_load_result(result: Result<Parsed, BikeDashError>, config: &Config) -> Self {
        match result {
            Ok(parsed) => Self::from_parsed(parsed, config),
            Err(reason) => {
                let data = config.data.fallback;
                log::error!("Failed to load listings ({}), using {:?} fallback", reason, data);
                let source = DataSource::Fallback { reason, data };
                Self::new(fallback_records(data), source, config)
            }
        }
    }

    /// All loaded listings, unfiltered
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Listings that pass the current filters
    pub fn filtered(&self) -> &RecordSet {
        &self.filtered
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn charts(&self) -> &[Field] {
        &self.charts
    }

    pub fn set_charts(&mut self, charts: Vec<Field>) {
        self.charts = charts;
    }

    pub fn set_filter(&mut self, field: Field, selection: Selection) {
        self.filters.set(field, selection);
        self.refresh();
    }

    pub fn clear_filter(&mut self, field: Field) {
        self.filters.clear(field);
        self.refresh();
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
        self.refresh();
    }

    pub fn distribution(&self, field: Field) -> Distribution {
        Aggregator::new(&self.filtered).distribution(field)
    }

    pub fn metrics(&self) -> Metrics {
        Aggregator::new(&self.filtered).metrics()
    }

    /// Choices for a field's filter, drawn from all listings so that picking
    /// one filter never hides the options of another
    pub fn filter_options(&self, field: Field) -> Vec<String> {
        filter::options(&self.records, field)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let aggregator = Aggregator::new(&self.filtered);
        let metrics = aggregator.metrics();

        DashboardSnapshot {
            filters: self
                .filters
                .active()
                .map(|(field, value)| (field, value.to_string()))
                .collect(),
            average_price: metrics.average_price_display(),
            metrics,
            charts: self
                .charts
                .iter()
                .map(|field| aggregator.distribution(*field))
                .collect(),
        }
    }

    fn refresh(&mut self) {
        self.filtered = self.filters.apply(&self.records);
        log::debug!(
            "Filters changed: {} of {} listings match",
            self.filtered.len(),
            self.records.len()
        );
    }
}

#[cfg(test)]
#[path = "dashboard_state_tests.rs"]
mod dashboard_state_tests;
