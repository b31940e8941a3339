//! Type definitions for listing statistics

use std::fmt;

use serde::Serialize;

use super::currency::format_inr;
use crate::listing::Field;

/// Label shown for listings that have no value for the grouped field
///
/// Parsed values never contain a comma, so this cannot collide with one.
pub const MISSING_LABEL: &str = "(missing, no value)";

/// One distinct value and how many listings carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// The value, or `None` for listings without one
    pub name: Option<String>,
    pub count: usize,
}

impl Bucket {
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(MISSING_LABEL)
    }
}

/// Frequency of each distinct value of a field
///
/// Buckets are kept in order of first occurrence in the source records.
/// Listings without a value are counted in a bucket with no name, so the
/// counts always add up to the number of records aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    field: Field,
    buckets: Vec<Bucket>,
}

impl Distribution {
    pub(crate) fn new(field: Field, buckets: Vec<Bucket>) -> Self {
        Self { field, buckets }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Number of distinct values (including the missing bucket)
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Count for a value, 0 when it does not occur
    pub fn count(&self, value: &str) -> usize {
        self.buckets
            .iter()
            .find(|b| b.name.as_deref() == Some(value))
            .map_or(0, |b| b.count)
    }

    /// Count of listings without a value for the field
    pub fn missing(&self) -> usize {
        self.buckets
            .iter()
            .find(|b| b.name.is_none())
            .map_or(0, |b| b.count)
    }

    /// Buckets ranked by count, largest first; ties keep first-occurrence order
    pub fn sorted_by_count(&self) -> Vec<&Bucket> {
        let mut ranked: Vec<&Bucket> = self.buckets.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

/// Headline numbers for a record set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    /// Mean of the numeric prices, `None` when no listing has one
    pub average_price: Option<f64>,
    /// Listings that contributed to the average
    pub priced_bikes: usize,
    /// Distinct brand values (listings without a brand are not counted)
    pub total_brands: usize,
    pub total_bikes: usize,
}

impl Metrics {
    /// Average price as Indian Rupees, or `N/A` when there is none
    pub fn average_price_display(&self) -> String {
        self.average_price
            .map_or_else(|| "N/A".to_string(), format_inr)
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average Price: {} | Total Brands: {} | Total Bikes: {}",
            self.average_price_display(),
            self.total_brands,
            self.total_bikes
        )
    }
}
