//! bikedash library - Used bike listing dashboard
//!
//! Parses listing text, narrows it with exact-match filters and summarizes
//! the result as metric cards and value distributions.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod input;
pub mod listing;
pub mod report;
pub mod stats;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use dashboard::{Dashboard, DashboardSnapshot, DataSource};
pub use error::{BikeDashError, RowError};
pub use listing::{Field, Listing, RecordSet, RowPolicy};
