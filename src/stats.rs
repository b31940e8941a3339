//! Stats module for aggregating listings into chart-ready summaries
//!
//! This module computes value distributions and headline metrics over a
//! (usually filtered) record set. Every computation is a pure read of the
//! records it is given.

mod aggregator;
pub mod currency;
mod types;

// Re-export public types
pub use aggregator::Aggregator;
pub use types::{Bucket, Distribution, Metrics};
