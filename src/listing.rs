//! Listing module for the bike listing schema and its text parser
//!
//! A listing is one row of the source data. Values are stored as the raw
//! trimmed strings from the source so that filtering and grouping compare
//! exactly what the data says; numeric fields are interpreted on demand.

mod field;
pub mod parser;
mod record;

// Re-export public types
pub use field::Field;
pub use parser::{Parsed, RowPolicy};
pub use record::{Listing, RecordSet};
