//! Filter module for narrowing a record set by exact field values

mod filter_state;
mod selection;

// Re-export public types
pub use filter_state::{FilterState, options, parse_expression};
pub use selection::{Selection, WILDCARD};
