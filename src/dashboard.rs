//! Dashboard module: the single owner of listings and filter state
//!
//! All dashboard state lives in one [`Dashboard`] value that callers hold and
//! pass around by reference. Changing a filter immediately recomputes the
//! filtered view that every distribution and metric is computed from.

mod dashboard_state;
pub mod fallback;

pub use dashboard_state::{Dashboard, DashboardSnapshot, DataSource};
