pub mod loader;

pub use loader::{FileLoader, LoadingState};
