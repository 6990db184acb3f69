//! Helper utilities for the app layer
//!
//! Pure formatting functions that never touch application state.

pub mod formatting;

pub use formatting::{compact_population, format_population, truncate_path_smart};
