//! Core country list functionality
//!
//! Everything in here is pure and synchronous apart from dataset file loading:
//!
//! - [`country`]: The country record
//! - [`modes`]: Sort/filter selectors and their decoding from selector text
//! - [`sort`]: Ordering by population, name, or random shuffle
//! - [`filter`]: Subsetting by continent or population bracket
//! - [`view`]: Sort-then-filter composition handed to the renderer
//! - [`collate`]: Natural-language name ordering
//! - [`dataset`]: Embedded and file-based country data
//! - [`error`]: Error types for the file boundaries

pub mod collate;
pub mod country;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod modes;
pub mod sort;
pub mod view;

#[cfg(test)]
pub mod test_helpers;
