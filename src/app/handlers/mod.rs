//! Message handlers organized by domain
//!
//! - [`selection`]: sort/filter changes, reshuffling and dataset loading
//! - [`settings`]: theme selection and config persistence

pub mod selection;
pub mod settings;

#[cfg(test)]
pub mod test_utils;

pub(crate) use selection::*;
pub(crate) use settings::*;
