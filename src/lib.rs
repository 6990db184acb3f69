//! worldpop - the world's most populous countries, sortable and filterable
//!
//! A small iced desktop viewer over a static country list.
//!
//! # Architecture
//!
//! - [`core`] - Country records, sort/filter selectors and the derived view
//! - [`config`] - Settings persistence (theme, dataset override, shuffle seed)
//! - [`theme`] - Color palettes
//! - [`utils`] - XDG directory helpers
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use worldpop::core::dataset::Dataset;
//! use worldpop::core::modes::{FilterMode, SortMode};
//! use worldpop::core::view::derive_view;
//!
//! let dataset = Dataset::embedded().unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let view = derive_view(
//!     &dataset.countries,
//!     SortMode::from_selector(">"),
//!     &FilterMode::from_selector("p-1B+"),
//!     &mut rng,
//! );
//! assert_eq!(view[0].name, "China");
//! ```

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod theme;
pub mod utils;

// Re-export commonly used types
pub use crate::core::country::Country;
pub use crate::core::error::{Error, Result};
pub use crate::core::modes::{FilterMode, PopulationBracket, SortMode};
