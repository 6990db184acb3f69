//! Country dataset loading
//!
//! The default dataset is compiled into the binary from
//! `assets/countries.json`. A replacement file with the same shape can be
//! supplied at runtime:
//!
//! ```json
//! { "countries": [ { "id": 1, "name": "China", "population": 1439323776, "continent": "Asia" } ] }
//! ```
//!
//! Records are trusted as-is; the only failures are I/O and JSON syntax/shape.

use crate::core::country::Country;
use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

const EMBEDDED_DATASET: &str = include_str!("../../assets/countries.json");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub countries: Vec<Country>,
}

impl Dataset {
    /// The built-in list of the world's most populous countries.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        debug!("Parsed dataset with {} countries", dataset.countries.len());
        Ok(dataset)
    }

    /// Reads a dataset file.
    ///
    /// # Async
    /// Uses `tokio::fs` so the GUI event loop is never blocked.
    pub async fn load(path: &Path) -> Result<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::Dataset {
                path: path.to_path_buf(),
                source,
            })?;
        let dataset = Self::from_json(&json)?;
        info!(
            "Loaded {} countries from {}",
            dataset.countries.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Loads `path` when given, otherwise the embedded dataset.
    pub async fn load_or_embedded(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path).await,
            None => Self::embedded(),
        }
    }

    /// Distinct continent names in first-seen casing, sorted case-insensitively.
    pub fn continents(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut continents: Vec<String> = self
            .countries
            .iter()
            .filter(|c| seen.insert(c.continent.to_lowercase()))
            .map(|c| c.continent.clone())
            .collect();
        continents.sort_by_key(|c| c.to_lowercase());
        continents
    }
}
