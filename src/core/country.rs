//! Country records as loaded from the dataset

use serde::{Deserialize, Serialize};

/// A single country entry.
///
/// Records are read-only once loaded; sorting and filtering only ever hand
/// out references to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Stable key used by the renderer
    pub id: u32,
    pub name: String,
    pub population: u64,
    pub continent: String,
}

impl Country {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        population: u64,
        continent: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            population,
            continent: continent.into(),
        }
    }

    /// Continent comparison used by the continent filter.
    ///
    /// `continent_lowercase` must already be folded. Only case is folded;
    /// surrounding whitespace is significant.
    pub fn is_on_continent(&self, continent_lowercase: &str) -> bool {
        self.continent.to_lowercase() == continent_lowercase
    }
}
