//! Subsetting of the country list by continent or population bracket

use crate::core::country::Country;
use crate::core::modes::FilterMode;

/// Keeps the countries matching `mode`, preserving their relative order.
///
/// An empty result is a normal outcome, not an error.
pub fn filter<'a, I>(countries: I, mode: &FilterMode) -> Vec<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    match mode {
        FilterMode::All => countries.into_iter().collect(),
        FilterMode::Continent(continent) => {
            let wanted = continent.to_lowercase();
            countries
                .into_iter()
                .filter(|c| c.is_on_continent(&wanted))
                .collect()
        }
        FilterMode::Population(bracket) => countries
            .into_iter()
            .filter(|c| bracket.contains(c.population))
            .collect(),
    }
}
