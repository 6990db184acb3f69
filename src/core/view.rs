//! Derived view: the sorted, filtered list handed to the renderer

use crate::core::country::Country;
use crate::core::filter::filter;
use crate::core::modes::{FilterMode, SortMode};
use crate::core::sort::sort;
use rand::Rng;

/// Sorts, then filters.
///
/// Sorting first means a shuffled order survives filtering: the remaining
/// countries keep their shuffled relative positions.
pub fn derive_view<'a, R: Rng + ?Sized>(
    countries: &'a [Country],
    sort_mode: SortMode,
    filter_mode: &FilterMode,
    rng: &mut R,
) -> Vec<&'a Country> {
    let sorted = sort(countries, sort_mode, rng);
    filter(sorted, filter_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::modes::PopulationBracket;
    use crate::core::test_helpers::{names, sample_countries, scenario_countries};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_descending_all() {
        let countries = scenario_countries();
        let view = derive_view(
            &countries,
            SortMode::PopulationDescending,
            &FilterMode::All,
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(names(&view), vec!["China", "India", "Chad"]);
    }

    #[test]
    fn test_descending_billion_plus() {
        let countries = scenario_countries();
        let view = derive_view(
            &countries,
            SortMode::PopulationDescending,
            &FilterMode::Population(PopulationBracket::AtLeast1B),
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(names(&view), vec!["China", "India"]);
    }

    #[test]
    fn test_alphabetical_asia() {
        let countries = sample_countries();
        let view = derive_view(
            &countries,
            SortMode::Alphabetical,
            &FilterMode::Continent("asia".to_string()),
            &mut StdRng::seed_from_u64(1),
        );
        let got = names(&view);
        let mut expected = got.clone();
        expected.sort_by(|a, b| crate::core::collate::collate(a, b));
        assert_eq!(got, expected);
        assert!(view.iter().all(|c| c.continent == "Asia"));
    }

    #[test]
    fn test_shuffle_order_survives_filter() {
        let countries = sample_countries();
        let filter_mode = FilterMode::Continent("asia".to_string());

        let shuffled = sort(&countries, SortMode::Shuffled, &mut StdRng::seed_from_u64(9));
        let expected: Vec<&Country> = shuffled
            .into_iter()
            .filter(|c| c.continent == "Asia")
            .collect();

        let view = derive_view(
            &countries,
            SortMode::Shuffled,
            &filter_mode,
            &mut StdRng::seed_from_u64(9),
        );
        assert_eq!(view, expected);
    }

    #[test]
    fn test_identity_modes() {
        let countries = sample_countries();
        let view = derive_view(
            &countries,
            SortMode::Unrecognized,
            &FilterMode::Population(PopulationBracket::Unrecognized),
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(view, countries.iter().collect::<Vec<_>>());
    }
}
