//! Ordering of the country list

use crate::core::collate::collate;
use crate::core::country::Country;
use crate::core::modes::SortMode;
use rand::Rng;
use rand::seq::SliceRandom;

/// Returns the countries ordered according to `mode`.
///
/// The input slice is never reordered; the result is a fresh vector of
/// references. `rng` is only consumed by [`SortMode::Shuffled`].
pub fn sort<'a, R: Rng + ?Sized>(
    countries: &'a [Country],
    mode: SortMode,
    rng: &mut R,
) -> Vec<&'a Country> {
    let mut ordered: Vec<&Country> = countries.iter().collect();

    match mode {
        SortMode::PopulationDescending => {
            ordered.sort_by(|a, b| b.population.cmp(&a.population));
        }
        SortMode::PopulationAscending => {
            ordered.sort_by(|a, b| a.population.cmp(&b.population));
        }
        SortMode::Alphabetical => {
            ordered.sort_by(|a, b| collate(&a.name, &b.name));
        }
        // Fisher-Yates: every permutation is equally likely
        SortMode::Shuffled => ordered.shuffle(rng),
        SortMode::Unrecognized => {}
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_helpers::{names, sample_countries, scenario_countries};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_descending_population() {
        let countries = scenario_countries();
        let sorted = sort(&countries, SortMode::PopulationDescending, &mut rng());
        assert_eq!(names(&sorted), vec!["China", "India", "Chad"]);
    }

    #[test]
    fn test_ascending_population() {
        let countries = scenario_countries();
        let sorted = sort(&countries, SortMode::PopulationAscending, &mut rng());
        assert_eq!(names(&sorted), vec!["Chad", "India", "China"]);
    }

    #[test]
    fn test_ascending_is_reverse_of_descending() {
        let countries = sample_countries();
        let asc = sort(&countries, SortMode::PopulationAscending, &mut rng());
        let mut desc = sort(&countries, SortMode::PopulationDescending, &mut rng());
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_alphabetical() {
        let countries = sample_countries();
        let sorted = sort(&countries, SortMode::Alphabetical, &mut rng());
        let got = names(&sorted);
        assert_eq!(got.first(), Some(&"Bangladesh"));
        assert_eq!(got.last(), Some(&"United States"));
        assert!(got.windows(2).all(|w| collate(w[0], w[1]).is_le()));
    }

    #[test]
    fn test_alphabetical_is_idempotent() {
        let countries = sample_countries();
        let once: Vec<Country> = sort(&countries, SortMode::Alphabetical, &mut rng())
            .into_iter()
            .cloned()
            .collect();
        let twice = sort(&once, SortMode::Alphabetical, &mut rng());
        assert_eq!(names(&twice), once.iter().map(|c| c.name.as_str()).collect::<Vec<_>>());
    }

    #[test]
    fn test_unrecognized_is_identity() {
        let countries = sample_countries();
        let sorted = sort(&countries, SortMode::Unrecognized, &mut rng());
        let original: Vec<&Country> = countries.iter().collect();
        assert_eq!(sorted, original);
    }

    #[test]
    fn test_sort_leaves_input_untouched() {
        let countries = sample_countries();
        let snapshot = countries.clone();
        for mode in [
            SortMode::PopulationDescending,
            SortMode::PopulationAscending,
            SortMode::Alphabetical,
            SortMode::Shuffled,
        ] {
            let _ = sort(&countries, mode, &mut rng());
            assert_eq!(countries, snapshot);
        }
    }

    #[test]
    fn test_shuffle_same_seed_same_order() {
        let countries = sample_countries();
        let a = sort(&countries, SortMode::Shuffled, &mut StdRng::seed_from_u64(42));
        let b = sort(&countries, SortMode::Shuffled, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let countries = sample_countries();
        let shuffled = sort(&countries, SortMode::Shuffled, &mut rng());
        assert_eq!(shuffled.len(), countries.len());
        let mut ids: Vec<u32> = shuffled.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        let mut expected: Vec<u32> = countries.iter().map(|c| c.id).collect();
        expected.sort_unstable();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_shuffle_has_no_positional_bias() {
        let countries = scenario_countries();
        let n = countries.len();
        let trials = 30_000;
        let mut counts = vec![vec![0u32; n]; n];
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..trials {
            let shuffled = sort(&countries, SortMode::Shuffled, &mut rng);
            for (position, country) in shuffled.iter().enumerate() {
                let original = countries.iter().position(|c| c.id == country.id).unwrap();
                counts[original][position] += 1;
            }
        }

        // Expected 10_000 per cell; allow a generous 5% band
        let expected = f64::from(trials) / n as f64;
        for row in &counts {
            for &count in row {
                let deviation = (f64::from(count) - expected).abs() / expected;
                assert!(deviation < 0.05, "biased cell: {count} vs {expected}");
            }
        }
    }

    #[test]
    fn test_empty_list() {
        let countries: Vec<Country> = Vec::new();
        for mode in [SortMode::Alphabetical, SortMode::Shuffled, SortMode::Unrecognized] {
            assert!(sort(&countries, mode, &mut rng()).is_empty());
        }
    }
}
