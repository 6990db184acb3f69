//! Shared test fixtures for core module tests
//!
//! This module is only compiled in test mode.

use crate::core::country::Country;
use proptest::prelude::*;

/// The three-country list used in the worked examples.
pub fn scenario_countries() -> Vec<Country> {
    vec![
        Country::new(1, "Chad", 17_000_000, "Africa"),
        Country::new(2, "China", 1_400_000_000, "Asia"),
        Country::new(3, "India", 1_380_000_000, "Asia"),
    ]
}

/// A mixed list covering every continent and bracket, all populations distinct.
pub fn sample_countries() -> Vec<Country> {
    vec![
        Country::new(10, "Nigeria", 206_000_000, "Africa"),
        Country::new(11, "China", 1_400_000_000, "Asia"),
        Country::new(12, "United States", 331_000_000, "North America"),
        Country::new(13, "Germany", 83_000_000, "Europe"),
        Country::new(14, "India", 1_380_000_000, "Asia"),
        Country::new(15, "Brazil", 212_000_000, "South America"),
        Country::new(16, "Bangladesh", 164_000_000, "Asia"),
        Country::new(17, "Mexico", 128_000_000, "North America"),
        Country::new(18, "Japan", 126_000_000, "Asia"),
        Country::new(19, "Ethiopia", 114_000_000, "Africa"),
        Country::new(20, "Russia", 145_000_000, "Europe"),
        Country::new(21, "Colombia", 50_000_000, "South America"),
    ]
}

pub fn names<'a>(countries: &[&'a Country]) -> Vec<&'a str> {
    countries.iter().map(|c| c.name.as_str()).collect()
}

/// Up to 40 countries with unique ids and arbitrary populations.
pub fn arb_countries() -> impl Strategy<Value = Vec<Country>> {
    prop::collection::vec(
        (
            "[A-Z][a-z]{2,10}",
            0u64..2_000_000_000,
            prop_oneof![
                Just("Asia"),
                Just("Africa"),
                Just("Europe"),
                Just("North America"),
                Just("South America"),
            ],
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .zip(0u32..)
            .map(|((name, population, continent), id)| {
                Country::new(id, name, population, continent)
            })
            .collect()
    })
}
