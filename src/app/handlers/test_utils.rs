//! Shared test utilities for handler modules

use crate::app::State;
use crate::config::AppConfig;
use crate::core::country::Country;
use crate::core::dataset::Dataset;

/// State over the three-country example list with a fixed shuffle seed.
pub fn create_test_state() -> State {
    let config = AppConfig {
        shuffle_seed: Some(11),
        ..AppConfig::default()
    };
    let dataset = Dataset {
        countries: vec![
            Country::new(1, "Chad", 17_000_000, "Africa"),
            Country::new(2, "China", 1_400_000_000, "Asia"),
            Country::new(3, "India", 1_380_000_000, "Asia"),
        ],
    };
    State::with_dataset(config, dataset)
}

pub fn visible_names(state: &State) -> Vec<&str> {
    state.visible.iter().map(|c| c.name.as_str()).collect()
}
