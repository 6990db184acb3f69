//! Sort/filter selection and dataset handling
//!
//! Every selection change recomputes the derived view immediately; nothing
//! about the selection is persisted.

use crate::app::helpers::truncate_path_smart;
use crate::app::{DataSource, Message, State};
use crate::core::dataset::Dataset;
use crate::core::modes::{FilterOption, SortMode};
use iced::Task;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Handles a new sort mode from the sort picker
pub(crate) fn handle_sort_changed(state: &mut State, mode: SortMode) {
    debug!("Sort mode changed: {} -> {}", state.sort_mode, mode);
    state.sort_mode = mode;
    state.refresh_view();
}

/// Handles a new filter from the filter picker
pub(crate) fn handle_filter_changed(state: &mut State, option: FilterOption) {
    debug!("Filter changed: {} -> {}", state.filter_mode, option.mode);
    state.filter_mode = option.mode;
    state.refresh_view();
}

/// Draws a fresh permutation; a no-op unless the shuffle mode is active
pub(crate) fn handle_reshuffle(state: &mut State) {
    if state.sort_mode == SortMode::Shuffled {
        state.refresh_view();
    }
}

/// Starts loading a dataset file in the background
pub(crate) fn load_dataset(path: PathBuf) -> Task<Message> {
    let target = path.clone();
    Task::perform(
        async move {
            Dataset::load(&target)
                .await
                .map_err(|e| e.user_message())
        },
        move |result| Message::DatasetLoaded(path, result),
    )
}

/// Handles dataset load completion, keeping the current list on failure
pub(crate) fn handle_dataset_loaded(
    state: &mut State,
    path: PathBuf,
    result: Result<Dataset, String>,
) {
    match result {
        Ok(dataset) => {
            info!(
                "Switched to {} countries from {}",
                dataset.countries.len(),
                path.display()
            );
            state.countries = dataset.countries;
            state.status = Some(format!(
                "Loaded {}",
                truncate_path_smart(&path.to_string_lossy(), 48)
            ));
            state.data_source = DataSource::File(path);
            state.refresh_view();
        }
        Err(message) => {
            warn!("Dataset load from {} failed: {message}", path.display());
            state.status = Some(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::{create_test_state, visible_names};
    use crate::core::country::Country;
    use crate::core::modes::{FilterMode, PopulationBracket};

    #[test]
    fn test_initial_view_is_descending_unfiltered() {
        let state = create_test_state();
        assert_eq!(visible_names(&state), vec!["China", "India", "Chad"]);
    }

    #[test]
    fn test_sort_change_recomputes_view() {
        let mut state = create_test_state();
        handle_sort_changed(&mut state, SortMode::PopulationAscending);
        assert_eq!(visible_names(&state), vec!["Chad", "India", "China"]);
    }

    #[test]
    fn test_filter_change_recomputes_view() {
        let mut state = create_test_state();
        let option = state
            .filter_options
            .iter()
            .find(|o| o.mode == FilterMode::Population(PopulationBracket::AtLeast1B))
            .cloned()
            .unwrap();
        handle_filter_changed(&mut state, option.clone());
        assert_eq!(visible_names(&state), vec!["China", "India"]);
        assert_eq!(state.selected_filter_option(), Some(option));
    }

    #[test]
    fn test_continent_filter_keeps_sort() {
        let mut state = create_test_state();
        handle_sort_changed(&mut state, SortMode::PopulationAscending);
        let asia = state
            .filter_options
            .iter()
            .find(|o| o.mode == FilterMode::Continent("Asia".to_string()))
            .cloned()
            .unwrap();
        handle_filter_changed(&mut state, asia);
        assert_eq!(visible_names(&state), vec!["India", "China"]);
    }

    #[test]
    fn test_reshuffle_ignored_outside_shuffle_mode() {
        let mut state = create_test_state();
        let before = state.visible.clone();
        handle_reshuffle(&mut state);
        assert_eq!(state.visible, before);
    }

    #[test]
    fn test_reshuffle_keeps_all_countries() {
        let mut state = create_test_state();
        handle_sort_changed(&mut state, SortMode::Shuffled);
        handle_reshuffle(&mut state);
        let mut names = visible_names(&state);
        names.sort_unstable();
        assert_eq!(names, vec!["Chad", "China", "India"]);
        // The source list is never reordered
        assert_eq!(state.countries[0].name, "Chad");
    }

    #[test]
    fn test_dataset_loaded_replaces_countries() {
        let mut state = create_test_state();
        let dataset = Dataset {
            countries: vec![Country::new(9, "Peru", 33_000_000, "South America")],
        };
        let path = PathBuf::from("/data/peru.json");
        handle_dataset_loaded(&mut state, path.clone(), Ok(dataset));
        assert_eq!(visible_names(&state), vec!["Peru"]);
        assert_eq!(state.data_source, DataSource::File(path));
        assert!(state.status.as_deref().unwrap().contains("peru.json"));
    }

    #[test]
    fn test_dataset_failure_keeps_current_list() {
        let mut state = create_test_state();
        handle_dataset_loaded(
            &mut state,
            PathBuf::from("/missing.json"),
            Err("Could not open /missing.json".to_string()),
        );
        assert_eq!(state.countries.len(), 3);
        assert_eq!(state.data_source, DataSource::Embedded);
        assert_eq!(state.status.as_deref(), Some("Could not open /missing.json"));
    }
}
