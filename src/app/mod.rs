pub mod handlers;
pub mod helpers;
pub mod ui_components;
pub mod view;

use crate::config::AppConfig;
use crate::core::country::Country;
use crate::core::dataset::Dataset;
use crate::core::modes::{FilterMode, FilterOption, SortMode};
use crate::core::view::derive_view;
use iced::{Element, Task};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::{error, info};

/// Where the displayed countries came from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    #[default]
    Embedded,
    File(PathBuf),
}

pub struct State {
    pub countries: Vec<Country>,
    /// Derived view, recomputed whenever the selection or the data changes
    pub visible: Vec<Country>,
    pub sort_mode: SortMode,
    pub filter_mode: FilterMode,
    pub filter_options: Vec<FilterOption>,
    pub data_source: DataSource,
    pub status: Option<String>,
    pub config: AppConfig,
    pub theme: crate::theme::AppTheme,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub enum Message {
    SortChanged(SortMode),
    FilterChanged(FilterOption),
    Reshuffle,
    DatasetLoaded(PathBuf, Result<Dataset, String>),
    ThemeChanged(crate::theme::ThemeChoice),
    ConfigSaved(Result<(), String>),
}

impl State {
    /// Builds the initial state from the embedded dataset and starts loading
    /// `data_file` (CLI override, then config) in the background.
    pub fn new(config: AppConfig, data_file: Option<PathBuf>) -> (Self, Task<Message>) {
        let (dataset, status) = match Dataset::embedded() {
            Ok(dataset) => (dataset, None),
            Err(e) => {
                error!("Built-in dataset is unreadable: {e}");
                (Dataset::default(), Some(e.user_message()))
            }
        };

        let mut state = Self::with_dataset(config, dataset);
        state.status = status;

        let task = match data_file.or_else(|| state.config.data_file.clone()) {
            Some(path) => handlers::load_dataset(path),
            None => Task::none(),
        };

        (state, task)
    }

    /// State with a dataset already in hand; no background work.
    pub fn with_dataset(config: AppConfig, dataset: Dataset) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let theme = config.theme_choice.to_theme();

        let mut state = Self {
            countries: dataset.countries,
            visible: Vec::new(),
            sort_mode: SortMode::default(),
            filter_mode: FilterMode::default(),
            filter_options: FilterOption::all(),
            data_source: DataSource::Embedded,
            status: None,
            config,
            theme,
            rng,
        };
        state.refresh_view();
        info!("Showing {} countries", state.countries.len());
        state
    }

    /// Recomputes the derived view from the current selection.
    pub(crate) fn refresh_view(&mut self) {
        self.visible = derive_view(
            &self.countries,
            self.sort_mode,
            &self.filter_mode,
            &mut self.rng,
        )
        .into_iter()
        .cloned()
        .collect();
    }

    /// Picker entry matching the current filter, if it is one of the offered options
    pub fn selected_filter_option(&self) -> Option<FilterOption> {
        self.filter_options
            .iter()
            .find(|option| option.mode == self.filter_mode)
            .cloned()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SortChanged(mode) => handlers::handle_sort_changed(self, mode),
            Message::FilterChanged(option) => handlers::handle_filter_changed(self, option),
            Message::Reshuffle => handlers::handle_reshuffle(self),
            Message::DatasetLoaded(path, result) => {
                handlers::handle_dataset_loaded(self, path, result);
            }
            Message::ThemeChanged(choice) => return handlers::handle_theme_changed(self, choice),
            Message::ConfigSaved(result) => handlers::handle_config_saved(self, result),
        }
        Task::none()
    }
}
