//! worldpop - World's Largest Countries by Population
//!
//! A desktop viewer for a static list of countries that can be sorted by
//! population, by name or randomly, and filtered by continent or by
//! population bracket.
//!
//! # Architecture
//!
//! - `core`: Country records, selectors, sorting, filtering, dataset loading
//! - `app`: GUI application state and event handling
//! - `config`: Settings persistence
//! - `theme`: Color palettes
//!
//! # Usage
//!
//! ```bash
//! # Run the GUI application
//! worldpop
//! worldpop --data my-countries.json
//!
//! # CLI commands
//! worldpop list                          # Most populous first
//! worldpop list --sort alpha --filter asia
//! worldpop list --sort shuffle --seed 7  # Reproducible shuffle
//! worldpop list --filter 'p-<100M'
//! worldpop continents                    # Continents in the dataset
//! ```

mod app;
mod config;
mod core;
mod theme;
mod utils;

use crate::core::country::Country;
use crate::core::dataset::Dataset;
use crate::core::modes::{FilterMode, SortMode};
use clap::{Parser, Subcommand};
use iced::Size;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "worldpop")]
#[command(about = "World's largest countries by population", long_about = None)]
struct Cli {
    /// Country dataset JSON file (overrides the configured one)
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sorted and filtered country list
    List {
        /// Sort selector: '>' (population desc), '<' (population asc), 'alpha', 'shuffle'
        #[arg(short, long, default_value = ">")]
        sort: String,
        /// Filter selector: 'all', a continent name, or a bracket ('p-<100M', 'p-100M-200M',
        /// 'p-200M-500M', 'p-500M-1B', 'p-1B+')
        #[arg(short, long, default_value = "all")]
        filter: String,
        /// Seed for the shuffle sort (defaults to the configured seed, then random)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the continents present in the dataset
    Continents,
}

fn main() -> ExitCode {
    let _ = crate::utils::ensure_dirs();
    let cli = Cli::parse();

    // Runtime for config/dataset loading; the GUI brings its own executor
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(command) = cli.command {
        init_cli_logging();
        match runtime.block_on(handle_cli(command, cli.data)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        init_gui_logging();
        let config = runtime.block_on(config::load_config());
        drop(runtime);
        launch_gui(config, cli.data)
    }
}

fn init_cli_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn init_gui_logging() {
    // Set up logging to file
    if let Some(mut log_path) = crate::utils::get_state_dir() {
        log_path.push("worldpop.log");
        if let Ok(file) = std::fs::File::create(log_path) {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
            return;
        }
    }
    tracing_subscriber::fmt::init();
}

async fn handle_cli(
    command: Commands,
    data: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config().await;
    let data_file = data.or(config.data_file.clone());
    let dataset = Dataset::load_or_embedded(data_file.as_deref()).await?;

    match command {
        Commands::List { sort, filter, seed } => {
            let sort_mode = SortMode::from_selector(&sort);
            let filter_mode = FilterMode::from_selector(&filter);
            if sort_mode == SortMode::Unrecognized {
                tracing::warn!("Unknown sort selector '{sort}', keeping dataset order");
            }

            let mut rng = match seed.or(config.shuffle_seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            let view = crate::core::view::derive_view(
                &dataset.countries,
                sort_mode,
                &filter_mode,
                &mut rng,
            );

            print!("{}", render_table(&view));
            println!(
                "\n{} of {} countries ({sort_mode}, {filter_mode})",
                view.len(),
                dataset.countries.len()
            );
        }
        Commands::Continents => {
            for continent in dataset.continents() {
                println!("{continent}");
            }
        }
    }
    Ok(())
}

/// Aligned plain-text table of the derived view.
fn render_table(countries: &[&Country]) -> String {
    let name_width = countries
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Country".len());
    let continent_width = countries
        .iter()
        .map(|c| c.continent.chars().count())
        .max()
        .unwrap_or(0)
        .max("Continent".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<name_width$}  {:<continent_width$}  {:>15}",
        "#", "Country", "Continent", "Population"
    );
    for (rank, country) in countries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<name_width$}  {:<continent_width$}  {:>15}",
            rank + 1,
            country.name,
            country.continent,
            app::helpers::format_population(country.population)
        );
    }
    out
}

fn launch_gui(config: config::AppConfig, data: Option<PathBuf>) -> ExitCode {
    let result = iced::application(
        move || app::State::new(config.clone(), data.clone()),
        app::State::update,
        app::State::view,
    )
    .window(iced::window::Settings {
        size: Size::new(720.0, 820.0),
        ..Default::default()
    })
    .title("World's Largest Countries by Population")
    .theme(|state: &app::State| {
        if state.theme.is_light() {
            iced::Theme::Light
        } else {
            iced::Theme::Dark
        }
    })
    .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("GUI exited with error: {e}");
            ExitCode::FAILURE
        }
    }
}
