//! Utility functions for directory management
//!
//! Directories follow the XDG Base Directory specification:
//!
//! - Data: `~/.local/share/worldpop/` - `config.json`
//! - State: `~/.local/state/worldpop/` - `worldpop.log`
//!
//! # Example
//!
//! ```no_run
//! use worldpop::utils::{ensure_dirs, get_data_dir};
//!
//! ensure_dirs().expect("Failed to create directories");
//!
//! if let Some(data_path) = get_data_dir() {
//!     // Load configuration from data_path
//! }
//! ```

use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "worldpop", "worldpop")
}

pub fn get_data_dir() -> Option<PathBuf> {
    project_dirs().map(|pd| pd.data_dir().to_path_buf())
}

/// State directory for logs. Falls back to the data directory on platforms
/// without an XDG state dir.
pub fn get_state_dir() -> Option<PathBuf> {
    project_dirs().and_then(|pd| {
        pd.state_dir()
            .map(std::path::Path::to_path_buf)
            .or_else(|| Some(pd.data_dir().to_path_buf()))
    })
}

pub fn ensure_dirs() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700); // User read/write/execute only
        builder.recursive(true);

        if let Some(dir) = get_data_dir() {
            builder.create(dir)?;
        }
        if let Some(dir) = get_state_dir() {
            builder.create(dir)?;
        }
    }

    #[cfg(not(unix))]
    {
        if let Some(dir) = get_data_dir() {
            std::fs::create_dir_all(dir)?;
        }
        if let Some(dir) = get_state_dir() {
            std::fs::create_dir_all(dir)?;
        }
    }

    Ok(())
}
