use crate::core::error::{Error, Result};
use crate::utils::get_data_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIG_FILE: &str = "config.json";

/// Persisted application settings.
///
/// The current sort and filter selection is deliberately not part of this;
/// every session starts from the default view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme_choice: crate::theme::ThemeChoice,
    /// Replacement dataset file; `None` uses the built-in list
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Fixed seed for the shuffle sort mode (reproducible demos and screenshots)
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

pub fn config_path() -> Option<PathBuf> {
    get_data_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Saves the app config to the default location.
pub async fn save_config(config: &AppConfig) -> Result<()> {
    let path = config_path()
        .ok_or_else(|| Error::Config("no data directory available".to_string()))?;
    save_config_to(config, &path).await
}

/// Saves the app config to disk using an atomic write pattern.
/// 1. Writes to a temporary file.
/// 2. Sets restrictive permissions (0o600).
/// 3. Atomically renames to the target path.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O to avoid blocking the event loop.
pub async fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    let temp_path = path.with_extension("json.tmp");

    #[cfg(unix)]
    {
        use tokio::fs::OpenOptions;
        use tokio::io::AsyncWriteExt;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .mode(0o600) // Set permissions BEFORE any data is written
            .open(&temp_path)
            .await?;

        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    #[cfg(not(unix))]
    {
        use tokio::io::AsyncWriteExt;

        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    tokio::fs::rename(&temp_path, path).await?;
    debug!("Saved configuration to {}", path.display());
    Ok(())
}

/// Loads the app config from the default location, or defaults if missing.
pub async fn load_config() -> AppConfig {
    match config_path() {
        Some(path) => load_config_from(&path).await,
        None => AppConfig::default(),
    }
}

/// Loads a config file. Missing or unreadable files yield defaults.
pub async fn load_config_from(path: &Path) -> AppConfig {
    let Ok(json) = tokio::fs::read_to_string(path).await else {
        return AppConfig::default();
    };

    match serde_json::from_str::<AppConfig>(&json) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring corrupt config at {}: {e}", path.display());
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeChoice;

    #[tokio::test]
    async fn test_roundtrip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = AppConfig {
            theme_choice: ThemeChoice::Gruvbox,
            data_file: Some(PathBuf::from("/srv/countries.json")),
            shuffle_seed: Some(42),
        };

        save_config_to(&config, &path).await.unwrap();
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(load_config_from(&path).await, config);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_saved_config_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        save_config_to(&AppConfig::default(), &path).await.unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.json")).await;
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from(&path).await, AppConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"shuffle_seed": 7}"#).unwrap();
        assert_eq!(config.shuffle_seed, Some(7));
        assert_eq!(config.theme_choice, ThemeChoice::default());
        assert!(config.data_file.is_none());
    }
}
