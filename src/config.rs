//! Application-level configuration: where the team dataset lives on disk.

use std::{
    env,
    path::{Path, PathBuf},
};

use tracing::{info, warn};

/// Default location on disk where the server looks for the team dataset.
const DEFAULT_DATA_PATH: &str = "data/nfl_teams.json";
/// Environment variable that overrides [`DEFAULT_DATA_PATH`].
const DATA_PATH_ENV: &str = "NFL_LOGO_BACK_DATA_PATH";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    data_path: PathBuf,
}

impl AppConfig {
    /// Resolve the configuration, taking the environment override into
    /// account. A missing dataset surfaces per request, not at startup, so
    /// this only logs the situation.
    pub fn load() -> Self {
        let data_path = resolve_data_path();
        if data_path.is_file() {
            info!(path = %data_path.display(), "using team dataset");
        } else {
            warn!(
                path = %data_path.display(),
                "team dataset not found; requests will fail until it appears"
            );
        }
        Self { data_path }
    }

    /// Configuration pointing at an explicit dataset path, bypassing the
    /// environment lookup.
    pub fn with_data_path(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: path.into(),
        }
    }

    /// Location of the team dataset.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

/// Resolve the dataset path taking the environment override into account.
fn resolve_data_path() -> PathBuf {
    env::var_os(DATA_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}
