use std::path::{Path, PathBuf};

use thiserror::Error;

use super::paths::{ensure_dir, get_settings_path};
use crate::core::Service;
use crate::kernel::services::ports::settings::Settings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Writes default settings to `path` unless the file already exists.
pub fn ensure_settings_file_at(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    ensure_settings_file_at(&path)?;
    Ok(path)
}

pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| SettingsError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Settings the session was started with.
pub struct SettingsService {
    settings: Settings,
    path: Option<PathBuf>,
}

impl SettingsService {
    pub fn new(settings: Settings, path: Option<PathBuf>) -> Self {
        Self { settings, path }
    }

    /// Loads `path` (or the default location, created on first run). Falls
    /// back to defaults when the file is missing or malformed.
    pub fn load(path: Option<PathBuf>) -> Self {
        let path = match path {
            Some(path) => Some(path),
            None => match ensure_settings_file() {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::warn!(error = %e, "cannot create settings file, using defaults");
                    None
                }
            },
        };

        let settings = match path.as_deref().map(load_settings) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "using default settings");
                Settings::default()
            }
            None => Settings::default(),
        };

        Self::new(settings, path)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Service for SettingsService {
    fn name(&self) -> &'static str {
        "SettingsService"
    }
}
