//! Settings persistence
//!
//! Settings live in a single TOML file, by default
//! `<config_dir>/relics/settings.toml`. A missing or broken file is never
//! fatal to the plugin: [`load_or_default`] falls back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use relics_types::RelicsSettings;

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<RelicsSettings, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings, logging and falling back to defaults on any failure.
pub fn load_or_default(path: &Path) -> RelicsSettings {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "No settings file, using defaults");
        return RelicsSettings::default();
    }
    match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load settings, using defaults");
            RelicsSettings::default()
        }
    }
}

/// Write settings as pretty TOML, creating the parent directory if needed.
pub fn save_settings(path: &Path, settings: &RelicsSettings) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(settings).map_err(|source| ConfigError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, contents).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Default settings file location
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("relics").join("settings.toml"))
}

/// Settings from an explicit file, or from the default location.
///
/// An explicit path must load. The default location falls back to defaults
/// through [`load_or_default`], as does a platform with no config directory.
pub fn resolve_settings(explicit: Option<&Path>) -> Result<RelicsSettings, ConfigError> {
    match explicit {
        Some(path) => load_settings(path),
        None => Ok(default_settings_path()
            .map(|path| load_or_default(&path))
            .unwrap_or_default()),
    }
}

/// Errors that can occur while reading or writing settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        source: toml::ser::Error,
    },
}
