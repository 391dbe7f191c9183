//! Persistent viewer settings.
//!
//! Stored as TOML in the platform configuration directory. A missing or
//! unreadable file yields the defaults.

use std::path::{Path, PathBuf};

use cogdoc_core::ExampleAffordance;
use serde::{Deserialize, Serialize};

use crate::error::GuiError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub source: SourceSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// How commands without an example show their "Open example" control.
    pub example_affordance: ExampleAffordance,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Documentation file opened most recently.
    pub last_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the default location.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| match toml::from_str(&content) {
                Ok(settings) => Some(settings),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "ignoring unreadable settings");
                    None
                }
            })
            .unwrap_or_default()
    }

    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GuiError::SettingsSave {
                reason: format!("create config directory: {e}"),
            })?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| GuiError::SettingsSave {
            reason: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| GuiError::SettingsSave {
            reason: e.to_string(),
        })
    }

    /// Default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "cogdocs", "cogdocs")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}
