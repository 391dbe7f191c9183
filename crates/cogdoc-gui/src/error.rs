//! GUI-specific error types.

use thiserror::Error;

/// Errors shown in the viewer's status line.
///
/// Cloneable so they can travel inside messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    /// The documentation file could not be read or parsed.
    #[error("Failed to load documentation: {reason}")]
    DocumentLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// Reload was requested before any file was opened.
    #[error("No documentation file is open")]
    NoSource,

    /// Settings could not be written.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// A short hint on how to resolve the error.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::DocumentLoad { .. } => {
                "Check that the file is a JSON array of groups with `name` and `commands`."
            }
            Self::NoSource => "Use Open to pick a documentation file first.",
            Self::SettingsSave { .. } => "Check permissions on the configuration directory.",
        }
    }
}

impl From<cogdoc_model::ModelError> for GuiError {
    fn from(error: cogdoc_model::ModelError) -> Self {
        Self::DocumentLoad {
            reason: error.to_string(),
        }
    }
}
