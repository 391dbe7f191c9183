//! Application state.

use std::path::PathBuf;

use cogdoc_core::{DocsSession, RenderOptions};

use crate::error::GuiError;
use crate::settings::Settings;

/// Everything the viewer knows between messages.
#[derive(Debug)]
pub struct AppState {
    /// Document, visibility state and render options of the open page.
    pub session: DocsSession,
    /// File the current document was loaded from.
    pub source: Option<PathBuf>,
    pub settings: Settings,
    /// Where settings are persisted. `None` disables saving.
    pub settings_path: Option<PathBuf>,
    pub last_error: Option<GuiError>,
}

impl AppState {
    pub fn new(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        let options = RenderOptions::new()
            .with_example_affordance(settings.display.example_affordance);
        Self {
            session: DocsSession::new(options),
            source: None,
            settings,
            settings_path,
            last_error: None,
        }
    }

    /// Persist settings if a settings path is configured.
    pub fn save_settings(&mut self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(error) = self.settings.save_to(path) {
            tracing::warn!(%error, "settings not saved");
            self.last_error = Some(error);
        }
    }
}
