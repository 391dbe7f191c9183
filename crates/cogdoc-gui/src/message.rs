//! Message types for the viewer.

use std::path::PathBuf;
use std::sync::Arc;

use cogdoc_core::{ExampleAffordance, Toggle};
use cogdoc_model::Document;

use crate::error::GuiError;

/// Root message type.
#[derive(Debug, Clone)]
pub enum Message {
    Docs(DocsMessage),
    File(FileMessage),
    Settings(SettingsMessage),
    /// No operation (used for tasks that need a message but don't act).
    Noop,
}

/// Clicks on the documentation tree.
#[derive(Debug, Clone)]
pub enum DocsMessage {
    Toggle(Toggle),
}

#[derive(Debug, Clone)]
pub enum FileMessage {
    OpenClicked,
    /// Result of the file dialog. `None` when cancelled.
    Selected(Option<PathBuf>),
    /// Load result for the path it was started from.
    Loaded(PathBuf, Result<Arc<Document>, GuiError>),
    ReloadClicked,
}

#[derive(Debug, Clone)]
pub enum SettingsMessage {
    AffordanceChanged(ExampleAffordance),
}
