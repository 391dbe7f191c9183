//! Opening and reloading documentation files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use iced::Task;

use cogdoc_model::Document;

use super::MessageHandler;
use crate::error::GuiError;
use crate::message::{FileMessage, Message};
use crate::state::AppState;

pub struct FileHandler;

impl MessageHandler<FileMessage> for FileHandler {
    fn handle(&self, state: &mut AppState, msg: FileMessage) -> Task<Message> {
        match msg {
            FileMessage::OpenClicked => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Open Documentation")
                        .add_filter("JSON", &["json"])
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                |path| Message::File(FileMessage::Selected(path)),
            ),

            FileMessage::Selected(None) => Task::none(),

            FileMessage::Selected(Some(path)) => load(state, path),

            FileMessage::ReloadClicked => match state.source.clone() {
                Some(path) => load(state, path),
                None => {
                    state.last_error = Some(GuiError::NoSource);
                    Task::none()
                }
            },

            FileMessage::Loaded(path, _) if !is_current(state, &path) => {
                tracing::debug!(path = %path.display(), "dropping superseded load");
                Task::none()
            }

            FileMessage::Loaded(_, Ok(document)) => {
                // Same content keeps the current reference so toggles survive a reload.
                let document = match state.session.document() {
                    Some(current) if **current == *document => Arc::clone(current),
                    _ => document,
                };
                state.session.observe(Some(document));
                state.last_error = None;
                if state.settings.source.last_file != state.source {
                    state.settings.source.last_file = state.source.clone();
                    state.save_settings();
                }
                Task::none()
            }

            FileMessage::Loaded(_, Err(error)) => {
                tracing::warn!(%error, "documentation unavailable");
                state.session.observe(None);
                state.last_error = Some(error);
                Task::none()
            }
        }
    }
}

/// Only the most recently requested file may update the page.
fn is_current(state: &AppState, path: &Path) -> bool {
    state.source.as_deref() == Some(path)
}

/// Start loading `path` in the background.
pub(crate) fn load(state: &mut AppState, path: PathBuf) -> Task<Message> {
    tracing::info!(path = %path.display(), "loading documentation");
    state.source = Some(path.clone());
    Task::perform(load_document_async(path.clone()), move |result| {
        Message::File(FileMessage::Loaded(path.clone(), result))
    })
}

async fn load_document_async(path: PathBuf) -> Result<Arc<Document>, GuiError> {
    cogdoc_model::load_document(&path)
        .map(Arc::new)
        .map_err(GuiError::from)
}
