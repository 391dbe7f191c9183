//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one message family and
//! `App::update` dispatches to it:
//!
//! ```ignore
//! match message {
//!     Message::Docs(msg) => DocsHandler.handle(&mut self.state, msg),
//!     Message::File(msg) => FileHandler.handle(&mut self.state, msg),
//!     // ...
//! }
//! ```

mod docs;
mod file;
mod settings;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use docs::DocsHandler;
pub use file::FileHandler;
pub use settings::SettingsHandler;

/// Handles one message type against the application state.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
