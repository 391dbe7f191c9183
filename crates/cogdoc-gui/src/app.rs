//! Main application module.
//!
//! - **State**: [`AppState`]
//! - **Message**: [`Message`]
//! - **Update**: [`App::update`] dispatches to the handlers
//! - **View**: [`App::view`] renders the documentation tree

use std::path::PathBuf;

use iced::widget::{column, container, scrollable};
use iced::{Element, Length, Task};

use crate::handler::{DocsHandler, FileHandler, MessageHandler, SettingsHandler};
use crate::message::{FileMessage, Message};
use crate::settings::Settings;
use crate::state::AppState;
use crate::theme::{SPACING_LG, SPACING_SM};
use crate::view;

pub struct App {
    pub state: AppState,
}

impl App {
    /// Create the application, opening `initial` or else the last file used.
    pub fn new(initial: Option<PathBuf>) -> (Self, Task<Message>) {
        let settings = Settings::load();
        let path = initial.or_else(|| settings.source.last_file.clone());
        let state = AppState::new(settings, Some(Settings::config_path()));

        let task = match path {
            Some(path) => Task::done(Message::File(FileMessage::Selected(Some(path)))),
            None => Task::none(),
        };
        (Self { state }, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Docs(msg) => DocsHandler.handle(&mut self.state, msg),
            Message::File(msg) => FileHandler.handle(&mut self.state, msg),
            Message::Settings(msg) => SettingsHandler.handle(&mut self.state, msg),
            Message::Noop => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let page = view::documentation(self.state.session.render());

        column![
            view::toolbar(&self.state),
            view::status_line(&self.state),
            scrollable(container(page).padding(SPACING_LG).width(Length::Fill))
                .height(Length::Fill),
        ]
        .spacing(SPACING_SM)
        .into()
    }

    pub fn title(&self) -> String {
        match self
            .state
            .source
            .as_ref()
            .and_then(|path| path.file_name())
        {
            Some(name) => format!("cogdocs - {}", name.to_string_lossy()),
            None => "cogdocs".to_string(),
        }
    }
}
