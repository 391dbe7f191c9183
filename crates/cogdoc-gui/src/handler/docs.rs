//! Expand/collapse clicks.

use iced::Task;

use super::MessageHandler;
use crate::message::{DocsMessage, Message};
use crate::state::AppState;

pub struct DocsHandler;

impl MessageHandler<DocsMessage> for DocsHandler {
    fn handle(&self, state: &mut AppState, msg: DocsMessage) -> Task<Message> {
        match msg {
            DocsMessage::Toggle(toggle) => {
                if !state.session.dispatch(&toggle) {
                    tracing::debug!(%toggle, "toggle matched no node");
                }
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cogdoc_core::{NodeId, Toggle};
    use cogdoc_model::{Command, Document, Group};

    use super::*;
    use crate::settings::Settings;

    fn ready_state() -> AppState {
        let mut state = AppState::new(Settings::default(), None);
        let document = Document::new(vec![Group::new(
            "Math",
            vec![Command::new("add", "adds").with_example("add 2 3")],
        )]);
        state.session.observe(Some(Arc::new(document)));
        state
    }

    #[test]
    fn group_toggle_flips_flag() {
        let mut state = ready_state();
        let _ = DocsHandler.handle(
            &mut state,
            DocsMessage::Toggle(Toggle::Group(NodeId::from("Math_expanded"))),
        );
        assert_eq!(
            state.session.visibility().group_expanded("Math_expanded"),
            Some(true)
        );
    }

    #[test]
    fn example_toggle_flips_flag() {
        let mut state = ready_state();
        let _ = DocsHandler.handle(
            &mut state,
            DocsMessage::Toggle(Toggle::Example(NodeId::from("add_example_expanded"))),
        );
        assert_eq!(
            state
                .session
                .visibility()
                .example_expanded("add_example_expanded"),
            Some(false)
        );
    }

    #[test]
    fn unknown_toggle_keeps_state() {
        let mut state = ready_state();
        let before = state.session.visibility().clone();
        let _ = DocsHandler.handle(
            &mut state,
            DocsMessage::Toggle(Toggle::Group(NodeId::from("Nope_expanded"))),
        );
        assert!(state.session.visibility().same_snapshot(&before));
    }
}
