//! Display preference changes.

use iced::Task;

use super::MessageHandler;
use crate::message::{Message, SettingsMessage};
use crate::state::AppState;

pub struct SettingsHandler;

impl MessageHandler<SettingsMessage> for SettingsHandler {
    fn handle(&self, state: &mut AppState, msg: SettingsMessage) -> Task<Message> {
        match msg {
            SettingsMessage::AffordanceChanged(affordance) => {
                state.settings.display.example_affordance = affordance;
                let options = state
                    .session
                    .options()
                    .clone()
                    .with_example_affordance(affordance);
                state.session.set_options(options);
                state.save_settings();
                Task::none()
            }
        }
    }
}
