//! Application settings
//!
//! Theme changes are applied immediately and written to disk in the background.

use crate::app::{Message, State};
use crate::theme::ThemeChoice;
use iced::Task;
use tracing::{debug, error};

/// Handles theme selection and persists it
pub(crate) fn handle_theme_changed(state: &mut State, choice: ThemeChoice) -> Task<Message> {
    state.config.theme_choice = choice;
    state.theme = choice.to_theme();

    let config = state.config.clone();
    Task::perform(
        async move {
            crate::config::save_config(&config)
                .await
                .map_err(|e| e.to_string())
        },
        Message::ConfigSaved,
    )
}

/// Handles config save completion
pub(crate) fn handle_config_saved(state: &mut State, result: Result<(), String>) {
    match result {
        Ok(()) => debug!("Configuration saved"),
        Err(e) => {
            error!("Failed to save configuration: {e}");
            state.status = Some(format!("Settings not saved: {e}"));
        }
    }
}
