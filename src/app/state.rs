// app/state.rs

use log::*;
use tui_logger::TuiWidgetState;

use super::actions::{Action, Actions};
use super::context_menu::ContextMenu;
use super::conversation::{sample_conversation, ChatMessage, Conversation};
use super::drawer::Drawer;
use super::message_editor::MessageEditor;
use super::messages_list::MessagesList;
use super::router::{Route, ViewRouter};
use super::settings_form::SettingsForm;
use crate::config::Config;
use crate::theme::Theme;

pub const DEFAULT_SELECTED_TEXT: &str = "This is a sample text";

/// What currently receives key presses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Messages,
    Compose,
    Drawer,
    ContextMenu,
    Settings,
    SelectText,
}

pub struct AppState<'a> {
    // App
    pub actions: Actions,
    pub theme: Theme,
    pub router: ViewRouter,
    pub font_family: String,

    // Chat
    pub conversation: Conversation,

    // UI
    pub show_logs: bool,
    pub show_help: bool,
    pub log_state: TuiWidgetState,
    pub messages_list: MessagesList,
    pub message_editor: MessageEditor<'a>,
    pub drawer: Drawer,
    pub context_menu: Option<ContextMenu>,
    pub settings_form: SettingsForm<'a>,
    pub selected_text: String,
}

impl AppState<'_> {
    pub fn new(theme: Theme, config: &Config) -> Self {
        let mut message_editor = MessageEditor::default();
        message_editor.reset();
        let mut state = AppState {
            actions: Actions::default(),
            theme,
            router: ViewRouter::new(),
            font_family: config.font_family.clone(),
            conversation: Conversation::default(),
            show_logs: false,
            show_help: true,
            log_state: TuiWidgetState::new(),
            messages_list: MessagesList::new(),
            message_editor,
            drawer: Drawer::default(),
            context_menu: None,
            settings_form: SettingsForm::new(&config.settings),
            selected_text: DEFAULT_SELECTED_TEXT.to_string(),
        };
        if config.sample_conversation {
            for message in sample_conversation() {
                state.push_message(message);
            }
        }
        state.update_actions();
        state
    }

    /// Appends a message and keeps the list scrolled to the bottom.
    pub fn push_message(&mut self, message: ChatMessage) {
        trace!("New {:?} message", message.sender);
        self.conversation.push(message);
        self.messages_list.set_nb_messages(self.conversation.len());
        self.messages_list.deselect();
    }

    /// The message highlighted in the list, if any.
    pub fn selected_message(&self) -> Option<(usize, &ChatMessage)> {
        let index = self.messages_list.selected_index()?;
        self.conversation.get(index).map(|msg| (index, msg))
    }

    pub fn focus(&self) -> Focus {
        match self.router.current() {
            Route::Settings => Focus::Settings,
            Route::SelectText => Focus::SelectText,
            Route::Main if self.context_menu.is_some() => Focus::ContextMenu,
            Route::Main if self.drawer.is_open() => Focus::Drawer,
            Route::Main if self.message_editor.is_composing() => Focus::Compose,
            Route::Main => Focus::Messages,
        }
    }

    /// Recomputes the actions available for the current focus.
    pub fn update_actions(&mut self) {
        self.actions = match self.focus() {
            Focus::Messages => vec![
                Action::ComposeMessage,
                Action::NextMessage,
                Action::OpenMenu,
                Action::OpenSettings,
                Action::PreviousMessage,
                Action::Quit,
                Action::StopResponse,
                Action::ToggleDrawer,
                Action::ToggleHelp,
                Action::ToggleLogs,
                Action::UnselectMessage,
            ],
            Focus::Compose => vec![
                Action::EndEditMessage,
                Action::NewLine,
                Action::SendMessage,
                Action::StopResponse,
            ],
            Focus::Drawer => vec![
                Action::ActivateItem,
                Action::Back,
                Action::NextItem,
                Action::PreviousItem,
                Action::Quit,
                Action::ToggleDrawer,
                Action::ToggleHelp,
                Action::ToggleLogs,
            ],
            Focus::ContextMenu => vec![
                Action::ActivateItem,
                Action::Back,
                Action::NextItem,
                Action::PreviousItem,
                Action::Quit,
            ],
            Focus::Settings => vec![Action::Back, Action::NextField, Action::PreviousField],
            Focus::SelectText => vec![
                Action::Back,
                Action::CopyText,
                Action::Quit,
                Action::ToggleHelp,
                Action::ToggleLogs,
            ],
        }
        .into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState<'static> {
        AppState::new(Theme::default(), &Config::default())
    }

    #[test]
    fn test_sample_conversation_is_seeded() {
        let state = state();
        assert_eq!(state.conversation.len(), 6);
        assert_eq!(state.focus(), Focus::Messages);
    }

    #[test]
    fn test_sample_conversation_can_be_disabled() {
        let config = Config {
            sample_conversation: false,
            ..Config::default()
        };
        let state = AppState::new(Theme::default(), &config);
        assert!(state.conversation.is_empty());
    }

    #[test]
    fn test_focus_follows_route_and_overlays() {
        let mut state = state();
        state.message_editor.set_is_composing(true);
        assert_eq!(state.focus(), Focus::Compose);
        state.drawer.open();
        assert_eq!(state.focus(), Focus::Drawer);
        state.router.navigate("/settings");
        assert_eq!(state.focus(), Focus::Settings);
        state.router.navigate("/select_text");
        assert_eq!(state.focus(), Focus::SelectText);
    }

    #[test]
    fn test_actions_are_built_for_every_focus() {
        let mut state = state();
        state.update_actions();
        assert!(state.actions.actions().contains(&Action::OpenMenu));
        state.message_editor.set_is_composing(true);
        state.update_actions();
        assert!(state.actions.actions().contains(&Action::SendMessage));
        state.drawer.open();
        state.update_actions();
        assert!(state.actions.actions().contains(&Action::ActivateItem));
        state.context_menu = Some(ContextMenu::new(0, crate::app::conversation::Sender::User));
        state.update_actions();
        assert!(state.actions.actions().contains(&Action::Back));
        state.router.navigate("/settings");
        state.update_actions();
        assert!(state.actions.actions().contains(&Action::NextField));
        state.router.navigate("/select_text");
        state.update_actions();
        assert!(state.actions.actions().contains(&Action::CopyText));
    }
}
