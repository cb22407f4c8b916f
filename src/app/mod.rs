// app/mod.rs

//! Controller translating user input into state changes.
//!
//! Keys are mapped to [`Action`]s for the current focus, and actions that
//! touch the composer or the views are expressed as [`AppEvent`]s handled by
//! [`App::dispatch`].

pub mod actions;
pub mod context_menu;
pub mod conversation;
pub mod drawer;
pub mod events;
pub mod message_editor;
pub mod messages_list;
pub mod router;
pub mod settings_form;
pub mod state;

use self::actions::Action;
use self::context_menu::{ContextMenu, MenuEntry};
use self::conversation::ChatMessage;
use self::drawer::DrawerItem;
use self::events::AppEvent;
use self::router::Route;
use self::state::{AppState, Focus};
use crate::inputs::key::Key;

use color_eyre::{eyre::eyre, Result};
use crossterm::event::KeyEvent;
use log::*;

/// Return status indicating whether the app should exit or not.
#[derive(Debug, PartialEq, Eq)]
pub enum AppReturn {
    Exit,
    Continue,
}

/// `App` owns the state of the application.
pub struct App<'a> {
    pub state: AppState<'a>,
    clipboard: Option<arboard::Clipboard>,
}

impl<'a> App<'a> {
    pub fn new(state: AppState<'a>) -> Self {
        Self {
            state,
            clipboard: None,
        }
    }

    /// Applies one event to the state.
    pub fn dispatch(&mut self, event: AppEvent) {
        debug!("Dispatch {:?}", event);
        match event {
            AppEvent::SendClicked => self.send_message_buffer(),
            AppEvent::StopClicked => {
                self.state.message_editor.on_stop();
                debug!("Stopped waiting for a response");
            }
            AppEvent::RouteChanged(route) => {
                self.state.drawer.close();
                self.state.context_menu = None;
                self.state.router.navigate(&route);
                if self.state.router.current() != Route::Main {
                    self.state.message_editor.set_is_composing(false);
                }
            }
            AppEvent::ViewPopped => self.state.router.pop(),
            AppEvent::InputChanged => self.state.message_editor.on_input_changed(),
        }
        self.state.update_actions();
    }

    /// Process a key event to the focused editor if any, or to execute
    /// the corresponding action otherwise
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> AppReturn {
        let result = match self.state.focus() {
            Focus::Compose => self.process_editing_key(key_event),
            Focus::Settings => self.process_settings_key(key_event),
            _ => self.do_action(Key::from(key_event)),
        };
        self.state.update_actions();
        result
    }

    /// Handle a user action (non-editing mode)
    fn do_action(&mut self, key: Key) -> AppReturn {
        let Some(action) = self.state.actions.find(key) else {
            warn!("No action associated with {} in this mode", key);
            return AppReturn::Continue;
        };
        debug!("Run action [{:?}]", action);
        match action {
            Action::Quit => return AppReturn::Exit,
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::ToggleLogs => self.state.show_logs = !self.state.show_logs,
            Action::ComposeMessage => {
                self.state.messages_list.deselect();
                self.state.message_editor.set_is_composing(true);
            }
            Action::NextMessage => self.state.messages_list.select_next_message(),
            Action::PreviousMessage => self.state.messages_list.select_previous_message(),
            Action::UnselectMessage => self.state.messages_list.deselect(),
            Action::OpenMenu => {
                if let Err(e) = self.open_context_menu() {
                    warn!("Could not open message actions: {}", e);
                }
            }
            Action::OpenSettings => {
                self.dispatch(AppEvent::RouteChanged(Route::Settings.path().to_string()))
            }
            Action::StopResponse => self.dispatch(AppEvent::StopClicked),
            Action::ToggleDrawer => {
                if self.state.drawer.is_open() {
                    self.state.drawer.close();
                } else {
                    self.state.drawer.open();
                }
            }
            Action::NextItem => match self.state.context_menu.as_mut() {
                Some(menu) => menu.select_next(),
                None => self.state.drawer.select_next(),
            },
            Action::PreviousItem => match self.state.context_menu.as_mut() {
                Some(menu) => menu.select_previous(),
                None => self.state.drawer.select_previous(),
            },
            Action::ActivateItem => {
                if self.state.context_menu.is_some() {
                    self.activate_menu_entry();
                } else {
                    self.activate_drawer_item();
                }
            }
            Action::Back => match self.state.focus() {
                Focus::ContextMenu => self.state.context_menu = None,
                Focus::Drawer => self.state.drawer.close(),
                _ => self.dispatch(AppEvent::ViewPopped),
            },
            Action::CopyText => {
                let text = self.state.selected_text.clone();
                self.copy_to_clipboard(&text);
            }
            _ => {
                warn!("Unsupported action {} in this context", action);
            }
        }
        AppReturn::Continue
    }

    // Handle a key while typing a message
    fn process_editing_key(&mut self, key_event: KeyEvent) -> AppReturn {
        let key: Key = key_event.into();
        match key {
            Key::Ctrl('c') => return AppReturn::Exit,
            Key::Esc | Key::Tab => self.state.message_editor.set_is_composing(false),
            Key::Ctrl('x') => self.dispatch(AppEvent::StopClicked),
            Key::AltEnter => {
                self.state.message_editor.insert_newline();
                self.dispatch(AppEvent::InputChanged);
            }
            Key::Enter => self.dispatch(AppEvent::SendClicked),
            _ => {
                if self.state.message_editor.input(key_event) {
                    self.dispatch(AppEvent::InputChanged);
                }
            }
        }
        AppReturn::Continue
    }

    // Handle a key in the settings view; the form gets everything else
    fn process_settings_key(&mut self, key_event: KeyEvent) -> AppReturn {
        let key: Key = key_event.into();
        match key {
            Key::Ctrl('c') => return AppReturn::Exit,
            Key::Esc => self.dispatch(AppEvent::ViewPopped),
            Key::Tab => self.state.settings_form.focus_next(),
            Key::ShiftTab => self.state.settings_form.focus_previous(),
            _ => {
                if !self.state.settings_form.input(key_event) {
                    trace!("Settings form ignored {}", key);
                }
            }
        }
        AppReturn::Continue
    }

    /// We could update the app or dispatch event on tick
    pub fn update_on_tick(&mut self) -> AppReturn {
        AppReturn::Continue
    }

    /// Appends the composer text as a user message.
    fn send_message_buffer(&mut self) {
        match self.state.message_editor.on_send() {
            Some(text) => {
                self.state.push_message(ChatMessage::user(text));
                info!("Message sent, waiting for a response");
            }
            None => debug!("Send ignored, nothing to send"),
        }
    }

    /// Opens the actions menu for the selected message.
    fn open_context_menu(&mut self) -> Result<()> {
        let (index, sender) = self
            .state
            .selected_message()
            .map(|(index, message)| (index, message.sender))
            .ok_or(eyre!("No message selected"))?;
        self.state.context_menu = Some(ContextMenu::new(index, sender));
        Ok(())
    }

    fn activate_menu_entry(&mut self) {
        let Some(menu) = self.state.context_menu.take() else {
            return;
        };
        let Some(entry) = menu.selected() else {
            return;
        };
        let Some(content) = self
            .state
            .conversation
            .get(menu.message_index())
            .map(|msg| msg.content.clone())
        else {
            error!("Message {} no longer exists", menu.message_index());
            return;
        };
        debug!("Menu entry [{}] on message {}", entry, menu.message_index());
        match entry {
            MenuEntry::Copy => self.copy_to_clipboard(&content),
            MenuEntry::SelectText => {
                self.state.selected_text = content;
                self.dispatch(AppEvent::RouteChanged(
                    Route::SelectText.path().to_string(),
                ));
            }
            MenuEntry::EditMessage => {
                self.state.message_editor.reset_with_text(content);
                self.state.message_editor.set_is_composing(true);
                self.state.messages_list.deselect();
                self.dispatch(AppEvent::InputChanged);
            }
            MenuEntry::RegenerateResponse | MenuEntry::ReadAloud => {
                warn!("{} needs an assistant backend, none is configured", entry);
            }
        }
    }

    fn activate_drawer_item(&mut self) {
        let Some(item) = self.state.drawer.selected() else {
            return;
        };
        match item {
            DrawerItem::History(index) => {
                if let Some(entry) = self.state.drawer.entries().get(index) {
                    info!("Conversation history is not stored, cannot open {:?}", entry.title);
                }
                self.state.drawer.close();
            }
            DrawerItem::NewChat => {
                info!("New chat requested");
                self.state.drawer.close();
            }
            DrawerItem::Settings => {
                self.dispatch(AppEvent::RouteChanged(Route::Settings.path().to_string()))
            }
        }
    }

    /// Copies `text` to the system clipboard, opening it on first use.
    fn copy_to_clipboard(&mut self, text: &str) {
        if self.clipboard.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(e) => {
                    error!("Clipboard unavailable: {}", e);
                    return;
                }
            }
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            match clipboard.set_text(text.to_string()) {
                Ok(()) => info!("Copied {} characters", text.chars().count()),
                Err(e) => error!("Could not copy to clipboard: {}", e),
            }
        }
    }
}
