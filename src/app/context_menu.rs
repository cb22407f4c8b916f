// app/context_menu.rs

//! Bottom sheet of actions for one message.

use std::fmt::{self, Display};

use ratatui::widgets::ListState;

use super::conversation::Sender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Copy,
    SelectText,
    EditMessage,
    RegenerateResponse,
    ReadAloud,
}

impl MenuEntry {
    /// Entries offered for a message from `sender`, in display order.
    pub fn for_sender(sender: Sender) -> &'static [MenuEntry] {
        match sender {
            Sender::User => &[MenuEntry::Copy, MenuEntry::SelectText, MenuEntry::EditMessage],
            Sender::Assistant => &[
                MenuEntry::Copy,
                MenuEntry::SelectText,
                MenuEntry::RegenerateResponse,
                MenuEntry::ReadAloud,
            ],
        }
    }
}

impl Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            MenuEntry::Copy => "Copy",
            MenuEntry::SelectText => "Select Text",
            MenuEntry::EditMessage => "Edit Message",
            MenuEntry::RegenerateResponse => "Regenerate Response",
            MenuEntry::ReadAloud => "Read Aloud",
        };
        write!(f, "{}", str)
    }
}

pub struct ContextMenu {
    message_index: usize,
    entries: &'static [MenuEntry],
    list_state: ListState,
}

impl ContextMenu {
    /// Opens the menu for the message at `message_index`.
    pub fn new(message_index: usize, sender: Sender) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            message_index,
            entries: MenuEntry::for_sender(sender),
            list_state,
        }
    }

    pub fn message_index(&self) -> usize {
        self.message_index
    }

    pub fn entries(&self) -> &[MenuEntry] {
        self.entries
    }

    pub fn selected(&self) -> Option<MenuEntry> {
        self.list_state
            .selected()
            .and_then(|index| self.entries.get(index).copied())
    }

    pub fn select_next(&mut self) {
        if let Some(selected) = self.list_state.selected() {
            if selected + 1 < self.entries.len() {
                self.list_state.select(Some(selected + 1));
            }
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(selected) = self.list_state.selected() {
            self.list_state.select(Some(selected.saturating_sub(1)));
        }
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}
