// app/messages_list.rs

//! List of messages, keeping state of the UI scrolling offset and selected item.

use ratatui::widgets::ListState;

#[derive(Default)]
pub struct MessagesList {
    list_state: ListState,
    // workaround so we can set the Option in ListState to usize::MAX when there is no selection
    // to keep the list scrolled to the last message
    has_selection: bool,
    nb_messages: usize,
}

impl MessagesList {
    pub fn new() -> Self {
        let mut list = MessagesList::default();
        list.list_state.select(Some(usize::MAX));
        list
    }

    /// Returns the index of the selected message, if there is one.
    pub fn selected_index(&self) -> Option<usize> {
        if !self.has_selection {
            return None;
        }
        self.list_state
            .selected()
            .filter(|selected| *selected < self.nb_messages)
    }

    /// Selects the next message in the list.
    pub fn select_next_message(&mut self) {
        if !self.has_selection {
            self.select_first_message();
            return;
        }
        match self.list_state.selected() {
            Some(_) if self.nb_messages == 0 => self.deselect(),
            Some(selected) if selected >= self.nb_messages - 1 => {
                // last element or beyond is selected, do nothing
            }
            Some(selected) => self.list_state.select(Some(selected + 1)),
            None => self.select_first_message(),
        }
    }

    /// Selects the previous message in the list.
    pub fn select_previous_message(&mut self) {
        if !self.has_selection {
            self.select_last_message();
            return;
        }
        match self.list_state.selected() {
            Some(_) if self.nb_messages == 0 => self.deselect(),
            Some(0) => {
                // first was selected, do nothing
            }
            Some(selected) if selected >= self.nb_messages => self.select_last_message(),
            Some(selected) => self.list_state.select(Some(selected - 1)),
            None => self.select_last_message(),
        }
    }

    fn select_first_message(&mut self) {
        if self.nb_messages == 0 {
            self.deselect();
            return;
        }
        self.has_selection = true;
        self.list_state.select(Some(0));
    }

    fn select_last_message(&mut self) {
        if self.nb_messages == 0 {
            self.deselect();
            return;
        }
        self.has_selection = true;
        self.list_state.select(Some(self.nb_messages - 1));
    }

    pub fn deselect(&mut self) {
        self.has_selection = false;
        // Workaround to show the last message instead of the first one
        self.list_state.select(Some(usize::MAX));
    }

    /// Sets the number of messages in the list.
    /// This needs to be kept up to date for other functions to work.
    pub fn set_nb_messages(&mut self, nb_messages: usize) {
        self.nb_messages = nb_messages;
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    pub fn has_selection(&self) -> bool {
        self.has_selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_next_message() {
        let mut list = MessagesList::new();
        list.set_nb_messages(3);
        assert_eq!(list.list_state.selected(), Some(usize::MAX));
        list.select_next_message();
        assert_eq!(list.list_state.selected(), Some(0));
        list.select_next_message();
        assert_eq!(list.list_state.selected(), Some(1));
        list.select_next_message();
        assert_eq!(list.list_state.selected(), Some(2));
        list.select_next_message();
        assert_eq!(list.list_state.selected(), Some(2));
    }

    #[test]
    fn test_select_previous_message() {
        let mut list = MessagesList::new();
        list.set_nb_messages(3);
        list.select_previous_message();
        assert_eq!(list.list_state.selected(), Some(2));
        list.select_previous_message();
        assert_eq!(list.list_state.selected(), Some(1));
        list.select_previous_message();
        assert_eq!(list.list_state.selected(), Some(0));
        list.select_previous_message();
        assert_eq!(list.list_state.selected(), Some(0));
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut list = MessagesList::new();
        list.select_next_message();
        assert!(!list.has_selection());
        list.select_previous_message();
        assert!(!list.has_selection());
        assert_eq!(list.selected_index(), None);
    }

    #[test]
    fn test_deselect() {
        let mut list = MessagesList::new();
        list.set_nb_messages(3);
        list.select_first_message();
        assert!(list.has_selection());
        list.deselect();
        assert_eq!(list.list_state.selected(), Some(usize::MAX));
        assert!(!list.has_selection());
    }
}
