// app/actions.rs

//! Actions the user can trigger on the main `App`.

use enum_iterator::{all, Sequence};
use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::inputs::key::Key;

/// All possible user actions.
/// Not all actions are available in all contexts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Sequence)]
pub enum Action {
    ActivateItem,
    Back,
    ComposeMessage,
    CopyText,
    EndEditMessage,
    NewLine,
    NextField,
    NextItem,
    NextMessage,
    OpenMenu,
    OpenSettings,
    PreviousField,
    PreviousItem,
    PreviousMessage,
    Quit,
    SendMessage,
    StopResponse,
    ToggleDrawer,
    ToggleHelp,
    ToggleLogs,
    UnselectMessage,
}

impl Action {
    /// Return a slice with the key(s) associated to the action.
    pub fn keys(&self) -> &[Key] {
        match self {
            Action::ActivateItem => &[Key::Enter],
            Action::Back => &[Key::Esc],
            Action::ComposeMessage => &[Key::Tab, Key::Char('i')],
            Action::CopyText => &[Key::Char('c')],
            Action::EndEditMessage => &[Key::Esc, Key::Tab],
            Action::NewLine => &[Key::AltEnter],
            Action::NextField => &[Key::Tab],
            Action::NextItem => &[Key::Down],
            Action::NextMessage => &[Key::Down],
            Action::OpenMenu => &[Key::Enter],
            Action::OpenSettings => &[Key::Char('s')],
            Action::PreviousField => &[Key::ShiftTab],
            Action::PreviousItem => &[Key::Up],
            Action::PreviousMessage => &[Key::Up],
            Action::Quit => &[Key::Ctrl('c'), Key::Char('q')],
            Action::SendMessage => &[Key::Enter],
            Action::StopResponse => &[Key::Ctrl('x')],
            Action::ToggleDrawer => &[Key::Char('m')],
            Action::ToggleHelp => &[Key::Char('h')],
            Action::ToggleLogs => &[Key::Char('l')],
            Action::UnselectMessage => &[Key::Esc],
        }
    }
}

/// User friendly short description of the action
impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            Action::ActivateItem => "Select",
            Action::Back => "Back",
            Action::ComposeMessage => "Compose message",
            Action::CopyText => "Copy text",
            Action::EndEditMessage => "End editing",
            Action::NewLine => "New line",
            Action::NextField => "Next field",
            Action::NextItem => "Next item",
            Action::NextMessage => "Next message",
            Action::OpenMenu => "Message actions",
            Action::OpenSettings => "Settings",
            Action::PreviousField => "Previous field",
            Action::PreviousItem => "Previous item",
            Action::PreviousMessage => "Previous message",
            Action::Quit => "Quit",
            Action::SendMessage => "Send message",
            Action::StopResponse => "Stop response",
            Action::ToggleDrawer => "Message history",
            Action::ToggleHelp => "Toggle help",
            Action::ToggleLogs => "Toggle logs",
            Action::UnselectMessage => "Unselect message",
        };
        write!(f, "{}", str)
    }
}

/// Vec of actions.
/// Can be used to enumerate the actions available in a
/// given context.
/// In a context, a key must map to at most one action.
#[derive(Default, Debug, Clone)]
pub struct Actions(Vec<Action>);

impl Actions {
    /// Given a key, find the corresponding action
    pub fn find(&self, key: Key) -> Option<Action> {
        all::<Action>()
            .filter(|action| self.0.contains(action))
            .find(|action| action.keys().contains(&key))
    }

    pub fn actions(&self) -> &[Action] {
        self.0.as_slice()
    }
}

impl From<Vec<Action>> for Actions {
    /// Builds contextual actions
    ///
    /// # Panics
    ///
    /// If two actions have same key
    fn from(actions: Vec<Action>) -> Self {
        let mut map: HashMap<Key, Vec<Action>> = HashMap::new();
        for action in actions.iter() {
            for key in action.keys().iter() {
                map.entry(*key).or_default().push(*action);
            }
        }
        let errors = map
            .iter()
            .filter(|(_, actions)| actions.len() > 1) // at least two actions share same shortcut
            .map(|(key, actions)| {
                let actions = actions
                    .iter()
                    .map(Action::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Conflict key {} with actions {}", key, actions)
            })
            .collect::<Vec<_>>();
        if !errors.is_empty() {
            panic!("{}", errors.join("; "))
        }

        Self(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_find_action_by_key() {
        let actions: Actions = vec![Action::Quit, Action::OpenMenu].into();
        assert_eq!(actions.find(Key::Char('q')), Some(Action::Quit));
        assert_eq!(actions.find(Key::Enter), Some(Action::OpenMenu));
    }

    #[test]
    fn should_find_action_by_key_not_found() {
        let actions: Actions = vec![Action::Quit, Action::SendMessage].into();
        assert_eq!(actions.find(Key::Alt('w')), None);
    }

    #[test]
    fn same_key_resolves_per_context() {
        let menu: Actions = vec![Action::ActivateItem, Action::Back].into();
        let main: Actions = vec![Action::OpenMenu, Action::UnselectMessage].into();
        assert_eq!(menu.find(Key::Esc), Some(Action::Back));
        assert_eq!(main.find(Key::Esc), Some(Action::UnselectMessage));
    }

    #[test]
    fn compose_bindings_list_every_exit_key() {
        let compose: Actions = vec![
            Action::EndEditMessage,
            Action::NewLine,
            Action::SendMessage,
            Action::StopResponse,
        ]
        .into();
        assert_eq!(compose.find(Key::Tab), Some(Action::EndEditMessage));
        assert_eq!(compose.find(Key::Esc), Some(Action::EndEditMessage));
    }

    #[test]
    #[should_panic]
    fn should_panic_when_create_actions_conflict_key() {
        let _actions: Actions = vec![Action::OpenMenu, Action::SendMessage].into();
    }
}
