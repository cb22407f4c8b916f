// app/message_editor.rs

//! Composer used to type messages, and the state of its trailing button.

use log::*;
use tui_textarea::{Input, TextArea};

pub const PLACEHOLDER: &str = "Type your message or /help";

/// What the button next to the input currently does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposerButton {
    /// Shown while the input is empty.
    #[default]
    Mic,
    /// Shown while there is text to send.
    Send,
    /// Shown after sending, while a response is awaited.
    Stop,
}

#[derive(Default)]
pub struct MessageEditor<'a> {
    textarea: TextArea<'a>,
    is_composing: bool,
    button: ComposerButton,
}

impl<'a> MessageEditor<'a> {
    /// Returns the text in the editor.
    pub fn lines(&self) -> &[String] {
        self.textarea.lines()
    }

    /// Returns the text in the editor as a single string.
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }

    /// Whether the editor captures key events.
    pub fn is_composing(&self) -> bool {
        self.is_composing
    }

    /// Sets whether the editor should capture key events.
    pub fn set_is_composing(&mut self, is_composing: bool) {
        self.is_composing = is_composing;
    }

    /// Sends a key to the editor. Returns whether the text was modified.
    pub fn input(&mut self, input: impl Into<Input>) -> bool {
        self.textarea.input(input)
    }

    /// Inserts a newline in the editor.
    pub fn insert_newline(&mut self) {
        self.textarea.insert_newline();
    }

    /// Returns the textarea.
    pub fn textarea(&self) -> &TextArea<'a> {
        &self.textarea
    }

    /// Returns whether the message editor is empty.
    pub fn is_empty(&self) -> bool {
        self.textarea.is_empty()
    }

    pub fn button(&self) -> ComposerButton {
        self.button
    }

    /// Resets the message editor content.
    pub(crate) fn reset(&mut self) {
        self.reset_with_text(String::new());
    }

    /// Sets the message editor content to the given text.
    pub(crate) fn reset_with_text(&mut self, text: String) {
        // Textarea does not support newlines in the text.
        let lines = text.split('\n').map(|s| s.to_string()).collect::<Vec<_>>();
        self.textarea = TextArea::new(lines);
        self.textarea.set_placeholder_text(PLACEHOLDER);
    }

    /// Updates the button after the text changed.
    pub fn on_input_changed(&mut self) {
        if !self.is_empty() && self.button == ComposerButton::Mic {
            self.button = ComposerButton::Send;
        } else if self.button != ComposerButton::Mic && self.is_empty() {
            self.button = ComposerButton::Mic;
        }
    }

    /// Takes the text out of the editor to be sent.
    ///
    /// Only acts while the button offers sending; the button then waits for
    /// a response.
    pub fn on_send(&mut self) -> Option<String> {
        if self.button != ComposerButton::Send {
            debug!("Nothing to send (button is {:?})", self.button);
            return None;
        }
        let text = self.text();
        self.button = ComposerButton::Stop;
        self.reset();
        Some(text)
    }

    pub fn on_stop(&mut self) {
        self.button = ComposerButton::Mic;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(text: &str) -> MessageEditor<'static> {
        let mut editor = MessageEditor::default();
        editor.reset_with_text(text.to_string());
        editor.on_input_changed();
        editor
    }

    #[test]
    fn test_button_follows_text() {
        let mut editor = MessageEditor::default();
        editor.reset();
        assert_eq!(editor.button(), ComposerButton::Mic);
        editor.reset_with_text("hi".to_string());
        editor.on_input_changed();
        assert_eq!(editor.button(), ComposerButton::Send);
        editor.reset();
        editor.on_input_changed();
        assert_eq!(editor.button(), ComposerButton::Mic);
    }

    #[test]
    fn test_send_takes_text_and_waits() {
        let mut editor = editor_with("hello\nworld");
        assert_eq!(editor.on_send(), Some("hello\nworld".to_string()));
        assert_eq!(editor.button(), ComposerButton::Stop);
        assert!(editor.is_empty());
    }

    #[test]
    fn test_send_ignored_without_send_button() {
        let mut editor = editor_with("");
        assert_eq!(editor.on_send(), None);
        assert_eq!(editor.button(), ComposerButton::Mic);
    }

    #[test]
    fn test_typing_while_waiting_keeps_stop() {
        let mut editor = editor_with("first");
        editor.on_send();
        editor.reset_with_text("second".to_string());
        editor.on_input_changed();
        assert_eq!(editor.button(), ComposerButton::Stop);
        assert_eq!(editor.on_send(), None);
    }

    #[test]
    fn test_clearing_while_waiting_goes_back_to_mic() {
        let mut editor = editor_with("first");
        editor.on_send();
        editor.on_input_changed();
        assert_eq!(editor.button(), ComposerButton::Mic);
    }

    #[test]
    fn test_stop_returns_to_mic() {
        let mut editor = editor_with("first");
        editor.on_send();
        editor.on_stop();
        assert_eq!(editor.button(), ComposerButton::Mic);
    }
}
