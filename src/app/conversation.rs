// app/conversation.rs

//! The append-only list of chat messages shown in the main view.

use chrono::{DateTime, Local};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub content: String,
    pub created: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            sender,
            content: content.into(),
            created: Local::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, content)
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Messages in display order. Only ever appended to.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn get(&self, index: usize) -> Option<&ChatMessage> {
        self.messages.get(index)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Canned exchange displayed at startup.
pub fn sample_conversation() -> Vec<ChatMessage> {
    vec![
        ChatMessage::user("Hi!"),
        ChatMessage::assistant("Hello! what can I do for you today?"),
        ChatMessage::user("Generate me some sleek ui code for my flutter app"),
        ChatMessage::assistant(
            "Sure, let me do that for you.\n```python\n# here's how you print number from one to ten\nfor i in range(10):\n\tprint(i)\n```",
        ),
        ChatMessage::user("Thanks! That is awesome, let me try that."),
        ChatMessage::assistant("Great, if you need anything, just ask right away."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order_without_dedup() {
        let mut conversation = Conversation::default();
        let contents = ["a", "b", "a", "c", "c"];
        for (i, content) in contents.iter().enumerate() {
            let msg = if i % 2 == 0 {
                ChatMessage::user(*content)
            } else {
                ChatMessage::assistant(*content)
            };
            conversation.push(msg);
        }
        let read_back: Vec<_> = conversation
            .messages()
            .iter()
            .map(|m| (m.sender, m.content.as_str()))
            .collect();
        assert_eq!(
            read_back,
            vec![
                (Sender::User, "a"),
                (Sender::Assistant, "b"),
                (Sender::User, "a"),
                (Sender::Assistant, "c"),
                (Sender::User, "c"),
            ]
        );
    }

    #[test]
    fn test_sample_conversation_alternates() {
        let sample = sample_conversation();
        assert_eq!(sample.len(), 6);
        for (i, msg) in sample.iter().enumerate() {
            assert_eq!(msg.is_user(), i % 2 == 0);
        }
        assert!(sample[3].content.contains("```python"));
    }
}
