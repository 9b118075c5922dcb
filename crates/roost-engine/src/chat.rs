use roost_types::ChatMessage;
use uuid::Uuid;

/// A single flat conversation thread, oldest message first.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_messages(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a message from the given sender.
    ///
    /// The draft is trimmed first; an empty or whitespace-only draft
    /// sends nothing and returns `None`.
    pub fn send(&mut self, sender: &str, draft: &str) -> Option<Uuid> {
        let body = draft.trim();
        if body.is_empty() {
            return None;
        }
        let message = ChatMessage::new(sender, body);
        let id = message.id;
        self.messages.push(message);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_appends_exactly_one_message() {
        let mut chat = ChatState::new();
        let id = chat.send("You", "hello there").unwrap();
        assert_eq!(chat.len(), 1);
        assert_eq!(chat.messages()[0].id, id);
        assert_eq!(chat.messages()[0].sender, "You");
        assert_eq!(chat.messages()[0].body, "hello there");
    }

    #[test]
    fn test_send_trims_the_draft() {
        let mut chat = ChatState::new();
        chat.send("You", "  hi  ").unwrap();
        assert_eq!(chat.messages()[0].body, "hi");
    }

    #[test]
    fn test_blank_draft_sends_nothing() {
        let mut chat = ChatState::new();
        assert_eq!(chat.send("You", ""), None);
        assert_eq!(chat.send("You", " \t "), None);
        assert!(chat.is_empty());
    }

    #[test]
    fn test_messages_keep_arrival_order() {
        let mut chat = ChatState::new();
        chat.send("Alice", "Hi!").unwrap();
        chat.send("Bob", "Hello, Alice!").unwrap();
        assert_eq!(chat.messages()[0].sender, "Alice");
        assert_eq!(chat.messages()[1].sender, "Bob");
    }
}
