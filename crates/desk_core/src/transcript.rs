//! Append-only transcript store for one conversation.

use chrono::NaiveDateTime;

use crate::types::{Message, MessageId, SenderRole};

/// Ordered message log with a monotonic id counter.
///
/// Ids are never derived from the clock, so two appends in the same
/// instant still get distinct ids. The counter starts past the highest id
/// already present in the seed messages.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: MessageId,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Seed from an existing message sequence, keeping its order.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        let next_id = messages.iter().map(|m| m.id).max().map_or(1, |max| max + 1);
        Self { messages, next_id }
    }

    /// Append a new message and return a copy of it.
    pub fn append(
        &mut self,
        sender: SenderRole,
        content: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Message {
        let message = Message::new(self.next_id, sender, content, timestamp);
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
