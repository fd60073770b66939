//! Core domain types: messages, conversations and customers.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Message identifier, unique within one conversation
pub type MessageId = u64;

/// Conversation identifier (`chat-1`, `chat-cust-4`, ...)
pub type ConversationId = String;

/// Customer identifier (`cust-1`, ...)
pub type CustomerId = String;

/// Build a local timestamp from calendar parts.
///
/// Out-of-range parts collapse to the epoch instead of panicking; the
/// fixtures only ever pass valid literals.
pub fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

/// Who wrote a message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    /// The customer on the other end of the conversation
    Customer,
    /// A human support agent (the console user)
    Agent,
    /// The automated assistant
    Ai,
}

impl SenderRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Agent => "agent",
            Self::Ai => "ai",
        }
    }
}

impl fmt::Display for SenderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transcript entry. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub sender: SenderRole,
    pub content: String,
    /// Local wall-clock time, ISO-8601 without offset
    pub timestamp: NaiveDateTime,
}

impl Message {
    pub fn new(
        id: MessageId,
        sender: SenderRole,
        content: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            sender,
            content: content.into(),
            timestamp,
        }
    }
}

/// Conversation status as shown in the inbox
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    Active,
    Waiting,
    Resolved,
}

impl ConversationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Waiting => "Waiting",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ConversationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Conversation priority badge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Customer account status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
    New,
}

impl CustomerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::New => "New",
        }
    }
}

/// The part of a customer record a conversation carries around
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerRef {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl CustomerRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    /// Placeholder avatar when no image is set: the first letter of the name
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// A customer directory entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub signup_date: NaiveDateTime,
    pub last_active: NaiveDateTime,
    /// Number of conversations this customer has had
    pub conversations: u32,
    pub status: CustomerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Customer {
    pub fn to_ref(&self) -> CustomerRef {
        CustomerRef {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// A support conversation with its transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: ConversationId,
    pub customer: CustomerRef,
    pub status: ConversationStatus,
    /// Transcript in insertion order
    pub messages: Vec<Message>,
    pub unread: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Conversation {
    /// Create an empty, read, unassigned conversation
    pub fn new(id: impl Into<String>, customer: CustomerRef, status: ConversationStatus) -> Self {
        Self {
            id: id.into(),
            customer,
            status,
            messages: Vec::new(),
            unread: false,
            assigned_to: None,
            priority: None,
        }
    }

    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn assigned_to(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn unread(mut self, unread: bool) -> Self {
        self.unread = unread;
        self
    }

    /// The message shown in list previews.
    ///
    /// Always the last element by insertion, even if an earlier message
    /// carries a later timestamp.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Whether the assignee label names the assistant (`AI` substring)
    pub fn is_assigned_to_ai(&self) -> bool {
        self.assigned_to
            .as_deref()
            .is_some_and(|assignee| assignee.contains("AI"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emily() -> CustomerRef {
        CustomerRef::new("cust-1", "Emily Johnson", "emily@example.com")
    }

    #[test]
    fn test_last_message_is_insertion_order() {
        let conversation = Conversation::new("chat-1", emily(), ConversationStatus::Active)
            .message(Message::new(1, SenderRole::Customer, "later", timestamp(2023, 5, 23, 12, 0)))
            .message(Message::new(2, SenderRole::Agent, "earlier", timestamp(2023, 5, 23, 9, 0)));

        assert_eq!(conversation.last_message().map(|m| m.id), Some(2));
    }

    #[test]
    fn test_last_message_empty() {
        let conversation = Conversation::new("chat-1", emily(), ConversationStatus::Active);
        assert!(conversation.last_message().is_none());
    }

    #[test]
    fn test_ai_assignment_is_case_sensitive() {
        let base = Conversation::new("chat-1", emily(), ConversationStatus::Waiting);
        assert!(base.clone().assigned_to("AI Assistant").is_assigned_to_ai());
        assert!(!base.clone().assigned_to("Aidan").is_assigned_to_ai());
        assert!(!base.is_assigned_to_ai());
    }

    #[test]
    fn test_message_serialization_shape() {
        let msg = Message::new(7, SenderRole::Ai, "hello", timestamp(2023, 5, 23, 10, 25));
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["sender"], "ai");
        assert_eq!(json["timestamp"], "2023-05-23T10:25:00");
    }

    #[test]
    fn test_customer_camel_case_fields() {
        let json = r#"{
            "id": "cust-9",
            "name": "Zoe Park",
            "email": "zoe@example.com",
            "signupDate": "2023-01-02T03:04:00",
            "lastActive": "2023-05-01T08:00:00",
            "conversations": 4,
            "status": "new"
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();

        assert_eq!(customer.status, CustomerStatus::New);
        assert_eq!(customer.signup_date, timestamp(2023, 1, 2, 3, 4));
        assert_eq!(customer.to_ref().initial(), 'Z');
    }
}
