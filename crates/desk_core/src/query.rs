//! Inbox and customer-directory queries.
//!
//! Every active predicate is ANDed together, so applying them in any order
//! yields the same subset. Results keep the input order unless sorted, and
//! sorting is stable.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeskError;
use crate::types::{Conversation, ConversationStatus, Customer};

/// Search text as typed, matched case-insensitively; an empty query
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            needle: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// The query exactly as the user typed it
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when any field contains the query, ignoring case.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.is_empty()
            || fields
                .into_iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Inbox quick filters
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum InboxFilter {
    #[default]
    All,
    /// No assignee at all
    Unassigned,
    /// Waiting on the assistant
    AiWaiting,
    Resolved,
}

impl InboxFilter {
    pub const ALL: [InboxFilter; 4] = [
        Self::All,
        Self::Unassigned,
        Self::AiWaiting,
        Self::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Unassigned => "unassigned",
            Self::AiWaiting => "ai-waiting",
            Self::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Unassigned => "Unassigned",
            Self::AiWaiting => "AI Waiting",
            Self::Resolved => "Resolved",
        }
    }

    pub fn matches(&self, conversation: &Conversation) -> bool {
        match self {
            Self::All => true,
            Self::Unassigned => conversation.assigned_to.is_none(),
            Self::AiWaiting => {
                conversation.is_assigned_to_ai()
                    && conversation.status == ConversationStatus::Waiting
            }
            Self::Resolved => conversation.status == ConversationStatus::Resolved,
        }
    }
}

impl fmt::Display for InboxFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InboxFilter {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s.to_lowercase())
            .ok_or_else(|| {
                DeskError::unknown("inbox filter", s, "all, unassigned, ai-waiting, resolved")
            })
    }
}

/// Inbox query: a quick filter plus free-text search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboxQuery {
    pub filter: InboxFilter,
    pub search: SearchQuery,
}

impl InboxQuery {
    pub fn new(filter: InboxFilter, search: &str) -> Self {
        Self {
            filter,
            search: SearchQuery::new(search),
        }
    }

    /// Search covers customer name, customer email and the last message.
    pub fn matches_search(&self, conversation: &Conversation) -> bool {
        let last = conversation
            .last_message()
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        self.search.matches_any([
            conversation.customer.name.as_str(),
            conversation.customer.email.as_str(),
            last,
        ])
    }

    pub fn matches(&self, conversation: &Conversation) -> bool {
        self.filter.matches(conversation) && self.matches_search(conversation)
    }

    pub fn apply<'a>(&self, conversations: &'a [Conversation]) -> Vec<&'a Conversation> {
        conversations.iter().filter(|c| self.matches(c)).collect()
    }

    /// What to tell the user when nothing matched
    pub fn empty_message(&self) -> String {
        if self.search.is_empty() {
            "There are no conversations matching your filter criteria.".to_string()
        } else {
            format!("No conversations matching \"{}\"", self.search.as_str())
        }
    }
}

/// Column the customer table is sorted by
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CustomerSortKey {
    Name,
    SignupDate,
    #[default]
    LastActive,
    Conversations,
}

impl CustomerSortKey {
    pub const ALL: [CustomerSortKey; 4] = [
        Self::Name,
        Self::SignupDate,
        Self::LastActive,
        Self::Conversations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::SignupDate => "signupDate",
            Self::LastActive => "lastActive",
            Self::Conversations => "conversations",
        }
    }

    /// Ascending comparison on this key.
    pub fn compare(&self, a: &Customer, b: &Customer) -> Ordering {
        match self {
            Self::Name => collate(&a.name, &b.name),
            Self::SignupDate => a.signup_date.cmp(&b.signup_date),
            Self::LastActive => a.last_active.cmp(&b.last_active),
            Self::Conversations => a.conversations.cmp(&b.conversations),
        }
    }
}

/// Case-insensitive ordering with a case-sensitive tie-break.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl FromStr for CustomerSortKey {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase().replace(['-', '_'], "");
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().to_lowercase() == wanted)
            .ok_or_else(|| {
                DeskError::unknown(
                    "sort key",
                    s,
                    "name, signupDate, lastActive, conversations",
                )
            })
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(DeskError::unknown("sort order", s, "asc, desc")),
        }
    }
}

/// Customer directory query: search plus a single sort column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerQuery {
    pub search: SearchQuery,
    pub sort_by: CustomerSortKey,
    pub order: SortOrder,
}

impl CustomerQuery {
    pub fn new(search: &str, sort_by: CustomerSortKey, order: SortOrder) -> Self {
        Self {
            search: SearchQuery::new(search),
            sort_by,
            order,
        }
    }

    /// Column-header click: the active column flips direction, any other
    /// column becomes active in descending order.
    pub fn toggle(&mut self, column: CustomerSortKey) {
        if self.sort_by == column {
            self.order = self.order.flipped();
        } else {
            self.sort_by = column;
            self.order = SortOrder::Desc;
        }
    }

    /// Search covers name and email.
    pub fn matches(&self, customer: &Customer) -> bool {
        self.search
            .matches_any([customer.name.as_str(), customer.email.as_str()])
    }

    pub fn apply<'a>(&self, customers: &'a [Customer]) -> Vec<&'a Customer> {
        let mut result: Vec<&Customer> = customers.iter().filter(|c| self.matches(c)).collect();
        result.sort_by(|a, b| self.order.apply(self.sort_by.compare(a, b)));
        result
    }
}

/// "Showing N of M customers"
pub fn showing_summary(shown: usize, total: usize, noun: &str) -> String {
    format!("Showing {} of {} {}", shown, total, noun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn ids<T, F: Fn(&T) -> &str>(items: &[&T], id: F) -> Vec<String> {
        items.iter().map(|item| id(item).to_string()).collect()
    }

    #[test]
    fn test_inbox_filters() {
        let conversations = fixtures::conversations();
        let run = |filter| {
            ids(
                &InboxQuery::new(filter, "").apply(&conversations),
                |c: &Conversation| c.id.as_str(),
            )
        };

        assert_eq!(run(InboxFilter::All).len(), 5);
        assert_eq!(run(InboxFilter::Unassigned), vec!["chat-1", "chat-4"]);
        assert_eq!(run(InboxFilter::AiWaiting), vec!["chat-2", "chat-5"]);
        assert_eq!(run(InboxFilter::Resolved), vec!["chat-3"]);
    }

    #[test]
    fn test_inbox_search_covers_last_message() {
        let conversations = fixtures::conversations();

        let by_content = InboxQuery::new(InboxFilter::All, "PRO PLAN").apply(&conversations);
        assert_eq!(ids(&by_content, |c: &Conversation| c.id.as_str()), vec!["chat-5"]);

        // Only the last message is searched, not the whole transcript.
        let earlier = InboxQuery::new(InboxFilter::All, "export my data").apply(&conversations);
        assert!(earlier.is_empty());

        let by_email = InboxQuery::new(InboxFilter::All, "michael@").apply(&conversations);
        assert_eq!(ids(&by_email, |c: &Conversation| c.id.as_str()), vec!["chat-2"]);
    }

    #[test]
    fn test_inbox_predicates_commute() {
        let conversations = fixtures::conversations();
        let filter = InboxFilter::Unassigned;
        let search = SearchQuery::new("e");

        let filter_first: Vec<&Conversation> = conversations
            .iter()
            .filter(|c| filter.matches(c))
            .filter(|c| InboxQuery { filter: InboxFilter::All, search: search.clone() }.matches(c))
            .collect();
        let search_first: Vec<&Conversation> = conversations
            .iter()
            .filter(|c| InboxQuery { filter: InboxFilter::All, search: search.clone() }.matches(c))
            .filter(|c| filter.matches(c))
            .collect();

        assert_eq!(filter_first, search_first);

        let query = InboxQuery { filter, search };
        let once: Vec<Conversation> = query.apply(&conversations).into_iter().cloned().collect();
        let twice = query.apply(&once);
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn test_empty_message() {
        assert!(InboxQuery::new(InboxFilter::Resolved, "")
            .empty_message()
            .contains("filter criteria"));
        assert_eq!(
            InboxQuery::new(InboxFilter::All, "Refund").empty_message(),
            "No conversations matching \"Refund\""
        );
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("ai-waiting".parse::<InboxFilter>().unwrap(), InboxFilter::AiWaiting);
        assert_eq!("Resolved".parse::<InboxFilter>().unwrap(), InboxFilter::Resolved);
        assert!("starred".parse::<InboxFilter>().is_err());
    }

    #[test]
    fn test_default_customer_sort_is_last_active_desc() {
        let customers = fixtures::customers();
        let sorted = CustomerQuery::default().apply(&customers);
        let order = ids(&sorted, |c: &Customer| c.id.as_str());

        assert_eq!(order.first().map(String::as_str), Some("cust-7"));
        assert_eq!(order.last().map(String::as_str), Some("cust-8"));
    }

    #[test]
    fn test_reversed_direction_is_exact_reverse() {
        // every sort key is unique across the fixture customers
        let customers = fixtures::customers();

        for key in CustomerSortKey::ALL {
            let asc = CustomerQuery::new("", key, SortOrder::Asc).apply(&customers);
            let mut desc = CustomerQuery::new("", key, SortOrder::Desc).apply(&customers);
            desc.reverse();
            assert_eq!(asc, desc, "sort key {}", key.as_str());
        }
    }

    #[test]
    fn test_customer_search() {
        let customers = fixtures::customers();
        let query = CustomerQuery::new("WIL", CustomerSortKey::Name, SortOrder::Asc);
        let found = query.apply(&customers);

        assert_eq!(
            ids(&found, |c: &Customer| c.name.as_str()),
            vec!["Sarah Williams", "Thomas Wilson"]
        );
    }

    #[test]
    fn test_toggle_semantics() {
        let mut query = CustomerQuery::default();

        query.toggle(CustomerSortKey::LastActive);
        assert_eq!(query.order, SortOrder::Asc);

        query.toggle(CustomerSortKey::Name);
        assert_eq!(query.sort_by, CustomerSortKey::Name);
        assert_eq!(query.order, SortOrder::Desc);

        query.toggle(CustomerSortKey::Name);
        assert_eq!(query.order, SortOrder::Asc);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("signup-date".parse::<CustomerSortKey>().unwrap(), CustomerSortKey::SignupDate);
        assert_eq!("lastActive".parse::<CustomerSortKey>().unwrap(), CustomerSortKey::LastActive);
        assert!("email".parse::<CustomerSortKey>().is_err());
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_showing_summary() {
        assert_eq!(showing_summary(2, 8, "customers"), "Showing 2 of 8 customers");
    }
}
