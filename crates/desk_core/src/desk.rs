//! The console: page loaders plus ownership of the open chat session.
//!
//! At most one conversation is open at a time. Opening another one, or
//! closing, tears the previous session down and cancels its pending
//! assistant replies.

use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::config::ConsoleConfig;
use crate::dashboard::Dashboard;
use crate::error::{DeskError, DeskResult};
use crate::fixtures;
use crate::query::{showing_summary, CustomerQuery, InboxQuery};
use crate::session::ChatSession;
use crate::source::{DataSource, SimulatedSource};
use crate::types::{Conversation, Customer};

/// Inbox page contents after filtering
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxPage {
    pub conversations: Vec<Conversation>,
    pub total: usize,
    /// Set when nothing matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// Customer table contents after search and sort
#[derive(Debug, Clone, Serialize)]
pub struct CustomerPage {
    pub customers: Vec<Customer>,
    pub total: usize,
}

impl CustomerPage {
    pub fn summary(&self) -> String {
        showing_summary(self.customers.len(), self.total, "customers")
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.customers.is_empty().then_some("No customers found.")
    }
}

pub struct Desk {
    source: Arc<dyn DataSource>,
    config: ConsoleConfig,
    clock: Arc<dyn Clock>,
    active: Option<ChatSession>,
}

impl Desk {
    pub fn new(source: Arc<dyn DataSource>, config: ConsoleConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            config,
            clock,
            active: None,
        }
    }

    /// Fixture-backed console on the system clock.
    pub fn simulated(config: ConsoleConfig) -> Self {
        let source = Arc::new(SimulatedSource::from_config(&config));
        Self::new(source, config, Arc::new(SystemClock))
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub async fn dashboard(&self) -> Dashboard {
        self.source.dashboard().await
    }

    pub async fn inbox(&self, query: &InboxQuery) -> InboxPage {
        let all = self.source.conversations().await;
        let conversations: Vec<Conversation> = query.apply(&all).into_iter().cloned().collect();
        let empty_message = conversations.is_empty().then(|| query.empty_message());

        InboxPage {
            total: all.len(),
            conversations,
            empty_message,
        }
    }

    pub async fn customers(&self, query: &CustomerQuery) -> CustomerPage {
        let all = self.source.customers().await;
        let customers = query.apply(&all).into_iter().cloned().collect();

        CustomerPage {
            total: all.len(),
            customers,
        }
    }

    /// Open an inbox conversation by id.
    pub async fn open_conversation(&mut self, id: &str) -> DeskResult<&mut ChatSession> {
        let conversation = self
            .source
            .conversations()
            .await
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| DeskError::ConversationNotFound(id.to_string()))?;
        Ok(self.open(conversation))
    }

    /// Open the placeholder conversation for a directory customer.
    pub async fn open_customer(&mut self, customer_id: &str) -> DeskResult<&mut ChatSession> {
        let customer = self
            .source
            .customers()
            .await
            .into_iter()
            .find(|c| c.id == customer_id)
            .ok_or_else(|| DeskError::CustomerNotFound(customer_id.to_string()))?;
        Ok(self.open(fixtures::placeholder_conversation(&customer)))
    }

    /// Make `conversation` the open session, closing any previous one.
    pub fn open(&mut self, conversation: Conversation) -> &mut ChatSession {
        self.close();
        info!("Opened conversation {} with {}", conversation.id, conversation.customer.name);
        let session = ChatSession::open(conversation, &self.config, Arc::clone(&self.clock));
        self.active.insert(session)
    }

    pub fn active(&mut self) -> Option<&mut ChatSession> {
        self.active.as_mut()
    }

    /// Close the open session, if any, returning its final state.
    pub fn close(&mut self) -> Option<Conversation> {
        self.active.take().map(ChatSession::close)
    }
}
