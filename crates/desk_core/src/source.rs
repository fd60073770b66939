//! Data source seam for the console's list pages.
//!
//! There is no backend: [`SimulatedSource`] waits out a fixed latency and
//! hands back the built-in fixtures. Fetches cannot fail.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::ConsoleConfig;
use crate::dashboard::Dashboard;
use crate::fixtures;
use crate::types::{Conversation, Customer};

/// Where the console loads its lists from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn conversations(&self) -> Vec<Conversation>;

    async fn customers(&self) -> Vec<Customer>;

    async fn dashboard(&self) -> Dashboard;
}

/// Fixture-backed source with simulated network latency.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    latency: Duration,
}

impl SimulatedSource {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::new(config.list_latency_duration())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn simulate(&self, what: &str) {
        debug!("Fetching {} ({}ms simulated latency)", what, self.latency.as_millis());
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::from_config(&ConsoleConfig::default())
    }
}

#[async_trait]
impl DataSource for SimulatedSource {
    async fn conversations(&self) -> Vec<Conversation> {
        self.simulate("conversations").await;
        let conversations = fixtures::conversations();
        info!("Loaded {} conversations", conversations.len());
        conversations
    }

    async fn customers(&self) -> Vec<Customer> {
        self.simulate("customers").await;
        let customers = fixtures::customers();
        info!("Loaded {} customers", customers.len());
        customers
    }

    async fn dashboard(&self) -> Dashboard {
        self.simulate("dashboard").await;
        fixtures::dashboard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_latency() {
        let source = SimulatedSource::new(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();

        let conversations = source.conversations().await;

        assert_eq!(conversations.len(), 5);
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn test_zero_latency_returns_immediately() {
        let source = SimulatedSource::from_config(&ConsoleConfig::instant());
        assert_eq!(source.latency(), Duration::ZERO);
        assert_eq!(source.customers().await.len(), 8);
        assert_eq!(source.dashboard().await.insights.len(), 4);
    }
}
