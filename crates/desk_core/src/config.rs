//! Console configuration: simulated latencies and the canned assistant reply.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DeskError, DeskResult};

/// Text the assistant appends after every agent message.
pub const DEFAULT_CANNED_REPLY: &str =
    "I'm analyzing your message and will provide assistance shortly. Is there anything specific you'd like me to help with?";

/// Console configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Simulated latency for list loads (conversations, customers, dashboard)
    pub list_latency_ms: u64,
    /// Delay before the assistant reply lands
    pub reply_delay_ms: u64,
    /// Assistant reply text
    pub canned_reply: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            list_latency_ms: 1000,
            reply_delay_ms: 2000,
            canned_reply: DEFAULT_CANNED_REPLY.to_string(),
        }
    }
}

impl ConsoleConfig {
    pub const ENV_LIST_LATENCY: &'static str = "DESK_LIST_LATENCY_MS";
    pub const ENV_REPLY_DELAY: &'static str = "DESK_REPLY_DELAY_MS";
    pub const ENV_CANNED_REPLY: &'static str = "DESK_CANNED_REPLY";

    pub fn list_latency(mut self, ms: u64) -> Self {
        self.list_latency_ms = ms;
        self
    }

    pub fn reply_delay(mut self, ms: u64) -> Self {
        self.reply_delay_ms = ms;
        self
    }

    pub fn canned_reply(mut self, text: impl Into<String>) -> Self {
        self.canned_reply = text.into();
        self
    }

    /// No simulated latency anywhere.
    pub fn instant() -> Self {
        Self::default().list_latency(0).reply_delay(0)
    }

    pub fn list_latency_duration(&self) -> Duration {
        Duration::from_millis(self.list_latency_ms)
    }

    pub fn reply_delay_duration(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> DeskResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> DeskResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from an optional TOML file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> DeskResult<Self> {
        let base = match path {
            Some(path) => {
                debug!("Loading console config from {}", path.display());
                let content = std::fs::read_to_string(path)?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (the process environment in
    /// production, a map in tests).
    pub fn with_overrides<F>(mut self, lookup: F) -> DeskResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(Self::ENV_LIST_LATENCY) {
            self.list_latency_ms = parse_millis(Self::ENV_LIST_LATENCY, &value)?;
        }
        if let Some(value) = lookup(Self::ENV_REPLY_DELAY) {
            self.reply_delay_ms = parse_millis(Self::ENV_REPLY_DELAY, &value)?;
        }
        if let Some(value) = lookup(Self::ENV_CANNED_REPLY) {
            if !value.trim().is_empty() {
                self.canned_reply = value;
            }
        }
        Ok(self)
    }
}

fn parse_millis(key: &str, value: &str) -> DeskResult<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| {
            DeskError::Config(format!(
                "{} must be a whole number of milliseconds, got '{}'",
                key, value
            ))
        })
}
