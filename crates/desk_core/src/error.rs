//! Error types for the console core.

use thiserror::Error;

/// Result type alias for console operations.
pub type DeskResult<T> = Result<T, DeskError>;

/// Errors that can occur at the edges of the console.
///
/// Simulated fetches and reply timers never fail; everything here comes
/// from lookups, user-supplied strings, or configuration.
#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Conversation not found: {0}")]
    ConversationNotFound(String),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Unknown {kind}: {value} (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Suggestion index {index} out of range (have {available})")]
    SuggestionOutOfRange { index: usize, available: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeskError {
    pub(crate) fn unknown(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

impl From<toml::de::Error> for DeskError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

