//! Settings panel snapshot.
//!
//! Only the General and AI Assistant tabs carry content; the rest are
//! placeholders. Nothing here is persisted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DeskError, DeskResult};

/// Settings tabs in display order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    General,
    Profile,
    Notifications,
    Security,
    Ai,
    Chatbot,
    Integrations,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 7] = [
        Self::General,
        Self::Profile,
        Self::Notifications,
        Self::Security,
        Self::Ai,
        Self::Chatbot,
        Self::Integrations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Profile => "profile",
            Self::Notifications => "notifications",
            Self::Security => "security",
            Self::Ai => "ai",
            Self::Chatbot => "chatbot",
            Self::Integrations => "integrations",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Profile => "Your Profile",
            Self::Notifications => "Notifications",
            Self::Security => "Security",
            Self::Ai => "AI Assistant",
            Self::Chatbot => "Chatbot",
            Self::Integrations => "Integrations",
        }
    }

    /// Whether the tab has real content yet
    pub fn is_available(&self) -> bool {
        matches!(self, Self::General | Self::Ai)
    }
}

impl fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SettingsTab {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == wanted)
            .ok_or_else(|| {
                DeskError::unknown(
                    "settings tab",
                    s,
                    "general, profile, notifications, security, ai, chatbot, integrations",
                )
            })
    }
}

/// Company, branding and chat widget settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    pub company_name: String,
    pub website: String,
    pub industry: String,
    pub company_size: String,
    /// `#RRGGBB`
    pub primary_color: String,
    pub welcome_message: String,
    pub offline_support: bool,
    pub automated_messages: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            company_name: "BeyondChats".to_string(),
            website: "https://beyondchats.com".to_string(),
            industry: "Software & Technology".to_string(),
            company_size: "1-10 employees".to_string(),
            primary_color: "#387CFF".to_string(),
            welcome_message: "👋 Hi there! How can we help you today?".to_string(),
            offline_support: true,
            automated_messages: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    Professional,
    Friendly,
    Casual,
    Technical,
    Custom,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnglishUs,
    #[serde(rename = "en-GB")]
    EnglishUk,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "ja")]
    Japanese,
}

/// Assistant persona and hand-off behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    pub assistant_name: String,
    pub personality: Personality,
    pub language: Language,
    /// The assistant answers before a human picks the conversation up
    pub ai_first_response: bool,
    /// Hand the conversation to a human below the confidence threshold
    pub human_handoff: bool,
    /// Percent, 0..=100
    pub confidence_threshold: u8,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            assistant_name: "BeyondChats AI".to_string(),
            personality: Personality::default(),
            language: Language::default(),
            ai_first_response: true,
            human_handoff: true,
            confidence_threshold: 75,
        }
    }
}

/// Everything the settings panel shows
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub general: GeneralSettings,
    pub ai: AiSettings,
}

/// What a single tab renders
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TabContent<'a> {
    General(&'a GeneralSettings),
    Ai(&'a AiSettings),
    ComingSoon { notice: &'static str },
}

pub const COMING_SOON: &str =
    "This section is currently under development and will be available soon.";

impl Settings {
    pub fn validate(&self) -> DeskResult<()> {
        if self.ai.confidence_threshold > 100 {
            return Err(DeskError::InvalidSettings(format!(
                "confidence threshold must be between 0 and 100, got {}",
                self.ai.confidence_threshold
            )));
        }
        if !is_hex_color(&self.general.primary_color) {
            return Err(DeskError::InvalidSettings(format!(
                "primary color must look like #RRGGBB, got '{}'",
                self.general.primary_color
            )));
        }
        if self.ai.assistant_name.trim().is_empty() {
            return Err(DeskError::InvalidSettings(
                "assistant name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn tab(&self, tab: SettingsTab) -> TabContent<'_> {
        match tab {
            SettingsTab::General => TabContent::General(&self.general),
            SettingsTab::Ai => TabContent::Ai(&self.ai),
            _ => TabContent::ComingSoon {
                notice: COMING_SOON,
            },
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
