//! Dashboard snapshot: headline stats, recent activity, AI insights and the
//! conversation trend.

use serde::{Deserialize, Serialize};

/// Direction of a stat's change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Positive,
    Negative,
    Neutral,
}

/// A headline number with its period-over-period change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
    pub change_type: ChangeType,
}

impl StatCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: None,
            change_type: ChangeType::Neutral,
        }
    }

    pub fn change(mut self, change: impl Into<String>, change_type: ChangeType) -> Self {
        self.change = Some(change.into());
        self.change_type = change_type;
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Message,
    User,
    Status,
}

/// An entry in the recent-activity feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub content: String,
    /// Pre-rendered age, e.g. `5 minutes ago`
    pub time: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Info,
    Positive,
    Warning,
    Negative,
}

/// A generated observation about support traffic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insight {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub time: String,
}

/// One line of the trend chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendSeries {
    pub label: String,
    pub points: Vec<u32>,
}

impl TrendSeries {
    pub fn peak(&self) -> u32 {
        self.points.iter().copied().max().unwrap_or(0)
    }
}

/// Monthly conversation volume
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trend {
    pub labels: Vec<String>,
    pub series: Vec<TrendSeries>,
}

impl Trend {
    /// Whether every series has one point per label
    pub fn is_aligned(&self) -> bool {
        self.series.iter().all(|s| s.points.len() == self.labels.len())
    }
}

/// Everything the dashboard page shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dashboard {
    pub stats: Vec<StatCard>,
    pub activity: Vec<Activity>,
    pub insights: Vec<Insight>,
    pub trend: Trend,
}
