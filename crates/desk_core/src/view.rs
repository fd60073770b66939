//! View projection over a transcript: day separators, sender labels and
//! display strings. Everything here is a pure function of its inputs and
//! is re-derived on every change.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::types::{Message, MessageId, SenderRole};

/// Label shown for assistant messages
pub const ASSISTANT_LABEL: &str = "AI Assistant";
/// Label shown for the console user's own messages
pub const AGENT_LABEL: &str = "You";

/// `10:25` (two-digit 24-hour clock)
pub fn format_time(ts: &NaiveDateTime) -> String {
    ts.format("%H:%M").to_string()
}

/// `May 23, 2023`
pub fn format_date(ts: &NaiveDateTime) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Round half up, matching how the console has always rounded ages.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Age buckets as rounded whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Age {
    minutes: i64,
    hours: i64,
    days: i64,
}

impl Age {
    fn between(then: &NaiveDateTime, now: &NaiveDateTime) -> Self {
        let ms = (*now - *then).num_milliseconds() as f64;
        Self {
            minutes: round_half_up(ms / 60_000.0),
            hours: round_half_up(ms / 3_600_000.0),
            days: round_half_up(ms / 86_400_000.0),
        }
    }
}

/// Relative age for list rows: `5m ago`, `3h ago`, `2d ago`.
pub fn relative_age(then: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let age = Age::between(then, now);
    if age.minutes < 60 {
        format!("{}m ago", age.minutes)
    } else if age.hours < 24 {
        format!("{}h ago", age.hours)
    } else {
        format!("{}d ago", age.days)
    }
}

/// Like [`relative_age`], but falls back to the calendar date once the
/// age reaches 30 days.
pub fn relative_age_or_date(then: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let age = Age::between(then, now);
    if age.hours >= 24 && age.days >= 30 {
        format_date(then)
    } else {
        relative_age(then, now)
    }
}

/// Which side of the transcript a bubble sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
}

impl Alignment {
    pub fn for_sender(sender: SenderRole) -> Self {
        match sender {
            SenderRole::Customer => Self::Left,
            SenderRole::Agent | SenderRole::Ai => Self::Right,
        }
    }
}

/// Display name for a sender; customers show under their own name.
pub fn sender_label(sender: SenderRole, customer_name: &str) -> &str {
    match sender {
        SenderRole::Customer => customer_name,
        SenderRole::Ai => ASSISTANT_LABEL,
        SenderRole::Agent => AGENT_LABEL,
    }
}

/// A message ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: MessageId,
    pub sender: SenderRole,
    pub sender_label: String,
    pub alignment: Alignment,
    pub time: String,
    pub content: String,
}

/// One row of the rendered transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TimelineItem {
    DaySeparator { date: NaiveDate, label: String },
    Message(MessageView),
}

/// Indices of messages that start a new calendar day.
///
/// The first message always starts a day; after that a message starts one
/// when its date differs from the message right before it (not from the
/// latest date seen so far).
pub fn day_starts(messages: &[Message]) -> Vec<usize> {
    messages
        .iter()
        .enumerate()
        .filter(|(index, message)| {
            *index == 0 || messages[index - 1].timestamp.date() != message.timestamp.date()
        })
        .map(|(index, _)| index)
        .collect()
}

/// Project a transcript into separator and message rows.
pub fn build_timeline(messages: &[Message], customer_name: &str) -> Vec<TimelineItem> {
    let starts = day_starts(messages);
    let mut items = Vec::with_capacity(messages.len() + starts.len());

    for (index, message) in messages.iter().enumerate() {
        if starts.binary_search(&index).is_ok() {
            items.push(TimelineItem::DaySeparator {
                date: message.timestamp.date(),
                label: format_date(&message.timestamp),
            });
        }
        items.push(TimelineItem::Message(MessageView {
            id: message.id,
            sender: message.sender,
            sender_label: sender_label(message.sender, customer_name).to_string(),
            alignment: Alignment::for_sender(message.sender),
            time: format_time(&message.timestamp),
            content: message.content.clone(),
        }));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::timestamp;
    use chrono::Duration;

    fn msg(id: MessageId, sender: SenderRole, at: NaiveDateTime) -> Message {
        Message::new(id, sender, format!("m{}", id), at)
    }

    #[test]
    fn test_formatting() {
        let ts = timestamp(2023, 5, 3, 9, 5);
        assert_eq!(format_time(&ts), "09:05");
        assert_eq!(format_date(&ts), "May 3, 2023");
    }

    #[test]
    fn test_day_starts() {
        let messages = vec![
            msg(1, SenderRole::Customer, timestamp(2023, 5, 22, 15, 55)),
            msg(2, SenderRole::Agent, timestamp(2023, 5, 22, 23, 59)),
            msg(3, SenderRole::Agent, timestamp(2023, 5, 23, 0, 1)),
            msg(4, SenderRole::Ai, timestamp(2023, 5, 23, 8, 0)),
        ];
        assert_eq!(day_starts(&messages), vec![0, 2]);
        assert!(day_starts(&[]).is_empty());
    }

    #[test]
    fn test_out_of_order_dates_repeat_separators() {
        let messages = vec![
            msg(1, SenderRole::Customer, timestamp(2023, 5, 23, 10, 0)),
            msg(2, SenderRole::Customer, timestamp(2023, 5, 22, 10, 0)),
            msg(3, SenderRole::Customer, timestamp(2023, 5, 23, 11, 0)),
        ];
        assert_eq!(day_starts(&messages), vec![0, 1, 2]);
    }

    #[test]
    fn test_build_timeline_is_idempotent() {
        let messages = vec![
            msg(1, SenderRole::Customer, timestamp(2023, 5, 20, 14, 30)),
            msg(2, SenderRole::Ai, timestamp(2023, 5, 20, 14, 31)),
            msg(3, SenderRole::Agent, timestamp(2023, 5, 21, 9, 0)),
        ];

        let first = build_timeline(&messages, "Emily Johnson");
        let second = build_timeline(&messages, "Emily Johnson");
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);

        match &first[0] {
            TimelineItem::DaySeparator { label, .. } => assert_eq!(label, "May 20, 2023"),
            other => panic!("expected separator, got {:?}", other),
        }
        match &first[1] {
            TimelineItem::Message(view) => {
                assert_eq!(view.sender_label, "Emily Johnson");
                assert_eq!(view.alignment, Alignment::Left);
                assert_eq!(view.time, "14:30");
            }
            other => panic!("expected message, got {:?}", other),
        }
        match &first[4] {
            TimelineItem::Message(view) => {
                assert_eq!(view.sender_label, AGENT_LABEL);
                assert_eq!(view.alignment, Alignment::Right);
            }
            other => panic!("expected message, got {:?}", other),
        }
    }

    #[test]
    fn test_relative_age_buckets() {
        let now = timestamp(2023, 5, 23, 12, 0);

        assert_eq!(relative_age(&(now - Duration::minutes(5)), &now), "5m ago");
        assert_eq!(relative_age(&(now - Duration::minutes(59)), &now), "59m ago");
        // 60 minutes rounds to 1 hour
        assert_eq!(relative_age(&(now - Duration::minutes(60)), &now), "1h ago");
        assert_eq!(relative_age(&(now - Duration::minutes(90)), &now), "2h ago");
        assert_eq!(relative_age(&(now - Duration::hours(23)), &now), "23h ago");
        assert_eq!(relative_age(&(now - Duration::hours(36)), &now), "2d ago");
        assert_eq!(relative_age(&(now - Duration::days(45)), &now), "45d ago");
    }

    #[test]
    fn test_relative_age_or_date_switches_after_thirty_days() {
        let now = timestamp(2023, 6, 30, 12, 0);
        let recent = now - Duration::days(29);
        let old = timestamp(2023, 5, 15, 11, 20);

        assert_eq!(relative_age_or_date(&recent, &now), "29d ago");
        assert_eq!(relative_age_or_date(&old, &now), "May 15, 2023");
        assert_eq!(relative_age_or_date(&(now - Duration::minutes(3)), &now), "3m ago");
    }
}
