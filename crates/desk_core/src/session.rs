//! Chat detail session: the transcript, the draft box and the simulated
//! assistant reply.
//!
//! Submitting a draft appends the agent's message right away and schedules
//! one assistant reply per submission after the configured delay. Replies
//! are never coalesced. Each scheduled reply is tracked, and closing or
//! dropping the session cancels the ones still outstanding so nothing is
//! appended to a conversation nobody is looking at.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::broadcast;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::config::ConsoleConfig;
use crate::error::{DeskError, DeskResult};
use crate::transcript::Transcript;
use crate::types::{
    Conversation, ConversationId, ConversationStatus, CustomerRef, Message, Priority, SenderRole,
};
use crate::view::{build_timeline, TimelineItem};

/// Canned responses offered in the suggestion panel
pub const SUGGESTIONS: [&str; 3] = [
    "I understand your concern. Let me check your account details.",
    "Thank you for providing that information. I'll look into this right away.",
    "I apologize for the inconvenience. We'll get this resolved as soon as possible.",
];

/// Suggestion previews are cut to this many characters
pub const SUGGESTION_PREVIEW_CHARS: usize = 50;

const EVENT_CAPACITY: usize = 64;

/// Cut `text` to `max` characters, marking the cut with `...`.
pub fn preview(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// Change notifications for whoever renders the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum SessionEvent {
    MessageAppended(Message),
    /// The typing indicator turned on or off
    TypingChanged(bool),
    Closed,
}

#[derive(Debug)]
struct Shared {
    transcript: Transcript,
    /// Replies scheduled but not yet appended
    pending: usize,
    closed: bool,
}

/// Conversation fields the session carries but never changes
#[derive(Debug, Clone)]
struct Header {
    id: ConversationId,
    customer: CustomerRef,
    status: ConversationStatus,
    unread: bool,
    assigned_to: Option<String>,
    priority: Option<Priority>,
}

/// An open conversation in the chat detail view.
///
/// Must be used inside a tokio runtime: submitting spawns the reply timer.
pub struct ChatSession {
    header: Header,
    shared: Arc<Mutex<Shared>>,
    draft: String,
    show_suggestions: bool,
    replies: JoinSet<()>,
    reply_delay: Duration,
    canned_reply: Arc<str>,
    clock: Arc<dyn Clock>,
    events: broadcast::Sender<SessionEvent>,
}

impl ChatSession {
    /// Open a conversation, taking ownership of its transcript.
    pub fn open(conversation: Conversation, config: &ConsoleConfig, clock: Arc<dyn Clock>) -> Self {
        let Conversation {
            id,
            customer,
            status,
            messages,
            unread,
            assigned_to,
            priority,
        } = conversation;

        debug!("Opening conversation {} ({} messages)", id, messages.len());

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            header: Header {
                id,
                customer,
                status,
                unread,
                assigned_to,
                priority,
            },
            shared: Arc::new(Mutex::new(Shared {
                transcript: Transcript::from_messages(messages),
                pending: 0,
                closed: false,
            })),
            draft: String::new(),
            show_suggestions: false,
            replies: JoinSet::new(),
            reply_delay: config.reply_delay_duration(),
            canned_reply: Arc::from(config.canned_reply.as_str()),
            clock,
            events,
        }
    }

    pub fn id(&self) -> &str {
        &self.header.id
    }

    pub fn customer(&self) -> &CustomerRef {
        &self.header.customer
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Send the draft.
    ///
    /// A blank or whitespace-only draft does nothing and schedules nothing.
    /// Otherwise the draft (as typed, not trimmed) is appended as an agent
    /// message, the draft box is cleared and an assistant reply is
    /// scheduled. Returns the appended agent message.
    pub fn submit(&mut self) -> Option<Message> {
        if self.draft.trim().is_empty() {
            debug!("Ignoring blank draft in {}", self.header.id);
            return None;
        }

        let content = std::mem::take(&mut self.draft);
        let (message, typing_started) = {
            let mut shared = self.shared.lock();
            let message = shared
                .transcript
                .append(SenderRole::Agent, content, self.clock.now());
            shared.pending += 1;
            (message, shared.pending == 1)
        };

        info!("Agent message {} sent in {}", message.id, self.header.id);
        let _ = self.events.send(SessionEvent::MessageAppended(message.clone()));
        if typing_started {
            let _ = self.events.send(SessionEvent::TypingChanged(true));
        }

        self.schedule_reply();
        Some(message)
    }

    /// Drop reply tasks that already finished so the set only holds
    /// outstanding timers.
    fn reap_finished(&mut self) {
        while let Some(result) = self.replies.try_join_next() {
            self.log_join_failure(result);
        }
    }

    fn log_join_failure(&self, result: Result<(), JoinError>) {
        if let Err(err) = result {
            if err.is_panic() {
                warn!("Reply task in {} panicked: {}", self.header.id, err);
            }
        }
    }

    fn schedule_reply(&mut self) {
        self.reap_finished();

        let shared = Arc::clone(&self.shared);
        let clock = Arc::clone(&self.clock);
        let events = self.events.clone();
        let text = Arc::clone(&self.canned_reply);
        let delay = self.reply_delay;
        let conversation = self.header.id.clone();

        debug!("Assistant reply scheduled in {}ms", delay.as_millis());
        self.replies.spawn(async move {
            tokio::time::sleep(delay).await;

            let (reply, still_typing) = {
                let mut shared = shared.lock();
                if shared.closed {
                    return;
                }
                let reply = shared
                    .transcript
                    .append(SenderRole::Ai, text.as_ref(), clock.now());
                shared.pending = shared.pending.saturating_sub(1);
                (reply, shared.pending > 0)
            };

            debug!("Assistant reply {} appended to {}", reply.id, conversation);
            let _ = events.send(SessionEvent::MessageAppended(reply));
            if !still_typing {
                let _ = events.send(SessionEvent::TypingChanged(false));
            }
        });
    }

    /// Typing indicator: on while any reply is outstanding
    pub fn is_typing(&self) -> bool {
        self.shared.lock().pending > 0
    }

    pub fn pending_replies(&self) -> usize {
        self.shared.lock().pending
    }

    /// Wait until every scheduled reply has landed.
    pub async fn wait_for_replies(&mut self) {
        while let Some(result) = self.replies.join_next().await {
            self.log_join_failure(result);
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        self.shared.lock().transcript.messages().to_vec()
    }

    pub fn len(&self) -> usize {
        self.shared.lock().transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn last_message(&self) -> Option<Message> {
        self.shared.lock().transcript.last().cloned()
    }

    /// Rows for rendering, separators included
    pub fn timeline(&self) -> Vec<TimelineItem> {
        let shared = self.shared.lock();
        build_timeline(shared.transcript.messages(), &self.header.customer.name)
    }

    pub fn suggestions(&self) -> &'static [&'static str] {
        &SUGGESTIONS
    }

    pub fn suggestion_previews(&self) -> Vec<String> {
        SUGGESTIONS
            .iter()
            .map(|s| preview(s, SUGGESTION_PREVIEW_CHARS))
            .collect()
    }

    pub fn suggestions_visible(&self) -> bool {
        self.show_suggestions
    }

    pub fn toggle_suggestions(&mut self) {
        self.show_suggestions = !self.show_suggestions;
    }

    /// Replace the draft with a suggestion and hide the panel.
    pub fn insert_suggestion(&mut self, index: usize) -> DeskResult<()> {
        let suggestion = SUGGESTIONS
            .get(index)
            .ok_or(DeskError::SuggestionOutOfRange {
                index,
                available: SUGGESTIONS.len(),
            })?;
        self.draft = suggestion.to_string();
        self.show_suggestions = false;
        Ok(())
    }

    /// Snapshot of the conversation as it stands now
    pub fn conversation(&self) -> Conversation {
        Conversation {
            id: self.header.id.clone(),
            customer: self.header.customer.clone(),
            status: self.header.status,
            messages: self.messages(),
            unread: self.header.unread,
            assigned_to: self.header.assigned_to.clone(),
            priority: self.header.priority,
        }
    }

    /// Tear the session down, cancelling outstanding replies, and hand
    /// back the final conversation.
    pub fn close(mut self) -> Conversation {
        self.shutdown();
        self.conversation()
    }

    fn shutdown(&mut self) {
        let cancelled = {
            let mut shared = self.shared.lock();
            if shared.closed {
                return;
            }
            shared.closed = true;
            std::mem::take(&mut shared.pending)
        };
        self.replies.abort_all();

        if cancelled > 0 {
            info!("Cancelled {} pending replies in {}", cancelled, self.header.id);
        }
        let _ = self.events.send(SessionEvent::Closed);
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
