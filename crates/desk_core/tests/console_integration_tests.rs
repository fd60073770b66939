//! Integration tests for the helpdesk console.

use std::sync::Arc;
use std::time::Duration;

use desk_core::{
    build_timeline,
    config::DEFAULT_CANNED_REPLY,
    fixtures, timestamp,
    view::day_starts,
    ChatSession, Clock, ConsoleConfig, Conversation, ConversationStatus, CustomerQuery,
    CustomerRef, CustomerSortKey, Desk, InboxFilter, InboxQuery, ManualClock, Message,
    SenderRole, SessionEvent, SimulatedSource, SortOrder, TimelineItem,
};

fn clock_at(hour: u32, minute: u32) -> Arc<ManualClock> {
    Arc::new(ManualClock::new(timestamp(2023, 5, 23, hour, minute)))
}

fn greeting_conversation() -> Conversation {
    Conversation::new(
        "chat-hello",
        CustomerRef::new("cust-1", "Emily Johnson", "emily@example.com"),
        ConversationStatus::Active,
    )
    .message(Message::new(
        1,
        SenderRole::Customer,
        "hi",
        timestamp(2023, 5, 23, 10, 0),
    ))
}

fn desk_at(clock: Arc<ManualClock>, config: ConsoleConfig) -> Desk {
    let source = Arc::new(SimulatedSource::from_config(&config));
    Desk::new(source, config, clock)
}

/// Agent writes, assistant answers two seconds later.
#[tokio::test(start_paused = true)]
async fn test_reply_workflow() {
    let clock = clock_at(10, 5);
    let mut session = ChatSession::open(
        greeting_conversation(),
        &ConsoleConfig::default(),
        clock.clone(),
    );
    let mut events = session.subscribe();

    session.set_draft("help me");
    let sent = session.submit().unwrap();

    assert_eq!(sent.id, 2);
    assert_eq!(sent.sender, SenderRole::Agent);
    assert_eq!(sent.timestamp, timestamp(2023, 5, 23, 10, 5));
    assert_eq!(session.len(), 2);
    assert_eq!(session.draft(), "");
    assert!(session.is_typing());

    // Not yet
    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert_eq!(session.len(), 2);

    clock.advance(chrono::Duration::seconds(2));
    tokio::time::sleep(Duration::from_millis(2)).await;

    assert_eq!(session.len(), 3);
    assert!(!session.is_typing());
    let reply = session.last_message().unwrap();
    assert_eq!(reply.id, 3);
    assert_eq!(reply.sender, SenderRole::Ai);
    assert_eq!(reply.content, DEFAULT_CANNED_REPLY);
    assert_eq!(reply.timestamp, clock.now());

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    assert!(matches!(seen[0], SessionEvent::MessageAppended(ref m) if m.id == 2));
    assert!(matches!(seen[1], SessionEvent::TypingChanged(true)));
    assert!(matches!(seen[2], SessionEvent::MessageAppended(ref m) if m.id == 3));
    assert!(matches!(seen[3], SessionEvent::TypingChanged(false)));

    let conversation = session.close();
    assert_eq!(conversation.messages.len(), 3);
}

/// Whitespace-only drafts never reach the transcript or the timer.
#[tokio::test(start_paused = true)]
async fn test_blank_draft_schedules_nothing() {
    let mut session = ChatSession::open(
        greeting_conversation(),
        &ConsoleConfig::default(),
        clock_at(10, 5),
    );

    for draft in ["", "   ", "\n\t"] {
        session.set_draft(draft);
        assert!(session.submit().is_none());
    }

    assert!(!session.is_typing());
    assert_eq!(session.pending_replies(), 0);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(session.len(), 1);
}

/// Each reply is scheduled independently; none are merged.
#[tokio::test(start_paused = true)]
async fn test_burst_of_messages_gets_one_reply_each() {
    let mut session = ChatSession::open(
        greeting_conversation(),
        &ConsoleConfig::default(),
        clock_at(10, 5),
    );

    for text in ["one", "two", "three"] {
        session.set_draft(text);
        session.submit();
        tokio::time::sleep(Duration::from_millis(500)).await;
    }
    assert_eq!(session.pending_replies(), 3);

    session.wait_for_replies().await;

    let messages = session.messages();
    assert_eq!(messages.len(), 7);
    assert_eq!(
        messages.iter().filter(|m| m.sender == SenderRole::Ai).count(),
        3
    );
    let ids: Vec<u64> = messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(!session.is_typing());
}

/// The typing indicator stays on until the last outstanding reply lands.
#[tokio::test(start_paused = true)]
async fn test_typing_stays_on_between_overlapping_replies() {
    let mut session = ChatSession::open(
        greeting_conversation(),
        &ConsoleConfig::default(),
        clock_at(10, 5),
    );
    let mut events = session.subscribe();

    session.set_draft("first");
    session.submit();
    tokio::time::sleep(Duration::from_millis(500)).await;
    session.set_draft("second");
    session.submit();

    // First reply is due at 2000ms, the second at 2500ms
    tokio::time::sleep(Duration::from_millis(1600)).await;
    assert_eq!(session.len(), 4);
    assert!(session.is_typing());
    assert_eq!(session.pending_replies(), 1);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(session.len(), 5);
    assert!(!session.is_typing());

    let mut typing = Vec::new();
    while let Ok(event) = events.try_recv() {
        if let SessionEvent::TypingChanged(on) = event {
            typing.push(on);
        }
    }
    assert_eq!(typing, vec![true, false]);
}

/// Leaving a conversation drops its pending replies.
#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_pending_replies() {
    let mut desk = desk_at(clock_at(12, 0), ConsoleConfig::default().list_latency(0));

    let session = desk.open_conversation("chat-4").await.unwrap();
    let before = session.len();
    session.set_draft("Checking the export now");
    session.submit();
    let mut events = session.subscribe();

    let closed = desk.close().unwrap();
    assert_eq!(closed.messages.len(), before + 1);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(matches!(events.try_recv(), Ok(SessionEvent::Closed)));
    assert!(events.try_recv().is_err());
    assert!(desk.active().is_none());
}

/// List fetches take the configured latency.
#[tokio::test(start_paused = true)]
async fn test_pages_load_after_latency() {
    let desk = desk_at(clock_at(12, 0), ConsoleConfig::default());
    let started = tokio::time::Instant::now();

    let page = desk.inbox(&InboxQuery::default()).await;

    assert_eq!(page.conversations.len(), 5);
    assert!(started.elapsed() >= Duration::from_millis(1000));
}

#[test]
fn test_inbox_filter_and_search_commute() {
    let conversations = fixtures::conversations();

    for filter in InboxFilter::ALL {
        for search in ["", "emily", "PASSWORD", "@example.com", "zzz"] {
            let combined: Vec<&str> = InboxQuery::new(filter, search)
                .apply(&conversations)
                .into_iter()
                .map(|c| c.id.as_str())
                .collect();

            let filtered: Vec<Conversation> = InboxQuery::new(filter, "")
                .apply(&conversations)
                .into_iter()
                .cloned()
                .collect();
            let searched_after: Vec<&str> = InboxQuery::new(InboxFilter::All, search)
                .apply(&filtered)
                .into_iter()
                .map(|c| c.id.as_str())
                .collect();

            assert_eq!(combined, searched_after, "filter={} search={}", filter, search);
        }
    }
}

#[test]
fn test_inbox_filter_is_idempotent() {
    let conversations = fixtures::conversations();
    let query = InboxQuery::new(InboxFilter::AiWaiting, "");

    let once: Vec<Conversation> = query.apply(&conversations).into_iter().cloned().collect();
    let twice: Vec<Conversation> = query.apply(&once).into_iter().cloned().collect();

    assert_eq!(once, twice);
    assert!(once.iter().all(|c| c.status == ConversationStatus::Waiting));
}

#[test]
fn test_customer_sort_reverses() {
    let customers = fixtures::customers();

    for key in CustomerSortKey::ALL {
        let asc: Vec<&str> = CustomerQuery::new("", key, SortOrder::Asc)
            .apply(&customers)
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        let mut desc: Vec<&str> = CustomerQuery::new("", key, SortOrder::Desc)
            .apply(&customers)
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        desc.reverse();

        assert_eq!(asc, desc, "sort key {}", key.as_str());
    }
}

#[test]
fn test_timeline_grouping_is_stable() {
    let messages: Vec<Message> = fixtures::conversations()
        .into_iter()
        .flat_map(|c| c.messages)
        .collect();

    let first = build_timeline(&messages, "Customer");
    let second = build_timeline(&messages, "Customer");
    assert_eq!(first, second);

    let separators = first
        .iter()
        .filter(|item| matches!(item, TimelineItem::DaySeparator { .. }))
        .count();
    assert_eq!(separators, day_starts(&messages).len());
    assert!(matches!(first[0], TimelineItem::DaySeparator { .. }));
}
