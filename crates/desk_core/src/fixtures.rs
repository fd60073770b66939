//! Built-in sample data served by the mock data source.

use crate::dashboard::{
    Activity, ActivityKind, ChangeType, Dashboard, Insight, InsightKind, StatCard, Trend,
    TrendSeries,
};
use crate::types::{
    timestamp, Conversation, ConversationStatus, Customer, CustomerRef, CustomerStatus, Message,
    Priority, SenderRole,
};

fn customer(
    id: &str,
    name: &str,
    email: &str,
    signup: chrono::NaiveDateTime,
    last_active: chrono::NaiveDateTime,
    conversations: u32,
    status: CustomerStatus,
) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        signup_date: signup,
        last_active,
        conversations,
        status,
        avatar: None,
    }
}

/// The customer directory.
pub fn customers() -> Vec<Customer> {
    use CustomerStatus::*;
    vec![
        customer(
            "cust-1",
            "Emily Johnson",
            "emily@example.com",
            timestamp(2023, 2, 15, 10, 30),
            timestamp(2023, 5, 23, 10, 25),
            8,
            Active,
        ),
        customer(
            "cust-2",
            "Michael Smith",
            "michael@example.com",
            timestamp(2023, 1, 20, 14, 15),
            timestamp(2023, 5, 23, 9, 42),
            5,
            Active,
        ),
        customer(
            "cust-3",
            "Sarah Williams",
            "sarah@example.com",
            timestamp(2022, 11, 5, 9, 20),
            timestamp(2023, 5, 22, 16, 10),
            12,
            Active,
        ),
        customer(
            "cust-4",
            "David Brown",
            "david@example.com",
            timestamp(2023, 4, 12, 11, 45),
            timestamp(2023, 5, 23, 8, 15),
            2,
            New,
        ),
        customer(
            "cust-5",
            "Jessica Miller",
            "jessica@example.com",
            timestamp(2022, 9, 30, 16, 20),
            timestamp(2023, 5, 22, 11, 30),
            7,
            Active,
        ),
        customer(
            "cust-6",
            "Thomas Wilson",
            "thomas@example.com",
            timestamp(2023, 3, 5, 13, 10),
            timestamp(2023, 5, 20, 15, 45),
            3,
            Inactive,
        ),
        customer(
            "cust-7",
            "Olivia Davis",
            "olivia@example.com",
            timestamp(2023, 5, 1, 10, 0),
            timestamp(2023, 5, 23, 14, 30),
            1,
            New,
        ),
        customer(
            "cust-8",
            "James Taylor",
            "james@example.com",
            timestamp(2022, 8, 15, 9, 30),
            timestamp(2023, 5, 15, 11, 20),
            15,
            Inactive,
        ),
    ]
}

/// The inbox.
pub fn conversations() -> Vec<Conversation> {
    let emily = CustomerRef::new("cust-1", "Emily Johnson", "emily@example.com");
    let michael = CustomerRef::new("cust-2", "Michael Smith", "michael@example.com");
    let sarah = CustomerRef::new("cust-3", "Sarah Williams", "sarah@example.com");
    let david = CustomerRef::new("cust-4", "David Brown", "david@example.com");
    let jessica = CustomerRef::new("cust-5", "Jessica Miller", "jessica@example.com");

    vec![
        Conversation::new("chat-1", emily, ConversationStatus::Active)
            .unread(true)
            .priority(Priority::High)
            .message(Message::new(
                1,
                SenderRole::Customer,
                "I'm having trouble with my payment. Can you help?",
                timestamp(2023, 5, 23, 10, 25),
            )),
        Conversation::new("chat-2", michael, ConversationStatus::Waiting)
            .assigned_to("AI Assistant")
            .message(Message::new(
                1,
                SenderRole::Customer,
                "The login page keeps loading indefinitely",
                timestamp(2023, 5, 23, 9, 40),
            ))
            .message(Message::new(
                2,
                SenderRole::Ai,
                "I'll need a bit more information to help troubleshoot this. Can you tell me what operating system and browser you're using?",
                timestamp(2023, 5, 23, 9, 42),
            )),
        Conversation::new("chat-3", sarah, ConversationStatus::Resolved)
            .assigned_to("John Agent")
            .message(Message::new(
                1,
                SenderRole::Customer,
                "I need to change my subscription plan",
                timestamp(2023, 5, 22, 15, 55),
            ))
            .message(Message::new(
                2,
                SenderRole::Agent,
                "I can help with that. Which plan would you like to switch to?",
                timestamp(2023, 5, 22, 15, 58),
            ))
            .message(Message::new(
                3,
                SenderRole::Agent,
                "Great! Glad we could resolve this for you. Feel free to reach out if you have any other questions.",
                timestamp(2023, 5, 22, 16, 10),
            )),
        Conversation::new("chat-4", david, ConversationStatus::Active)
            .unread(true)
            .priority(Priority::Medium)
            .message(Message::new(
                1,
                SenderRole::Customer,
                "I can't export my data to CSV",
                timestamp(2023, 5, 23, 8, 0),
            ))
            .message(Message::new(
                2,
                SenderRole::Ai,
                "I understand how frustrating that can be. Let's try clearing your browser cache first and then attempt the export again.",
                timestamp(2023, 5, 23, 8, 5),
            ))
            .message(Message::new(
                4,
                SenderRole::Customer,
                "Thanks for the quick response! I'll try that and let you know if it works.",
                timestamp(2023, 5, 23, 8, 15),
            )),
        Conversation::new("chat-5", jessica, ConversationStatus::Waiting)
            .assigned_to("AI Assistant")
            .message(Message::new(
                1,
                SenderRole::Customer,
                "I'd like to upgrade my account to the Pro plan",
                timestamp(2023, 5, 22, 11, 20),
            ))
            .message(Message::new(
                5,
                SenderRole::Ai,
                "Your account has been successfully upgraded to the Pro plan. You should now have access to all the premium features.",
                timestamp(2023, 5, 22, 11, 30),
            )),
    ]
}

/// Conversation opened from the customer directory.
///
/// The directory has no link to real conversations, so selecting a
/// customer opens a short canned exchange under `chat-<customer id>`.
pub fn placeholder_conversation(customer: &Customer) -> Conversation {
    Conversation::new(
        format!("chat-{}", customer.id),
        customer.to_ref(),
        ConversationStatus::Active,
    )
    .message(Message::new(
        1,
        SenderRole::Customer,
        "Hello, I need some help with your product.",
        timestamp(2023, 5, 20, 14, 30),
    ))
    .message(Message::new(
        2,
        SenderRole::Ai,
        "I'd be happy to help! What specific issue are you experiencing?",
        timestamp(2023, 5, 20, 14, 31),
    ))
}

fn activity(id: &str, kind: ActivityKind, content: &str, time: &str) -> Activity {
    Activity {
        id: id.to_string(),
        kind,
        content: content.to_string(),
        time: time.to_string(),
    }
}

fn insight(id: &str, kind: InsightKind, title: &str, description: &str, time: &str) -> Insight {
    Insight {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind,
        time: time.to_string(),
    }
}

/// The dashboard page.
pub fn dashboard() -> Dashboard {
    Dashboard {
        stats: vec![
            StatCard::new("Active Conversations", "28").change("+12%", ChangeType::Positive),
            StatCard::new("Total Customers", "3,942").change("+5.2%", ChangeType::Positive),
            StatCard::new("AI Resolutions", "67%").change("+8.4%", ChangeType::Positive),
            // A falling response time is good news.
            StatCard::new("Avg. Response Time", "1.4m").change("-16%", ChangeType::Positive),
        ],
        activity: vec![
            activity(
                "act1",
                ActivityKind::Message,
                "New message from Sarah Johnson",
                "5 minutes ago",
            ),
            activity("act2", ActivityKind::User, "Jane Smith signed up", "12 minutes ago"),
            activity(
                "act3",
                ActivityKind::Status,
                "AI resolved support ticket #4528",
                "25 minutes ago",
            ),
            activity("act4", ActivityKind::Message, "Alex replied to a conversation", "1 hour ago"),
            activity("act5", ActivityKind::User, "Marcus Weber signed up", "2 hours ago"),
        ],
        insights: vec![
            insight(
                "ins1",
                InsightKind::Info,
                "Conversation Volume Increased",
                "There was a 24% increase in conversation volume compared to last week.",
                "2 hours ago",
            ),
            insight(
                "ins2",
                InsightKind::Positive,
                "Customer Satisfaction Improving",
                "CSAT scores have improved by 8% over the last 30 days.",
                "1 day ago",
            ),
            insight(
                "ins3",
                InsightKind::Warning,
                "Common Issue Detected",
                "18 conversations mentioned \"payment failure\" in the last 24 hours.",
                "4 hours ago",
            ),
            insight(
                "ins4",
                InsightKind::Negative,
                "Response Time Decreasing",
                "Average first response time decreased by 12% this week.",
                "1 day ago",
            ),
        ],
        trend: Trend {
            labels: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]
            .iter()
            .map(|m| m.to_string())
            .collect(),
            series: vec![
                TrendSeries {
                    label: "Total".to_string(),
                    points: vec![15, 30, 25, 55, 45, 65, 40, 80, 75, 95, 85, 100],
                },
                TrendSeries {
                    label: "AI Resolved".to_string(),
                    points: vec![10, 20, 15, 35, 30, 40, 25, 45, 40, 50, 45, 60],
                },
            ],
        },
    }
}
