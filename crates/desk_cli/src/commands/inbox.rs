//! Inbox command - List conversations.

use anyhow::Result;
use clap::Args;
use tracing::info;

use desk_core::session::preview;
use desk_core::view::relative_age;
use desk_core::{ConsoleConfig, Desk, InboxFilter, InboxQuery};

/// Last-message preview width in the list
const PREVIEW_CHARS: usize = 48;

#[derive(Args)]
pub struct InboxArgs {
    /// Quick filter: all, unassigned, ai-waiting, resolved
    #[arg(short, long, default_value = "all")]
    filter: InboxFilter,

    /// Match customer name, email or last message
    #[arg(short, long, default_value = "")]
    search: String,

    /// Print the matching conversations as JSON
    #[arg(long)]
    json: bool,
}

pub async fn execute(args: InboxArgs, config: ConsoleConfig) -> Result<()> {
    info!("Loading inbox (filter: {})", args.filter);
    let desk = Desk::simulated(config);
    let query = InboxQuery::new(args.filter, &args.search);
    let page = desk.inbox(&query).await;

    if args.json {
        return super::print_json(&page);
    }

    println!("📥 Inbox - {}", args.filter.label());
    println!();

    if let Some(message) = &page.empty_message {
        println!("   {}", message);
        return Ok(());
    }

    let now = desk.now();
    for conversation in &page.conversations {
        let unread = if conversation.unread { "●" } else { " " };
        let (preview, age) = match conversation.last_message() {
            Some(last) => (
                preview(&last.content, PREVIEW_CHARS),
                relative_age(&last.timestamp, &now),
            ),
            None => (String::new(), String::new()),
        };

        println!(
            " {} {:<8} {:<18} {:<8} {:<8} {:>8}",
            unread,
            conversation.id,
            conversation.customer.name,
            conversation.status.label(),
            conversation.priority.map(|p| p.label()).unwrap_or("-"),
            age
        );
        if !preview.is_empty() {
            println!("            {}", preview);
        }
        if let Some(assignee) = &conversation.assigned_to {
            println!("            → {}", assignee);
        }
    }

    println!();
    println!(
        "   {} of {} conversations",
        page.conversations.len(),
        page.total
    );
    Ok(())
}
