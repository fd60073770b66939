//! Chat command - Open a conversation, send messages and wait for replies.

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::{info, warn};

use desk_core::view::{Alignment, TimelineItem};
use desk_core::{ChatSession, ConsoleConfig, CustomerRef, Desk};

#[derive(Args)]
pub struct ChatArgs {
    /// Inbox conversation id (e.g. chat-1)
    #[arg(required_unless_present = "customer", conflicts_with = "customer")]
    pub conversation: Option<String>,

    /// Open the conversation for a directory customer instead (e.g. cust-4)
    #[arg(long)]
    pub customer: Option<String>,

    /// Message to send as the agent; repeat to send several
    #[arg(short, long)]
    pub send: Vec<String>,

    /// Send AI suggestion N (1-3) after any --send messages
    #[arg(long, value_name = "N")]
    pub suggest: Option<usize>,

    /// List the AI suggestions
    #[arg(long)]
    pub suggestions: bool,

    /// Print the final conversation as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: ChatArgs, config: ConsoleConfig) -> Result<()> {
    let mut desk = Desk::simulated(config);

    let session = match (&args.conversation, &args.customer) {
        (Some(id), _) => desk
            .open_conversation(id)
            .await
            .with_context(|| format!("Failed to open conversation '{}'", id))?,
        (None, Some(customer)) => desk
            .open_customer(customer)
            .await
            .with_context(|| format!("Failed to open chat for customer '{}'", customer))?,
        (None, None) => bail!("Missing argument: conversation id or --customer"),
    };

    for text in &args.send {
        session.set_draft(text.as_str());
        if session.submit().is_none() {
            warn!("Skipping blank message");
        }
    }

    if let Some(number) = args.suggest {
        let index = suggestion_index(number, session.suggestions().len())?;
        session.insert_suggestion(index)?;
        session.submit();
    }

    if session.is_typing() {
        if !args.json {
            println!("⏳ AI Assistant is typing...");
        }
        session.wait_for_replies().await;
    }

    if args.json {
        super::print_json(&session.conversation())?;
    } else {
        print_session(session, args.suggestions);
    }

    if let Some(conversation) = desk.close() {
        info!(
            "Closed {} with {} messages",
            conversation.id,
            conversation.messages.len()
        );
    }
    Ok(())
}

/// Map the 1-based `--suggest` number onto a suggestion slot.
fn suggestion_index(number: usize, available: usize) -> Result<usize> {
    if number == 0 || number > available {
        bail!(
            "Invalid argument: --suggest {} (choose 1-{})",
            number,
            available
        );
    }
    Ok(number - 1)
}

/// Avatar badge: the picture link when there is one, else the initial.
fn avatar_badge(customer: &CustomerRef) -> String {
    match &customer.avatar {
        Some(url) => format!("🖼 {}", url),
        None => format!("({})", customer.initial()),
    }
}

fn print_session(session: &ChatSession, show_suggestions: bool) {
    let customer = session.customer();
    println!(
        "💬 {} {} <{}> [{}]",
        avatar_badge(customer),
        customer.name,
        customer.email,
        session.id()
    );
    println!();

    for item in session.timeline() {
        match item {
            TimelineItem::DaySeparator { label, .. } => {
                println!("{:─^64}", format!(" {} ", label));
            }
            TimelineItem::Message(view) => {
                let indent = match view.alignment {
                    Alignment::Left => "",
                    Alignment::Right => "                    ",
                };
                println!("{}{} · {}", indent, view.sender_label, view.time);
                for line in view.content.lines() {
                    println!("{}  {}", indent, line);
                }
            }
        }
    }

    if show_suggestions {
        println!();
        println!("✨ AI Suggestions");
        for (number, preview) in session.suggestion_previews().iter().enumerate() {
            println!("   {}. {}", number + 1, preview);
        }
    }
}
