//! CLI command definitions.
//!
//! Each subcommand renders one page of the console.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

pub mod chat;
pub mod customers;
pub mod dashboard;
pub mod inbox;
pub mod settings;

/// Helpdesk console - customer support inbox with an AI assistant
#[derive(Parser)]
#[command(name = "desk")]
#[command(version, about = "Helpdesk console - customer support inbox with an AI assistant")]
#[command(long_about = r#"
Terminal front end for the helpdesk console. Data comes from built-in
sample records served after a simulated network delay.

PAGES:
  dashboard   → Headline stats, recent activity, insights and trend
  inbox       → Conversations with quick filters and search
  customers   → Customer directory with search and sorting
  chat        → Open a conversation, send messages, wait for the assistant
  settings    → Company and assistant settings

ENVIRONMENT:
  DESK_CONFIG            Configuration file (same as --config)
  DESK_LIST_LATENCY_MS   Simulated fetch delay (default 1000)
  DESK_REPLY_DELAY_MS    Assistant reply delay (default 2000)
  DESK_CANNED_REPLY      Assistant reply text

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or unknown conversation/customer
  3 - Configuration error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// TOML configuration file
    #[arg(short, long, global = true, env = "DESK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard
    Dashboard(dashboard::DashboardArgs),

    /// List inbox conversations
    Inbox(inbox::InboxArgs),

    /// List customers
    Customers(customers::CustomersArgs),

    /// Open a conversation
    Chat(chat::ChatArgs),

    /// Show settings
    Settings(settings::SettingsArgs),
}

/// Pretty JSON to stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
