//! Helpdesk console CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments or unknown conversation/customer
//! - 3: Configuration error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use desk_core::{ConsoleConfig, DeskError};

mod commands;

use commands::{Cli, Commands};

/// Script-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const CONFIG_ERROR: u8 = 3;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let (crate_level, floor) = if cli.verbose {
        ("desk=debug", "info")
    } else if cli.quiet {
        ("desk=error", "error")
    } else {
        ("desk=info", "warn")
    };
    let mut filter = EnvFilter::from_default_env();
    for directive in [crate_level, floor] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    // Already initialized is fine
    let _ = tracing_subscriber::registry()
        .with(
            (!cli.log_json)
                .then(|| fmt::layer().with_target(false).with_writer(std::io::stderr)),
        )
        .with(
            cli.log_json
                .then(|| fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(filter)
        .try_init();

    let result = match ConsoleConfig::load(cli.config.as_deref()) {
        Ok(config) => run(cli.command, config).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

async fn run(command: Commands, config: ConsoleConfig) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard(args) => commands::dashboard::execute(args, config).await,
        Commands::Inbox(args) => commands::inbox::execute(args, config).await,
        Commands::Customers(args) => commands::customers::execute(args, config).await,
        Commands::Chat(args) => commands::chat::execute(args, config).await,
        Commands::Settings(args) => commands::settings::execute(args).await,
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if let Some(err) = e.downcast_ref::<DeskError>() {
        return match err {
            DeskError::Config(_) | DeskError::Io(_) => ExitCodes::CONFIG_ERROR,
            DeskError::ConversationNotFound(_)
            | DeskError::CustomerNotFound(_)
            | DeskError::UnknownVariant { .. }
            | DeskError::SuggestionOutOfRange { .. } => ExitCodes::INVALID_ARGS,
            DeskError::InvalidSettings(_) => ExitCodes::GENERAL_ERROR,
        };
    }

    let msg = e.to_string().to_lowercase();
    if msg.contains("configuration") {
        ExitCodes::CONFIG_ERROR
    } else if msg.contains("argument") || msg.contains("not found") {
        ExitCodes::INVALID_ARGS
    } else {
        ExitCodes::GENERAL_ERROR
    }
}
