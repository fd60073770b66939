//! Settings command - Show the settings panel.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::debug;

use desk_core::settings::TabContent;
use desk_core::{Settings, SettingsTab};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Args)]
pub struct SettingsArgs {
    /// Tab to show: general, profile, notifications, security, ai, chatbot, integrations
    #[arg(short, long)]
    tab: Option<SettingsTab>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "yaml")]
    format: OutputFormat,
}

pub async fn execute(args: SettingsArgs) -> Result<()> {
    let settings = Settings::default();
    settings.validate()?;

    match args.tab {
        Some(tab) => {
            debug!("Showing settings tab {}", tab.as_str());
            println!("⚙️  Settings - {}", tab.label());
            println!();
            match settings.tab(tab) {
                TabContent::ComingSoon { notice } => println!("   Coming Soon: {}", notice),
                content => print!("{}", render(&content, args.format)?),
            }
        }
        None => {
            println!("⚙️  Settings");
            for tab in SettingsTab::ALL {
                let marker = if tab.is_available() { "" } else { " (coming soon)" };
                println!("   - {}{}", tab.label(), marker);
            }
            println!();
            print!("{}", render(&settings, args.format)?);
        }
    }
    Ok(())
}

fn render<T: serde::Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to render YAML"),
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(|json| json + "\n")
            .context("Failed to render JSON"),
    }
}
