//! Dashboard command - Headline stats, activity, insights and trend.

use anyhow::Result;
use clap::Args;
use tracing::info;

use desk_core::dashboard::{ChangeType, Dashboard, InsightKind};
use desk_core::{ConsoleConfig, Desk};

#[derive(Args)]
pub struct DashboardArgs {
    /// Print the raw dashboard as JSON
    #[arg(long)]
    json: bool,
}

pub async fn execute(args: DashboardArgs, config: ConsoleConfig) -> Result<()> {
    info!("Loading dashboard");
    let desk = Desk::simulated(config);
    let dashboard = desk.dashboard().await;

    if args.json {
        return super::print_json(&dashboard);
    }

    print_dashboard(&dashboard);
    Ok(())
}

fn change_marker(change_type: ChangeType) -> &'static str {
    match change_type {
        ChangeType::Positive => "▲",
        ChangeType::Negative => "▼",
        ChangeType::Neutral => "•",
    }
}

fn insight_marker(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Info => "ℹ️ ",
        InsightKind::Positive => "✅",
        InsightKind::Warning => "⚠️ ",
        InsightKind::Negative => "❌",
    }
}

fn print_dashboard(dashboard: &Dashboard) {
    println!("📊 Dashboard");
    println!();
    for stat in &dashboard.stats {
        match &stat.change {
            Some(change) => println!(
                "   {:<24} {:>8}  {} {}",
                stat.title,
                stat.value,
                change_marker(stat.change_type),
                change
            ),
            None => println!("   {:<24} {:>8}", stat.title, stat.value),
        }
    }

    println!();
    println!("🕒 Recent Activity");
    for entry in &dashboard.activity {
        println!("   - {} ({})", entry.content, entry.time);
    }

    println!();
    println!("💡 AI Insights");
    for insight in &dashboard.insights {
        println!("   {} {} ({})", insight_marker(insight.kind), insight.title, insight.time);
        println!("      {}", insight.description);
    }

    println!();
    println!("📈 Conversation Trend");
    let trend = &dashboard.trend;
    let scale = trend.series.iter().map(|s| s.peak()).max().unwrap_or(0).max(1);
    for series in &trend.series {
        println!("   {}", series.label);
        for (label, points) in trend.labels.iter().zip(&series.points) {
            let width = (*points as usize * 40) / scale as usize;
            println!("      {:<4} {:<40} {}", label, "█".repeat(width), points);
        }
    }
}
