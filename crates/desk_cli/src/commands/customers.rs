//! Customers command - Customer directory table.

use anyhow::Result;
use clap::Args;
use tracing::info;

use desk_core::view::{format_date, relative_age_or_date};
use desk_core::{ConsoleConfig, CustomerQuery, CustomerSortKey, Desk, SortOrder};

#[derive(Args)]
pub struct CustomersArgs {
    /// Match customer name or email
    #[arg(short, long, default_value = "")]
    search: String,

    /// Sort column: name, signup-date, last-active, conversations
    #[arg(long, default_value = "last-active")]
    sort: CustomerSortKey,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "desc")]
    order: SortOrder,

    /// Print the matching customers as JSON
    #[arg(long)]
    json: bool,
}

pub async fn execute(args: CustomersArgs, config: ConsoleConfig) -> Result<()> {
    info!(
        "Loading customers (sort: {} {:?})",
        args.sort.as_str(),
        args.order
    );
    let desk = Desk::simulated(config);
    let query = CustomerQuery::new(&args.search, args.sort, args.order);
    let page = desk.customers(&query).await;

    if args.json {
        return super::print_json(&page.customers);
    }

    println!("👥 Customers");
    println!();

    if let Some(message) = page.empty_message() {
        println!("   {}", message);
    } else {
        println!(
            "   {:<18} {:<22} {:<14} {:<14} {:>6} {}",
            "Name", "Email", "Signed up", "Last active", "Chats", "Status"
        );
        let now = desk.now();
        for customer in &page.customers {
            println!(
                "   {:<18} {:<22} {:<14} {:<14} {:>6} {}",
                customer.name,
                customer.email,
                format_date(&customer.signup_date),
                relative_age_or_date(&customer.last_active, &now),
                customer.conversations,
                customer.status.label()
            );
        }
    }

    println!();
    println!("   {}", page.summary());
    Ok(())
}
