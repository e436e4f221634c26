//! Print positions, cash and last month's operations for every account.
//!
//! Run with: TINKOFF_TOKEN=t.... cargo run --example portfolio_overview

use chrono::{Duration, Utc};
use tinkoff_rs::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let client = BrokerClient::from_env()?;

    for account in client.accounts().await? {
        let id = &account.broker_account_id;
        println!("=== {} ({:?}) ===", id, account.broker_account_type);

        for position in client.portfolio(Some(id)).await? {
            println!(
                "  {:<10} {:>10} units  yield {:?}",
                position.ticker.as_deref().unwrap_or("-"),
                position.balance,
                position.expected_yield.map(|y| y.value)
            );
        }

        for cash in client.currency_portfolio(Some(id)).await? {
            println!("  {:?}: {} available of {}", cash.currency, cash.available(), cash.balance);
        }

        let to = Utc::now();
        let from = to - Duration::days(30);
        let operations = client
            .operations(from, to, Some(OperationsOptions::new().with_account(id.clone())))
            .await?;
        let commissions = operations
            .iter()
            .filter(|op| op.operation_type.map_or(false, |t| t.is_commission()))
            .count();
        println!(
            "  {} operations in the last 30 days, {} of them commissions\n",
            operations.len(),
            commissions
        );
    }

    Ok(())
}
