//! Place a limit order far below the market, list it, then cancel it.
//!
//! Always run this against the sandbox:
//!
//! Run with: TINKOFF_TOKEN=t.... TINKOFF_SANDBOX=1 cargo run --example place_order

use rust_decimal_macros::dec;
use tinkoff_rs::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let client = BrokerClient::from_env()?;
    if !client.base_url().ends_with("/sandbox") {
        println!("Refusing to place orders outside the sandbox (set TINKOFF_SANDBOX=1)");
        return Ok(());
    }

    // AAPL
    let figi = Figi::new("BBG000B9XRY4");

    let order = PlaceLimitOrderOptions::new(figi, OperationType::Buy, 1, dec!(10.00));
    println!("Placing limit order...");
    let placed = match client.place_limit_order(&order).await {
        Ok(placed) => placed,
        Err(err) if err.is_client_error() => {
            println!("Order rejected: {}", err);
            return Ok(());
        }
        Err(err) => return Err(err),
    };
    println!("Order {} is {:?}", placed.order_id, placed.status);
    if let Some(reason) = &placed.reject_reason {
        println!("  reject reason: {}", reason);
    }

    for active in client.active_orders(None).await? {
        println!(
            "  active {} {:?} {}/{} @ {}",
            active.order_id,
            active.operation,
            active.executed_lots,
            active.requested_lots,
            active.price
        );
    }

    if placed.status.is_active() {
        client.cancel_order(&placed.order_id, None).await?;
        println!("Cancelled {}", placed.order_id);
    }

    Ok(())
}
