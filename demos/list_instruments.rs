//! List tradable instruments by kind.
//!
//! Run with: TINKOFF_TOKEN=t.... TINKOFF_SANDBOX=1 cargo run --example list_instruments

use tinkoff_rs::BrokerClient;

#[tokio::main]
async fn main() -> tinkoff_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client = BrokerClient::from_env()?;
    println!("Connected to {}\n", client.base_url());

    let stocks = client.stocks().await?;
    println!("=== Stocks ({}) ===", stocks.len());
    for stock in stocks.iter().take(10) {
        println!(
            "{:<8} {:<14} lot {:<5} step {:?} {}",
            stock.ticker,
            stock.figi,
            stock.lot,
            stock.min_price_increment,
            stock.name
        );
    }

    println!("\nBonds:      {}", client.bonds().await?.len());
    println!("ETFs:       {}", client.etfs().await?.len());

    let currencies = client.currencies().await?;
    println!("Currencies: {}", currencies.len());
    for currency in &currencies {
        println!("  {:<14} {}", currency.figi, currency.name);
    }

    Ok(())
}
