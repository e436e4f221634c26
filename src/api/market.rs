//! Instrument listings.

use crate::models::{MarketInstrument, MarketInstrumentList};
use crate::{BrokerClient, Result};

impl BrokerClient {
    /// List all stocks available for trading.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: tinkoff_rs::BrokerClient) -> tinkoff_rs::Result<()> {
    /// for stock in client.stocks().await? {
    ///     println!("{} ({}): lot of {}", stock.ticker, stock.figi, stock.lot);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn stocks(&self) -> Result<Vec<MarketInstrument>> {
        self.market_instruments("/market/stocks").await
    }

    /// List all bonds available for trading.
    pub async fn bonds(&self) -> Result<Vec<MarketInstrument>> {
        self.market_instruments("/market/bonds").await
    }

    /// List all ETFs available for trading.
    pub async fn etfs(&self) -> Result<Vec<MarketInstrument>> {
        self.market_instruments("/market/etfs").await
    }

    /// List all exchange-traded currency pairs.
    pub async fn currencies(&self) -> Result<Vec<MarketInstrument>> {
        self.market_instruments("/market/currencies").await
    }

    async fn market_instruments(&self, path: &str) -> Result<Vec<MarketInstrument>> {
        let list: MarketInstrumentList = self.inner.get(path).await?;
        Ok(list.instruments)
    }
}
