//! Portfolio positions.

use super::AccountQuery;
use crate::models::{BrokerAccountId, Currencies, CurrencyPosition, Portfolio, PortfolioPosition};
use crate::{BrokerClient, Result};

impl BrokerClient {
    /// Get security positions.
    pub async fn portfolio(
        &self,
        account: Option<&BrokerAccountId>,
    ) -> Result<Vec<PortfolioPosition>> {
        let response: Portfolio = self
            .inner
            .get_with_query("/portfolio", &AccountQuery::new(account))
            .await?;
        Ok(response.positions)
    }

    /// Get cash positions per currency.
    pub async fn currency_portfolio(
        &self,
        account: Option<&BrokerAccountId>,
    ) -> Result<Vec<CurrencyPosition>> {
        let response: Currencies = self
            .inner
            .get_with_query("/portfolio/currencies", &AccountQuery::new(account))
            .await?;
        Ok(response.currencies)
    }
}
