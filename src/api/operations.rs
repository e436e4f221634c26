//! Account operation history.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::models::{BrokerAccountId, Figi, Operation, Operations};
use crate::{BrokerClient, Result};

/// Optional filters for [`BrokerClient::operations`].
///
/// # Example
///
/// ```
/// use tinkoff_rs::api::OperationsOptions;
///
/// let options = OperationsOptions::new()
///     .with_figi("BBG000B9XRY4")
///     .with_account("2000123456");
/// ```
#[derive(Debug, Default, Clone)]
pub struct OperationsOptions {
    /// Only operations on this instrument
    pub figi: Option<Figi>,
    /// Broker account; the server's default account when `None`
    pub account: Option<BrokerAccountId>,
}

impl OperationsOptions {
    /// Create options with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one instrument.
    pub fn with_figi(mut self, figi: impl Into<Figi>) -> Self {
        self.figi = Some(figi.into());
        self
    }

    /// Query a specific broker account.
    pub fn with_account(mut self, account: impl Into<BrokerAccountId>) -> Self {
        self.account = Some(account.into());
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OperationsQuery<'a> {
    from: String,
    to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    figi: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    broker_account_id: Option<&'a str>,
}

impl<'a> OperationsQuery<'a> {
    fn new(from: &DateTime<Utc>, to: &DateTime<Utc>, options: &'a OperationsOptions) -> Self {
        Self {
            from: iso_timestamp(from),
            to: iso_timestamp(to),
            figi: options.figi.as_ref().map(Figi::as_str),
            broker_account_id: options.account.as_ref().map(BrokerAccountId::as_str),
        }
    }
}

/// `2021-01-01T00:00:00.000Z`
fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl BrokerClient {
    /// List account operations between `from` and `to`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use chrono::{Duration, Utc};
    /// use tinkoff_rs::api::OperationsOptions;
    ///
    /// # async fn example(client: tinkoff_rs::BrokerClient) -> tinkoff_rs::Result<()> {
    /// let to = Utc::now();
    /// let from = to - Duration::days(30);
    /// let operations = client.operations(from, to, None).await?;
    ///
    /// let apple = OperationsOptions::new().with_figi("BBG000B9XRY4");
    /// let apple_ops = client.operations(from, to, Some(apple)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn operations(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        options: Option<OperationsOptions>,
    ) -> Result<Vec<Operation>> {
        let options = options.unwrap_or_default();
        let query = OperationsQuery::new(&from, &to, &options);
        let response: Operations = self.inner.get_with_query("/operations", &query).await?;
        Ok(response.operations)
    }
}
