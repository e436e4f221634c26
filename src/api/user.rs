//! Broker accounts of the token owner.

use crate::models::{UserAccount, UserAccounts};
use crate::{BrokerClient, Result};

impl BrokerClient {
    /// List the broker accounts available to this token.
    pub async fn accounts(&self) -> Result<Vec<UserAccount>> {
        let response: UserAccounts = self.inner.get("/user/accounts").await?;
        Ok(response.accounts)
    }
}
