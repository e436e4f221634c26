//! Broker account models.

use serde::{Deserialize, Serialize};

use super::enums::BrokerAccountType;
use super::primitives::BrokerAccountId;

/// A broker account belonging to the token owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Kind of account
    pub broker_account_type: BrokerAccountType,
    /// Account identifier, usable as `brokerAccountId` in other calls
    pub broker_account_id: BrokerAccountId,
}

/// Payload of `GET /user/accounts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccounts {
    /// Accounts of the token owner
    pub accounts: Vec<UserAccount>,
}
