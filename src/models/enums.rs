//! Enumeration types for the OpenAPI.
//!
//! Variant names match the wire strings exactly, so no renames are needed.
//! Enums that only ever arrive from the server carry an `Unknown` fallback.

use serde::{Deserialize, Serialize};

/// Kind of market instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentType {
    /// Share
    Stock,
    /// Currency pair traded on the exchange
    Currency,
    /// Bond
    Bond,
    /// Exchange-traded fund
    Etf,
    /// Value not known to this version of the crate
    #[serde(other)]
    Unknown,
}

/// Currency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Russian ruble
    Rub,
    /// US dollar
    Usd,
    /// Euro
    Eur,
    /// Pound sterling
    Gbp,
    /// Hong Kong dollar
    Hkd,
    /// Swiss franc
    Chf,
    /// Japanese yen
    Jpy,
    /// Chinese yuan
    Cny,
    /// Turkish lira
    Try,
    /// Value not known to this version of the crate
    #[serde(other)]
    Unknown,
}

/// Settlement state of an account operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationStatus {
    /// Completed
    Done,
    /// Declined
    Decline,
    /// Still in progress
    Progress,
    /// Value not known to this version of the crate
    #[serde(other)]
    Unknown,
}

/// Kind of account operation, including commissions and cash movements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationTypeWithCommission {
    /// Purchase of securities
    Buy,
    /// Purchase paid directly from a bank card
    BuyCard,
    /// Sale of securities
    Sell,
    /// Broker fee
    BrokerCommission,
    /// Exchange fee
    ExchangeCommission,
    /// Service fee
    ServiceCommission,
    /// Margin lending fee
    MarginCommission,
    /// Any other fee
    OtherCommission,
    /// Cash deposit
    PayIn,
    /// Cash withdrawal
    PayOut,
    /// Tax withholding
    Tax,
    /// Tax on realised profit
    TaxLucre,
    /// Tax on dividends
    TaxDividend,
    /// Tax on coupons
    TaxCoupon,
    /// Tax refund
    TaxBack,
    /// Bond redemption
    Repayment,
    /// Partial bond redemption
    PartRepayment,
    /// Coupon payment
    Coupon,
    /// Dividend payment
    Dividend,
    /// Securities transferred in
    SecurityIn,
    /// Securities transferred out
    SecurityOut,
    /// Value not known to this version of the crate
    #[serde(other)]
    Unknown,
}

impl OperationTypeWithCommission {
    /// Returns `true` for the commission-type operations.
    pub fn is_commission(&self) -> bool {
        matches!(
            self,
            Self::BrokerCommission
                | Self::ExchangeCommission
                | Self::ServiceCommission
                | Self::MarginCommission
                | Self::OtherCommission
        )
    }

    /// Returns `true` for tax withholdings and refunds.
    pub fn is_tax(&self) -> bool {
        matches!(
            self,
            Self::Tax | Self::TaxLucre | Self::TaxDividend | Self::TaxCoupon | Self::TaxBack
        )
    }
}

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    /// Buy
    Buy,
    /// Sell
    Sell,
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Accepted, not filled yet
    New,
    /// Partially filled
    PartiallyFill,
    /// Completely filled
    Fill,
    /// Cancelled
    Cancelled,
    /// Replaced by another order
    Replaced,
    /// Cancellation in progress
    PendingCancel,
    /// Rejected
    Rejected,
    /// Replacement in progress
    PendingReplace,
    /// Waiting to be accepted
    PendingNew,
    /// Value not known to this version of the crate
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Returns `true` if the order can still be filled or cancelled.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            OrderStatus::New
                | OrderStatus::PartiallyFill
                | OrderStatus::PendingNew
                | OrderStatus::PendingReplace
                | OrderStatus::PendingCancel
        )
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Limit order
    Limit,
    /// Market order
    Market,
    /// Value not known to this version of the crate
    #[serde(other)]
    Unknown,
}

/// Kind of broker account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrokerAccountType {
    /// Regular brokerage account
    Tinkoff,
    /// Individual investment account (IIS)
    TinkoffIis,
    /// Value not known to this version of the crate
    #[serde(other)]
    Unknown,
}
