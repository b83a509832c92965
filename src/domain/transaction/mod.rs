//! Transaction domain: the account's audit trail of every state change.

#[cfg(feature = "http")]
pub mod client;
pub mod requests;
pub mod wire;

pub use wire::Transaction;

use serde::{Deserialize, Serialize};

/// The reason a Market Order was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketOrderReason {
    ClientOrder,
    TradeClose,
    PositionCloseout,
    MarginCloseout,
    DelayedTradeClose,
}

/// The reason a Limit or Stop Order was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PendingOrderReason {
    ClientOrder,
    Replacement,
}

/// The reason a Take Profit, Stop Loss, or Trailing Stop Loss Order was
/// initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DependentOrderReason {
    ClientOrder,
    Replacement,
    OnFill,
}
