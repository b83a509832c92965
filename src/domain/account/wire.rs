//! Wire types for accounts and tradeable instruments.

use crate::domain::account::{AccountFinancingMode, GuaranteedStopLossOrderMode, InstrumentType};
use crate::domain::order::wire::Order;
use crate::domain::position::wire::Position;
use crate::domain::trade::wire::Trade;
use crate::shared::{
    AccountId, AccountUnits, DateTimeValue, DecimalNumber, InstrumentName, TransactionId,
};
use serde::Deserialize;

/// Properties of an account, as returned by the account list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProperties {
    pub id: AccountId,
    /// MT4 account number, present only for MT4-migrated accounts.
    #[serde(rename = "mt4AccountID")]
    pub mt4_account_id: Option<i32>,
    pub tags: Option<Vec<String>>,
}

/// The full state of an account, including open trades, positions, and
/// pending orders.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub alias: Option<String>,
    pub currency: Option<String>,
    pub balance: Option<AccountUnits>,
    #[serde(rename = "createdByUserID")]
    pub created_by_user_id: Option<i64>,
    pub created_time: Option<DateTimeValue>,
    #[serde(rename = "pl")]
    pub pl: Option<AccountUnits>,
    #[serde(rename = "resettablePL")]
    pub resettable_pl: Option<AccountUnits>,
    pub commission: Option<AccountUnits>,
    pub margin_rate: Option<DecimalNumber>,
    pub margin_call_enter_time: Option<DateTimeValue>,
    pub margin_call_extension_count: Option<u32>,
    pub last_margin_call_extension_time: Option<DateTimeValue>,
    pub open_trade_count: Option<u32>,
    pub open_position_count: Option<u32>,
    pub pending_order_count: Option<u32>,
    pub hedging_enabled: Option<bool>,
    #[serde(rename = "unrealizedPL")]
    pub unrealized_pl: Option<AccountUnits>,
    #[serde(rename = "NAV")]
    pub nav: Option<AccountUnits>,
    pub margin_used: Option<AccountUnits>,
    pub margin_available: Option<AccountUnits>,
    pub position_value: Option<AccountUnits>,
    pub margin_closeout_percent: Option<DecimalNumber>,
    pub withdrawal_limit: Option<AccountUnits>,
    pub financing_mode: Option<AccountFinancingMode>,
    pub guaranteed_stop_loss_order_mode: Option<GuaranteedStopLossOrderMode>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
    pub trades: Option<Vec<Trade>>,
    pub positions: Option<Vec<Position>>,
    pub orders: Option<Vec<Order>>,
}

/// A summary of an account, without the open trade/position/order lists.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: AccountId,
    pub alias: Option<String>,
    pub currency: Option<String>,
    pub balance: Option<AccountUnits>,
    #[serde(rename = "createdByUserID")]
    pub created_by_user_id: Option<i64>,
    pub created_time: Option<DateTimeValue>,
    #[serde(rename = "pl")]
    pub pl: Option<AccountUnits>,
    #[serde(rename = "resettablePL")]
    pub resettable_pl: Option<AccountUnits>,
    pub margin_rate: Option<DecimalNumber>,
    pub open_trade_count: Option<u32>,
    pub open_position_count: Option<u32>,
    pub pending_order_count: Option<u32>,
    pub hedging_enabled: Option<bool>,
    #[serde(rename = "unrealizedPL")]
    pub unrealized_pl: Option<AccountUnits>,
    #[serde(rename = "NAV")]
    pub nav: Option<AccountUnits>,
    pub margin_used: Option<AccountUnits>,
    pub margin_available: Option<AccountUnits>,
    pub position_value: Option<AccountUnits>,
    pub withdrawal_limit: Option<AccountUnits>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// The specification of a tradeable instrument.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub name: InstrumentName,
    #[serde(rename = "type")]
    pub kind: InstrumentType,
    pub display_name: Option<String>,
    /// Location of the decimal point in prices for this instrument.
    pub pip_location: Option<i32>,
    pub display_precision: Option<u32>,
    pub trade_units_precision: Option<u32>,
    pub minimum_trade_size: Option<DecimalNumber>,
    pub maximum_trailing_stop_distance: Option<DecimalNumber>,
    pub minimum_trailing_stop_distance: Option<DecimalNumber>,
    pub maximum_position_size: Option<DecimalNumber>,
    pub maximum_order_units: Option<DecimalNumber>,
    pub margin_rate: Option<DecimalNumber>,
}

/// Changes to an account's orders, trades, and positions since a given
/// transaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountChanges {
    pub orders_created: Option<Vec<Order>>,
    pub orders_cancelled: Option<Vec<Order>>,
    pub orders_filled: Option<Vec<Order>>,
    pub orders_triggered: Option<Vec<Order>>,
    pub trades_opened: Option<Vec<Trade>>,
    pub trades_reduced: Option<Vec<Trade>>,
    pub trades_closed: Option<Vec<Trade>>,
    pub positions: Option<Vec<Position>>,
    pub transactions: Option<Vec<crate::domain::transaction::Transaction>>,
}

/// The price-dependent parts of an account's state.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountChangesState {
    #[serde(rename = "unrealizedPL")]
    pub unrealized_pl: Option<AccountUnits>,
    #[serde(rename = "NAV")]
    pub nav: Option<AccountUnits>,
    pub margin_used: Option<AccountUnits>,
    pub margin_available: Option<AccountUnits>,
    pub position_value: Option<AccountUnits>,
    pub margin_closeout_percent: Option<DecimalNumber>,
    pub withdrawal_limit: Option<AccountUnits>,
}
