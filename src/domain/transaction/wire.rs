//! Wire types for transactions.
//!
//! The backend models transactions as a deep class hierarchy (every reject
//! transaction extends its base order transaction). Here that is a single
//! tagged union dispatched on the `type` discriminant: shared fields live in
//! [`TransactionCommon`] and are flattened into each variant payload, and
//! reject variants flatten their base payload plus a `rejectReason`.

use super::{DependentOrderReason, MarketOrderReason, PendingOrderReason};
use crate::domain::order::{
    ClientExtensions, OrderPositionFill, OrderTriggerCondition, StopLossDetails,
    TakeProfitDetails, TimeInForce, TrailingStopLossDetails,
};
use crate::shared::{
    AccountId, AccountUnits, ClientId, DateTimeValue, DecimalNumber, InstrumentName, OrderId,
    PriceValue, TradeId, TransactionId, Units,
};
use serde::Deserialize;

/// Fields shared by every transaction kind.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionCommon {
    pub id: TransactionId,
    pub time: DateTimeValue,
    #[serde(rename = "userID")]
    pub user_id: Option<i64>,
    #[serde(rename = "accountID")]
    pub account_id: Option<AccountId>,
    #[serde(rename = "batchID")]
    pub batch_id: Option<TransactionId>,
    #[serde(rename = "requestID")]
    pub request_id: Option<String>,
}

/// A single transaction, dispatched on the `type` discriminant.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Transaction {
    #[serde(rename = "CREATE")]
    Create(CreateTransaction),
    #[serde(rename = "CLIENT_CONFIGURE")]
    ClientConfigure(ClientConfigureTransaction),
    #[serde(rename = "CLIENT_CONFIGURE_REJECT")]
    ClientConfigureReject(ClientConfigureRejectTransaction),
    #[serde(rename = "MARKET_ORDER")]
    MarketOrder(MarketOrderTransaction),
    #[serde(rename = "MARKET_ORDER_REJECT")]
    MarketOrderReject(MarketOrderRejectTransaction),
    #[serde(rename = "LIMIT_ORDER")]
    LimitOrder(LimitOrderTransaction),
    #[serde(rename = "LIMIT_ORDER_REJECT")]
    LimitOrderReject(LimitOrderRejectTransaction),
    #[serde(rename = "STOP_ORDER")]
    StopOrder(StopOrderTransaction),
    #[serde(rename = "STOP_ORDER_REJECT")]
    StopOrderReject(StopOrderRejectTransaction),
    #[serde(rename = "TAKE_PROFIT_ORDER")]
    TakeProfitOrder(TakeProfitOrderTransaction),
    #[serde(rename = "STOP_LOSS_ORDER")]
    StopLossOrder(StopLossOrderTransaction),
    #[serde(rename = "TRAILING_STOP_LOSS_ORDER")]
    TrailingStopLossOrder(TrailingStopLossOrderTransaction),
    #[serde(rename = "ORDER_FILL")]
    OrderFill(OrderFillTransaction),
    #[serde(rename = "ORDER_CANCEL")]
    OrderCancel(OrderCancelTransaction),
    #[serde(rename = "ORDER_CLIENT_EXTENSIONS_MODIFY")]
    OrderClientExtensionsModify(OrderClientExtensionsModifyTransaction),
    #[serde(rename = "TRADE_CLIENT_EXTENSIONS_MODIFY")]
    TradeClientExtensionsModify(TradeClientExtensionsModifyTransaction),
    /// A transaction kind this SDK does not model yet. The payload is
    /// dropped; only the envelope survives.
    #[serde(other)]
    Unsupported,
}

impl Transaction {
    /// The shared envelope, when the kind is modeled.
    pub fn common(&self) -> Option<&TransactionCommon> {
        match self {
            Self::Create(t) => Some(&t.common),
            Self::ClientConfigure(t) => Some(&t.common),
            Self::ClientConfigureReject(t) => Some(&t.base.common),
            Self::MarketOrder(t) => Some(&t.common),
            Self::MarketOrderReject(t) => Some(&t.base.common),
            Self::LimitOrder(t) => Some(&t.common),
            Self::LimitOrderReject(t) => Some(&t.base.common),
            Self::StopOrder(t) => Some(&t.common),
            Self::StopOrderReject(t) => Some(&t.base.common),
            Self::TakeProfitOrder(t) => Some(&t.common),
            Self::StopLossOrder(t) => Some(&t.common),
            Self::TrailingStopLossOrder(t) => Some(&t.common),
            Self::OrderFill(t) => Some(&t.common),
            Self::OrderCancel(t) => Some(&t.common),
            Self::OrderClientExtensionsModify(t) => Some(&t.common),
            Self::TradeClientExtensionsModify(t) => Some(&t.common),
            Self::Unsupported => None,
        }
    }
}

/// Account creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(rename = "divisionID")]
    pub division_id: Option<i64>,
    #[serde(rename = "siteID")]
    pub site_id: Option<i64>,
    #[serde(rename = "accountUserID")]
    pub account_user_id: Option<i64>,
    pub account_number: Option<i64>,
    pub home_currency: Option<String>,
}

/// Account configuration change.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigureTransaction {
    #[serde(flatten)]
    pub common: TransactionCommon,
    pub alias: Option<String>,
    pub margin_rate: Option<DecimalNumber>,
}

/// Rejected account configuration change.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfigureRejectTransaction {
    #[serde(flatten)]
    pub base: ClientConfigureTransaction,
    #[serde(rename = "rejectReason")]
    pub reject_reason: Option<String>,
}

/// Details of the trade a Market Order explicitly closes. Only present when
/// the order was created for that purpose.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderTradeClose {
    #[serde(rename = "tradeID")]
    pub trade_id: TradeId,
    #[serde(rename = "clientTradeID")]
    pub client_trade_id: Option<ClientId>,
    /// `"ALL"` or a decimal number of units.
    pub units: Option<String>,
}

/// Details of the position a Market Order explicitly closes out.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderPositionCloseout {
    pub instrument: InstrumentName,
    /// `"ALL"` or a decimal number of units.
    pub units: Option<String>,
}

/// Details of the margin closeout a Market Order was created for.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderMarginCloseout {
    pub reason: Option<String>,
}

/// Details of the delayed trade close a Market Order was created for.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderDelayedTradeClose {
    #[serde(rename = "tradeID")]
    pub trade_id: TradeId,
    #[serde(rename = "clientTradeID")]
    pub client_trade_id: Option<ClientId>,
    #[serde(rename = "sourceTransactionID")]
    pub source_transaction_id: Option<TransactionId>,
}

/// Creation of a Market Order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderTransaction {
    #[serde(flatten)]
    pub common: TransactionCommon,
    pub instrument: InstrumentName,
    pub units: Units,
    pub time_in_force: Option<TimeInForce>,
    pub price_bound: Option<PriceValue>,
    pub position_fill: Option<OrderPositionFill>,
    /// Only present when the order explicitly closes a trade.
    pub trade_close: Option<MarketOrderTradeClose>,
    pub long_position_closeout: Option<MarketOrderPositionCloseout>,
    pub short_position_closeout: Option<MarketOrderPositionCloseout>,
    pub margin_closeout: Option<MarketOrderMarginCloseout>,
    pub delayed_trade_close: Option<MarketOrderDelayedTradeClose>,
    pub reason: Option<MarketOrderReason>,
    pub client_extensions: Option<ClientExtensions>,
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    pub stop_loss_on_fill: Option<StopLossDetails>,
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    pub trade_client_extensions: Option<ClientExtensions>,
}

/// Rejected creation of a Market Order.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketOrderRejectTransaction {
    #[serde(flatten)]
    pub base: MarketOrderTransaction,
    #[serde(rename = "rejectReason")]
    pub reject_reason: Option<String>,
}

/// Creation of a Limit Order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderTransaction {
    #[serde(flatten)]
    pub common: TransactionCommon,
    pub instrument: InstrumentName,
    pub units: Units,
    pub price: PriceValue,
    pub time_in_force: Option<TimeInForce>,
    pub gtd_time: Option<DateTimeValue>,
    pub position_fill: Option<OrderPositionFill>,
    pub trigger_condition: Option<OrderTriggerCondition>,
    pub reason: Option<PendingOrderReason>,
    pub client_extensions: Option<ClientExtensions>,
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    pub stop_loss_on_fill: Option<StopLossDetails>,
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    pub trade_client_extensions: Option<ClientExtensions>,
    #[serde(rename = "replacesOrderID")]
    pub replaces_order_id: Option<OrderId>,
    #[serde(rename = "cancellingTransactionID")]
    pub cancelling_transaction_id: Option<TransactionId>,
}

/// Rejected creation of a Limit Order.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitOrderRejectTransaction {
    #[serde(flatten)]
    pub base: LimitOrderTransaction,
    #[serde(rename = "rejectReason")]
    pub reject_reason: Option<String>,
}

/// Creation of a Stop Order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderTransaction {
    #[serde(flatten)]
    pub common: TransactionCommon,
    pub instrument: InstrumentName,
    pub units: Units,
    pub price: PriceValue,
    pub price_bound: Option<PriceValue>,
    pub time_in_force: Option<TimeInForce>,
    pub gtd_time: Option<DateTimeValue>,
    pub position_fill: Option<OrderPositionFill>,
    pub trigger_condition: Option<OrderTriggerCondition>,
    pub reason: Option<PendingOrderReason>,
    pub client_extensions: Option<ClientExtensions>,
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    pub stop_loss_on_fill: Option<StopLossDetails>,
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    pub trade_client_extensions: Option<ClientExtensions>,
    #[serde(rename = "replacesOrderID")]
    pub replaces_order_id: Option<OrderId>,
    #[serde(rename = "cancellingTransactionID")]
    pub cancelling_transaction_id: Option<TransactionId>,
}

/// Rejected creation of a Stop Order.
#[derive(Debug, Clone, Deserialize)]
pub struct StopOrderRejectTransaction {
    #[serde(flatten)]
    pub base: StopOrderTransaction,
    #[serde(rename = "rejectReason")]
    pub reject_reason: Option<String>,
}

/// Creation of a Take Profit Order for an open trade.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeProfitOrderTransaction {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(rename = "tradeID")]
    pub trade_id: TradeId,
    #[serde(rename = "clientTradeID")]
    pub client_trade_id: Option<ClientId>,
    pub price: PriceValue,
    pub time_in_force: Option<TimeInForce>,
    pub gtd_time: Option<DateTimeValue>,
    pub reason: Option<DependentOrderReason>,
    pub client_extensions: Option<ClientExtensions>,
    #[serde(rename = "orderFillTransactionID")]
    pub order_fill_transaction_id: Option<TransactionId>,
}

/// Creation of a Stop Loss Order for an open trade.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLossOrderTransaction {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(rename = "tradeID")]
    pub trade_id: TradeId,
    #[serde(rename = "clientTradeID")]
    pub client_trade_id: Option<ClientId>,
    pub price: PriceValue,
    pub time_in_force: Option<TimeInForce>,
    pub gtd_time: Option<DateTimeValue>,
    pub reason: Option<DependentOrderReason>,
    pub client_extensions: Option<ClientExtensions>,
    #[serde(rename = "orderFillTransactionID")]
    pub order_fill_transaction_id: Option<TransactionId>,
}

/// Creation of a Trailing Stop Loss Order for an open trade.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailingStopLossOrderTransaction {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(rename = "tradeID")]
    pub trade_id: TradeId,
    #[serde(rename = "clientTradeID")]
    pub client_trade_id: Option<ClientId>,
    pub distance: DecimalNumber,
    pub time_in_force: Option<TimeInForce>,
    pub gtd_time: Option<DateTimeValue>,
    pub reason: Option<DependentOrderReason>,
    pub client_extensions: Option<ClientExtensions>,
    #[serde(rename = "orderFillTransactionID")]
    pub order_fill_transaction_id: Option<TransactionId>,
}

/// A trade opened by an order fill.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOpen {
    #[serde(rename = "tradeID")]
    pub trade_id: TradeId,
    pub units: Units,
    pub price: Option<PriceValue>,
    pub client_extensions: Option<ClientExtensions>,
    pub half_spread_cost: Option<AccountUnits>,
    pub initial_margin_required: Option<AccountUnits>,
}

/// A trade reduced or closed by an order fill.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeReduce {
    #[serde(rename = "tradeID")]
    pub trade_id: TradeId,
    pub units: Units,
    pub price: Option<PriceValue>,
    #[serde(rename = "realizedPL")]
    pub realized_pl: Option<AccountUnits>,
    pub financing: Option<AccountUnits>,
    pub half_spread_cost: Option<AccountUnits>,
}

/// The filling of an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFillTransaction {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(rename = "orderID")]
    pub order_id: OrderId,
    #[serde(rename = "clientOrderID")]
    pub client_order_id: Option<ClientId>,
    pub instrument: InstrumentName,
    pub units: Units,
    pub price: Option<PriceValue>,
    pub reason: Option<String>,
    pub pl: AccountUnits,
    pub financing: Option<AccountUnits>,
    pub commission: Option<AccountUnits>,
    pub account_balance: Option<AccountUnits>,
    /// Only present when the fill opened a new trade.
    pub trade_opened: Option<TradeOpen>,
    /// Only present when the fill closed existing trades.
    pub trades_closed: Option<Vec<TradeReduce>>,
    /// Only present when the fill reduced an existing trade.
    pub trade_reduced: Option<TradeReduce>,
    pub half_spread_cost: Option<AccountUnits>,
}

/// The cancellation of a pending order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancelTransaction {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(rename = "orderID")]
    pub order_id: OrderId,
    #[serde(rename = "clientOrderID")]
    pub client_order_id: Option<ClientId>,
    pub reason: Option<String>,
    #[serde(rename = "replacedByOrderID")]
    pub replaced_by_order_id: Option<OrderId>,
}

/// Modification of an order's client extensions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderClientExtensionsModifyTransaction {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(rename = "orderID")]
    pub order_id: OrderId,
    #[serde(rename = "clientOrderID")]
    pub client_order_id: Option<ClientId>,
    pub client_extensions_modify: Option<ClientExtensions>,
    pub trade_client_extensions_modify: Option<ClientExtensions>,
}

/// Modification of a trade's client extensions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeClientExtensionsModifyTransaction {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(rename = "tradeID")]
    pub trade_id: TradeId,
    #[serde(rename = "clientTradeID")]
    pub client_trade_id: Option<ClientId>,
    pub trade_client_extensions_modify: Option<ClientExtensions>,
}
