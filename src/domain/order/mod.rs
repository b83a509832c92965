//! Order domain: order body payloads, state enums, dependent-order details.

#[cfg(feature = "http")]
pub mod client;
pub mod requests;
pub mod wire;

pub use wire::Order;

use crate::shared::{
    ClientId, DateTimeValue, DecimalNumber, InstrumentName, PriceValue, ToWire, Units,
};
use serde::{Deserialize, Serialize};

/// The type of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Market,
    Limit,
    Stop,
    MarketIfTouched,
    TakeProfit,
    StopLoss,
    TrailingStopLoss,
    FixedPrice,
}

/// The current state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    Pending,
    Filled,
    Triggered,
    Cancelled,
}

/// State filter for order list queries. `PENDING` is the API default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStateFilter {
    #[default]
    Pending,
    Filled,
    Triggered,
    Cancelled,
    All,
}

impl OrderStateFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Filled => "FILLED",
            Self::Triggered => "TRIGGERED",
            Self::Cancelled => "CANCELLED",
            Self::All => "ALL",
        }
    }
}

impl ToWire for OrderStateFilter {
    fn to_wire(&self) -> String {
        self.as_str().to_string()
    }
}

/// Time-in-force of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Good until cancelled.
    Gtc,
    /// Good until date.
    Gtd,
    /// Good for day.
    Gfd,
    /// Filled or killed.
    Fok,
    /// Immediately partially filled or killed.
    Ioc,
}

/// How positions in the account are modified when an order fills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderPositionFill {
    OpenOnly,
    ReduceFirst,
    ReduceOnly,
    #[default]
    Default,
}

/// Which price component triggers a pending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderTriggerCondition {
    #[default]
    Default,
    Inverse,
    Bid,
    Ask,
    Mid,
}

/// Client-provided extensions attached to orders and trades.
///
/// Do not set, modify, or delete client extensions on accounts associated
/// with MT4.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientExtensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ClientId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Specification of a Take Profit order to create when a trade opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeProfitDetails {
    pub price: PriceValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTimeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

/// Specification of a Stop Loss order to create when a trade opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLossDetails {
    pub price: PriceValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTimeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

/// Specification of a Trailing Stop Loss order to create when a trade opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailingStopLossDetails {
    /// Distance, in price units, from the trade's fill price.
    pub distance: DecimalNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTimeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

// ─── Order body payloads ─────────────────────────────────────────────────────

/// Specification of an order to create, sent as the `order` body member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OrderRequest {
    #[serde(rename = "MARKET")]
    Market(MarketOrderRequest),
    #[serde(rename = "LIMIT")]
    Limit(LimitOrderRequest),
    #[serde(rename = "STOP")]
    Stop(StopOrderRequest),
}

/// A Market Order request: filled immediately at the current market price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderRequest {
    pub instrument: InstrumentName,
    /// Positive for a long order, negative for a short order.
    pub units: Units,
    /// Restricted to FOK or IOC for a market order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Worst price the client is willing to be filled at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<PriceValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
}

impl MarketOrderRequest {
    pub fn new(instrument: impl Into<InstrumentName>, units: Units) -> Self {
        Self {
            instrument: instrument.into(),
            units,
            time_in_force: None,
            price_bound: None,
            position_fill: None,
            client_extensions: None,
            take_profit_on_fill: None,
            stop_loss_on_fill: None,
            trailing_stop_loss_on_fill: None,
            trade_client_extensions: None,
        }
    }
}

/// A Limit Order request: filled at the specified price or better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderRequest {
    pub instrument: InstrumentName,
    pub units: Units,
    pub price: PriceValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTimeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
}

/// A Stop Order request: filled at the specified price or worse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderRequest {
    pub instrument: InstrumentName,
    pub units: Units,
    pub price: PriceValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<PriceValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTimeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::FromWire;

    #[test]
    fn test_market_order_request_wire_shape() {
        let order = OrderRequest::Market(MarketOrderRequest::new(
            "EUR_USD",
            Units::from_wire("100").unwrap(),
        ));
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "MARKET",
                "instrument": "EUR_USD",
                "units": "100"
            })
        );
    }

    #[test]
    fn test_limit_order_request_includes_dependent_orders() {
        let order = OrderRequest::Limit(LimitOrderRequest {
            instrument: "EUR_USD".into(),
            units: Units::from_wire("-50").unwrap(),
            price: PriceValue::from_wire("1.2001").unwrap(),
            time_in_force: Some(TimeInForce::Gtc),
            gtd_time: None,
            position_fill: None,
            trigger_condition: None,
            client_extensions: None,
            take_profit_on_fill: Some(TakeProfitDetails {
                price: PriceValue::from_wire("1.1900").unwrap(),
                time_in_force: None,
                gtd_time: None,
                client_extensions: None,
            }),
            stop_loss_on_fill: None,
            trailing_stop_loss_on_fill: None,
            trade_client_extensions: None,
        });
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["type"], "LIMIT");
        assert_eq!(json["timeInForce"], "GTC");
        assert_eq!(json["takeProfitOnFill"]["price"], "1.1900");
        assert!(json.get("stopLossOnFill").is_none());
    }

    #[test]
    fn test_order_state_filter_wire_names() {
        assert_eq!(OrderStateFilter::Pending.to_wire(), "PENDING");
        assert_eq!(OrderStateFilter::All.to_wire(), "ALL");
    }
}
