//! Wire types for orders.

use crate::domain::order::{
    ClientExtensions, OrderPositionFill, OrderState, OrderTriggerCondition, OrderType,
    StopLossDetails, TakeProfitDetails, TimeInForce, TrailingStopLossDetails,
};
use crate::shared::{
    DateTimeValue, DecimalNumber, InstrumentName, OrderId, PriceValue, TradeId, TransactionId,
    Units,
};
use serde::Deserialize;

/// An order in an account.
///
/// One struct covers every order kind; fields that do not apply to a kind
/// are simply absent on the wire and decode to `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "type")]
    pub kind: OrderType,
    pub create_time: DateTimeValue,
    pub state: OrderState,
    pub client_extensions: Option<ClientExtensions>,
    pub instrument: Option<InstrumentName>,
    pub units: Option<Units>,
    pub price: Option<PriceValue>,
    pub price_bound: Option<PriceValue>,
    /// Trailing stop distance, for trailing stop loss orders.
    pub distance: Option<DecimalNumber>,
    pub time_in_force: Option<TimeInForce>,
    pub gtd_time: Option<DateTimeValue>,
    pub position_fill: Option<OrderPositionFill>,
    pub trigger_condition: Option<OrderTriggerCondition>,
    /// The trade a dependent order is attached to.
    #[serde(rename = "tradeID")]
    pub trade_id: Option<TradeId>,
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    pub stop_loss_on_fill: Option<StopLossDetails>,
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    pub trade_client_extensions: Option<ClientExtensions>,
    #[serde(rename = "fillingTransactionID")]
    pub filling_transaction_id: Option<TransactionId>,
    pub filled_time: Option<DateTimeValue>,
    #[serde(rename = "cancellingTransactionID")]
    pub cancelling_transaction_id: Option<TransactionId>,
    pub cancelled_time: Option<DateTimeValue>,
    #[serde(rename = "tradeOpenedID")]
    pub trade_opened_id: Option<TradeId>,
    #[serde(rename = "tradeReducedID")]
    pub trade_reduced_id: Option<TradeId>,
    #[serde(rename = "tradeClosedIDs")]
    pub trade_closed_ids: Option<Vec<TradeId>>,
    #[serde(rename = "replacesOrderID")]
    pub replaces_order_id: Option<OrderId>,
    #[serde(rename = "replacedByOrderID")]
    pub replaced_by_order_id: Option<OrderId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_limit_order_decodes() {
        let json = r#"{
            "id": "6372",
            "type": "LIMIT",
            "createTime": "2018-09-21T10:15:00.000Z",
            "state": "PENDING",
            "instrument": "EUR_USD",
            "units": "100",
            "price": "1.12000",
            "timeInForce": "GTC",
            "triggerCondition": "DEFAULT",
            "clientExtensions": {"id": "myOrder42", "tag": "strategy-a"}
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id.as_str(), "6372");
        assert_eq!(order.kind, OrderType::Limit);
        assert_eq!(order.state, OrderState::Pending);
        assert_eq!(order.price.unwrap().as_str(), "1.12000");
        assert_eq!(
            order.client_extensions.unwrap().id.unwrap().as_str(),
            "myOrder42"
        );
        // Fields of other order kinds are absent, not defaulted.
        assert!(order.distance.is_none());
        assert!(order.filled_time.is_none());
    }
}
