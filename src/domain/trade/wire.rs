//! Wire types for trades.

use crate::domain::order::ClientExtensions;
use crate::domain::trade::TradeState;
use crate::shared::{
    AccountUnits, DateTimeValue, InstrumentName, PriceValue, TradeId, TransactionId, Units,
};
use serde::Deserialize;

/// An open or closed trade in an account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: TradeId,
    pub instrument: InstrumentName,
    /// The execution price of the open.
    pub price: PriceValue,
    pub open_time: DateTimeValue,
    pub state: TradeState,
    /// Units at open: positive for long, negative for short.
    pub initial_units: Units,
    /// Units still open; zero once the trade is closed.
    pub current_units: Units,
    #[serde(rename = "realizedPL")]
    pub realized_pl: Option<AccountUnits>,
    /// Only present while the trade is open.
    #[serde(rename = "unrealizedPL")]
    pub unrealized_pl: Option<AccountUnits>,
    pub margin_used: Option<AccountUnits>,
    pub average_close_price: Option<PriceValue>,
    #[serde(rename = "closingTransactionIDs")]
    pub closing_transaction_ids: Option<Vec<TransactionId>>,
    pub financing: Option<AccountUnits>,
    pub close_time: Option<DateTimeValue>,
    pub client_extensions: Option<ClientExtensions>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_trade_decodes() {
        let json = r#"{
            "id": "6358",
            "instrument": "EUR_USD",
            "price": "1.14502",
            "openTime": "2018-09-20T21:38:23.055Z",
            "state": "OPEN",
            "initialUnits": "100",
            "currentUnits": "100",
            "realizedPL": "0.0000",
            "unrealizedPL": "-0.0012",
            "financing": "0.0000"
        }"#;

        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.state, TradeState::Open);
        assert_eq!(trade.initial_units, trade.current_units);
        assert!(trade.unrealized_pl.is_some());
        assert!(trade.close_time.is_none());
    }
}
