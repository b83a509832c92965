//! Trade endpoint request models and their field tables.

use crate::domain::order::ClientExtensions;
use crate::domain::trade::wire::Trade;
use crate::domain::trade::{TradeCloseUnits, TradeStateFilter};
use crate::domain::transaction::wire::{
    MarketOrderRejectTransaction, MarketOrderTransaction, OrderFillTransaction,
    TradeClientExtensionsModifyTransaction,
};
use crate::endpoint::{field, Endpoint, FieldSpec, Method};
use crate::shared::{
    AcceptDatetimeFormat, AccountId, InstrumentName, TradeId, TradeSpecifier, TransactionId,
};
use serde::Deserialize;

/// Get a list of trades for an account.
#[derive(Debug, Clone, Default)]
pub struct ListTradesRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    /// List of trade identifiers to retrieve.
    pub ids: Option<Vec<TradeId>>,
    /// State filter [default=OPEN].
    pub state: Option<TradeStateFilter>,
    pub instrument: Option<InstrumentName>,
    /// Maximum number of trades to return [default=50, maximum=500].
    pub count: Option<u32>,
    /// The maximum trade identifier to return.
    pub before_id: Option<TradeId>,
}

impl Endpoint for ListTradesRequest {
    type Response = ListTradesResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/trades";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::query("ids", |r: &Self| field::list(&r.ids)),
        FieldSpec::query("state", |r: &Self| field::text(&r.state)),
        FieldSpec::query("instrument", |r: &Self| field::text(&r.instrument)),
        FieldSpec::query("count", |r: &Self| field::count(&r.count)).clamped(500),
        FieldSpec::query("beforeID", |r: &Self| field::text(&r.before_id)),
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListTradesResponse {
    pub trades: Vec<Trade>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Get the list of open trades for an account.
#[derive(Debug, Clone, Default)]
pub struct ListOpenTradesRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
}

impl Endpoint for ListOpenTradesRequest {
    type Response = ListTradesResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/openTrades";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
    ];
}

/// Get the details of a specific trade in an account.
#[derive(Debug, Clone, Default)]
pub struct GetTradeRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    pub trade_specifier: Option<TradeSpecifier>,
}

impl Endpoint for GetTradeRequest {
    type Response = GetTradeResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/trades/{tradeSpecifier}";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::url_segment("tradeSpecifier", |r: &Self| field::text(&r.trade_specifier))
            .required(),
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetTradeResponse {
    pub trade: Trade,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Close (partially or fully) a specific open trade in an account.
#[derive(Debug, Clone, Default)]
pub struct CloseTradeRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    pub trade_specifier: Option<TradeSpecifier>,
    /// How much of the trade to close [default=ALL].
    pub units: Option<TradeCloseUnits>,
}

impl Endpoint for CloseTradeRequest {
    type Response = CloseTradeResponse;
    const METHOD: Method = Method::Put;
    const PATH: &'static str = "/v3/accounts/{accountID}/trades/{tradeSpecifier}/close";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::url_segment("tradeSpecifier", |r: &Self| field::text(&r.trade_specifier))
            .required(),
        FieldSpec::body("units", |r: &Self| field::body("units", &r.units)),
    ];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseTradeResponse {
    pub order_create_transaction: Option<MarketOrderTransaction>,
    pub order_fill_transaction: Option<OrderFillTransaction>,
    pub order_reject_transaction: Option<MarketOrderRejectTransaction>,
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<TransactionId>>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Update the client extensions for a trade in an account.
#[derive(Debug, Clone, Default)]
pub struct SetTradeClientExtensionsRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    pub trade_specifier: Option<TradeSpecifier>,
    pub client_extensions: Option<ClientExtensions>,
}

impl Endpoint for SetTradeClientExtensionsRequest {
    type Response = SetTradeClientExtensionsResponse;
    const METHOD: Method = Method::Put;
    const PATH: &'static str = "/v3/accounts/{accountID}/trades/{tradeSpecifier}/clientExtensions";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::url_segment("tradeSpecifier", |r: &Self| field::text(&r.trade_specifier))
            .required(),
        FieldSpec::body("clientExtensions", |r: &Self| {
            field::body("clientExtensions", &r.client_extensions)
        })
        .required(),
    ];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTradeClientExtensionsResponse {
    pub trade_client_extensions_modify_transaction:
        Option<TradeClientExtensionsModifyTransaction>,
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<TransactionId>>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::build;

    #[test]
    fn test_close_trade_builds_partial_close_body() {
        let request = CloseTradeRequest {
            account_id: Some("001-001-1234567-001".into()),
            trade_specifier: Some(TradeSpecifier::client("myTrade7")),
            units: Some(TradeCloseUnits::All),
            ..Default::default()
        };

        let wire = build(&request).unwrap();
        assert_eq!(
            wire.url,
            "/v3/accounts/001-001-1234567-001/trades/@myTrade7/close"
        );
        let body = wire.body.unwrap();
        assert_eq!(body["units"], serde_json::json!("ALL"));
    }

    #[test]
    fn test_list_trades_clamps_count() {
        let request = ListTradesRequest {
            account_id: Some("001-001-1234567-001".into()),
            count: Some(9_999),
            ..Default::default()
        };

        let wire = build(&request).unwrap();
        assert!(wire
            .query
            .iter()
            .any(|(k, v)| k == "count" && v == "500"));
    }
}
