//! Position endpoint request models and their field tables.

use crate::domain::order::ClientExtensions;
use crate::domain::position::wire::Position;
use crate::domain::position::PositionCloseUnits;
use crate::domain::transaction::wire::{
    MarketOrderRejectTransaction, MarketOrderTransaction, OrderFillTransaction,
};
use crate::endpoint::{field, Endpoint, FieldSpec, Method};
use crate::shared::{AcceptDatetimeFormat, AccountId, InstrumentName, TransactionId};
use serde::Deserialize;

/// List all positions an account has had over its lifetime.
#[derive(Debug, Clone, Default)]
pub struct ListPositionsRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
}

impl Endpoint for ListPositionsRequest {
    type Response = ListPositionsResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/positions";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListPositionsResponse {
    pub positions: Vec<Position>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// List all open positions in an account.
#[derive(Debug, Clone, Default)]
pub struct ListOpenPositionsRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
}

impl Endpoint for ListOpenPositionsRequest {
    type Response = ListPositionsResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/openPositions";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
    ];
}

/// Get the position for a single instrument in an account.
#[derive(Debug, Clone, Default)]
pub struct GetPositionRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    pub instrument: Option<InstrumentName>,
}

impl Endpoint for GetPositionRequest {
    type Response = GetPositionResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/positions/{instrument}";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::url_segment("instrument", |r: &Self| field::text(&r.instrument)).required(),
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetPositionResponse {
    pub position: Position,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Close out the open portion of an instrument's position.
#[derive(Debug, Clone, Default)]
pub struct ClosePositionRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    pub instrument: Option<InstrumentName>,
    /// How much of the long side to close [default=NONE].
    pub long_units: Option<PositionCloseUnits>,
    pub long_client_extensions: Option<ClientExtensions>,
    /// How much of the short side to close [default=NONE].
    pub short_units: Option<PositionCloseUnits>,
    pub short_client_extensions: Option<ClientExtensions>,
}

impl Endpoint for ClosePositionRequest {
    type Response = ClosePositionResponse;
    const METHOD: Method = Method::Put;
    const PATH: &'static str = "/v3/accounts/{accountID}/positions/{instrument}/close";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::url_segment("instrument", |r: &Self| field::text(&r.instrument)).required(),
        FieldSpec::body("longUnits", |r: &Self| {
            field::body("longUnits", &r.long_units)
        }),
        FieldSpec::body("longClientExtensions", |r: &Self| {
            field::body("longClientExtensions", &r.long_client_extensions)
        }),
        FieldSpec::body("shortUnits", |r: &Self| {
            field::body("shortUnits", &r.short_units)
        }),
        FieldSpec::body("shortClientExtensions", |r: &Self| {
            field::body("shortClientExtensions", &r.short_client_extensions)
        }),
    ];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosePositionResponse {
    pub long_order_create_transaction: Option<MarketOrderTransaction>,
    pub long_order_fill_transaction: Option<OrderFillTransaction>,
    pub long_order_reject_transaction: Option<MarketOrderRejectTransaction>,
    pub short_order_create_transaction: Option<MarketOrderTransaction>,
    pub short_order_fill_transaction: Option<OrderFillTransaction>,
    pub short_order_reject_transaction: Option<MarketOrderRejectTransaction>,
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
    fn test_close_position_fills_both_segments() {
        let request = ClosePositionRequest {
            account_id: Some("001-001-1234567-001".into()),
            instrument: Some("EUR_USD".into()),
            long_units: Some(PositionCloseUnits::All),
            ..Default::default()
        };

        let wire = build(&request).unwrap();
        assert_eq!(
            wire.url,
            "/v3/accounts/001-001-1234567-001/positions/EUR_USD/close"
        );
        let body = wire.body.unwrap();
        assert_eq!(body["longUnits"], serde_json::json!("ALL"));
        assert!(body.get("shortUnits").is_none());
    }
}
