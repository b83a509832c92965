//! End-to-end marshalling tests over the real endpoint catalogue: request
//! building (placement, required fields, clamping, specifier normalization)
//! and response decoding (typed models, error envelopes).

use oanda_sdk::domain::order::requests::{CreateOrderRequest, GetOrderRequest, ListOrdersRequest};
use oanda_sdk::domain::order::{MarketOrderRequest, OrderRequest, OrderStateFilter};
use oanda_sdk::domain::pricing::requests::GetPricingRequest;
use oanda_sdk::domain::trade::requests::{CloseTradeRequest, ListTradesRequest};
use oanda_sdk::domain::trade::TradeCloseUnits;
use oanda_sdk::domain::transaction::requests::ListTransactionsRequest;
use oanda_sdk::error::{RequestError, SdkError};
use oanda_sdk::prelude::*;

// ─── Request building ────────────────────────────────────────────────────────

#[test]
fn list_orders_places_every_field() {
    let request = ListOrdersRequest {
        account_id: Some("001-001-1234567-001".into()),
        state: Some(OrderStateFilter::All),
        count: Some(750),
        ..Default::default()
    };

    let wire = build(&request).unwrap();
    assert_eq!(wire.method, Method::Get);
    assert_eq!(wire.url, "/v3/accounts/001-001-1234567-001/orders");
    // The count above the endpoint maximum is clamped, not rejected.
    assert!(wire.query.iter().any(|(k, v)| k == "count" && v == "500"));
    assert!(wire.query.iter().any(|(k, v)| k == "state" && v == "ALL"));
    assert!(wire.body.is_none());
}

#[test]
fn query_preserves_declaration_order() {
    let request = ListOrdersRequest {
        account_id: Some("001-001-1234567-001".into()),
        state: Some(OrderStateFilter::Filled),
        instrument: Some("EUR_USD".into()),
        count: Some(10),
        ..Default::default()
    };

    let wire = build(&request).unwrap();
    let keys: Vec<&str> = wire.query.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["state", "instrument", "count"]);
}

#[test]
fn missing_required_segment_fails_before_any_encoding() {
    let request = ListOrdersRequest::default();

    let err = build(&request).unwrap_err();
    assert!(matches!(
        err,
        RequestError::MissingRequiredField { ref field } if *field == "accountID"
    ));
}

#[test]
fn missing_required_body_member_is_reported_by_wire_name() {
    let request = CreateOrderRequest {
        account_id: Some("001-001-1234567-001".into()),
        ..Default::default()
    };

    let err = build(&request).unwrap_err();
    assert!(matches!(
        err,
        RequestError::MissingRequiredField { ref field } if *field == "order"
    ));
}

#[test]
fn create_order_merges_body_under_wire_name() {
    let request = CreateOrderRequest {
        account_id: Some("001-001-1234567-001".into()),
        order: Some(OrderRequest::Market(MarketOrderRequest::new(
            "EUR_USD",
            Units::from_wire("100").unwrap(),
        ))),
        ..Default::default()
    };

    let wire = build(&request).unwrap();
    assert_eq!(wire.method, Method::Post);
    let body = wire.body.unwrap();
    assert_eq!(body["order"]["type"], serde_json::json!("MARKET"));
    assert_eq!(body["order"]["instrument"], serde_json::json!("EUR_USD"));
    assert_eq!(body["order"]["units"], serde_json::json!("100"));
}

#[test]
fn client_assigned_specifier_keeps_leading_sentinel_in_url() {
    let request = GetOrderRequest {
        account_id: Some("001-001-1234567-001".into()),
        order_specifier: Some(OrderSpecifier::client("myOrder42")),
        ..Default::default()
    };

    let wire = build(&request).unwrap();
    assert_eq!(
        wire.url,
        "/v3/accounts/001-001-1234567-001/orders/@myOrder42"
    );
}

#[test]
fn specifier_from_wire_strips_interior_sentinels() {
    let spec = OrderSpecifier::from_wire("@my@Order").unwrap();
    assert!(spec.is_client_assigned());
    assert_eq!(spec.to_wire(), "@myOrder");
}

#[test]
fn accept_datetime_header_rides_along() {
    let request = ListTradesRequest {
        accept_datetime_format: Some(AcceptDatetimeFormat::Unix),
        account_id: Some("001-001-1234567-001".into()),
        ..Default::default()
    };

    let wire = build(&request).unwrap();
    assert!(wire
        .headers
        .iter()
        .any(|(k, v)| k == "Accept-Datetime-Format" && v == "UNIX"));
}

#[test]
fn list_values_join_as_comma_separated_query() {
    let request = GetPricingRequest {
        account_id: Some("001-001-1234567-001".into()),
        instruments: Some(vec!["EUR_USD".into(), "USD_JPY".into()]),
        ..Default::default()
    };

    let wire = build(&request).unwrap();
    assert!(wire
        .query
        .iter()
        .any(|(k, v)| k == "instruments" && v == "EUR_USD,USD_JPY"));
    // Encoded form percent-escapes the separator.
    assert!(wire.query_string().unwrap().contains("EUR_USD%2CUSD_JPY"));
}

#[test]
fn transaction_page_size_uses_its_own_maximum() {
    let request = ListTransactionsRequest {
        account_id: Some("001-001-1234567-001".into()),
        page_size: Some(4_000),
        ..Default::default()
    };

    let wire = build(&request).unwrap();
    assert!(wire
        .query
        .iter()
        .any(|(k, v)| k == "pageSize" && v == "1000"));
}

#[test]
fn close_trade_builds_put_with_units_body() {
    let request = CloseTradeRequest {
        account_id: Some("001-001-1234567-001".into()),
        trade_specifier: Some(TradeSpecifier::from("6358".parse::<TradeId>().unwrap())),
        units: Some(TradeCloseUnits::Units(
            DecimalNumber::from_wire("50").unwrap(),
        )),
        ..Default::default()
    };

    let wire = build(&request).unwrap();
    assert_eq!(wire.method, Method::Put);
    assert_eq!(
        wire.url,
        "/v3/accounts/001-001-1234567-001/trades/6358/close"
    );
    assert_eq!(wire.body.unwrap()["units"], serde_json::json!("50"));
}

// ─── Response decoding ───────────────────────────────────────────────────────

#[test]
fn success_decodes_into_typed_response() {
    let body = r#"{
        "orders": [{
            "id": "6372",
            "type": "LIMIT",
            "createTime": "2018-09-21T10:15:00.000Z",
            "state": "PENDING",
            "instrument": "EUR_USD",
            "units": "100",
            "price": "1.12000"
        }],
        "lastTransactionID": "6373"
    }"#;

    let response: <ListOrdersRequest as Endpoint>::Response =
        decode_response(200, body).unwrap();
    assert_eq!(response.orders.len(), 1);
    assert_eq!(response.orders[0].id.as_str(), "6372");
    assert_eq!(response.last_transaction_id.unwrap().as_str(), "6373");
}

#[test]
fn api_error_envelope_surfaces_code_and_message() {
    let body = r#"{"errorCode": "INSUFFICIENT_MARGIN", "errorMessage": "Insufficient margin"}"#;

    let err = decode_response::<<CreateOrderRequest as Endpoint>::Response>(400, body)
        .unwrap_err();
    match err {
        SdkError::Api { code, message } => {
            assert_eq!(code, "INSUFFICIENT_MARGIN");
            assert_eq!(message, "Insufficient margin");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn non_json_error_body_is_kept_verbatim() {
    let err =
        decode_response::<<ListOrdersRequest as Endpoint>::Response>(502, "Bad Gateway")
            .unwrap_err();
    match err {
        SdkError::Api { code, message } => {
            assert_eq!(code, "HTTP_502");
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn malformed_success_body_is_a_decode_error() {
    let err = decode_response::<<ListOrdersRequest as Endpoint>::Response>(200, "{\"orders\": 7}")
        .unwrap_err();
    assert!(matches!(err, SdkError::Decode(_)));
}

#[test]
fn absent_optional_response_fields_decode_to_none() {
    let body = r#"{"orders": []}"#;

    let response: <ListOrdersRequest as Endpoint>::Response =
        decode_response(200, body).unwrap();
    assert!(response.orders.is_empty());
    assert!(response.last_transaction_id.is_none());
}

#[test]
fn unknown_transaction_types_decode_as_unsupported() {
    let body = r#"{
        "transaction": {
            "type": "DIVIDEND_ADJUSTMENT",
            "id": "6390",
            "accountID": "001-001-1234567-001"
        },
        "lastTransactionID": "6390"
    }"#;

    let response: oanda_sdk::domain::transaction::requests::GetTransactionResponse =
        serde_json::from_str(body).unwrap();
    assert!(matches!(
        response.transaction,
        oanda_sdk::domain::transaction::Transaction::Unsupported
    ));
}
