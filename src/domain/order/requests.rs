//! Order endpoint request models and their field tables.

use crate::domain::order::wire::Order;
use crate::domain::order::{ClientExtensions, OrderRequest, OrderStateFilter};
use crate::domain::transaction::wire::{
    OrderCancelTransaction, OrderClientExtensionsModifyTransaction, OrderFillTransaction,
    Transaction,
};
use crate::endpoint::{field, Endpoint, FieldSpec, Method};
use crate::shared::{
    AcceptDatetimeFormat, AccountId, InstrumentName, OrderId, OrderSpecifier, TransactionId,
};
use serde::Deserialize;

/// Create an order for an account.
#[derive(Debug, Clone, Default)]
pub struct CreateOrderRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    /// Specification of the order to create.
    pub order: Option<OrderRequest>,
}

impl Endpoint for CreateOrderRequest {
    type Response = CreateOrderResponse;
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/v3/accounts/{accountID}/orders";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::body("order", |r: &Self| field::body("order", &r.order)).required(),
    ];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_create_transaction: Option<Transaction>,
    pub order_fill_transaction: Option<OrderFillTransaction>,
    pub order_cancel_transaction: Option<OrderCancelTransaction>,
    pub order_reissue_transaction: Option<Transaction>,
    pub order_reissue_reject_transaction: Option<Transaction>,
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<TransactionId>>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Get a list of orders for an account.
#[derive(Debug, Clone, Default)]
pub struct ListOrdersRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    /// List of order identifiers to retrieve.
    pub ids: Option<Vec<OrderId>>,
    /// State filter [default=PENDING].
    pub state: Option<OrderStateFilter>,
    pub instrument: Option<InstrumentName>,
    /// Maximum number of orders to return [default=50, maximum=500].
    pub count: Option<u32>,
    /// The maximum order identifier to return.
    pub before_id: Option<OrderId>,
}

impl Endpoint for ListOrdersRequest {
    type Response = ListOrdersResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/orders";
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
pub struct ListOrdersResponse {
    pub orders: Vec<Order>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// List all pending orders in an account.
#[derive(Debug, Clone, Default)]
pub struct ListPendingOrdersRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
}

impl Endpoint for ListPendingOrdersRequest {
    type Response = ListOrdersResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/pendingOrders";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
    ];
}

/// Get details for a single order in an account.
#[derive(Debug, Clone, Default)]
pub struct GetOrderRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    pub order_specifier: Option<OrderSpecifier>,
}

impl Endpoint for GetOrderRequest {
    type Response = GetOrderResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/orders/{orderSpecifier}";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::url_segment("orderSpecifier", |r: &Self| field::text(&r.order_specifier))
            .required(),
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetOrderResponse {
    pub order: Order,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Replace an order by simultaneously cancelling it and creating a
/// replacement order.
#[derive(Debug, Clone, Default)]
pub struct ReplaceOrderRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    pub order_specifier: Option<OrderSpecifier>,
    /// Specification of the replacing order.
    pub order: Option<OrderRequest>,
}

impl Endpoint for ReplaceOrderRequest {
    type Response = ReplaceOrderResponse;
    const METHOD: Method = Method::Put;
    const PATH: &'static str = "/v3/accounts/{accountID}/orders/{orderSpecifier}";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::url_segment("orderSpecifier", |r: &Self| field::text(&r.order_specifier))
            .required(),
        FieldSpec::body("order", |r: &Self| field::body("order", &r.order)).required(),
    ];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOrderResponse {
    pub order_cancel_transaction: Option<OrderCancelTransaction>,
    pub order_create_transaction: Option<Transaction>,
    pub order_fill_transaction: Option<OrderFillTransaction>,
    pub order_reissue_transaction: Option<Transaction>,
    pub order_reissue_reject_transaction: Option<Transaction>,
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<TransactionId>>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Cancel a pending order in an account.
#[derive(Debug, Clone, Default)]
pub struct CancelOrderRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    pub order_specifier: Option<OrderSpecifier>,
}

impl Endpoint for CancelOrderRequest {
    type Response = CancelOrderResponse;
    const METHOD: Method = Method::Put;
    const PATH: &'static str = "/v3/accounts/{accountID}/orders/{orderSpecifier}/cancel";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::url_segment("orderSpecifier", |r: &Self| field::text(&r.order_specifier))
            .required(),
    ];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderResponse {
    pub order_cancel_transaction: Option<OrderCancelTransaction>,
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<TransactionId>>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Update the client extensions for an order in an account.
#[derive(Debug, Clone, Default)]
pub struct SetOrderClientExtensionsRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    pub order_specifier: Option<OrderSpecifier>,
    /// Extensions to update for the order itself.
    pub client_extensions: Option<ClientExtensions>,
    /// Extensions to update for the trade created when the order fills.
    pub trade_client_extensions: Option<ClientExtensions>,
}

impl Endpoint for SetOrderClientExtensionsRequest {
    type Response = SetOrderClientExtensionsResponse;
    const METHOD: Method = Method::Put;
    const PATH: &'static str = "/v3/accounts/{accountID}/orders/{orderSpecifier}/clientExtensions";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::url_segment("orderSpecifier", |r: &Self| field::text(&r.order_specifier))
            .required(),
        FieldSpec::body("clientExtensions", |r: &Self| {
            field::body("clientExtensions", &r.client_extensions)
        }),
        FieldSpec::body("tradeClientExtensions", |r: &Self| {
            field::body("tradeClientExtensions", &r.trade_client_extensions)
        }),
    ];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOrderClientExtensionsResponse {
    pub order_client_extensions_modify_transaction:
        Option<OrderClientExtensionsModifyTransaction>,
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<TransactionId>>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}
