//! Transaction endpoint request models and their field tables.

use crate::domain::transaction::Transaction;
use crate::endpoint::{field, Endpoint, FieldSpec, Method};
use crate::shared::{AcceptDatetimeFormat, AccountId, DateTimeValue, TransactionId};
use serde::Deserialize;

/// Get a list of transaction pages that satisfy a time-based query.
#[derive(Debug, Clone, Default)]
pub struct ListTransactionsRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    /// The start of the time range to fetch.
    pub from: Option<DateTimeValue>,
    /// The end of the time range to fetch.
    pub to: Option<DateTimeValue>,
    /// Page size [default=100, maximum=1000].
    pub page_size: Option<u32>,
    /// Transaction type filter values (e.g. `"ORDER_FILL"`).
    pub types: Option<Vec<String>>,
}

impl Endpoint for ListTransactionsRequest {
    type Response = ListTransactionsResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/transactions";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::query("from", |r: &Self| field::text(&r.from)),
        FieldSpec::query("to", |r: &Self| field::text(&r.to)),
        FieldSpec::query("pageSize", |r: &Self| field::count(&r.page_size)).clamped(1000),
        FieldSpec::query("type", |r: &Self| field::list(&r.types)),
    ];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsResponse {
    pub from: Option<DateTimeValue>,
    pub to: Option<DateTimeValue>,
    pub page_size: Option<u32>,
    #[serde(rename = "type")]
    pub types: Option<Vec<String>>,
    pub count: Option<u32>,
    /// URLs of the transaction pages covering the query range.
    pub pages: Option<Vec<String>>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Get the details of a single account transaction.
#[derive(Debug, Clone, Default)]
pub struct GetTransactionRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    pub transaction_id: Option<TransactionId>,
}

impl Endpoint for GetTransactionRequest {
    type Response = GetTransactionResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/transactions/{transactionID}";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::url_segment("transactionID", |r: &Self| field::text(&r.transaction_id))
            .required(),
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetTransactionResponse {
    pub transaction: Transaction,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Get a range of transactions by transaction identifier.
#[derive(Debug, Clone, Default)]
pub struct GetTransactionRangeRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    /// The starting transaction identifier (inclusive).
    pub from: Option<TransactionId>,
    /// The ending transaction identifier (inclusive).
    pub to: Option<TransactionId>,
    pub types: Option<Vec<String>>,
}

impl Endpoint for GetTransactionRangeRequest {
    type Response = TransactionsResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/transactions/idrange";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::query("from", |r: &Self| field::text(&r.from)).required(),
        FieldSpec::query("to", |r: &Self| field::text(&r.to)).required(),
        FieldSpec::query("type", |r: &Self| field::list(&r.types)),
    ];
}

/// Get all transactions newer than a given transaction identifier.
#[derive(Debug, Clone, Default)]
pub struct GetTransactionsSinceIdRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    pub id: Option<TransactionId>,
}

impl Endpoint for GetTransactionsSinceIdRequest {
    type Response = TransactionsResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/transactions/sinceid";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::query("id", |r: &Self| field::text(&r.id)).required(),
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}
