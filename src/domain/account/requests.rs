//! Account endpoint request models and their field tables.

use crate::domain::account::wire::{
    Account, AccountChanges, AccountChangesState, AccountProperties, AccountSummary, Instrument,
};
use crate::domain::transaction::wire::{
    ClientConfigureRejectTransaction, ClientConfigureTransaction,
};
use crate::endpoint::{field, Endpoint, FieldSpec, Method};
use crate::shared::{
    AcceptDatetimeFormat, AccountId, DecimalNumber, InstrumentName, TransactionId,
};
use serde::Deserialize;

/// Get a list of all accounts authorized for the provided token.
#[derive(Debug, Clone, Default)]
pub struct ListAccountsRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
}

impl Endpoint for ListAccountsRequest {
    type Response = ListAccountsResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts";
    const FIELDS: &'static [FieldSpec<Self>] = &[FieldSpec::header(
        "Accept-Datetime-Format",
        |r: &Self| field::text(&r.accept_datetime_format),
    )];
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListAccountsResponse {
    pub accounts: Vec<AccountProperties>,
}

/// Get the full details for a single account.
#[derive(Debug, Clone, Default)]
pub struct GetAccountRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
}

impl Endpoint for GetAccountRequest {
    type Response = GetAccountResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetAccountResponse {
    pub account: Account,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Get a summary for a single account.
#[derive(Debug, Clone, Default)]
pub struct GetAccountSummaryRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
}

impl Endpoint for GetAccountSummaryRequest {
    type Response = GetAccountSummaryResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/summary";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetAccountSummaryResponse {
    pub account: AccountSummary,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Get the list of tradeable instruments for an account.
#[derive(Debug, Clone, Default)]
pub struct GetAccountInstrumentsRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    /// Restrict the result to these instruments; all when absent.
    pub instruments: Option<Vec<InstrumentName>>,
}

impl Endpoint for GetAccountInstrumentsRequest {
    type Response = GetAccountInstrumentsResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/instruments";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::query("instruments", |r: &Self| field::list(&r.instruments)),
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetAccountInstrumentsResponse {
    pub instruments: Vec<Instrument>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Set client-configurable properties of an account.
#[derive(Debug, Clone, Default)]
pub struct ConfigureAccountRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    /// Client-defined account alias.
    pub alias: Option<String>,
    /// The margin rate to set for the account.
    pub margin_rate: Option<DecimalNumber>,
}

impl Endpoint for ConfigureAccountRequest {
    type Response = ConfigureAccountResponse;
    const METHOD: Method = Method::Patch;
    const PATH: &'static str = "/v3/accounts/{accountID}/configuration";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::body("alias", |r: &Self| field::body("alias", &r.alias)),
        FieldSpec::body("marginRate", |r: &Self| {
            field::body("marginRate", &r.margin_rate)
        }),
    ];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureAccountResponse {
    pub client_configure_transaction: Option<ClientConfigureTransaction>,
    pub client_configure_reject_transaction: Option<ClientConfigureRejectTransaction>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Poll an account for its state and changes since a known transaction.
#[derive(Debug, Clone, Default)]
pub struct GetAccountChangesRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    /// The first transaction to exclude from the result.
    pub since_transaction_id: Option<TransactionId>,
}

impl Endpoint for GetAccountChangesRequest {
    type Response = GetAccountChangesResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/changes";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::query("sinceTransactionID", |r: &Self| {
            field::text(&r.since_transaction_id)
        }),
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetAccountChangesResponse {
    pub changes: Option<AccountChanges>,
    pub state: Option<AccountChangesState>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<TransactionId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::build;
    use crate::shared::FromWire;

    #[test]
    fn test_list_accounts_has_no_placeholders() {
        let wire = build(&ListAccountsRequest::default()).unwrap();
        assert_eq!(wire.url, "/v3/accounts");
        assert!(wire.query.is_empty());
        assert!(wire.body.is_none());
    }

    #[test]
    fn test_configure_account_body_members() {
        let request = ConfigureAccountRequest {
            account_id: Some("001-001-1234567-001".into()),
            alias: Some("Hedging".to_string()),
            margin_rate: Some(DecimalNumber::from_wire("0.02").unwrap()),
            ..Default::default()
        };

        let wire = build(&request).unwrap();
        let body = wire.body.unwrap();
        assert_eq!(body["alias"], serde_json::json!("Hedging"));
        assert_eq!(body["marginRate"], serde_json::json!("0.02"));
    }

    #[test]
    fn test_instruments_list_joins_with_commas() {
        let request = GetAccountInstrumentsRequest {
            account_id: Some("001-001-1234567-001".into()),
            instruments: Some(vec!["EUR_USD".into(), "USD_JPY".into()]),
            ..Default::default()
        };

        let wire = build(&request).unwrap();
        assert!(wire
            .query
            .iter()
            .any(|(k, v)| k == "instruments" && v == "EUR_USD,USD_JPY"));
    }
}
