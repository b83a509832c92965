//! Accounts sub-client — account state, configuration, and instruments.

use crate::client::OandaClient;
use crate::domain::account::requests::{
    ConfigureAccountRequest, ConfigureAccountResponse, GetAccountChangesRequest,
    GetAccountChangesResponse, GetAccountInstrumentsRequest, GetAccountInstrumentsResponse,
    GetAccountRequest, GetAccountResponse, GetAccountSummaryRequest, GetAccountSummaryResponse,
    ListAccountsRequest, ListAccountsResponse,
};
use crate::error::SdkError;
use crate::shared::{AccountId, TransactionId};

pub struct Accounts<'a> {
    pub(crate) client: &'a OandaClient,
}

impl<'a> Accounts<'a> {
    /// List all accounts the current token is authorized for.
    pub async fn list(&self) -> Result<ListAccountsResponse, SdkError> {
        self.client.http.execute(&ListAccountsRequest::default()).await
    }

    /// Get the full details of an account.
    pub async fn get(
        &self,
        account_id: impl Into<AccountId>,
    ) -> Result<GetAccountResponse, SdkError> {
        let request = GetAccountRequest {
            account_id: Some(account_id.into()),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }

    /// Get a summary of an account.
    pub async fn summary(
        &self,
        account_id: impl Into<AccountId>,
    ) -> Result<GetAccountSummaryResponse, SdkError> {
        let request = GetAccountSummaryRequest {
            account_id: Some(account_id.into()),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }

    /// Get the instruments tradeable by an account.
    pub async fn instruments(
        &self,
        request: &GetAccountInstrumentsRequest,
    ) -> Result<GetAccountInstrumentsResponse, SdkError> {
        self.client.http.execute(request).await
    }

    /// Update client-configurable account properties.
    pub async fn configure(
        &self,
        request: &ConfigureAccountRequest,
    ) -> Result<ConfigureAccountResponse, SdkError> {
        self.client.http.execute(request).await
    }

    /// Poll for account changes since a known transaction.
    pub async fn changes(
        &self,
        account_id: impl Into<AccountId>,
        since: impl Into<TransactionId>,
    ) -> Result<GetAccountChangesResponse, SdkError> {
        let request = GetAccountChangesRequest {
            account_id: Some(account_id.into()),
            since_transaction_id: Some(since.into()),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }
}
