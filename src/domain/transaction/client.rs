//! Transactions sub-client — account audit trail queries.

use crate::client::OandaClient;
use crate::domain::transaction::requests::{
    GetTransactionRangeRequest, GetTransactionRequest, GetTransactionResponse,
    GetTransactionsSinceIdRequest, ListTransactionsRequest, ListTransactionsResponse,
    TransactionsResponse,
};
use crate::error::SdkError;
use crate::shared::{AccountId, TransactionId};

pub struct Transactions<'a> {
    pub(crate) client: &'a OandaClient,
}

impl<'a> Transactions<'a> {
    /// List the transaction pages covering a time range.
    pub async fn list(
        &self,
        request: &ListTransactionsRequest,
    ) -> Result<ListTransactionsResponse, SdkError> {
        self.client.http.execute(request).await
    }

    /// Get the details of a single transaction.
    pub async fn get(
        &self,
        account_id: impl Into<AccountId>,
        transaction_id: impl Into<TransactionId>,
    ) -> Result<GetTransactionResponse, SdkError> {
        let request = GetTransactionRequest {
            account_id: Some(account_id.into()),
            transaction_id: Some(transaction_id.into()),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }

    /// Get the transactions in an inclusive identifier range.
    pub async fn range(
        &self,
        request: &GetTransactionRangeRequest,
    ) -> Result<TransactionsResponse, SdkError> {
        self.client.http.execute(request).await
    }

    /// Get every transaction newer than the given identifier.
    pub async fn since_id(
        &self,
        account_id: impl Into<AccountId>,
        id: impl Into<TransactionId>,
    ) -> Result<TransactionsResponse, SdkError> {
        let request = GetTransactionsSinceIdRequest {
            account_id: Some(account_id.into()),
            id: Some(id.into()),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }
}
