//! Trades sub-client — open trade queries and trade management.

use crate::client::OandaClient;
use crate::domain::trade::requests::{
    CloseTradeRequest, CloseTradeResponse, GetTradeRequest, GetTradeResponse,
    ListOpenTradesRequest, ListTradesRequest, ListTradesResponse,
    SetTradeClientExtensionsRequest, SetTradeClientExtensionsResponse,
};
use crate::error::SdkError;
use crate::shared::{AccountId, TradeSpecifier};

pub struct Trades<'a> {
    pub(crate) client: &'a OandaClient,
}

impl<'a> Trades<'a> {
    /// List trades matching the request's filters.
    pub async fn list(&self, request: &ListTradesRequest) -> Result<ListTradesResponse, SdkError> {
        self.client.http.execute(request).await
    }

    /// List all currently open trades in an account.
    pub async fn list_open(
        &self,
        account_id: impl Into<AccountId>,
    ) -> Result<ListTradesResponse, SdkError> {
        let request = ListOpenTradesRequest {
            account_id: Some(account_id.into()),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }

    /// Get the details of a single trade.
    pub async fn get(
        &self,
        account_id: impl Into<AccountId>,
        trade: TradeSpecifier,
    ) -> Result<GetTradeResponse, SdkError> {
        let request = GetTradeRequest {
            account_id: Some(account_id.into()),
            trade_specifier: Some(trade),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }

    /// Close an open trade, fully or partially.
    pub async fn close(&self, request: &CloseTradeRequest) -> Result<CloseTradeResponse, SdkError> {
        self.client.http.execute(request).await
    }

    /// Update the client extensions attached to a trade.
    pub async fn set_client_extensions(
        &self,
        request: &SetTradeClientExtensionsRequest,
    ) -> Result<SetTradeClientExtensionsResponse, SdkError> {
        self.client.http.execute(request).await
    }
}
