//! Positions sub-client — aggregate position queries and closeout.

use crate::client::OandaClient;
use crate::domain::position::requests::{
    ClosePositionRequest, ClosePositionResponse, GetPositionRequest, GetPositionResponse,
    ListOpenPositionsRequest, ListPositionsRequest, ListPositionsResponse,
};
use crate::error::SdkError;
use crate::shared::{AccountId, InstrumentName};

pub struct Positions<'a> {
    pub(crate) client: &'a OandaClient,
}

impl<'a> Positions<'a> {
    /// List every position the account has had over its lifetime.
    pub async fn list(
        &self,
        account_id: impl Into<AccountId>,
    ) -> Result<ListPositionsResponse, SdkError> {
        let request = ListPositionsRequest {
            account_id: Some(account_id.into()),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }

    /// List only the currently open positions.
    pub async fn list_open(
        &self,
        account_id: impl Into<AccountId>,
    ) -> Result<ListPositionsResponse, SdkError> {
        let request = ListOpenPositionsRequest {
            account_id: Some(account_id.into()),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }

    /// Get the position for one instrument.
    pub async fn get(
        &self,
        account_id: impl Into<AccountId>,
        instrument: impl Into<InstrumentName>,
    ) -> Result<GetPositionResponse, SdkError> {
        let request = GetPositionRequest {
            account_id: Some(account_id.into()),
            instrument: Some(instrument.into()),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }

    /// Close out the open portion of an instrument's position.
    pub async fn close(
        &self,
        request: &ClosePositionRequest,
    ) -> Result<ClosePositionResponse, SdkError> {
        self.client.http.execute(request).await
    }
}
