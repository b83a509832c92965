//! Pricing sub-client — current prices and candlestick history.

use crate::client::OandaClient;
use crate::domain::pricing::requests::{
    GetCandlesRequest, GetCandlesResponse, GetPricingRequest, GetPricingResponse,
};
use crate::error::SdkError;
use crate::shared::{AccountId, InstrumentName};

pub struct Pricing<'a> {
    pub(crate) client: &'a OandaClient,
}

impl<'a> Pricing<'a> {
    /// Get current prices for a list of instruments.
    pub async fn get(
        &self,
        account_id: impl Into<AccountId>,
        instruments: Vec<InstrumentName>,
    ) -> Result<GetPricingResponse, SdkError> {
        let request = GetPricingRequest {
            account_id: Some(account_id.into()),
            instruments: Some(instruments),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }

    /// Get prices with the full set of query options.
    pub async fn get_with(
        &self,
        request: &GetPricingRequest,
    ) -> Result<GetPricingResponse, SdkError> {
        self.client.http.execute(request).await
    }

    /// Fetch historical candlesticks for an instrument.
    pub async fn candles(
        &self,
        request: &GetCandlesRequest,
    ) -> Result<GetCandlesResponse, SdkError> {
        self.client.http.execute(request).await
    }
}
