//! Orders sub-client — order creation, queries, and lifecycle management.

use crate::client::OandaClient;
use crate::domain::order::requests::{
    CancelOrderRequest, CancelOrderResponse, CreateOrderRequest, CreateOrderResponse,
    GetOrderRequest, GetOrderResponse, ListOrdersRequest, ListOrdersResponse,
    ListPendingOrdersRequest, ReplaceOrderRequest, ReplaceOrderResponse,
    SetOrderClientExtensionsRequest, SetOrderClientExtensionsResponse,
};
use crate::domain::order::OrderRequest;
use crate::error::SdkError;
use crate::shared::{AccountId, OrderSpecifier};

pub struct Orders<'a> {
    pub(crate) client: &'a OandaClient,
}

impl<'a> Orders<'a> {
    /// Create an order in an account.
    pub async fn create(
        &self,
        account_id: impl Into<AccountId>,
        order: OrderRequest,
    ) -> Result<CreateOrderResponse, SdkError> {
        let request = CreateOrderRequest {
            account_id: Some(account_id.into()),
            order: Some(order),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }

    /// List orders matching the request's filters.
    pub async fn list(&self, request: &ListOrdersRequest) -> Result<ListOrdersResponse, SdkError> {
        self.client.http.execute(request).await
    }

    /// List all pending orders in an account.
    pub async fn list_pending(
        &self,
        account_id: impl Into<AccountId>,
    ) -> Result<ListOrdersResponse, SdkError> {
        let request = ListPendingOrdersRequest {
            account_id: Some(account_id.into()),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }

    /// Get the details of a single order.
    pub async fn get(
        &self,
        account_id: impl Into<AccountId>,
        order: OrderSpecifier,
    ) -> Result<GetOrderResponse, SdkError> {
        let request = GetOrderRequest {
            account_id: Some(account_id.into()),
            order_specifier: Some(order),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }

    /// Cancel a pending order, replacing it with a new one.
    pub async fn replace(
        &self,
        request: &ReplaceOrderRequest,
    ) -> Result<ReplaceOrderResponse, SdkError> {
        self.client.http.execute(request).await
    }

    /// Cancel a pending order.
    pub async fn cancel(
        &self,
        account_id: impl Into<AccountId>,
        order: OrderSpecifier,
    ) -> Result<CancelOrderResponse, SdkError> {
        let request = CancelOrderRequest {
            account_id: Some(account_id.into()),
            order_specifier: Some(order),
            ..Default::default()
        };
        self.client.http.execute(&request).await
    }

    /// Update the client extensions attached to an order.
    pub async fn set_client_extensions(
        &self,
        request: &SetOrderClientExtensionsRequest,
    ) -> Result<SetOrderClientExtensionsResponse, SdkError> {
        self.client.http.execute(request).await
    }
}
