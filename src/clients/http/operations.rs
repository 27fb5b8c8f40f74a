//! Operations gateway over HTTP.
//!
//! Every "make" endpoint sends a completed operation with a random amount; the
//! purchase endpoint adds a random spending category.

use super::client::{HttpClient, HttpResponse, build_gateway_http_client, build_gateway_load_http_client};
use crate::config::HttpClientConfig;
use crate::error::ClientError;
use crate::load::stats::SharedStats;
use crate::models::operation::{
    GetOperationReceiptResponse, GetOperationResponse, GetOperationsQuery, GetOperationsResponse,
    GetOperationsSummaryResponse, MakeOperationRequest, MakeOperationResponse,
    MakePurchaseOperationRequest,
};

/// Client for `/api/v1/operations`.
#[derive(Debug, Clone)]
pub struct OperationsGatewayHttpClient {
    client: HttpClient,
}

impl OperationsGatewayHttpClient {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// `GET /api/v1/operations/{operation_id}`
    pub async fn get_operation_api(&self, operation_id: &str) -> Result<HttpResponse, ClientError> {
        self.client
            .get(
                &self.client.id_path("/api/v1/operations", operation_id),
                Some("/api/v1/operations/{operation_id}"),
            )
            .await
    }

    /// `GET /api/v1/operations/operation-receipt/{operation_id}`
    pub async fn get_operation_receipt_api(
        &self,
        operation_id: &str,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .get(
                &self.client.id_path("/api/v1/operations/operation-receipt", operation_id),
                Some("/api/v1/operations/operation-receipt/{operation_id}"),
            )
            .await
    }

    /// `GET /api/v1/operations?accountId=...`
    pub async fn get_operations_api(
        &self,
        query: &GetOperationsQuery,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .get_with_query("/api/v1/operations", query, None)
            .await
    }

    /// `GET /api/v1/operations/operations-summary?accountId=...`
    pub async fn get_operations_summary_api(
        &self,
        query: &GetOperationsQuery,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .get_with_query("/api/v1/operations/operations-summary", query, None)
            .await
    }

    /// `POST /api/v1/operations/make-fee-operation`
    pub async fn make_fee_operation_api(
        &self,
        request: &MakeOperationRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .post("/api/v1/operations/make-fee-operation", request, None)
            .await
    }

    /// `POST /api/v1/operations/make-top-up-operation`
    pub async fn make_top_up_operation_api(
        &self,
        request: &MakeOperationRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .post("/api/v1/operations/make-top-up-operation", request, None)
            .await
    }

    /// `POST /api/v1/operations/make-cashback-operation`
    pub async fn make_cashback_operation_api(
        &self,
        request: &MakeOperationRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .post("/api/v1/operations/make-cashback-operation", request, None)
            .await
    }

    /// `POST /api/v1/operations/make-transfer-operation`
    pub async fn make_transfer_operation_api(
        &self,
        request: &MakeOperationRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .post("/api/v1/operations/make-transfer-operation", request, None)
            .await
    }

    /// `POST /api/v1/operations/make-purchase-operation`
    pub async fn make_purchase_operation_api(
        &self,
        request: &MakePurchaseOperationRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .post("/api/v1/operations/make-purchase-operation", request, None)
            .await
    }

    /// `POST /api/v1/operations/make-bill-payment-operation`
    pub async fn make_bill_payment_operation_api(
        &self,
        request: &MakeOperationRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .post("/api/v1/operations/make-bill-payment-operation", request, None)
            .await
    }

    /// `POST /api/v1/operations/make-cash-withdrawal-operation`
    pub async fn make_cash_withdrawal_operation_api(
        &self,
        request: &MakeOperationRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .post(
                "/api/v1/operations/make-cash-withdrawal-operation",
                request,
                None,
            )
            .await
    }

    pub async fn get_operation(
        &self,
        operation_id: &str,
    ) -> Result<GetOperationResponse, ClientError> {
        self.get_operation_api(operation_id).await?.json()
    }

    pub async fn get_operation_receipt(
        &self,
        operation_id: &str,
    ) -> Result<GetOperationReceiptResponse, ClientError> {
        self.get_operation_receipt_api(operation_id).await?.json()
    }

    pub async fn get_operations(
        &self,
        account_id: &str,
    ) -> Result<GetOperationsResponse, ClientError> {
        self.get_operations_api(&operations_query(account_id))
            .await?
            .json()
    }

    pub async fn get_operations_summary(
        &self,
        account_id: &str,
    ) -> Result<GetOperationsSummaryResponse, ClientError> {
        self.get_operations_summary_api(&operations_query(account_id))
            .await?
            .json()
    }

    pub async fn make_fee_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, ClientError> {
        let request = MakeOperationRequest::completed(card_id, account_id);
        self.make_fee_operation_api(&request).await?.json()
    }

    pub async fn make_top_up_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, ClientError> {
        let request = MakeOperationRequest::completed(card_id, account_id);
        self.make_top_up_operation_api(&request).await?.json()
    }

    pub async fn make_cashback_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, ClientError> {
        let request = MakeOperationRequest::completed(card_id, account_id);
        self.make_cashback_operation_api(&request).await?.json()
    }

    pub async fn make_transfer_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, ClientError> {
        let request = MakeOperationRequest::completed(card_id, account_id);
        self.make_transfer_operation_api(&request).await?.json()
    }

    pub async fn make_purchase_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, ClientError> {
        let request = MakePurchaseOperationRequest::completed(card_id, account_id);
        self.make_purchase_operation_api(&request).await?.json()
    }

    pub async fn make_bill_payment_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, ClientError> {
        let request = MakeOperationRequest::completed(card_id, account_id);
        self.make_bill_payment_operation_api(&request).await?.json()
    }

    pub async fn make_cash_withdrawal_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, ClientError> {
        let request = MakeOperationRequest::completed(card_id, account_id);
        self.make_cash_withdrawal_operation_api(&request)
            .await?
            .json()
    }
}

fn operations_query(account_id: &str) -> GetOperationsQuery {
    GetOperationsQuery {
        account_id: account_id.to_string(),
    }
}

pub fn build_operations_gateway_http_client(
    config: &HttpClientConfig,
) -> Result<OperationsGatewayHttpClient, ClientError> {
    Ok(OperationsGatewayHttpClient::new(build_gateway_http_client(
        config,
    )?))
}

pub fn build_operations_gateway_load_http_client(
    config: &HttpClientConfig,
    stats: SharedStats,
) -> Result<OperationsGatewayHttpClient, ClientError> {
    Ok(OperationsGatewayHttpClient::new(
        build_gateway_load_http_client(config, stats)?,
    ))
}
