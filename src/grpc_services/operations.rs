//! `gateway.v1.OperationsGatewayService` over the in-memory store.
//!
//! The operation type comes from the method, never from the request. Amount
//! and balance rules live in `operation_service`.

use tonic::{Request, Response, Status};

use super::convert::operation_request;
use crate::models::operation::{MakeOperationRequest, OperationType};
use crate::proto::operations_gateway_service_server::OperationsGatewayService;
use crate::proto::{
    self, GetOperationReceiptRequest, GetOperationReceiptResponse, GetOperationRequest,
    GetOperationResponse, GetOperationsRequest, GetOperationsResponse,
    GetOperationsSummaryRequest, GetOperationsSummaryResponse, MakeBillPaymentOperationRequest,
    MakeBillPaymentOperationResponse, MakeCashWithdrawalOperationRequest,
    MakeCashWithdrawalOperationResponse, MakeCashbackOperationRequest,
    MakeCashbackOperationResponse, MakeFeeOperationRequest, MakeFeeOperationResponse,
    MakePurchaseOperationRequest, MakePurchaseOperationResponse, MakeTopUpOperationRequest,
    MakeTopUpOperationResponse, MakeTransferOperationRequest, MakeTransferOperationResponse,
};
use crate::services::{document_service, operation_service};
use crate::store::SharedStore;

#[derive(Debug, Clone)]
pub struct OperationsService {
    store: SharedStore,
}

impl OperationsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    async fn make_operation(
        &self,
        operation_type: OperationType,
        request: MakeOperationRequest,
        category: Option<String>,
    ) -> Result<Option<proto::Operation>, Status> {
        let operation =
            operation_service::execute_operation(&self.store, operation_type, request, category)
                .await?;
        Ok(Some(operation.into()))
    }
}

#[tonic::async_trait]
impl OperationsGatewayService for OperationsService {
    async fn get_operation(
        &self,
        request: Request<GetOperationRequest>,
    ) -> Result<Response<GetOperationResponse>, Status> {
        let operation = self.store.get_operation(&request.into_inner().id).await?;

        Ok(Response::new(GetOperationResponse {
            operation: Some(operation.into()),
        }))
    }

    async fn get_operation_receipt(
        &self,
        request: Request<GetOperationReceiptRequest>,
    ) -> Result<Response<GetOperationReceiptResponse>, Status> {
        let operation = self
            .store
            .get_operation(&request.into_inner().operation_id)
            .await?;

        Ok(Response::new(GetOperationReceiptResponse {
            receipt: Some(document_service::operation_receipt(&operation).into()),
        }))
    }

    async fn get_operations(
        &self,
        request: Request<GetOperationsRequest>,
    ) -> Result<Response<GetOperationsResponse>, Status> {
        let operations = self
            .store
            .get_operations(&request.into_inner().account_id)
            .await?;

        Ok(Response::new(GetOperationsResponse {
            operations: operations.into_iter().map(Into::into).collect(),
        }))
    }

    async fn get_operations_summary(
        &self,
        request: Request<GetOperationsSummaryRequest>,
    ) -> Result<Response<GetOperationsSummaryResponse>, Status> {
        let operations = self
            .store
            .get_operations(&request.into_inner().account_id)
            .await?;

        Ok(Response::new(GetOperationsSummaryResponse {
            summary: Some(operation_service::summarize(&operations).into()),
        }))
    }

    async fn make_fee_operation(
        &self,
        request: Request<MakeFeeOperationRequest>,
    ) -> Result<Response<MakeFeeOperationResponse>, Status> {
        let r = request.into_inner();
        let request = operation_request(r.status, r.amount, r.card_id, r.account_id)?;
        let operation = self.make_operation(OperationType::Fee, request, None).await?;
        Ok(Response::new(MakeFeeOperationResponse { operation }))
    }

    async fn make_top_up_operation(
        &self,
        request: Request<MakeTopUpOperationRequest>,
    ) -> Result<Response<MakeTopUpOperationResponse>, Status> {
        let r = request.into_inner();
        let request = operation_request(r.status, r.amount, r.card_id, r.account_id)?;
        let operation = self.make_operation(OperationType::TopUp, request, None).await?;
        Ok(Response::new(MakeTopUpOperationResponse { operation }))
    }

    async fn make_cashback_operation(
        &self,
        request: Request<MakeCashbackOperationRequest>,
    ) -> Result<Response<MakeCashbackOperationResponse>, Status> {
        let r = request.into_inner();
        let request = operation_request(r.status, r.amount, r.card_id, r.account_id)?;
        let operation = self.make_operation(OperationType::Cashback, request, None).await?;
        Ok(Response::new(MakeCashbackOperationResponse { operation }))
    }

    async fn make_transfer_operation(
        &self,
        request: Request<MakeTransferOperationRequest>,
    ) -> Result<Response<MakeTransferOperationResponse>, Status> {
        let r = request.into_inner();
        let request = operation_request(r.status, r.amount, r.card_id, r.account_id)?;
        let operation = self.make_operation(OperationType::Transfer, request, None).await?;
        Ok(Response::new(MakeTransferOperationResponse { operation }))
    }

    /// Purchase is the only operation carrying a category.
    async fn make_purchase_operation(
        &self,
        request: Request<MakePurchaseOperationRequest>,
    ) -> Result<Response<MakePurchaseOperationResponse>, Status> {
        let r = request.into_inner();
        let request = operation_request(r.status, r.amount, r.card_id, r.account_id)?;
        let operation = self
            .make_operation(OperationType::Purchase, request, Some(r.category))
            .await?;
        Ok(Response::new(MakePurchaseOperationResponse { operation }))
    }

    async fn make_bill_payment_operation(
        &self,
        request: Request<MakeBillPaymentOperationRequest>,
    ) -> Result<Response<MakeBillPaymentOperationResponse>, Status> {
        let r = request.into_inner();
        let request = operation_request(r.status, r.amount, r.card_id, r.account_id)?;
        let operation = self
            .make_operation(OperationType::BillPayment, request, None)
            .await?;
        Ok(Response::new(MakeBillPaymentOperationResponse { operation }))
    }

    async fn make_cash_withdrawal_operation(
        &self,
        request: Request<MakeCashWithdrawalOperationRequest>,
    ) -> Result<Response<MakeCashWithdrawalOperationResponse>, Status> {
        let r = request.into_inner();
        let request = operation_request(r.status, r.amount, r.card_id, r.account_id)?;
        let operation = self
            .make_operation(OperationType::CashWithdrawal, request, None)
            .await?;
        Ok(Response::new(MakeCashWithdrawalOperationResponse { operation }))
    }
}
