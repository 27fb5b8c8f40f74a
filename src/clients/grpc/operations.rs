//! Operations gateway over gRPC.
//!
//! Make-operation requests are sent as completed operations with a random
//! amount; purchases also get a random category.

use tonic::transport::Channel;

use super::channel::build_gateway_grpc_channel;
use super::observer::GrpcCallObserver;
use crate::config::GrpcClientConfig;
use crate::error::ClientError;
use crate::fakers::FAKE;
use crate::load::stats::SharedStats;
use crate::proto::{
    GetOperationReceiptRequest, GetOperationReceiptResponse, GetOperationRequest,
    GetOperationResponse, GetOperationsRequest, GetOperationsResponse,
    GetOperationsSummaryRequest, GetOperationsSummaryResponse, MakeBillPaymentOperationRequest,
    MakeBillPaymentOperationResponse, MakeCashWithdrawalOperationRequest,
    MakeCashWithdrawalOperationResponse, MakeCashbackOperationRequest,
    MakeCashbackOperationResponse, MakeFeeOperationRequest, MakeFeeOperationResponse,
    MakePurchaseOperationRequest, MakePurchaseOperationResponse, MakeTopUpOperationRequest,
    MakeTopUpOperationResponse, MakeTransferOperationRequest, MakeTransferOperationResponse,
    OperationStatus,
    operations_gateway_service_client::OperationsGatewayServiceClient,
};

#[derive(Debug, Clone)]
pub struct OperationsGatewayGrpcClient {
    stub: OperationsGatewayServiceClient<Channel>,
    observer: GrpcCallObserver,
}

impl OperationsGatewayGrpcClient {
    pub fn new(channel: Channel, observer: GrpcCallObserver) -> Self {
        Self {
            stub: OperationsGatewayServiceClient::new(channel),
            observer,
        }
    }

    pub async fn get_operation_api(
        &self,
        request: GetOperationRequest,
    ) -> Result<tonic::Response<GetOperationResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.OperationsGatewayService/GetOperation",
                stub.get_operation(request),
            )
            .await?)
    }

    pub async fn get_operation_receipt_api(
        &self,
        request: GetOperationReceiptRequest,
    ) -> Result<tonic::Response<GetOperationReceiptResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.OperationsGatewayService/GetOperationReceipt",
                stub.get_operation_receipt(request),
            )
            .await?)
    }

    pub async fn get_operations_api(
        &self,
        request: GetOperationsRequest,
    ) -> Result<tonic::Response<GetOperationsResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.OperationsGatewayService/GetOperations",
                stub.get_operations(request),
            )
            .await?)
    }

    pub async fn get_operations_summary_api(
        &self,
        request: GetOperationsSummaryRequest,
    ) -> Result<tonic::Response<GetOperationsSummaryResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.OperationsGatewayService/GetOperationsSummary",
                stub.get_operations_summary(request),
            )
            .await?)
    }

    pub async fn make_fee_operation_api(
        &self,
        request: MakeFeeOperationRequest,
    ) -> Result<tonic::Response<MakeFeeOperationResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.OperationsGatewayService/MakeFeeOperation",
                stub.make_fee_operation(request),
            )
            .await?)
    }

    pub async fn make_top_up_operation_api(
        &self,
        request: MakeTopUpOperationRequest,
    ) -> Result<tonic::Response<MakeTopUpOperationResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.OperationsGatewayService/MakeTopUpOperation",
                stub.make_top_up_operation(request),
            )
            .await?)
    }

    pub async fn make_cashback_operation_api(
        &self,
        request: MakeCashbackOperationRequest,
    ) -> Result<tonic::Response<MakeCashbackOperationResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.OperationsGatewayService/MakeCashbackOperation",
                stub.make_cashback_operation(request),
            )
            .await?)
    }

    pub async fn make_transfer_operation_api(
        &self,
        request: MakeTransferOperationRequest,
    ) -> Result<tonic::Response<MakeTransferOperationResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.OperationsGatewayService/MakeTransferOperation",
                stub.make_transfer_operation(request),
            )
            .await?)
    }

    pub async fn make_purchase_operation_api(
        &self,
        request: MakePurchaseOperationRequest,
    ) -> Result<tonic::Response<MakePurchaseOperationResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.OperationsGatewayService/MakePurchaseOperation",
                stub.make_purchase_operation(request),
            )
            .await?)
    }

    pub async fn make_bill_payment_operation_api(
        &self,
        request: MakeBillPaymentOperationRequest,
    ) -> Result<tonic::Response<MakeBillPaymentOperationResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.OperationsGatewayService/MakeBillPaymentOperation",
                stub.make_bill_payment_operation(request),
            )
            .await?)
    }

    pub async fn make_cash_withdrawal_operation_api(
        &self,
        request: MakeCashWithdrawalOperationRequest,
    ) -> Result<tonic::Response<MakeCashWithdrawalOperationResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.OperationsGatewayService/MakeCashWithdrawalOperation",
                stub.make_cash_withdrawal_operation(request),
            )
            .await?)
    }

    pub async fn get_operation(
        &self,
        operation_id: &str,
    ) -> Result<GetOperationResponse, ClientError> {
        let request = GetOperationRequest {
            id: operation_id.to_string(),
        };
        Ok(self.get_operation_api(request).await?.into_inner())
    }

    pub async fn get_operation_receipt(
        &self,
        operation_id: &str,
    ) -> Result<GetOperationReceiptResponse, ClientError> {
        let request = GetOperationReceiptRequest {
            operation_id: operation_id.to_string(),
        };
        Ok(self.get_operation_receipt_api(request).await?.into_inner())
    }

    pub async fn get_operations(
        &self,
        account_id: &str,
    ) -> Result<GetOperationsResponse, ClientError> {
        let request = GetOperationsRequest {
            account_id: account_id.to_string(),
        };
        Ok(self.get_operations_api(request).await?.into_inner())
    }

    pub async fn get_operations_summary(
        &self,
        account_id: &str,
    ) -> Result<GetOperationsSummaryResponse, ClientError> {
        let request = GetOperationsSummaryRequest {
            account_id: account_id.to_string(),
        };
        Ok(self.get_operations_summary_api(request).await?.into_inner())
    }

    pub async fn make_fee_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeFeeOperationResponse, ClientError> {
        let request = MakeFeeOperationRequest {
            status: OperationStatus::Completed as i32,
            amount: FAKE.amount(),
            card_id: card_id.to_string(),
            account_id: account_id.to_string(),
        };
        Ok(self.make_fee_operation_api(request).await?.into_inner())
    }

    pub async fn make_top_up_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeTopUpOperationResponse, ClientError> {
        let request = MakeTopUpOperationRequest {
            status: OperationStatus::Completed as i32,
            amount: FAKE.amount(),
            card_id: card_id.to_string(),
            account_id: account_id.to_string(),
        };
        Ok(self.make_top_up_operation_api(request).await?.into_inner())
    }

    pub async fn make_cashback_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeCashbackOperationResponse, ClientError> {
        let request = MakeCashbackOperationRequest {
            status: OperationStatus::Completed as i32,
            amount: FAKE.amount(),
            card_id: card_id.to_string(),
            account_id: account_id.to_string(),
        };
        Ok(self.make_cashback_operation_api(request).await?.into_inner())
    }

    pub async fn make_transfer_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeTransferOperationResponse, ClientError> {
        let request = MakeTransferOperationRequest {
            status: OperationStatus::Completed as i32,
            amount: FAKE.amount(),
            card_id: card_id.to_string(),
            account_id: account_id.to_string(),
        };
        Ok(self.make_transfer_operation_api(request).await?.into_inner())
    }

    pub async fn make_purchase_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakePurchaseOperationResponse, ClientError> {
        let request = MakePurchaseOperationRequest {
            status: OperationStatus::Completed as i32,
            amount: FAKE.amount(),
            card_id: card_id.to_string(),
            account_id: account_id.to_string(),
            category: FAKE.category(),
        };
        Ok(self.make_purchase_operation_api(request).await?.into_inner())
    }

    pub async fn make_bill_payment_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeBillPaymentOperationResponse, ClientError> {
        let request = MakeBillPaymentOperationRequest {
            status: OperationStatus::Completed as i32,
            amount: FAKE.amount(),
            card_id: card_id.to_string(),
            account_id: account_id.to_string(),
        };
        Ok(self.make_bill_payment_operation_api(request).await?.into_inner())
    }

    pub async fn make_cash_withdrawal_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeCashWithdrawalOperationResponse, ClientError> {
        let request = MakeCashWithdrawalOperationRequest {
            status: OperationStatus::Completed as i32,
            amount: FAKE.amount(),
            card_id: card_id.to_string(),
            account_id: account_id.to_string(),
        };
        Ok(self.make_cash_withdrawal_operation_api(request).await?.into_inner())
    }
}

pub fn build_operations_gateway_grpc_client(
    config: &GrpcClientConfig,
) -> Result<OperationsGatewayGrpcClient, ClientError> {
    Ok(OperationsGatewayGrpcClient::new(
        build_gateway_grpc_channel(config)?,
        GrpcCallObserver::logging(),
    ))
}

pub fn build_operations_gateway_load_grpc_client(
    config: &GrpcClientConfig,
    stats: SharedStats,
) -> Result<OperationsGatewayGrpcClient, ClientError> {
    Ok(OperationsGatewayGrpcClient::new(
        build_gateway_grpc_channel(config)?,
        GrpcCallObserver::with_stats(stats),
    ))
}
