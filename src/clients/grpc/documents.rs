//! Documents gateway over gRPC.

use tonic::transport::Channel;

use super::channel::build_gateway_grpc_channel;
use super::observer::GrpcCallObserver;
use crate::config::GrpcClientConfig;
use crate::error::ClientError;
use crate::load::stats::SharedStats;
use crate::proto::{
    GetContractDocumentRequest, GetContractDocumentResponse, GetTariffDocumentRequest,
    GetTariffDocumentResponse, documents_gateway_service_client::DocumentsGatewayServiceClient,
};

#[derive(Debug, Clone)]
pub struct DocumentsGatewayGrpcClient {
    stub: DocumentsGatewayServiceClient<Channel>,
    observer: GrpcCallObserver,
}

impl DocumentsGatewayGrpcClient {
    pub fn new(channel: Channel, observer: GrpcCallObserver) -> Self {
        Self {
            stub: DocumentsGatewayServiceClient::new(channel),
            observer,
        }
    }

    pub async fn get_tariff_document_api(
        &self,
        request: GetTariffDocumentRequest,
    ) -> Result<tonic::Response<GetTariffDocumentResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.DocumentsGatewayService/GetTariffDocument",
                stub.get_tariff_document(request),
            )
            .await?)
    }

    pub async fn get_contract_document_api(
        &self,
        request: GetContractDocumentRequest,
    ) -> Result<tonic::Response<GetContractDocumentResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.DocumentsGatewayService/GetContractDocument",
                stub.get_contract_document(request),
            )
            .await?)
    }

    pub async fn get_tariff_document(
        &self,
        account_id: &str,
    ) -> Result<GetTariffDocumentResponse, ClientError> {
        let request = GetTariffDocumentRequest {
            account_id: account_id.to_string(),
        };
        Ok(self.get_tariff_document_api(request).await?.into_inner())
    }

    pub async fn get_contract_document(
        &self,
        account_id: &str,
    ) -> Result<GetContractDocumentResponse, ClientError> {
        let request = GetContractDocumentRequest {
            account_id: account_id.to_string(),
        };
        Ok(self.get_contract_document_api(request).await?.into_inner())
    }
}

pub fn build_documents_gateway_grpc_client(
    config: &GrpcClientConfig,
) -> Result<DocumentsGatewayGrpcClient, ClientError> {
    Ok(DocumentsGatewayGrpcClient::new(
        build_gateway_grpc_channel(config)?,
        GrpcCallObserver::logging(),
    ))
}

pub fn build_documents_gateway_load_grpc_client(
    config: &GrpcClientConfig,
    stats: SharedStats,
) -> Result<DocumentsGatewayGrpcClient, ClientError> {
    Ok(DocumentsGatewayGrpcClient::new(
        build_gateway_grpc_channel(config)?,
        GrpcCallObserver::with_stats(stats),
    ))
}
