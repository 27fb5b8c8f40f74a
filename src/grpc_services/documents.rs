//! `gateway.v1.DocumentsGatewayService` over the in-memory store.

use tonic::{Request, Response, Status};

use crate::proto::documents_gateway_service_server::DocumentsGatewayService;
use crate::proto::{
    GetContractDocumentRequest, GetContractDocumentResponse, GetTariffDocumentRequest,
    GetTariffDocumentResponse,
};
use crate::services::document_service;
use crate::store::SharedStore;

#[derive(Debug, Clone)]
pub struct DocumentsService {
    store: SharedStore,
}

impl DocumentsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[tonic::async_trait]
impl DocumentsGatewayService for DocumentsService {
    async fn get_tariff_document(
        &self,
        request: Request<GetTariffDocumentRequest>,
    ) -> Result<Response<GetTariffDocumentResponse>, Status> {
        let account = self.store.get_account(&request.into_inner().account_id).await?;

        Ok(Response::new(GetTariffDocumentResponse {
            tariff: Some(document_service::tariff_document(&account).into()),
        }))
    }

    async fn get_contract_document(
        &self,
        request: Request<GetContractDocumentRequest>,
    ) -> Result<Response<GetContractDocumentResponse>, Status> {
        let account = self.store.get_account(&request.into_inner().account_id).await?;

        Ok(Response::new(GetContractDocumentResponse {
            contract: Some(document_service::contract_document(&account).into()),
        }))
    }
}
