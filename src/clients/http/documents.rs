//! Documents gateway over HTTP.

use super::client::{HttpClient, HttpResponse, build_gateway_http_client, build_gateway_load_http_client};
use crate::config::HttpClientConfig;
use crate::error::ClientError;
use crate::load::stats::SharedStats;
use crate::models::document::{GetContractDocumentResponse, GetTariffDocumentResponse};

/// Client for `/api/v1/documents`.
#[derive(Debug, Clone)]
pub struct DocumentsGatewayHttpClient {
    client: HttpClient,
}

impl DocumentsGatewayHttpClient {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// `GET /api/v1/documents/tariff-document/{account_id}`
    pub async fn get_tariff_document_api(
        &self,
        account_id: &str,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .get(
                &self.client.id_path("/api/v1/documents/tariff-document", account_id),
                Some("/api/v1/documents/tariff-document/{account_id}"),
            )
            .await
    }

    /// `GET /api/v1/documents/contract-document/{account_id}`
    pub async fn get_contract_document_api(
        &self,
        account_id: &str,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .get(
                &self.client.id_path("/api/v1/documents/contract-document", account_id),
                Some("/api/v1/documents/contract-document/{account_id}"),
            )
            .await
    }

    pub async fn get_tariff_document(
        &self,
        account_id: &str,
    ) -> Result<GetTariffDocumentResponse, ClientError> {
        self.get_tariff_document_api(account_id).await?.json()
    }

    pub async fn get_contract_document(
        &self,
        account_id: &str,
    ) -> Result<GetContractDocumentResponse, ClientError> {
        self.get_contract_document_api(account_id).await?.json()
    }
}

pub fn build_documents_gateway_http_client(
    config: &HttpClientConfig,
) -> Result<DocumentsGatewayHttpClient, ClientError> {
    Ok(DocumentsGatewayHttpClient::new(build_gateway_http_client(
        config,
    )?))
}

pub fn build_documents_gateway_load_http_client(
    config: &HttpClientConfig,
    stats: SharedStats,
) -> Result<DocumentsGatewayHttpClient, ClientError> {
    Ok(DocumentsGatewayHttpClient::new(
        build_gateway_load_http_client(config, stats)?,
    ))
}
