//! Cards gateway over HTTP.

use super::client::{HttpClient, HttpResponse, build_gateway_http_client, build_gateway_load_http_client};
use crate::config::HttpClientConfig;
use crate::error::ClientError;
use crate::load::stats::SharedStats;
use crate::models::card::{IssueCardRequest, IssuePhysicalCardResponse, IssueVirtualCardResponse};

/// Client for `/api/v1/cards`.
#[derive(Debug, Clone)]
pub struct CardsGatewayHttpClient {
    client: HttpClient,
}

impl CardsGatewayHttpClient {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// `POST /api/v1/cards/issue-virtual-card`
    pub async fn issue_virtual_card_api(
        &self,
        request: &IssueCardRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .post("/api/v1/cards/issue-virtual-card", request, None)
            .await
    }

    /// `POST /api/v1/cards/issue-physical-card`
    pub async fn issue_physical_card_api(
        &self,
        request: &IssueCardRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .post("/api/v1/cards/issue-physical-card", request, None)
            .await
    }

    pub async fn issue_virtual_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<IssueVirtualCardResponse, ClientError> {
        self.issue_virtual_card_api(&issue_request(user_id, account_id))
            .await?
            .json()
    }

    pub async fn issue_physical_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<IssuePhysicalCardResponse, ClientError> {
        self.issue_physical_card_api(&issue_request(user_id, account_id))
            .await?
            .json()
    }
}

fn issue_request(user_id: &str, account_id: &str) -> IssueCardRequest {
    IssueCardRequest {
        user_id: user_id.to_string(),
        account_id: account_id.to_string(),
    }
}

pub fn build_cards_gateway_http_client(
    config: &HttpClientConfig,
) -> Result<CardsGatewayHttpClient, ClientError> {
    Ok(CardsGatewayHttpClient::new(build_gateway_http_client(config)?))
}

pub fn build_cards_gateway_load_http_client(
    config: &HttpClientConfig,
    stats: SharedStats,
) -> Result<CardsGatewayHttpClient, ClientError> {
    Ok(CardsGatewayHttpClient::new(build_gateway_load_http_client(
        config, stats,
    )?))
}
