//! Users gateway over HTTP.

use super::client::{HttpClient, HttpResponse, build_gateway_http_client, build_gateway_load_http_client};
use crate::config::HttpClientConfig;
use crate::error::ClientError;
use crate::load::stats::SharedStats;
use crate::models::user::{CreateUserRequest, CreateUserResponse, GetUserResponse};

/// Client for `/api/v1/users`.
#[derive(Debug, Clone)]
pub struct UsersGatewayHttpClient {
    client: HttpClient,
}

impl UsersGatewayHttpClient {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// `GET /api/v1/users/{user_id}`
    pub async fn get_user_api(&self, user_id: &str) -> Result<HttpResponse, ClientError> {
        self.client
            .get(
                &self.client.id_path("/api/v1/users", user_id),
                Some("/api/v1/users/{user_id}"),
            )
            .await
    }

    /// `POST /api/v1/users`
    pub async fn create_user_api(
        &self,
        request: &CreateUserRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.client.post("/api/v1/users", request, None).await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<GetUserResponse, ClientError> {
        self.get_user_api(user_id).await?.json()
    }

    /// Create a user filled with fake data.
    pub async fn create_user(&self) -> Result<CreateUserResponse, ClientError> {
        let request = CreateUserRequest::fake();
        self.create_user_api(&request).await?.json()
    }
}

pub fn build_users_gateway_http_client(
    config: &HttpClientConfig,
) -> Result<UsersGatewayHttpClient, ClientError> {
    Ok(UsersGatewayHttpClient::new(build_gateway_http_client(config)?))
}

pub fn build_users_gateway_load_http_client(
    config: &HttpClientConfig,
    stats: SharedStats,
) -> Result<UsersGatewayHttpClient, ClientError> {
    Ok(UsersGatewayHttpClient::new(build_gateway_load_http_client(
        config, stats,
    )?))
}
