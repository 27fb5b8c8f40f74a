//! Accounts gateway over HTTP.

use super::client::{HttpClient, HttpResponse, build_gateway_http_client, build_gateway_load_http_client};
use crate::config::HttpClientConfig;
use crate::error::ClientError;
use crate::load::stats::SharedStats;
use crate::models::account::{
    GetAccountsQuery, GetAccountsResponse, OpenAccountRequest, OpenCreditCardAccountResponse,
    OpenDebitCardAccountResponse, OpenDepositAccountResponse, OpenSavingsAccountResponse,
};

/// Client for `/api/v1/accounts`.
#[derive(Debug, Clone)]
pub struct AccountsGatewayHttpClient {
    client: HttpClient,
}

impl AccountsGatewayHttpClient {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// `GET /api/v1/accounts?userId=...`
    pub async fn get_accounts_api(
        &self,
        query: &GetAccountsQuery,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .get_with_query("/api/v1/accounts", query, None)
            .await
    }

    /// `POST /api/v1/accounts/open-deposit-account`
    pub async fn open_deposit_account_api(
        &self,
        request: &OpenAccountRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .post("/api/v1/accounts/open-deposit-account", request, None)
            .await
    }

    /// `POST /api/v1/accounts/open-savings-account`
    pub async fn open_savings_account_api(
        &self,
        request: &OpenAccountRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .post("/api/v1/accounts/open-savings-account", request, None)
            .await
    }

    /// `POST /api/v1/accounts/open-debit-card-account`
    pub async fn open_debit_card_account_api(
        &self,
        request: &OpenAccountRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .post("/api/v1/accounts/open-debit-card-account", request, None)
            .await
    }

    /// `POST /api/v1/accounts/open-credit-card-account`
    pub async fn open_credit_card_account_api(
        &self,
        request: &OpenAccountRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.client
            .post("/api/v1/accounts/open-credit-card-account", request, None)
            .await
    }

    pub async fn get_accounts(&self, user_id: &str) -> Result<GetAccountsResponse, ClientError> {
        let query = GetAccountsQuery {
            user_id: user_id.to_string(),
        };
        self.get_accounts_api(&query).await?.json()
    }

    pub async fn open_deposit_account(
        &self,
        user_id: &str,
    ) -> Result<OpenDepositAccountResponse, ClientError> {
        self.open_deposit_account_api(&open_request(user_id))
            .await?
            .json()
    }

    pub async fn open_savings_account(
        &self,
        user_id: &str,
    ) -> Result<OpenSavingsAccountResponse, ClientError> {
        self.open_savings_account_api(&open_request(user_id))
            .await?
            .json()
    }

    pub async fn open_debit_card_account(
        &self,
        user_id: &str,
    ) -> Result<OpenDebitCardAccountResponse, ClientError> {
        self.open_debit_card_account_api(&open_request(user_id))
            .await?
            .json()
    }

    pub async fn open_credit_card_account(
        &self,
        user_id: &str,
    ) -> Result<OpenCreditCardAccountResponse, ClientError> {
        self.open_credit_card_account_api(&open_request(user_id))
            .await?
            .json()
    }
}

fn open_request(user_id: &str) -> OpenAccountRequest {
    OpenAccountRequest {
        user_id: user_id.to_string(),
    }
}

pub fn build_accounts_gateway_http_client(
    config: &HttpClientConfig,
) -> Result<AccountsGatewayHttpClient, ClientError> {
    Ok(AccountsGatewayHttpClient::new(build_gateway_http_client(
        config,
    )?))
}

pub fn build_accounts_gateway_load_http_client(
    config: &HttpClientConfig,
    stats: SharedStats,
) -> Result<AccountsGatewayHttpClient, ClientError> {
    Ok(AccountsGatewayHttpClient::new(
        build_gateway_load_http_client(config, stats)?,
    ))
}
