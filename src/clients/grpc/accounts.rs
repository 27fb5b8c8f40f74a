//! Accounts gateway over gRPC.

use tonic::transport::Channel;

use super::channel::build_gateway_grpc_channel;
use super::observer::GrpcCallObserver;
use crate::config::GrpcClientConfig;
use crate::error::ClientError;
use crate::load::stats::SharedStats;
use crate::proto::{
    GetAccountsRequest, GetAccountsResponse, OpenCreditCardAccountRequest,
    OpenCreditCardAccountResponse, OpenDebitCardAccountRequest, OpenDebitCardAccountResponse,
    OpenDepositAccountRequest, OpenDepositAccountResponse, OpenSavingsAccountRequest,
    OpenSavingsAccountResponse, accounts_gateway_service_client::AccountsGatewayServiceClient,
};

#[derive(Debug, Clone)]
pub struct AccountsGatewayGrpcClient {
    stub: AccountsGatewayServiceClient<Channel>,
    observer: GrpcCallObserver,
}

impl AccountsGatewayGrpcClient {
    pub fn new(channel: Channel, observer: GrpcCallObserver) -> Self {
        Self {
            stub: AccountsGatewayServiceClient::new(channel),
            observer,
        }
    }

    pub async fn get_accounts_api(
        &self,
        request: GetAccountsRequest,
    ) -> Result<tonic::Response<GetAccountsResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.AccountsGatewayService/GetAccounts",
                stub.get_accounts(request),
            )
            .await?)
    }

    pub async fn open_deposit_account_api(
        &self,
        request: OpenDepositAccountRequest,
    ) -> Result<tonic::Response<OpenDepositAccountResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.AccountsGatewayService/OpenDepositAccount",
                stub.open_deposit_account(request),
            )
            .await?)
    }

    pub async fn open_savings_account_api(
        &self,
        request: OpenSavingsAccountRequest,
    ) -> Result<tonic::Response<OpenSavingsAccountResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.AccountsGatewayService/OpenSavingsAccount",
                stub.open_savings_account(request),
            )
            .await?)
    }

    pub async fn open_debit_card_account_api(
        &self,
        request: OpenDebitCardAccountRequest,
    ) -> Result<tonic::Response<OpenDebitCardAccountResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.AccountsGatewayService/OpenDebitCardAccount",
                stub.open_debit_card_account(request),
            )
            .await?)
    }

    pub async fn open_credit_card_account_api(
        &self,
        request: OpenCreditCardAccountRequest,
    ) -> Result<tonic::Response<OpenCreditCardAccountResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.AccountsGatewayService/OpenCreditCardAccount",
                stub.open_credit_card_account(request),
            )
            .await?)
    }

    pub async fn get_accounts(&self, user_id: &str) -> Result<GetAccountsResponse, ClientError> {
        let request = GetAccountsRequest {
            user_id: user_id.to_string(),
        };
        Ok(self.get_accounts_api(request).await?.into_inner())
    }

    pub async fn open_deposit_account(
        &self,
        user_id: &str,
    ) -> Result<OpenDepositAccountResponse, ClientError> {
        let request = OpenDepositAccountRequest {
            user_id: user_id.to_string(),
        };
        Ok(self.open_deposit_account_api(request).await?.into_inner())
    }

    pub async fn open_savings_account(
        &self,
        user_id: &str,
    ) -> Result<OpenSavingsAccountResponse, ClientError> {
        let request = OpenSavingsAccountRequest {
            user_id: user_id.to_string(),
        };
        Ok(self.open_savings_account_api(request).await?.into_inner())
    }

    pub async fn open_debit_card_account(
        &self,
        user_id: &str,
    ) -> Result<OpenDebitCardAccountResponse, ClientError> {
        let request = OpenDebitCardAccountRequest {
            user_id: user_id.to_string(),
        };
        Ok(self
            .open_debit_card_account_api(request)
            .await?
            .into_inner())
    }

    pub async fn open_credit_card_account(
        &self,
        user_id: &str,
    ) -> Result<OpenCreditCardAccountResponse, ClientError> {
        let request = OpenCreditCardAccountRequest {
            user_id: user_id.to_string(),
        };
        Ok(self
            .open_credit_card_account_api(request)
            .await?
            .into_inner())
    }
}

pub fn build_accounts_gateway_grpc_client(
    config: &GrpcClientConfig,
) -> Result<AccountsGatewayGrpcClient, ClientError> {
    Ok(AccountsGatewayGrpcClient::new(
        build_gateway_grpc_channel(config)?,
        GrpcCallObserver::logging(),
    ))
}

pub fn build_accounts_gateway_load_grpc_client(
    config: &GrpcClientConfig,
    stats: SharedStats,
) -> Result<AccountsGatewayGrpcClient, ClientError> {
    Ok(AccountsGatewayGrpcClient::new(
        build_gateway_grpc_channel(config)?,
        GrpcCallObserver::with_stats(stats),
    ))
}
