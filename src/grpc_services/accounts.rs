//! `gateway.v1.AccountsGatewayService` over the in-memory store.
//!
//! Debit and credit card accounts come with one virtual card, as on the REST
//! surface.

use tonic::{Request, Response, Status};

use crate::models::account::AccountType;
use crate::proto;
use crate::proto::accounts_gateway_service_server::AccountsGatewayService;
use crate::proto::{
    GetAccountsRequest, GetAccountsResponse, OpenCreditCardAccountRequest,
    OpenCreditCardAccountResponse, OpenDebitCardAccountRequest, OpenDebitCardAccountResponse,
    OpenDepositAccountRequest, OpenDepositAccountResponse, OpenSavingsAccountRequest,
    OpenSavingsAccountResponse,
};
use crate::store::SharedStore;

#[derive(Debug, Clone)]
pub struct AccountsService {
    store: SharedStore,
}

impl AccountsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    async fn open_account(
        &self,
        user_id: &str,
        account_type: AccountType,
    ) -> Result<Option<proto::Account>, Status> {
        let account = self.store.open_account(user_id, account_type).await?;

        tracing::info!(
            account_id = %account.id,
            user_id = %user_id,
            account_type = ?account_type,
            "Account opened"
        );

        Ok(Some(account.into()))
    }
}

#[tonic::async_trait]
impl AccountsGatewayService for AccountsService {
    async fn get_accounts(
        &self,
        request: Request<GetAccountsRequest>,
    ) -> Result<Response<GetAccountsResponse>, Status> {
        let accounts = self.store.get_accounts(&request.into_inner().user_id).await?;

        Ok(Response::new(GetAccountsResponse {
            accounts: accounts.into_iter().map(Into::into).collect(),
        }))
    }

    async fn open_deposit_account(
        &self,
        request: Request<OpenDepositAccountRequest>,
    ) -> Result<Response<OpenDepositAccountResponse>, Status> {
        let account = self
            .open_account(&request.into_inner().user_id, AccountType::Deposit)
            .await?;
        Ok(Response::new(OpenDepositAccountResponse { account }))
    }

    async fn open_savings_account(
        &self,
        request: Request<OpenSavingsAccountRequest>,
    ) -> Result<Response<OpenSavingsAccountResponse>, Status> {
        let account = self
            .open_account(&request.into_inner().user_id, AccountType::Savings)
            .await?;
        Ok(Response::new(OpenSavingsAccountResponse { account }))
    }

    async fn open_debit_card_account(
        &self,
        request: Request<OpenDebitCardAccountRequest>,
    ) -> Result<Response<OpenDebitCardAccountResponse>, Status> {
        let account = self
            .open_account(&request.into_inner().user_id, AccountType::DebitCard)
            .await?;
        Ok(Response::new(OpenDebitCardAccountResponse { account }))
    }

    async fn open_credit_card_account(
        &self,
        request: Request<OpenCreditCardAccountRequest>,
    ) -> Result<Response<OpenCreditCardAccountResponse>, Status> {
        let account = self
            .open_account(&request.into_inner().user_id, AccountType::CreditCard)
            .await?;
        Ok(Response::new(OpenCreditCardAccountResponse { account }))
    }
}
