//! Transport-neutral gateway traits.
//!
//! Both the HTTP and the gRPC clients implement these, returning the shared
//! `models` types. gRPC replies are converted on the way out; a reply missing
//! its payload message is a `ClientError::MissingField`.

use async_trait::async_trait;

use super::grpc::{
    AccountsGatewayGrpcClient, CardsGatewayGrpcClient, DocumentsGatewayGrpcClient,
    OperationsGatewayGrpcClient, UsersGatewayGrpcClient, convert::required,
};
use super::http::{
    AccountsGatewayHttpClient, CardsGatewayHttpClient, DocumentsGatewayHttpClient,
    OperationsGatewayHttpClient, UsersGatewayHttpClient,
};
use crate::error::ClientError;
use crate::models::{
    account::Account,
    card::Card,
    document::Document,
    operation::{Operation, OperationReceipt, OperationsSummary},
    user::User,
};

#[async_trait]
pub trait UsersGateway: Send + Sync {
    /// Create a user with fake personal data.
    async fn create_user(&self) -> Result<User, ClientError>;

    async fn get_user(&self, user_id: &str) -> Result<User, ClientError>;
}

#[async_trait]
pub trait AccountsGateway: Send + Sync {
    async fn get_accounts(&self, user_id: &str) -> Result<Vec<Account>, ClientError>;

    async fn open_deposit_account(&self, user_id: &str) -> Result<Account, ClientError>;

    async fn open_savings_account(&self, user_id: &str) -> Result<Account, ClientError>;

    /// Debit card accounts come with a card already issued.
    async fn open_debit_card_account(&self, user_id: &str) -> Result<Account, ClientError>;

    /// Credit card accounts come with a card already issued.
    async fn open_credit_card_account(&self, user_id: &str) -> Result<Account, ClientError>;
}

#[async_trait]
pub trait CardsGateway: Send + Sync {
    async fn issue_virtual_card(&self, user_id: &str, account_id: &str)
    -> Result<Card, ClientError>;

    async fn issue_physical_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<Card, ClientError>;
}

/// Operations on a card account.
///
/// Every `make_*` call performs a completed operation with a random amount.
#[async_trait]
pub trait OperationsGateway: Send + Sync {
    async fn get_operation(&self, operation_id: &str) -> Result<Operation, ClientError>;

    async fn get_operation_receipt(
        &self,
        operation_id: &str,
    ) -> Result<OperationReceipt, ClientError>;

    async fn get_operations(&self, account_id: &str) -> Result<Vec<Operation>, ClientError>;

    async fn get_operations_summary(
        &self,
        account_id: &str,
    ) -> Result<OperationsSummary, ClientError>;

    async fn make_fee_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError>;

    async fn make_top_up_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError>;

    async fn make_cashback_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError>;

    async fn make_transfer_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError>;

    async fn make_purchase_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError>;

    async fn make_bill_payment_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError>;

    async fn make_cash_withdrawal_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError>;
}

#[async_trait]
pub trait DocumentsGateway: Send + Sync {
    async fn get_tariff_document(&self, account_id: &str) -> Result<Document, ClientError>;

    async fn get_contract_document(&self, account_id: &str) -> Result<Document, ClientError>;
}

// ============================================================================
// HTTP
// ============================================================================

#[async_trait]
impl UsersGateway for UsersGatewayHttpClient {
    async fn create_user(&self) -> Result<User, ClientError> {
        Ok(UsersGatewayHttpClient::create_user(self).await?.user)
    }

    async fn get_user(&self, user_id: &str) -> Result<User, ClientError> {
        Ok(UsersGatewayHttpClient::get_user(self, user_id).await?.user)
    }
}

#[async_trait]
impl AccountsGateway for AccountsGatewayHttpClient {
    async fn get_accounts(&self, user_id: &str) -> Result<Vec<Account>, ClientError> {
        Ok(AccountsGatewayHttpClient::get_accounts(self, user_id)
            .await?
            .accounts)
    }

    async fn open_deposit_account(&self, user_id: &str) -> Result<Account, ClientError> {
        Ok(AccountsGatewayHttpClient::open_deposit_account(self, user_id)
            .await?
            .account)
    }

    async fn open_savings_account(&self, user_id: &str) -> Result<Account, ClientError> {
        Ok(AccountsGatewayHttpClient::open_savings_account(self, user_id)
            .await?
            .account)
    }

    async fn open_debit_card_account(&self, user_id: &str) -> Result<Account, ClientError> {
        Ok(AccountsGatewayHttpClient::open_debit_card_account(self, user_id)
            .await?
            .account)
    }

    async fn open_credit_card_account(&self, user_id: &str) -> Result<Account, ClientError> {
        Ok(AccountsGatewayHttpClient::open_credit_card_account(self, user_id)
            .await?
            .account)
    }
}

#[async_trait]
impl CardsGateway for CardsGatewayHttpClient {
    async fn issue_virtual_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<Card, ClientError> {
        Ok(CardsGatewayHttpClient::issue_virtual_card(self, user_id, account_id)
            .await?
            .card)
    }

    async fn issue_physical_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<Card, ClientError> {
        Ok(CardsGatewayHttpClient::issue_physical_card(self, user_id, account_id)
            .await?
            .card)
    }
}

#[async_trait]
impl OperationsGateway for OperationsGatewayHttpClient {
    async fn get_operation(&self, operation_id: &str) -> Result<Operation, ClientError> {
        Ok(OperationsGatewayHttpClient::get_operation(self, operation_id)
            .await?
            .operation)
    }

    async fn get_operation_receipt(
        &self,
        operation_id: &str,
    ) -> Result<OperationReceipt, ClientError> {
        Ok(
            OperationsGatewayHttpClient::get_operation_receipt(self, operation_id)
                .await?
                .receipt,
        )
    }

    async fn get_operations(&self, account_id: &str) -> Result<Vec<Operation>, ClientError> {
        Ok(OperationsGatewayHttpClient::get_operations(self, account_id)
            .await?
            .operations)
    }

    async fn get_operations_summary(
        &self,
        account_id: &str,
    ) -> Result<OperationsSummary, ClientError> {
        Ok(
            OperationsGatewayHttpClient::get_operations_summary(self, account_id)
                .await?
                .summary,
        )
    }

    async fn make_fee_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        Ok(
            OperationsGatewayHttpClient::make_fee_operation(self, card_id, account_id)
                .await?
                .operation,
        )
    }

    async fn make_top_up_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        Ok(
            OperationsGatewayHttpClient::make_top_up_operation(self, card_id, account_id)
                .await?
                .operation,
        )
    }

    async fn make_cashback_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        Ok(
            OperationsGatewayHttpClient::make_cashback_operation(self, card_id, account_id)
                .await?
                .operation,
        )
    }

    async fn make_transfer_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        Ok(
            OperationsGatewayHttpClient::make_transfer_operation(self, card_id, account_id)
                .await?
                .operation,
        )
    }

    async fn make_purchase_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        Ok(
            OperationsGatewayHttpClient::make_purchase_operation(self, card_id, account_id)
                .await?
                .operation,
        )
    }

    async fn make_bill_payment_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        Ok(
            OperationsGatewayHttpClient::make_bill_payment_operation(self, card_id, account_id)
                .await?
                .operation,
        )
    }

    async fn make_cash_withdrawal_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        Ok(
            OperationsGatewayHttpClient::make_cash_withdrawal_operation(self, card_id, account_id)
                .await?
                .operation,
        )
    }
}

#[async_trait]
impl DocumentsGateway for DocumentsGatewayHttpClient {
    async fn get_tariff_document(&self, account_id: &str) -> Result<Document, ClientError> {
        Ok(DocumentsGatewayHttpClient::get_tariff_document(self, account_id)
            .await?
            .tariff)
    }

    async fn get_contract_document(&self, account_id: &str) -> Result<Document, ClientError> {
        Ok(DocumentsGatewayHttpClient::get_contract_document(self, account_id)
            .await?
            .contract)
    }
}

// ============================================================================
// gRPC
// ============================================================================

#[async_trait]
impl UsersGateway for UsersGatewayGrpcClient {
    async fn create_user(&self) -> Result<User, ClientError> {
        let response = UsersGatewayGrpcClient::create_user(self).await?;
        Ok(required(response.user, "user")?.into())
    }

    async fn get_user(&self, user_id: &str) -> Result<User, ClientError> {
        let response = UsersGatewayGrpcClient::get_user(self, user_id).await?;
        Ok(required(response.user, "user")?.into())
    }
}

#[async_trait]
impl AccountsGateway for AccountsGatewayGrpcClient {
    async fn get_accounts(&self, user_id: &str) -> Result<Vec<Account>, ClientError> {
        let response = AccountsGatewayGrpcClient::get_accounts(self, user_id).await?;
        response
            .accounts
            .into_iter()
            .map(Account::try_from)
            .collect()
    }

    async fn open_deposit_account(&self, user_id: &str) -> Result<Account, ClientError> {
        let response = AccountsGatewayGrpcClient::open_deposit_account(self, user_id).await?;
        required(response.account, "account")?.try_into()
    }

    async fn open_savings_account(&self, user_id: &str) -> Result<Account, ClientError> {
        let response = AccountsGatewayGrpcClient::open_savings_account(self, user_id).await?;
        required(response.account, "account")?.try_into()
    }

    async fn open_debit_card_account(&self, user_id: &str) -> Result<Account, ClientError> {
        let response = AccountsGatewayGrpcClient::open_debit_card_account(self, user_id).await?;
        required(response.account, "account")?.try_into()
    }

    async fn open_credit_card_account(&self, user_id: &str) -> Result<Account, ClientError> {
        let response = AccountsGatewayGrpcClient::open_credit_card_account(self, user_id).await?;
        required(response.account, "account")?.try_into()
    }
}

#[async_trait]
impl CardsGateway for CardsGatewayGrpcClient {
    async fn issue_virtual_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<Card, ClientError> {
        let response =
            CardsGatewayGrpcClient::issue_virtual_card(self, user_id, account_id).await?;
        required(response.card, "card")?.try_into()
    }

    async fn issue_physical_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<Card, ClientError> {
        let response =
            CardsGatewayGrpcClient::issue_physical_card(self, user_id, account_id).await?;
        required(response.card, "card")?.try_into()
    }
}

#[async_trait]
impl OperationsGateway for OperationsGatewayGrpcClient {
    async fn get_operation(&self, operation_id: &str) -> Result<Operation, ClientError> {
        let response = OperationsGatewayGrpcClient::get_operation(self, operation_id).await?;
        required(response.operation, "operation")?.try_into()
    }

    async fn get_operation_receipt(
        &self,
        operation_id: &str,
    ) -> Result<OperationReceipt, ClientError> {
        let response =
            OperationsGatewayGrpcClient::get_operation_receipt(self, operation_id).await?;
        Ok(required(response.receipt, "receipt")?.into())
    }

    async fn get_operations(&self, account_id: &str) -> Result<Vec<Operation>, ClientError> {
        let response = OperationsGatewayGrpcClient::get_operations(self, account_id).await?;
        response
            .operations
            .into_iter()
            .map(Operation::try_from)
            .collect()
    }

    async fn get_operations_summary(
        &self,
        account_id: &str,
    ) -> Result<OperationsSummary, ClientError> {
        let response =
            OperationsGatewayGrpcClient::get_operations_summary(self, account_id).await?;
        Ok(required(response.summary, "summary")?.into())
    }

    async fn make_fee_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        let response =
            OperationsGatewayGrpcClient::make_fee_operation(self, card_id, account_id).await?;
        required(response.operation, "operation")?.try_into()
    }

    async fn make_top_up_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        let response =
            OperationsGatewayGrpcClient::make_top_up_operation(self, card_id, account_id).await?;
        required(response.operation, "operation")?.try_into()
    }

    async fn make_cashback_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        let response =
            OperationsGatewayGrpcClient::make_cashback_operation(self, card_id, account_id).await?;
        required(response.operation, "operation")?.try_into()
    }

    async fn make_transfer_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        let response =
            OperationsGatewayGrpcClient::make_transfer_operation(self, card_id, account_id).await?;
        required(response.operation, "operation")?.try_into()
    }

    async fn make_purchase_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        let response =
            OperationsGatewayGrpcClient::make_purchase_operation(self, card_id, account_id).await?;
        required(response.operation, "operation")?.try_into()
    }

    async fn make_bill_payment_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        let response =
            OperationsGatewayGrpcClient::make_bill_payment_operation(self, card_id, account_id).await?;
        required(response.operation, "operation")?.try_into()
    }

    async fn make_cash_withdrawal_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        let response =
            OperationsGatewayGrpcClient::make_cash_withdrawal_operation(self, card_id, account_id).await?;
        required(response.operation, "operation")?.try_into()
    }
}

#[async_trait]
impl DocumentsGateway for DocumentsGatewayGrpcClient {
    async fn get_tariff_document(&self, account_id: &str) -> Result<Document, ClientError> {
        let response = DocumentsGatewayGrpcClient::get_tariff_document(self, account_id).await?;
        Ok(required(response.tariff, "tariff")?.into())
    }

    async fn get_contract_document(&self, account_id: &str) -> Result<Document, ClientError> {
        let response =
            DocumentsGatewayGrpcClient::get_contract_document(self, account_id).await?;
        Ok(required(response.contract, "contract")?.into())
    }
}
