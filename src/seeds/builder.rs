//! Seeds builder.
//!
//! Walks a [`SeedsPlan`] top-down: create each user, open the planned accounts,
//! then issue cards and make operations on every card account. Calls are made
//! one after another; the builder works with either transport through the
//! gateway traits.

use std::sync::Arc;

use super::plan::{SeedAccountsPlan, SeedUsersPlan, SeedsPlan};
use super::result::{
    SeedAccountResult, SeedCardResult, SeedOperationResult, SeedUserResult, SeedsResult,
};
use crate::clients::grpc::{
    build_accounts_gateway_grpc_client, build_cards_gateway_grpc_client,
    build_operations_gateway_grpc_client, build_users_gateway_grpc_client,
};
use crate::clients::http::{
    build_accounts_gateway_http_client, build_cards_gateway_http_client,
    build_operations_gateway_http_client, build_users_gateway_http_client,
};
use crate::clients::{AccountsGateway, CardsGateway, OperationsGateway, Transport, UsersGateway};
use crate::config::Settings;
use crate::error::ClientError;
use crate::models::account::Account;

/// Creates test data according to a seeding plan.
#[derive(Clone)]
pub struct SeedsBuilder {
    users: Arc<dyn UsersGateway>,
    cards: Arc<dyn CardsGateway>,
    accounts: Arc<dyn AccountsGateway>,
    operations: Arc<dyn OperationsGateway>,
}

impl SeedsBuilder {
    pub fn new(
        users: Arc<dyn UsersGateway>,
        cards: Arc<dyn CardsGateway>,
        accounts: Arc<dyn AccountsGateway>,
        operations: Arc<dyn OperationsGateway>,
    ) -> Self {
        Self {
            users,
            cards,
            accounts,
            operations,
        }
    }

    pub async fn build_physical_card_result(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<SeedCardResult, ClientError> {
        let card = self.cards.issue_physical_card(user_id, account_id).await?;
        Ok(SeedCardResult { card_id: card.id })
    }

    pub async fn build_virtual_card_result(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<SeedCardResult, ClientError> {
        let card = self.cards.issue_virtual_card(user_id, account_id).await?;
        Ok(SeedCardResult { card_id: card.id })
    }

    pub async fn build_top_up_operation_result(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<SeedOperationResult, ClientError> {
        let operation = self
            .operations
            .make_top_up_operation(card_id, account_id)
            .await?;
        Ok(SeedOperationResult {
            operation_id: operation.id,
        })
    }

    pub async fn build_purchase_operation_result(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<SeedOperationResult, ClientError> {
        let operation = self
            .operations
            .make_purchase_operation(card_id, account_id)
            .await?;
        Ok(SeedOperationResult {
            operation_id: operation.id,
        })
    }

    pub async fn build_transfer_operation_result(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<SeedOperationResult, ClientError> {
        let operation = self
            .operations
            .make_transfer_operation(card_id, account_id)
            .await?;
        Ok(SeedOperationResult {
            operation_id: operation.id,
        })
    }

    pub async fn build_cash_withdrawal_operation_result(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<SeedOperationResult, ClientError> {
        let operation = self
            .operations
            .make_cash_withdrawal_operation(card_id, account_id)
            .await?;
        Ok(SeedOperationResult {
            operation_id: operation.id,
        })
    }

    pub async fn build_savings_account_result(
        &self,
        user_id: &str,
    ) -> Result<SeedAccountResult, ClientError> {
        let account = self.accounts.open_savings_account(user_id).await?;
        Ok(SeedAccountResult::new(account.id))
    }

    pub async fn build_deposit_account_result(
        &self,
        user_id: &str,
    ) -> Result<SeedAccountResult, ClientError> {
        let account = self.accounts.open_deposit_account(user_id).await?;
        Ok(SeedAccountResult::new(account.id))
    }

    /// Open a debit card account, then issue cards and make operations on it.
    ///
    /// # Errors
    ///
    /// `ClientError::MissingField` if the gateway opened the account without a card.
    pub async fn build_debit_card_account_result(
        &self,
        plan: &SeedAccountsPlan,
        user_id: &str,
    ) -> Result<SeedAccountResult, ClientError> {
        let account = self.accounts.open_debit_card_account(user_id).await?;
        self.fill_card_account(plan, user_id, account).await
    }

    /// Open a credit card account, then issue cards and make operations on it.
    ///
    /// # Errors
    ///
    /// `ClientError::MissingField` if the gateway opened the account without a card.
    pub async fn build_credit_card_account_result(
        &self,
        plan: &SeedAccountsPlan,
        user_id: &str,
    ) -> Result<SeedAccountResult, ClientError> {
        let account = self.accounts.open_credit_card_account(user_id).await?;
        self.fill_card_account(plan, user_id, account).await
    }

    async fn fill_card_account(
        &self,
        plan: &SeedAccountsPlan,
        user_id: &str,
        account: Account,
    ) -> Result<SeedAccountResult, ClientError> {
        let card_id = account
            .cards
            .first()
            .map(|card| card.id.clone())
            .ok_or(ClientError::MissingField("account.cards"))?;
        let account_id = account.id.as_str();
        let mut result = SeedAccountResult::new(account_id);

        for _ in 0..plan.physical_cards.count {
            result
                .physical_cards
                .push(self.build_physical_card_result(user_id, account_id).await?);
        }
        for _ in 0..plan.virtual_cards.count {
            result
                .virtual_cards
                .push(self.build_virtual_card_result(user_id, account_id).await?);
        }
        for _ in 0..plan.top_up_operations.count {
            result
                .top_up_operations
                .push(self.build_top_up_operation_result(&card_id, account_id).await?);
        }
        for _ in 0..plan.purchase_operations.count {
            result
                .purchase_operations
                .push(self.build_purchase_operation_result(&card_id, account_id).await?);
        }
        for _ in 0..plan.transfer_operations.count {
            result
                .transfer_operations
                .push(self.build_transfer_operation_result(&card_id, account_id).await?);
        }
        for _ in 0..plan.cash_withdrawal_operations.count {
            result.cash_withdrawal_operations.push(
                self.build_cash_withdrawal_operation_result(&card_id, account_id)
                    .await?,
            );
        }

        Ok(result)
    }

    /// Create one user with all the accounts the plan asks for.
    pub async fn build_user(&self, plan: &SeedUsersPlan) -> Result<SeedUserResult, ClientError> {
        let user = self.users.create_user().await?;
        let user_id = user.id.as_str();

        let mut savings_accounts = Vec::with_capacity(plan.savings_accounts.count);
        for _ in 0..plan.savings_accounts.count {
            savings_accounts.push(self.build_savings_account_result(user_id).await?);
        }

        let mut deposit_accounts = Vec::with_capacity(plan.deposit_accounts.count);
        for _ in 0..plan.deposit_accounts.count {
            deposit_accounts.push(self.build_deposit_account_result(user_id).await?);
        }

        let mut debit_card_accounts = Vec::with_capacity(plan.debit_card_accounts.count);
        for _ in 0..plan.debit_card_accounts.count {
            debit_card_accounts.push(
                self.build_debit_card_account_result(&plan.debit_card_accounts, user_id)
                    .await?,
            );
        }

        let mut credit_card_accounts = Vec::with_capacity(plan.credit_card_accounts.count);
        for _ in 0..plan.credit_card_accounts.count {
            credit_card_accounts.push(
                self.build_credit_card_account_result(&plan.credit_card_accounts, user_id)
                    .await?,
            );
        }

        Ok(SeedUserResult {
            user_id: user.id.clone(),
            deposit_accounts,
            savings_accounts,
            debit_card_accounts,
            credit_card_accounts,
        })
    }

    /// Build the whole plan.
    pub async fn build(&self, plan: &SeedsPlan) -> Result<SeedsResult, ClientError> {
        tracing::info!(users = plan.users.count, "Seeding started");

        let mut users = Vec::with_capacity(plan.users.count);
        for index in 0..plan.users.count {
            users.push(self.build_user(&plan.users).await?);

            if (index + 1) % 50 == 0 {
                tracing::info!(created = index + 1, total = plan.users.count, "Seeding progress");
            }
        }

        tracing::info!(users = users.len(), "Seeding finished");
        Ok(SeedsResult { users })
    }
}

/// Builder talking to the gRPC gateway.
pub fn build_grpc_seeds_builder(settings: &Settings) -> Result<SeedsBuilder, ClientError> {
    let config = &settings.gateway_grpc_client;

    Ok(SeedsBuilder::new(
        Arc::new(build_users_gateway_grpc_client(config)?),
        Arc::new(build_cards_gateway_grpc_client(config)?),
        Arc::new(build_accounts_gateway_grpc_client(config)?),
        Arc::new(build_operations_gateway_grpc_client(config)?),
    ))
}

/// Builder talking to the HTTP gateway.
pub fn build_http_seeds_builder(settings: &Settings) -> Result<SeedsBuilder, ClientError> {
    let config = &settings.gateway_http_client;

    Ok(SeedsBuilder::new(
        Arc::new(build_users_gateway_http_client(config)?),
        Arc::new(build_cards_gateway_http_client(config)?),
        Arc::new(build_accounts_gateway_http_client(config)?),
        Arc::new(build_operations_gateway_http_client(config)?),
    ))
}

/// Builder for the chosen transport.
pub fn build_seeds_builder(
    transport: Transport,
    settings: &Settings,
) -> Result<SeedsBuilder, ClientError> {
    match transport {
        Transport::Grpc => build_grpc_seeds_builder(settings),
        Transport::Http => build_http_seeds_builder(settings),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::models::account::{AccountStatus, AccountType};
    use crate::seeds::plan::{SeedCardsPlan, SeedOperationsPlan};
    use crate::models::card::{Card, CardPaymentSystem, CardStatus, CardType};
    use crate::models::operation::{
        Operation, OperationReceipt, OperationStatus, OperationType, OperationsSummary,
    };
    use crate::models::user::User;

    /// Gateway double counting every call.
    #[derive(Default)]
    struct CountingGateway {
        next_id: AtomicUsize,
        calls: Mutex<HashMap<&'static str, usize>>,
        card_accounts_without_cards: bool,
    }

    impl CountingGateway {
        fn id(&self, prefix: &str) -> String {
            format!("{prefix}-{}", self.next_id.fetch_add(1, Ordering::Relaxed))
        }

        fn record(&self, call: &'static str) {
            *self.calls.lock().unwrap().entry(call).or_default() += 1;
        }

        fn calls(&self, call: &'static str) -> usize {
            self.calls.lock().unwrap().get(call).copied().unwrap_or(0)
        }

        fn card(&self, account_id: &str, card_type: CardType) -> Card {
            Card {
                id: self.id("card"),
                pin: "1234".to_string(),
                cvv: "123".to_string(),
                card_type,
                status: CardStatus::Active,
                account_id: account_id.to_string(),
                card_number: "4000000000000000".to_string(),
                card_holder: "Test User".to_string(),
                expiry_date: NaiveDate::from_ymd_opt(2030, 1, 31).unwrap(),
                payment_system: CardPaymentSystem::Visa,
            }
        }

        fn account(&self, account_type: AccountType, with_card: bool) -> Account {
            let id = self.id("account");
            let cards = if with_card {
                vec![self.card(&id, CardType::Virtual)]
            } else {
                Vec::new()
            };
            Account {
                id,
                account_type,
                cards,
                status: AccountStatus::Active,
                balance: 0.0,
            }
        }

        fn operation(&self, operation_type: OperationType, card_id: &str, account_id: &str) -> Operation {
            Operation {
                id: self.id("operation"),
                operation_type,
                status: OperationStatus::Completed,
                amount: 10.0,
                card_id: card_id.to_string(),
                category: String::new(),
                created_at: "2025-01-15T10:30:00Z".to_string(),
                account_id: account_id.to_string(),
            }
        }
    }

    #[async_trait]
    impl UsersGateway for CountingGateway {
        async fn create_user(&self) -> Result<User, ClientError> {
            self.record("create_user");
            Ok(User {
                id: self.id("user"),
                email: "user@example.com".to_string(),
                last_name: "Smith".to_string(),
                first_name: "Tom".to_string(),
                middle_name: "James".to_string(),
                phone_number: "+1-555-000-0000".to_string(),
            })
        }

        async fn get_user(&self, _user_id: &str) -> Result<User, ClientError> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl AccountsGateway for CountingGateway {
        async fn get_accounts(&self, _user_id: &str) -> Result<Vec<Account>, ClientError> {
            unimplemented!()
        }

        async fn open_deposit_account(&self, _user_id: &str) -> Result<Account, ClientError> {
            self.record("open_deposit_account");
            Ok(self.account(AccountType::Deposit, false))
        }

        async fn open_savings_account(&self, _user_id: &str) -> Result<Account, ClientError> {
            self.record("open_savings_account");
            Ok(self.account(AccountType::Savings, false))
        }

        async fn open_debit_card_account(&self, _user_id: &str) -> Result<Account, ClientError> {
            self.record("open_debit_card_account");
            Ok(self.account(AccountType::DebitCard, !self.card_accounts_without_cards))
        }

        async fn open_credit_card_account(&self, _user_id: &str) -> Result<Account, ClientError> {
            self.record("open_credit_card_account");
            Ok(self.account(AccountType::CreditCard, !self.card_accounts_without_cards))
        }
    }

    #[async_trait]
    impl CardsGateway for CountingGateway {
        async fn issue_virtual_card(
            &self,
            _user_id: &str,
            account_id: &str,
        ) -> Result<Card, ClientError> {
            self.record("issue_virtual_card");
            Ok(self.card(account_id, CardType::Virtual))
        }

        async fn issue_physical_card(
            &self,
            _user_id: &str,
            account_id: &str,
        ) -> Result<Card, ClientError> {
            self.record("issue_physical_card");
            Ok(self.card(account_id, CardType::Physical))
        }
    }

    #[async_trait]
    impl OperationsGateway for CountingGateway {
        async fn get_operation(&self, _operation_id: &str) -> Result<Operation, ClientError> {
            unimplemented!()
        }

        async fn get_operation_receipt(
            &self,
            _operation_id: &str,
        ) -> Result<OperationReceipt, ClientError> {
            unimplemented!()
        }

        async fn get_operations(&self, _account_id: &str) -> Result<Vec<Operation>, ClientError> {
            unimplemented!()
        }

        async fn get_operations_summary(
            &self,
            _account_id: &str,
        ) -> Result<OperationsSummary, ClientError> {
            unimplemented!()
        }

        async fn make_fee_operation(&self, card_id: &str, account_id: &str) -> Result<Operation, ClientError> {
            self.record("make_fee_operation");
            Ok(self.operation(OperationType::Fee, card_id, account_id))
        }

        async fn make_top_up_operation(&self, card_id: &str, account_id: &str) -> Result<Operation, ClientError> {
            self.record("make_top_up_operation");
            Ok(self.operation(OperationType::TopUp, card_id, account_id))
        }

        async fn make_cashback_operation(&self, card_id: &str, account_id: &str) -> Result<Operation, ClientError> {
            self.record("make_cashback_operation");
            Ok(self.operation(OperationType::Cashback, card_id, account_id))
        }

        async fn make_transfer_operation(&self, card_id: &str, account_id: &str) -> Result<Operation, ClientError> {
            self.record("make_transfer_operation");
            Ok(self.operation(OperationType::Transfer, card_id, account_id))
        }

        async fn make_purchase_operation(&self, card_id: &str, account_id: &str) -> Result<Operation, ClientError> {
            self.record("make_purchase_operation");
            Ok(self.operation(OperationType::Purchase, card_id, account_id))
        }

        async fn make_bill_payment_operation(&self, card_id: &str, account_id: &str) -> Result<Operation, ClientError> {
            self.record("make_bill_payment_operation");
            Ok(self.operation(OperationType::BillPayment, card_id, account_id))
        }

        async fn make_cash_withdrawal_operation(&self, card_id: &str, account_id: &str) -> Result<Operation, ClientError> {
            self.record("make_cash_withdrawal_operation");
            Ok(self.operation(OperationType::CashWithdrawal, card_id, account_id))
        }
    }

    fn builder(gateway: Arc<CountingGateway>) -> SeedsBuilder {
        SeedsBuilder::new(gateway.clone(), gateway.clone(), gateway.clone(), gateway)
    }

    #[tokio::test]
    async fn builds_exactly_the_planned_counts() {
        let gateway = Arc::new(CountingGateway::default());
        let plan = SeedsPlan {
            users: SeedUsersPlan {
                count: 2,
                savings_accounts: SeedAccountsPlan {
                    count: 1,
                    ..Default::default()
                },
                credit_card_accounts: SeedAccountsPlan {
                    count: 1,
                    physical_cards: SeedCardsPlan { count: 1 },
                    virtual_cards: SeedCardsPlan { count: 2 },
                    top_up_operations: SeedOperationsPlan { count: 1 },
                    purchase_operations: SeedOperationsPlan { count: 5 },
                    transfer_operations: SeedOperationsPlan { count: 0 },
                    cash_withdrawal_operations: SeedOperationsPlan { count: 3 },
                },
                ..Default::default()
            },
        };

        let result = builder(gateway.clone()).build(&plan).await.unwrap();

        assert_eq!(result.users.len(), 2);
        let account = &result.users[0].credit_card_accounts[0];
        assert_eq!(account.physical_cards.len(), 1);
        assert_eq!(account.virtual_cards.len(), 2);
        assert_eq!(account.top_up_operations.len(), 1);
        assert_eq!(account.purchase_operations.len(), 5);
        assert!(account.transfer_operations.is_empty());
        assert_eq!(account.cash_withdrawal_operations.len(), 3);
        assert_eq!(result.users[1].savings_accounts.len(), 1);
        assert!(result.users[1].deposit_accounts.is_empty());

        assert_eq!(gateway.calls("create_user"), 2);
        assert_eq!(gateway.calls("open_credit_card_account"), 2);
        assert_eq!(gateway.calls("make_purchase_operation"), 10);
        assert_eq!(gateway.calls("make_transfer_operation"), 0);
        assert_eq!(gateway.calls("make_cash_withdrawal_operation"), 6);
        assert_eq!(gateway.calls("open_debit_card_account"), 0);
    }

    #[tokio::test]
    async fn card_account_without_card_is_an_error() {
        let gateway = Arc::new(CountingGateway {
            card_accounts_without_cards: true,
            ..Default::default()
        });
        let plan = SeedAccountsPlan {
            count: 1,
            ..Default::default()
        };

        let err = builder(gateway)
            .build_debit_card_account_result(&plan, "user-1")
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::MissingField("account.cards")));
    }
}
