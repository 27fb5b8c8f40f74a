//! In-memory storage of the mock gateway.
//!
//! Everything lives behind one `RwLock`; writes that touch several records
//! (opening a card account, applying an operation) happen under a single
//! write guard so readers never see half an update. Records are keyed by id;
//! per-user accounts and per-account operations are indexed so reads do not
//! scan the whole store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Months, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppError;
use crate::fakers::FAKE;
use crate::models::{
    account::{Account, AccountStatus, AccountType},
    card::{Card, CardPaymentSystem, CardStatus, CardType},
    operation::Operation,
    user::{CreateUserRequest, User},
};

/// Handle shared with every handler through axum `State`.
pub type SharedStore = Arc<GatewayStore>;

#[derive(Debug)]
struct StoredUser {
    seq: u64,
    user: User,
}

#[derive(Debug)]
struct StoredAccount {
    user_id: String,
    account: Account,
}

/// Records keyed by id, plus per-owner indexes in creation order.
#[derive(Debug, Default)]
struct StoreData {
    seq: u64,
    users: HashMap<String, StoredUser>,
    accounts: HashMap<String, StoredAccount>,
    /// user id -> account ids
    user_accounts: HashMap<String, Vec<String>>,
    /// card id -> account id
    cards: HashMap<String, String>,
    operations: HashMap<String, Operation>,
    /// account id -> operation ids
    account_operations: HashMap<String, Vec<String>>,
}

impl StoreData {
    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn user(&self, user_id: &str) -> Result<&User, AppError> {
        self.users
            .get(user_id)
            .map(|stored| &stored.user)
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))
    }

    fn user_account_mut(
        &mut self,
        user_id: &str,
        account_id: &str,
    ) -> Result<&mut StoredAccount, AppError> {
        self.accounts
            .get_mut(account_id)
            .filter(|stored| stored.user_id == user_id)
            .ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))
    }

    fn issue_card(&mut self, holder: &User, account_id: &str, card_type: CardType) -> Card {
        let expiry_date = Utc::now()
            .date_naive()
            .checked_add_months(Months::new(36))
            .unwrap_or_else(|| Utc::now().date_naive());

        let card = Card {
            id: Uuid::new_v4().to_string(),
            pin: FAKE.digits(4),
            cvv: FAKE.digits(3),
            card_type,
            status: CardStatus::Active,
            account_id: account_id.to_string(),
            card_number: FAKE.digits(16),
            card_holder: format!("{} {}", holder.first_name, holder.last_name),
            expiry_date,
            payment_system: FAKE.pick(&[CardPaymentSystem::Visa, CardPaymentSystem::Mastercard]),
        };
        self.cards.insert(card.id.clone(), account_id.to_string());
        card
    }
}

/// Users, accounts, cards and operations of the mock gateway.
#[derive(Debug, Default)]
pub struct GatewayStore {
    data: RwLock<StoreData>,
}

impl GatewayStore {
    pub fn new() -> SharedStore {
        Arc::new(Self::default())
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> User {
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: request.email,
            last_name: request.last_name,
            first_name: request.first_name,
            middle_name: request.middle_name,
            phone_number: request.phone_number,
        };

        let mut data = self.data.write().await;
        let seq = data.next_seq();
        data.users.insert(
            user.id.clone(),
            StoredUser {
                seq,
                user: user.clone(),
            },
        );
        user
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, AppError> {
        self.data.read().await.user(user_id).cloned()
    }

    /// All users in creation order.
    pub async fn list_users(&self) -> Vec<User> {
        let data = self.data.read().await;
        let mut users: Vec<&StoredUser> = data.users.values().collect();
        users.sort_by_key(|stored| stored.seq);

        users.into_iter().map(|stored| stored.user.clone()).collect()
    }

    pub async fn update_user(
        &self,
        user_id: &str,
        request: CreateUserRequest,
    ) -> Result<User, AppError> {
        let mut data = self.data.write().await;
        let user = data
            .users
            .get_mut(user_id)
            .map(|stored| &mut stored.user)
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;

        user.email = request.email;
        user.last_name = request.last_name;
        user.first_name = request.first_name;
        user.middle_name = request.middle_name;
        user.phone_number = request.phone_number;
        Ok(user.clone())
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), AppError> {
        self.data
            .write()
            .await
            .users
            .remove(user_id)
            .map(|_| ())
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))
    }

    pub async fn user_count(&self) -> usize {
        self.data.read().await.users.len()
    }

    /// Open an account; debit and credit card accounts get a virtual card.
    pub async fn open_account(
        &self,
        user_id: &str,
        account_type: AccountType,
    ) -> Result<Account, AppError> {
        let mut data = self.data.write().await;
        let holder = data.user(user_id)?.clone();
        let account_id = Uuid::new_v4().to_string();

        let cards = match account_type {
            AccountType::DebitCard | AccountType::CreditCard => {
                vec![data.issue_card(&holder, &account_id, CardType::Virtual)]
            }
            AccountType::Deposit | AccountType::Savings => Vec::new(),
        };
        let account = Account {
            id: account_id.clone(),
            account_type,
            cards,
            status: AccountStatus::Active,
            balance: 0.0,
        };

        data.user_accounts
            .entry(user_id.to_string())
            .or_default()
            .push(account_id.clone());
        data.accounts.insert(
            account_id,
            StoredAccount {
                user_id: user_id.to_string(),
                account: account.clone(),
            },
        );
        Ok(account)
    }

    /// Accounts of a user, oldest first.
    pub async fn get_accounts(&self, user_id: &str) -> Result<Vec<Account>, AppError> {
        let data = self.data.read().await;
        data.user(user_id)?;

        Ok(data
            .user_accounts
            .get(user_id)
            .into_iter()
            .flatten()
            .filter_map(|account_id| data.accounts.get(account_id))
            .map(|stored| stored.account.clone())
            .collect())
    }

    pub async fn get_account(&self, account_id: &str) -> Result<Account, AppError> {
        self.data
            .read()
            .await
            .accounts
            .get(account_id)
            .map(|stored| stored.account.clone())
            .ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))
    }

    /// Issue a card for an account owned by `user_id`.
    pub async fn issue_card(
        &self,
        user_id: &str,
        account_id: &str,
        card_type: CardType,
    ) -> Result<Card, AppError> {
        let mut data = self.data.write().await;
        let holder = data.user(user_id)?.clone();
        data.user_account_mut(user_id, account_id)?;

        let card = data.issue_card(&holder, account_id, card_type);
        data.user_account_mut(user_id, account_id)?
            .account
            .cards
            .push(card.clone());
        Ok(card)
    }

    /// Store an operation and move the account balance by `balance_delta`.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: unknown account
    /// - `CardNotFound`: unknown card, or a card of another account
    pub async fn record_operation(
        &self,
        operation: Operation,
        balance_delta: f64,
    ) -> Result<Operation, AppError> {
        let mut data = self.data.write().await;

        if !data.accounts.contains_key(&operation.account_id) {
            return Err(AppError::AccountNotFound(operation.account_id));
        }
        match data.cards.get(&operation.card_id) {
            Some(account_id) if *account_id == operation.account_id => {}
            _ => return Err(AppError::CardNotFound(operation.card_id)),
        }

        if let Some(stored) = data.accounts.get_mut(&operation.account_id) {
            stored.account.balance += balance_delta;
        }
        data.account_operations
            .entry(operation.account_id.clone())
            .or_default()
            .push(operation.id.clone());
        data.operations
            .insert(operation.id.clone(), operation.clone());
        Ok(operation)
    }

    pub async fn get_operation(&self, operation_id: &str) -> Result<Operation, AppError> {
        self.data
            .read()
            .await
            .operations
            .get(operation_id)
            .cloned()
            .ok_or_else(|| AppError::OperationNotFound(operation_id.to_string()))
    }

    /// Operations of an account, oldest first.
    pub async fn get_operations(&self, account_id: &str) -> Result<Vec<Operation>, AppError> {
        let data = self.data.read().await;
        if !data.accounts.contains_key(account_id) {
            return Err(AppError::AccountNotFound(account_id.to_string()));
        }

        Ok(data
            .account_operations
            .get(account_id)
            .into_iter()
            .flatten()
            .filter_map(|operation_id| data.operations.get(operation_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::operation::{OperationStatus, OperationType};

    fn operation(card_id: &str, account_id: &str) -> Operation {
        Operation {
            id: Uuid::new_v4().to_string(),
            operation_type: OperationType::TopUp,
            status: OperationStatus::Completed,
            amount: 25.0,
            card_id: card_id.to_string(),
            category: String::new(),
            created_at: Utc::now().to_rfc3339(),
            account_id: account_id.to_string(),
        }
    }

    #[tokio::test]
    async fn card_accounts_come_with_a_virtual_card() {
        let store = GatewayStore::new();
        let user = store.create_user(CreateUserRequest::fake()).await;

        let debit = store.open_account(&user.id, AccountType::DebitCard).await.unwrap();
        let savings = store.open_account(&user.id, AccountType::Savings).await.unwrap();

        assert_eq!(debit.cards.len(), 1);
        assert_eq!(debit.cards[0].card_type, CardType::Virtual);
        assert_eq!(debit.cards[0].account_id, debit.id);
        assert!(savings.cards.is_empty());

        let accounts = store.get_accounts(&user.id).await.unwrap();
        assert_eq!(
            accounts.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            vec![debit.id.as_str(), savings.id.as_str()]
        );
    }

    #[tokio::test]
    async fn unknown_user_cannot_open_accounts() {
        let store = GatewayStore::new();

        let err = store.open_account("missing", AccountType::Deposit).await.unwrap_err();
        assert!(matches!(err, AppError::UserNotFound(_)));
    }

    #[tokio::test]
    async fn issued_card_is_added_to_the_account() {
        let store = GatewayStore::new();
        let user = store.create_user(CreateUserRequest::fake()).await;
        let account = store.open_account(&user.id, AccountType::CreditCard).await.unwrap();

        let card = store
            .issue_card(&user.id, &account.id, CardType::Physical)
            .await
            .unwrap();

        let account = store.get_account(&account.id).await.unwrap();
        assert_eq!(account.cards.len(), 2);
        assert_eq!(account.cards[1], card);
    }

    #[tokio::test]
    async fn card_of_another_user_account_is_rejected() {
        let store = GatewayStore::new();
        let owner = store.create_user(CreateUserRequest::fake()).await;
        let other = store.create_user(CreateUserRequest::fake()).await;
        let account = store.open_account(&owner.id, AccountType::DebitCard).await.unwrap();

        let err = store
            .issue_card(&other.id, &account.id, CardType::Virtual)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AccountNotFound(_)));
    }

    #[tokio::test]
    async fn operations_move_the_balance() {
        let store = GatewayStore::new();
        let user = store.create_user(CreateUserRequest::fake()).await;
        let account = store.open_account(&user.id, AccountType::DebitCard).await.unwrap();
        let card_id = account.cards[0].id.clone();

        store
            .record_operation(operation(&card_id, &account.id), 25.0)
            .await
            .unwrap();

        assert_eq!(store.get_account(&account.id).await.unwrap().balance, 25.0);
        assert_eq!(store.get_operations(&account.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn operation_with_foreign_card_is_rejected() {
        let store = GatewayStore::new();
        let user = store.create_user(CreateUserRequest::fake()).await;
        let first = store.open_account(&user.id, AccountType::DebitCard).await.unwrap();
        let second = store.open_account(&user.id, AccountType::DebitCard).await.unwrap();

        let err = store
            .record_operation(operation(&first.cards[0].id, &second.id), 25.0)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::CardNotFound(_)));
    }

    #[tokio::test]
    async fn deleted_user_is_gone() {
        let store = GatewayStore::new();
        let user = store.create_user(CreateUserRequest::fake()).await;

        store.delete_user(&user.id).await.unwrap();

        assert!(matches!(
            store.get_user(&user.id).await,
            Err(AppError::UserNotFound(_))
        ));
        assert!(matches!(
            store.delete_user(&user.id).await,
            Err(AppError::UserNotFound(_))
        ));
    }

    #[tokio::test]
    async fn reads_only_see_their_own_records_in_creation_order() {
        let store = GatewayStore::new();
        let mut users = Vec::new();
        for _ in 0..20 {
            users.push(store.create_user(CreateUserRequest::fake()).await);
        }
        let owner = &users[7];
        let first = store.open_account(&owner.id, AccountType::DebitCard).await.unwrap();
        let second = store.open_account(&owner.id, AccountType::CreditCard).await.unwrap();
        store.open_account(&users[8].id, AccountType::Deposit).await.unwrap();

        let mut first_ops = Vec::new();
        for i in 0..10 {
            let (card, account) = if i % 2 == 0 {
                (&first.cards[0].id, &first.id)
            } else {
                (&second.cards[0].id, &second.id)
            };
            let recorded = store
                .record_operation(operation(card, account), 1.0)
                .await
                .unwrap();
            if i % 2 == 0 {
                first_ops.push(recorded.id);
            }
        }

        let ops = store.get_operations(&first.id).await.unwrap();
        assert_eq!(
            ops.iter().map(|op| op.id.clone()).collect::<Vec<_>>(),
            first_ops
        );
        assert!(ops.iter().all(|op| op.account_id == first.id));

        let accounts = store.get_accounts(&owner.id).await.unwrap();
        assert_eq!(
            accounts.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            vec![first.id.as_str(), second.id.as_str()]
        );
        assert_eq!(accounts[0].balance, 5.0);

        store.delete_user(&users[0].id).await.unwrap();
        let listed = store.list_users().await;
        assert_eq!(listed.len(), 19);
        assert_eq!(listed[0].id, users[1].id);
        assert_eq!(listed[18].id, users[19].id);
        assert_eq!(store.get_user(&owner.id).await.unwrap(), *owner);
    }

    #[tokio::test]
    async fn accounts_without_operations_list_nothing() {
        let store = GatewayStore::new();
        let user = store.create_user(CreateUserRequest::fake()).await;
        let account = store.open_account(&user.id, AccountType::Savings).await.unwrap();

        assert!(store.get_operations(&account.id).await.unwrap().is_empty());
        assert!(matches!(
            store.get_operations("missing").await,
            Err(AppError::AccountNotFound(_))
        ));
        let other = store.create_user(CreateUserRequest::fake()).await;
        assert!(store.get_accounts(&other.id).await.unwrap().is_empty());
    }
}
