//! Seeding results: the ids of everything a plan created.

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCardResult {
    pub card_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedOperationResult {
    pub operation_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAccountResult {
    pub account_id: String,
    #[serde(default)]
    pub physical_cards: Vec<SeedCardResult>,
    #[serde(default)]
    pub virtual_cards: Vec<SeedCardResult>,
    #[serde(default)]
    pub top_up_operations: Vec<SeedOperationResult>,
    #[serde(default)]
    pub purchase_operations: Vec<SeedOperationResult>,
    #[serde(default)]
    pub transfer_operations: Vec<SeedOperationResult>,
    #[serde(default)]
    pub cash_withdrawal_operations: Vec<SeedOperationResult>,
}

impl SeedAccountResult {
    /// Account without cards or operations (deposit, savings).
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            physical_cards: Vec::new(),
            virtual_cards: Vec::new(),
            top_up_operations: Vec::new(),
            purchase_operations: Vec::new(),
            transfer_operations: Vec::new(),
            cash_withdrawal_operations: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedUserResult {
    pub user_id: String,
    #[serde(default)]
    pub deposit_accounts: Vec<SeedAccountResult>,
    #[serde(default)]
    pub savings_accounts: Vec<SeedAccountResult>,
    #[serde(default)]
    pub debit_card_accounts: Vec<SeedAccountResult>,
    #[serde(default)]
    pub credit_card_accounts: Vec<SeedAccountResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedsResult {
    #[serde(default)]
    pub users: Vec<SeedUserResult>,
}

impl SeedsResult {
    /// Remove and return the first user.
    ///
    /// For scenarios where every virtual user needs a test user of its own.
    pub fn get_next_user(&mut self) -> Option<SeedUserResult> {
        if self.users.is_empty() {
            None
        } else {
            Some(self.users.remove(0))
        }
    }

    /// A random user, left in place.
    pub fn get_random_user(&self) -> Option<SeedUserResult> {
        self.users.choose(&mut rand::rng()).cloned()
    }
}
