//! Seeding plans.
//!
//! A plan is a tree of counts: how many users, how many accounts of each kind
//! per user, and how many cards and operations per card account. Every count
//! defaults to zero, so a plan only spells out what it needs.
//!
//! # JSON Example
//!
//! ```json
//! {
//!   "users": {
//!     "count": 300,
//!     "credit_card_accounts": {
//!       "count": 1,
//!       "purchase_operations": { "count": 5 },
//!       "top_up_operations": { "count": 1 }
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedCardsPlan {
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedOperationsPlan {
    pub count: usize,
}

/// Accounts of one kind, with the cards and operations to create for each.
///
/// Cards and operations only apply to debit and credit card accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedAccountsPlan {
    pub count: usize,
    pub physical_cards: SeedCardsPlan,
    pub virtual_cards: SeedCardsPlan,
    pub top_up_operations: SeedOperationsPlan,
    pub purchase_operations: SeedOperationsPlan,
    pub transfer_operations: SeedOperationsPlan,
    pub cash_withdrawal_operations: SeedOperationsPlan,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedUsersPlan {
    pub count: usize,
    pub deposit_accounts: SeedAccountsPlan,
    pub savings_accounts: SeedAccountsPlan,
    pub debit_card_accounts: SeedAccountsPlan,
    pub credit_card_accounts: SeedAccountsPlan,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedsPlan {
    pub users: SeedUsersPlan,
}
