//! Account schemas.
//!
//! Every "open account" endpoint takes the same `{ "userId": ... }` body and
//! returns `{ "account": ... }`; the per-kind aliases keep call sites readable.

use serde::{Deserialize, Serialize};

use super::card::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Deposit,
    Savings,
    DebitCard,
    CreditCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Closed,
    PendingClosure,
}

/// Account data returned by the gateway.
///
/// Debit and credit card accounts come with at least one card; deposit and
/// savings accounts have none.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "a1",
///   "type": "DEBIT_CARD",
///   "cards": [ ... ],
///   "status": "ACTIVE",
///   "balance": 0.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub cards: Vec<Card>,
    pub status: AccountStatus,
    pub balance: f64,
}

/// Query string of `GET /api/v1/accounts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountsQuery {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetAccountsResponse {
    pub accounts: Vec<Account>,
}

/// Request body shared by all "open account" endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAccountRequest {
    pub user_id: String,
}

pub type OpenDepositAccountRequest = OpenAccountRequest;
pub type OpenSavingsAccountRequest = OpenAccountRequest;
pub type OpenDebitCardAccountRequest = OpenAccountRequest;
pub type OpenCreditCardAccountRequest = OpenAccountRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAccountResponse {
    pub account: Account,
}

pub type OpenDepositAccountResponse = OpenAccountResponse;
pub type OpenSavingsAccountResponse = OpenAccountResponse;
pub type OpenDebitCardAccountResponse = OpenAccountResponse;
pub type OpenCreditCardAccountResponse = OpenAccountResponse;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_type_uses_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&AccountType::CreditCard).unwrap(),
            "\"CREDIT_CARD\""
        );
        assert_eq!(
            serde_json::from_str::<AccountStatus>("\"PENDING_CLOSURE\"").unwrap(),
            AccountStatus::PendingClosure
        );
    }

    #[test]
    fn get_accounts_response_parses_empty_cards() {
        let body = r#"{"accounts":[{"id":"a1","type":"SAVINGS","cards":[],"status":"ACTIVE","balance":12.5}]}"#;
        let response: GetAccountsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.accounts.len(), 1);
        assert_eq!(response.accounts[0].account_type, AccountType::Savings);
        assert!(response.accounts[0].cards.is_empty());
    }
}
