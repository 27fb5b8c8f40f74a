//! Account HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - GET /api/v1/accounts?userId=... - List accounts of a user
//! - POST /api/v1/accounts/open-deposit-account
//! - POST /api/v1/accounts/open-savings-account
//! - POST /api/v1/accounts/open-debit-card-account
//! - POST /api/v1/accounts/open-credit-card-account
//!
//! All open endpoints take `{ "userId": "..." }` and return `{ "account": ... }`.

use crate::{
    error::AppError,
    models::account::{
        AccountType, GetAccountsQuery, GetAccountsResponse, OpenAccountRequest,
        OpenAccountResponse,
    },
    store::SharedStore,
};
use axum::{
    Json,
    extract::{Query, State},
};

/// List accounts of a user, oldest first.
///
/// # Query Parameters
///
/// - `userId` - owner of the accounts
///
/// # Response
///
/// - **Success (200 OK)**: `{ "accounts": [ ... ] }`
/// - **Error (404)**: User not found
pub async fn get_accounts(
    State(store): State<SharedStore>,
    Query(query): Query<GetAccountsQuery>,
) -> Result<Json<GetAccountsResponse>, AppError> {
    let accounts = store.get_accounts(&query.user_id).await?;
    Ok(Json(GetAccountsResponse { accounts }))
}

async fn open_account(
    store: SharedStore,
    request: OpenAccountRequest,
    account_type: AccountType,
) -> Result<Json<OpenAccountResponse>, AppError> {
    let account = store.open_account(&request.user_id, account_type).await?;

    tracing::info!(
        account_id = %account.id,
        user_id = %request.user_id,
        account_type = ?account_type,
        "Account opened"
    );

    Ok(Json(OpenAccountResponse { account }))
}

pub async fn open_deposit_account(
    State(store): State<SharedStore>,
    Json(request): Json<OpenAccountRequest>,
) -> Result<Json<OpenAccountResponse>, AppError> {
    open_account(store, request, AccountType::Deposit).await
}

pub async fn open_savings_account(
    State(store): State<SharedStore>,
    Json(request): Json<OpenAccountRequest>,
) -> Result<Json<OpenAccountResponse>, AppError> {
    open_account(store, request, AccountType::Savings).await
}

/// Open a debit card account. The account comes with one virtual card.
///
/// # Response
///
/// ```json
/// {
///   "account": {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "type": "DEBIT_CARD",
///     "cards": [{ "id": "...", "type": "VIRTUAL", ... }],
///     "status": "ACTIVE",
///     "balance": 0.0
///   }
/// }
/// ```
pub async fn open_debit_card_account(
    State(store): State<SharedStore>,
    Json(request): Json<OpenAccountRequest>,
) -> Result<Json<OpenAccountResponse>, AppError> {
    open_account(store, request, AccountType::DebitCard).await
}

/// Open a credit card account. The account comes with one virtual card.
pub async fn open_credit_card_account(
    State(store): State<SharedStore>,
    Json(request): Json<OpenAccountRequest>,
) -> Result<Json<OpenAccountResponse>, AppError> {
    open_account(store, request, AccountType::CreditCard).await
}
