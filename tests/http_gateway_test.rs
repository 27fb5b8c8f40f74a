//! HTTP clients against the mock gateway.
//!
//! Every test starts its own gateway, so ids never leak between tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use bank_gateway_load::{
    clients::{
        AccountsGateway, CardsGateway, DocumentsGateway, OperationsGateway, UsersGateway,
        http::{
            build_accounts_gateway_http_client, build_cards_gateway_http_client,
            build_documents_gateway_http_client, build_operations_gateway_http_client,
            build_users_gateway_http_client, build_users_gateway_load_http_client,
        },
    },
    error::ClientError,
    load::RequestStats,
    models::{
        account::AccountType,
        card::CardType,
        operation::{OperationStatus, OperationType},
    },
};
use base64::{Engine, engine::general_purpose::STANDARD};
use common::{settings_for, spawn_gateway};

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn create_then_get_user() {
    let settings = settings_for(spawn_gateway().await);
    let users = build_users_gateway_http_client(&settings.gateway_http_client).unwrap();

    let created = users.create_user().await.unwrap();
    let fetched = users.get_user(&created.user.id).await.unwrap();

    assert_eq!(fetched.user, created.user);
    assert!(created.user.email.contains('@'));
}

#[tokio::test]
async fn raw_api_exposes_status_and_body() {
    let settings = settings_for(spawn_gateway().await);
    let users = build_users_gateway_http_client(&settings.gateway_http_client).unwrap();

    let response = users.get_user_api("missing").await.unwrap();

    assert_eq!(response.status.as_u16(), 404);
    assert!(response.text().contains("user_not_found"));
}

#[tokio::test]
async fn ids_with_reserved_characters_stay_on_their_route() {
    let settings = settings_for(spawn_gateway().await);
    let users = build_users_gateway_http_client(&settings.gateway_http_client).unwrap();
    let documents = build_documents_gateway_http_client(&settings.gateway_http_client).unwrap();

    let response = users.get_user_api("no/such user").await.unwrap();
    assert_eq!(response.status.as_u16(), 404);
    assert!(response.text().contains("user_not_found"));

    let response = documents
        .get_tariff_document_api("../users?x=1")
        .await
        .unwrap();
    assert_eq!(response.status.as_u16(), 404);
    assert!(response.text().contains("account_not_found"));
}

#[tokio::test]
async fn unknown_user_is_an_http_error_and_a_recorded_failure() {
    let settings = settings_for(spawn_gateway().await);
    let stats = RequestStats::new().unwrap();
    let users =
        build_users_gateway_load_http_client(&settings.gateway_http_client, stats.clone())
            .unwrap();

    let err = users.get_user("missing").await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));

    let entry = stats.get("GET /api/v1/users/{user_id}").unwrap();
    assert_eq!(entry.count, 1);
    assert_eq!(entry.failures, 1);
    assert_eq!(entry.request_type, "HTTP");
}

#[tokio::test]
async fn load_client_groups_requests_by_route() {
    let settings = settings_for(spawn_gateway().await);
    let stats = RequestStats::new().unwrap();
    let users =
        build_users_gateway_load_http_client(&settings.gateway_http_client, stats.clone())
            .unwrap();

    let created = users.create_user().await.unwrap();
    users.get_user(&created.user.id).await.unwrap();
    users.get_user(&created.user.id).await.unwrap();

    assert_eq!(stats.get("POST /api/v1/users").unwrap().count, 1);
    let reads = stats.get("GET /api/v1/users/{user_id}").unwrap();
    assert_eq!(reads.count, 2);
    assert_eq!(reads.failures, 0);
    assert!(reads.total_content_length > 0);
}

// ============================================================================
// Accounts, cards, operations, documents through the gateway traits
// ============================================================================

#[tokio::test]
async fn accounts_and_cards() {
    let settings = settings_for(spawn_gateway().await);
    let config = &settings.gateway_http_client;
    let users = build_users_gateway_http_client(config).unwrap();
    let accounts = build_accounts_gateway_http_client(config).unwrap();
    let cards = build_cards_gateway_http_client(config).unwrap();

    let user = UsersGateway::create_user(&users).await.unwrap();

    let deposit = AccountsGateway::open_deposit_account(&accounts, &user.id)
        .await
        .unwrap();
    let credit = AccountsGateway::open_credit_card_account(&accounts, &user.id)
        .await
        .unwrap();
    assert_eq!(deposit.account_type, AccountType::Deposit);
    assert!(deposit.cards.is_empty());
    assert_eq!(credit.account_type, AccountType::CreditCard);
    assert_eq!(credit.cards.len(), 1);

    let card = CardsGateway::issue_physical_card(&cards, &user.id, &credit.id)
        .await
        .unwrap();
    assert_eq!(card.card_type, CardType::Physical);
    assert_eq!(card.account_id, credit.id);

    let listed = AccountsGateway::get_accounts(&accounts, &user.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[1].cards.len(), 2);
}

#[tokio::test]
async fn operations_receipts_and_summary() {
    let settings = settings_for(spawn_gateway().await);
    let config = &settings.gateway_http_client;
    let users = build_users_gateway_http_client(config).unwrap();
    let accounts = build_accounts_gateway_http_client(config).unwrap();
    let operations = build_operations_gateway_http_client(config).unwrap();

    let user = UsersGateway::create_user(&users).await.unwrap();
    let account = AccountsGateway::open_debit_card_account(&accounts, &user.id)
        .await
        .unwrap();
    let card_id = account.cards[0].id.clone();

    let top_up = OperationsGateway::make_top_up_operation(&operations, &card_id, &account.id)
        .await
        .unwrap();
    let purchase =
        OperationsGateway::make_purchase_operation(&operations, &card_id, &account.id)
            .await
            .unwrap();
    let cashback =
        OperationsGateway::make_cashback_operation(&operations, &card_id, &account.id)
            .await
            .unwrap();

    assert_eq!(top_up.operation_type, OperationType::TopUp);
    assert_eq!(top_up.status, OperationStatus::Completed);
    assert_eq!(purchase.operation_type, OperationType::Purchase);
    assert!(!purchase.category.is_empty());

    let fetched = OperationsGateway::get_operation(&operations, &purchase.id)
        .await
        .unwrap();
    assert_eq!(fetched, purchase);

    let listed = OperationsGateway::get_operations(&operations, &account.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 3);

    let summary = OperationsGateway::get_operations_summary(&operations, &account.id)
        .await
        .unwrap();
    assert!((summary.received_amount - top_up.amount).abs() < 1e-9);
    assert!((summary.spent_amount - purchase.amount).abs() < 1e-9);
    assert!((summary.cashback_amount - cashback.amount).abs() < 1e-9);

    let receipt = OperationsGateway::get_operation_receipt(&operations, &purchase.id)
        .await
        .unwrap();
    assert!(receipt.url.contains(&purchase.id));
    assert!(!STANDARD.decode(receipt.document).unwrap().is_empty());
}

#[tokio::test]
async fn every_make_operation_endpoint_answers() {
    let settings = settings_for(spawn_gateway().await);
    let config = &settings.gateway_http_client;
    let users = build_users_gateway_http_client(config).unwrap();
    let accounts = build_accounts_gateway_http_client(config).unwrap();
    let operations = build_operations_gateway_http_client(config).unwrap();

    let user = UsersGateway::create_user(&users).await.unwrap();
    let account = AccountsGateway::open_credit_card_account(&accounts, &user.id)
        .await
        .unwrap();
    let card_id = account.cards[0].id.as_str();
    let account_id = account.id.as_str();

    let made = vec![
        OperationsGateway::make_fee_operation(&operations, card_id, account_id)
            .await
            .unwrap(),
        OperationsGateway::make_transfer_operation(&operations, card_id, account_id)
            .await
            .unwrap(),
        OperationsGateway::make_bill_payment_operation(&operations, card_id, account_id)
            .await
            .unwrap(),
        OperationsGateway::make_cash_withdrawal_operation(&operations, card_id, account_id)
            .await
            .unwrap(),
    ];

    let types: Vec<OperationType> = made.iter().map(|op| op.operation_type).collect();
    assert_eq!(
        types,
        vec![
            OperationType::Fee,
            OperationType::Transfer,
            OperationType::BillPayment,
            OperationType::CashWithdrawal,
        ]
    );
}

#[tokio::test]
async fn documents_of_an_account() {
    let settings = settings_for(spawn_gateway().await);
    let config = &settings.gateway_http_client;
    let users = build_users_gateway_http_client(config).unwrap();
    let accounts = build_accounts_gateway_http_client(config).unwrap();
    let documents = build_documents_gateway_http_client(config).unwrap();

    let user = UsersGateway::create_user(&users).await.unwrap();
    let account = AccountsGateway::open_savings_account(&accounts, &user.id)
        .await
        .unwrap();

    let tariff = DocumentsGateway::get_tariff_document(&documents, &account.id)
        .await
        .unwrap();
    let contract = DocumentsGateway::get_contract_document(&documents, &account.id)
        .await
        .unwrap();

    assert!(tariff.url.contains(&account.id));
    assert!(contract.url.contains(&account.id));
    assert_ne!(tariff.document, contract.document);

    let err = DocumentsGateway::get_tariff_document(&documents, "missing")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
