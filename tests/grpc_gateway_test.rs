//! gRPC clients, seeding and scenarios against the in-memory gRPC gateway.
//!
//! Each test serves its own store on a random port.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use bank_gateway_load::{
    clients::{
        AccountsGateway, CardsGateway, DocumentsGateway, OperationsGateway, UsersGateway,
        grpc::{
            build_accounts_gateway_grpc_client, build_cards_gateway_grpc_client,
            build_documents_gateway_grpc_client, build_operations_gateway_grpc_client,
            build_users_gateway_grpc_client,
        },
    },
    error::ClientError,
    load::{
        Environment, LoadRunner, LoadScenarioName, RunOptions, TaskSet,
        scenarios::{
            grpc_get_accounts::{GrpcGetAccountsTask, GrpcGetAccountsTaskSet},
            grpc_get_documents::{GetDocumentsSequentialTaskSet, GetDocumentsTask},
        },
    },
    models::{
        account::AccountType,
        card::CardType,
        operation::{OperationStatus, OperationType},
    },
    proto::{
        CreateUserRequest, CreateUserResponse, GetUserRequest, GetUserResponse,
        users_gateway_service_server::{UsersGatewayService, UsersGatewayServiceServer},
    },
    seeds::{
        build_grpc_seeds_builder,
        plan::{SeedAccountsPlan, SeedCardsPlan, SeedOperationsPlan, SeedUsersPlan, SeedsPlan},
    },
};
use base64::{Engine, engine::general_purpose::STANDARD};
use common::{free_addr, grpc_settings_for, spawn_grpc_gateway};
use tonic::{Code, Request, Response, Status, transport::Server};

// ============================================================================
// Services
// ============================================================================

#[tokio::test]
async fn users_service_creates_and_reads() {
    let (addr, store) = spawn_grpc_gateway().await;
    let settings = grpc_settings_for(addr);
    let users = build_users_gateway_grpc_client(&settings.gateway_grpc_client).unwrap();

    let created = UsersGateway::create_user(&users).await.unwrap();
    let fetched = UsersGateway::get_user(&users, &created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(store.user_count().await, 1);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let (addr, _store) = spawn_grpc_gateway().await;
    let settings = grpc_settings_for(addr);
    let users = build_users_gateway_grpc_client(&settings.gateway_grpc_client).unwrap();

    let err = UsersGateway::get_user(&users, "missing").await.unwrap_err();

    match err {
        ClientError::Grpc(status) => assert_eq!(status.code(), Code::NotFound),
        other => panic!("expected a gRPC status, got {other:?}"),
    }
}

#[tokio::test]
async fn accounts_service_opens_every_kind() {
    let (addr, _store) = spawn_grpc_gateway().await;
    let settings = grpc_settings_for(addr);
    let users = build_users_gateway_grpc_client(&settings.gateway_grpc_client).unwrap();
    let accounts = build_accounts_gateway_grpc_client(&settings.gateway_grpc_client).unwrap();

    let user = UsersGateway::create_user(&users).await.unwrap();
    let deposit = AccountsGateway::open_deposit_account(&accounts, &user.id)
        .await
        .unwrap();
    let savings = AccountsGateway::open_savings_account(&accounts, &user.id)
        .await
        .unwrap();
    let debit = AccountsGateway::open_debit_card_account(&accounts, &user.id)
        .await
        .unwrap();
    let credit = AccountsGateway::open_credit_card_account(&accounts, &user.id)
        .await
        .unwrap();

    assert_eq!(deposit.account_type, AccountType::Deposit);
    assert_eq!(savings.account_type, AccountType::Savings);
    assert_eq!(debit.account_type, AccountType::DebitCard);
    assert_eq!(credit.account_type, AccountType::CreditCard);
    assert!(!credit.cards.is_empty());

    let listed = AccountsGateway::get_accounts(&accounts, &user.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 4);
}

#[tokio::test]
async fn cards_service_issues_both_kinds() {
    let (addr, _store) = spawn_grpc_gateway().await;
    let settings = grpc_settings_for(addr);
    let users = build_users_gateway_grpc_client(&settings.gateway_grpc_client).unwrap();
    let accounts = build_accounts_gateway_grpc_client(&settings.gateway_grpc_client).unwrap();
    let cards = build_cards_gateway_grpc_client(&settings.gateway_grpc_client).unwrap();

    let user = UsersGateway::create_user(&users).await.unwrap();
    let account = AccountsGateway::open_debit_card_account(&accounts, &user.id)
        .await
        .unwrap();

    let virtual_card = CardsGateway::issue_virtual_card(&cards, &user.id, &account.id)
        .await
        .unwrap();
    let physical_card = CardsGateway::issue_physical_card(&cards, &user.id, &account.id)
        .await
        .unwrap();

    assert_eq!(virtual_card.card_type, CardType::Virtual);
    assert_eq!(physical_card.card_type, CardType::Physical);
    assert_eq!(virtual_card.account_id, account.id);
}

#[tokio::test]
async fn operations_service_records_and_summarizes() {
    let (addr, _store) = spawn_grpc_gateway().await;
    let settings = grpc_settings_for(addr);
    let users = build_users_gateway_grpc_client(&settings.gateway_grpc_client).unwrap();
    let accounts = build_accounts_gateway_grpc_client(&settings.gateway_grpc_client).unwrap();
    let operations = build_operations_gateway_grpc_client(&settings.gateway_grpc_client).unwrap();

    let user = UsersGateway::create_user(&users).await.unwrap();
    let account = AccountsGateway::open_credit_card_account(&accounts, &user.id)
        .await
        .unwrap();
    let card_id = &account.cards[0].id;

    let top_up = OperationsGateway::make_top_up_operation(&operations, card_id, &account.id)
        .await
        .unwrap();
    let purchase = OperationsGateway::make_purchase_operation(&operations, card_id, &account.id)
        .await
        .unwrap();
    OperationsGateway::make_cashback_operation(&operations, card_id, &account.id)
        .await
        .unwrap();

    assert_eq!(top_up.operation_type, OperationType::TopUp);
    assert_eq!(top_up.status, OperationStatus::Completed);
    assert_eq!(purchase.operation_type, OperationType::Purchase);

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
    assert!((summary.received_amount - top_up.amount).abs() < 1e-6);
    assert!((summary.spent_amount - purchase.amount).abs() < 1e-6);

    let receipt = OperationsGateway::get_operation_receipt(&operations, &purchase.id)
        .await
        .unwrap();
    assert!(!receipt.url.is_empty());
}

#[tokio::test]
async fn documents_service_returns_base64_documents() {
    let (addr, _store) = spawn_grpc_gateway().await;
    let settings = grpc_settings_for(addr);
    let users = build_users_gateway_grpc_client(&settings.gateway_grpc_client).unwrap();
    let accounts = build_accounts_gateway_grpc_client(&settings.gateway_grpc_client).unwrap();
    let documents = build_documents_gateway_grpc_client(&settings.gateway_grpc_client).unwrap();

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

    assert!(!STANDARD.decode(&tariff.document).unwrap().is_empty());
    assert!(!STANDARD.decode(&contract.document).unwrap().is_empty());
    assert_ne!(tariff.url, contract.url);
}

// ============================================================================
// Seeding
// ============================================================================

#[tokio::test]
async fn grpc_seeding_fills_the_store() {
    let (addr, store) = spawn_grpc_gateway().await;
    let settings = grpc_settings_for(addr);
    let builder = build_grpc_seeds_builder(&settings).unwrap();

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
                purchase_operations: SeedOperationsPlan { count: 2 },
                ..Default::default()
            },
            ..Default::default()
        },
    };

    let result = builder.build(&plan).await.unwrap();

    assert_eq!(result.users.len(), 2);
    assert_eq!(store.user_count().await, 2);
    for user in &result.users {
        let accounts = store.get_accounts(&user.user_id).await.unwrap();
        assert_eq!(accounts.len(), 2);

        let credit = &user.credit_card_accounts[0];
        assert_eq!(credit.physical_cards.len(), 1);
        let operations = store.get_operations(&credit.account_id).await.unwrap();
        assert_eq!(operations.len(), 2);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn grpc_get_accounts_scenario_runs_without_failures() {
    let (addr, _store) = spawn_grpc_gateway().await;
    let environment = Environment::new(grpc_settings_for(addr)).unwrap();
    let runner = LoadRunner::new(
        environment,
        RunOptions {
            users: 2,
            spawn_rate: 100.0,
            run_time: Duration::from_millis(500),
        },
    );

    let stats = LoadScenarioName::GrpcGetAccounts.run(runner).await.unwrap();

    let created = stats
        .get("/gateway.v1.UsersGatewayService/CreateUser")
        .unwrap();
    assert!(created.count > 0);
    assert_eq!(stats.total().failures, 0);
}

/// Users service that answers `CreateUser` without a user.
struct UserlessUsers;

#[tonic::async_trait]
impl UsersGatewayService for UserlessUsers {
    async fn get_user(
        &self,
        _request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, Status> {
        Ok(Response::new(GetUserResponse { user: None }))
    }

    async fn create_user(
        &self,
        _request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        Ok(Response::new(CreateUserResponse { user: None }))
    }
}

#[tokio::test]
async fn create_user_reply_without_user_fails_the_task() {
    let addr = free_addr().await;
    tokio::spawn(
        Server::builder()
            .add_service(UsersGatewayServiceServer::new(UserlessUsers))
            .serve(addr),
    );
    tokio::time::sleep(Duration::from_millis(50)).await;
    let environment = Arc::new(Environment::new(grpc_settings_for(addr)).unwrap());

    let mut accounts = GrpcGetAccountsTaskSet::setup(environment.clone()).unwrap();
    let err = accounts
        .run(GrpcGetAccountsTask::CreateUser)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::MissingField("user")));

    let mut documents = GetDocumentsSequentialTaskSet::setup(environment).unwrap();
    let err = documents
        .run(GetDocumentsTask::CreateUser)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::MissingField("user")));
}
