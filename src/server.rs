//! Mock gateway servers.
//!
//! Serves the same REST and gRPC surfaces the clients talk to, backed by the
//! in-memory store. Used for local load runs and by the integration tests.

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tonic::transport::Server;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    grpc_services::{
        AccountsService, CardsService, DocumentsService, OperationsService, UsersService,
    },
    handlers,
    proto::{
        accounts_gateway_service_server::AccountsGatewayServiceServer,
        cards_gateway_service_server::CardsGatewayServiceServer,
        documents_gateway_service_server::DocumentsGatewayServiceServer,
        operations_gateway_service_server::OperationsGatewayServiceServer,
        users_gateway_service_server::UsersGatewayServiceServer,
    },
    store::{GatewayStore, SharedStore},
};

/// Build the router with every gateway route.
pub fn router(store: SharedStore) -> Router {
    let users = Router::new()
        .route(
            "/api/v1/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/api/v1/users/{user_id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        );

    let accounts = Router::new()
        .route("/api/v1/accounts", get(handlers::accounts::get_accounts))
        .route(
            "/api/v1/accounts/open-deposit-account",
            post(handlers::accounts::open_deposit_account),
        )
        .route(
            "/api/v1/accounts/open-savings-account",
            post(handlers::accounts::open_savings_account),
        )
        .route(
            "/api/v1/accounts/open-debit-card-account",
            post(handlers::accounts::open_debit_card_account),
        )
        .route(
            "/api/v1/accounts/open-credit-card-account",
            post(handlers::accounts::open_credit_card_account),
        );

    let cards = Router::new()
        .route(
            "/api/v1/cards/issue-virtual-card",
            post(handlers::cards::issue_virtual_card),
        )
        .route(
            "/api/v1/cards/issue-physical-card",
            post(handlers::cards::issue_physical_card),
        );

    let operations = Router::new()
        .route("/api/v1/operations", get(handlers::operations::get_operations))
        .route(
            "/api/v1/operations/{operation_id}",
            get(handlers::operations::get_operation),
        )
        .route(
            "/api/v1/operations/operation-receipt/{operation_id}",
            get(handlers::operations::get_operation_receipt),
        )
        .route(
            "/api/v1/operations/operations-summary",
            get(handlers::operations::get_operations_summary),
        )
        .route(
            "/api/v1/operations/make-fee-operation",
            post(handlers::operations::make_fee_operation),
        )
        .route(
            "/api/v1/operations/make-top-up-operation",
            post(handlers::operations::make_top_up_operation),
        )
        .route(
            "/api/v1/operations/make-cashback-operation",
            post(handlers::operations::make_cashback_operation),
        )
        .route(
            "/api/v1/operations/make-transfer-operation",
            post(handlers::operations::make_transfer_operation),
        )
        .route(
            "/api/v1/operations/make-purchase-operation",
            post(handlers::operations::make_purchase_operation),
        )
        .route(
            "/api/v1/operations/make-bill-payment-operation",
            post(handlers::operations::make_bill_payment_operation),
        )
        .route(
            "/api/v1/operations/make-cash-withdrawal-operation",
            post(handlers::operations::make_cash_withdrawal_operation),
        );

    let documents = Router::new()
        .route(
            "/api/v1/documents/tariff-document/{account_id}",
            get(handlers::documents::get_tariff_document),
        )
        .route(
            "/api/v1/documents/contract-document/{account_id}",
            get(handlers::documents::get_contract_document),
        );

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(users)
        .merge(accounts)
        .merge(cards)
        .merge(operations)
        .merge(documents)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// Serve a fresh store on an already bound listener until the task is dropped.
pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    serve_store(listener, GatewayStore::new()).await
}

/// Serve the REST API of `store` on an already bound listener.
pub async fn serve_store(listener: TcpListener, store: SharedStore) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Mock gateway listening on {}", addr);
    }

    axum::serve(listener, router(store)).await
}

/// Build the gRPC server with every gateway service.
pub fn grpc_router(store: SharedStore) -> tonic::transport::server::Router {
    Server::builder()
        .add_service(UsersGatewayServiceServer::new(UsersService::new(
            store.clone(),
        )))
        .add_service(AccountsGatewayServiceServer::new(AccountsService::new(
            store.clone(),
        )))
        .add_service(CardsGatewayServiceServer::new(CardsService::new(
            store.clone(),
        )))
        .add_service(OperationsGatewayServiceServer::new(
            OperationsService::new(store.clone()),
        ))
        .add_service(DocumentsGatewayServiceServer::new(DocumentsService::new(
            store,
        )))
}

/// Serve the gRPC API of `store` on `addr` until the task is dropped.
pub async fn serve_grpc(
    addr: SocketAddr,
    store: SharedStore,
) -> Result<(), tonic::transport::Error> {
    tracing::info!("Mock gRPC gateway listening on {}", addr);

    grpc_router(store).serve(addr).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, value)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn user_body() -> Value {
        json!({
            "email": "tom@example.com",
            "lastName": "Smith",
            "firstName": "Tom",
            "middleName": "B.",
            "phoneNumber": "+1-555-123-4567"
        })
    }

    #[tokio::test]
    async fn unknown_user_is_404_with_error_body() {
        let app = router(GatewayStore::new());

        let (status, body) = send(&app, get("/api/v1/users/missing")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "user_not_found");
        assert_eq!(body["error"]["message"], "User with ID missing not found");
    }

    #[tokio::test]
    async fn invalid_email_is_400() {
        let app = router(GatewayStore::new());
        let mut body = user_body();
        body["email"] = json!("not-an-email");

        let (status, body) = send(&app, post_json("/api/v1/users", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "invalid_request");
    }

    #[tokio::test]
    async fn user_lifecycle() {
        let app = router(GatewayStore::new());

        let (status, created) = send(&app, post_json("/api/v1/users", user_body())).await;
        assert_eq!(status, StatusCode::OK);
        let user_id = created["user"]["id"].as_str().unwrap().to_string();
        assert_eq!(created["user"]["firstName"], "Tom");

        let mut changed = user_body();
        changed["firstName"] = json!("Tim");
        let request = Request::put(format!("/api/v1/users/{user_id}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(changed.to_string()))
            .unwrap();
        let (status, updated) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["user"]["firstName"], "Tim");

        let (_, listed) = send(&app, get("/api/v1/users")).await;
        assert_eq!(listed["users"].as_array().unwrap().len(), 1);

        let request = Request::delete(format!("/api/v1/users/{user_id}"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, get(&format!("/api/v1/users/{user_id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn purchase_shows_up_in_list_and_summary() {
        let app = router(GatewayStore::new());
        let (_, created) = send(&app, post_json("/api/v1/users", user_body())).await;
        let user_id = created["user"]["id"].as_str().unwrap();

        let (_, opened) = send(
            &app,
            post_json(
                "/api/v1/accounts/open-debit-card-account",
                json!({ "userId": user_id }),
            ),
        )
        .await;
        let account_id = opened["account"]["id"].as_str().unwrap();
        let card_id = opened["account"]["cards"][0]["id"].as_str().unwrap();
        assert_eq!(opened["account"]["type"], "DEBIT_CARD");

        let (status, made) = send(
            &app,
            post_json(
                "/api/v1/operations/make-purchase-operation",
                json!({
                    "status": "COMPLETED",
                    "amount": 40.0,
                    "cardId": card_id,
                    "accountId": account_id,
                    "category": "taxi"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(made["operation"]["type"], "PURCHASE");
        assert_eq!(made["operation"]["category"], "taxi");

        let (_, listed) = send(
            &app,
            get(&format!("/api/v1/operations?accountId={account_id}")),
        )
        .await;
        assert_eq!(listed["operations"].as_array().unwrap().len(), 1);

        let (status, summary) = send(
            &app,
            get(&format!(
                "/api/v1/operations/operations-summary?accountId={account_id}"
            )),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["summary"]["spentAmount"], 40.0);

        let operation_id = made["operation"]["id"].as_str().unwrap();
        let (status, receipt) = send(
            &app,
            get(&format!(
                "/api/v1/operations/operation-receipt/{operation_id}"
            )),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(receipt["receipt"]["url"].as_str().unwrap().contains(operation_id));
    }

    #[tokio::test]
    async fn health_reports_user_count() {
        let app = router(GatewayStore::new());
        send(&app, post_json("/api/v1/users", user_body())).await;

        let (status, body) = send(&app, get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["users"], 1);
    }
}
