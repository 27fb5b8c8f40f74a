//! HTTP gateway clients built on `reqwest`.

/// Base client and buffered response
pub mod client;
/// Request logging and metrics
pub mod hooks;
pub mod users;
pub mod accounts;
pub mod cards;
pub mod operations;
pub mod documents;

pub use accounts::{
    AccountsGatewayHttpClient, build_accounts_gateway_http_client,
    build_accounts_gateway_load_http_client,
};
pub use cards::{
    CardsGatewayHttpClient, build_cards_gateway_http_client, build_cards_gateway_load_http_client,
};
pub use client::{HttpClient, HttpResponse};
pub use documents::{
    DocumentsGatewayHttpClient, build_documents_gateway_http_client,
    build_documents_gateway_load_http_client,
};
pub use operations::{
    OperationsGatewayHttpClient, build_operations_gateway_http_client,
    build_operations_gateway_load_http_client,
};
pub use users::{
    UsersGatewayHttpClient, build_users_gateway_http_client, build_users_gateway_load_http_client,
};
