//! gRPC gateway clients built on `tonic`.

pub mod channel;
/// Proto reply to model conversions
pub mod convert;
/// Call timing and metrics
pub mod observer;
pub mod users;
pub mod accounts;
pub mod cards;
pub mod operations;
pub mod documents;

pub use accounts::{
    AccountsGatewayGrpcClient, build_accounts_gateway_grpc_client,
    build_accounts_gateway_load_grpc_client,
};
pub use cards::{
    CardsGatewayGrpcClient, build_cards_gateway_grpc_client, build_cards_gateway_load_grpc_client,
};
pub use channel::build_gateway_grpc_channel;
pub use documents::{
    DocumentsGatewayGrpcClient, build_documents_gateway_grpc_client,
    build_documents_gateway_load_grpc_client,
};
pub use observer::GrpcCallObserver;
pub use operations::{
    OperationsGatewayGrpcClient, build_operations_gateway_grpc_client,
    build_operations_gateway_load_grpc_client,
};
pub use users::{
    UsersGatewayGrpcClient, build_users_gateway_grpc_client, build_users_gateway_load_grpc_client,
};
