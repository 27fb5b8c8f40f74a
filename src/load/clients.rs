//! Gateway client bundles for task sets.
//!
//! One virtual user gets all five gateway clients, sharing a single HTTP
//! connection pool or gRPC channel and reporting to the run's request stats.

use super::environment::Environment;
use crate::clients::grpc::{
    AccountsGatewayGrpcClient, CardsGatewayGrpcClient, DocumentsGatewayGrpcClient,
    GrpcCallObserver, OperationsGatewayGrpcClient, UsersGatewayGrpcClient,
    build_gateway_grpc_channel,
};
use crate::clients::http::{
    AccountsGatewayHttpClient, CardsGatewayHttpClient, DocumentsGatewayHttpClient,
    OperationsGatewayHttpClient, UsersGatewayHttpClient, client::build_gateway_load_http_client,
};
use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct GatewayHttpClients {
    pub users: UsersGatewayHttpClient,
    pub cards: CardsGatewayHttpClient,
    pub accounts: AccountsGatewayHttpClient,
    pub documents: DocumentsGatewayHttpClient,
    pub operations: OperationsGatewayHttpClient,
}

impl GatewayHttpClients {
    pub fn build(environment: &Environment) -> Result<Self, ClientError> {
        let client = build_gateway_load_http_client(
            &environment.settings.gateway_http_client,
            environment.stats.clone(),
        )?;

        Ok(Self {
            users: UsersGatewayHttpClient::new(client.clone()),
            cards: CardsGatewayHttpClient::new(client.clone()),
            accounts: AccountsGatewayHttpClient::new(client.clone()),
            documents: DocumentsGatewayHttpClient::new(client.clone()),
            operations: OperationsGatewayHttpClient::new(client),
        })
    }
}

#[derive(Debug, Clone)]
pub struct GatewayGrpcClients {
    pub users: UsersGatewayGrpcClient,
    pub cards: CardsGatewayGrpcClient,
    pub accounts: AccountsGatewayGrpcClient,
    pub documents: DocumentsGatewayGrpcClient,
    pub operations: OperationsGatewayGrpcClient,
}

impl GatewayGrpcClients {
    /// Channels connect lazily, so this succeeds even if the gateway is down.
    pub fn build(environment: &Environment) -> Result<Self, ClientError> {
        let channel = build_gateway_grpc_channel(&environment.settings.gateway_grpc_client)?;
        let observer = GrpcCallObserver::with_stats(environment.stats.clone());

        Ok(Self {
            users: UsersGatewayGrpcClient::new(channel.clone(), observer.clone()),
            cards: CardsGatewayGrpcClient::new(channel.clone(), observer.clone()),
            accounts: AccountsGatewayGrpcClient::new(channel.clone(), observer.clone()),
            documents: DocumentsGatewayGrpcClient::new(channel.clone(), observer.clone()),
            operations: OperationsGatewayGrpcClient::new(channel, observer),
        })
    }
}
