//! Users gateway over gRPC.

use tonic::transport::Channel;

use super::channel::build_gateway_grpc_channel;
use super::observer::GrpcCallObserver;
use crate::config::GrpcClientConfig;
use crate::error::ClientError;
use crate::fakers::FAKE;
use crate::load::stats::SharedStats;
use crate::proto::{
    CreateUserRequest, CreateUserResponse, GetUserRequest, GetUserResponse,
    users_gateway_service_client::UsersGatewayServiceClient,
};

#[derive(Debug, Clone)]
pub struct UsersGatewayGrpcClient {
    stub: UsersGatewayServiceClient<Channel>,
    observer: GrpcCallObserver,
}

impl UsersGatewayGrpcClient {
    pub fn new(channel: Channel, observer: GrpcCallObserver) -> Self {
        Self {
            stub: UsersGatewayServiceClient::new(channel),
            observer,
        }
    }

    pub async fn get_user_api(
        &self,
        request: GetUserRequest,
    ) -> Result<tonic::Response<GetUserResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.UsersGatewayService/GetUser",
                stub.get_user(request),
            )
            .await?)
    }

    pub async fn create_user_api(
        &self,
        request: CreateUserRequest,
    ) -> Result<tonic::Response<CreateUserResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.UsersGatewayService/CreateUser",
                stub.create_user(request),
            )
            .await?)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<GetUserResponse, ClientError> {
        let request = GetUserRequest {
            id: user_id.to_string(),
        };
        Ok(self.get_user_api(request).await?.into_inner())
    }

    /// Create a user filled with fake data.
    pub async fn create_user(&self) -> Result<CreateUserResponse, ClientError> {
        let request = CreateUserRequest {
            email: FAKE.email(),
            last_name: FAKE.last_name(),
            first_name: FAKE.first_name(),
            middle_name: FAKE.middle_name(),
            phone_number: FAKE.phone_number(),
        };
        Ok(self.create_user_api(request).await?.into_inner())
    }
}

pub fn build_users_gateway_grpc_client(
    config: &GrpcClientConfig,
) -> Result<UsersGatewayGrpcClient, ClientError> {
    Ok(UsersGatewayGrpcClient::new(
        build_gateway_grpc_channel(config)?,
        GrpcCallObserver::logging(),
    ))
}

pub fn build_users_gateway_load_grpc_client(
    config: &GrpcClientConfig,
    stats: SharedStats,
) -> Result<UsersGatewayGrpcClient, ClientError> {
    Ok(UsersGatewayGrpcClient::new(
        build_gateway_grpc_channel(config)?,
        GrpcCallObserver::with_stats(stats),
    ))
}
