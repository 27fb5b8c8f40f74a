//! `gateway.v1.UsersGatewayService` over the in-memory store.

use tonic::{Request, Response, Status};

use crate::proto::users_gateway_service_server::UsersGatewayService;
use crate::proto::{CreateUserRequest, CreateUserResponse, GetUserRequest, GetUserResponse};
use crate::services::user_service;
use crate::store::SharedStore;

#[derive(Debug, Clone)]
pub struct UsersService {
    store: SharedStore,
}

impl UsersService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[tonic::async_trait]
impl UsersGatewayService for UsersService {
    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, Status> {
        let user = self.store.get_user(&request.into_inner().id).await?;

        Ok(Response::new(GetUserResponse {
            user: Some(user.into()),
        }))
    }

    /// An email without `@` is `INVALID_ARGUMENT`.
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        let user = user_service::create_user(&self.store, request.into_inner().into()).await?;

        Ok(Response::new(CreateUserResponse {
            user: Some(user.into()),
        }))
    }
}
