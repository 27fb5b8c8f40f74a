//! `gateway.v1.CardsGatewayService` over the in-memory store.

use tonic::{Request, Response, Status};

use crate::models::card::CardType;
use crate::proto::cards_gateway_service_server::CardsGatewayService;
use crate::proto::{
    IssuePhysicalCardRequest, IssuePhysicalCardResponse, IssueVirtualCardRequest,
    IssueVirtualCardResponse,
};
use crate::store::SharedStore;

#[derive(Debug, Clone)]
pub struct CardsService {
    store: SharedStore,
}

impl CardsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[tonic::async_trait]
impl CardsGatewayService for CardsService {
    async fn issue_virtual_card(
        &self,
        request: Request<IssueVirtualCardRequest>,
    ) -> Result<Response<IssueVirtualCardResponse>, Status> {
        let request = request.into_inner();
        let card = self
            .store
            .issue_card(&request.user_id, &request.account_id, CardType::Virtual)
            .await?;

        Ok(Response::new(IssueVirtualCardResponse {
            card: Some(card.into()),
        }))
    }

    async fn issue_physical_card(
        &self,
        request: Request<IssuePhysicalCardRequest>,
    ) -> Result<Response<IssuePhysicalCardResponse>, Status> {
        let request = request.into_inner();
        let card = self
            .store
            .issue_card(&request.user_id, &request.account_id, CardType::Physical)
            .await?;

        Ok(Response::new(IssuePhysicalCardResponse {
            card: Some(card.into()),
        }))
    }
}
