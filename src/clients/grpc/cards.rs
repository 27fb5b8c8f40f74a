//! Cards gateway over gRPC.

use tonic::transport::Channel;

use super::channel::build_gateway_grpc_channel;
use super::observer::GrpcCallObserver;
use crate::config::GrpcClientConfig;
use crate::error::ClientError;
use crate::load::stats::SharedStats;
use crate::proto::{
    IssuePhysicalCardRequest, IssuePhysicalCardResponse, IssueVirtualCardRequest,
    IssueVirtualCardResponse, cards_gateway_service_client::CardsGatewayServiceClient,
};

#[derive(Debug, Clone)]
pub struct CardsGatewayGrpcClient {
    stub: CardsGatewayServiceClient<Channel>,
    observer: GrpcCallObserver,
}

impl CardsGatewayGrpcClient {
    pub fn new(channel: Channel, observer: GrpcCallObserver) -> Self {
        Self {
            stub: CardsGatewayServiceClient::new(channel),
            observer,
        }
    }

    pub async fn issue_virtual_card_api(
        &self,
        request: IssueVirtualCardRequest,
    ) -> Result<tonic::Response<IssueVirtualCardResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.CardsGatewayService/IssueVirtualCard",
                stub.issue_virtual_card(request),
            )
            .await?)
    }

    pub async fn issue_physical_card_api(
        &self,
        request: IssuePhysicalCardRequest,
    ) -> Result<tonic::Response<IssuePhysicalCardResponse>, ClientError> {
        let mut stub = self.stub.clone();
        Ok(self
            .observer
            .observe(
                "/gateway.v1.CardsGatewayService/IssuePhysicalCard",
                stub.issue_physical_card(request),
            )
            .await?)
    }

    pub async fn issue_virtual_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<IssueVirtualCardResponse, ClientError> {
        let request = IssueVirtualCardRequest {
            user_id: user_id.to_string(),
            account_id: account_id.to_string(),
        };
        Ok(self.issue_virtual_card_api(request).await?.into_inner())
    }

    pub async fn issue_physical_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<IssuePhysicalCardResponse, ClientError> {
        let request = IssuePhysicalCardRequest {
            user_id: user_id.to_string(),
            account_id: account_id.to_string(),
        };
        Ok(self.issue_physical_card_api(request).await?.into_inner())
    }
}

pub fn build_cards_gateway_grpc_client(
    config: &GrpcClientConfig,
) -> Result<CardsGatewayGrpcClient, ClientError> {
    Ok(CardsGatewayGrpcClient::new(
        build_gateway_grpc_channel(config)?,
        GrpcCallObserver::logging(),
    ))
}

pub fn build_cards_gateway_load_grpc_client(
    config: &GrpcClientConfig,
    stats: SharedStats,
) -> Result<CardsGatewayGrpcClient, ClientError> {
    Ok(CardsGatewayGrpcClient::new(
        build_gateway_grpc_channel(config)?,
        GrpcCallObserver::with_stats(stats),
    ))
}
