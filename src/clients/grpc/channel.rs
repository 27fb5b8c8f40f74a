//! Channel to the gRPC gateway.

use tonic::transport::{Channel, Endpoint};

use crate::config::GrpcClientConfig;
use crate::error::ClientError;

/// Insecure, lazily connected channel to `host:port`.
///
/// No connection is made until the first call, so building clients never
/// fails because the gateway is down. Must be called inside a tokio runtime.
pub fn build_gateway_grpc_channel(config: &GrpcClientConfig) -> Result<Channel, ClientError> {
    let endpoint = Endpoint::from_shared(format!("http://{}", config.client_url()))?;
    Ok(endpoint.connect_lazy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lazy_channel_builds_without_a_server() {
        let config = GrpcClientConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
        };
        assert!(build_gateway_grpc_channel(&config).is_ok());
    }
}
