//! Mock gateway bootstrap shared by the integration tests.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::net::SocketAddr;
use std::time::Duration;

use bank_gateway_load::{
    config::Settings,
    server,
    store::{GatewayStore, SharedStore},
};
use tokio::net::TcpListener;
use url::Url;

/// Start the mock gateway on a random local port.
pub async fn spawn_gateway() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        server::serve(listener).await.unwrap();
    });

    addr
}

/// Start the gRPC mock gateway on a random local port.
///
/// Returns the store so tests can look at what the calls left behind.
pub async fn spawn_grpc_gateway() -> (SocketAddr, SharedStore) {
    let store = GatewayStore::new();
    let addr = free_addr().await;

    let served = store.clone();
    tokio::spawn(async move {
        server::serve_grpc(addr, served).await.unwrap();
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, store)
}

/// Bind to port 0, take the address and release it for tonic to bind.
pub async fn free_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Settings pointing the HTTP clients at `addr`, with no pause between tasks.
pub fn settings_for(addr: SocketAddr) -> Settings {
    let mut settings = Settings::default();
    settings.gateway_http_client.url = Url::parse(&format!("http://{addr}")).unwrap();
    settings.gateway_http_client.timeout = 5.0;
    settings.locust_user.wait_time_min = 0.0;
    settings.locust_user.wait_time_max = 0.0;
    settings
}

/// Settings pointing the gRPC clients at `addr`, with no pause between tasks.
pub fn grpc_settings_for(addr: SocketAddr) -> Settings {
    let mut settings = Settings::default();
    settings.gateway_grpc_client.host = addr.ip().to_string();
    settings.gateway_grpc_client.port = addr.port();
    settings.locust_user.wait_time_min = 0.0;
    settings.locust_user.wait_time_max = 0.0;
    settings
}
