//! Unary call observer for the gRPC clients.
//!
//! Plays the part of a client interceptor: every call goes through
//! [`GrpcCallObserver::observe`], which times it, logs it and reports it to the
//! request stats when a sink is attached.

use std::future::Future;
use std::time::Instant;

use crate::load::stats::{RequestEvent, SharedStats};

#[derive(Debug, Clone, Default)]
pub struct GrpcCallObserver {
    stats: Option<SharedStats>,
}

impl GrpcCallObserver {
    pub fn logging() -> Self {
        Self { stats: None }
    }

    pub fn with_stats(stats: SharedStats) -> Self {
        Self { stats: Some(stats) }
    }

    /// Run `call` and record it under `method` (full path, e.g.
    /// `/gateway.v1.UsersGatewayService/GetUser`).
    ///
    /// The response length is the encoded size of the reply message; failed
    /// calls are recorded with length 0 and the status as the exception.
    pub async fn observe<T, F>(
        &self,
        method: &'static str,
        call: F,
    ) -> Result<tonic::Response<T>, tonic::Status>
    where
        T: prost::Message,
        F: Future<Output = Result<tonic::Response<T>, tonic::Status>>,
    {
        let start_time = Instant::now();
        let result = call.await;
        let response_time_ms = start_time.elapsed().as_secs_f64() * 1000.0;

        let (response_length, exception) = match &result {
            Ok(response) => {
                tracing::debug!(method, response_time_ms, "gRPC call succeeded");
                (response.get_ref().encoded_len(), None)
            }
            Err(status) => {
                tracing::warn!(method, code = ?status.code(), message = status.message(), "gRPC call failed");
                (0, Some(status.to_string()))
            }
        };

        if let Some(stats) = &self.stats {
            stats.fire(RequestEvent {
                request_type: "gRPC",
                name: method.to_string(),
                response_time_ms,
                response_length,
                exception,
            });
        }

        result
    }
}
