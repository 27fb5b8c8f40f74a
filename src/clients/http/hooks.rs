//! Request/response hooks of the HTTP client.
//!
//! Every request passes through `RequestHooks`: the request hook stamps the
//! start time and logs the method, the response hook logs status and duration
//! and, when a stats sink is attached, fires a `RequestEvent` for it.

use std::time::Instant;

use reqwest::{Method, StatusCode};

use crate::load::stats::{RequestEvent, SharedStats};

/// Hooks attached to an `HttpClient`.
#[derive(Debug, Clone, Default)]
pub struct RequestHooks {
    stats: Option<SharedStats>,
}

/// State carried from the request hook to the response hook.
#[derive(Debug)]
pub struct RequestStarted {
    method: Method,
    name: String,
    start_time: Instant,
}

impl RequestHooks {
    /// Hooks that only log.
    pub fn logging() -> Self {
        Self { stats: None }
    }

    /// Hooks that log and report every request to `stats`.
    pub fn with_stats(stats: SharedStats) -> Self {
        Self { stats: Some(stats) }
    }

    /// Called right before the request is sent.
    ///
    /// `route` names the request group (e.g. `/api/v1/users/{user_id}`); without
    /// it the concrete path is used.
    pub fn on_request(&self, method: &Method, path: &str, route: Option<&str>) -> RequestStarted {
        tracing::debug!(%method, path, "REQUEST");

        RequestStarted {
            method: method.clone(),
            name: format!("{} {}", method, route.unwrap_or(path)),
            start_time: Instant::now(),
        }
    }

    /// Called once the response body has been read.
    ///
    /// A non-2xx status counts as a failure.
    pub fn on_response(
        &self,
        started: RequestStarted,
        status: StatusCode,
        response_length: usize,
        status_error: Option<&reqwest::Error>,
    ) {
        let response_time_ms = started.start_time.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(
            method = %started.method,
            %status,
            response_time_ms,
            "RESPONSE"
        );

        self.fire(
            started.name,
            response_time_ms,
            response_length,
            status_error.map(ToString::to_string),
        );
    }

    /// Called when no response was received (connect error, timeout, broken body).
    pub fn on_error(&self, started: RequestStarted, error: &reqwest::Error) {
        let response_time_ms = started.start_time.elapsed().as_secs_f64() * 1000.0;
        tracing::warn!(method = %started.method, name = %started.name, %error, "request failed");

        self.fire(started.name, response_time_ms, 0, Some(error.to_string()));
    }

    fn fire(
        &self,
        name: String,
        response_time_ms: f64,
        response_length: usize,
        exception: Option<String>,
    ) {
        if let Some(stats) = &self.stats {
            stats.fire(RequestEvent {
                request_type: "HTTP",
                name,
                response_time_ms,
                response_length,
                exception,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::stats::RequestStats;

    #[test]
    fn route_overrides_path_in_request_name() {
        let stats = RequestStats::new().unwrap();
        let hooks = RequestHooks::with_stats(stats.clone());

        let started = hooks.on_request(&Method::GET, "/api/v1/users/42", Some("/api/v1/users/{user_id}"));
        hooks.on_response(started, StatusCode::OK, 128, None);

        let entry = stats.get("GET /api/v1/users/{user_id}").unwrap();
        assert_eq!(entry.count, 1);
        assert_eq!(entry.failures, 0);
        assert_eq!(entry.total_content_length, 128);
    }

    #[test]
    fn path_is_used_without_route() {
        let stats = RequestStats::new().unwrap();
        let hooks = RequestHooks::with_stats(stats.clone());

        let started = hooks.on_request(&Method::POST, "/api/v1/users", None);
        hooks.on_response(started, StatusCode::OK, 0, None);

        assert!(stats.get("POST /api/v1/users").is_some());
    }

    #[test]
    fn logging_hooks_record_nothing() {
        let hooks = RequestHooks::logging();
        let started = hooks.on_request(&Method::GET, "/health", None);
        hooks.on_response(started, StatusCode::OK, 2, None);
    }
}
