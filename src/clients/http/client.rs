//! Base HTTP client shared by all gateway resource clients.

use bytes::Bytes;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::hooks::RequestHooks;
use crate::config::HttpClientConfig;
use crate::error::ClientError;
use crate::load::stats::SharedStats;

/// Buffered HTTP response.
///
/// The body is read eagerly so the response hook can report its length; a
/// non-2xx status is kept as the `reqwest` error it produced and surfaces when
/// the body is parsed.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Bytes,
    status_error: Option<reqwest::Error>,
}

impl HttpResponse {
    /// Fail with the status error, if any.
    pub fn error_for_status(self) -> Result<Self, ClientError> {
        match self.status_error {
            Some(err) => Err(ClientError::Http(err)),
            None => Ok(self),
        }
    }

    /// Check the status, then decode the body as JSON.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        let response = self.error_for_status()?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Thin wrapper over `reqwest::Client` bound to a base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
    hooks: RequestHooks,
}

impl HttpClient {
    pub fn new(client: reqwest::Client, base_url: Url, hooks: RequestHooks) -> Self {
        Self {
            client,
            base_url,
            hooks,
        }
    }

    /// Base URL without the trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// `prefix` followed by `id` as one percent-encoded path segment.
    pub fn id_path(&self, prefix: &str, id: &str) -> String {
        let mut url = self.base_url.clone();
        url.set_path(prefix);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url.path().to_string()
    }

    /// Perform a GET request.
    pub async fn get(&self, path: &str, route: Option<&str>) -> Result<HttpResponse, ClientError> {
        let request = self.client.get(self.url(path));
        self.send(request, Method::GET, path, route).await
    }

    /// Perform a GET request with query params (e.g. `?userId=...`).
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        route: Option<&str>,
    ) -> Result<HttpResponse, ClientError> {
        let request = self.client.get(self.url(path)).query(query);
        self.send(request, Method::GET, path, route).await
    }

    /// Perform a POST request with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        json: &B,
        route: Option<&str>,
    ) -> Result<HttpResponse, ClientError> {
        let request = self.client.post(self.url(path)).json(json);
        self.send(request, Method::POST, path, route).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    async fn send(
        &self,
        request: RequestBuilder,
        method: Method,
        path: &str,
        route: Option<&str>,
    ) -> Result<HttpResponse, ClientError> {
        let started = self.hooks.on_request(&method, path, route);

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                self.hooks.on_error(started, &err);
                return Err(err.into());
            }
        };

        let status = response.status();
        let status_error = response.error_for_status_ref().err();

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => {
                self.hooks.on_error(started, &err);
                return Err(err.into());
            }
        };

        self.hooks
            .on_response(started, status, body.len(), status_error.as_ref());

        Ok(HttpResponse {
            status,
            body,
            status_error,
        })
    }
}

/// Create an `HttpClient` for the HTTP gateway.
pub fn build_gateway_http_client(config: &HttpClientConfig) -> Result<HttpClient, ClientError> {
    let client = reqwest::Client::builder().timeout(config.timeout()?).build()?;
    Ok(HttpClient::new(client, config.url.clone(), RequestHooks::logging()))
}

/// Create an `HttpClient` for load runs: every request is reported to `stats`.
pub fn build_gateway_load_http_client(
    config: &HttpClientConfig,
    stats: SharedStats,
) -> Result<HttpClient, ClientError> {
    let client = reqwest::Client::builder().timeout(config.timeout()?).build()?;
    Ok(HttpClient::new(
        client,
        config.url.clone(),
        RequestHooks::with_stats(stats),
    ))
}
