//! Application configuration management.
//!
//! Settings are loaded from environment variables (and an optional `.env` file).
//! Each section is read with its own prefix using `envy::prefixed`, so the
//! variables look like `GATEWAY_HTTP_CLIENT_URL` or `LOCUST_USER_WAIT_TIME_MIN`.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

/// Virtual user settings shared by every load scenario.
///
/// # Environment Variables
///
/// - `LOCUST_USER_WAIT_TIME_MIN` (optional): minimum pause between tasks, seconds (default 1)
/// - `LOCUST_USER_WAIT_TIME_MAX` (optional): maximum pause between tasks, seconds (default 3)
#[derive(Debug, Clone, Deserialize)]
pub struct LoadUserConfig {
    #[serde(default = "default_wait_time_min")]
    pub wait_time_min: f64,

    #[serde(default = "default_wait_time_max")]
    pub wait_time_max: f64,
}

/// HTTP gateway client settings.
///
/// # Environment Variables
///
/// - `GATEWAY_HTTP_CLIENT_URL` (optional): base URL, defaults to `http://localhost:8003`
/// - `GATEWAY_HTTP_CLIENT_TIMEOUT` (optional): request timeout in seconds, defaults to 100
#[derive(Debug, Clone, Deserialize)]
pub struct HttpClientConfig {
    #[serde(default = "default_http_url")]
    pub url: Url,

    #[serde(default = "default_http_timeout")]
    pub timeout: f64,
}

impl HttpClientConfig {
    /// Base URL as a string, without the trailing slash `Url` always adds.
    pub fn client_url(&self) -> String {
        self.url.as_str().trim_end_matches('/').to_string()
    }

    /// Request timeout.
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` unless the value is a positive number of seconds
    /// a `Duration` can hold.
    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        let invalid = || ConfigError::Invalid {
            field: "GATEWAY_HTTP_CLIENT_TIMEOUT",
            value: self.timeout.to_string(),
        };
        if self.timeout.is_nan() || self.timeout <= 0.0 {
            return Err(invalid());
        }
        Duration::try_from_secs_f64(self.timeout).map_err(|_| invalid())
    }
}

/// gRPC gateway client settings.
///
/// # Environment Variables
///
/// - `GATEWAY_GRPC_CLIENT_HOST` (optional): e.g. `localhost` or `grpc-gateway.internal`
/// - `GATEWAY_GRPC_CLIENT_PORT` (optional): defaults to 9003
#[derive(Debug, Clone, Deserialize)]
pub struct GrpcClientConfig {
    #[serde(default = "default_grpc_host")]
    pub host: String,

    #[serde(default = "default_grpc_port")]
    pub port: u16,
}

impl GrpcClientConfig {
    /// Connection point as `host:port`.
    pub fn client_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where seeding results are dumped.
///
/// - `SEEDS_DUMPS_DIR` (optional): defaults to `dumps`
#[derive(Debug, Clone, Deserialize)]
pub struct SeedsConfig {
    #[serde(default = "default_dumps_dir")]
    pub dumps_dir: PathBuf,
}

/// All settings sections.
#[derive(Debug, Clone)]
pub struct Settings {
    pub locust_user: LoadUserConfig,
    pub gateway_http_client: HttpClientConfig,
    pub gateway_grpc_client: GrpcClientConfig,
    pub seeds: SeedsConfig,
}

fn default_wait_time_min() -> f64 {
    1.0
}

fn default_wait_time_max() -> f64 {
    3.0
}

fn default_http_url() -> Url {
    Url::parse("http://localhost:8003").expect("static URL is valid")
}

fn default_http_timeout() -> f64 {
    100.0
}

fn default_grpc_host() -> String {
    "localhost".to_string()
}

fn default_grpc_port() -> u16 {
    9003
}

fn default_dumps_dir() -> PathBuf {
    PathBuf::from("dumps")
}

impl Default for LoadUserConfig {
    fn default() -> Self {
        Self {
            wait_time_min: default_wait_time_min(),
            wait_time_max: default_wait_time_max(),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            url: default_http_url(),
            timeout: default_http_timeout(),
        }
    }
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            host: default_grpc_host(),
            port: default_grpc_port(),
        }
    }
}

impl Default for SeedsConfig {
    fn default() -> Self {
        Self {
            dumps_dir: default_dumps_dir(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locust_user: LoadUserConfig::default(),
            gateway_http_client: HttpClientConfig::default(),
            gateway_grpc_client: GrpcClientConfig::default(),
            seeds: SeedsConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from environment variables.
    ///
    /// A `.env` file is loaded first if it exists. Missing variables fall back
    /// to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed
    /// (e.g. `GATEWAY_GRPC_CLIENT_PORT=abc` or an invalid URL), or parses to
    /// a value out of range (see [`Settings::validate`]).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings = Self {
            locust_user: envy::prefixed("LOCUST_USER_").from_env()?,
            gateway_http_client: envy::prefixed("GATEWAY_HTTP_CLIENT_").from_env()?,
            gateway_grpc_client: envy::prefixed("GATEWAY_GRPC_CLIENT_").from_env()?,
            seeds: envy::prefixed("SEEDS_").from_env()?,
        };
        settings.validate()?;

        Ok(settings)
    }

    /// Check ranges the types cannot express: the HTTP timeout must be
    /// positive and wait times must be finite and not negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway_http_client.timeout()?;

        for (field, value) in [
            ("LOCUST_USER_WAIT_TIME_MIN", self.locust_user.wait_time_min),
            ("LOCUST_USER_WAIT_TIME_MAX", self.locust_user.wait_time_max),
        ] {
            if Duration::try_from_secs_f64(value).is_err() {
                return Err(ConfigError::Invalid {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}
