//! API configuration.

use std::env;

use tracing_subscriber::EnvFilter;

use common::ServiceConfig;

/// Environment variable prefix for the API binary.
pub const ENV_PREFIX: &str = "USER_API";

/// Service name reported in logs and health checks.
pub const SERVICE_NAME: &str = "user-api";

/// Log filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind address and logging settings
    pub server: ServiceConfig,
}

impl ApiConfig {
    /// Load configuration from `USER_API_HOST` / `USER_API_PORT` / `RUST_LOG`.
    pub fn from_env() -> Self {
        let mut server = ServiceConfig::from_env(ENV_PREFIX);
        if env::var("RUST_LOG").is_err() {
            server.log_level = DEFAULT_LOG_FILTER.to_string();
        }
        Self { server }
    }

    /// Override the bind address (CLI flags take precedence over the environment).
    pub fn with_addr(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    /// Tracing filter built from the configured log level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.server.log_level).unwrap_or_else(|e| {
            eprintln!(
                "Invalid log filter {:?} ({}), using {:?}",
                self.server.log_level, e, DEFAULT_LOG_FILTER
            );
            EnvFilter::new(DEFAULT_LOG_FILTER)
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                log_level: DEFAULT_LOG_FILTER.to_string(),
                ..ServiceConfig::default()
            },
        }
    }
}
