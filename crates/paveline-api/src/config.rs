use std::env;

/// Default port of the estimate backend
pub const DEFAULT_PORT: u16 = 8001;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, cors_origin: "http://localhost:3000".to_string() }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = match env::var("PAVELINE_PORT") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid PAVELINE_PORT value '{}', using {}", value, defaults.port);
                defaults.port
            }),
            Err(_) => defaults.port,
        };

        let cors_origin = env::var("PAVELINE_CORS_ORIGIN").unwrap_or(defaults.cors_origin);

        Self { port, cors_origin }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
