/// Upstream feed configuration: endpoint URL plus the static bearer
/// credential passed through on every fetch.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Full URL of the utilization feed endpoint.
    pub url: String,
    /// Bearer token sent in the `Authorization` header.
    pub token: String,
}

impl FeedConfig {
    /// Load from `FEED_URL` / `FEED_TOKEN`.
    ///
    /// Both are required; a missing value fails fast at startup.
    pub fn from_env() -> Self {
        let url = std::env::var("FEED_URL").expect("FEED_URL must be set");
        let token = std::env::var("FEED_TOKEN").expect("FEED_TOKEN must be set");
        Self { url, token }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the feed settings have sensible defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upstream feed endpoint configuration.
    pub feed: FeedConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `FEED_URL`             | -- (required)              |
    /// | `FEED_TOKEN`           | -- (required)              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let feed = FeedConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            feed,
        }
    }
}
