use clap::Parser;

/// Server configuration parsed from command line arguments and environment
/// variables.
#[derive(Parser, Debug)]
#[command(name = "medindex-server")]
#[command(author, version, about = "REST API server for the medindex medicine catalog")]
pub struct ServerConfig {
    /// PostgreSQL database connection URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Server host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// API key that bypasses the keyless rate limit
    #[arg(long, env = "API_KEY")]
    pub api_key: Option<String>,

    /// Comma-separated origins exempt from the access policy
    /// (first-party frontends). Empty means no exemptions.
    #[arg(long, env = "ALLOWED_ORIGINS", default_value = "")]
    pub allowed_origins: String,

    /// Comma-separated CORS origins, or "*" to allow any origin
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Requests per minute granted to keyless clients
    #[arg(long, env = "RATE_LIMIT_PER_MINUTE", default_value = "3")]
    pub rate_limit_per_minute: u32,

    /// Burst size for the keyless rate limit
    #[arg(long, env = "RATE_LIMIT_BURST", default_value = "3")]
    pub rate_limit_burst: u32,

    /// Per-request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,

    /// Database connection pool size
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value = "10")]
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// The policy-exempt origins as a list.
    pub fn allowed_origins_list(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
