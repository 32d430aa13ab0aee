//! Server Config

use clap::Args;

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "3000")]
    pub port: u16,

    /// Per-request timeout in seconds; an expired request aborts its
    /// in-flight database work (dropped transactions roll back)
    #[arg(long, env = "REQUEST_TIMEOUT_SECONDS", default_value_t = 30_u64)]
    pub request_timeout_seconds: u64,
}

impl ServerRuntimeConfig {
    /// Get the socket address for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
