//! Server configuration and serve loop.

use axum::Router;
use tokio::net::TcpListener;

/// Where the server binds.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Reads `ATRIUM_HOST` / `ATRIUM_PORT`, falling back to the
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host =
            std::env::var("ATRIUM_HOST").unwrap_or(defaults.host);
        let port = std::env::var("ATRIUM_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.port);
        Self { host, port }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Binds the listener and runs the router until the process ends.
pub async fn serve(config: ServerConfig, router: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "Atrium server listening");
    axum::serve(listener, router).await?;
    Ok(())
}
