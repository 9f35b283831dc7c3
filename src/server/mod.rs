//! JSON HTTP service around the page analyzer

pub mod handlers;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;

use crate::config::ServerConfig;
use std::error::Error;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// HTTP API server
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Serve until Ctrl-C
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        let addr: SocketAddr = self.config.listen_addr.parse()?;
        let app = create_router(self.state, self.config.cors_enabled);

        let listener = TcpListener::bind(&addr).await?;
        ::log::info!("Link-Scope API is running on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                ::log::info!("HTTP server shutting down");
            })
            .await?;

        Ok(())
    }
}
