use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Build the asset router: bundle files first, entry document for everything else.
pub fn router(config: &ServerConfig) -> Result<Router, ServerError> {
    let entry = config.entry_path();
    if !entry.is_file() {
        return Err(ServerError::MissingEntryDocument(entry));
    }

    let assets = ServeDir::new(&config.root).fallback(ServeFile::new(entry));
    Ok(Router::new()
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http()))
}

/// Bind on all interfaces and serve until ctrl-c.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let app = router(&config)?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(root = %config.root.display(), "server started on port {}", config.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
