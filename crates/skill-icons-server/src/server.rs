//! Server lifecycle: bind, serve, shut down.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::logging::targets;
use crate::routes::{self, AppState};

/// Load the catalogue, bind the configured address and serve until Ctrl-C
/// or SIGTERM.
pub async fn run(config: ServerConfig) -> Result<()> {
    let service = Arc::new(config.load_service()?);
    tracing::info!(
        target: targets::SERVER,
        icons = service.list_canonical_names().len(),
        keys = service.catalogue().len(),
        "Icon catalogue ready"
    );

    let state = AppState::new(service, &config)?;
    let listener = TcpListener::bind(config.socket_addr()?).await?;
    serve(listener, state, shutdown_signal()).await
}

/// Serve requests on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    tracing::info!(target: targets::SERVER, addr = %local_addr, "Server listening");

    axum::serve(listener, routes::router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!(target: targets::SERVER, "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(target: targets::SERVER, "Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(target: targets::SERVER, "Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!(target: targets::SERVER, "Shutdown signal received");
}
