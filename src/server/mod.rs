mod router;
mod state;

pub use router::{build_router, WELCOME_MESSAGE};
pub use crate::utils::error::UPSTREAM_FAILURE_MESSAGE;
pub use state::AppState;

use crate::utils::error::Result;
use tokio::net::TcpListener;
use tracing::info;

/// Serves the router on an already-bound listener until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let local = listener.local_addr()?;
    info!("Server is running on http://localhost:{}", local.port());
    info!("Now waiting for a fetch request...");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received");
}
