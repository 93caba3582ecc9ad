//! Graceful shutdown for the HTTP server.

use tokio::signal;
use tracing::{info, warn};

use crate::tracing::prefix;

/// Resolves when Ctrl+C or SIGTERM (on Unix) is received.
///
/// A handler that fails to install is logged and never fires.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("{} Received Ctrl+C, shutting down", prefix::CLOSE);
        }
        _ = terminate => {
            info!("{} Received terminate signal, shutting down", prefix::CLOSE);
        }
    }
}
