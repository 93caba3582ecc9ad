//! Strand server - Main Entry Point
//!
//! Usage:
//!     strand-server --port 3000
//!     strand-server --address 127.0.0.1:3000 --db-file strings.db
//!     strand-server --in-memory

use clap::Parser;
use strand_server::shutdown::shutdown_signal;
use strand_server::tracing::prefix;
use strand_server::{router, AppState, Args, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_args(Args::parse())?;

    strand_server::tracing::init_with_filter(&config.log_level);

    info!("{} Initializing Strand server", prefix::OPEN);
    info!("  Version: {}", env!("CARGO_PKG_VERSION"));

    let state = AppState::open(&config.storage)?;
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    info!("{} Listening on {}", prefix::OPEN, listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{} Server shutdown complete", prefix::CLOSE);
    Ok(())
}
