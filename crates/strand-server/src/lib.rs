//! Strand HTTP service
//!
//! Stores strings with their derived properties and serves them back through
//! explicit property filters or free-text queries.
//!
//! # Routes
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | POST | `/strings` | analyze and store a string |
//! | GET | `/strings` | list stored strings, filtered by query params |
//! | GET | `/strings/filter-by-natural-language?query=` | list by free-text query |
//! | GET | `/strings/{value}` | fetch one stored string |
//! | DELETE | `/strings/{value}` | remove one stored string |
//! | GET | `/health` | liveness |

pub mod config;
pub mod error;
pub mod handlers;
pub mod params;
pub mod shutdown;
pub mod state;
pub mod tracing;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Args, ServerConfig, StorageConfig};
pub use error::{ApiError, Error, Result};
pub use state::AppState;

/// Build the application router over `state`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/strings",
            get(handlers::list_strings).post(handlers::create_string),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(handlers::filter_by_natural_language),
        )
        .route(
            "/strings/:value",
            get(handlers::get_string).delete(handlers::delete_string),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
