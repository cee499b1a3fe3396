/// Application state and router builder
///
/// # Router layout
///
/// ```text
/// /
/// ├── GET  /            # post list, newest first
/// ├── GET/POST /add     # create a post
/// ├── GET/POST /edit/:id # edit a post
/// ├── GET  /delete/:id  # delete a post
/// └── GET  /view/:id    # post detail
/// ```

use crate::{config::Config, error::AppError, routes};
use axum::{routing::get, Router};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::posts::index))
        .route("/add", get(routes::posts::add_page).post(routes::posts::add))
        .route(
            "/edit/:id",
            get(routes::posts::edit_page).post(routes::posts::edit),
        )
        .route("/delete/:id", get(routes::posts::delete))
        .route("/view/:id", get(routes::posts::view))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Fallback for unknown paths
async fn not_found() -> AppError {
    AppError::NotFound
}
