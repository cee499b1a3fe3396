/// Application state and router builder
///
/// # Router layout
///
/// ```text
/// /
/// ├── GET  /                 # dashboard (public)
/// ├── GET/POST /clients      # list + create clients (public)
/// ├── GET/POST /projects     # list + create projects (public)
/// ├── GET/POST /login        # login form (public)
/// ├── GET  /logout           # clear session (public)
/// ├── GET/POST /register     # registration form (public)
/// ├── GET/POST /edit_client  # edit/delete clients (session required)
/// └── GET/POST /edit_project # edit/delete projects (session required)
/// ```
///
/// The two edit routes sit behind a session-checking middleware layer;
/// everything else is public. Requests are traced with tower-http's
/// `TraceLayer`.

use crate::{config::Config, error::AppError, routes};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    routing::get,
    Router,
};
use bureau_shared::auth::session;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via axum's `State` extractor; the
/// pool and config are cheap to clone (pool is internally shared,
/// config is behind an `Arc`).
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

    /// Gets the session-signing secret
    pub fn session_secret(&self) -> &str {
        &self.config.session.secret
    }
}

/// The authenticated user's id, injected into request extensions by the
/// session middleware
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub i64);

/// Builds the complete router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(routes::dashboard::index))
        .route(
            "/clients",
            get(routes::clients::clients_page).post(routes::clients::create_client),
        )
        .route(
            "/projects",
            get(routes::projects::projects_page).post(routes::projects::create_project),
        )
        .route(
            "/login",
            get(routes::auth::login_page).post(routes::auth::login),
        )
        .route("/logout", get(routes::auth::logout))
        .route(
            "/register",
            get(routes::auth::register_page).post(routes::auth::register),
        );

    // Edit/delete pages require an authenticated session
    let protected_routes = Router::new()
        .route(
            "/edit_client",
            get(routes::edit::edit_client_page).post(routes::edit::edit_client),
        )
        .route(
            "/edit_project",
            get(routes::edit::edit_project_page).post(routes::edit::edit_project),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            session_auth_layer,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Session authentication middleware
///
/// Validates the session cookie and injects [`CurrentUser`] into request
/// extensions; requests without a valid session get the 401 page.
async fn session_auth_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = session::user_id_from_headers(req.headers(), state.session_secret())
        .ok_or(AppError::Unauthorized)?;

    req.extensions_mut().insert(CurrentUser(user_id));

    Ok(next.run(req).await)
}

/// Fallback for unknown paths
async fn not_found() -> AppError {
    AppError::NotFound
}
