/// Shared test harness for the blog integration tests
///
/// Each test gets its own router over a fresh in-memory SQLite database
/// with the document table applied. The pool is capped at one
/// connection so every statement sees the same in-memory database.

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use bureau_blog::{
    app::{build_router, AppState},
    config::{Config, DatabaseConfig, ServerConfig},
    MIGRATOR,
};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::Service as _;

pub struct TestContext {
    pub app: Router,
    pub db: SqlitePool,
}

impl TestContext {
    pub async fn new() -> anyhow::Result<Self> {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        MIGRATOR.run(&db).await?;

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        };

        let app = build_router(AppState::new(db.clone(), config));

        Ok(Self { app, db })
    }
}

/// Sends a request through the router
pub async fn send(ctx: &TestContext, request: Request<Body>) -> Response<axum::body::Body> {
    ctx.app.clone().call(request).await.unwrap()
}

/// GET a path
pub async fn get(ctx: &TestContext, uri: &str) -> Response<axum::body::Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(ctx, request).await
}

/// POST a form-encoded body
pub async fn post_form(ctx: &TestContext, uri: &str, body: &str) -> Response<axum::body::Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(ctx, request).await
}

/// Reads a response body to a string
pub async fn body_string(response: Response<axum::body::Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8_lossy(&bytes).to_string()
}
