/// Shared test harness for the tracker integration tests
///
/// Each test gets its own router over a fresh in-memory SQLite database
/// with the schema applied. The pool is capped at one connection so
/// every statement sees the same in-memory database.

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use bureau_tracker::{
    app::{build_router, AppState},
    config::{Config, DatabaseConfig, ServerConfig, SessionConfig},
    MIGRATOR,
};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::Service as _;

/// Session secret used by every test context
pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes-long";

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
            session: SessionConfig {
                secret: TEST_SECRET.to_string(),
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

/// GET a path with a session cookie attached
pub async fn get_with_cookie(
    ctx: &TestContext,
    uri: &str,
    cookie: &str,
) -> Response<axum::body::Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
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

/// POST a form-encoded body with a session cookie attached
pub async fn post_form_with_cookie(
    ctx: &TestContext,
    uri: &str,
    body: &str,
    cookie: &str,
) -> Response<axum::body::Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, cookie)
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

/// Extracts the `session=...` cookie pair from a response, if any
pub fn session_cookie(response: &Response<axum::body::Body>) -> Option<String> {
    let set_cookie = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    let pair = set_cookie.split(';').next()?.trim();
    pair.starts_with("session=").then(|| pair.to_string())
}

/// Registers a user and logs in, returning the session cookie pair
pub async fn register_and_login(
    ctx: &TestContext,
    username: &str,
    password: &str,
) -> String {
    let body = format!(
        "username={}&email=&password={}&password2={}",
        username, password, password
    );
    post_form(ctx, "/register", &body).await;

    let body = format!("username={}&password={}", username, password);
    let response = post_form(ctx, "/login", &body).await;

    session_cookie(&response).expect("login should set a session cookie")
}
