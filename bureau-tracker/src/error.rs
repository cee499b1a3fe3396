/// Error handling for the tracker
///
/// Handlers return `Result<T, AppError>`; the error converts into a
/// rendered HTML error page with the matching status code. Form
/// validation failures are not errors in this sense: handlers redisplay
/// the form themselves, so nothing here maps to 422.
///
/// # Example
///
/// ```ignore
/// async fn handler(State(state): State<AppState>) -> AppResult<Html<String>> {
///     let client = Client::find_by_id(&state.db, 1)
///         .await?
///         .ok_or(AppError::NotFound)?;
///     // ...
/// }
/// ```

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

/// Handler result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Unified application error type
#[derive(Debug)]
pub enum AppError {
    /// Protected route accessed without a valid session (401)
    Unauthorized,

    /// Lookup by id yielded no row (404)
    NotFound,

    /// Store, hash, session, or render failure (500)
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "Not authorized"),
            AppError::NotFound => write!(f, "Not found"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

#[derive(Template)]
#[template(path = "not_authorized.html")]
struct NotAuthorizedTemplate;

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate;

fn render_page<T: Template>(status: StatusCode, template: T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => {
                render_page(StatusCode::UNAUTHORIZED, NotAuthorizedTemplate)
            }
            AppError::NotFound => render_page(StatusCode::NOT_FOUND, NotFoundTemplate),
            AppError::Internal(msg) => {
                // Log the detail but never leak it to the client
                tracing::error!("Internal error: {}", msg);
                render_page(StatusCode::INTERNAL_SERVER_ERROR, ErrorTemplate)
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound,
            _ => AppError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Internal(format!("Template error: {}", err))
    }
}

impl From<bureau_shared::auth::password::PasswordError> for AppError {
    fn from(err: bureau_shared::auth::password::PasswordError) -> Self {
        AppError::Internal(format!("Password operation failed: {}", err))
    }
}

impl From<bureau_shared::auth::session::SessionError> for AppError {
    fn from(err: bureau_shared::auth::session::SessionError) -> Self {
        match err {
            bureau_shared::auth::session::SessionError::CreateError(msg) => {
                AppError::Internal(format!("Session signing failed: {}", msg))
            }
            // A bad or expired token on a protected route is just "not
            // logged in"
            _ => AppError::Unauthorized,
        }
    }
}
