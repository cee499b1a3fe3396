/// Login, logout, and registration
///
/// The login flow reports distinct "Invalid username" and "Invalid
/// password" messages. That distinction lets a visitor probe which
/// usernames exist; it is preserved deliberately (see DESIGN.md) rather
/// than collapsed into a generic message.

use crate::{
    app::AppState,
    error::AppResult,
    forms::{LoginForm, RegisterForm},
    models::user::{CreateUser, User},
};
use askama::Template;
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use bureau_shared::auth::{password, session};

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: Option<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
struct RegisterTemplate {
    error: Option<String>,
    username: String,
    email: String,
}

fn is_logged_in(state: &AppState, headers: &HeaderMap) -> bool {
    session::user_id_from_headers(headers, state.session_secret()).is_some()
}

fn login_error(message: &str) -> AppResult<Response> {
    let template = LoginTemplate {
        error: Some(message.to_string()),
    };
    Ok(Html(template.render()?).into_response())
}

/// Login form page
pub async fn login_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Response> {
    if is_logged_in(&state, &headers) {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(Html(LoginTemplate { error: None }.render()?).into_response())
}

/// Login handler
///
/// On success the session cookie is set and the visitor lands on the
/// dashboard; on failure the form is redisplayed with an inline message
/// and no session is established.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    if is_logged_in(&state, &headers) {
        return Ok(Redirect::to("/").into_response());
    }

    let Some(user) = User::find_by_username(&state.db, &form.username).await? else {
        return login_error("Invalid username");
    };

    if !password::verify_password(&form.password, &user.pw_hash)? {
        return login_error("Invalid password");
    }

    let claims = session::Claims::new(user.user_id);
    let token = session::create_token(&claims, state.session_secret())?;

    Ok((
        [(header::SET_COOKIE, session::session_cookie(&token))],
        Redirect::to("/"),
    )
        .into_response())
}

/// Logout handler: clears the session cookie
pub async fn logout() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, session::clear_cookie())],
        Redirect::to("/"),
    )
}

/// Registration form page
pub async fn register_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Response> {
    if is_logged_in(&state, &headers) {
        return Ok(Redirect::to("/").into_response());
    }

    let template = RegisterTemplate {
        error: None,
        username: String::new(),
        email: String::new(),
    };

    Ok(Html(template.render()?).into_response())
}

/// Registration handler
///
/// Checks run in order: username present, password present, passwords
/// match, username free. The first failure is reported and nothing is
/// stored. On success the password is hashed and the visitor is sent to
/// the login page.
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<RegisterForm>,
) -> AppResult<Response> {
    if is_logged_in(&state, &headers) {
        return Ok(Redirect::to("/").into_response());
    }

    let error = if form.username.is_empty() {
        Some("Please enter a username")
    } else if form.password.is_empty() {
        Some("Please enter a password")
    } else if form.password != form.password2 {
        Some("Passwords must match")
    } else if User::find_by_username(&state.db, &form.username)
        .await?
        .is_some()
    {
        Some("Username already taken")
    } else {
        None
    };

    if let Some(message) = error {
        let template = RegisterTemplate {
            error: Some(message.to_string()),
            username: form.username,
            email: form.email,
        };
        return Ok(Html(template.render()?).into_response());
    }

    let pw_hash = password::hash_password(&form.password)?;

    User::create(
        &state.db,
        CreateUser {
            username: form.username,
            email: form.email,
            pw_hash,
        },
    )
    .await?;

    Ok(Redirect::to("/login").into_response())
}
