/// Signed session tokens and the cookie they ride in
///
/// A session is an HS256-signed token carrying the authenticated user's
/// id, stored client-side in an HttpOnly cookie. There is no server-side
/// session store; the signature (keyed by a server-held secret) is what
/// makes the cookie trustworthy, and the token's `exp` claim is the only
/// expiry mechanism.
///
/// # Example
///
/// ```
/// use bureau_shared::auth::session::{create_token, validate_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let secret = "test-secret-key-at-least-32-bytes-long";
///
/// let token = create_token(&Claims::new(42), secret)?;
/// let claims = validate_token(&token, secret)?;
/// assert_eq!(claims.sub, 42);
/// # Ok(())
/// # }
/// ```

use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Issuer embedded in every session token
const ISSUER: &str = "bureau";

/// Session lifetime in hours
const SESSION_HOURS: i64 = 24;

/// Error type for session token operations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Failed to sign a token
    #[error("Failed to create session token: {0}")]
    CreateError(String),

    /// Token failed signature or claim validation
    #[error("Invalid session token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Session token has expired")]
    Expired,
}

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's id
    pub sub: i64,

    /// Issuer, always "bureau"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a user, expiring [`SESSION_HOURS`] from now
    pub fn new(user_id: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(SESSION_HOURS)).timestamp(),
        }
    }
}

/// Signs a session token for the given claims
///
/// # Errors
///
/// Returns `SessionError::CreateError` if signing fails.
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, SessionError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| SessionError::CreateError(e.to_string()))
}

/// Validates a session token's signature, issuer, and expiry
///
/// # Errors
///
/// Returns `SessionError::Expired` for an expired token and
/// `SessionError::ValidationError` for any other rejection.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, SessionError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
        _ => SessionError::ValidationError(e.to_string()),
    })?;

    Ok(data.claims)
}

/// Builds the `Set-Cookie` value that establishes a session
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        SESSION_HOURS * 3600
    )
}

/// Builds the `Set-Cookie` value that clears the session
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

/// Extracts the raw session token from a request's `Cookie` header, if any
pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
    })
}

/// Resolves the authenticated user id from a request's headers
///
/// Returns `None` when no cookie is present or the token does not
/// validate; callers decide whether that means "anonymous" or 401.
pub fn user_id_from_headers(headers: &HeaderMap, secret: &str) -> Option<i64> {
    let token = token_from_headers(headers)?;
    validate_token(token, secret).ok().map(|claims| claims.sub)
}
