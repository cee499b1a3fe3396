/// Authentication utilities for the Bureau applications
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`session`]: signed session tokens and the cookie they ride in
///
/// # Example
///
/// ```no_run
/// use bureau_shared::auth::password::{hash_password, verify_password};
/// use bureau_shared::auth::session::{create_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// let token = create_token(&Claims::new(42), "secret-key-at-least-32-bytes-long!!")?;
/// # Ok(())
/// # }
/// ```

pub mod password;
pub mod session;
