/// Database models for the tracker
///
/// Each model is a `sqlx::FromRow` struct with associated functions for
/// the statements the routes need. Row decoding is typed per query
/// shape; list queries that join get their own row struct.
///
/// # Models
///
/// - `client`: clients (name, department, timestamps)
/// - `project`: projects with an optional client reference
/// - `user`: user accounts for the login flow

pub mod client;
pub mod project;
pub mod user;
