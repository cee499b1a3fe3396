/// Route handlers, organized by page
///
/// - `dashboard`: the index page
/// - `clients`: client list + creation
/// - `projects`: project list + creation (with optional inline client)
/// - `edit`: session-gated edit/delete pages
/// - `auth`: login, logout, registration

pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod edit;
pub mod projects;
