/// Form objects for the tracker
///
/// Each form is a `Deserialize + Validate` struct bound from an HTML
/// form body. Validation failures are flattened with
/// [`bureau_shared::forms::field_errors`] and redisplayed by the
/// handler; nothing is persisted on failure.
///
/// The project form's inline client fields are optional: a blank input
/// deserializes to `None` (skipping its validator), while a non-blank
/// input must meet the client rules.

use bureau_shared::forms::empty_string_as_none;
use serde::Deserialize;
use validator::Validate;

/// Form for creating a client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClientCreateForm {
    /// Client name
    #[validate(length(min = 4, max = 25, message = "name must be 4-25 characters"))]
    pub name: String,

    /// Client department
    #[validate(length(min = 6, max = 35, message = "department must be 6-35 characters"))]
    pub department: String,
}

/// Form for creating a project, optionally with an inline new client
///
/// The dropdown's sentinel value `0` means "no client"; it is translated
/// to `None` before the insert, never persisted as a real reference.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProjectCreateForm {
    /// Project title
    #[validate(length(min = 4, max = 25, message = "title must be 4-25 characters"))]
    pub title: String,

    /// Project description
    #[validate(length(min = 6, max = 35, message = "description must be 6-35 characters"))]
    pub description: String,

    /// Inline new-client name (blank = not provided)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(min = 4, max = 25, message = "name must be 4-25 characters"))]
    pub name: Option<String>,

    /// Inline new-client department (blank = not provided)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(min = 6, max = 35, message = "department must be 6-35 characters"))]
    pub department: Option<String>,

    /// Selected existing client id; `0` is the "no client" sentinel
    #[serde(default)]
    pub client_id: i64,
}

impl ProjectCreateForm {
    /// Whether either inline client field was filled in
    pub fn wants_inline_client(&self) -> bool {
        self.name.is_some() || self.department.is_some()
    }
}

/// Form for editing or deleting a client
///
/// The same form serves both actions: a submission carrying the `delete`
/// marker deletes the row, anything else is a full-field update.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientEditForm {
    /// Id of the row to edit or delete
    pub id: i64,

    /// Replacement name
    #[serde(default)]
    pub name: String,

    /// Replacement department
    #[serde(default)]
    pub department: String,

    /// Present when the delete button was used
    #[serde(default)]
    pub delete: Option<String>,
}

/// Form for editing or deleting a project
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEditForm {
    /// Id of the row to edit or delete
    pub id: i64,

    /// Replacement title
    #[serde(default)]
    pub title: String,

    /// Replacement description
    #[serde(default)]
    pub description: String,

    /// Replacement client id; `0` is the "no client" sentinel
    #[serde(default)]
    pub client_id: i64,

    /// Present when the delete button was used
    #[serde(default)]
    pub delete: Option<String>,
}

/// Login form
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    /// Username
    #[serde(default)]
    pub username: String,

    /// Password
    #[serde(default)]
    pub password: String,
}

/// Registration form
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterForm {
    /// Desired username
    #[serde(default)]
    pub username: String,

    /// Email address (optional)
    #[serde(default)]
    pub email: String,

    /// Password
    #[serde(default)]
    pub password: String,

    /// Password confirmation
    #[serde(default)]
    pub password2: String,
}
