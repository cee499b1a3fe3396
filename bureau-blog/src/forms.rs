/// Form objects for the blog

use serde::Deserialize;
use validator::Validate;

/// Form for creating or editing a post
///
/// The title must be 4-25 characters (which also makes it non-empty);
/// the text is unconstrained. There is no date field: the server stamps
/// the date on every save.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveForm {
    /// Post title
    #[validate(length(min = 4, max = 25, message = "title must be 4-25 characters"))]
    pub title: String,

    /// Post body
    #[serde(default)]
    pub text: String,
}
