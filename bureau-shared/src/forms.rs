/// Form-validation helpers
///
/// Form objects in both applications are plain `Deserialize + Validate`
/// structs. This module holds the two pieces they share: flattening
/// `validator`'s error map into an ordered list a template can
/// redisplay, and a deserializer that turns blank submitted fields into
/// `None` so optional fields skip their validators entirely.

use serde::{Deserialize, Deserializer};
use validator::ValidationErrors;

/// A single field-level validation failure, ready for template display
#[derive(Debug, Clone)]
pub struct FieldError {
    /// Name of the field that failed
    pub field: String,

    /// Human-readable message
    pub message: String,
}

/// Flattens `ValidationErrors` into per-field messages
///
/// Field order follows the validator's internal map; each failed rule
/// produces one entry.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Validation failed".to_string()),
            })
        })
        .collect()
}

/// Deserializes an empty or whitespace-only string as `None`
///
/// HTML forms submit every input, so an untouched optional field arrives
/// as `""` rather than being absent. Mapping it to `None` makes
/// `#[validate]` on `Option` fields behave like an "optional" rule.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
