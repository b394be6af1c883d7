//! Validation helpers shared by the request DTOs.

use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Code used for both absent and blank required fields.
pub const REQUIRED: &str = "required";

/// Validator hook rejecting empty or whitespace-only strings.
///
/// Paired with `#[validate(required)]` so that `null`, a missing key and
/// `"   "` all produce the same "is required" message.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(REQUIRED));
    }
    Ok(())
}

/// Flatten `ValidationErrors` into one human-readable line.
///
/// Fields are sorted so the message is stable: `"email is required; name is required"`.
pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| errs.first().map(|e| describe(&field.to_string(), e)))
        .collect();
    parts.sort();
    parts.join("; ")
}

fn describe(field: &str, err: &ValidationError) -> String {
    if err.code == REQUIRED {
        return format!("{field} is required");
    }
    match &err.message {
        Some(msg) => format!("{field} {msg}"),
        None => format!("{field} is invalid"),
    }
}

/// Convert validator output into the domain error.
pub fn to_core_error(errors: &ValidationErrors) -> CoreError {
    CoreError::Validation(format_errors(errors))
}

/// Require a value that the DTO layer cannot express as `required`
/// (e.g. a path-derived field). Blank strings count as missing.
pub fn require_text<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn blank_is_rejected() {
        assert!(not_blank("  \t").is_err());
        assert!(not_blank("Physics").is_ok());
    }

    #[test]
    fn messages_are_sorted_and_joined() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new(REQUIRED));
        errors.add("email", ValidationError::new(REQUIRED));
        assert_eq!(format_errors(&errors), "email is required; name is required");
    }

    #[test]
    fn custom_message_is_appended_to_field() {
        let mut errors = ValidationErrors::new();
        let mut err = ValidationError::new("invalid_choice");
        err.message = Some(Cow::Borrowed("must be one of: a, b"));
        errors.add("category", err);
        assert_eq!(format_errors(&errors), "category must be one of: a, b");
    }

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("term", Some(" x ")).unwrap(), "x");
        assert_matches!(
            require_text("term", Some("  ")),
            Err(CoreError::Validation(msg)) if msg == "term is required"
        );
        assert_matches!(require_text("term", None), Err(CoreError::Validation(_)));
    }
}
