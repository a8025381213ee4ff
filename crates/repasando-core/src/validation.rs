//! Validation utilities.

use crate::FieldErrors;
use validator::ValidationErrors;

/// Flattens `validator` errors into one message per field.
///
/// Keys use the camelCase JSON spelling of the field. A blank field reports
/// its [`rules::not_blank`] message; otherwise the first reported rule wins.
#[must_use]
pub fn first_field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            errs.iter()
                .find(|err| err.code == rules::NOT_BLANK)
                .or_else(|| errs.first())
                .map(|err| {
                    let message = err
                        .message
                        .as_ref()
                        .map_or_else(|| err.code.to_string(), ToString::to_string);
                    (to_camel_case(field), message)
                })
        })
        .collect()
}

/// Converts a snake_case field name to camelCase.
#[must_use]
pub fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Error code reported by [`not_blank`].
    pub const NOT_BLANK: &str = "not_blank";

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new(NOT_BLANK));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct SignupForm {
        #[validate(custom(function = "not_blank", message = "last name is required"))]
        last_name: String,
        #[validate(
            custom(function = "not_blank", message = "email is required"),
            email(message = "enter a valid email format")
        )]
        email: String,
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("name"), "name");
        assert_eq!(to_camel_case("last_name"), "lastName");
        assert_eq!(to_camel_case("user_name"), "userName");
        assert_eq!(to_camel_case("_private"), "private");
    }

    #[test]
    fn test_first_field_errors_uses_json_names() {
        let form = SignupForm {
            last_name: " ".to_string(),
            email: "ok@example.com".to_string(),
        };
        let errors = first_field_errors(&form.validate().unwrap_err());

        assert_eq!(errors.len(), 1);
        assert_eq!(errors["lastName"], "last name is required");
    }

    #[test]
    fn test_blank_rule_takes_precedence() {
        let form = SignupForm {
            last_name: "Diaz".to_string(),
            email: String::new(),
        };
        let errors = first_field_errors(&form.validate().unwrap_err());

        assert_eq!(errors["email"], "email is required");
    }

    #[test]
    fn test_format_rule_reported_when_not_blank() {
        let form = SignupForm {
            last_name: "Diaz".to_string(),
            email: "not-an-email".to_string(),
        };
        let errors = first_field_errors(&form.validate().unwrap_err());

        assert_eq!(errors.len(), 1);
        assert_eq!(errors["email"], "enter a valid email format");
    }
}
