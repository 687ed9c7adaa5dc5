use once_cell::sync::Lazy;
use regex::Regex;

use crate::LoginForm;

// Same shape browsers accept for <input type="email">.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Field-level errors for an email input
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email is required")]
    Required,
    #[error("Enter a valid email address")]
    InvalidFormat,
}

/// Check an email field: empty input is `Required`, anything else must look
/// like an address. Whitespace is not trimmed.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Required);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(EmailError::InvalidFormat);
    }
    Ok(())
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), EmailError> {
        validate_email(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_email_is_required() {
        assert_eq!(validate_email(""), Err(EmailError::Required));
    }

    #[test]
    fn test_malformed_emails() {
        for email in [
            "not-an-email",
            "user@",
            "@example.com",
            "user example@example.com",
            "user@-example.com",
            "user@example..com",
            " ",
        ] {
            assert_eq!(validate_email(email), Err(EmailError::InvalidFormat), "{email:?}");
        }
    }

    #[test]
    fn test_valid_emails() {
        for email in [
            "user@example.com",
            "first.last+tag@sub.example.org",
            "o'brien@example.ie",
            "user@localhost",
        ] {
            assert_eq!(validate_email(email), Ok(()), "{email:?}");
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_rejected() {
        assert_eq!(validate_email(" user@example.com"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_form_validation_uses_email_field() {
        assert_eq!(LoginForm::default().validate(), Err(EmailError::Required));
        assert_eq!(LoginForm::new("user@example.com").validate(), Ok(()));
    }
}
