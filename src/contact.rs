use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::notification::NotificationKind;

pub const SUCCESS_MESSAGE: &str = "Thanks for your message! I'll get back to you soon.";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields!")]
    MissingFields,
    #[error("Please enter a valid email address!")]
    InvalidEmail,
}

impl FormError {
    pub fn kind(self) -> &'static str {
        match self {
            Self::MissingFields => "missing_fields",
            Self::InvalidEmail => "invalid_email",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn from_fields(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            message: message.unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(FormError::MissingFields);
        }

        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn outcome_notification(result: &Result<(), FormError>) -> (NotificationKind, String) {
    match result {
        Ok(()) => (NotificationKind::Success, SUCCESS_MESSAGE.to_string()),
        Err(error) => (NotificationKind::Error, error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn complete_submission_succeeds() {
        let result = submission("Ada", "ada@example.com", "hi").validate();

        assert_eq!(result, Ok(()));
        let (kind, message) = outcome_notification(&result);
        assert_eq!(kind, NotificationKind::Success);
        assert_eq!(message, SUCCESS_MESSAGE);
    }

    #[test]
    fn any_empty_field_reports_missing_fields() {
        let cases = [
            submission("", "ada@example.com", "hi"),
            submission("Ada", "", "hi"),
            submission("Ada", "ada@example.com", ""),
            submission("", "not-an-email", ""),
            ContactSubmission::from_fields(Some("Ada".to_string()), None, Some("hi".to_string())),
        ];

        for case in cases {
            let result = case.validate();
            assert_eq!(result, Err(FormError::MissingFields), "{case:?}");
            assert_eq!(outcome_notification(&result).0, NotificationKind::Error);
        }
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "ada.example.com",
            "ada@example",
            "ada@",
            "@example.com",
            "ada lovelace@example.com",
            "ada@exa mple.com",
            "ada@@example.com",
            "ada@example.",
        ] {
            let result = submission("Ada", email, "hi").validate();
            assert_eq!(result, Err(FormError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn permissive_shapes_are_accepted() {
        for email in ["a@b.c", "first.last+tag@sub.example.co.uk", "x@y.z.w"] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn error_messages_are_distinct() {
        assert_ne!(
            FormError::MissingFields.to_string(),
            FormError::InvalidEmail.to_string()
        );
        assert_eq!(FormError::InvalidEmail.kind(), "invalid_email");
    }
}
