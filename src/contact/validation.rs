use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Loose shape check, not RFC 5322.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Validation failures. `Display` is the message shown to the visitor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// The three required fields of the contact form, already trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field validity, used to flag the offending inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidity {
    pub name: bool,
    pub email: bool,
    pub message: bool,
}

impl FieldValidity {
    pub fn all_valid(&self) -> bool {
        self.name && self.email && self.message
    }
}

impl ContactFields {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validity(&self) -> FieldValidity {
        FieldValidity {
            name: !self.name.is_empty(),
            email: !self.email.is_empty() && is_valid_email(&self.email),
            message: !self.message.is_empty(),
        }
    }

    /// Checks run in order and stop at the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last+tag@sub.example.co.uk"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane @example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn loose_shapes_are_kept_as_is() {
        // Accepted even though a strict parser would reject them.
        assert!(is_valid_email("a@b..c"));
        assert!(is_valid_email("jane@example.com."));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let fields = ContactFields::new("   ", "jane@example.com", "hi");
        assert_eq!(fields.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn missing_fields_reported_before_bad_email() {
        let fields = ContactFields::new("Jane", "not-an-email", "");
        assert_eq!(fields.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn invalid_email_reported() {
        let fields = ContactFields::new("Jane", "not-an-email", "Hello");
        assert_eq!(fields.validate(), Err(ValidationError::InvalidEmail));
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn values_are_trimmed() {
        let fields = ContactFields::new("  Jane ", " jane@example.com\n", "\tHello ");
        assert_eq!(fields.email, "jane@example.com");
        assert_eq!(fields.validate(), Ok(()));
        assert!(fields.validity().all_valid());
    }

    #[test]
    fn validity_flags_each_field() {
        let fields = ContactFields::new("", "bad", "Hello");
        assert_eq!(
            fields.validity(),
            FieldValidity {
                name: false,
                email: false,
                message: true,
            }
        );
    }
}
