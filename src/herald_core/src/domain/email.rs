use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email address must not be empty")]
    Empty,
    #[error("Invalid email address")]
    Invalid,
}

/// A syntactically valid email address.
///
/// The raw value is kept behind a [`Secret`] so that addresses never end up in
/// logs through `Debug`.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        Self::try_from(Secret::new(raw.to_owned()))
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = EmailError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let raw = value.expose_secret().trim();
        if raw.is_empty() {
            return Err(EmailError::Empty);
        }
        if !EMAIL_PATTERN.is_match(raw) {
            return Err(EmailError::Invalid);
        }
        Ok(Self(Secret::new(raw.to_owned())))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use fake::faker::internet::en::SafeEmail;
    use quickcheck_macros::quickcheck;

    #[test]
    fn empty_string_is_rejected() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
        assert_eq!(Email::parse("   "), Err(EmailError::Empty));
    }

    #[test]
    fn missing_at_symbol_is_rejected() {
        assert_eq!(Email::parse("userexample.com"), Err(EmailError::Invalid));
    }

    #[test]
    fn missing_subject_is_rejected() {
        assert_eq!(Email::parse("@example.com"), Err(EmailError::Invalid));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let email = Email::parse("  user@example.com ").unwrap();
        assert_eq!(email.as_ref().expose_secret(), "user@example.com");
    }

    #[test]
    fn debug_output_does_not_leak_the_address() {
        let email = Email::parse("user@example.com").unwrap();
        assert!(!format!("{email:?}").contains("user@example.com"));
    }

    #[test]
    fn generated_addresses_are_accepted() {
        for _ in 0..20 {
            let raw: String = SafeEmail().fake();
            assert!(Email::parse(&raw).is_ok(), "rejected {raw}");
        }
    }

    #[quickcheck]
    fn strings_without_at_are_rejected(raw: String) -> bool {
        raw.contains('@') || Email::parse(&raw).is_err()
    }

    #[quickcheck]
    fn equal_inputs_produce_equal_emails(local: String) -> bool {
        let local: String = local.chars().filter(char::is_ascii_alphanumeric).collect();
        if local.is_empty() {
            return true;
        }
        let raw = format!("{local}@example.com");
        Email::parse(&raw).unwrap() == Email::parse(&raw).unwrap()
    }
}
