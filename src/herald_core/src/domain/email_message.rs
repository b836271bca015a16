use super::email::Email;

/// A single outgoing email. Built at call time and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    recipient: Email,
    subject: String,
    body: String,
}

impl EmailMessage {
    pub fn new(recipient: Email, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            recipient,
            subject: subject.into(),
            body: body.into(),
        }
    }

    pub fn recipient(&self) -> &Email {
        &self.recipient
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
