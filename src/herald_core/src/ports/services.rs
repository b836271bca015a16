use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::email::Email;

/// The only way an email send can fail as far as callers are concerned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailSenderError {
    #[error("Email provider call failed: {0}")]
    ProviderFailure(String),
}

/// Port trait for sending email.
///
/// Implementations forward the recipient, subject and body unchanged to
/// whatever provider they wrap. They do not retry and surface the provider's
/// failure as-is.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        body: &str,
    ) -> Result<(), EmailSenderError>;
}

#[async_trait]
impl<T> EmailSender for Arc<T>
where
    T: EmailSender + ?Sized,
{
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        body: &str,
    ) -> Result<(), EmailSenderError> {
        (**self).send_email(recipient, subject, body).await
    }
}
