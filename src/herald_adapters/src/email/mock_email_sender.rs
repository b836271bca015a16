use std::sync::Arc;

use herald_core::{Email, EmailMessage, EmailSender, EmailSenderError};
use tokio::sync::Mutex;

/// In-memory [`EmailSender`] that records every call instead of sending.
///
/// A failing recipient can be configured; calls for it are still recorded
/// before the failure is returned. Recorded calls are never evicted, so a
/// long-running server should use [`MockEmailSender::non_recording`].
/// Development only: nothing is delivered.
#[derive(Debug, Clone)]
pub struct MockEmailSender {
    calls: Arc<Mutex<Vec<EmailMessage>>>,
    failing_recipient: Option<Email>,
    record: bool,
}

impl Default for MockEmailSender {
    fn default() -> Self {
        Self {
            calls: Arc::default(),
            failing_recipient: None,
            record: true,
        }
    }
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender that accepts every email and keeps nothing.
    pub fn non_recording() -> Self {
        Self {
            record: false,
            ..Self::default()
        }
    }

    pub fn failing_for(recipient: Email) -> Self {
        Self {
            failing_recipient: Some(recipient),
            ..Self::default()
        }
    }

    pub async fn calls(&self) -> Vec<EmailMessage> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait::async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        body: &str,
    ) -> Result<(), EmailSenderError> {
        if self.record {
            self.calls
                .lock()
                .await
                .push(EmailMessage::new(recipient.clone(), subject, body));
        }

        if self.failing_recipient.as_ref() == Some(recipient) {
            return Err(EmailSenderError::ProviderFailure(
                "recipient rejected by mock provider".to_string(),
            ));
        }

        tracing::debug!("Mock email accepted");
        Ok(())
    }
}
