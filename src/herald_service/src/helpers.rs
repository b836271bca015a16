use std::sync::Arc;

use herald_adapters::{
    config::{EmailClientKind, HeraldSetting},
    email::{MockEmailSender, PostmarkEmailSender},
};
use herald_core::{Email, EmailError, EmailSender};
use reqwest::Client as HttpClient;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildEmailSenderError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("Invalid sender address: {0}")]
    InvalidSender(#[from] EmailError),
    #[error("Postmark auth token is not configured")]
    MissingAuthToken,
}

/// Create the email sender selected by `email_client.kind`
///
/// # Returns
/// A shared sender that can be handed to any number of handlers
pub fn build_email_sender(
    config: &HeraldSetting,
) -> Result<Arc<dyn EmailSender>, BuildEmailSenderError> {
    let email_sender: Arc<dyn EmailSender> = match config.email_client.kind {
        EmailClientKind::Postmark => Arc::new(build_postmark_email_sender(config)?),
        EmailClientKind::Mock => {
            tracing::warn!("Using mock email sender, no emails will be delivered");
            Arc::new(MockEmailSender::non_recording())
        }
    };

    Ok(email_sender)
}

/// Create a Postmark sender from the `email_client` and `postmark` settings
///
/// Fails if no auth token is configured.
pub fn build_postmark_email_sender(
    config: &HeraldSetting,
) -> Result<PostmarkEmailSender, BuildEmailSenderError> {
    if config.postmark.auth_token.expose_secret().trim().is_empty() {
        return Err(BuildEmailSenderError::MissingAuthToken);
    }

    let http_client = HttpClient::builder()
        .timeout(config.email_client.timeout())
        .build()?;

    Ok(PostmarkEmailSender::new(
        config.email_client.base_url.clone(),
        Email::try_from(Secret::new(config.email_client.sender.clone()))?,
        config.postmark.auth_token.clone(),
        http_client,
    ))
}
