use herald_core::{Email, EmailSender, EmailSenderError};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

/// [`EmailSender`] backed by the Postmark transactional email API.
#[derive(Clone)]
pub struct PostmarkEmailSender {
    http_client: Client,
    base_url: String,
    sender: Email,
    authorization_token: Secret<String>,
}

impl PostmarkEmailSender {
    pub fn new(
        base_url: String,
        sender: Email,
        authorization_token: Secret<String>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        }
    }
}

#[async_trait::async_trait]
impl EmailSender for PostmarkEmailSender {
    #[tracing::instrument(name = "Sending email", skip_all)]
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        body: &str,
    ) -> Result<(), EmailSenderError> {
        let base = Url::parse(&self.base_url).map_err(provider_failure)?;
        let url = base.join("/email").map_err(provider_failure)?;

        let request_body = SendEmailRequest {
            from: self.sender.as_ref().expose_secret(),
            to: recipient.as_ref().expose_secret(),
            subject,
            html_body: body,
            text_body: body,
            message_stream: MESSAGE_STREAM,
        };

        self.http_client
            .post(url)
            .header(
                POSTMARK_AUTH_HEADER,
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await
            .map_err(provider_failure)?
            .error_for_status()
            .map_err(provider_failure)?;

        Ok(())
    }
}

fn provider_failure(e: impl ToString) -> EmailSenderError {
    EmailSenderError::ProviderFailure(e.to_string())
}

const MESSAGE_STREAM: &str = "outbound";
const POSTMARK_AUTH_HEADER: &str = "X-Postmark-Server-Token";

#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
    message_stream: &'a str,
}
