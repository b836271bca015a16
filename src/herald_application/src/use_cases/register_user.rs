use async_trait::async_trait;
use herald_core::{Email, EmailSender, EmailSenderError, User, UserStore, UserStoreError};

use crate::command::{CommandHandler, CommandResult};

pub const WELCOME_SUBJECT: &str = "Welcome";
pub const WELCOME_BODY: &str = "Thank you!";

/// Request to register a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub email: Email,
    pub name: String,
}

impl RegisterUserCommand {
    pub fn new(email: Email, name: impl Into<String>) -> Self {
        Self {
            email,
            name: name.into(),
        }
    }
}

/// Error types for the register user command
#[derive(Debug, thiserror::Error)]
pub enum RegisterUserError {
    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),
    #[error("Failed to send welcome email: {0}")]
    Notification(#[from] EmailSenderError),
}

/// Registers a user and sends them a welcome email.
///
/// The email is sent exactly once, after the user has been stored. A failed
/// send fails the command but does not undo the registration.
#[derive(Debug, Clone)]
pub struct RegisterUserCommandHandler<U, E>
where
    U: UserStore,
    E: EmailSender,
{
    user_store: U,
    email_sender: E,
}

impl<U, E> RegisterUserCommandHandler<U, E>
where
    U: UserStore,
    E: EmailSender,
{
    pub fn new(user_store: U, email_sender: E) -> Self {
        Self {
            user_store,
            email_sender,
        }
    }
}

#[async_trait]
impl<U, E> CommandHandler<RegisterUserCommand> for RegisterUserCommandHandler<U, E>
where
    U: UserStore,
    E: EmailSender,
{
    type Output = CommandResult;
    type Error = RegisterUserError;

    #[tracing::instrument(name = "RegisterUserCommandHandler::handle", skip_all)]
    async fn handle(
        &self,
        command: RegisterUserCommand,
    ) -> Result<CommandResult, RegisterUserError> {
        let RegisterUserCommand { email, name } = command;

        let user = User::new(email.clone(), name);
        let user_id = user.id();
        self.user_store.add_user(user).await?;
        tracing::info!(%user_id, "User registered");

        if let Err(e) = self
            .email_sender
            .send_email(&email, WELCOME_SUBJECT, WELCOME_BODY)
            .await
        {
            tracing::error!(%user_id, error = %e, "Welcome email was not sent");
            return Err(e.into());
        }

        Ok(CommandResult::Success)
    }
}
