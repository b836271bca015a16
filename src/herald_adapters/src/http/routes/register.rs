use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use herald_application::{
    CommandHandler, CommandResult, RegisterUserCommand, RegisterUserCommandHandler,
};
use herald_core::{Email, EmailSender, UserStore};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::error::HeraldApiError;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: Secret<String>,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RegisterResponse {
    pub status: String,
}

impl From<CommandResult> for RegisterResponse {
    fn from(result: CommandResult) -> Self {
        let status = match result {
            CommandResult::Success => "success",
        };
        Self {
            status: status.to_string(),
        }
    }
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, E>(
    State((user_store, email_sender)): State<(U, E)>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, HeraldApiError>
where
    U: UserStore + Clone + 'static,
    E: EmailSender + Clone + 'static,
{
    let handler = RegisterUserCommandHandler::new(user_store, email_sender);

    let email = Email::try_from(request.email)?;
    let result = handler
        .handle(RegisterUserCommand::new(email, request.name))
        .await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse::from(result))))
}
