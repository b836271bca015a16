use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use herald_application::RegisterUserError;
use herald_core::{EmailError, EmailSenderError, UserStoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum HeraldApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Notification failed: {0}")]
    NotificationFailed(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for HeraldApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            HeraldApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            HeraldApiError::UserAlreadyExists => StatusCode::CONFLICT,
            HeraldApiError::NotificationFailed(_) => StatusCode::BAD_GATEWAY,
            HeraldApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<EmailError> for HeraldApiError {
    fn from(error: EmailError) -> Self {
        HeraldApiError::InvalidInput(error.to_string())
    }
}

impl From<UserStoreError> for HeraldApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => HeraldApiError::UserAlreadyExists,
            UserStoreError::UserNotFound => HeraldApiError::UnexpectedError(error.to_string()),
            UserStoreError::UnexpectedError(e) => HeraldApiError::UnexpectedError(e),
        }
    }
}

impl From<EmailSenderError> for HeraldApiError {
    fn from(error: EmailSenderError) -> Self {
        HeraldApiError::NotificationFailed(error.to_string())
    }
}

impl From<RegisterUserError> for HeraldApiError {
    fn from(error: RegisterUserError) -> Self {
        match error {
            RegisterUserError::UserStore(e) => e.into(),
            RegisterUserError::Notification(e) => e.into(),
        }
    }
}
