use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use quitemap_domain::registration::InvalidRegistration;

/// Web service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum WebServiceError {
    #[error(transparent)]
    InvalidRegistration(#[from] InvalidRegistration),
    #[error("username already registered")]
    UsernameTaken,
    #[error("telegram handle already registered")]
    TelegramHandleTaken,
    #[error("invalid or expired activation token")]
    ActivationTokenNotFound,
    #[error("account already activated")]
    AlreadyActivated,
    #[error("unknown username")]
    UnknownUsername,
    #[error("wrong password")]
    WrongPassword,
    #[error("account is not activated")]
    AccountInactive,
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl WebServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRegistration(InvalidRegistration::Username) => "INVALID_USERNAME",
            Self::InvalidRegistration(InvalidRegistration::TelegramHandle) => {
                "INVALID_TELEGRAM_HANDLE"
            }
            Self::InvalidRegistration(InvalidRegistration::Password) => "INVALID_PASSWORD",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::TelegramHandleTaken => "TELEGRAM_HANDLE_TAKEN",
            Self::ActivationTokenNotFound => "ACTIVATION_TOKEN_NOT_FOUND",
            Self::AlreadyActivated => "ALREADY_ACTIVATED",
            Self::UnknownUsername => "UNKNOWN_USERNAME",
            Self::WrongPassword => "WRONG_PASSWORD",
            Self::AccountInactive => "ACCOUNT_INACTIVE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for WebServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidRegistration(_)
            | Self::UsernameTaken
            | Self::TelegramHandleTaken
            | Self::AlreadyActivated
            | Self::AccountInactive => StatusCode::BAD_REQUEST,
            Self::ActivationTokenNotFound => StatusCode::NOT_FOUND,
            Self::UnknownUsername | Self::WrongPassword => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors; logging them here
        // would be noise. Internal errors need the anyhow chain logged so the
        // root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "detail": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
