use axum::{Form, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::WebServiceError;
use crate::state::AppState;
use crate::usecase::register::{RegisterInput, RegisterUseCase};

/// Instruction returned after a successful submission. Confirmation
/// happens out of band, in the Telegram bot.
const CONFIRM_INSTRUCTION: &str = "Registration saved. Open the QuiteMap Telegram bot and send \
     /start within one hour to confirm your registration.";

#[derive(Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub telegram_handle: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Json<MessageResponse>, WebServiceError> {
    let usecase = RegisterUseCase {
        accounts: state.account_repo(),
        pendings: state.pending_repo(),
    };
    usecase
        .execute(RegisterInput {
            username: form.username,
            telegram_handle: form.telegram_handle,
            password: form.password,
        })
        .await?;
    Ok(Json(MessageResponse {
        message: CONFIRM_INSTRUCTION,
    }))
}
