use tracing::{error, info};

use crate::domain::types::ConfirmOutcome;
use crate::infra::telegram::{Message, Update};
use crate::state::AppState;
use crate::usecase::confirm::ConfirmRegistrationUseCase;

const HELP_TEXT: &str = "Welcome to the QuiteMap registration bot!\n\n\
    To register:\n\
    1. Fill in the registration form on the web site\n\
    2. Enter your Telegram handle in the form\n\
    3. Come back here and send /start or /activate\n\n\
    After confirmation you will receive an account activation link.";

const GENERIC_FAILURE: &str = "Something went wrong while processing your registration. \
    Please try again later or contact an administrator.";

/// Handle one inbound update. Never propagates an error: failures are
/// logged and answered with a generic message so the poll loop keeps
/// running.
pub async fn handle_update(state: &AppState, update: Update) {
    let Some(message) = update.message else {
        return;
    };
    let Some(command) = command_of(&message) else {
        return;
    };
    match command.as_str() {
        "/start" | "/activate" => confirm(state, &message).await,
        "/help" => reply(state, &message, HELP_TEXT).await,
        _ => {}
    }
}

/// First word of the message text, with any `@botname` suffix dropped.
/// Returns `None` for non-command messages.
fn command_of(message: &Message) -> Option<String> {
    let first = message.text.as_deref()?.split_whitespace().next()?;
    if !first.starts_with('/') {
        return None;
    }
    Some(first.split('@').next().unwrap_or(first).to_owned())
}

async fn confirm(state: &AppState, message: &Message) {
    let Some(sender) = message.from.as_ref() else {
        return;
    };
    let handle = sender.handle();

    let usecase = ConfirmRegistrationUseCase {
        accounts: state.account_repo(),
        pendings: state.pending_repo(),
    };

    let text = match usecase.execute(&handle).await {
        Ok(outcome) => {
            if let ConfirmOutcome::Promoted { username, .. } = &outcome {
                info!(username = %username, handle = %handle, "registration confirmed via bot");
            }
            reply_text(&outcome, &state.base_url)
        }
        Err(e) => {
            error!(error = %e, handle = %handle, "confirmation failed");
            GENERIC_FAILURE.to_owned()
        }
    };

    reply(state, message, &text).await;
}

async fn reply(state: &AppState, message: &Message, text: &str) {
    if let Err(e) = state.telegram.send_message(message.chat.id, text).await {
        error!(error = %e, chat_id = message.chat.id, "failed to send reply");
    }
}

/// Compose the user-facing reply for a confirmation outcome.
pub fn reply_text(outcome: &ConfirmOutcome, base_url: &str) -> String {
    match outcome {
        ConfirmOutcome::AlreadyActive { username } => format!(
            "You are already registered and activated!\n\
             Your login: {username}\n\n\
             You can sign in on the web site with your login and password."
        ),
        ConfirmOutcome::AwaitingActivation {
            username,
            activation_token,
        } => format!(
            "You are already registered, but your account is not activated yet.\n\
             Your login: {username}\n\n\
             Follow this link to activate:\n{}",
            activation_link(base_url, activation_token)
        ),
        ConfirmOutcome::ActivationUnavailable { username } => format!(
            "You are already registered, but your account is not activated yet.\n\
             Your login: {username}\n\n\
             Please contact an administrator to activate your account."
        ),
        ConfirmOutcome::NotRegistered => "Welcome to the QuiteMap registration bot!\n\n\
             To register, fill in the registration form on the web site with your \
             Telegram handle, then come back here and send /start or /activate."
            .to_owned(),
        ConfirmOutcome::Expired => "Your registration has expired. \
             Please start the registration again on the web site."
            .to_owned(),
        ConfirmOutcome::UsernameTaken { username } => format!(
            "The login '{username}' is already taken. Please start the registration \
             again on the web site with a different login."
        ),
        ConfirmOutcome::Promoted {
            username,
            telegram_handle,
            activation_token,
        } => format!(
            "Registration complete!\n\n\
             Your login: {username}\n\
             Telegram handle: @{telegram_handle}\n\n\
             Follow this link to activate your account:\n{}\n\n\
             After activation you can sign in on the web site with your login and password.",
            activation_link(base_url, activation_token)
        ),
    }
}

/// `<base_url>/activate/<token>`, tolerating a trailing slash on the base.
pub fn activation_link(base_url: &str, token: &str) -> String {
    format!("{}/activate/{}", base_url.trim_end_matches('/'), token)
}
