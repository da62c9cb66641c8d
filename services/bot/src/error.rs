/// Registration bot error variants. The bot has no HTTP surface; errors
/// are logged at the command boundary and answered with a generic message.
#[derive(Debug, thiserror::Error)]
pub enum BotServiceError {
    #[error("telegram api error")]
    Telegram(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}
