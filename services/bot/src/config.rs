/// Registration bot configuration loaded from environment variables.
#[derive(Debug)]
pub struct BotConfig {
    /// PostgreSQL connection URL (same database the web service uses).
    pub database_url: String,
    /// Telegram Bot API token.
    pub bot_token: String,
    /// Public base URL of the web service, for composing activation links.
    pub base_url: String,
    /// Telegram API server (default `https://api.telegram.org`).
    /// Env var: `TELEGRAM_API_URL`; override points tests at a stub.
    pub telegram_api_url: String,
}

impl BotConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            bot_token: std::env::var("BOT_TOKEN").expect("BOT_TOKEN"),
            base_url: std::env::var("BASE_URL").expect("BASE_URL"),
            telegram_api_url: std::env::var("TELEGRAM_API_URL")
                .unwrap_or_else(|_| "https://api.telegram.org".to_owned()),
        }
    }
}
