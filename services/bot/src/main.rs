use sea_orm::Database;
use tracing::info;

use quitemap_bot::config::BotConfig;
use quitemap_bot::infra::telegram::TelegramClient;
use quitemap_bot::poller;
use quitemap_bot::state::AppState;

#[tokio::main]
async fn main() {
    quitemap_core::tracing::init_tracing();

    let config = BotConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let telegram = TelegramClient::new(&config.telegram_api_url, &config.bot_token);

    let state = AppState {
        db,
        telegram,
        base_url: config.base_url,
    };

    info!("registration bot started");
    poller::run(state).await;
}
