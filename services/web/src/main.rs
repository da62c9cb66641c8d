use sea_orm::Database;
use tracing::info;

use quitemap_web::config::WebConfig;
use quitemap_web::router::build_router;
use quitemap_web::state::AppState;

#[tokio::main]
async fn main() {
    quitemap_core::tracing::init_tracing();

    let config = WebConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        cookie_domain: config.cookie_domain,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.web_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("web service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
