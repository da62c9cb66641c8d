use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use quitemap_core::health::{healthz, readyz};
use quitemap_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{activate::activate_account, login::login, register::register};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Registration workflow
        .route("/register", post(register))
        .route("/activate/{token}", get(activate_account))
        .route("/login", post(login))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
