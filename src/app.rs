use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/click/increment", post(handlers::click_increment))
        .route("/click/decrement", post(handlers::click_decrement))
        .route("/click/reset", post(handlers::click_reset))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/click", post(handlers::click))
        .route("/api/key", post(handlers::key))
        .with_state(state)
}
