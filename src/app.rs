use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/submit", post(handlers::submit_form))
        .route("/api/today", get(handlers::get_today))
        .route("/api/submit", post(handlers::submit))
        .route("/api/report", get(handlers::get_report))
        .route("/api/history", get(handlers::get_history))
        .with_state(state)
}
