use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/bursts", get(handlers::get_bursts))
        .route("/api/archive", get(handlers::get_archive))
        .route("/api/date", get(handlers::get_date))
        .route("/*path", get(handlers::web_file))
        .with_state(state)
}
