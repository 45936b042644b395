use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/matchups/:matchup_id/days/:day", get(handlers::matchup_day))
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
