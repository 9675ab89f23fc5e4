use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::error::AppError;
use crate::routes::torneio;
use crate::state::AppState;

/// Build the Axum router with the liveness routes and the bracket API.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(torneio::home))
        // Liveness check that also proves DB connectivity.
        .route("/health", get(health))
        .route("/api/torneio", post(torneio::save_torneio))
        .route("/api/torneio/{game_tag}", get(torneio::get_torneio))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        // The static frontend is served from anywhere.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&state.db).await?;
    Ok("ok")
}
