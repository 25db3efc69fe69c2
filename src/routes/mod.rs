use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Router,
};
use sqlx::SqlitePool;

use crate::Config;

mod health;
mod home;
mod precipitation;
mod stations;
mod temp_stats;
mod tobs;

/// Shared by every route: the connection pool and the loaded configuration.
pub type AppState = (SqlitePool, Config);

// ---

pub fn router(pool: SqlitePool, config: Config) -> Router {
    // ---
    Router::new()
        .merge(home::router())
        .merge(precipitation::router())
        .merge(stations::router())
        .merge(tobs::router())
        .merge(temp_stats::router())
        .merge(health::router())
        .with_state((pool, config))
}

/// Store failure surfaced from a handler as `500 Internal Server Error`.
pub struct ApiError(anyhow::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        tracing::error!("Request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}
