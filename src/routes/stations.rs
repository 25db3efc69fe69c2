use axum::{extract::State, routing::get, Json, Router};
use tracing::{debug, info};

use super::{ApiError, AppState};
use crate::{queries, Station};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/v1.0/stations", get(handler))
}

/// Handle `GET /api/v1.0/stations` with `[code, name, code, name, ...]`.
async fn handler(State((pool, _config)): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    // ---
    info!("GET /api/v1.0/stations");

    let mut conn = pool.acquire().await?;
    let stations = queries::list_stations(&mut conn).await?;

    debug!("GET /api/v1.0/stations - {} stations", stations.len());
    Ok(Json(Station::flatten_codes_and_names(stations)))
}
