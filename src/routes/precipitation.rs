use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use tracing::{debug, info};

use super::{ApiError, AppState};
use crate::queries;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/v1.0/precipitation", get(handler))
}

/// Handle `GET /api/v1.0/precipitation`.
///
/// Returns `{date: prcp}` for the year ending at the reference date. Rows
/// from every station share one key per date; the last station in code
/// order wins.
async fn handler(
    State((pool, config)): State<AppState>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, ApiError> {
    // ---
    let cutoff = queries::cutoff_date(config.reference_date);
    info!("GET /api/v1.0/precipitation - since {}", cutoff);

    let mut conn = pool.acquire().await?;
    let rows = queries::precipitation_since(&mut conn, cutoff).await?;
    let row_count = rows.len();

    let by_date: BTreeMap<String, Option<f64>> =
        rows.into_iter().map(|m| (m.date, m.prcp)).collect();

    debug!(
        "GET /api/v1.0/precipitation - {} rows collapsed to {} dates",
        row_count,
        by_date.len()
    );
    Ok(Json(by_date))
}
