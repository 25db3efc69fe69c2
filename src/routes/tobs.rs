use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;
use tracing::{debug, info};

use super::{ApiError, AppState};
use crate::{queries, Measurement};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/v1.0/tobs", get(handler))
}

/// Handle `GET /api/v1.0/tobs`.
///
/// Finds the station with the most measurements, then returns its last year
/// of temperatures as `[date, tobs, date, tobs, ...]`. An empty dataset
/// yields `[]`.
async fn handler(State((pool, config)): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    // ---
    info!("GET /api/v1.0/tobs");

    // Both steps run on the same connection
    let mut conn = pool.acquire().await?;

    let Some((station, observations)) = queries::most_active_station(&mut conn).await? else {
        debug!("GET /api/v1.0/tobs - no measurements");
        return Ok(Json(Vec::new()));
    };
    debug!(
        "GET /api/v1.0/tobs - most active station {} ({} rows)",
        station, observations
    );

    let cutoff = queries::cutoff_date(config.reference_date);
    let rows = queries::station_tobs_since(&mut conn, &station, cutoff).await?;

    debug!("GET /api/v1.0/tobs - {} rows since {}", rows.len(), cutoff);
    Ok(Json(flatten_dates_and_tobs(rows)))
}

/// `[date, tobs, date, tobs, ...]`, with `null` for a missing temperature.
fn flatten_dates_and_tobs(rows: Vec<Measurement>) -> Vec<Value> {
    // ---
    rows.into_iter()
        .flat_map(|m| [Value::from(m.date), Value::from(m.tobs)])
        .collect()
}
