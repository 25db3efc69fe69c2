//! Temperature statistics over a caller-supplied date range.
//!
//! Both path segments are used verbatim as ISO 8601 text; a malformed date
//! just matches nothing and produces the no-data message. Segments that do
//! not even decode (invalid percent-encoded UTF-8) get the same answer.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{debug, info};

use super::{ApiError, AppState};
use crate::queries;

/// Plain-text body returned when the range has no temperature data.
pub const NO_DATA_MESSAGE: &str =
    "No temperature data found for the given date range. Try another date range.";

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/api/v1.0/{start}", get(from_start))
        .route("/api/v1.0/{start}/{end}", get(between))
}

/// Handle `GET /api/v1.0/{start}`.
async fn from_start(
    path: Result<Path<String>, PathRejection>,
    State((pool, _config)): State<AppState>,
) -> Result<Response, ApiError> {
    // ---
    let start = match path {
        Ok(Path(start)) => start,
        Err(rejection) => return Ok(undecodable(rejection)),
    };
    info!("GET /api/v1.0/{}", start);
    stats_response(&pool, &start, None).await
}

/// Handle `GET /api/v1.0/{start}/{end}`.
async fn between(
    path: Result<Path<(String, String)>, PathRejection>,
    State((pool, _config)): State<AppState>,
) -> Result<Response, ApiError> {
    // ---
    let (start, end) = match path {
        Ok(Path(segments)) => segments,
        Err(rejection) => return Ok(undecodable(rejection)),
    };
    info!("GET /api/v1.0/{}/{}", start, end);
    stats_response(&pool, &start, Some(end.as_str())).await
}

/// No ISO date can match a segment that failed to decode.
fn undecodable(rejection: PathRejection) -> Response {
    // ---
    debug!("Undecodable date segment: {}", rejection.body_text());
    NO_DATA_MESSAGE.into_response()
}

async fn stats_response(
    pool: &sqlx::SqlitePool,
    start: &str,
    end: Option<&str>,
) -> Result<Response, ApiError> {
    // ---
    let mut conn = pool.acquire().await?;

    match queries::temp_stats(&mut conn, start, end).await? {
        Some(stats) => {
            debug!("Temperature stats {:?}", stats);
            Ok(Json(stats.to_array()).into_response())
        }
        None => {
            debug!("No temperature data from {} to {:?}", start, end);
            Ok(NO_DATA_MESSAGE.into_response())
        }
    }
}
