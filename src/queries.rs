//! Read-only queries against the `station` and `measurement` tables.
//!
//! Every function runs on a connection the caller acquired from the pool, so
//! one request holds one connection for all of its queries and releases it
//! when the handler returns.
//!
//! Dates are ISO 8601 text and are compared as strings. That ordering matches
//! calendar order for `YYYY-MM-DD`, and anything malformed simply matches no
//! rows.

use chrono::{Duration, NaiveDate};
use sqlx::SqliteConnection;

use crate::models::{DatasetSummary, Measurement, Station, TempStats};

/// Length of the "last year" window ending at the reference date.
pub const LAST_YEAR_DAYS: i64 = 365;

// ---

/// First date included in "last year" queries.
pub fn cutoff_date(reference: NaiveDate) -> NaiveDate {
    reference - Duration::days(LAST_YEAR_DAYS)
}

/// ISO 8601 text for a date, the form stored in `measurement.date`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// All measurements on or after `cutoff`, across every station.
///
/// Ordered by date then station code, so collapsing the rows into a
/// date-keyed map keeps the greatest station code for a shared date.
pub async fn precipitation_since(
    conn: &mut SqliteConnection,
    cutoff: NaiveDate,
) -> Result<Vec<Measurement>, sqlx::Error> {
    // ---
    sqlx::query_as::<_, Measurement>(
        r#"
        SELECT id, station, date, prcp, tobs
        FROM measurement
        WHERE date >= ?1
        ORDER BY date, station
        "#,
    )
    .bind(iso_date(cutoff))
    .fetch_all(conn)
    .await
}

/// Every station, in table order.
pub async fn list_stations(conn: &mut SqliteConnection) -> Result<Vec<Station>, sqlx::Error> {
    // ---
    sqlx::query_as::<_, Station>(
        r#"
        SELECT id, station, name, latitude, longitude, elevation
        FROM station
        ORDER BY id
        "#,
    )
    .fetch_all(conn)
    .await
}

/// Station code with the most measurement rows and its row count.
///
/// Ties go to the smallest station code. Returns `None` when the table is
/// empty.
pub async fn most_active_station(
    conn: &mut SqliteConnection,
) -> Result<Option<(String, i64)>, sqlx::Error> {
    // ---
    sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT station, COUNT(*) AS observations
        FROM measurement
        GROUP BY station
        ORDER BY observations DESC, station ASC
        LIMIT 1
        "#,
    )
    .fetch_optional(conn)
    .await
}

/// One station's measurements on or after `cutoff`, by date.
pub async fn station_tobs_since(
    conn: &mut SqliteConnection,
    station: &str,
    cutoff: NaiveDate,
) -> Result<Vec<Measurement>, sqlx::Error> {
    // ---
    sqlx::query_as::<_, Measurement>(
        r#"
        SELECT id, station, date, prcp, tobs
        FROM measurement
        WHERE station = ?1 AND date >= ?2
        ORDER BY date
        "#,
    )
    .bind(station)
    .bind(iso_date(cutoff))
    .fetch_all(conn)
    .await
}

/// Min/avg/max temperature for `start <= date [<= end]`.
///
/// `start` and `end` are used verbatim. `None` means no row in range carried
/// a temperature.
pub async fn temp_stats(
    conn: &mut SqliteConnection,
    start: &str,
    end: Option<&str>,
) -> Result<Option<TempStats>, sqlx::Error> {
    // ---
    let (min, avg, max) = sqlx::query_as::<_, (Option<f64>, Option<f64>, Option<f64>)>(
        r#"
        SELECT MIN(tobs), AVG(tobs), MAX(tobs)
        FROM measurement
        WHERE date >= ?1
          AND (?2 IS NULL OR date <= ?2)
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_one(conn)
    .await?;

    Ok(TempStats::from_aggregates(min, avg, max))
}

/// Row counts and measurement date span.
pub async fn dataset_summary(conn: &mut SqliteConnection) -> Result<DatasetSummary, sqlx::Error> {
    // ---
    sqlx::query_as::<_, DatasetSummary>(
        r#"
        SELECT
            (SELECT COUNT(*) FROM station)     AS station_count,
            (SELECT COUNT(*) FROM measurement) AS measurement_count,
            (SELECT MIN(date) FROM measurement) AS first_date,
            (SELECT MAX(date) FROM measurement) AS last_date
        "#,
    )
    .fetch_one(conn)
    .await
}
