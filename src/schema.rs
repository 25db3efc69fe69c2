//! Startup check that the dataset has the shape the queries expect.
//!
//! The store is populated externally and never migrated here. Verified once
//! on startup from `main.rs`, so a wrong `DATABASE_URL` fails fast instead of
//! surfacing as 500s on every request.

use anyhow::{anyhow, Context, Result};
use sqlx::SqlitePool;

use crate::queries;

// ---

/// Tables read by the service and the columns each query selects.
const EXPECTED_TABLES: &[(&str, &[&str])] = &[
    (
        "station",
        &["id", "station", "name", "latitude", "longitude", "elevation"],
    ),
    ("measurement", &["id", "station", "date", "prcp", "tobs"]),
];

/// Ensure both tables exist with every expected column.
///
/// Errors list each missing column by table.
pub async fn verify_schema(pool: &SqlitePool) -> Result<()> {
    // ---
    let mut conn = pool.acquire().await?;
    let mut missing = Vec::new();

    for (table, columns) in EXPECTED_TABLES {
        let present = sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info(?1)")
            .bind(*table)
            .fetch_all(&mut *conn)
            .await
            .with_context(|| format!("Failed to inspect table '{}'", table))?;

        if present.is_empty() {
            missing.push(format!("table {}", table));
            continue;
        }

        missing.extend(
            columns
                .iter()
                .filter(|c| !present.iter().any(|p| p == *c))
                .map(|c| format!("{}.{}", table, c)),
        );
    }

    if !missing.is_empty() {
        return Err(anyhow!("Database schema is missing: {}", missing.join(", ")));
    }

    tracing::debug!("Schema verified");
    Ok(())
}

/// Log the dataset's size and date span, warning when its last date is not
/// the configured reference date.
pub async fn log_dataset_summary(pool: &SqlitePool, reference_date: &str) -> Result<()> {
    // ---
    let mut conn = pool.acquire().await?;
    let summary = queries::dataset_summary(&mut conn).await?;

    tracing::info!(
        "Dataset: {} stations, {} measurements, {} .. {}",
        summary.station_count,
        summary.measurement_count,
        summary.first_date.as_deref().unwrap_or("-"),
        summary.last_date.as_deref().unwrap_or("-"),
    );

    if summary.last_date.as_deref() != Some(reference_date) {
        tracing::warn!(
            "Dataset ends at {:?} but REFERENCE_DATE is {}; last-year routes use {}",
            summary.last_date,
            reference_date,
            reference_date
        );
    }

    Ok(())
}
