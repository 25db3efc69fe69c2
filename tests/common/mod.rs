//! Shared fixture for the integration tests: an in-memory copy of the
//! climate dataset's schema seeded with three stations.

use anyhow::Result;
use chrono::NaiveDate;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use surfsup_climate::{routes, Config};

/// Last date in the fixture, matching the production reference date.
pub const LAST_DATE: &str = "2017-08-23";

pub const STATIONS: &[(&str, &str)] = &[
    ("USC1", "ALPHA POINT, HI US"),
    ("USC2", "BETA BAY, HI US"),
    ("USC3", "GAMMA RIDGE, HI US"),
];

/// `(station, date, prcp, tobs)`. USC1 has 10 rows, USC2 has 9, USC3 has 2.
pub const MEASUREMENTS: &[(&str, &str, Option<f64>, Option<f64>)] = &[
    ("USC1", "2016-08-20", Some(0.10), Some(70.0)),
    ("USC1", "2016-08-23", Some(0.00), Some(81.0)),
    ("USC1", "2016-08-24", Some(0.08), Some(79.0)),
    ("USC1", "2016-12-01", Some(0.50), Some(72.0)),
    ("USC1", "2017-01-15", Some(0.00), Some(65.0)),
    ("USC1", "2017-03-01", Some(1.20), Some(68.0)),
    ("USC1", "2017-05-01", Some(0.02), Some(74.0)),
    ("USC1", "2017-07-01", Some(0.00), Some(78.0)),
    ("USC1", "2017-08-22", Some(0.00), Some(80.0)),
    ("USC1", "2017-08-23", Some(0.05), Some(82.0)),
    ("USC2", "2015-01-01", Some(0.00), Some(66.0)),
    ("USC2", "2016-08-23", Some(0.70), Some(77.0)),
    ("USC2", "2016-09-10", None, Some(76.0)),
    ("USC2", "2016-10-10", Some(0.30), None),
    ("USC2", "2016-11-10", Some(0.00), Some(71.0)),
    ("USC2", "2017-02-10", Some(0.40), Some(63.0)),
    ("USC2", "2017-04-10", None, Some(70.0)),
    ("USC2", "2017-06-10", Some(0.10), Some(75.0)),
    ("USC2", "2017-08-23", Some(0.00), Some(79.0)),
    ("USC3", "2010-01-01", Some(0.20), Some(60.0)),
    ("USC3", "2010-01-02", None, None),
];

/// Single-connection in-memory pool; every handle sees the same database.
pub async fn memory_pool() -> Result<SqlitePool> {
    // ---
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}

/// Create the `station` and `measurement` tables as the dataset defines them.
pub async fn create_tables(pool: &SqlitePool) -> Result<()> {
    // ---
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        CREATE TABLE station (
            id        INTEGER NOT NULL PRIMARY KEY,
            station   TEXT,
            name      TEXT,
            latitude  FLOAT,
            longitude FLOAT,
            elevation FLOAT
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE measurement (
            id      INTEGER NOT NULL PRIMARY KEY,
            station TEXT,
            date    TEXT,
            prcp    FLOAT,
            tobs    FLOAT
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}

pub async fn insert_station(pool: &SqlitePool, code: &str, name: &str) -> Result<()> {
    // ---
    sqlx::query(
        "INSERT INTO station (station, name, latitude, longitude, elevation) \
         VALUES (?1, ?2, 21.3, -157.8, 10.0)",
    )
    .bind(code)
    .bind(name)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn insert_measurement(
    pool: &SqlitePool,
    station: &str,
    date: &str,
    prcp: Option<f64>,
    tobs: Option<f64>,
) -> Result<()> {
    // ---
    sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
        .bind(station)
        .bind(date)
        .bind(prcp)
        .bind(tobs)
        .execute(pool)
        .await?;
    Ok(())
}

/// Empty tables, no rows.
pub async fn empty_pool() -> Result<SqlitePool> {
    // ---
    let pool = memory_pool().await?;
    create_tables(&pool).await?;
    Ok(pool)
}

/// Tables seeded with [`STATIONS`] and [`MEASUREMENTS`].
pub async fn seeded_pool() -> Result<SqlitePool> {
    // ---
    let pool = empty_pool().await?;

    for (code, name) in STATIONS {
        insert_station(&pool, code, name).await?;
    }
    for (station, date, prcp, tobs) in MEASUREMENTS {
        insert_measurement(&pool, station, date, *prcp, *tobs).await?;
    }

    Ok(pool)
}

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 8, 23).unwrap()
}

// Only the HTTP tests serve the router
#[allow(dead_code)]
pub fn test_config() -> Config {
    // ---
    Config {
        db_url: "sqlite::memory:".to_string(),
        db_pool_max: 1,
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        reference_date: reference_date(),
    }
}

/// Serve the real router on an ephemeral port; returns its base URL.
#[allow(dead_code)]
pub async fn spawn_app(pool: SqlitePool) -> Result<String> {
    // ---
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = routes::router(pool, test_config());

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    Ok(format!("http://{}", addr))
}
