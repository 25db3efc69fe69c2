//! Record types for the two tables of the climate dataset.

use serde::Serialize;

// ---

/// Row of the `station` table
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Station {
    // ---
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// Row of the `measurement` table. `date` is kept as ISO 8601 text so range
/// filters compare lexicographically, the same way the store does.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Measurement {
    // ---
    pub id: i64,
    pub station: String,
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: Option<f64>,
}

/// Minimum, average and maximum temperature over a date range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TempStats {
    // ---
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

/// Row counts and date span of the dataset, reported at startup
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DatasetSummary {
    // ---
    pub station_count: i64,
    pub measurement_count: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

impl TempStats {
    // ---
    /// Build from the raw `MIN/AVG/MAX` aggregates. Any NULL aggregate means
    /// the range matched nothing usable, reported as `None`.
    pub fn from_aggregates(min: Option<f64>, avg: Option<f64>, max: Option<f64>) -> Option<Self> {
        // ---
        Some(TempStats {
            min: min?,
            avg: avg?,
            max: max?,
        })
    }

    /// `[min, avg, max]`, the shape served by the stats routes
    pub fn to_array(&self) -> [f64; 3] {
        [self.min, self.avg, self.max]
    }
}

impl Station {
    // ---
    /// Flatten stations into `[code, name, code, name, ...]`
    pub fn flatten_codes_and_names(stations: Vec<Station>) -> Vec<String> {
        // ---
        stations
            .into_iter()
            .flat_map(|s| [s.station, s.name])
            .collect()
    }
}
