//! Read-only HTTP API over the Hawaii climate observation dataset.
//!
//! The dataset is an SQLite file with two tables, `station` and
//! `measurement`, populated externally. This crate maps both tables to
//! static record types, runs a handful of filter/aggregate queries against
//! them, and serves the results as JSON through an Axum router.
//!
//! Modules follow the Explicit Module Boundary Pattern (EMBP): `routes`
//! knows about its parent (this crate root) and not about `config.rs` or
//! `models.rs` directly.

pub mod config;
pub mod models;
pub mod queries;
pub mod routes;
pub mod schema;

pub use config::Config;

// Re-exported for routes/*.rs, which import from the crate root instead of
// reaching into sibling modules.
pub use models::{DatasetSummary, Measurement, Station, TempStats};
