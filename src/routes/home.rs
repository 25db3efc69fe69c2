// src/routes/home.rs
//! Landing page listing the available API routes.

use axum::{response::Html, routing::get, Router};

use super::AppState;

const HOME_PAGE: &str = "\
<h1>Hawaii Climate API</h1>\
<p>Read-only climate observations for Hawaiian weather stations.</p>\
<h2>Available routes</h2>\
<p>Precipitation by date for the last year of data:<br/>\
<a href=\"/api/v1.0/precipitation\">/api/v1.0/precipitation</a></p>\
<p>All stations, code then name:<br/>\
<a href=\"/api/v1.0/stations\">/api/v1.0/stations</a></p>\
<p>Temperature observations of the most active station for the last year:<br/>\
<a href=\"/api/v1.0/tobs\">/api/v1.0/tobs</a></p>\
<p>Min, average and max temperature from a start date (YYYY-MM-DD, 2016-08-23 or later):<br/>\
/api/v1.0/&lt;start&gt;</p>\
<p>Min, average and max temperature between two dates (end 2017-08-23 or earlier):<br/>\
/api/v1.0/&lt;start&gt;/&lt;end&gt;</p>";

/// Handle `GET /`.
async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}
