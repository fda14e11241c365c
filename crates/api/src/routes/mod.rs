pub mod health;
pub mod usage;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /usage/lenses                    distinct lens names
/// /usage/lenses/{lens}/dates       distinct dates within a lens
/// /usage/table                     filtered records
/// /usage/alerts                    threshold alerts
/// /usage/chart                     usage vs request series
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/usage", usage::router())
}
