//! Route definitions for the utilization dashboard endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::usage;
use crate::state::AppState;

/// Routes mounted at `/usage`.
///
/// ```text
/// GET /lenses                  -> list_lenses
/// GET /lenses/{lens}/dates     -> list_dates
/// GET /table                   -> get_table
/// GET /alerts                  -> get_alerts
/// GET /chart                   -> get_chart
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lenses", get(usage::list_lenses))
        .route("/lenses/{lens}/dates", get(usage::list_dates))
        .route("/table", get(usage::get_table))
        .route("/alerts", get(usage::get_alerts))
        .route("/chart", get(usage::get_chart))
}
