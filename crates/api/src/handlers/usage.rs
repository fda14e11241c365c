//! Handlers for the utilization dashboard endpoints.
//!
//! Every handler runs the full stateless pipeline (fetch -> validate ->
//! normalize) against the live feed; nothing is cached between requests,
//! so each response reflects the feed at the moment of the call.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use lenswatch_core::alert::{evaluate, UtilizationAlert};
use lenswatch_core::dataset::{validate, Dataset, Record};
use lenswatch_core::filter::{event_dates, filter, lens_names};
use lenswatch_core::normalize::{normalize, DATE_FORMAT};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters shared by the table, alerts, and chart endpoints.
#[derive(Debug, Deserialize)]
pub struct UsageQuery {
    /// Lens to narrow to (filter stage 1).
    pub lens: String,
    /// Comma-separated `YYYY-MM-DD` dates (filter stage 2).
    /// Absent means "all dates".
    pub dates: Option<String>,
}

impl UsageQuery {
    /// Parse the `dates` parameter into an explicit selection.
    ///
    /// `None` when the parameter is absent; `dates=` (present but empty)
    /// is an empty selection, matching a fully-cleared multi-select.
    fn date_selection(&self) -> Option<Vec<String>> {
        self.dates.as_ref().map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
    }
}

/// An alert plus its rendered banner text.
#[derive(Debug, Serialize)]
pub struct AlertView {
    #[serde(flatten)]
    pub alert: UtilizationAlert,
    pub message: String,
}

/// Two series over a shared date axis. The three arrays are index-aligned,
/// one entry per filtered record.
#[derive(Debug, Serialize)]
pub struct ChartData {
    pub dates: Vec<String>,
    pub resources_usage: Vec<f64>,
    pub resources_request: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /usage/lenses
///
/// Distinct lens names, first-appearance order. Source for the dashboard's
/// single-select lens control.
pub async fn list_lenses(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let dataset = load_dataset(&state).await?;
    Ok(Json(DataResponse {
        data: lens_names(&dataset),
    }))
}

/// GET /usage/lenses/{lens}/dates
///
/// Distinct formatted dates within the given lens. Source for the
/// multi-select date control.
pub async fn list_dates(
    State(state): State<AppState>,
    Path(lens): Path<String>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let dataset = load_dataset(&state).await?;
    let subset = filter(&dataset, &lens, None);
    Ok(Json(DataResponse {
        data: event_dates(&subset),
    }))
}

/// GET /usage/table?lens=&dates=
///
/// The filtered records, in feed order.
pub async fn get_table(
    State(state): State<AppState>,
    Query(query): Query<UsageQuery>,
) -> AppResult<Json<DataResponse<Vec<Record>>>> {
    let dataset = load_dataset(&state).await?;
    let rows = narrowed(&dataset, &query)?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /usage/alerts?lens=&dates=
///
/// Threshold alerts over the filtered records, with rendered messages.
pub async fn get_alerts(
    State(state): State<AppState>,
    Query(query): Query<UsageQuery>,
) -> AppResult<Json<DataResponse<Vec<AlertView>>>> {
    let dataset = load_dataset(&state).await?;
    let rows = narrowed(&dataset, &query)?;
    let alerts = evaluate(&rows)
        .into_iter()
        .map(|alert| AlertView {
            message: alert.message(),
            alert,
        })
        .collect::<Vec<_>>();
    Ok(Json(DataResponse { data: alerts }))
}

/// GET /usage/chart?lens=&dates=
///
/// Index-aligned usage and request series against the date axis.
pub async fn get_chart(
    State(state): State<AppState>,
    Query(query): Query<UsageQuery>,
) -> AppResult<Json<DataResponse<ChartData>>> {
    let dataset = load_dataset(&state).await?;
    let rows = narrowed(&dataset, &query)?;
    let chart = ChartData {
        dates: rows
            .iter()
            .map(|r| r.event_date.format(DATE_FORMAT).to_string())
            .collect(),
        resources_usage: rows.iter().map(|r| r.resources_usage).collect(),
        resources_request: rows.iter().map(|r| r.resources_request).collect(),
    };
    Ok(Json(DataResponse { data: chart }))
}

// ---------------------------------------------------------------------------
// Shared pipeline steps
// ---------------------------------------------------------------------------

/// Fetch the feed and run the validation + normalization stages.
async fn load_dataset(state: &AppState) -> AppResult<Dataset> {
    let payload = state.feed.fetch().await?;
    let rows = validate(&payload)?;
    Ok(normalize(rows)?)
}

/// Apply both filter stages for the given query.
fn narrowed(dataset: &[Record], query: &UsageQuery) -> AppResult<Vec<Record>> {
    if query.lens.is_empty() {
        return Err(AppError::BadRequest("lens must not be empty".to_string()));
    }
    let selection = query.date_selection();
    Ok(filter(dataset, &query.lens, selection.as_deref()))
}
