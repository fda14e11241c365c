//! Dataset model and schema validation for the utilization feed.
//!
//! [`validate`] is the entry stage of the pipeline: it turns the raw decoded
//! feed payload into typed rows or fails the whole run. The caller is
//! responsible for fetching the payload and passing it in.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::columns::{
    COL_UTILIZATION_PERCENTAGE, COL_UTILIZATION_PERCENTAGE_FEED, REQUIRED_COLUMNS,
};
use crate::error::CoreError;

/// A validated feed row, `event_date` still in its source string form.
///
/// Produced by [`validate`]; consumed by
/// [`normalize`](crate::normalize::normalize).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub lens_name: String,
    pub event_date: String,
    pub resources_usage: f64,
    pub resources_request: f64,
    /// The feed spells this column `utlization_percentage` (sic).
    #[serde(alias = "utlization_percentage")]
    pub utilization_percentage: f64,
}

/// A normalized row: date parsed, percentage rounded to 2 decimal places.
///
/// Serializes `event_date` as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub lens_name: String,
    pub event_date: chrono::NaiveDate,
    pub resources_usage: f64,
    pub resources_request: f64,
    pub utilization_percentage: f64,
}

/// The full or filtered ordered sequence of records.
pub type Dataset = Vec<Record>;

/// Validate a decoded feed payload into typed rows.
///
/// Checks, in order:
///
/// 1. The payload is a JSON array and every element is an object --
///    otherwise [`CoreError::Format`].
/// 2. Every required column is present somewhere in the dataset (a column
///    exists if any row carries it, mirroring a tabular view of the data) --
///    otherwise [`CoreError::Schema`] listing exactly the missing columns.
/// 3. Every row decodes into a [`RawRecord`] with non-null values for all
///    required fields -- a row that does not is not a uniform record and
///    fails with [`CoreError::Format`] carrying the row index.
///
/// Extra fields are ignored. An empty array is valid and yields zero rows.
pub fn validate(payload: &Value) -> Result<Vec<RawRecord>, CoreError> {
    let items = payload
        .as_array()
        .ok_or_else(|| CoreError::Format("response body is not a JSON array".to_string()))?;

    for (i, item) in items.iter().enumerate() {
        if !item.is_object() {
            return Err(CoreError::Format(format!(
                "element at index {i} is not an object"
            )));
        }
    }

    if items.is_empty() {
        return Ok(Vec::new());
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !items.iter().any(|item| has_column(item, col)))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::Schema { missing });
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item.clone())
                .map_err(|e| CoreError::Format(format!("record at index {i} is malformed: {e}")))
        })
        .collect()
}

/// Whether a row carries the given column. The canonical percentage column
/// is satisfied by either spelling.
fn has_column(item: &Value, col: &str) -> bool {
    let Some(obj) = item.as_object() else {
        return false;
    };
    if obj.contains_key(col) {
        return true;
    }
    col == COL_UTILIZATION_PERCENTAGE && obj.contains_key(COL_UTILIZATION_PERCENTAGE_FEED)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
