//! Canonical column names of the upstream utilization feed.
//!
//! These are the required columns the validator checks for and the field
//! names used throughout the pipeline and the API responses.

/// Name of the monitored entity (a "lens").
pub const COL_LENS_NAME: &str = "lens_name";

/// Observation date, `YYYY-MM-DD` in the source payload.
pub const COL_EVENT_DATE: &str = "event_date";

/// Resources actually consumed.
pub const COL_RESOURCES_USAGE: &str = "resources_usage";

/// Resources requested / provisioned.
pub const COL_RESOURCES_REQUEST: &str = "resources_request";

/// Signed utilization deviation percentage.
pub const COL_UTILIZATION_PERCENTAGE: &str = "utilization_percentage";

/// The upstream feed ships the percentage column without the second 'i'.
/// Accepted as an alias wherever the canonical name is required.
pub const COL_UTILIZATION_PERCENTAGE_FEED: &str = "utlization_percentage";

/// All columns a payload must carry to pass validation, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_LENS_NAME,
    COL_EVENT_DATE,
    COL_RESOURCES_USAGE,
    COL_RESOURCES_REQUEST,
    COL_UTILIZATION_PERCENTAGE,
];
