//! Utilization threshold evaluation.
//!
//! Pure logic -- the caller passes the filtered records in. Each record is
//! judged independently; qualifying rows produce one alert apiece, in
//! record order. There is no de-duplication and no severity ladder.

use serde::Serialize;

use crate::dataset::Record;
use crate::normalize::DATE_FORMAT;

/// Utilization strictly above this bound suggests scaling up.
pub const SCALE_UP_BOUND: f64 = 50.0;

/// Utilization strictly below this bound suggests scaling down.
pub const SCALE_DOWN_BOUND: f64 = -50.0;

/// Remedial action suggested by an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleSuggestion {
    ScaleUp,
    ScaleDown,
}

impl ScaleSuggestion {
    /// The user-facing suggestion sentence.
    pub fn message(self) -> &'static str {
        match self {
            ScaleSuggestion::ScaleUp => "Please scale up your resources.",
            ScaleSuggestion::ScaleDown => "Please scale down your resources.",
        }
    }
}

/// A single out-of-band utilization observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilizationAlert {
    pub lens_name: String,
    pub event_date: chrono::NaiveDate,
    pub utilization_percentage: f64,
    pub suggestion: ScaleSuggestion,
}

impl UtilizationAlert {
    /// Render the banner text shown to the user.
    pub fn message(&self) -> String {
        format!(
            "Alert: Utilization percentage for {} on {} is {}%. {}",
            self.lens_name,
            self.event_date.format(DATE_FORMAT),
            self.utilization_percentage,
            self.suggestion.message(),
        )
    }
}

/// Scan records for out-of-band utilization values.
///
/// Bounds are strict: exactly +50 or -50 does not alert.
pub fn evaluate(records: &[Record]) -> Vec<UtilizationAlert> {
    records
        .iter()
        .filter_map(|record| {
            let suggestion = if record.utilization_percentage > SCALE_UP_BOUND {
                ScaleSuggestion::ScaleUp
            } else if record.utilization_percentage < SCALE_DOWN_BOUND {
                ScaleSuggestion::ScaleDown
            } else {
                return None;
            };
            Some(UtilizationAlert {
                lens_name: record.lens_name.clone(),
                event_date: record.event_date,
                utilization_percentage: record.utilization_percentage,
                suggestion,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
