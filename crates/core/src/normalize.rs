//! Normalization stage: date parsing and percentage rounding.

use chrono::NaiveDate;

use crate::dataset::{Dataset, RawRecord, Record};
use crate::error::CoreError;

/// The single fixed parse (and display) rule for `event_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Turn validated rows into a normalized [`Dataset`].
///
/// Parses every `event_date` with [`DATE_FORMAT`] and rounds
/// `utilization_percentage` to 2 decimal places. The first row whose date
/// does not parse fails the whole run with [`CoreError::DateParse`]; the
/// raw rows are consumed either way.
pub fn normalize(rows: Vec<RawRecord>) -> Result<Dataset, CoreError> {
    rows.into_iter()
        .enumerate()
        .map(|(row, raw)| {
            let event_date =
                NaiveDate::parse_from_str(&raw.event_date, DATE_FORMAT).map_err(|source| {
                    CoreError::DateParse {
                        row,
                        value: raw.event_date.clone(),
                        source,
                    }
                })?;
            Ok(Record {
                lens_name: raw.lens_name,
                event_date,
                resources_usage: raw.resources_usage,
                resources_request: raw.resources_request,
                utilization_percentage: round2(raw.utilization_percentage),
            })
        })
        .collect()
}

/// Round to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn raw(event_date: &str, utilization: f64) -> RawRecord {
        RawRecord {
            lens_name: "checkout".to_string(),
            event_date: event_date.to_string(),
            resources_usage: 10.0,
            resources_request: 20.0,
            utilization_percentage: utilization,
        }
    }

    #[test]
    fn parses_dates_and_rounds_percentages() {
        let records = normalize(vec![raw("2024-01-01", 75.004)]).unwrap();
        assert_eq!(
            records[0].event_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(records[0].utilization_percentage, 75.0);
    }

    #[test]
    fn unparseable_date_fails_the_whole_run() {
        let rows = vec![raw("2024-01-01", 1.0), raw("01/02/2024", 2.0)];
        let err = normalize(rows).unwrap_err();
        assert_matches!(err, CoreError::DateParse { row: 1, value, .. } => {
            assert_eq!(value, "01/02/2024");
        });
    }

    #[test]
    fn rounding_is_idempotent() {
        for value in [75.004, 3.14159, -3.14159, 0.125, 42.0, -50.555] {
            let once = round2(value);
            assert_eq!(round2(once), once);
        }
    }

    #[test]
    fn already_rounded_values_are_unchanged() {
        for value in [75.25, -12.5, 0.0, 100.0] {
            assert_eq!(round2(value), value);
        }
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 0.125 is exactly representable, so the half-way case is real.
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }
}
