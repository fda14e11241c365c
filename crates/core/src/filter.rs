//! Two-stage dataset narrowing plus the distinct-value helpers that feed
//! the dashboard's filter controls.

use crate::dataset::Record;
use crate::normalize::DATE_FORMAT;

/// Narrow a dataset to one lens and an optional date selection.
///
/// Stage 1 keeps rows whose `lens_name` matches; stage 2 keeps rows whose
/// formatted date is in `dates`. `None` means "all dates" (no further
/// narrowing); an explicitly empty selection keeps nothing. Relative order
/// of surviving rows matches the input, and an empty result is valid.
pub fn filter(dataset: &[Record], lens_name: &str, dates: Option<&[String]>) -> Vec<Record> {
    let by_lens = dataset.iter().filter(|r| r.lens_name == lens_name);
    match dates {
        None => by_lens.cloned().collect(),
        Some(selection) => by_lens
            .filter(|r| {
                let formatted = format_date(r);
                selection.iter().any(|d| *d == formatted)
            })
            .cloned()
            .collect(),
    }
}

/// Distinct lens names in first-appearance order.
///
/// Source for the dashboard's single-select lens control.
pub fn lens_names(dataset: &[Record]) -> Vec<String> {
    distinct(dataset.iter().map(|r| r.lens_name.clone()))
}

/// Distinct formatted dates in first-appearance order.
///
/// Source for the multi-select date control; callers pass the lens-filtered
/// subset so the choices match the selected lens.
pub fn event_dates(records: &[Record]) -> Vec<String> {
    distinct(records.iter().map(format_date))
}

fn format_date(record: &Record) -> String {
    record.event_date.format(DATE_FORMAT).to_string()
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(lens: &str, day: u32) -> Record {
        Record {
            lens_name: lens.to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            resources_usage: 10.0,
            resources_request: 20.0,
            utilization_percentage: 0.0,
        }
    }

    fn dataset() -> Vec<Record> {
        vec![
            record("checkout", 1),
            record("billing", 1),
            record("checkout", 2),
            record("checkout", 1),
            record("billing", 3),
        ]
    }

    #[test]
    fn no_date_selection_keeps_all_lens_rows() {
        let result = filter(&dataset(), "checkout", None);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|r| r.lens_name == "checkout"));
    }

    #[test]
    fn date_selection_narrows_further() {
        let dates = vec!["2024-01-01".to_string()];
        let result = filter(&dataset(), "checkout", Some(&dates));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn empty_date_selection_keeps_nothing() {
        let result = filter(&dataset(), "checkout", Some(&[]));
        assert!(result.is_empty());
    }

    #[test]
    fn unknown_lens_yields_empty_result_without_error() {
        let result = filter(&dataset(), "search", None);
        assert!(result.is_empty());
    }

    #[test]
    fn relative_order_is_preserved() {
        let result = filter(&dataset(), "checkout", None);
        let days: Vec<u32> = result
            .iter()
            .map(|r| {
                use chrono::Datelike;
                r.event_date.day()
            })
            .collect();
        assert_eq!(days, vec![1, 2, 1]);
    }

    #[test]
    fn filter_is_a_projection() {
        let dates = vec!["2024-01-01".to_string(), "2024-01-02".to_string()];
        let once = filter(&dataset(), "checkout", Some(&dates));
        let twice = filter(&once, "checkout", Some(&dates));
        assert_eq!(once, twice);
    }

    #[test]
    fn lens_names_are_distinct_in_first_appearance_order() {
        assert_eq!(lens_names(&dataset()), vec!["checkout", "billing"]);
    }

    #[test]
    fn event_dates_are_distinct_and_formatted() {
        let subset = filter(&dataset(), "checkout", None);
        assert_eq!(event_dates(&subset), vec!["2024-01-01", "2024-01-02"]);
    }
}
