/// Terminal failures raised by the validation and normalization stages.
///
/// Every variant halts the pipeline for the whole dataset -- a run either
/// passes all checks or produces nothing.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The payload is not a sequence of uniform records (not a JSON array,
    /// an element is not an object, or a row fails typed decode).
    #[error("Unexpected data format: {0}")]
    Format(String),

    /// One or more required columns are absent from the entire dataset.
    #[error("Missing columns in the dataset: {missing:?}")]
    Schema { missing: Vec<String> },

    /// A row's `event_date` did not match the fixed `%Y-%m-%d` parse rule.
    #[error("Row {row}: unparseable event_date {value:?}: {source}")]
    DateParse {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
