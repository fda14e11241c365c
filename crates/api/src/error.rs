use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lenswatch_core::CoreError;
use lenswatch_feed::FeedError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for pipeline failures and [`FeedError`] for upstream
/// fetch failures, plus HTTP-specific variants. Implements [`IntoResponse`]
/// to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The fetched dataset failed validation or normalization.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The upstream feed could not be fetched.
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Pipeline failures over fetched data: the upstream payload is at
            // fault, not the caller, so these map to 502 with a code naming
            // the failed check. Terminal per request -- nothing is rendered.
            AppError::Core(core) => {
                tracing::error!(error = %core, "Feed dataset failed validation");
                let code = match core {
                    CoreError::Format(_) => "FORMAT_ERROR",
                    CoreError::Schema { .. } => "SCHEMA_ERROR",
                    CoreError::DateParse { .. } => "DATE_PARSE_ERROR",
                };
                (StatusCode::BAD_GATEWAY, code, core.to_string())
            }

            AppError::Feed(feed) => {
                tracing::error!(error = %feed, "Upstream feed request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "FEED_UNAVAILABLE",
                    feed.to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
