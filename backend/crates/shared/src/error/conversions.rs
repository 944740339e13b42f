//! Conversions into [`AppError`] and out of it into HTTP responses.

use super::app_error::AppError;

impl From<serde_json::Error> for AppError {
    /// Undecodable input is the caller's fault; anything else is ours
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::validation("Request body is not valid JSON").with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

/// `{status, code, message, action?}` with the matching HTTP status
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_body())).into_response()
    }
}
