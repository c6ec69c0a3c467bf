use crate::constants::{MALFORMATTED_ID, SOMETHING_HAPPENED, UNKNOWN_ENDPOINT};
use crate::errors::{Error, ErrorKind};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

/// JSON error body, always shaped `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip)]
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::Json(self);
        (status, body).into_response()
    }
}

/// Helper function to create API errors
pub fn api_error(status: StatusCode, message: &str) -> ApiError {
    ApiError {
        error: message.to_string(),
        code: status.as_u16(),
    }
}

/// Central error translation shared by every route.
///
/// Known kinds become a JSON error body; anything else is handed back so the
/// caller can treat it as unhandled.
pub fn error_handler(err: Error) -> Result<ApiError, Error> {
    match err.kind() {
        ErrorKind::Cast => Ok(api_error(StatusCode::BAD_REQUEST, MALFORMATTED_ID)),
        ErrorKind::Validation => Ok(api_error(StatusCode::BAD_REQUEST, &err.to_string())),
        ErrorKind::Type => Ok(api_error(StatusCode::NOT_FOUND, SOMETHING_HAPPENED)),
        ErrorKind::Other => Err(err),
    }
}

/// Last resort for errors the central handler does not translate
pub fn unhandled_error(err: Error) -> Response {
    error!("Unhandled error: {}", err);
    match err {
        Error::Body(message) => (StatusCode::BAD_REQUEST, message).into_response(),
        Error::PayloadTooLarge { .. } => {
            (StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large").into_response()
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match error_handler(self) {
            Ok(api_err) => api_err.into_response(),
            Err(err) => unhandled_error(err),
        }
    }
}

/// Fallback for every request no route claimed
pub async fn unknown_endpoint() -> ApiError {
    api_error(StatusCode::NOT_FOUND, UNKNOWN_ENDPOINT)
}
