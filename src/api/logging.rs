//! Access log middleware.

use crate::constants::MAX_BODY_BYTES;
use crate::errors::Error;
use axum::body::{to_bytes, Body, HttpBody};
use axum::extract::Request;
use axum::http::{header, Method, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::time::Instant;
use tracing::info;

/// Logs `METHOD URI STATUS LENGTH - ELAPSED ms BODY` once the response is
/// ready. Only `POST` bodies are logged; they are buffered up to
/// `MAX_BODY_BYTES` and anything larger is refused with 413.
pub async fn log_request(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let (req, logged_body) = if method == Method::POST {
        let declared = req
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<usize>().ok());
        if declared.is_some_and(|length| length > MAX_BODY_BYTES) {
            return reject_oversized(&method, &uri);
        }

        let (parts, body) = req.into_parts();
        let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
            Ok(bytes) => bytes,
            Err(_) => return reject_oversized(&method, &uri),
        };
        let logged = serde_json::from_slice::<serde_json::Value>(&bytes)
            .map(|value| value.to_string())
            .unwrap_or_default();
        (Request::from_parts(parts, Body::from(bytes)), logged)
    } else {
        (req, String::new())
    };

    let response = next.run(req).await;

    let length = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok().map(str::to_string))
        .or_else(|| response.body().size_hint().exact().map(|n| n.to_string()))
        .unwrap_or_else(|| "-".to_string());

    info!(
        "{} {} {} {} - {:.3} ms {}",
        method,
        uri,
        response.status().as_u16(),
        length,
        started.elapsed().as_secs_f64() * 1000.0,
        logged_body
    );

    response
}

fn reject_oversized(method: &Method, uri: &Uri) -> Response {
    info!("{} {} 413 - body over {} bytes", method, uri, MAX_BODY_BYTES);
    Error::PayloadTooLarge {
        limit: MAX_BODY_BYTES,
    }
    .into_response()
}
