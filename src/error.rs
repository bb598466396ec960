//! Application error types and their HTTP responses.
//!
//! `AppError` is the handler-level error enum; `AppErrorResponse` pairs it
//! with the request ID so the error log line can be correlated with the
//! request span that produced it.

use axum::{
    http::{header::CACHE_CONTROL, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::config::CACHE_CONTROL_ERROR;
use crate::middleware::RequestId;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Internal error: {:?}", self);
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        let body = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>Error {}</title>
</head>
<body>
    <main>
        <h1>Error {}</h1>
        <p>Internal server error</p>
        <a href="/">Return to homepage</a>
    </main>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
        );

        let mut response = (status, Html(body)).into_response();
        // Short error TTL so upstream caches recover quickly
        response
            .headers_mut()
            .insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_ERROR));
        response
    }
}

/// An `AppError` annotated with the request it occurred in.
#[derive(Debug)]
pub struct AppErrorResponse {
    error: AppError,
    request_id: RequestId,
}

impl IntoResponse for AppErrorResponse {
    fn into_response(self) -> Response {
        tracing::error!(
            request_id = %self.request_id.0,
            error = %self.error,
            "Request failed"
        );
        self.error.into_response()
    }
}

/// Extension trait for attaching the request ID to handler results.
pub trait ResultExt<T> {
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse>;
}

impl<T, E: Into<AppError>> ResultExt<T> for Result<T, E> {
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse> {
        self.map_err(|e| AppErrorResponse {
            error: e.into(),
            request_id: request_id.clone(),
        })
    }
}
