//! Per-request tracing span with a unique ID.
//!
//! Every request gets a fresh UUID v4 and a span carrying it, so the log
//! lines of one request can be picked out of interleaved CloudWatch output.
//! Handlers that need the ID read it back from request extensions.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// The per-request ID, stored in request extensions.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Assigns a request ID and runs the rest of the stack inside its span.
///
/// Installed as the outermost layer in `create_router` so the span also
/// covers routing and any inner middleware.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    request.extensions_mut().insert(RequestId(request_id));

    async move {
        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
