//! Handler for the landing page.

use axum::{extract::State, response::Html, Extension};
use tracing::instrument;

use crate::error::{AppError, AppErrorResponse, ResultExt};
use crate::middleware::RequestId;
use crate::state::AppState;
use crate::templates::site_context;

/// Landing page handler.
///
/// Renders the home template inside the base layout. The context is built
/// entirely from compile-time constants, so the output is the same for
/// every request.
#[instrument(name = "home::index", skip(state, request_id))]
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Html<String>, AppErrorResponse> {
    let context = site_context();

    let html = state
        .tera
        .render("home.html", &context)
        .map_err(AppError::from)
        .with_request_id(&request_id)?;
    Ok(Html(html))
}
