//! HTTP route handlers for the landing page frontend.
//!
//! Routes are organized per concern, with per-route Cache-Control headers.
//! The home page is static and gets a moderate cache duration; the health
//! probe is never cached so the orchestrator always sees a fresh answer.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HOME, HEALTH_PATH};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Home page - moderate cache, content only changes on redeploy
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route(HEALTH_PATH, get(health::health));

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::templates::init_templates;

    fn test_router() -> Router {
        let config: AppConfig = toml::from_str("[http]\nhost = \"127.0.0.1\"\nport = 3000\n")
            .expect("valid test config");
        let tera = init_templates().expect("templates load");
        create_router(AppState::new(config, tera))
    }

    #[tokio::test]
    async fn test_home_route_serves_page_with_cache_header() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cache = response.headers().get(CACHE_CONTROL).unwrap();
        assert_eq!(cache.to_str().unwrap(), CACHE_CONTROL_HOME);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Hello from Next.js on ECS!!!!!"));
    }

    #[tokio::test]
    async fn test_health_route_is_registered_and_uncached() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri(HEALTH_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        // Liveness probes must always see a fresh answer
        assert!(response.headers().get(CACHE_CONTROL).is_none());

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
