//! HTTP surface: the site index and the lettings and profiles namespaces.
//!
//! Every outcome is a JSON document. Misses of any kind (unknown id, unknown username,
//! a user without a profile, a path no route matches) render the same 404 body; any
//! fault, panics included, renders the same 500 body.

pub mod error;
pub mod index;
pub mod lettings;
pub mod profiles;
pub mod views;

use crate::clients::{LettingsClient, ProfilesClient};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Clients shared by every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub lettings: LettingsClient,
    pub profiles: ProfilesClient,
}

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(index::index))
        .route("/lettings/", get(lettings::index))
        .route("/lettings/{letting_id}/", get(lettings::letting))
        .route("/profiles/", get(profiles::index))
        .route("/profiles/{username}/", get(profiles::profile))
        .with_state(state);
    with_error_boundary(routes)
}

/// Wraps routes in the 404 fallbacks, panic catching and request tracing.
///
/// A known path requested with an unsupported method is unmatched too.
fn with_error_boundary(routes: Router) -> Router {
    routes
        .method_not_allowed_fallback(error::not_found)
        .fallback(error::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_panic_renders_fixed_500() {
        async fn explode() -> &'static str {
            panic!("handler blew up with secret detail")
        }
        let app = with_error_boundary(Router::new().route("/boom/", get(explode)));

        let request = Request::builder().uri("/boom/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({"status": 500, "error": "Internal Server Error"}));
    }

    #[tokio::test]
    async fn test_fallback_renders_fixed_404() {
        let app = with_error_boundary(Router::new());

        let request = Request::builder().uri("/nowhere").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({"status": 404, "error": "Not Found"}));
    }

    #[tokio::test]
    async fn test_wrong_method_renders_fixed_404() {
        let app = with_error_boundary(Router::new().route("/only-get/", get(|| async { "ok" })));

        let request = Request::builder()
            .method("DELETE")
            .uri("/only-get/")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({"status": 404, "error": "Not Found"}));
    }
}
