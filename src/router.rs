use axum::Router;
use tower_http::cors::CorsLayer;

use crate::{controller, state::AppState};

/// Builds the application router.
///
/// Route modules are mounted under their fixed prefixes and the permissive
/// cross-origin policy wraps the whole tree, so every response (including
/// 404s) carries the CORS headers. JSON body parsing happens in the handlers'
/// `Json` extractors.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", controller::auth::router())
        .nest("/api/books", controller::books::router())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::{model::api::ErrorDto, service::token::TokenService};

    async fn test_app() -> Router {
        let db = test_utils::db::test_database().await;
        router().with_state(AppState::new(db, TokenService::new(b"test-secret")))
    }

    async fn error_body(response: axum::response::Response) -> ErrorDto {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Tests that the auth module is mounted under /api/auth.
    ///
    /// An empty JSON body reaches the login handler and fails its field
    /// validation, proving the route matched instead of falling through to
    /// the 404 fallback.
    ///
    /// Expected: 400 with the handler's validation message.
    #[tokio::test]
    async fn mounts_auth_module() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_body(response).await.error, "All fields are required");
    }

    /// Tests that the books module is mounted under /api/books.
    ///
    /// An unauthenticated request reaches the module's guard rather than the
    /// 404 fallback.
    ///
    /// Expected: 401 Unauthorized.
    #[tokio::test]
    async fn mounts_books_module() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/books")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    /// Tests that paths outside the two prefixes fall through to 404.
    ///
    /// Expected: 404 Not Found.
    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/movies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Tests that responses carry the permissive CORS allow-origin header.
    ///
    /// Expected: `access-control-allow-origin` present on a cross-origin
    /// request's response.
    #[tokio::test]
    async fn responses_carry_cors_headers() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/books")
                    .header(header::ORIGIN, "https://app.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    /// Tests that CORS preflight requests are answered.
    ///
    /// Expected: success status with allowed methods advertised.
    #[tokio::test]
    async fn answers_preflight_requests() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/books")
                    .header(header::ORIGIN, "https://app.example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }

    /// Tests that JSON bodies are parsed before handler logic runs.
    ///
    /// The register handler rejects the short password, which it can only do
    /// after the body has been parsed into a structured value.
    ///
    /// Expected: 400 with the password-length message.
    #[tokio::test]
    async fn parses_json_bodies() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/auth/register")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"username":"reader","email":"reader@example.com","password":"123"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error_body(response).await.error,
            "Password should be at least 6 characters long"
        );
    }

    /// Tests that the delete route sits behind the auth guard.
    ///
    /// A tampered token is rejected before the id is even parsed.
    ///
    /// Expected: 401 Unauthorized.
    #[tokio::test]
    async fn delete_requires_authentication() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/api/books/not-an-id")
                    .header(header::AUTHORIZATION, "Bearer tampered")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
