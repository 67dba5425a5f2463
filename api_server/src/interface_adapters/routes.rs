use crate::interface_adapters::handlers::base::{create_example, hello};
use crate::interface_adapters::handlers::forty_two::forty_two;
use crate::interface_adapters::handlers::game::{create_game_session, validate_token};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

// Build the HTTP router for the public API.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/hello", get(hello))
        .route("/api/example", post(create_example))
        .route("/api/forty-two", get(forty_two))
        .route("/api/token", post(create_game_session))
        .route("/api/validate-token", post(validate_token))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::SessionBroker;
    use crate::use_cases::test_support::SequenceTokens;
    use axum::body::{Body, to_bytes};
    use axum::http::{HeaderValue, Request, StatusCode};
    use axum::response::Response;
    use serde_json::Value;
    use tower::ServiceExt;

    fn build_test_app() -> Router {
        app(Arc::new(AppState::new(SessionBroker::new(
            SequenceTokens::new(),
        ))))
    }

    async fn json_body(response: Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        serde_json::from_slice(&body).expect("expected json body")
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .expect("expected request to build")
    }

    fn post_json(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .expect("expected request to build")
    }

    fn get_forty_two(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri("/api/forty-two");
        if let Some(token) = token {
            builder = builder.header("token", token);
        }
        builder
            .body(Body::empty())
            .expect("expected request to build")
    }

    #[tokio::test]
    async fn when_hello_is_requested_then_returns_greeting() {
        let app = build_test_app();

        let request = Request::builder()
            .method("GET")
            .uri("/api/hello")
            .body(Body::empty())
            .expect("expected request to build");

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["message"], "Hello from mnist API!");
    }

    #[tokio::test]
    async fn when_token_is_requested_twice_then_second_caller_joins_first_room() {
        let app = build_test_app();

        let first = app.clone().oneshot(post_empty("/api/token")).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        let first = json_body(first).await;
        assert_eq!(first["player_number"], 1);
        assert_eq!(first["status"], "waiting");

        let second = app.clone().oneshot(post_empty("/api/token")).await.unwrap();
        assert_eq!(second.status(), StatusCode::OK);
        let second = json_body(second).await;
        assert_eq!(second["player_number"], 2);
        assert_eq!(second["status"], "full");
        assert_eq!(second["room_id"], first["room_id"]);
        assert_ne!(second["token"], first["token"]);

        let third = app.oneshot(post_empty("/api/token")).await.unwrap();
        let third = json_body(third).await;
        assert_eq!(third["player_number"], 1);
        assert_eq!(third["status"], "waiting");
        assert_ne!(third["room_id"], first["room_id"]);
    }

    #[tokio::test]
    async fn when_forty_two_has_no_token_then_returns_sentinel() {
        let app = build_test_app();

        let response = app.oneshot(get_forty_two(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["value"], 43);
    }

    #[tokio::test]
    async fn when_forty_two_has_unknown_token_then_returns_sentinel() {
        let app = build_test_app();

        let response = app
            .oneshot(get_forty_two(Some("missing-token")))
            .await
            .unwrap();

        let payload = json_body(response).await;
        assert_eq!(payload["value"], 43);
    }

    #[tokio::test]
    async fn when_forty_two_has_issued_token_then_returns_42() {
        let app = build_test_app();

        let issued = app.clone().oneshot(post_empty("/api/token")).await.unwrap();
        let issued = json_body(issued).await;
        let token = issued["token"].as_str().expect("expected token string");

        let response = app.oneshot(get_forty_two(Some(token))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["value"], 42);
    }

    #[tokio::test]
    async fn when_forty_two_token_header_is_not_visible_ascii_then_returns_sentinel() {
        let app = build_test_app();

        // Obs-text bytes are legal in a header value but fail `to_str`.
        let request = Request::builder()
            .method("GET")
            .uri("/api/forty-two")
            .header(
                "token",
                HeaderValue::from_bytes(b"id-\xff").expect("expected obs-text header value"),
            )
            .body(Body::empty())
            .expect("expected request to build");

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["value"], 43);
    }

    #[tokio::test]
    async fn when_validate_token_is_issued_then_returns_seat_and_room_status() {
        let app = build_test_app();

        // SequenceTokens draws the token first, then the room id.
        let issued = app.clone().oneshot(post_empty("/api/token")).await.unwrap();
        let issued = json_body(issued).await;
        assert_eq!(issued["token"], "id-0");
        app.clone().oneshot(post_empty("/api/token")).await.unwrap();

        let response = app
            .oneshot(post_json("/api/validate-token", r#"{"token":"id-0"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["valid"], true);
        assert_eq!(payload["room_id"], issued["room_id"]);
        assert_eq!(payload["player_number"], 1);
        assert_eq!(payload["status"], "full");
    }

    #[tokio::test]
    async fn when_validate_token_is_unknown_then_returns_401_and_error_message() {
        let app = build_test_app();

        let response = app
            .oneshot(post_json(
                "/api/validate-token",
                r#"{"token":"missing-token"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let payload = json_body(response).await;
        assert_eq!(payload["message"], "invalid token");
    }

    #[tokio::test]
    async fn when_validate_token_payload_is_missing_token_then_returns_422() {
        let app = build_test_app();

        let response = app
            .oneshot(post_json("/api/validate-token", r#"{}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn when_example_payload_is_valid_then_echoes_name_with_empty_items() {
        let app = build_test_app();

        let response = app
            .oneshot(post_json(
                "/api/example",
                r#"{"name":"Ada","email":null,"preferences":{"theme":"dark"}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["name"], "Ada");
        assert_eq!(payload["items"], serde_json::json!([]));
        assert!(payload["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(
            payload["created_at"]
                .as_str()
                .is_some_and(|ts| ts.ends_with('Z'))
        );
    }

    #[tokio::test]
    async fn when_example_name_is_empty_then_returns_200_and_echoes_it() {
        let app = build_test_app();

        let response = app
            .oneshot(post_json("/api/example", r#"{"name":""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["name"], "");
        assert_eq!(payload["items"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn when_example_payload_is_missing_name_then_returns_422() {
        let app = build_test_app();

        let response = app
            .oneshot(post_json("/api/example", r#"{"email":"ada@example.com"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn when_token_route_is_called_with_get_then_returns_405() {
        let app = build_test_app();

        let request = Request::builder()
            .method("GET")
            .uri("/api/token")
            .body(Body::empty())
            .expect("expected request to build");

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn when_api_route_does_not_exist_then_returns_404() {
        let app = build_test_app();

        let response = app
            .oneshot(post_empty("/api/does-not-exist"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
