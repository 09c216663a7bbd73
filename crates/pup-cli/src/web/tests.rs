//! Router-level tests against real gateway sessions

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use pup_core::PupClient;
    use pup_core::demo::{DemoFlavor, FALLBACK_REPLIES};
    use pup_sdk::GatewaySession;

    use crate::test_support::{clear_pup_env, env_guard};
    use crate::web::build_app;

    fn demo_app() -> Router {
        build_app(Arc::new(GatewaySession::new(
            Some(PupClient::builder().with_demo_mode(true).build()),
            DemoFlavor::Fallback,
        )))
    }

    fn scripted_app() -> Router {
        build_app(Arc::new(GatewaySession::scripted()))
    }

    fn live_app(base_url: &str) -> Router {
        let client = PupClient::builder()
            .with_base_url(base_url)
            .with_api_key("test-api-key")
            .build();
        build_app(Arc::new(GatewaySession::new(
            Some(client),
            DemoFlavor::Fallback,
        )))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn request_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("router response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response bytes");
        let json: Value = serde_json::from_slice(&body).expect("response json");
        (status, json)
    }

    #[tokio::test]
    async fn test_root_banner_reports_demo_mode() {
        let _guard = env_guard();
        clear_pup_env();

        let (status, body) = request_json(demo_app(), get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], json!("Alberto the Code Puppy"));
        assert_eq!(body["version"], json!(pup_core::VERSION));
        assert_eq!(body["connected"], json!(false));
        assert_eq!(body["demo_mode"], json!(true));
    }

    #[tokio::test]
    async fn test_chat_route_serves_canned_reply() {
        let _guard = env_guard();
        clear_pup_env();

        let (status, body) =
            request_json(demo_app(), post_json("/api/chat", json!({"message": "hello"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        let reply = body["response"].as_str().expect("reply text");
        assert!(FALLBACK_REPLIES.contains(&reply));
    }

    #[tokio::test]
    async fn test_chat_route_serves_scripted_reply() {
        let _guard = env_guard();
        clear_pup_env();

        let (status, body) = request_json(
            scripted_app(),
            post_json("/api/chat", json!({"message": "tell me a joke"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        let reply = body["response"].as_str().expect("reply text");
        assert!(reply.contains("programmer"), "got {}", reply);
    }

    #[tokio::test]
    async fn test_chat_route_rejects_missing_message() {
        let _guard = env_guard();
        clear_pup_env();

        let response = demo_app()
            .oneshot(post_json("/api/chat", json!({"context": {}})))
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_status_route_reports_demo_shape() {
        let _guard = env_guard();
        clear_pup_env();

        let (status, body) = request_json(demo_app(), get("/api/status")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["available"], json!(true));
        assert_eq!(body["demo_mode"], json!(true));
        assert_eq!(body["connected"], json!(false));
        assert_eq!(body["message"], json!("Running in demo mode"));
    }

    #[tokio::test]
    async fn test_capability_and_agent_routes_in_demo_mode() {
        let _guard = env_guard();
        clear_pup_env();

        let (status, body) = request_json(demo_app(), get("/api/capabilities")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["chat"]));

        let (status, body) = request_json(demo_app(), get("/api/agents")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_health_route_reports_demo_mode() {
        let _guard = env_guard();
        clear_pup_env();

        let (status, body) = request_json(demo_app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "demo_mode"}));
    }

    #[tokio::test]
    async fn test_chat_route_proxies_live_backend() {
        let _guard = env_guard();
        clear_pup_env();

        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "response": "Woof! Live reply",
                "commands_executed": [],
                "execution_time": 0.2
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (status, body) = request_json(
            live_app(&mock_server.uri()),
            post_json("/api/chat", json!({"message": "hello"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], json!("Woof! Live reply"));
    }

    #[tokio::test]
    async fn test_health_route_reports_live_backend() {
        let _guard = env_guard();
        clear_pup_env();

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "available": true,
                "version": "1.4.2",
                "capabilities": []
            })))
            .mount(&mock_server)
            .await;

        let (status, body) = request_json(live_app(&mock_server.uri()), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "healthy"}));
    }
}
