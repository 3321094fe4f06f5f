use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(request: Request<Body>) -> Response {
    cadenza_server::router()
        .oneshot(request)
        .await
        .expect("router is infallible")
}

async fn get(uri: &str) -> Response {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, body: &'static str) -> Response {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

#[tokio::test]
async fn test_health() {
    let response = get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json; charset=UTF-8"
    );
    assert_eq!(
        body_json(response).await,
        json!({"code": 200, "data": {"status": "ok"}})
    );
}

#[tokio::test]
async fn test_status_uses_reason_phrase() {
    let response = get("/status/404").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"code": 404, "data": "Not Found"})
    );
}

#[tokio::test]
async fn test_status_unregistered_code() {
    let response = get("/status/299").await;

    assert_eq!(response.status().as_u16(), 299);
    assert_eq!(body_json(response).await, json!({"code": 299, "data": ""}));
}

#[tokio::test]
async fn test_status_rejects_invalid_code() {
    for uri in ["/status/abc", "/status/42", "/status/1000", "/status/100", "/status/199"] {
        let response = get(uri).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = body_json(response).await;
        assert_eq!(body["code"], 400);
        assert!(body["data"].as_str().unwrap().starts_with("invalid status code"));
    }
}

#[tokio::test]
async fn test_echo_returns_body_as_data() {
    let response = post("/echo/201", r#"{"id": 1, "tags": ["a"]}"#).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({"code": 201, "data": {"id": 1, "tags": ["a"]}})
    );
}

#[tokio::test]
async fn test_echo_explicit_null() {
    let response = post("/echo/200", "null").await;

    assert_eq!(body_json(response).await, json!({"code": 200, "data": null}));
}

#[tokio::test]
async fn test_echo_empty_body_uses_reason_phrase() {
    let response = post("/echo/503", "").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await,
        json!({"code": 503, "data": "Service Unavailable"})
    );
}

#[tokio::test]
async fn test_echo_invalid_json() {
    let response = post("/echo/200", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["data"].as_str().unwrap().starts_with("invalid JSON body"));
}

#[tokio::test]
async fn test_codes_lists_registry() {
    let response = get("/codes").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let codes = body["data"].as_array().expect("data is an array");
    assert_eq!(codes.len(), cadenza_core::STATUS_TABLE.len());
    assert!(codes.contains(&json!({"code": 418, "name": "Teapot", "reason": "I'm a teapot"})));
}

#[tokio::test]
async fn test_teapot() {
    let response = get("/teapot").await;

    assert_eq!(response.status().as_u16(), 418);
    assert_eq!(
        body_json(response).await,
        json!({"code": 418, "data": "I'm a teapot"})
    );
}

#[tokio::test]
async fn test_unknown_route_is_enveloped_404() {
    let response = get("/does/not/exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"code": 404, "data": "Not Found"})
    );
}

#[tokio::test]
async fn test_echo_rejects_informational_code() {
    let response = post("/echo/101", r#"{"upgrade": true}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], 400);
    assert!(body["data"].as_str().unwrap().starts_with("invalid status code"));
}
