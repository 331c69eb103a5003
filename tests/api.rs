use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use http_workbench::client::{TransportFuture, TransportRequest, TransportResponse};
use http_workbench::{api_router, AppError, HistoryLog, Transport, Workbench};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

struct CannedTransport {
    fail: bool,
}

impl Transport for CannedTransport {
    fn execute(&self, request: TransportRequest) -> TransportFuture<'_> {
        let fail = self.fail;
        Box::pin(async move {
            if fail {
                return Err(AppError::Transport("connection refused".to_string()));
            }
            Ok(TransportResponse {
                status: 200,
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: format!(r#"{{"method":"{}"}}"#, request.method),
            })
        })
    }
}

fn app_with(dir: &tempfile::TempDir, fail: bool) -> Router {
    let workbench = Workbench::new(
        CannedTransport { fail },
        HistoryLog::new(dir.path().join("history.txt")),
    );
    api_router(Arc::new(workbench))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- health ---

#[tokio::test]
async fn health_reports_ok() {
    let dir = tempfile::tempdir().unwrap();
    let resp = app_with(&dir, false).oneshot(get("/api/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

// --- curl ---

#[tokio::test]
async fn generate_curl_from_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    let resp = app_with(&dir, false)
        .oneshot(json_request(
            "POST",
            "/api/curl/generate",
            r#"{"method":"POST","url":"http://x/api","headers":["Content-Type: application/json"],"bodyType":"Raw","rawBody":"{\"a\":1}"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(
        body["curl"],
        r#"curl -X POST "http://x/api" -H "Content-Type: application/json" -d '{"a":1}'"#
    );
}

#[tokio::test]
async fn parse_curl_returns_result_and_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    let resp = app_with(&dir, false)
        .oneshot(json_request(
            "POST",
            "/api/curl/parse",
            r#"{"command":"curl -X PUT 'https://x/y' -H 'A: 1' -d '{}'"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["method"], "PUT");
    assert_eq!(body["url"], "https://x/y");
    assert_eq!(body["headers"][0], "A:1");
    assert_eq!(body["body"], "{}");
    assert_eq!(body["request"]["bodyType"], "Raw");
    assert_eq!(body["request"]["rawBody"], "{}");
}

#[tokio::test]
async fn parse_empty_curl_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let resp = app_with(&dir, false)
        .oneshot(json_request("POST", "/api/curl/parse", r#"{"command":""}"#))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["method"], "GET");
    assert!(body.get("url").is_none());
    assert!(body.get("body").is_none());
    assert_eq!(body["headers"].as_array().unwrap().len(), 0);
}

// --- format ---

#[tokio::test]
async fn format_pretty_prints_json() {
    let dir = tempfile::tempdir().unwrap();
    let resp = app_with(&dir, false)
        .oneshot(json_request(
            "POST",
            "/api/format",
            r#"{"body":"{\"a\":1,\"b\":[1,2]}"}"#,
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(
        body["formatted"],
        "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}"
    );
}

// --- send ---

#[tokio::test]
async fn send_formats_response_and_records_history() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(&dir, false);

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/send",
            r#"{"method":"DELETE","url":"http://x/items/1","headers":["Accept: */*"]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], 200);
    assert_eq!(body["historySaved"], true);
    assert_eq!(
        body["response"],
        "Status: 200\nHeaders:\n content-type: application/json\n\nBody:\n{\n  \"method\": \"DELETE\"\n}\n"
    );

    let resp = app.oneshot(get("/api/history")).await.unwrap();
    let body = body_json(resp).await;
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["line"], "DELETE@@http://x/items/1@@Accept: */*@@Raw@@ @@");
    assert_eq!(entries[0]["request"]["method"], "DELETE");
}

#[tokio::test]
async fn send_without_url_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let resp = app_with(&dir, false)
        .oneshot(json_request("POST", "/api/send", r#"{"method":"GET","url":""}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn transport_failure_is_reported_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(&dir, true);
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/send", r#"{"method":"GET","url":"http://x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["message"], "Request failed: connection refused");

    let resp = app.oneshot(get("/api/history/raw")).await.unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["lines"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn missing_form_file_is_resource_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.bin");
    let payload = serde_json::json!({
        "method": "POST",
        "url": "http://x/upload",
        "bodyType": "Form-Data",
        "formFields": [{"name": "f", "value": missing.to_string_lossy(), "isFile": true}],
    });
    let resp = app_with(&dir, false)
        .oneshot(json_request("POST", "/api/send", &payload.to_string()))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "RESOURCE_ERROR");
}

// --- history ---

#[tokio::test]
async fn saved_history_round_trips_through_raw_lines() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(&dir, false);

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/history",
            r#"{"method":"POST","url":"http://x","headers":["A: 1","B: 2"],"bodyType":"Form-Data","formFields":[{"name":"k","value":"v","isFile":false}]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.clone().oneshot(get("/api/history/raw")).await.unwrap();
    let body = body_json(resp).await;
    assert_eq!(
        body["lines"][0],
        "POST@@http://x@@A: 1\\nB: 2@@Form-Data@@ @@k,v,false;"
    );

    let resp = app.oneshot(get("/api/history")).await.unwrap();
    let body = body_json(resp).await;
    let request = &body["entries"][0]["request"];
    assert_eq!(request["headers"][1], "B: 2");
    assert_eq!(request["formFields"][0]["name"], "k");
    assert_eq!(request["bodyType"], "Form-Data");
}
