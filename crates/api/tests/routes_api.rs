//! Integration tests for the demo routes, exercised through the full router.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_string, content_type, get, post_raw};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: GET /health returns a success envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_success_envelope() {
    let response = get(common::build_test_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), Some("application/json"));

    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["status"], "ok");
    assert!(json["data"]["version"].is_string());
}

// ---------------------------------------------------------------------------
// Test: GET /users/1 renders the typed payload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_existing_user() {
    let response = get(common::build_test_app(), "/users/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response).await,
        r#"{"status":"success","data":{"id":1,"name":"foo"}}"#
    );
}

#[tokio::test]
async fn get_missing_user_is_a_fail_envelope() {
    let response = get(common::build_test_app(), "/users/2").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(content_type(&response), Some("application/json"));

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({"status": "fail", "data": {"code": "NOT_FOUND", "message": "user 2"}})
    );
}

// ---------------------------------------------------------------------------
// Test: POST /users goes through the write-once wrapper
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_user_without_name_fails() {
    let response = post_raw(common::build_test_app(), "/users", r#"{"name":"  "}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_string(response).await,
        r#"{"status":"fail","data":{"name":"missing"}}"#
    );
}

#[tokio::test]
async fn create_user_with_unparsable_body_fails() {
    let response = post_raw(common::build_test_app(), "/users", "not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["status"], "fail");
}

#[tokio::test]
async fn create_user_succeeds() {
    let response = post_raw(common::build_test_app(), "/users", r#"{"name":" bar "}"#).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(content_type(&response), Some("application/json"));
    assert_eq!(
        body_string(response).await,
        r#"{"status":"success","data":{"name":"bar"}}"#
    );
}

// ---------------------------------------------------------------------------
// Test: POST /echo/{code} classifies by status code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_classifies_by_status_code() {
    let cases = [
        (200, r#"{"foo":"bar"}"#, r#"{"status":"success","data":{"foo":"bar"}}"#),
        (400, r#"{"foo":"bar"}"#, r#"{"status":"fail","data":{"foo":"bar"}}"#),
        (503, "something wrong", r#"{"status":"error","message":"something wrong"}"#),
        (302, "[1,2]", r#"{"status":"success","data":[1,2]}"#),
    ];

    for (code, input, expected) in cases {
        let response = post_raw(common::build_test_app(), &format!("/echo/{code}"), input).await;

        assert_eq!(response.status().as_u16(), code, "input {input}");
        assert_eq!(body_string(response).await, expected, "input {input}");
    }
}

#[tokio::test]
async fn echo_invalid_json_keeps_status_with_empty_body() {
    let response = post_raw(common::build_test_app(), "/echo/200", "some invalid json").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), Some("application/json"));
    assert_eq!(body_string(response).await, "");
}

#[tokio::test]
async fn echo_rejects_informational_code() {
    for code in [100, 101, 199] {
        let response = post_raw(common::build_test_app(), &format!("/echo/{code}"), "{}").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "code {code}");

        let json = body_json(response).await;
        assert_eq!(json["data"]["message"], format!("invalid status code {code}"));
    }
}

#[tokio::test]
async fn echo_rejects_out_of_range_code() {
    let response = post_raw(common::build_test_app(), "/echo/42", "{}").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["status"], "fail");
    assert_eq!(json["data"]["code"], "BAD_REQUEST");
    assert_eq!(json["data"]["message"], "invalid status code 42");
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404_fail_envelope() {
    let response = get(common::build_test_app(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(content_type(&response), Some("application/json"));
    assert_eq!(
        body_json(response).await,
        json!({
            "status": "fail",
            "data": {"code": "NOT_FOUND", "message": "route /this-route-does-not-exist"}
        })
    );
}

// ---------------------------------------------------------------------------
// Test: Malformed path parameters are fail envelopes, not plain text
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_user_id_is_fail_envelope() {
    let response = get(common::build_test_app(), "/users/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(content_type(&response), Some("application/json"));

    let json = body_json(response).await;
    assert_eq!(json["status"], "fail");
    assert_eq!(json["data"]["code"], "BAD_REQUEST");
    assert!(json["data"]["message"].is_string());
}

#[tokio::test]
async fn non_numeric_echo_code_is_fail_envelope() {
    let response = post_raw(common::build_test_app(), "/echo/abc", "{}").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["status"], "fail");
}
