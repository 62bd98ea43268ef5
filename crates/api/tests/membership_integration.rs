//! Integration tests for membership registration and member lookups.

mod common;

use axum::http::{Method, StatusCode};
use common::{get_request, json_request, parse_response_body, raw_post, seeded_app, send, DEMO_USER_ID};
use serde_json::json;

#[tokio::test]
async fn test_register_membership() {
    let (app, _store) = seeded_app().await;

    let response = send(
        &app,
        json_request(
            Method::POST,
            "/api/membership-registration",
            json!({"userId": DEMO_USER_ID, "planId": 2}),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["userId"], DEMO_USER_ID);
    assert_eq!(body["planId"], 2);
    assert_eq!(body["status"], "active");
    assert!(body["startDate"].as_str().is_some());
    assert!(body["endDate"].is_null());
}

#[tokio::test]
async fn test_register_membership_unknown_user() {
    let (app, _store) = seeded_app().await;

    let response = send(
        &app,
        json_request(
            Method::POST,
            "/api/membership-registration",
            json!({"userId": 42, "planId": 1}),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(parse_response_body(response).await["message"], "User not found");
}

#[tokio::test]
async fn test_register_membership_unknown_plan() {
    let (app, _store) = seeded_app().await;

    let response = send(
        &app,
        json_request(
            Method::POST,
            "/api/membership-registration",
            json!({"userId": DEMO_USER_ID, "planId": 9}),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        parse_response_body(response).await["message"],
        "Membership plan not found"
    );
}

#[tokio::test]
async fn test_register_membership_malformed() {
    let (app, _store) = seeded_app().await;

    let response = send(&app, raw_post("/api/membership-registration", r#"{"planId": 1}"#)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_response_body(response).await["error"], "validation_error");
}

#[tokio::test]
async fn test_list_user_membership_registrations() {
    let (app, _store) = seeded_app().await;

    for plan_id in [1, 3] {
        let response = send(
            &app,
            json_request(
                Method::POST,
                "/api/membership-registration",
                json!({"userId": DEMO_USER_ID, "planId": plan_id}),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(&app, get_request("/api/users/1/membership-registrations")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    let plans: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["planId"].as_i64().unwrap())
        .collect();
    assert_eq!(plans, vec![1, 3]);
}

#[tokio::test]
async fn test_get_user_hides_password_hash() {
    let (app, _store) = seeded_app().await;

    let response = send(&app, get_request("/api/users/1")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["username"], "member");
    assert_eq!(body["name"], "Test Member");
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_user_lookups_not_found() {
    let (app, _store) = seeded_app().await;

    for uri in [
        "/api/users/2",
        "/api/users/2/bookings",
        "/api/users/2/membership-registrations",
    ] {
        let response = send(&app, get_request(uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri {uri}");
        assert_eq!(parse_response_body(response).await["message"], "User not found");
    }
}

#[tokio::test]
async fn test_new_user_starts_with_no_bookings() {
    let (app, _store) = seeded_app().await;

    let response = send(&app, get_request("/api/users/1/bookings")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await, json!([]));
}
