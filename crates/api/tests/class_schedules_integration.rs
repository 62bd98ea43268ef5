//! Integration tests for the class schedule listing.

mod common;

use axum::http::StatusCode;
use common::{get_request, parse_response_body, seeded_app, send};
use domain::models::{DayOfWeek, NewClassSchedule};
use persistence::repositories::ClassScheduleRepository;

#[tokio::test]
async fn test_list_all_schedules_enriched() {
    let (app, _store) = seeded_app().await;

    let response = send(&app, get_request("/api/class-schedules")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let schedules = body.as_array().unwrap();
    assert_eq!(schedules.len(), 4);

    let first = &schedules[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["dayOfWeek"], "Tuesday");
    assert_eq!(first["startTime"], "07:00");
    assert_eq!(first["capacity"], 20);
    assert_eq!(first["booked"], 12);
    assert_eq!(first["class"]["name"], "HIIT Training");
    assert_eq!(first["trainer"]["name"], "John Davis");
}

#[tokio::test]
async fn test_filter_by_day() {
    let (app, store) = seeded_app().await;
    ClassScheduleRepository::new(store)
        .create(NewClassSchedule {
            class_id: 2,
            day_of_week: DayOfWeek::Monday,
            start_time: "06:30".to_string(),
            end_time: "07:30".to_string(),
            capacity: 10,
            booked: 0,
        })
        .await
        .unwrap();

    let body = parse_response_body(send(&app, get_request("/api/class-schedules?day=Tuesday")).await).await;
    let days: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["dayOfWeek"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(days, vec!["Tuesday"; 4]);

    let monday = parse_response_body(send(&app, get_request("/api/class-schedules?day=monday")).await).await;
    assert_eq!(monday.as_array().unwrap().len(), 1);
    assert_eq!(monday[0]["class"]["name"], "Yoga Flow");
}

#[tokio::test]
async fn test_unknown_day_yields_empty_list() {
    let (app, _store) = seeded_app().await;

    let response = send(&app, get_request("/api/class-schedules?day=Funday")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_blank_day_means_no_filter() {
    let (app, _store) = seeded_app().await;

    let body = parse_response_body(send(&app, get_request("/api/class-schedules?day=")).await).await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_dangling_class_reference_is_null() {
    let (app, store) = seeded_app().await;
    let schedule = ClassScheduleRepository::new(store)
        .create(NewClassSchedule {
            class_id: 404,
            day_of_week: DayOfWeek::Sunday,
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            capacity: 5,
            booked: 0,
        })
        .await
        .unwrap();

    let response = send(&app, get_request(&format!("/api/class-schedules/{}", schedule.id))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["classId"], 404);
    assert!(body["class"].is_null());
    assert!(body["trainer"].is_null());
}

#[tokio::test]
async fn test_get_schedule_not_found_and_invalid_id() {
    let (app, _store) = seeded_app().await;

    let missing = send(&app, get_request("/api/class-schedules/99")).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let invalid = send(&app, get_request("/api/class-schedules/abc")).await;
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_response_body(invalid).await["message"], "Invalid ID format");
}
