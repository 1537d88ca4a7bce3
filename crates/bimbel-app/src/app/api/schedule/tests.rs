//! Tests for the schedule endpoints.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use salvo::http::StatusCode;
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};
use uuid::Uuid;

use bimbel_db::db::enums::ScheduleStatus;
use bimbel_db::db::query::class::ClassPackage;
use bimbel_db::model::package::BimbelPackage;
use bimbel_service::schedule::InMemoryScheduleRepository;

use super::types::ScheduleResponse;
use crate::app::api::{CLASSES_ROUTE_PREFIX, SCHEDULES_ROUTE_PREFIX, routes};
use crate::error::ErrorResponse;
use crate::repository_handler::ScheduleRepositoryHandler;

const HOST: &str = "http://127.0.0.1:5800";

fn snapshot(class_id: Uuid, total_meetings: i32, time: &str, days: &[&str]) -> ClassPackage {
    let epoch = DateTime::<Utc>::UNIX_EPOCH;
    ClassPackage {
        class_id,
        package: BimbelPackage {
            id: Uuid::now_v7(),
            name: "Fisika SMA".to_string(),
            total_meetings,
            time: time.to_string(),
            created_at: epoch,
            updated_at: epoch,
        },
        day_names: days.iter().map(ToString::to_string).collect(),
    }
}

fn service(repo: Arc<InMemoryScheduleRepository>) -> Service {
    Service::new(
        Router::new()
            .hoop(ScheduleRepositoryHandler { repository: repo })
            .push(routes()),
    )
}

fn schedules_url() -> String {
    format!("{HOST}{SCHEDULES_ROUTE_PREFIX}")
}

fn class_schedules_url(class_id: &str) -> String {
    format!("{HOST}{CLASSES_ROUTE_PREFIX}/{class_id}/schedules")
}

#[test_log::test(tokio::test)]
async fn create_returns_created_entries() {
    let class_id = Uuid::now_v7();
    let repo = Arc::new(InMemoryScheduleRepository::new().with_class(snapshot(
        class_id,
        1,
        "1970-01-01T15:00:00Z",
        &["Senin", "Kamis"],
    )));
    let service = service(repo.clone());
    let started = Utc::now();

    let mut res = TestClient::post(schedules_url())
        .json(&serde_json::json!({ "class_id": class_id }))
        .send(&service)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::CREATED));
    let body: Vec<ScheduleResponse> = res.take_json().await.expect("json body");

    assert_eq!(body.len(), 8);
    assert_eq!(repo.schedule_count().await, 8);
    for (i, entry) in body.iter().enumerate() {
        assert_eq!(entry.class_id, class_id);
        assert_eq!(entry.meet, i32::try_from(i).unwrap() + 1);
        assert_eq!(entry.status, ScheduleStatus::Scheduled);
        assert!(entry.date > started);
        assert!(matches!(entry.date.weekday(), Weekday::Mon | Weekday::Thu));
        assert_eq!((entry.date.hour(), entry.date.minute()), (15, 0));
    }
    for pair in body.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[test_log::test(tokio::test)]
async fn create_unknown_class_is_404() {
    let service = service(Arc::new(InMemoryScheduleRepository::new()));

    let mut res = TestClient::post(schedules_url())
        .json(&serde_json::json!({ "class_id": Uuid::now_v7() }))
        .send(&service)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    let body = res.take_string().await.expect("body");
    assert!(body.contains("Not found"));
}

#[test_log::test(tokio::test)]
async fn create_with_bad_package_time_is_400() {
    let class_id = Uuid::now_v7();
    let repo = Arc::new(InMemoryScheduleRepository::new().with_class(snapshot(
        class_id,
        1,
        "not-a-date",
        &["Senin"],
    )));
    let service = service(repo.clone());

    let res = TestClient::post(schedules_url())
        .json(&serde_json::json!({ "class_id": class_id }))
        .send(&service)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    assert_eq!(repo.schedule_count().await, 0);
}

#[test_log::test(tokio::test)]
async fn create_with_malformed_body_is_400() {
    let service = service(Arc::new(InMemoryScheduleRepository::new()));

    let res = TestClient::post(schedules_url())
        .json(&serde_json::json!({ "class_id": "definitely-not-a-uuid" }))
        .send(&service)
        .await;
    assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

    let res = TestClient::post(schedules_url())
        .raw_json("{")
        .send(&service)
        .await;
    assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
}

#[test_log::test(tokio::test)]
async fn storage_failure_is_500_with_generic_message() {
    let class_id = Uuid::now_v7();
    let repo = Arc::new(
        InMemoryScheduleRepository::new().with_class(snapshot(class_id, 1, "15:00", &["Rabu"])),
    );
    repo.set_fail_writes(true);
    let service = service(repo);

    let mut res = TestClient::post(schedules_url())
        .json(&serde_json::json!({ "class_id": class_id }))
        .send(&service)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    let body = res.take_string().await.expect("body");
    assert!(body.contains("Internal server error"));
    assert!(!body.contains("simulated"));
}

#[test_log::test(tokio::test)]
async fn list_returns_generated_schedule() {
    let class_id = Uuid::now_v7();
    let repo = Arc::new(InMemoryScheduleRepository::new().with_class(snapshot(
        class_id,
        1,
        "09:30",
        &["Selasa"],
    )));
    let service = service(repo);

    let mut res = TestClient::get(class_schedules_url(&class_id.to_string()))
        .send(&service)
        .await;
    assert_eq!(res.status_code, Some(StatusCode::OK));
    let empty: Vec<ScheduleResponse> = res.take_json().await.expect("json body");
    assert!(empty.is_empty());

    let mut created = TestClient::post(schedules_url())
        .json(&serde_json::json!({ "class_id": class_id }))
        .send(&service)
        .await;
    let created: Vec<ScheduleResponse> = created.take_json().await.expect("json body");

    let mut res = TestClient::get(class_schedules_url(&class_id.to_string()))
        .send(&service)
        .await;
    assert_eq!(res.status_code, Some(StatusCode::OK));
    let listed: Vec<ScheduleResponse> = res.take_json().await.expect("json body");

    assert_eq!(listed, created);
    assert_eq!(listed.len(), 4);
}

#[test_log::test(tokio::test)]
async fn list_rejects_bad_ids_and_unknown_classes() {
    let service = service(Arc::new(InMemoryScheduleRepository::new()));

    let mut res = TestClient::get(class_schedules_url("abc"))
        .send(&service)
        .await;
    assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    let body: ErrorResponse = res.take_json().await.expect("json body");
    assert_eq!(body.error, "Bad request: Invalid class ID format");

    let res = TestClient::get(class_schedules_url(&Uuid::now_v7().to_string()))
        .send(&service)
        .await;
    assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn create_without_repository_is_500() {
    let service = Service::new(Router::new().push(routes()));

    let res = TestClient::post(schedules_url())
        .json(&serde_json::json!({ "class_id": Uuid::now_v7() }))
        .send(&service)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
}
