//! Integration tests for the report CRUD endpoints.
//!
//! Each test builds its own app over a mock database primed with the rows
//! the single underlying SQL statement would produce.

use actix_web::{http::StatusCode, test};
use sea_orm::MockExecResult;
use serde_json::{Value, json};

use weekly_report_server::db::DbPool;
use weekly_report_server::entity::weekly_report::Model;

use super::helpers::{create_test_app, mock_db, sample_report};

#[actix_rt::test]
async fn test_create_report_returns_stored_object() {
    let conn = mock_db()
        .append_query_results([vec![sample_report(1)]])
        .into_connection();
    let app = create_test_app(DbPool::from_connection(conn)).await;

    let req = test::TestRequest::post()
        .uri("/api/reports")
        .set_json(json!({
            "weekOwner": "alice",
            "weekStart": "2024-01-01",
            "weekEnd": "2024-01-07",
            "teamData": {"bob": {"assigned": 5, "completed": 3}}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], json!(1));
    assert!(body["createdAt"].is_string());
    assert_eq!(body["teamData"]["bob"]["completed"], json!(3));
    assert_eq!(body["weekOwner"], json!("alice"));
}

#[actix_rt::test]
async fn test_create_report_malformed_body_is_400() {
    let conn = mock_db().into_connection();
    let app = create_test_app(DbPool::from_connection(conn)).await;

    let req = test::TestRequest::post()
        .uri("/api/reports")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_list_reports_empty_table() {
    let conn = mock_db()
        .append_query_results([Vec::<Model>::new()])
        .into_connection();
    let app = create_test_app(DbPool::from_connection(conn)).await;

    let req = test::TestRequest::get().uri("/api/reports").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_rt::test]
async fn test_list_reports_newest_first() {
    // The repository orders by created_at DESC; the handler must preserve it
    let mut older = sample_report(1);
    older.created_at = older.created_at - chrono::Duration::hours(2);
    let newer = sample_report(2);

    let conn = mock_db()
        .append_query_results([vec![newer, older]])
        .into_connection();
    let app = create_test_app(DbPool::from_connection(conn)).await;

    let req = test::TestRequest::get().uri("/api/reports").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let reports = body.as_array().expect("response should be a JSON array");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["id"], json!(2));
    assert_eq!(reports[1]["id"], json!(1));
}

#[actix_rt::test]
async fn test_list_storage_error_is_500() {
    let conn = mock_db()
        .append_query_errors([sea_orm::DbErr::Custom("connection reset".to_string())])
        .into_connection();
    let app = create_test_app(DbPool::from_connection(conn)).await;

    let req = test::TestRequest::get().uri("/api/reports").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("Database error:"), "body was: {text}");
}

#[actix_rt::test]
async fn test_get_storage_error_is_500() {
    let conn = mock_db()
        .append_query_errors([sea_orm::DbErr::Custom("connection reset".to_string())])
        .into_connection();
    let app = create_test_app(DbPool::from_connection(conn)).await;

    let req = test::TestRequest::get().uri("/api/reports/1").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("Database error:"), "body was: {text}");
}

#[actix_rt::test]
async fn test_get_report_round_trips_client_fields() {
    let conn = mock_db()
        .append_query_results([vec![sample_report(1)]])
        .into_connection();
    let app = create_test_app(DbPool::from_connection(conn)).await;

    let req = test::TestRequest::get().uri("/api/reports/1").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["weekOwner"], json!("alice"));
    assert_eq!(body["weekStart"], json!("2024-01-01"));
    assert_eq!(body["weekEnd"], json!("2024-01-07"));
    assert_eq!(
        body["teamData"],
        json!({"bob": {"assigned": 5, "completed": 3}})
    );
}

#[actix_rt::test]
async fn test_get_missing_report_is_404() {
    let conn = mock_db()
        .append_query_results([Vec::<Model>::new()])
        .into_connection();
    let app = create_test_app(DbPool::from_connection(conn)).await;

    let req = test::TestRequest::get().uri("/api/reports/999").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("Report not found"));
}

#[actix_rt::test]
async fn test_get_non_numeric_id_is_400() {
    let conn = mock_db().into_connection();
    let app = create_test_app(DbPool::from_connection(conn)).await;

    let req = test::TestRequest::get().uri("/api/reports/abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("Invalid report ID"));
}

#[actix_rt::test]
async fn test_delete_report_confirms() {
    let conn = mock_db()
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let app = create_test_app(DbPool::from_connection(conn)).await;

    let req = test::TestRequest::delete()
        .uri("/api/reports/1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], json!("Report deleted successfully"));
}

#[actix_rt::test]
async fn test_delete_missing_report_is_404() {
    let conn = mock_db()
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let app = create_test_app(DbPool::from_connection(conn)).await;

    let req = test::TestRequest::delete()
        .uri("/api/reports/999")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_delete_non_numeric_id_is_400() {
    let conn = mock_db().into_connection();
    let app = create_test_app(DbPool::from_connection(conn)).await;

    let req = test::TestRequest::delete()
        .uri("/api/reports/abc")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let conn = mock_db().into_connection();
    let app = create_test_app(DbPool::from_connection(conn)).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!("healthy"));
}
