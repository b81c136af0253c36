//! Handler tests for Companies domain
//!
//! These tests drive the companies router over the in-memory repository:
//! - Request deserialization (camelCase JSON → DTOs)
//! - Response serialization and wire formats
//! - HTTP status codes and error bodies

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::ErrorResponse;
use domain_companies::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    let service = CompanyService::new(InMemoryCompanyRepository::new());
    handlers::router(service)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, body: Value) -> CompanyDto {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/create", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_company_returns_201() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/create",
            json!({
                "name": "Acme",
                "work": ["web", "design"],
                "socials": {"x": "acme"}
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Acme");
    assert_eq!(body["work"], json!(["web", "design"]));
    assert_eq!(body["socials"], json!({"x": "acme"}));
    assert_eq!(body["createdAt"], body["updatedAt"]);
    assert!(body["createdAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_create_company_validates_input() {
    let app = app();

    let response = app
        .oneshot(json_request("POST", "/create", json!({"name": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "VALIDATION_ERROR");
    assert!(error.details.is_some());
}

#[tokio::test]
async fn test_create_company_with_blank_name_returns_400() {
    let app = app();

    let response = app
        .oneshot(json_request("POST", "/create", json!({"name": "   "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert!(error.message.contains("'name' is required"));
}

#[tokio::test]
async fn test_duplicate_reference_id_returns_409() {
    let app = app();
    let first = create(&app, json!({"name": "Acme", "referenceId": "ACME-1"})).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/create",
            json!({"name": "Acme Two", "referenceId": "ACME-1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "CONFLICT");

    let response = app.oneshot(empty_request("GET", "/all")).await.unwrap();
    let all: Vec<CompanyDto> = json_body(response.into_body()).await;
    assert_eq!(all, vec![first]);
}

#[tokio::test]
async fn test_oversized_work_returns_capacity_error() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/create",
            json!({"name": "Acme", "work": ["w".repeat(600), "w".repeat(600)]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "CAPACITY_EXCEEDED");
    assert!(error.message.contains("work"));
}

#[tokio::test]
async fn test_get_unknown_company_returns_404() {
    let response = app().oneshot(empty_request("GET", "/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "NOT_FOUND");
}

#[tokio::test]
async fn test_non_numeric_id_returns_400() {
    let response = app().oneshot(empty_request("GET", "/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "INVALID_ID");
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let app = app();
    let created = create(
        &app,
        json!({"name": "Acme", "contactPerson": "Wile E.", "work": ["web"]}),
    )
    .await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/update/{}", created.id),
            json!({"status": "active"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: CompanyDto = json_body(response.into_body()).await;
    assert_eq!(updated.status.as_deref(), Some("active"));
    assert_eq!(updated.name, "Acme");
    assert_eq!(updated.contact_person.as_deref(), Some("Wile E."));
    assert_eq!(updated.work, vec!["web"]);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_with_null_clears_optional_field() {
    let app = app();
    let created = create(&app, json!({"name": "Acme", "contactPerson": "Wile E."})).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/update/{}", created.id),
            json!({"contactPerson": null, "name": null}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: CompanyDto = json_body(response.into_body()).await;
    assert_eq!(updated.contact_person, None);
    assert_eq!(updated.name, "Acme");
}

#[tokio::test]
async fn test_update_unknown_company_returns_404() {
    let response = app()
        .oneshot(json_request("PUT", "/update/5", json!({"status": "active"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_company_returns_204_then_404() {
    let app = app();
    let created = create(&app, json!({"name": "Acme"})).await;
    let uri = format!("/delete/{}", created.id);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_returns_companies_in_id_order() {
    let app = app();
    create(&app, json!({"name": "First"})).await;
    create(&app, json!({"name": "Second"})).await;

    let response = app.oneshot(empty_request("GET", "/all")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let all: Vec<CompanyDto> = json_body(response.into_body()).await;
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}
