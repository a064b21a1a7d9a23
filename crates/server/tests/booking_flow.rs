use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use serde_json::{json, Value};
use tower::Service;

use server::routes::{self, ServerState};

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

async fn build_app() -> anyhow::Result<Router> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(routes::build_router(ServerState { db }, cors()))
}

/// Send one request and return status plus parsed JSON body (`Null` when empty).
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().call(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

#[tokio::test]
async fn root_and_health() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, "GET", "/", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["docs"], "/openapi.json");

    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/customers"].is_object());
    Ok(())
}

#[tokio::test]
async fn booking_scenario_without_cascade() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, customer) = send(&app, "POST", "/customers", Some(json!({"name": "Alice", "phone": "555-0100"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(customer["id"], 1);
    assert_eq!(customer["name"], "Alice");
    assert!(customer["created_at"].is_string());

    let (status, appt) = send(
        &app,
        "POST",
        "/appointments",
        Some(json!({"customer_id": 1, "date": "2024-01-10", "time": "10:00"})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(appt["status"], "pending");
    assert_eq!(appt["notes"], Value::Null);
    let appt_id = appt["id"].as_i64().unwrap();

    let (status, updated) = send(&app, "PUT", &format!("/appointments/{appt_id}"), Some(json!({"status": "confirmed"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "confirmed");
    assert_eq!(updated["date"], appt["date"]);
    assert_eq!(updated["time"], appt["time"]);
    assert_eq!(updated["notes"], appt["notes"]);

    let (status, body) = send(&app, "DELETE", "/customers/1", None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, orphan) = send(&app, "GET", &format!("/appointments/{appt_id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orphan["customer_id"], 1);
    assert_eq!(orphan["status"], "confirmed");
    Ok(())
}

#[tokio::test]
async fn duplicate_phone_is_rejected() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, "POST", "/customers", Some(json!({"name": "Alice", "phone": "555-0100"}))).await?;

    let (status, body) = send(&app, "POST", "/customers", Some(json!({"name": "Bob", "phone": "555-0100"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Phone number already exists");

    let (_, list) = send(&app, "GET", "/customers", None).await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn appointment_for_missing_customer_is_rejected() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(
        &app,
        "POST",
        "/appointments",
        Some(json!({"customer_id": 9, "date": "2024-01-10", "time": "10:00"})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Customer does not exist");

    let (_, list) = send(&app, "GET", "/appointments", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn missing_records_are_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;

    for (method, uri, body) in [
        ("GET", "/customers/5", None),
        ("PUT", "/customers/5", Some(json!({"name": "Ghost", "phone": "555-0000"}))),
        ("DELETE", "/customers/5", None),
        ("GET", "/appointments/5", None),
        ("PUT", "/appointments/5", Some(json!({"status": "confirmed"}))),
        ("DELETE", "/appointments/5", None),
    ] {
        let (status, resp) = send(&app, method, uri, body).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(resp["error"], "Not Found");
    }

    // No record was created as a side effect
    let (_, customers) = send(&app, "GET", "/customers", None).await?;
    assert_eq!(customers, json!([]));
    let (_, appts) = send(&app, "GET", "/appointments", None).await?;
    assert_eq!(appts, json!([]));
    Ok(())
}

#[tokio::test]
async fn list_by_customer_may_be_empty() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, "POST", "/customers", Some(json!({"name": "Alice", "phone": "555-0100"}))).await?;

    let (status, body) = send(&app, "GET", "/appointments/customer/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    send(&app, "POST", "/appointments", Some(json!({"customer_id": 1, "date": "2024-02-01", "time": "09:30", "notes": "colour"}))).await?;
    let (_, body) = send(&app, "GET", "/appointments/customer/1", None).await?;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["notes"], "colour");
    Ok(())
}

#[tokio::test]
async fn customer_update_replaces_fields() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (_, created) = send(&app, "POST", "/customers", Some(json!({"name": "Alice", "phone": "555-0100"}))).await?;

    let (status, updated) = send(&app, "PUT", "/customers/1", Some(json!({"name": "Alicia", "phone": "555-0199"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Alicia");
    assert_eq!(updated["phone"], "555-0199");
    assert_eq!(updated["created_at"], created["created_at"]);

    // Full replace: a missing field is a malformed payload
    let (status, body) = send(&app, "PUT", "/customers/1", Some(json!({"name": "Only Name"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("phone")));
    Ok(())
}

#[tokio::test]
async fn unparseable_bodies_use_json_error_shape() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, "POST", "/customers", Some(json!({"name": "Alice"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("missing field `phone`")));

    let (status, body) = send(
        &app,
        "POST",
        "/appointments",
        Some(json!({"customer_id": "one", "date": "2024-01-10", "time": "10:00"})),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let req = Request::builder()
        .method("PUT")
        .uri("/appointments/1")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["error"], "Bad Request");
    assert!(body["detail"].is_string());
    Ok(())
}

#[tokio::test]
async fn empty_fields_are_unprocessable() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, "POST", "/customers", Some(json!({"name": "", "phone": "555-0100"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "name must not be empty");

    // Only the empty string is rejected; whitespace is still text
    let (status, body) = send(&app, "POST", "/customers", Some(json!({"name": " ", "phone": "555-0100"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], " ");
    Ok(())
}

#[tokio::test]
async fn explicit_null_clears_notes() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, "POST", "/customers", Some(json!({"name": "Alice", "phone": "555-0100"}))).await?;
    send(&app, "POST", "/appointments", Some(json!({"customer_id": 1, "date": "2024-02-01", "time": "09:30", "notes": "colour"}))).await?;

    let (_, kept) = send(&app, "PUT", "/appointments/1", Some(json!({"time": "11:00"}))).await?;
    assert_eq!(kept["notes"], "colour");
    assert_eq!(kept["time"], "11:00");

    let (_, cleared) = send(&app, "PUT", "/appointments/1", Some(json!({"notes": null}))).await?;
    assert_eq!(cleared["notes"], Value::Null);
    assert_eq!(cleared["time"], "11:00");
    Ok(())
}
