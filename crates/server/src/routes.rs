use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Health, ServiceInfo};

use crate::openapi::ApiDoc;

pub mod customers;
pub mod appointments;

/// Shared handler state. The pool is cloned per request; each statement
/// checks a connection out and returns it when done.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(get, path = "/", tag = "meta", responses((status = 200, description = "Service identification")))]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

#[utoipa::path(get, path = "/health", tag = "meta", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let meta = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json));

    let customer_routes = Router::new()
        .route("/customers", get(customers::list).post(customers::create))
        .route(
            "/customers/:id",
            get(customers::get).put(customers::update).delete(customers::delete),
        );

    let appointment_routes = Router::new()
        .route("/appointments", get(appointments::list).post(appointments::create))
        .route("/appointments/customer/:customer_id", get(appointments::list_by_customer))
        .route(
            "/appointments/:id",
            get(appointments::get).put(appointments::update).delete(appointments::delete),
        );

    // Compose
    meta
        .merge(customer_routes)
        .merge(appointment_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
