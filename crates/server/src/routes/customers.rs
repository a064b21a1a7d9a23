use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::{db::customer_service, schemas::{CustomerInput, CustomerResponse}};
use tracing::info;

use crate::{errors::JsonApiError, extract, routes::ServerState};

#[utoipa::path(
    get, path = "/customers", tag = "customers",
    responses((status = 200, description = "All customers", body = [crate::openapi::CustomerDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<CustomerResponse>>, JsonApiError> {
    let list = customer_service::list_customers(&state.db).await?;
    info!(count = list.len(), "list customers");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/customers", tag = "customers",
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Phone number already exists"),
        (status = 422, description = "Invalid payload")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    extract::Json(input): extract::Json<CustomerInput>,
) -> Result<(StatusCode, Json<CustomerResponse>), JsonApiError> {
    let created = customer_service::create_customer(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<CustomerResponse>, JsonApiError> {
    Ok(Json(customer_service::get_customer(&state.db, id).await?))
}

#[utoipa::path(
    put, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Phone number already exists"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    extract::Json(input): extract::Json<CustomerInput>,
) -> Result<Json<CustomerResponse>, JsonApiError> {
    Ok(Json(customer_service::update_customer(&state.db, id, &input).await?))
}

#[utoipa::path(
    delete, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    customer_service::delete_customer(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
