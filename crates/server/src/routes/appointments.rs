use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::{db::appointment_service, schemas::{AppointmentCreate, AppointmentResponse, AppointmentUpdate}};
use tracing::info;

use crate::{errors::JsonApiError, extract, routes::ServerState};

#[utoipa::path(
    get, path = "/appointments", tag = "appointments",
    responses((status = 200, description = "All appointments", body = [crate::openapi::AppointmentDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<AppointmentResponse>>, JsonApiError> {
    let list = appointment_service::list_appointments(&state.db).await?;
    info!(count = list.len(), "list appointments");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/appointments/customer/{customer_id}", tag = "appointments",
    params(("customer_id" = i32, Path, description = "Customer id")),
    responses((status = 200, description = "Appointments of the customer, possibly empty", body = [crate::openapi::AppointmentDoc]))
)]
pub async fn list_by_customer(
    State(state): State<ServerState>,
    Path(customer_id): Path<i32>,
) -> Result<Json<Vec<AppointmentResponse>>, JsonApiError> {
    let list = appointment_service::list_appointments_by_customer(&state.db, customer_id).await?;
    info!(customer_id, count = list.len(), "list appointments by customer");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/appointments", tag = "appointments",
    request_body = crate::openapi::AppointmentCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::AppointmentDoc),
        (status = 400, description = "Customer does not exist"),
        (status = 422, description = "Invalid payload")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    extract::Json(input): extract::Json<AppointmentCreate>,
) -> Result<(StatusCode, Json<AppointmentResponse>), JsonApiError> {
    let created = appointment_service::create_appointment(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/appointments/{id}", tag = "appointments",
    params(("id" = i32, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AppointmentDoc),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<AppointmentResponse>, JsonApiError> {
    Ok(Json(appointment_service::get_appointment(&state.db, id).await?))
}

#[utoipa::path(
    put, path = "/appointments/{id}", tag = "appointments",
    params(("id" = i32, Path, description = "Appointment id")),
    request_body = crate::openapi::AppointmentUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AppointmentDoc),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    extract::Json(input): extract::Json<AppointmentUpdate>,
) -> Result<Json<AppointmentResponse>, JsonApiError> {
    Ok(Json(appointment_service::update_appointment(&state.db, id, input).await?))
}

#[utoipa::path(
    delete, path = "/appointments/{id}", tag = "appointments",
    params(("id" = i32, Path, description = "Appointment id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    appointment_service::delete_appointment(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
