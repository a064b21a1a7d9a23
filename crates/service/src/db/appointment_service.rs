use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, ColumnTrait};
use tracing::{info, instrument};

use models::appointment::{self, Entity as AppointmentEntity, NewAppointment};
use crate::errors::ServiceError;
use crate::schemas::{AppointmentCreate, AppointmentUpdate};

const CUSTOMER_MISSING: &str = "Customer does not exist";

/// Create an appointment for an existing customer.
///
/// The existence check and the insert are one statement, so a missing customer
/// yields `Validation` and leaves nothing behind.
#[instrument(skip(db, input), fields(customer_id = input.customer_id))]
pub async fn create_appointment(db: &DatabaseConnection, input: &AppointmentCreate) -> Result<appointment::Model, ServiceError> {
    input.validate()?;
    let new = NewAppointment {
        customer_id: input.customer_id,
        date: &input.date,
        time: &input.time,
        notes: input.notes.as_deref(),
        status: &input.status,
    };
    let created = appointment::create_for_existing_customer(db, new)
        .await?
        .ok_or_else(|| ServiceError::Validation(CUSTOMER_MISSING.into()))?;
    info!(appointment_id = created.id, status = %created.status, "appointment_created");
    Ok(created)
}

/// Get appointment by id.
pub async fn get_appointment(db: &DatabaseConnection, id: i32) -> Result<appointment::Model, ServiceError> {
    AppointmentEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Appointment"))
}

/// List all appointments in insertion order.
pub async fn list_appointments(db: &DatabaseConnection) -> Result<Vec<appointment::Model>, ServiceError> {
    let rows = AppointmentEntity::find()
        .order_by_asc(appointment::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Appointments of one customer; empty when there are none or the customer is unknown.
pub async fn list_appointments_by_customer(db: &DatabaseConnection, customer_id: i32) -> Result<Vec<appointment::Model>, ServiceError> {
    let rows = AppointmentEntity::find()
        .filter(appointment::Column::CustomerId.eq(customer_id))
        .order_by_asc(appointment::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Merge the supplied fields into an existing appointment.
#[instrument(skip(db, input), fields(appointment_id = id))]
pub async fn update_appointment(db: &DatabaseConnection, id: i32, input: AppointmentUpdate) -> Result<appointment::Model, ServiceError> {
    let existing = get_appointment(db, id).await?;
    input.validate()?;
    let updated = appointment::apply_changes(db, existing, input.into()).await?;
    info!(appointment_id = updated.id, status = %updated.status, "appointment_updated");
    Ok(updated)
}

/// Hard delete an appointment.
#[instrument(skip(db), fields(appointment_id = id))]
pub async fn delete_appointment(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = AppointmentEntity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Appointment"));
    }
    info!(appointment_id = id, "appointment_deleted");
    Ok(())
}
