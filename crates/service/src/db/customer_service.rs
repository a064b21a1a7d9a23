use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::{info, instrument};

use models::customer::{self, Entity as CustomerEntity};
use models::errors::ModelError;
use crate::errors::ServiceError;
use crate::schemas::CustomerInput;

const PHONE_TAKEN: &str = "Phone number already exists";

fn map_write_err(e: ModelError) -> ServiceError {
    match e {
        ModelError::Conflict(_) => ServiceError::Conflict(PHONE_TAKEN.into()),
        other => other.into(),
    }
}

/// Create a customer; a phone already in use is a `Conflict`.
///
/// # Examples
/// ```
/// use migration::MigratorTrait;
/// use models::db::{connect_with_config, DatabaseConfig};
/// use service::{db::customer_service, errors::ServiceError, schemas::CustomerInput};
///
/// tokio_test::block_on(async {
///     let db = connect_with_config(&DatabaseConfig::in_memory()).await.unwrap();
///     migration::Migrator::up(&db, None).await.unwrap();
///
///     let input = CustomerInput { name: "Alice".into(), phone: "555-0100".into() };
///     let alice = customer_service::create_customer(&db, &input).await.unwrap();
///     assert_eq!(alice.id, 1);
///
///     let dup = CustomerInput { name: "Bob".into(), phone: "555-0100".into() };
///     let err = customer_service::create_customer(&db, &dup).await.unwrap_err();
///     assert!(matches!(err, ServiceError::Conflict(_)));
/// });
/// ```
#[instrument(skip(db, input), fields(phone = %input.phone))]
pub async fn create_customer(db: &DatabaseConnection, input: &CustomerInput) -> Result<customer::Model, ServiceError> {
    input.validate()?;
    let created = customer::create(db, &input.name, &input.phone).await.map_err(map_write_err)?;
    info!(customer_id = created.id, "customer_created");
    Ok(created)
}

/// Get customer by id.
pub async fn get_customer(db: &DatabaseConnection, id: i32) -> Result<customer::Model, ServiceError> {
    CustomerEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Customer"))
}

/// List all customers in insertion order.
pub async fn list_customers(db: &DatabaseConnection) -> Result<Vec<customer::Model>, ServiceError> {
    let rows = CustomerEntity::find()
        .order_by_asc(customer::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Replace name and phone. The phone unique constraint still applies against other customers.
#[instrument(skip(db, input), fields(customer_id = id))]
pub async fn update_customer(db: &DatabaseConnection, id: i32, input: &CustomerInput) -> Result<customer::Model, ServiceError> {
    let existing = get_customer(db, id).await?;
    input.validate()?;
    let updated = customer::replace(db, existing, &input.name, &input.phone).await.map_err(map_write_err)?;
    info!(customer_id = updated.id, "customer_updated");
    Ok(updated)
}

/// Hard delete. Appointments referencing the customer are left in place.
#[instrument(skip(db), fields(customer_id = id))]
pub async fn delete_customer(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = CustomerEntity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Customer"));
    }
    info!(customer_id = id, "customer_deleted");
    Ok(())
}
