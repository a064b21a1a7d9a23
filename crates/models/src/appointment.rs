use sea_orm::{
    entity::prelude::*,
    sea_query::{Expr, Query},
    ConnectionTrait, DatabaseConnection, FromQueryResult, Set,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{customer, errors};

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Customer,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustomerId)
                .to(customer::Column::Id)
                .into(),
        }
    }
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_date(date: &str) -> Result<(), errors::ModelError> {
    errors::require_text("date", date)
}

pub fn validate_time(time: &str) -> Result<(), errors::ModelError> {
    errors::require_text("time", time)
}

/// Fields of a new appointment; `id` and `created_at` are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewAppointment<'a> {
    pub customer_id: i32,
    pub date: &'a str,
    pub time: &'a str,
    pub notes: Option<&'a str>,
    pub status: &'a str,
}

/// Insert an appointment only if its customer exists, as a single statement:
///
/// `INSERT INTO appointments (..) SELECT .. WHERE EXISTS (SELECT 1 FROM customers WHERE id = ?) RETURNING *`
///
/// Returns `Ok(None)` when the customer is missing; nothing is written in that case.
pub async fn create_for_existing_customer(
    db: &DatabaseConnection,
    new: NewAppointment<'_>,
) -> Result<Option<Model>, errors::ModelError> {
    validate_date(new.date)?;
    validate_time(new.time)?;

    let now: DateTimeWithTimeZone = Utc::now().into();
    let customer_exists = Query::select()
        .expr(Expr::val(1))
        .from(customer::Entity)
        .and_where(Expr::col((customer::Entity, customer::Column::Id)).eq(new.customer_id))
        .to_owned();
    let source = Query::select()
        .exprs([
            Expr::val(new.customer_id),
            Expr::val(new.date.to_string()),
            Expr::val(new.time.to_string()),
            Expr::val(new.notes.map(str::to_string)),
            Expr::val(new.status.to_string()),
            Expr::val(now),
        ])
        .and_where(Expr::exists(customer_exists))
        .to_owned();

    let mut insert = Query::insert();
    insert
        .into_table(Entity)
        .columns([
            Column::CustomerId,
            Column::Date,
            Column::Time,
            Column::Notes,
            Column::Status,
            Column::CreatedAt,
        ])
        .select_from(source)
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
        .returning_all();

    let stmt = db.get_database_backend().build(&insert);
    let row = db.query_one(stmt).await.map_err(errors::ModelError::from_db)?;
    row.map(|r| Model::from_query_result(&r, ""))
        .transpose()
        .map_err(errors::ModelError::from_db)
}

/// Field changes for an existing appointment. `None` leaves a field untouched;
/// `notes: Some(None)` clears the notes.
#[derive(Debug, Clone, Default)]
pub struct AppointmentChanges {
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<Option<String>>,
    pub status: Option<String>,
}

impl AppointmentChanges {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none() && self.notes.is_none() && self.status.is_none()
    }
}

/// Merge `changes` into `existing`. `customer_id` and `created_at` are never touched.
pub async fn apply_changes(
    db: &DatabaseConnection,
    existing: Model,
    changes: AppointmentChanges,
) -> Result<Model, errors::ModelError> {
    if changes.is_empty() {
        return Ok(existing);
    }
    let mut am: ActiveModel = existing.into();
    if let Some(d) = changes.date { validate_date(&d)?; am.date = Set(d); }
    if let Some(t) = changes.time { validate_time(&t)?; am.time = Set(t); }
    if let Some(n) = changes.notes { am.notes = Set(n); }
    if let Some(s) = changes.status { am.status = Set(s); }
    am.update(db).await.map_err(errors::ModelError::from_db)
}
