use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{appointment, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Appointments,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Appointments => Entity::has_many(appointment::Entity).into(),
        }
    }
}

impl Related<appointment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Appointments.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    errors::require_text("name", name)
}

pub fn validate_phone(phone: &str) -> Result<(), errors::ModelError> {
    errors::require_text("phone", phone)
}

/// Insert a customer. A taken phone surfaces as `ModelError::Conflict` from the unique index.
pub async fn create(db: &DatabaseConnection, name: &str, phone: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_phone(phone)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        phone: Set(phone.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::from_db)
}

/// Overwrite name and phone of an existing row; `created_at` is left alone.
pub async fn replace(db: &DatabaseConnection, existing: Model, name: &str, phone: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_phone(phone)?;
    let mut am: ActiveModel = existing.into();
    am.name = Set(name.to_string());
    am.phone = Set(phone.to_string());
    am.update(db).await.map_err(errors::ModelError::from_db)
}
