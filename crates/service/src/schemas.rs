//! Request payloads accepted by the booking API.
//!
//! Responses are the entity models themselves (`models::customer::Model`,
//! `models::appointment::Model`), which serialise every column.

use serde::{Deserialize, Deserializer, Serialize};

use models::appointment::{self, AppointmentChanges};
use models::customer;

use crate::errors::ServiceError;

pub use models::appointment::Model as AppointmentResponse;
pub use models::customer::Model as CustomerResponse;

/// Body of customer create and update. Update is a full replace, so both fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInput {
    pub name: String,
    pub phone: String,
}

impl CustomerInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        customer::validate_name(&self.name)?;
        customer::validate_phone(&self.phone)?;
        Ok(())
    }
}

fn default_status() -> String { appointment::STATUS_PENDING.to_string() }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentCreate {
    pub customer_id: i32,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

impl AppointmentCreate {
    pub fn validate(&self) -> Result<(), ServiceError> {
        appointment::validate_date(&self.date)?;
        appointment::validate_time(&self.time)?;
        Ok(())
    }
}

/// Partial update. Absent keys keep their stored value; `"notes": null` clears notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentUpdate {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<String>,
}

// Maps a present key (even `null`) to `Some`, so absence stays distinguishable.
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl AppointmentUpdate {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(d) = &self.date { appointment::validate_date(d)?; }
        if let Some(t) = &self.time { appointment::validate_time(t)?; }
        Ok(())
    }
}

impl From<AppointmentUpdate> for AppointmentChanges {
    fn from(u: AppointmentUpdate) -> Self {
        AppointmentChanges { date: u.date, time: u.time, notes: u.notes, status: u.status }
    }
}
