//! SeaORM-backed services. Each function borrows pooled connections from the
//! `DatabaseConnection` it is handed for the duration of its statements only.

pub mod customer_service;
pub mod appointment_service;
