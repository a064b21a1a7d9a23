//! Service layer providing the booking operations on top of models.
//! - `schemas` holds the request payloads and their validation.
//! - `db` holds the customer and appointment services; every call takes the
//!   connection explicitly, nothing is read from global state.
//! - `errors` is the taxonomy the HTTP layer maps onto status codes.

pub mod errors;
pub mod schemas;
pub mod db;
#[cfg(test)]
pub mod test_support;
