pub mod errors;
pub mod db;
pub mod customer;
pub mod appointment;

#[cfg(test)]
mod tests;
