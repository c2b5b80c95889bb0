//! Service layer for the user registry.
//! - `users::repository` defines the store seam and an in-memory store.
//! - `users::repo::seaorm` backs the store with the `models` entities.
//! - `users::service` holds the request-facing operations.

pub mod errors;
pub mod users;
#[cfg(test)]
pub mod test_support;
