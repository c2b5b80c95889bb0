//! Shared plumbing for the user registry crates: logging setup and the
//! JSON shapes that cross the HTTP boundary.

pub mod types;
pub mod utils;
