//! Users module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{UserId, UserRecord};
pub use repository::UserStore;
pub use service::HealthService;
