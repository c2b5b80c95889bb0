use std::sync::Arc;

use service::users::{HealthService, UserStore};

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<HealthService<dyn UserStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { users: Arc::new(HealthService::new(store)) }
    }
}
