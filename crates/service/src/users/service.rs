use std::sync::Arc;

use common::types::LIVENESS_BODY;
use tracing::{debug, info, instrument};

use super::domain::UserRecord;
use super::repository::UserStore;
use crate::errors::ServiceError;

/// Request-facing operations for the health and users endpoints.
///
/// The store is injected; the service never constructs one itself.
pub struct HealthService<S: UserStore + ?Sized> {
    store: Arc<S>,
}

impl<S: UserStore + ?Sized> HealthService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// Decode a create request body and persist it.
    ///
    /// # Examples
    /// ```
    /// use service::users::{HealthService, repository::memory::MemoryUserStore};
    /// use std::sync::Arc;
    /// let svc = HealthService::new(Arc::new(MemoryUserStore::new()));
    /// let user = tokio_test::block_on(svc.record_user(br#"{"name":"Ada"}"#)).unwrap();
    /// assert_eq!(user.name, "Ada");
    /// ```
    #[instrument(skip(self, raw), fields(bytes = raw.len()))]
    pub async fn record_user(&self, raw: &[u8]) -> Result<UserRecord, ServiceError> {
        let record = UserRecord::decode(raw)?;
        self.store.save(record.clone()).await?;
        info!(name = %record.name, "user_added");
        Ok(record)
    }

    /// Every stored user.
    ///
    /// # Examples
    /// ```
    /// use service::users::{HealthService, repository::memory::MemoryUserStore};
    /// use std::sync::Arc;
    /// let svc = HealthService::new(Arc::new(MemoryUserStore::new()));
    /// let _ = tokio_test::block_on(svc.record_user(br#"{"name":"Grace"}"#));
    /// let users = tokio_test::block_on(svc.list_users()).unwrap();
    /// assert_eq!(users.len(), 1);
    /// ```
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ServiceError> {
        let users = self.store.list_all().await?;
        debug!(count = users.len(), "users_listed");
        Ok(users)
    }

    /// Liveness payload. Does not consult the store.
    pub fn ping(&self) -> &'static str {
        info!("Received a health request");
        LIVENESS_BODY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StoreError;
    use crate::users::repository::memory::MemoryUserStore;

    fn service() -> (Arc<MemoryUserStore>, HealthService<MemoryUserStore>) {
        let store = Arc::new(MemoryUserStore::new());
        (Arc::clone(&store), HealthService::new(store))
    }

    #[tokio::test]
    async fn record_then_list() {
        let (_, svc) = service();
        let rec = svc.record_user(br#"{"name":"Ada"}"#).await.unwrap();
        assert_eq!(rec, UserRecord::new("Ada"));

        let users = svc.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Ada");
        assert!(users[0].id.is_some());
    }

    #[tokio::test]
    async fn malformed_input_never_reaches_store() {
        let (store, svc) = service();
        store.fail_on_save(true);
        let err = svc.record_user(b"{oops").await.unwrap_err();
        assert!(matches!(err, ServiceError::MalformedInput(_)));
        assert_eq!(err.code(), 1001);
    }

    #[tokio::test]
    async fn save_failure_maps_to_persistence() {
        let (store, svc) = service();
        store.fail_on_save(true);
        let err = svc.record_user(br#"{"name":"Ada"}"#).await.unwrap_err();
        assert!(matches!(err, ServiceError::Persistence(StoreError::ConnectionFailure(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn list_failure_maps_to_persistence() {
        let (store, svc) = service();
        store.fail_on_list(true);
        let err = svc.list_users().await.unwrap_err();
        assert!(matches!(err, ServiceError::Persistence(_)));
        assert_eq!(err.code(), 1200);
    }

    #[tokio::test]
    async fn ping_ignores_store_state() {
        let (store, svc) = service();
        store.fail_on_save(true);
        store.fail_on_list(true);
        assert_eq!(svc.ping(), r#"{"response":"I'm alive!"}"#);
    }

    #[tokio::test]
    async fn works_behind_trait_object() {
        let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
        let svc: HealthService<dyn UserStore> = HealthService::new(store);
        svc.record_user(br#"{"name":"Dyn"}"#).await.unwrap();
        assert_eq!(svc.list_users().await.unwrap().len(), 1);
    }
}
