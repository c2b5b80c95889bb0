use async_trait::async_trait;

use super::domain::UserRecord;
use crate::errors::StoreError;

/// Persistence seam for user records.
///
/// Implementations acquire whatever backend resource they need per call and
/// release it before returning, on success and on failure alike.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist one record, assigning its id. Nothing is written on failure.
    async fn save(&self, record: UserRecord) -> Result<(), StoreError>;
    /// Every stored record, in an order defined by the implementation.
    async fn list_all(&self) -> Result<Vec<UserRecord>, StoreError>;
}

/// In-memory store for tests, doc examples and database-less runs
pub mod memory {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    use crate::users::domain::UserId;

    /// Keeps records in insertion order. Save and list failures can be
    /// switched on independently to exercise error paths.
    #[derive(Default)]
    pub struct MemoryUserStore {
        users: RwLock<Vec<UserRecord>>,
        fail_save: AtomicBool,
        fail_list: AtomicBool,
    }

    impl MemoryUserStore {
        pub fn new() -> Self { Self::default() }

        pub fn fail_on_save(&self, fail: bool) { self.fail_save.store(fail, Ordering::SeqCst); }

        pub fn fail_on_list(&self, fail: bool) { self.fail_list.store(fail, Ordering::SeqCst); }

        pub async fn len(&self) -> usize { self.users.read().await.len() }

        pub async fn is_empty(&self) -> bool { self.users.read().await.is_empty() }
    }

    #[async_trait]
    impl UserStore for MemoryUserStore {
        async fn save(&self, record: UserRecord) -> Result<(), StoreError> {
            if self.fail_save.load(Ordering::SeqCst) {
                return Err(StoreError::ConnectionFailure("simulated save failure".into()));
            }
            let stored = record.with_id(UserId::generate());
            self.users.write().await.push(stored);
            Ok(())
        }

        async fn list_all(&self) -> Result<Vec<UserRecord>, StoreError> {
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(StoreError::ConnectionFailure("simulated list failure".into()));
            }
            Ok(self.users.read().await.clone())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn save_assigns_ids_and_keeps_order() {
            let store = MemoryUserStore::new();
            store.save(UserRecord::new("a")).await.unwrap();
            store.save(UserRecord::new("b")).await.unwrap();
            let all = store.list_all().await.unwrap();
            assert_eq!(all.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(), ["a", "b"]);
            assert!(all.iter().all(|u| u.id.is_some()));
            assert_ne!(all[0].id, all[1].id);
        }

        #[tokio::test]
        async fn failed_save_writes_nothing() {
            let store = MemoryUserStore::new();
            store.fail_on_save(true);
            let err = store.save(UserRecord::new("a")).await.unwrap_err();
            assert!(matches!(err, StoreError::ConnectionFailure(_)));
            assert!(store.is_empty().await);
            store.fail_on_save(false);
            store.save(UserRecord::new("a")).await.unwrap();
            assert_eq!(store.len().await, 1);
        }

        #[tokio::test]
        async fn list_failure_is_independent_of_save() {
            let store = MemoryUserStore::new();
            store.fail_on_list(true);
            store.save(UserRecord::new("a")).await.unwrap();
            assert!(store.list_all().await.is_err());
        }
    }
}
