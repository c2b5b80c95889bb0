use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use tracing::warn;

use models::errors::ModelError;

use crate::errors::StoreError;
use crate::users::domain::UserRecord;
use crate::users::repository::UserStore;

/// Postgres-backed store over a pooled SeaORM connection.
#[derive(Clone)]
pub struct SeaOrmUserStore {
    pub db: DatabaseConnection,
}

impl SeaOrmUserStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn map_db_err(e: DbErr) -> StoreError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            StoreError::ConstraintViolation(msg)
        }
        _ => StoreError::ConnectionFailure(e.to_string()),
    }
}

fn map_model_err(e: ModelError) -> StoreError {
    match e {
        // The model check mirrors the column constraint, so report it as one.
        ModelError::Validation(msg) => StoreError::ConstraintViolation(msg),
        ModelError::Db(db) => map_db_err(db),
    }
}

#[async_trait::async_trait]
impl UserStore for SeaOrmUserStore {
    async fn save(&self, record: UserRecord) -> Result<(), StoreError> {
        let created = models::users::create(&self.db, &record.name).await.map_err(map_model_err)?;
        if let Some(requested) = record.id {
            warn!(%requested, assigned = %created.id, "ignoring caller-supplied user id");
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        let rows = models::users::list_all(&self.db).await.map_err(map_model_err)?;
        Ok(rows.into_iter().map(UserRecord::from).collect())
    }
}
