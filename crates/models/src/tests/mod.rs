use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;



/// `DATABASE_URL` from the environment or `.env`, unless DB tests are skipped.
pub(crate) fn test_database_url() -> Option<String> {
    let _ = dotenvy::dotenv();
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    std::env::var("DATABASE_URL").ok()
}

/// Connect and migrate, or `None` when no database is available for tests.
pub(crate) async fn setup_test_db() -> anyhow::Result<Option<DatabaseConnection>> {
    let Some(url) = test_database_url() else { return Ok(None) };
    let cfg = DatabaseConfig { url, ..Default::default() };
    let db = crate::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}
