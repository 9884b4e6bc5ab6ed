//! In-memory SQLite database with the API schema applied.

use sea_orm::{Database, DatabaseConnection, DbErr};
use stealthnap_api_migration::{Migrator, MigratorTrait};

/// Connect to a fresh `sqlite::memory:` database and run every migration.
///
/// Each call yields an isolated database.
pub async fn migrated_sqlite() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
