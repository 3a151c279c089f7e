//! Relational storage for the campus events backend
//!
//! SeaORM entities plus schema migrations. Works against PostgreSQL in
//! production and in-memory SQLite in tests.

pub mod entities;
pub mod migrator;

pub use migrator::Migrator;

use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

/// Connect to the database at the given URL (postgres:// or sqlite:).
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    info!("Database connection established");
    Ok(db)
}

/// Apply all pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}
