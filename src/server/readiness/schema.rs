use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, DbErr};

/// Tracks and applies schema changes for a connection of type `C`.
#[async_trait]
pub trait SchemaSync<C: Send + Sync>: Send + Sync {
    /// Names of the migrations not yet applied, in definition order.
    async fn pending_changes(&self, conn: &C) -> Result<Vec<String>, DbErr>;

    /// Applies the oldest pending migration.
    async fn apply_next(&self, conn: &C) -> Result<(), DbErr>;
}

/// Schema sync backed by the workspace `Migrator`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MigratorSchema;

#[async_trait]
impl SchemaSync<DatabaseConnection> for MigratorSchema {
    async fn pending_changes(&self, conn: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
        let pending = Migrator::get_pending_migrations(conn).await?;

        Ok(pending
            .iter()
            .map(|migration| migration.name().to_string())
            .collect())
    }

    async fn apply_next(&self, conn: &DatabaseConnection) -> Result<(), DbErr> {
        Migrator::up(conn, Some(1)).await
    }
}
