use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Opens a connection to the database the service depends on.
///
/// Every call is an independent attempt; implementations must not retry internally.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    type Connection: Send + Sync;

    /// Attempts to open a working connection.
    ///
    /// # Returns
    /// - `Ok(Connection)` - The target accepted the connection
    /// - `Err(DbErr)` - Refused, unresolvable, timed out or rejected the credentials
    async fn connect(&self) -> Result<Self::Connection, DbErr>;
}

/// Probe backed by a SeaORM connection pool.
///
/// A successful probe returns the pool itself so the service keeps using the
/// connection the gate verified.
pub struct SeaOrmProbe {
    options: ConnectOptions,
}

impl SeaOrmProbe {
    /// Creates a probe for the given connection string.
    ///
    /// # Arguments
    /// - `database_url` - Connection string (host, port, credentials, database name)
    /// - `connect_timeout` - Optional upper bound on a single attempt; the driver
    ///   default applies when `None`
    pub fn new(database_url: &str, connect_timeout: Option<Duration>) -> Self {
        let mut options = ConnectOptions::new(database_url);
        options.sqlx_logging(false);

        if let Some(timeout) = connect_timeout {
            options.connect_timeout(timeout);
        }

        Self { options }
    }
}

#[async_trait]
impl DatabaseProbe for SeaOrmProbe {
    type Connection = DatabaseConnection;

    async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect(self.options.clone()).await?;

        if let Err(err) = db.ping().await {
            if let Err(close_err) = db.close().await {
                tracing::debug!("Failed to close unhealthy connection: {}", close_err);
            }
            return Err(err);
        }

        Ok(db)
    }
}
