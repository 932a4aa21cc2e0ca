use sea_orm::DbErr;
use thiserror::Error;

/// Fatal conditions raised while preparing the database for traffic.
///
/// None of these are recoverable from the readiness gate's point of view. Each one
/// aborts startup before the HTTP listener is bound.
#[derive(Error, Debug)]
pub enum StartupError {
    /// Every connection attempt in the retry budget failed.
    ///
    /// Carries the error from the final attempt.
    #[error("Database unreachable after {attempts} attempts: {source}")]
    RetriesExhausted {
        /// Number of attempts performed
        attempts: u32,
        /// Error returned by the last attempt
        #[source]
        source: DbErr,
    },

    /// The list of outstanding migrations could not be read.
    #[error("Failed to query pending migrations: {0}")]
    PendingMigrations(#[source] DbErr),

    /// A migration failed to apply. Later migrations were not attempted.
    #[error("Failed to apply migration '{name}': {source}")]
    Migration {
        /// Name of the migration that failed
        name: String,
        /// Underlying database error
        #[source]
        source: DbErr,
    },
}
