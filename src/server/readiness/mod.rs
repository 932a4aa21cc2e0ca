//! Startup readiness gate.
//!
//! Blocks startup until the database answers, then brings the schema up to date.
//! The HTTP listener is only started once the gate reports `Ready`.
//!
//! The gate is written against three small capabilities so it can run against the
//! real database or in-process fakes:
//!
//! - [`DatabaseProbe`] - opens a connection to the configured target
//! - [`SchemaSync`] - lists and applies pending migrations
//! - [`Sleeper`] - suspends between connection attempts
//!
//! # State machine
//!
//! ```text
//! NotStarted -> Probing(1) -> ... -> Probing(n) -> Connected -> Migrating -> Ready
//!                                          \                        \
//!                                           -> Failed                -> Failed
//! ```

pub mod probe;
pub mod schema;
pub mod sleeper;

#[cfg(test)]
mod test;

use std::time::Duration;

use crate::server::error::{config::ConfigError, startup::StartupError};

pub use probe::{DatabaseProbe, SeaOrmProbe};
pub use schema::{MigratorSchema, SchemaSync};
pub use sleeper::{Sleeper, TokioSleeper};

/// Position of the gate in its startup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    NotStarted,
    /// A connection attempt is in flight. Attempts are numbered from 1.
    Probing { attempt: u32 },
    /// The probe succeeded on the given attempt.
    Connected { attempt: u32 },
    Migrating,
    Ready,
    Failed,
}

/// Connection retry budget.
///
/// Retries use a fixed interval with no backoff. A zero interval is accepted so tests
/// can run the loop without waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    retry_interval: Duration,
}

impl RetryPolicy {
    /// Creates a retry policy.
    ///
    /// # Arguments
    /// - `max_attempts` - Total number of connection attempts, including the first
    /// - `retry_interval` - Delay between two consecutive attempts
    ///
    /// # Returns
    /// - `Ok(RetryPolicy)` - Valid policy
    /// - `Err(ConfigError::ZeroAttempts)` - `max_attempts` was zero
    pub fn new(max_attempts: u32, retry_interval: Duration) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        Ok(Self {
            max_attempts,
            retry_interval,
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn retry_interval(&self) -> Duration {
        self.retry_interval
    }
}

/// Runs the connect-then-migrate startup sequence exactly once.
pub struct ReadinessGate<P, S, T> {
    probe: P,
    schema: S,
    sleeper: T,
    policy: RetryPolicy,
    history: Vec<GateState>,
}

impl<P, S, T> ReadinessGate<P, S, T>
where
    P: DatabaseProbe,
    S: SchemaSync<P::Connection>,
    T: Sleeper,
{
    pub fn new(probe: P, schema: S, sleeper: T, policy: RetryPolicy) -> Self {
        Self {
            probe,
            schema,
            sleeper,
            policy,
            history: vec![GateState::NotStarted],
        }
    }

    /// Current state of the gate.
    pub fn state(&self) -> GateState {
        self.history
            .last()
            .copied()
            .unwrap_or(GateState::NotStarted)
    }

    /// Every state the gate has passed through, oldest first.
    #[cfg(test)]
    pub fn history(&self) -> &[GateState] {
        &self.history
    }

    /// Waits for the database, applies pending migrations and hands back the connection.
    ///
    /// Connection failures are retried according to the [`RetryPolicy`]. Migration
    /// failures are never retried.
    ///
    /// # Returns
    /// - `Ok(Connection)` - Database reachable and schema current; gate is `Ready`
    /// - `Err(StartupError::RetriesExhausted)` - No attempt in the budget succeeded
    /// - `Err(StartupError::PendingMigrations)` - Could not list outstanding migrations
    /// - `Err(StartupError::Migration)` - A migration failed; later ones were skipped
    pub async fn run(&mut self) -> Result<P::Connection, StartupError> {
        let conn = match self.wait_for_database().await {
            Ok(conn) => conn,
            Err(err) => {
                self.transition(GateState::Failed);
                return Err(err);
            }
        };

        if let Err(err) = self.synchronize_schema(&conn).await {
            self.transition(GateState::Failed);
            return Err(err);
        }

        self.transition(GateState::Ready);
        tracing::info!("Database ready");

        Ok(conn)
    }

    async fn wait_for_database(&mut self) -> Result<P::Connection, StartupError> {
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 1;

        loop {
            self.transition(GateState::Probing { attempt });

            match self.probe.connect().await {
                Ok(conn) => {
                    self.transition(GateState::Connected { attempt });
                    tracing::info!(
                        "Connected to database on attempt {}/{}",
                        attempt,
                        max_attempts
                    );
                    return Ok(conn);
                }
                Err(err) => {
                    tracing::warn!(
                        "Database connection attempt {}/{} failed: {}",
                        attempt,
                        max_attempts,
                        err
                    );

                    if attempt >= max_attempts {
                        return Err(StartupError::RetriesExhausted {
                            attempts: attempt,
                            source: err,
                        });
                    }

                    self.sleeper.sleep(self.policy.retry_interval()).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn synchronize_schema(&mut self, conn: &P::Connection) -> Result<(), StartupError> {
        self.transition(GateState::Migrating);

        let pending = self
            .schema
            .pending_changes(conn)
            .await
            .map_err(StartupError::PendingMigrations)?;

        if pending.is_empty() {
            tracing::info!("Database schema is up to date");
            return Ok(());
        }

        tracing::info!("Applying {} pending migration(s)", pending.len());

        for name in pending {
            self.schema
                .apply_next(conn)
                .await
                .map_err(|source| StartupError::Migration {
                    name: name.clone(),
                    source,
                })?;

            tracing::info!("Applied migration {}", name);
        }

        Ok(())
    }

    fn transition(&mut self, state: GateState) {
        tracing::debug!("Readiness gate entering {:?}", state);
        self.history.push(state);
    }
}
