use std::{
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use sea_orm::DbErr;

use super::{DatabaseProbe, GateState, ReadinessGate, RetryPolicy, SchemaSync, Sleeper};
use crate::server::error::startup::StartupError;

mod schema_sync;

/// Probe that fails a fixed number of times before succeeding.
#[derive(Clone, Default)]
struct FakeProbe {
    failures_before_success: u32,
    attempts: Arc<AtomicU32>,
}

impl FakeProbe {
    fn failing_times(failures_before_success: u32) -> Self {
        Self {
            failures_before_success,
            attempts: Arc::default(),
        }
    }

    fn always_failing() -> Self {
        Self::failing_times(u32::MAX)
    }

    fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatabaseProbe for FakeProbe {
    type Connection = ();

    async fn connect(&self) -> Result<(), DbErr> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;

        if attempt <= self.failures_before_success {
            return Err(DbErr::Custom(format!(
                "connection refused (attempt {})",
                attempt
            )));
        }

        Ok(())
    }
}

/// Schema sync over an in-memory list of named migrations.
#[derive(Clone, Default)]
struct FakeSchema {
    migrations: Vec<String>,
    failing_migration: Option<String>,
    fail_pending_query: bool,
    applied: Arc<Mutex<Vec<String>>>,
    pending_queries: Arc<AtomicU32>,
}

impl FakeSchema {
    fn with_pending(migrations: &[&str]) -> Self {
        Self {
            migrations: migrations.iter().map(|m| m.to_string()).collect(),
            ..Default::default()
        }
    }

    fn failing_on(mut self, name: &str) -> Self {
        self.failing_migration = Some(name.to_string());
        self
    }

    fn applied(&self) -> Vec<String> {
        self.applied.lock().unwrap().clone()
    }

    fn pending_queries(&self) -> u32 {
        self.pending_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SchemaSync<()> for FakeSchema {
    async fn pending_changes(&self, _conn: &()) -> Result<Vec<String>, DbErr> {
        self.pending_queries.fetch_add(1, Ordering::SeqCst);

        if self.fail_pending_query {
            return Err(DbErr::Custom("permission denied for schema".to_string()));
        }

        let applied = self.applied.lock().unwrap();
        Ok(self.migrations[applied.len()..].to_vec())
    }

    async fn apply_next(&self, _conn: &()) -> Result<(), DbErr> {
        let mut applied = self.applied.lock().unwrap();
        let next = self.migrations[applied.len()].clone();

        if self.failing_migration.as_deref() == Some(next.as_str()) {
            return Err(DbErr::Migration(format!("{} conflicts with schema", next)));
        }

        applied.push(next);
        Ok(())
    }
}

/// Sleeper that records requested delays instead of waiting.
#[derive(Clone, Default)]
struct RecordingSleeper {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

fn gate(
    probe: &FakeProbe,
    schema: &FakeSchema,
    sleeper: &RecordingSleeper,
    max_attempts: u32,
    retry_interval: Duration,
) -> ReadinessGate<FakeProbe, FakeSchema, RecordingSleeper> {
    ReadinessGate::new(
        probe.clone(),
        schema.clone(),
        sleeper.clone(),
        RetryPolicy::new(max_attempts, retry_interval).unwrap(),
    )
}
