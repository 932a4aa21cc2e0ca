use super::*;

/// Tests that a current schema is left untouched.
///
/// Expected: Ok with no migrations applied and the gate Ready
#[tokio::test]
async fn skips_migration_when_nothing_pending() {
    let probe = FakeProbe::failing_times(0);
    let schema = FakeSchema::default();
    let sleeper = RecordingSleeper::default();

    let mut gate = gate(&probe, &schema, &sleeper, 1, Duration::ZERO);
    gate.run().await.unwrap();

    assert_eq!(schema.pending_queries(), 1);
    assert!(schema.applied().is_empty());
    assert_eq!(gate.state(), GateState::Ready);
}

/// Tests that pending migrations are applied in definition order.
///
/// Expected: Ok with all migrations applied in order before Ready
#[tokio::test]
async fn applies_pending_migrations_in_order() {
    let probe = FakeProbe::failing_times(0);
    let schema = FakeSchema::with_pending(&["m1_create_users", "m2_add_index", "m3_backfill"]);
    let sleeper = RecordingSleeper::default();

    let mut gate = gate(&probe, &schema, &sleeper, 1, Duration::ZERO);
    gate.run().await.unwrap();

    assert_eq!(
        schema.applied(),
        vec!["m1_create_users", "m2_add_index", "m3_backfill"]
    );
    assert_eq!(gate.state(), GateState::Ready);
}

/// Tests that a failing migration stops the sequence.
///
/// Verifies that migrations after the failing one are not attempted, the failure is
/// not retried, and the gate never reaches Ready.
///
/// Expected: Err(Migration) naming the failed migration, only the first one applied
#[tokio::test]
async fn stops_at_first_failing_migration() {
    let probe = FakeProbe::failing_times(0);
    let schema = FakeSchema::with_pending(&["m1", "m2", "m3"]).failing_on("m2");
    let sleeper = RecordingSleeper::default();

    let mut gate = gate(&probe, &schema, &sleeper, 3, Duration::ZERO);
    let result = gate.run().await;

    match result {
        Err(StartupError::Migration { name, .. }) => assert_eq!(name, "m2"),
        other => panic!("expected Migration error, got {:?}", other.err()),
    }
    assert_eq!(schema.applied(), vec!["m1"]);
    assert_eq!(probe.attempts(), 1);
    assert_eq!(gate.state(), GateState::Failed);
    assert!(gate.history().contains(&GateState::Migrating));
    assert!(!gate.history().contains(&GateState::Ready));
}

/// Tests that failing to list pending migrations is fatal.
///
/// Expected: Err(PendingMigrations) and the gate Failed
#[tokio::test]
async fn fails_when_pending_migrations_cannot_be_listed() {
    let probe = FakeProbe::failing_times(0);
    let schema = FakeSchema {
        fail_pending_query: true,
        ..FakeSchema::with_pending(&["m1"])
    };
    let sleeper = RecordingSleeper::default();

    let mut gate = gate(&probe, &schema, &sleeper, 3, Duration::ZERO);
    let result = gate.run().await;

    assert!(matches!(result, Err(StartupError::PendingMigrations(_))));
    assert_eq!(schema.pending_queries(), 1);
    assert!(schema.applied().is_empty());
    assert_eq!(gate.state(), GateState::Failed);
}
