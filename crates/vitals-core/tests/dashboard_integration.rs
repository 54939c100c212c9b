//! Integration tests for the dashboard engine: scenario cases, day
//! rollover, and restart persistence.

use chrono::{Local, NaiveDate, TimeZone};
use vitals_core::storage::KvStore;
use vitals_core::{
    DashboardEngine, Database, Greeting, HydrationLedger, SolarRequirement, WakeClock,
};

fn at(h: u32, m: u32) -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2026, 1, 9, h, m, 0).unwrap()
}

fn engine_at(now: chrono::DateTime<Local>) -> DashboardEngine<Database> {
    let ledger = HydrationLedger::open(Database::open_memory().unwrap(), 4000, now.date_naive())
        .unwrap();
    DashboardEngine::new(WakeClock::new(), SolarRequirement::new(), ledger, now)
}

#[test]
fn wake_at_seven_locked_at_eight_with_thirty_remaining() {
    let mut engine = engine_at(at(8, 0));
    engine.set_wake_time(Some(at(7, 0)));
    let snap = engine.snapshot(at(8, 0));
    assert!(snap.caffeine.locked);
    assert_eq!(snap.caffeine.remaining_minutes, 30);
    assert_eq!(snap.caffeine.remaining_seconds, 0);
}

#[test]
fn wake_at_seven_unlocked_at_eight_thirty_one() {
    let mut engine = engine_at(at(8, 31));
    engine.set_wake_time(Some(at(7, 0)));
    let snap = engine.snapshot(at(8, 31));
    assert!(!snap.caffeine.locked);
    assert_eq!(snap.caffeine.remaining_minutes, 0);
    assert_eq!(snap.caffeine.remaining_seconds, 0);
}

#[test]
fn cloud_cover_boundary_selects_required_minutes() {
    let mut engine = engine_at(at(12, 0));
    engine.update_reading(5, 0.50);
    assert_eq!(engine.latest().solar.required_minutes, 10);
    engine.update_reading(5, 0.51);
    assert_eq!(engine.latest().solar.required_minutes, 20);
}

#[test]
fn intake_clamps_at_goal_not_beyond() {
    let mut engine = engine_at(at(12, 0));
    engine.set_pending_amount("1300");
    for _ in 0..3 {
        engine.add_intake().unwrap();
    }
    assert_eq!(engine.latest().hydration.current_ml, 3900);
    engine.set_pending_amount("250");
    engine.add_intake().unwrap();
    assert_eq!(engine.latest().hydration.current_ml, 4000);
}

#[test]
fn tick_is_idempotent_for_a_fixed_instant() {
    let now = at(9, 15);
    let mut engine = engine_at(now);
    engine.set_wake_time(Some(at(7, 0)));
    engine.update_reading(6, 0.3);
    engine.add_intake().unwrap();

    let first = engine.tick(now).unwrap().clone();
    let second = engine.tick(now).unwrap().clone();
    assert_eq!(first, second);
}

#[test]
fn input_pushes_refresh_latest_before_next_tick() {
    let mut engine = engine_at(at(9, 0));
    assert_eq!(engine.latest().hydration.current_ml, 0);
    engine.add_intake().unwrap();
    assert_eq!(engine.latest().hydration.current_ml, 250);

    engine.update_exposure(7);
    assert_eq!(engine.latest().solar.current_minutes, 7);
}

#[test]
fn snapshot_fields_compose_from_all_sub_engines() {
    let now = at(8, 0);
    let mut engine = engine_at(now);
    engine.set_wake_time(Some(at(7, 0)));
    engine.update_reading(6, 0.8);
    engine.update_exposure(5);
    engine.add_intake().unwrap();

    let snap = engine.snapshot(now);
    assert_eq!(snap.greeting, Greeting::Morning);
    assert_eq!(snap.date_label, "FRIDAY, JANUARY 9");
    assert!(snap.caffeine.locked);
    assert_eq!(snap.solar.uv_index, 6);
    assert_eq!(snap.solar.required_minutes, 20);
    assert_eq!(snap.solar.progress, 0.25);
    assert_eq!(snap.hydration.current_ml, 250);
    assert_eq!(snap.hydration.goal_ml, 4000);
}

#[test]
fn tick_rolls_hydration_over_at_local_midnight() {
    let friday = at(23, 59);
    let mut engine = engine_at(friday);
    engine.add_intake().unwrap();
    assert_eq!(engine.latest().hydration.current_ml, 250);

    let saturday = Local.with_ymd_and_hms(2026, 1, 10, 0, 0, 1).unwrap();
    let snap = engine.tick(saturday).unwrap();
    assert_eq!(snap.hydration.current_ml, 0);
    assert_eq!(snap.date_label, "SATURDAY, JANUARY 10");
}

#[test]
fn stale_persisted_date_resets_on_open() {
    let today = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
    let yesterday = today.pred_opt().unwrap();

    let mut db = Database::open_memory().unwrap();
    db.set(vitals_core::hydration::INTAKE_KEY, "1500").unwrap();
    db.set(
        vitals_core::hydration::SAVED_DATE_KEY,
        &yesterday.format("%Y-%m-%d").to_string(),
    )
    .unwrap();

    let ledger = HydrationLedger::open(db, 4000, today).unwrap();
    assert_eq!(ledger.current_ml(), 0);
    assert_eq!(ledger.last_saved(), today);
}

#[test]
fn intake_survives_restart_within_the_same_day() {
    let today = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vitals.db");

    {
        let db = Database::open_at(&path).unwrap();
        let mut ledger = HydrationLedger::open(db, 4000, today).unwrap();
        ledger.set_pending_amount("750");
        ledger.add_intake().unwrap();
        assert_eq!(ledger.current_ml(), 750);
    }

    let db = Database::open_at(&path).unwrap();
    let ledger = HydrationLedger::open(db, 4000, today).unwrap();
    assert_eq!(ledger.current_ml(), 750);
    assert_eq!(ledger.last_saved(), today);
}

#[test]
fn every_mutation_is_on_disk_before_returning() {
    let today = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vitals.db");

    let db = Database::open_at(&path).unwrap();
    let mut ledger = HydrationLedger::open(db, 4000, today).unwrap();
    ledger.add_intake().unwrap();

    // A second connection to the same file sees the write immediately.
    let reader = Database::open_at(&path).unwrap();
    assert_eq!(
        reader.get(vitals_core::hydration::INTAKE_KEY).unwrap().as_deref(),
        Some("250")
    );
    assert_eq!(
        reader
            .get(vitals_core::hydration::SAVED_DATE_KEY)
            .unwrap()
            .as_deref(),
        Some("2026-01-09")
    );
}
