//! Store failures: which ones degrade, which ones surface.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use test_fixtures::{hours_after, mild, t0, warm_state, Fault, FaultyStore};
use vigil_core::state::temporal_state::{DEFAULT_CENTER, DEFAULT_SIGMA};
use vigil_core::{Axes, IStateStore, Observation, SeasonalityKind, VigilConfig, VigilError};
use vigil_engine::BehaviorEngine;

fn engine_over(store: &Arc<FaultyStore>) -> BehaviorEngine {
    BehaviorEngine::new(store.clone(), VigilConfig::default()).unwrap()
}

#[test]
fn read_failure_falls_back_to_cold_start() {
    let store = Arc::new(FaultyStore::new());
    store
        .inner()
        .save_state("u1", &warm_state(DEFAULT_CENTER, DEFAULT_SIGMA, 0.2, t0(), 9))
        .unwrap();
    store.fail(Fault::ReadState);
    let engine = engine_over(&store);

    let out = engine
        .process_observation("u1", mild(), hours_after(t0(), 2.0))
        .unwrap();
    assert_eq!(out.temporal_after.n, 1);
    assert_eq!(store.inner().get_state("u1").unwrap().unwrap().n, 1);

    let m = engine.metrics();
    assert_eq!(m.read_fallbacks, 1);
    assert_eq!(m.cold_starts, 0);
    assert_eq!(m.observations_processed, 1);
}

#[test]
fn write_failure_surfaces_and_skips_side_channels() {
    let store = Arc::new(FaultyStore::failing(&[Fault::WriteState]));
    let engine = engine_over(&store);

    let obs = Observation::new(-0.9, 1.0, 1.0)
        .with_risk_flags(["self_harm"])
        .with_keywords(["work"]);
    let err = engine.process_observation("u1", obs, t0()).unwrap_err();
    match err {
        VigilError::StoreUnavailable { operation, .. } => assert_eq!(operation, "save_state"),
        other => panic!("unexpected error: {other}"),
    }

    assert!(store.inner().get_state("u1").unwrap().is_none());
    assert!(store.inner().get_top_keywords("u1", 10).unwrap().is_empty());
    assert_eq!(store.inner().spike_count("u1"), 0);
    assert!(store
        .inner()
        .get_seasonality("u1", SeasonalityKind::HourOfDay, 12)
        .unwrap()
        .is_none());

    let m = engine.metrics();
    assert_eq!(m.state_write_failures, 1);
    assert_eq!(m.observations_processed, 0);
}

#[test]
fn write_recovers_once_store_heals() {
    let store = Arc::new(FaultyStore::failing(&[Fault::WriteState]));
    let engine = engine_over(&store);
    assert!(engine.process_observation("u1", mild(), t0()).is_err());

    store.heal(Fault::WriteState);
    let out = engine
        .process_observation("u1", mild(), hours_after(t0(), 1.0))
        .unwrap();
    assert_eq!(out.temporal_after.n, 1);
}

#[test]
fn side_channel_failures_are_swallowed() {
    let store = Arc::new(FaultyStore::failing(&[
        Fault::Seasonality,
        Fault::Keywords,
        Fault::Spikes,
    ]));
    // Risk momentum high enough that the update is a spike.
    store
        .inner()
        .save_state("u1", &warm_state(DEFAULT_CENTER, DEFAULT_SIGMA, 0.9, t0(), 9))
        .unwrap();
    let engine = engine_over(&store);

    let obs = mild().with_keywords(["work", "sleep", "family"]);
    let out = engine
        .process_observation("u1", obs, hours_after(t0(), 1.0))
        .unwrap();
    assert_eq!(out.temporal_after.n, 10);
    assert_eq!(store.inner().get_state("u1").unwrap(), Some(out.temporal_after));

    let m = engine.metrics();
    assert_eq!(m.observations_processed, 1);
    assert_eq!(m.seasonality_failures, 2);
    assert_eq!(m.keyword_failures, 3);
    assert_eq!(m.spike_failures, 1);
    assert_eq!(m.spikes_logged, 0);
    assert_eq!(store.injected_failures(), 6);
}

#[test]
fn corrupt_stored_state_is_replaced() {
    let store = Arc::new(FaultyStore::new());
    let mut corrupt = warm_state(DEFAULT_CENTER, DEFAULT_SIGMA, 0.2, t0(), 9);
    corrupt.sigma = Axes::new(0.0, 0.05);
    store.inner().save_state("u1", &corrupt).unwrap();
    let engine = engine_over(&store);

    let out = engine
        .process_observation("u1", mild(), hours_after(t0(), 2.0))
        .unwrap();
    assert_eq!(out.temporal_after.n, 1);
    assert!(out.temporal_after.check_invariants().is_ok());
    assert_eq!(engine.metrics().read_fallbacks, 1);
}

#[test]
fn read_helpers_report_store_unavailable() {
    let store = Arc::new(FaultyStore::failing(&[
        Fault::ReadState,
        Fault::Keywords,
        Fault::Spikes,
        Fault::Seasonality,
    ]));
    let engine = engine_over(&store);

    for err in [
        engine.current_state("u1").err(),
        engine.top_keywords("u1", None).err(),
        engine.recent_spikes("u1", 5).err(),
        engine
            .seasonal_average("u1", SeasonalityKind::DayOfWeek, 0)
            .err(),
    ] {
        assert!(matches!(
            err,
            Some(VigilError::StoreUnavailable { .. })
        ));
    }
}

#[test]
fn calendar_overflow_is_a_seasonality_failure_not_a_panic() {
    let store = Arc::new(FaultyStore::new());
    let engine = engine_over(&store);

    let obs = Observation::new(0.1, 0.3, 0.5)
        .with_utc_offset(60)
        .with_keywords(["late"]);
    let out = engine
        .process_observation("u1", obs, DateTime::<Utc>::MAX_UTC)
        .unwrap();
    assert_eq!(out.temporal_after.n, 1);
    assert_eq!(store.inner().get_state("u1").unwrap(), Some(out.temporal_after));

    // Later side channels still ran.
    let top = engine.top_keywords("u1", None).unwrap();
    assert_eq!(top[0].keyword, "late");

    let m = engine.metrics();
    assert_eq!(m.observations_processed, 1);
    assert_eq!(m.seasonality_failures, 1);
    for kind in SeasonalityKind::ALL {
        for period in 0..kind.period_count() {
            assert!(engine.seasonal_average("u1", kind, period).unwrap().is_none());
        }
    }

    let early = Observation::new(0.1, 0.3, 0.5).with_utc_offset(-60);
    assert!(engine
        .process_observation("u2", early, DateTime::<Utc>::MIN_UTC)
        .is_ok());
    assert_eq!(engine.metrics().seasonality_failures, 2);
}
