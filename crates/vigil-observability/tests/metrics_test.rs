use std::sync::Arc;
use std::thread;

use vigil_core::Regime;
use vigil_observability::{EngineMetrics, SideChannel};

#[test]
fn counters_track_each_event_kind() {
    let metrics = EngineMetrics::new();
    metrics.record_processed(Regime::Normal);
    metrics.record_processed(Regime::Alert);
    metrics.record_rejected();
    metrics.record_cold_start();
    metrics.record_read_fallback();
    metrics.record_state_write_failure();
    metrics.record_side_channel_failure(SideChannel::Keywords);
    metrics.record_side_channel_failure(SideChannel::Spikes);
    metrics.record_spike_logged();

    let snap = metrics.snapshot();
    assert_eq!(snap.observations_processed, 2);
    assert_eq!(snap.regime_normal, 1);
    assert_eq!(snap.regime_alert, 1);
    assert_eq!(snap.regime_elevated, 0);
    assert_eq!(snap.observations_rejected, 1);
    assert_eq!(snap.cold_starts, 1);
    assert_eq!(snap.read_fallbacks, 1);
    assert_eq!(snap.state_write_failures, 1);
    assert_eq!(snap.keyword_failures, 1);
    assert_eq!(snap.spike_failures, 1);
    assert_eq!(snap.seasonality_failures, 0);
    assert_eq!(snap.spikes_logged, 1);
    assert!((snap.alert_rate() - 0.5).abs() < 1e-12);
}

#[test]
fn alert_rate_is_zero_without_observations() {
    assert_eq!(EngineMetrics::new().snapshot().alert_rate(), 0.0);
}

#[test]
fn counters_are_safe_across_threads() {
    let metrics = Arc::new(EngineMetrics::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let m = Arc::clone(&metrics);
            thread::spawn(move || {
                for _ in 0..1000 {
                    m.record_processed(Regime::Elevated);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    let snap = metrics.snapshot();
    assert_eq!(snap.observations_processed, 8000);
    assert_eq!(snap.regime_elevated, 8000);
    assert_eq!(snap.to_json()["regime_elevated"], 8000);
}
