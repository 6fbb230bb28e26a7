use chrono::NaiveDate;
use vigil_core::models::keyword::rank_top;
use vigil_core::{AugmentedObservation, KeywordWeight, Observation, SeasonalityKind, SpikeRecord, TemporalState};

#[test]
fn seasonality_periods_follow_local_calendar() {
    // 2024-03-03 is a Sunday.
    let local = NaiveDate::from_ymd_opt(2024, 3, 3)
        .unwrap()
        .and_hms_opt(23, 15, 0)
        .unwrap();
    assert_eq!(SeasonalityKind::DayOfWeek.period_of(&local), 6);
    assert_eq!(SeasonalityKind::HourOfDay.period_of(&local), 23);
    assert_eq!(SeasonalityKind::DayOfWeek.period_count(), 7);
    assert_eq!(SeasonalityKind::HourOfDay.period_count(), 24);
    assert_eq!(
        serde_json::to_string(&SeasonalityKind::DayOfWeek).unwrap(),
        "\"dow\""
    );
}

#[test]
fn rank_top_orders_by_weight_and_truncates() {
    let ranked = rank_top(
        vec![
            KeywordWeight::new("sleep", 2.0),
            KeywordWeight::new("work", 5.0),
            KeywordWeight::new("family", 3.0),
        ],
        2,
    );
    let names: Vec<_> = ranked.iter().map(|k| k.keyword.as_str()).collect();
    assert_eq!(names, vec!["work", "family"]);
}

#[test]
fn augmented_observation_flattens_input_fields() {
    let obs = Observation::new(0.2, 0.4, 0.9)
        .with_risk_flags(["self_harm"])
        .with_keywords(["exam"]);
    let augmented = AugmentedObservation {
        observation: obs,
        temporal_after: TemporalState::default(),
    };
    let json = serde_json::to_value(&augmented).unwrap();
    assert_eq!(json["valence"], 0.2);
    assert_eq!(json["risk_flags"][0], "self_harm");
    assert!(json["temporal_after"]["S"].is_object());
    assert!(json.get("prior_composite_state").is_none());
}

#[test]
fn observation_decodes_with_optional_fields_missing() {
    let obs: Observation =
        serde_json::from_str(r#"{"valence": -0.3, "arousal": 0.7, "confidence": 0.5}"#).unwrap();
    assert!(obs.risk_flags.is_empty());
    assert!(obs.event_keywords.is_empty());
    assert!(obs.prior_composite_state.is_none());
}

#[test]
fn spike_peak_z_uses_absolute_values() {
    let spike = SpikeRecord {
        timestamp: chrono::Utc::now(),
        zv: -2.5,
        za: 1.0,
        risk_momentum: 0.2,
    };
    assert_eq!(spike.peak_z(), 2.5);
}
