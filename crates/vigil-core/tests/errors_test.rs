use vigil_core::errors::*;

#[test]
fn invalid_observation_carries_reason() {
    let err = VigilError::InvalidObservation {
        reason: "valence is NaN".into(),
    };
    assert!(err.to_string().contains("valence is NaN"));
    assert_eq!(err.error_code(), "INVALID_OBSERVATION");
    assert!(err.is_terminal());
}

#[test]
fn store_unavailable_carries_operation() {
    let err = VigilError::store_unavailable("save_state", "disk full");
    let msg = err.to_string();
    assert!(msg.contains("save_state"));
    assert!(msg.contains("disk full"));
    assert!(err.is_terminal());
}

#[test]
fn side_channel_errors_are_not_terminal() {
    let errors = [
        VigilError::SeasonalityWriteFailed {
            kind: "dow".into(),
            period: 3,
            reason: "x".into(),
        },
        VigilError::KeywordWriteFailed {
            keyword: "work".into(),
            reason: "x".into(),
        },
        VigilError::SpikeLogFailed { reason: "x".into() },
    ];
    for err in errors {
        assert!(!err.is_terminal(), "{err} should not be terminal");
    }
}

#[test]
fn storage_error_converts_to_vigil_error() {
    let storage_err = StorageError::SqliteError {
        message: "database is locked".into(),
    };
    let err: VigilError = storage_err.into();
    assert!(matches!(err, VigilError::StorageError(_)));
    assert_eq!(err.error_code(), "STORAGE_ERROR");
}

#[test]
fn config_error_converts_to_vigil_error() {
    let cfg_err = ConfigError::ValidationFailed {
        field: "spikes.max_per_user".into(),
        message: "must be greater than 0".into(),
    };
    let err: VigilError = cfg_err.into();
    assert!(err.to_string().contains("spikes.max_per_user"));
}

#[test]
fn serde_error_converts_to_vigil_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: VigilError = serde_err.into();
    assert!(matches!(err, VigilError::SerializationError(_)));
}
