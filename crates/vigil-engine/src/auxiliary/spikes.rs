use chrono::{DateTime, Utc};

use vigil_core::config::SpikeConfig;
use vigil_core::{IStateStore, SpikeRecord, TemporalState, VigilError};

/// Whether a committed state is a spike worth logging.
pub fn is_spike(state: &TemporalState, config: &SpikeConfig) -> bool {
    state.z.max_abs() >= config.z_threshold || state.risk_momentum >= config.risk_threshold
}

/// Append a spike record when `state` qualifies.
///
/// Returns the record that was written, `None` when the state did not
/// qualify.
pub fn record(
    store: &dyn IStateStore,
    user_id: &str,
    state: &TemporalState,
    now: DateTime<Utc>,
    config: &SpikeConfig,
) -> Result<Option<SpikeRecord>, VigilError> {
    if !is_spike(state, config) {
        return Ok(None);
    }
    let spike = SpikeRecord {
        timestamp: now,
        zv: state.z.v,
        za: state.z.a,
        risk_momentum: state.risk_momentum,
    };
    store
        .log_spike(user_id, &spike)
        .map_err(|e| VigilError::SpikeLogFailed {
            reason: e.to_string(),
        })?;
    Ok(Some(spike))
}
