use vigil_core::{Observation, VigilError, VigilResult};

/// Reject observations the recurrence cannot fold in.
pub fn validate_observation(user_id: &str, observation: &Observation) -> VigilResult<()> {
    if user_id.trim().is_empty() {
        return Err(invalid("user id is empty"));
    }
    if !observation.valence.is_finite() {
        return Err(invalid(format!("valence is not finite: {}", observation.valence)));
    }
    if !observation.arousal.is_finite() {
        return Err(invalid(format!("arousal is not finite: {}", observation.arousal)));
    }
    if !(0.0..=1.0).contains(&observation.confidence) {
        return Err(invalid(format!(
            "confidence must be within [0, 1], got {}",
            observation.confidence
        )));
    }
    Ok(())
}

fn invalid(reason: impl Into<String>) -> VigilError {
    VigilError::InvalidObservation {
        reason: reason.into(),
    }
}
