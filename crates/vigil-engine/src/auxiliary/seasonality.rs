use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use tracing::debug;

use vigil_core::config::SeasonalityConfig;
use vigil_core::constants::MAX_UTC_OFFSET_MINUTES;
use vigil_core::{Axes, IStateStore, Observation, SeasonalityKind, VigilError};

/// Weight given to one observation in a bucket average: `1 - e^(-1/horizon)`.
pub fn bucket_factor(horizon_hours: f64) -> f64 {
    -(-1.0 / horizon_hours).exp_m1()
}

/// Offset to apply for this observation. Out-of-range offsets fall back to
/// UTC.
pub fn effective_offset(observation: &Observation, default_minutes: i32) -> i32 {
    let minutes = observation.utc_offset_minutes.unwrap_or(default_minutes);
    if minutes.abs() > MAX_UTC_OFFSET_MINUTES {
        0
    } else {
        minutes
    }
}

/// Wall-clock time in the user's local calendar. `None` when the shift
/// leaves chrono's representable range.
pub fn local_time(now: DateTime<Utc>, offset_minutes: i32) -> Option<NaiveDateTime> {
    now.checked_add_signed(Duration::minutes(i64::from(offset_minutes)))
        .map(|local| local.naive_utc())
}

/// Move a bucket toward `target`. An empty bucket starts from `raw`.
pub fn blend_bucket(prior: Option<Axes>, raw: Axes, target: Axes, factor: f64) -> Axes {
    let base = prior.unwrap_or(raw);
    Axes::new(
        (1.0 - factor) * base.v + factor * target.v,
        (1.0 - factor) * base.a + factor * target.a,
    )
}

/// Update the day-of-week and hour-of-day buckets for `now`.
///
/// A bucket whose read fails is left untouched. If the local time cannot be
/// represented no bucket is touched.
pub fn record(
    store: &dyn IStateStore,
    user_id: &str,
    observation: &Observation,
    blend: Axes,
    now: DateTime<Utc>,
    config: &SeasonalityConfig,
) -> Vec<VigilError> {
    let offset = effective_offset(observation, config.default_utc_offset_minutes);
    let Some(local) = local_time(now, offset) else {
        return vec![VigilError::SeasonalityWriteFailed {
            kind: "calendar".to_string(),
            period: 0,
            reason: format!("{now} shifted by {offset} minutes is out of range"),
        }];
    };
    let factor = bucket_factor(config.horizon_hours);
    let mut failures = Vec::new();

    for kind in SeasonalityKind::ALL {
        let period = kind.period_of(&local);
        let failed = |reason: String| VigilError::SeasonalityWriteFailed {
            kind: kind.as_str().to_string(),
            period,
            reason,
        };
        let prior = match store.get_seasonality(user_id, kind, period) {
            Ok(prior) => prior,
            Err(e) => {
                failures.push(failed(format!("read: {e}")));
                continue;
            }
        };
        let value = blend_bucket(prior, observation.point(), blend, factor);
        match store.save_seasonality(user_id, kind, period, value) {
            Ok(()) => debug!(
                user_id,
                %kind,
                period,
                v = value.v,
                a = value.a,
                "seasonality bucket updated"
            ),
            Err(e) => failures.push(failed(e.to_string())),
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn offset_shifts_calendar() {
        // 2024-01-01 is a Monday.
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 23, 30, 0).unwrap();
        let local = local_time(now, 60).unwrap();
        assert_eq!(SeasonalityKind::DayOfWeek.period_of(&local), 1);
        assert_eq!(SeasonalityKind::HourOfDay.period_of(&local), 0);
    }

    #[test]
    fn shift_past_calendar_range_is_none() {
        assert!(local_time(DateTime::<Utc>::MAX_UTC, 60).is_none());
        assert!(local_time(DateTime::<Utc>::MIN_UTC, -60).is_none());
        assert!(local_time(DateTime::<Utc>::MAX_UTC, 0).is_some());
    }

    #[test]
    fn out_of_range_offset_is_utc() {
        let obs = Observation::new(0.0, 0.3, 1.0).with_utc_offset(24 * 60);
        assert_eq!(effective_offset(&obs, 120), 0);
        let obs = Observation::new(0.0, 0.3, 1.0);
        assert_eq!(effective_offset(&obs, 120), 120);
    }

    #[test]
    fn empty_bucket_starts_from_raw() {
        let raw = Axes::new(1.0, 1.0);
        let v = blend_bucket(None, raw, Axes::new(0.0, 0.0), 0.25);
        assert_eq!(v, Axes::new(0.75, 0.75));
    }
}
