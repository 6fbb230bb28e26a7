use chrono::Duration;
use proptest::prelude::*;
use test_fixtures::t0;
use vigil_core::{Axes, Observation, Regime, TemporalState};
use vigil_engine::{step, UpdateParams};

fn arb_axes(lo: f64, hi: f64) -> impl Strategy<Value = Axes> {
    (lo..hi, lo..hi).prop_map(|(v, a)| Axes::new(v, a))
}

/// Any state a previous update could have committed.
fn arb_state() -> impl Strategy<Value = TemporalState> {
    (
        arb_axes(-1.0, 1.0),
        arb_axes(-1.0, 1.0),
        arb_axes(1e-3, 2.0),
        0.0..=1.0f64,
        0.0..=1.0f64,
        0u64..10_000,
    )
        .prop_map(|(short_term, baseline, sigma, r, c, n)| TemporalState {
            short_term,
            baseline,
            sigma,
            z: Axes::default(),
            risk_momentum: r,
            confidence_momentum: c,
            regime: Regime::Normal,
            last_ts: Some(t0()),
            n,
        })
}

fn arb_observation() -> impl Strategy<Value = Observation> {
    (
        -1.5..1.5f64,
        -0.5..1.5f64,
        0.0..=1.0f64,
        prop::option::of(arb_axes(-2.0, 2.0)),
        any::<bool>(),
    )
        .prop_map(|(v, a, c, hint, flagged)| {
            let mut obs = Observation::new(v, a, c);
            obs.prior_composite_state = hint;
            if flagged {
                obs = obs.with_risk_flags(["suicidal_ideation"]);
            }
            obs
        })
}

proptest! {
    #[test]
    fn committed_state_satisfies_invariants(
        prior in arb_state(),
        obs in arb_observation(),
        minutes in 0i64..500_000,
    ) {
        let now = t0() + Duration::minutes(minutes);
        let out = step(&prior, &obs, now, &UpdateParams::default());
        prop_assert!(out.state.check_invariants().is_ok(), "{:?}", out.state);
        prop_assert!(out.state.sigma.v >= 1e-3 && out.state.sigma.a >= 1e-3);
        prop_assert!((0.0..=1.0).contains(&out.state.risk_momentum));
        prop_assert!((0.0..=1.0).contains(&out.state.confidence_momentum));
        prop_assert!((0.0..=1.0).contains(&out.escalating_risk));
        prop_assert_eq!(out.state.n, prior.n + 1);
    }

    #[test]
    fn short_term_stays_between_prior_and_observation(
        prior in arb_state(),
        obs in arb_observation(),
        minutes in 0i64..100_000,
    ) {
        let now = t0() + Duration::minutes(minutes);
        let s = step(&prior, &obs, now, &UpdateParams::default()).state.short_term;
        let eps = 1e-12;
        prop_assert!(s.v >= prior.short_term.v.min(obs.valence) - eps);
        prop_assert!(s.v <= prior.short_term.v.max(obs.valence) + eps);
        prop_assert!(s.a >= prior.short_term.a.min(obs.arousal) - eps);
        prop_assert!(s.a <= prior.short_term.a.max(obs.arousal) + eps);
    }

    #[test]
    fn flagged_observations_always_alert(
        prior in arb_state(),
        obs in arb_observation(),
    ) {
        let obs = obs.with_risk_flags(["self_harm"]);
        let out = step(&prior, &obs, t0() + Duration::hours(1), &UpdateParams::default());
        prop_assert_eq!(out.state.regime, Regime::Alert);
    }

    #[test]
    fn last_ts_never_moves_backwards(
        prior in arb_state(),
        obs in arb_observation(),
        minutes in -10_000i64..10_000,
    ) {
        let now = t0() + Duration::minutes(minutes);
        let out = step(&prior, &obs, now, &UpdateParams::default());
        let last = out.state.last_ts.unwrap();
        prop_assert!(last >= t0());
        prop_assert!(last >= now);
        prop_assert!(out.factors.elapsed_hours >= 1.0);
    }

    #[test]
    fn decay_factors_are_proper_fractions(minutes in 0i64..10_000_000) {
        let prior = TemporalState {
            last_ts: Some(t0()),
            ..TemporalState::default()
        };
        let now = t0() + Duration::minutes(minutes);
        let f = step(&prior, &Observation::new(0.0, 0.3, 1.0), now, &UpdateParams::default()).factors;
        for x in [f.alpha, f.gamma, f.rho] {
            prop_assert!(x > 0.0 && x <= 1.0);
        }
        prop_assert!(f.alpha >= f.rho && f.rho >= f.gamma);
    }
}
