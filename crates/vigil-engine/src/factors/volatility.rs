use vigil_core::constants::SIGMA_FLOOR;
use vigil_core::Axes;

/// Update the exponentially-weighted standard deviation of each axis.
///
/// The residual is taken against the *new* baseline. The result never
/// drops below [`SIGMA_FLOOR`].
pub fn update_sigma(observed: Axes, baseline: Axes, prior_sigma: Axes, gamma: f64) -> Axes {
    Axes::new(
        sigma_axis(observed.v, baseline.v, prior_sigma.v, gamma),
        sigma_axis(observed.a, baseline.a, prior_sigma.a, gamma),
    )
}

fn sigma_axis(observed: f64, baseline: f64, prior_sigma: f64, gamma: f64) -> f64 {
    let residual = observed - baseline;
    let variance = (1.0 - gamma) * prior_sigma * prior_sigma + gamma * residual * residual;
    variance.sqrt().max(SIGMA_FLOOR)
}

/// Standardized deviation of the new short-term estimate from the baseline
/// as it stood *before* this update.
pub fn z_scores(short_term: Axes, prior_baseline: Axes, sigma: Axes) -> Axes {
    Axes::new(
        (short_term.v - prior_baseline.v) / sigma.v,
        (short_term.a - prior_baseline.a) / sigma.a,
    )
}
