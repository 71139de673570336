use crate::sample::SampleSet;

/// Estimates one tangent per sample so that the resulting Hermite spline
/// follows the local trend of the data.
///
/// Interior tangents are the average of the two neighbouring secant slopes,
/// boundary tangents copy the single adjacent secant. Both ends of a flat
/// segment are then forced to zero so the curve stays constant across it.
pub fn monotone_tangents(samples: &SampleSet) -> Vec<f64> {
    let n = samples.len();
    let delta = secant_slopes(samples.x(), samples.y());

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = (delta[i - 1] + delta[i]) / 2.0;
    }
    tangents[0] = delta[0];
    tangents[n - 1] = delta[n - 2];

    // A flat segment zeroes the tangent at both of its ends, overriding
    // whatever the averaging above assigned to the shared samples.
    for i in 0..n - 1 {
        if delta[i].abs() < 1e-30 {
            tangents[i] = 0.0;
            tangents[i + 1] = 0.0;
        }
    }
    tangents
}

fn secant_slopes(x: &[f64], y: &[f64]) -> Vec<f64> {
    (0..x.len() - 1)
        .map(|i| (y[i + 1] - y[i]) / (x[i + 1] - x[i]))
        .collect()
}
