//! Proportional redistribution of column widths.

/// Scales `distribution` so it adds up to roughly `goal`, keeping each
/// value's share of the total.
///
/// Every output value is rounded independently to `places` decimal digits,
/// so the result may miss `goal` by the accumulated rounding error. An empty
/// distribution yields an empty result; a distribution whose sum is not
/// positive has no proportions to keep and is split evenly instead.
///
/// # Examples
///
/// ```
/// use rtable::balancer::balance;
///
/// assert_eq!(balance(&[100.0, 100.0, 200.0], 200.0, 0), vec![50.0, 50.0, 100.0]);
/// assert_eq!(balance(&[1.0, 1.0, 1.0], 10.0, 0), vec![3.0, 3.0, 3.0]);
/// ```
pub fn balance(distribution: &[f64], goal: f64, places: i32) -> Vec<f64> {
    if distribution.is_empty() {
        return Vec::new();
    }

    let sum: f64 = distribution.iter().sum();
    if sum <= 0.0 || !sum.is_finite() {
        let even = round(goal / distribution.len() as f64, places);
        return vec![even; distribution.len()];
    }

    distribution
        .iter()
        .map(|value| round(goal * (value / sum), places))
        .collect()
}

/// Rounds `value` to `places` decimal digits, halves away from zero.
///
/// Negative `places` round to tens, hundreds, and so on.
pub fn round(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
