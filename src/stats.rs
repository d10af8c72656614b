/// z-score of the two-sided 95% normal confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Arithmetic mean. NaN for an empty sample.
pub fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Sample standard deviation with Bessel's correction. NaN for fewer than
/// two values.
pub fn stddev(xs: &[f64]) -> f64 {
    let mu = mean(xs);
    let sum_sq: f64 = xs.iter().map(|x| (x - mu) * (x - mu)).sum();
    (sum_sq / (xs.len() as f64 - 1.0)).sqrt()
}

/// `(low, high)` endpoints of the 95% confidence interval for the mean of
/// `trials` samples.
pub fn confidence_interval(mean: f64, stddev: f64, trials: usize) -> (f64, f64) {
    let half_width = CONFIDENCE_95 * stddev / (trials as f64).sqrt();
    (mean - half_width, mean + half_width)
}
