/// Arithmetic mean.
///
/// An empty slice yields `NaN` (0 / 0); callers that can see empty input
/// should check first.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`, no Bessel correction).
///
/// `NaN` for an empty slice.
///
/// ```
/// use midas_core::standard_deviation;
///
/// assert_eq!(standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.0);
/// ```
#[must_use]
pub fn standard_deviation(values: &[f64]) -> f64 {
    let avg = mean(values);
    let square_diffs: Vec<f64> = values
        .iter()
        .map(|v| {
            let diff = v - avg;
            diff * diff
        })
        .collect();
    mean(&square_diffs).sqrt()
}

/// Relative distance of `value` from `benchmark`: `|(value - benchmark) / benchmark|`.
///
/// A zero benchmark gives `inf` (or `NaN` when `value` is also zero).
#[must_use]
pub fn deviation_level(value: f64, benchmark: f64) -> f64 {
    ((value - benchmark) / benchmark).abs()
}
