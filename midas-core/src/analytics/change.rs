use crate::analytics::format::round4;

/// Period-over-period percent change, as a ratio.
///
/// The first entry is always `0`; entry `i` is `data[i] / data[i - 1] - 1`
/// rounded to 4 decimals. A zero previous value is not guarded and yields
/// `inf` or `NaN`.
///
/// ```
/// use midas_core::percent_change;
///
/// assert_eq!(percent_change(&[100.0, 110.0, 99.0]), vec![0.0, 0.1, -0.1]);
/// ```
#[must_use]
pub fn percent_change(data: &[f64]) -> Vec<f64> {
    if data.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(data.len());
    out.push(0.0);
    out.extend(data.windows(2).map(|w| round4(w[1] / w[0] - 1.0)));
    out
}
