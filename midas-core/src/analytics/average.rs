use crate::MidasError;
use crate::analytics::format::round4;

/// Smoothing factor used by [`exponential_moving_average`].
///
/// `2 / (interval + 1)` for intervals above 3. Shorter intervals are clamped
/// to a fixed `0.7`, which keeps 1-3 period averages from tracking the raw
/// series too closely.
#[must_use]
pub fn smoothing_factor(interval: usize) -> f64 {
    if interval > 3 {
        2.0 / (interval as f64 + 1.0)
    } else {
        0.7
    }
}

fn ensure_interval(interval: usize, what: &str) -> Result<(), MidasError> {
    if interval == 0 {
        return Err(MidasError::invalid_arg(format!(
            "{what}: interval must be at least 1"
        )));
    }
    Ok(())
}

/// Simple moving average with an expanding warm-up window.
///
/// For index `i < interval` the output is the mean of `data[0..=i]`; after
/// that it is the mean of the trailing `interval` values. The window sum is
/// maintained incrementally, so the cost is linear in `data.len()` regardless
/// of the interval. An interval longer than the data yields a purely
/// expanding mean. Values are rounded to 4 decimals.
///
/// # Errors
/// Returns `Err(MidasError::InvalidArg)` if `interval` is zero.
///
/// ```
/// use midas_core::simple_moving_average;
///
/// let sma = simple_moving_average(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
/// assert_eq!(sma, vec![1.0, 1.5, 2.5, 3.5]);
/// ```
pub fn simple_moving_average(data: &[f64], interval: usize) -> Result<Vec<f64>, MidasError> {
    ensure_interval(interval, "simple_moving_average")?;

    let mut out = Vec::with_capacity(data.len());
    let mut sum = 0.0;
    for (i, &v) in data.iter().enumerate() {
        sum += v;
        if i < interval {
            out.push(round4(sum / (i + 1) as f64));
        } else {
            sum -= data[i - interval];
            out.push(round4(sum / interval as f64));
        }
    }
    Ok(out)
}

/// Unrounded EMA used by chained computations. `interval` must be non-zero.
pub(crate) fn ema_unrounded(data: &[f64], interval: usize) -> Vec<f64> {
    let Some((&seed, rest)) = data.split_first() else {
        return Vec::new();
    };
    let alpha = smoothing_factor(interval);
    let mut out = Vec::with_capacity(data.len());
    out.push(seed);
    let mut prev = seed;
    for &v in rest {
        prev = alpha.mul_add(v, (1.0 - alpha) * prev);
        out.push(prev);
    }
    out
}

/// Exponential moving average.
///
/// The first output is the first input, unmodified. Each following value is
/// `alpha * data[i] + (1 - alpha) * out[i - 1]` with `alpha` from
/// [`smoothing_factor`]. The recursion runs on unrounded values; only the
/// emitted values after the seed are rounded to 4 decimals.
///
/// # Errors
/// Returns `Err(MidasError::InvalidArg)` if `interval` is zero.
pub fn exponential_moving_average(
    data: &[f64],
    interval: usize,
) -> Result<Vec<f64>, MidasError> {
    ensure_interval(interval, "exponential_moving_average")?;

    let mut out = ema_unrounded(data, interval);
    for v in out.iter_mut().skip(1) {
        *v = round4(*v);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_clamped_for_short_windows() {
        assert_eq!(smoothing_factor(1), 0.7);
        assert_eq!(smoothing_factor(3), 0.7);
        assert_eq!(smoothing_factor(4), 0.4);
        assert_eq!(smoothing_factor(9), 0.2);
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(matches!(
            simple_moving_average(&[1.0], 0),
            Err(MidasError::InvalidArg(_))
        ));
        assert!(matches!(
            exponential_moving_average(&[1.0], 0),
            Err(MidasError::InvalidArg(_))
        ));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(simple_moving_average(&[], 5).unwrap().is_empty());
        assert!(exponential_moving_average(&[], 5).unwrap().is_empty());
    }

    #[test]
    fn ema_seed_is_first_value() {
        let out = exponential_moving_average(&[10.123_456_7, 11.0, 12.0], 2).unwrap();
        assert_eq!(out[0], 10.123_456_7);
        // 0.7 * 11 + 0.3 * 10.1234567 = 10.73703701
        assert!((out[1] - 10.737).abs() < 1e-9);
    }
}
