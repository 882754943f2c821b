use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits kept in every emitted series value.
pub const DECIMALS: u32 = 4;

/// Round `value` to `dp` fractional digits, halves away from zero.
///
/// Rounding is done on the exact binary value of the float, the same value
/// fixed-point formatting sees. Non-finite values and magnitudes beyond the
/// decimal range are returned unchanged.
#[must_use]
pub fn round_dp(value: f64, dp: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Round to [`DECIMALS`] fractional digits.
#[must_use]
pub fn round4(value: f64) -> f64 {
    round_dp(value, DECIMALS)
}

/// Render one value as fixed-point text with exactly [`DECIMALS`] digits.
///
/// Non-finite values render as `NaN`, `Infinity` or `-Infinity`.
#[must_use]
pub fn fixed(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    Decimal::from_f64_retain(value).map_or_else(
        || format!("{value:.4}"),
        |d| {
            let d = d.round_dp_with_strategy(DECIMALS, RoundingStrategy::MidpointAwayFromZero);
            format!("{d:.4}")
        },
    )
}

/// Render a series as fixed-point text for display consumers.
#[must_use]
pub fn to_fixed(values: &[f64]) -> Vec<String> {
    values.iter().copied().map(fixed).collect()
}
