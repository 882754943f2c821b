use midas_types::MacdSeries;

use crate::MidasError;
use crate::analytics::average::ema_unrounded;
use crate::analytics::format::round4;

/// EMA periods for MACD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacdParams {
    /// Fast EMA period.
    pub fast: usize,
    /// Slow EMA period.
    pub slow: usize,
    /// Signal (DEA) EMA period.
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl MacdParams {
    fn validate(self) -> Result<Self, MidasError> {
        if self.fast == 0 || self.slow == 0 || self.signal == 0 {
            return Err(MidasError::invalid_arg(format!(
                "macd periods must be at least 1 (fast={}, slow={}, signal={})",
                self.fast, self.slow, self.signal
            )));
        }
        Ok(self)
    }
}

fn compute(prices: &[f64], params: MacdParams) -> MacdSeries {
    let fast = ema_unrounded(prices, params.fast);
    let slow = ema_unrounded(prices, params.slow);
    let dif: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let dea = ema_unrounded(&dif, params.signal);
    let macd: Vec<f64> = dif.iter().zip(&dea).map(|(d, e)| (d - e) * 2.0).collect();

    let round_all = |v: Vec<f64>| v.into_iter().map(round4).collect::<Vec<_>>();
    MacdSeries {
        macd: round_all(macd),
        dif: round_all(dif),
        dea: round_all(dea),
    }
}

/// MACD with the standard 12/26/9 periods.
///
/// `dif = EMA12 - EMA26`, `dea = EMA9(dif)` and `macd = (dif - dea) * 2`,
/// one entry per price. The whole pipeline runs unrounded and the three
/// outputs are rounded to 4 decimals at the end. Missing or empty prices
/// produce three empty sequences.
///
/// ```
/// use midas_core::macd;
///
/// assert!(macd(None).is_empty());
/// let m = macd(Some(&[10.0, 10.0, 10.0][..]));
/// assert_eq!(m.dif, vec![0.0, 0.0, 0.0]);
/// ```
#[must_use]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "midas_core::analytics::macd",
        level = "debug",
        skip(prices),
        fields(points = prices.map_or(0, |p| p.len())),
    )
)]
pub fn macd(prices: Option<&[f64]>) -> MacdSeries {
    match prices {
        Some(p) if !p.is_empty() => compute(p, MacdParams::default()),
        _ => MacdSeries::default(),
    }
}

/// MACD with caller-chosen periods.
///
/// # Errors
/// Returns `Err(MidasError::InvalidArg)` if any period is zero.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "midas_core::analytics::macd_with",
        level = "debug",
        skip(prices),
        fields(points = prices.len(), fast = params.fast, slow = params.slow, signal = params.signal),
    )
)]
pub fn macd_with(prices: &[f64], params: MacdParams) -> Result<MacdSeries, MidasError> {
    let params = params.validate()?;
    if prices.is_empty() {
        return Ok(MacdSeries::default());
    }
    Ok(compute(prices, params))
}
