//! Numeric series analytics.
//!
//! Modules include:
//! - `average`: simple and exponential moving averages
//! - `macd`: moving average convergence/divergence
//! - `stats`: mean, population standard deviation, deviation level
//! - `change`: period-over-period percent change
//! - `format`: output rounding and fixed-point rendering
/// Simple and exponential moving averages.
pub mod average;
/// Period-over-period percent change.
pub mod change;
/// Output rounding and fixed-point text rendering.
pub mod format;
/// MACD (DIF, DEA and histogram).
pub mod macd;
/// Mean, standard deviation and deviation level.
pub mod stats;
