#![doc = include_str!("../README.md")]
//! midas-core
//!
//! Numeric analytics and series shaping used to prepare time-series market
//! data for charting.
//!
//! - `analytics`: moving averages, MACD, mean/standard deviation, percent change.
//! - `shaping`: row/column reshaping, field extraction, time-range filtering,
//!   date keys and binary search over sorted date keys.
//!
//! Precision
//! ---------
//! Every computation runs on unrounded `f64`. Series-producing functions round
//! each emitted value to [`analytics::format::DECIMALS`] fractional digits once,
//! at output; chained computations such as MACD never feed rounded values back
//! into the arithmetic. Use [`analytics::format::to_fixed`] to render values
//! as fixed-point text.
//!
//! Failure policy
//! --------------
//! Empty inputs produce empty outputs and division by zero yields IEEE
//! non-finite values. [`MidasError`] is returned only for arguments that have
//! no numeric meaning (a zero-length window, mismatched merge lengths, a date
//! key that is not a calendar date).
#![warn(missing_docs)]

/// Moving averages, MACD and descriptive statistics.
pub mod analytics;
/// Diagnostic reporting for chart data problems.
pub mod diagnostics;
mod error;
/// Reshaping, filtering and searching of chart series.
pub mod shaping;

pub use analytics::average::{exponential_moving_average, simple_moving_average, smoothing_factor};
pub use analytics::change::percent_change;
pub use analytics::format::{round4, to_fixed};
pub use analytics::macd::{MacdParams, macd, macd_with};
pub use analytics::stats::{deviation_level, mean, standard_deviation};
pub use diagnostics::report_failure;
pub use error::MidasError;
pub use shaping::collections::{
    Emptiness, array_to_identity_map, is_in_array, label_concat, object_keys_excluding_date,
    object_to_name_value_list, range_array, remove_first_occurrence,
};
pub use shaping::columns::{rows_to_columns, slice_fields};
pub use shaping::dates::{
    DateInput, DateKeyExt, decode_date_to_epoch, decode_date_to_epoch_in_tz,
    decode_dates_to_epoch, encode_date, encode_date_in_tz, encode_dates,
};
pub use shaping::extract::{RangeFilter, extract_field, extract_time_series_points};
pub use shaping::merge::{merge_parallel, merge_points};
pub use shaping::search::{SearchOutcome, binary_search_insertion_point};

pub use midas_types::*;
