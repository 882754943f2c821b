use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use midas_types::DateKey;

use crate::MidasError;

/// Anything [`encode_date`] can turn into a [`DateKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    /// A calendar date.
    Date(NaiveDate),
    /// An instant; its UTC calendar date is used.
    DateTime(DateTime<Utc>),
    /// Milliseconds since the Unix epoch, interpreted in UTC.
    EpochMillis(i64),
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

impl From<i64> for DateInput {
    fn from(ms: i64) -> Self {
        Self::EpochMillis(ms)
    }
}

/// Calendar conversions for [`DateKey`].
pub trait DateKeyExt {
    /// The calendar date this key encodes.
    ///
    /// # Errors
    /// Returns `Err(MidasError::InvalidArg)` if the key is not a real date
    /// (for example `20230230`).
    fn to_naive_date(self) -> Result<NaiveDate, MidasError>;
}

impl DateKeyExt for DateKey {
    fn to_naive_date(self) -> Result<NaiveDate, MidasError> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), self.day())
            .ok_or_else(|| MidasError::invalid_arg(format!("{self} is not a calendar date")))
    }
}

fn key_of<D: Datelike>(d: &D) -> Result<DateKey, MidasError> {
    DateKey::from_ymd(d.year(), d.month(), d.day()).ok_or_else(|| {
        MidasError::invalid_arg(format!(
            "year {} does not fit in a YYYYMMDD date key",
            d.year()
        ))
    })
}

fn from_epoch_millis(ms: i64) -> Result<DateTime<Utc>, MidasError> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| MidasError::invalid_arg(format!("epoch millis {ms} out of range")))
}

/// Encode a date, instant or epoch-millisecond value as `YYYYMMDD`.
///
/// Instants and epoch values are taken in UTC; use [`encode_date_in_tz`] to
/// pick the calendar of a specific exchange.
///
/// # Errors
/// Returns `Err(MidasError::InvalidArg)` if an epoch value is outside the
/// representable range or the year does not fit in a date key.
///
/// ```
/// use chrono::NaiveDate;
/// use midas_core::{encode_date, DateKey};
///
/// let d = NaiveDate::from_ymd_opt(2016, 1, 4).unwrap();
/// assert_eq!(encode_date(d).unwrap(), DateKey::new(20160104));
/// assert_eq!(encode_date(1_451_865_600_000_i64).unwrap(), DateKey::new(20160104));
/// ```
pub fn encode_date(input: impl Into<DateInput>) -> Result<DateKey, MidasError> {
    match input.into() {
        DateInput::Date(d) => key_of(&d),
        DateInput::DateTime(dt) => key_of(&dt),
        DateInput::EpochMillis(ms) => key_of(&from_epoch_millis(ms)?),
    }
}

/// Encode an epoch-millisecond instant using the calendar of `tz`.
///
/// # Errors
/// Returns `Err(MidasError::InvalidArg)` if `epoch_ms` is out of range or
/// the year does not fit in a date key.
pub fn encode_date_in_tz(epoch_ms: i64, tz: Tz) -> Result<DateKey, MidasError> {
    let local = from_epoch_millis(epoch_ms)?.with_timezone(&tz);
    key_of(&local)
}

/// Epoch milliseconds of UTC midnight on the encoded date.
///
/// # Errors
/// Returns `Err(MidasError::InvalidArg)` if `key` is not a calendar date.
pub fn decode_date_to_epoch(key: DateKey) -> Result<i64, MidasError> {
    let date = key.to_naive_date()?;
    Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
}

/// Epoch milliseconds of local midnight in `tz` on the encoded date.
///
/// When midnight is skipped by a DST transition the earliest valid local time
/// of that day is not searched for; the key is rejected instead.
///
/// # Errors
/// Returns `Err(MidasError::InvalidArg)` if `key` is not a calendar date or
/// midnight does not exist in `tz` on that date.
pub fn decode_date_to_epoch_in_tz(key: DateKey, tz: Tz) -> Result<i64, MidasError> {
    let naive = key.to_naive_date()?.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| MidasError::invalid_arg(format!("midnight of {key} does not exist in {tz}")))
}

/// Encode a batch of inputs.
///
/// # Errors
/// Fails on the first input that [`encode_date`] rejects.
pub fn encode_dates<I>(inputs: I) -> Result<Vec<DateKey>, MidasError>
where
    I: IntoIterator,
    I::Item: Into<DateInput>,
{
    inputs.into_iter().map(encode_date).collect()
}

/// Decode a batch of keys to UTC-midnight epoch milliseconds.
///
/// # Errors
/// Fails on the first key that is not a calendar date.
pub fn decode_dates_to_epoch(keys: &[DateKey]) -> Result<Vec<i64>, MidasError> {
    keys.iter().copied().map(decode_date_to_epoch).collect()
}
