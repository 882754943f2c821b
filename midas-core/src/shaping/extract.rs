use midas_types::{FieldValue, LabeledSeries, Row};

/// Inclusive numeric range applied to one field of each row.
///
/// The bounds may be given in either order.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter {
    /// Row key holding the value to test (typically a date key).
    pub field: String,
    /// One end of the range.
    pub start: f64,
    /// The other end of the range.
    pub end: f64,
}

impl RangeFilter {
    /// Build a filter on `field` between `start` and `end`.
    pub fn new(field: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            field: field.into(),
            start,
            end,
        }
    }

    /// Whether the row's filter field is numeric and inside the range.
    #[must_use]
    pub fn admits(&self, row: &Row) -> bool {
        let (lo, hi) = (self.start.min(self.end), self.start.max(self.end));
        row.get(&self.field)
            .and_then(FieldValue::as_f64)
            .is_some_and(|v| v >= lo && v <= hi)
    }
}

/// Project one field out of every row, in order. Missing keys become `Null`.
#[must_use]
pub fn extract_field(rows: &[Row], field: &str) -> Vec<FieldValue> {
    rows.iter()
        .map(|row| row.get(field).cloned().unwrap_or_default())
        .collect()
}

/// Build a `{label, data: [[x, y], ...]}` point list from rows.
///
/// A row contributes a point only when both its `x_field` and `y_field`
/// values are truthy (see [`FieldValue::is_truthy`]) and, if `filter` is
/// given, the filter admits it. Source order is kept; nothing is sorted.
#[must_use]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "midas_core::shaping::extract_time_series_points",
        level = "debug",
        skip(rows, filter),
        fields(rows = rows.len(), filtered = filter.is_some()),
    )
)]
pub fn extract_time_series_points(
    rows: &[Row],
    x_field: &str,
    y_field: &str,
    filter: Option<&RangeFilter>,
) -> LabeledSeries {
    let data = rows
        .iter()
        .filter_map(|row| {
            let x = row.get(x_field).filter(|v| v.is_truthy())?;
            let y = row.get(y_field).filter(|v| v.is_truthy())?;
            if filter.is_some_and(|f| !f.admits(row)) {
                return None;
            }
            Some([x.clone(), y.clone()])
        })
        .collect();
    LabeledSeries {
        label: y_field.to_owned(),
        data,
    }
}
