use midas_types::{Column, ColumnTable, FieldMap, FieldValue, Row};

/// Transpose a row-oriented table into a column table.
///
/// `field_map` maps each output field name to the row key it reads. Every
/// output series has exactly `rows.len()` entries in row order; a row missing
/// the key contributes `FieldValue::Null`. No rows gives an empty table.
#[must_use]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "midas_core::shaping::rows_to_columns",
        level = "debug",
        skip_all,
        fields(rows = rows.len(), fields = field_map.len()),
    )
)]
pub fn rows_to_columns(rows: &[Row], field_map: &FieldMap) -> ColumnTable {
    if rows.is_empty() {
        return ColumnTable::new();
    }
    field_map
        .iter()
        .map(|(out_name, row_key)| {
            let series = rows
                .iter()
                .map(|row| row.get(row_key).cloned().unwrap_or_default())
                .collect();
            (out_name.clone(), Column::Series(series))
        })
        .collect()
}

/// Slice every series of `table` to `[start, end)`.
///
/// Bounds are clamped to each series' length and `start >= end` gives an
/// empty series. Scalar fields are copied unchanged.
#[must_use]
pub fn slice_fields(table: &ColumnTable, start: usize, end: usize) -> ColumnTable {
    table
        .iter()
        .map(|(name, column)| {
            let column = match column {
                Column::Series(values) => Column::Series(clamped_slice(values, start, end).to_vec()),
                Column::Scalar(v) => Column::Scalar(v.clone()),
            };
            (name.to_owned(), column)
        })
        .collect()
}

fn clamped_slice(values: &[FieldValue], start: usize, end: usize) -> &[FieldValue] {
    let end = end.min(values.len());
    let start = start.min(end);
    &values[start..end]
}
