//! Column-shaped tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::FieldValue;

/// One field of a column table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Column {
    /// A sequence with one entry per original row.
    Series(Vec<FieldValue>),
    /// A non-sequence value carried alongside the series (e.g. a symbol name).
    Scalar(FieldValue),
}

impl Column {
    /// Number of entries for a series, `None` for a scalar.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Series(v) => Some(v.len()),
            Self::Scalar(_) => None,
        }
    }

    /// Returns the series entries, if this is a series.
    #[must_use]
    pub fn as_series(&self) -> Option<&[FieldValue]> {
        match self {
            Self::Series(v) => Some(v),
            Self::Scalar(_) => None,
        }
    }
}

/// Data laid out as one sequence per field name.
///
/// Serializes as a flat JSON object, matching the chart data files.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnTable {
    fields: BTreeMap<String, Column>,
}

impl ColumnTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, name: impl Into<String>, column: Column) -> Option<Column> {
        self.fields.insert(name.into(), column)
    }

    /// Look up a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Column> {
        self.fields.get(name)
    }

    /// Series entries of a field, or `None` if absent or scalar.
    #[must_use]
    pub fn series(&self, name: &str) -> Option<&[FieldValue]> {
        self.get(name).and_then(Column::as_series)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the table has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, column)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Column)> for ColumnTable {
    fn from_iter<I: IntoIterator<Item = (String, Column)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
