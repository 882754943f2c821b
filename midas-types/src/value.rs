//! Scalar cell values and row records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::DateKey;

/// One record of a row-oriented table: field name to cell value.
pub type Row = BTreeMap<String, FieldValue>;

/// Mapping from output field name to the row key it is read from.
///
/// Used when transposing a row-oriented table into a column table.
pub type FieldMap = BTreeMap<String, String>;

/// A JSON-compatible cell value.
///
/// Chart data files are plain JSON, so a cell is either absent (`Null`), a
/// boolean, a number, a string, or a nested list of cells.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Missing or explicit `null`.
    #[default]
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Any numeric value; integers are widened to `f64`.
    Number(f64),
    /// Free text.
    Text(String),
    /// Nested sequence of cells.
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Whether the value counts as present when filtering chart points.
    ///
    /// `Null`, `false`, `0`, `NaN` and the empty string are falsy; every
    /// other value (including empty lists) is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::List(_) => true,
        }
    }

    /// Numeric view of the value.
    ///
    /// Numbers are returned as-is and numeric text is parsed; everything else
    /// yields `None`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns the text if this is a `Text` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True for `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<DateKey> for FieldValue {
    fn from(v: DateKey) -> Self {
        Self::Number(f64::from(v.get()))
    }
}

impl<T: Into<Self>> From<Vec<T>> for FieldValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
