//! Series records handed to chart front ends.

use serde::{Deserialize, Serialize};

use crate::FieldValue;

/// MACD output: three sequences, one entry per input price.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MacdSeries {
    /// Histogram: `(dif - dea) * 2`.
    pub macd: Vec<f64>,
    /// Fast EMA minus slow EMA.
    pub dif: Vec<f64>,
    /// Signal line: EMA of `dif`.
    pub dea: Vec<f64>,
}

impl MacdSeries {
    /// Number of time points covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dif.len()
    }

    /// True when no price data was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dif.is_empty()
    }
}

/// A labelled list of `[x, y]` points, the shape flot-style charts consume.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LabeledSeries {
    /// Series label (the y field name).
    pub label: String,
    /// Points in source order.
    pub data: Vec<[FieldValue; 2]>,
}

/// An `{x, y}` point, the shape D3 line generators consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point<X, Y> {
    /// Horizontal coordinate.
    pub x: X,
    /// Vertical coordinate.
    pub y: Y,
}

/// A `{name, value}` pair used to render key/value property lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameValue {
    /// Property name.
    pub name: String,
    /// Property value.
    pub value: FieldValue,
}
