//! Midas chart data shapes and configuration primitives.
//!
//! Everything in this crate is plain data: the row/column table shapes fed to
//! the shaping utilities, the series records handed to chart front ends, the
//! `YYYYMMDD` date key, and the static server configuration.
#![warn(missing_docs)]

mod config;
mod date;
mod series;
mod table;
mod value;

pub use config::{ServerConfig, VirtualDirectory};
pub use date::DateKey;
pub use series::{LabeledSeries, MacdSeries, NameValue, Point};
pub use table::{Column, ColumnTable};
pub use value::{FieldMap, FieldValue, Row};
