//! Series shaping utilities shared by chart pages.
//!
//! Modules include:
//! - `columns`: transpose row tables into column tables and slice them
//! - `extract`: project fields and build labelled point lists
//! - `merge`: zip parallel series into pairs or points
//! - `search`: binary search over sorted date keys
//! - `dates`: `YYYYMMDD` key encoding and decoding
//! - `collections`: small set/map helpers
/// Small set and mapping helpers.
pub mod collections;
/// Row to column transposition and slicing.
pub mod columns;
/// `YYYYMMDD` date key encoding.
pub mod dates;
/// Field projection and time-range point extraction.
pub mod extract;
/// Index-aligned merging of parallel series.
pub mod merge;
/// Binary search with insertion-point reporting.
pub mod search;
