//! Caller-invoked failure reporting.
//!
//! Chart pages report bad data (a missing file, an empty series) through a
//! single helper instead of raising. With the `tracing` feature the message
//! is an `ERROR` event; without it, a line on stderr.

use std::fmt::Display;

/// Report a failure message for diagnostics. Never panics, never returns an error.
pub fn report_failure(msg: impl Display) {
    #[cfg(feature = "tracing")]
    {
        tracing::error!(target: "midas_core::failure", "Failure : {msg}");
    }
    #[cfg(not(feature = "tracing"))]
    {
        eprintln!("Failure : {msg}");
    }
}
