use thiserror::Error;

/// Error type for the midas analytics and shaping utilities.
///
/// Most functions degrade silently (empty in, empty out; IEEE results for
/// division by zero). Errors are reserved for inputs that have no sensible
/// numeric interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MidasError {
    /// Invalid input argument (zero window, mismatched lengths, bad date key).
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl MidasError {
    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }
}
