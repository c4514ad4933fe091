//! Error types for the host seams.
//!
//! The simulation itself never fails; these only surface from storage and
//! from loading tuning data. Callers log them and carry on with defaults.

/// Failure talking to the key/value store
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Rejected tuning data
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    #[error("tuning JSON could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
