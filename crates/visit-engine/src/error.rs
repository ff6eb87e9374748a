//! Error types for constructing decision inputs.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors raised when decision inputs are built from malformed arguments.
///
/// The decision functions themselves are total boolean functions over
/// well-formed inputs; these errors exist so that malformed construction
/// arguments surface as invalid-argument failures instead of being
/// swallowed as "unavailable".
#[derive(Error, Debug)]
pub enum EngineError {
    /// A slot policy with out-of-range bounds, or one that could never
    /// accept any instant.
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    /// A closed interval whose end precedes its start.
    #[error("Invalid interval: end {end} precedes start {start}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Convenience alias used throughout visit-engine.
pub type Result<T> = std::result::Result<T, EngineError>;
