//! Engine error taxonomy

use thiserror::Error;

/// Errors raised by the probability/odds/stake pipeline.
///
/// Every variant is recoverable at the caller boundary: evaluation stops at
/// the first failing stage and no partial result is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// No usable historical value for a field (`or`, `dr` or `rebs`)
    #[error("insufficient data: no usable `{field}` values in the game log")]
    InsufficientData { field: &'static str },

    /// Probability is exactly zero, so fair odds would be infinite
    #[error("probability is zero, fair odds are undefined")]
    UndefinedOdds,

    /// Sportsbook quote of zero (or not a finite number)
    #[error("invalid sportsbook odds: {0}")]
    InvalidOdds(f64),

    /// The data source has no log for this athlete
    #[error("no game log for athlete '{0}'")]
    UnknownAthlete(String),
}
