use thiserror::Error;

/// Failure conditions of the forecast engine. All three are local,
/// synchronous and recoverable by the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForecastError {
    /// The baseline series is malformed (wrong length, non-contiguous
    /// months). No partial computation is attempted.
    #[error("invalid baseline series: {0}")]
    InvalidBaseline(String),

    /// Current liabilities are zero, so the current ratio has no meaning.
    /// Never converted to infinity or zero.
    #[error("current ratio is undefined: current liabilities are zero")]
    UndefinedRatio,

    /// Lookup of a scenario name that is not registered. No fallback
    /// scenario is substituted.
    #[error("unknown scenario \"{0}\"")]
    UnknownScenario(String),
}

pub type Result<T> = std::result::Result<T, ForecastError>;
