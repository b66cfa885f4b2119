use thiserror::Error;

/// Application-level error type for the skill-gap analyzer.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The Job-Skill Source could not be reached, answered with an error, or
    /// timed out. Propagated unchanged to the caller for user-facing display;
    /// there is no retry and no partial result.
    #[error("Skill source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
