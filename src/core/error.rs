//! Error types for scheduler operations.

use thiserror::Error;

/// Errors produced by scheduler components.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// A task was advanced again after it already completed.
    #[error("task already completed")]
    ResumeAfterCompletion,
    /// Configuration failed validation with context.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
///
/// Failures raised inside a callback or a resumable travel through this
/// alias unchanged, so `run_to_completion` surfaces exactly the error the
/// unit of work produced.
pub type AppResult<T> = Result<T, anyhow::Error>;
