//! Checkpoint error types.

use thiserror::Error;

/// A single problem found while validating a checkpoint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckpointIssue {
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Checkpoint was taken from generator '{found}', expected '{expected}'")]
    GeneratorMismatch { found: String, expected: String },

    #[error("Checkpoint records {emitted} emissions in only {steps} steps")]
    InconsistentProgress { steps: u64, emitted: u64 },
}

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint data failed validation
    #[error("Checkpoint validation failed: {}", format_issues(.0))]
    ValidationFailed(Vec<CheckpointIssue>),
}

fn format_issues(issues: &[CheckpointIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
