//! Build errors for declarative generators.

use thiserror::Error;

/// Errors that can occur when building a loop generator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Prologue not specified. Call .prologue(f) before .build()")]
    MissingPrologue,

    #[error("Loop guard not specified. Call .guard(guard) or .when(f)")]
    MissingGuard,

    #[error("State advance not specified. Call .advance(f)")]
    MissingAdvance,
}
