//! Checkpoint and resume for generator instances.
//!
//! Because the memory record is the whole state of a generator, a snapshot
//! of it is enough to continue the sequence later, in another process if
//! need be. Checkpoints carry the record plus identifying metadata and can
//! be encoded as JSON or as compact binary.

use crate::core::{Memory, Position};
use crate::machine::Progress;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use uuid::Uuid;

pub mod error;

pub use error::{CheckpointError, CheckpointIssue};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of one generator instance.
///
/// # Example
///
/// ```rust
/// use resumable::checkpoint::Checkpoint;
/// use resumable::core::NoInput;
/// use resumable::generators::even_fib::{EvenFib, EvenFibParams};
/// use resumable::machine::Machine;
///
/// let mut machine = Machine::new(EvenFib, EvenFibParams { bound: 50 });
/// machine.step(NoInput);
///
/// let json = machine.checkpoint().to_json().unwrap();
/// let checkpoint = Checkpoint::from_json(&json).unwrap();
/// let mut resumed = Machine::restore(EvenFib, checkpoint).unwrap();
///
/// assert_eq!(resumed.memory(), machine.memory());
/// assert_eq!(resumed.step(NoInput), machine.step(NoInput));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint<P, S> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// Name of the generator the record belongs to
    pub generator: String,

    /// When the checkpoint was taken
    pub taken_at: DateTime<Utc>,

    /// The memory record
    pub memory: Memory<P, S>,

    /// Work done on the record so far
    pub progress: Progress,
}

impl<P, S> Checkpoint<P, S>
where
    P: Position,
    S: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// Snapshot `memory` as belonging to `generator`.
    pub fn capture(generator: &str, memory: &Memory<P, S>, progress: Progress) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            generator: generator.to_string(),
            taken_at: Utc::now(),
            memory: memory.clone(),
            progress,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check that the checkpoint can be resumed by `expected_generator`,
    /// reporting ALL problems found.
    pub fn validate(&self, expected_generator: &str) -> Result<(), CheckpointError> {
        match self.check(expected_generator) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(issues) => {
                let issues: Vec<CheckpointIssue> = issues.iter().cloned().collect();
                tracing::warn!(generator = expected_generator, ?issues, "rejecting checkpoint");
                Err(CheckpointError::ValidationFailed(issues))
            }
        }
    }

    fn check(&self, expected_generator: &str) -> Validation<(), NonEmptyVec<CheckpointIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<CheckpointIssue>>> = Vec::new();

        checks.push(if self.version == CHECKPOINT_VERSION {
            Validation::success(())
        } else {
            Validation::fail(CheckpointIssue::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            })
        });

        checks.push(if self.generator == expected_generator {
            Validation::success(())
        } else {
            Validation::fail(CheckpointIssue::GeneratorMismatch {
                found: self.generator.clone(),
                expected: expected_generator.to_string(),
            })
        });

        checks.push(if self.progress.emitted <= self.progress.steps {
            Validation::success(())
        } else {
            Validation::fail(CheckpointIssue::InconsistentProgress {
                steps: self.progress.steps,
                emitted: self.progress.emitted,
            })
        });

        Validation::all_vec(checks).map(|_| ())
    }
}
