//! A generator bundled with its memory record.
//!
//! `Machine` is the stateful shell around the pure [`step`] operation: it
//! owns exactly one memory record and counts the work done on it. Two
//! machines never share a record.

use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::config::MachineConfig;
use crate::core::{step, Generator, MemoryOf, Output, StepRecord, StepTrace, Tag};
use serde::{Deserialize, Serialize};

/// Work done on one memory record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Step calls made, including calls after termination.
    pub steps: u64,
    /// Steps that emitted a value.
    pub emitted: u64,
}

/// One generator instance.
///
/// # Example
///
/// ```rust
/// use resumable::core::NoInput;
/// use resumable::generators::even_fib::{EvenFib, EvenFibParams};
/// use resumable::machine::Machine;
///
/// let mut machine = Machine::new(EvenFib, EvenFibParams { bound: 50 });
/// let mut emitted = Vec::new();
/// loop {
///     let output = machine.step(NoInput);
///     emitted.extend(output.value().copied());
///     if output.done() {
///         break;
///     }
/// }
/// assert_eq!(emitted, vec![0, 2, 8, 34]);
/// assert_eq!(machine.progress().steps, 11);
/// ```
pub struct Machine<G: Generator> {
    generator: G,
    memory: MemoryOf<G>,
    progress: Progress,
    trace: Option<StepTrace<G::Position>>,
}

impl<G: Generator> Machine<G> {
    /// Create a machine with a freshly initialized record.
    pub fn new(generator: G, params: G::Params) -> Self {
        Self::with_config(generator, params, &MachineConfig::default())
    }

    pub fn with_config(generator: G, params: G::Params, config: &MachineConfig) -> Self {
        let memory = generator.init(params);
        let mut machine = Self::from_memory(generator, memory);
        if config.record_trace {
            machine.trace = Some(StepTrace::new());
        }
        machine
    }

    /// Adopt an existing record, e.g. one taken over from a direct caller.
    pub fn from_memory(generator: G, memory: MemoryOf<G>) -> Self {
        Self {
            generator,
            memory,
            progress: Progress::default(),
            trace: None,
        }
    }

    /// Advance the record by one step.
    pub fn step(&mut self, input: G::Input) -> Output<G::Value> {
        let from = self.memory.tag;
        let output = step(&self.generator, &mut self.memory, input);

        // Steps on a finished record change nothing and are not traced.
        if let (Some(trace), Tag::At(_)) = (self.trace.as_mut(), from) {
            trace.push(StepRecord {
                index: self.progress.steps,
                from,
                to: self.memory.tag,
                emitted: output.valid(),
            });
        }
        self.progress.steps += 1;
        if output.valid() {
            self.progress.emitted += 1;
        }
        output
    }

    pub fn is_done(&self) -> bool {
        self.memory.is_done()
    }

    pub fn tag(&self) -> Tag<G::Position> {
        self.memory.tag
    }

    pub fn memory(&self) -> &MemoryOf<G> {
        &self.memory
    }

    pub fn into_memory(self) -> MemoryOf<G> {
        self.memory
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// The step trace, if the machine was configured to record one.
    ///
    /// Holds one record per step up to and including the one that reached
    /// the terminal sentinel.
    pub fn trace(&self) -> Option<&StepTrace<G::Position>> {
        self.trace.as_ref()
    }

    /// Snapshot the record and progress counters.
    pub fn checkpoint(&self) -> Checkpoint<G::Position, G::Slots> {
        Checkpoint::capture(self.generator.name(), &self.memory, self.progress)
    }

    /// Rebuild a machine from a checkpoint taken from the same generator.
    ///
    /// The checkpoint is validated first; every problem found is reported.
    pub fn restore(
        generator: G,
        checkpoint: Checkpoint<G::Position, G::Slots>,
    ) -> Result<Self, CheckpointError> {
        checkpoint.validate(generator.name())?;
        tracing::debug!(
            generator = generator.name(),
            id = %checkpoint.id,
            tag = checkpoint.memory.tag.name(),
            "restoring checkpoint"
        );
        Ok(Self {
            generator,
            memory: checkpoint.memory,
            progress: checkpoint.progress,
            trace: None,
        })
    }
}
