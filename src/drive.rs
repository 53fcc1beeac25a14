//! Driving loops.
//!
//! A caller can drive a generator in two equivalent ways:
//!
//! 1. loop while the tag is not the terminal sentinel, consuming valid
//!    outputs ([`collect_while_live`]);
//! 2. loop forever, consuming valid outputs and breaking on `done`
//!    ([`collect_until_done`]).
//!
//! Both produce the same sequence for the same record. [`emissions`] wraps
//! protocol 2 as an iterator, and [`run_with_budget`] drives a
//! [`Machine`] under [`BudgetRules`], returning what was emitted even when
//! the budget runs out.

use crate::core::{step, Generator, MemoryOf, Tag};
use crate::enforcement::{BudgetRules, BudgetViolation, DriveContext, ViolationStrategy};
use crate::machine::{Machine, Progress};
use chrono::Utc;
use stillwater::validation::Validation;
use thiserror::Error;

/// Errors from budgeted driving.
#[derive(Debug, Error)]
pub enum DriveError {
    #[error("Budget exceeded after {} steps: {}", .progress.steps, format_violations(.violations))]
    BudgetExceeded {
        violations: Vec<BudgetViolation>,
        progress: Progress,
    },
}

fn format_violations(violations: &[BudgetViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Protocol 1: step while the tag differs from the terminal sentinel.
#[tracing::instrument(skip_all, fields(generator = generator.name()))]
pub fn collect_while_live<G, F>(
    generator: &G,
    memory: &mut MemoryOf<G>,
    mut inputs: F,
) -> Vec<G::Value>
where
    G: Generator,
    F: FnMut() -> G::Input,
{
    let mut out = Vec::new();
    while memory.tag != Tag::DONE {
        if let Some(value) = step(generator, memory, inputs()).into_value() {
            out.push(value);
        }
    }
    out
}

/// Protocol 2: step forever, breaking on `done`.
#[tracing::instrument(skip_all, fields(generator = generator.name()))]
pub fn collect_until_done<G, F>(
    generator: &G,
    memory: &mut MemoryOf<G>,
    mut inputs: F,
) -> Vec<G::Value>
where
    G: Generator,
    F: FnMut() -> G::Input,
{
    let mut out = Vec::new();
    loop {
        let output = step(generator, memory, inputs());
        let done = output.done();
        if let Some(value) = output.into_value() {
            out.push(value);
        }
        if done {
            break;
        }
    }
    out
}

/// Iterator over the values a generator emits.
///
/// Non-emitting steps are stepped over; iteration ends once a step reports
/// `done`. The iterator borrows the record, which is left at the terminal
/// sentinel when iteration completes.
pub struct Emissions<'a, G: Generator, F> {
    generator: &'a G,
    memory: &'a mut MemoryOf<G>,
    inputs: F,
}

impl<G, F> Iterator for Emissions<'_, G, F>
where
    G: Generator,
    F: FnMut() -> G::Input,
{
    type Item = G::Value;

    fn next(&mut self) -> Option<G::Value> {
        loop {
            let output = step(self.generator, self.memory, (self.inputs)());
            let done = output.done();
            if let Some(value) = output.into_value() {
                return Some(value);
            }
            if done {
                return None;
            }
        }
    }
}

/// Iterate the values `generator` emits from `memory`, feeding default inputs.
///
/// ```rust
/// use resumable::drive::emissions;
/// use resumable::generators::even_fib::{self, EvenFib};
///
/// let mut fib = even_fib::init(50);
/// let sum: i64 = emissions(&EvenFib, &mut fib).sum();
/// assert_eq!(sum, 44);
/// ```
pub fn emissions<'a, G>(
    generator: &'a G,
    memory: &'a mut MemoryOf<G>,
) -> Emissions<'a, G, fn() -> G::Input>
where
    G: Generator,
    G::Input: Default,
{
    let inputs: fn() -> G::Input = <G::Input as Default>::default;
    emissions_with(generator, memory, inputs)
}

/// Iterate the values `generator` emits from `memory`, drawing each step's
/// input from `inputs`.
pub fn emissions_with<'a, G, F>(
    generator: &'a G,
    memory: &'a mut MemoryOf<G>,
    inputs: F,
) -> Emissions<'a, G, F>
where
    G: Generator,
    F: FnMut() -> G::Input,
{
    Emissions {
        generator,
        memory,
        inputs,
    }
}

/// Drive `machine` to exhaustion under `rules`, handing each emitted value
/// to `sink`.
///
/// Rules are checked before every step. With
/// [`ViolationStrategy::Abort`] the first failing check stops driving; the
/// machine keeps its record, so driving can continue later under a larger
/// budget.
#[tracing::instrument(skip_all, fields(generator = machine.generator().name()))]
pub fn drive_with_budget<G, F, K>(
    machine: &mut Machine<G>,
    rules: &BudgetRules,
    mut inputs: F,
    mut sink: K,
) -> Result<Progress, DriveError>
where
    G: Generator,
    F: FnMut() -> G::Input,
    K: FnMut(G::Value),
{
    let started_at = Utc::now();
    let start = machine.progress();

    while !machine.is_done() {
        let progress = machine.progress();
        let context = DriveContext {
            generator: machine.generator().name().to_string(),
            position: machine.tag().name(),
            steps: progress.steps - start.steps,
            emitted: progress.emitted - start.emitted,
            started_at,
        };

        if let Validation::Failure(errors) = rules.enforce(&context) {
            let violations: Vec<BudgetViolation> = errors.iter().cloned().collect();
            match rules.violation_strategy() {
                ViolationStrategy::Abort => {
                    tracing::warn!(?violations, steps = context.steps, "budget exceeded, aborting");
                    return Err(DriveError::BudgetExceeded {
                        violations,
                        progress,
                    });
                }
                ViolationStrategy::IgnoreAndLog => {
                    tracing::warn!(
                        ?violations,
                        steps = context.steps,
                        "budget exceeded, continuing"
                    );
                }
            }
        }

        if let Some(value) = machine.step(inputs()).into_value() {
            sink(value);
        }
    }

    Ok(machine.progress())
}

/// A budgeted run that stopped before the generator was exhausted.
///
/// The record has already moved past every value in `emitted`, so they are
/// handed back here rather than dropped.
#[derive(Debug, Error)]
#[error("{error} ({} values emitted before stopping)", .emitted.len())]
pub struct Interrupted<V> {
    /// Values emitted before the drive stopped, in order.
    pub emitted: Vec<V>,
    #[source]
    pub error: DriveError,
}

/// Drive `machine` to exhaustion under `rules`, collecting emitted values.
///
/// ```rust
/// use resumable::core::NoInput;
/// use resumable::drive::run_with_budget;
/// use resumable::enforcement::{BudgetBuilder, BudgetRules};
/// use resumable::generators::even_fib::{EvenFib, EvenFibParams};
/// use resumable::machine::Machine;
///
/// let mut machine = Machine::new(EvenFib, EvenFibParams { bound: 50 });
/// let tight = BudgetBuilder::new().max_steps(4).build();
///
/// let stopped = run_with_budget(&mut machine, &tight, || NoInput).unwrap_err();
/// assert_eq!(stopped.emitted, vec![0, 2]);
///
/// let rest = run_with_budget(&mut machine, &BudgetRules::unlimited(), || NoInput).unwrap();
/// assert_eq!(rest, vec![8, 34]);
/// ```
pub fn run_with_budget<G, F>(
    machine: &mut Machine<G>,
    rules: &BudgetRules,
    inputs: F,
) -> Result<Vec<G::Value>, Interrupted<G::Value>>
where
    G: Generator,
    F: FnMut() -> G::Input,
{
    let mut emitted = Vec::new();
    match drive_with_budget(machine, rules, inputs, |value| emitted.push(value)) {
        Ok(_) => Ok(emitted),
        Err(error) => Err(Interrupted { emitted, error }),
    }
}
