//! Background calculation runs.
//!
//! A `Calculator` starts its worker thread on construction. Locations fan out
//! on rayon; each location walks its time steps sequentially. Progress,
//! state and the final report can be read from any thread while it runs.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::thread::{self, JoinHandle};

use dk_core::{DataResult, Event, Timer};
use dk_input::{CalculationInput, RevetmentFamily};
use rayon::prelude::*;
use tracing::{error, info, warn};

use crate::error::CalculationError;
use crate::location_run::{LocationFailure, RunContext, run_location};
use crate::model::ModelCatalog;
use crate::output::{CalculationOutput, LocationDependentOutput};

/// Lifecycle of a calculation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CalculationState {
    Created = 0,
    Running = 1,
    FinishedSuccessfully = 2,
    /// Recoverable failures were reported as error events.
    FinishedWithErrors = 3,
    /// An invariant was violated or a model panicked.
    FinishedWithExceptions = 4,
    Cancelled = 5,
}

impl CalculationState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Created,
            1 => Self::Running,
            2 => Self::FinishedSuccessfully,
            3 => Self::FinishedWithErrors,
            4 => Self::FinishedWithExceptions,
            _ => Self::Cancelled,
        }
    }

    pub fn is_finished(self) -> bool {
        !matches!(self, Self::Created | Self::Running)
    }
}

/// Final outcome of a run.
#[derive(Clone, Debug)]
pub struct CalculationReport {
    state: CalculationState,
    result: DataResult<CalculationOutput>,
    failure: Option<CalculationError>,
    partial: Vec<Option<LocationDependentOutput>>,
    elapsed_s: f64,
}

impl CalculationReport {
    pub fn state(&self) -> CalculationState {
        self.state
    }

    /// Output on success, otherwise the error events of the run.
    pub fn result(&self) -> &DataResult<CalculationOutput> {
        &self.result
    }

    /// The fatal error that ended the run, if any.
    pub fn failure(&self) -> Option<&CalculationError> {
        self.failure.as_ref()
    }

    /// Outputs of the locations that completed, aligned with the input order.
    pub fn partial(&self) -> &[Option<LocationDependentOutput>] {
        &self.partial
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }
}

struct Shared {
    state: AtomicU8,
    cancel: AtomicBool,
    /// Set by the run itself after a fatal error so other locations stop early.
    halt: AtomicBool,
    completed_steps: AtomicUsize,
    total_steps: usize,
    report: OnceLock<CalculationReport>,
}

impl Shared {
    fn set_state(&self, state: CalculationState) {
        self.state.store(state as u8, Ordering::Release);
    }
}

/// Runs a damage calculation on a background thread.
pub struct Calculator {
    shared: Arc<Shared>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Calculator {
    /// Start calculating `input` with the models in `catalog`.
    pub fn new(input: Arc<CalculationInput>, catalog: ModelCatalog) -> Self {
        let shared = Arc::new(Shared {
            state: AtomicU8::new(CalculationState::Created as u8),
            cancel: AtomicBool::new(false),
            halt: AtomicBool::new(false),
            completed_steps: AtomicUsize::new(0),
            total_steps: input.locations().len() * input.time_steps().len(),
            report: OnceLock::new(),
        });

        let worker = Arc::clone(&shared);
        let handle = thread::spawn(move || {
            worker.set_state(CalculationState::Running);
            let report = run_guarded(&worker, &input, &catalog);
            let state = report.state;
            // The worker is the only writer of the report.
            let _ = worker.report.set(report);
            worker.set_state(state);
        });

        Self {
            shared,
            handle: Mutex::new(Some(handle)),
        }
    }

    pub fn state(&self) -> CalculationState {
        CalculationState::from_u8(self.shared.state.load(Ordering::Acquire))
    }

    /// Completed location steps as a percentage of all location steps.
    pub fn progress(&self) -> f64 {
        if self.shared.total_steps == 0 {
            return 100.0;
        }
        let completed = self.shared.completed_steps.load(Ordering::Relaxed);
        100.0 * completed as f64 / self.shared.total_steps as f64
    }

    /// Ask the run to stop; honoured between time steps.
    pub fn cancel(&self) {
        self.shared.cancel.store(true, Ordering::Relaxed);
    }

    /// Block until the run reaches a terminal state.
    pub fn wait_for_completion(&self) -> CalculationState {
        let mut guard = match self.handle.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(handle) = guard.take()
            && handle.join().is_err()
        {
            error!("calculation worker terminated abnormally");
        }
        self.state()
    }

    /// Report of the finished run; `None` while it is still running.
    pub fn result(&self) -> Option<&CalculationReport> {
        self.shared.report.get()
    }
}

impl Drop for Calculator {
    fn drop(&mut self) {
        self.cancel();
        self.wait_for_completion();
    }
}

fn run_guarded(shared: &Shared, input: &CalculationInput, catalog: &ModelCatalog) -> CalculationReport {
    let timer = Timer::start("calculation");
    info!(
        locations = input.locations().len(),
        time_steps = input.time_steps().len(),
        "calculation started"
    );
    for family in uncovered_families(input, catalog) {
        warn!(%family, "no degradation model registered; its locations will fail");
    }

    let report = match panic::catch_unwind(AssertUnwindSafe(|| run(shared, input, catalog))) {
        Ok(outcomes) => summarize(outcomes, timer.elapsed_s()),
        Err(payload) => {
            let failure = CalculationError::WorkerPanic {
                message: panic_message(payload.as_ref()),
            };
            CalculationReport {
                state: CalculationState::FinishedWithExceptions,
                result: DataResult::failure(vec![Event::error(failure.to_string())]),
                failure: Some(failure),
                partial: vec![None; input.locations().len()],
                elapsed_s: timer.elapsed_s(),
            }
        }
    };

    if let Some(failure) = &report.failure {
        error!(%failure, "calculation aborted");
    }
    info!(state = ?report.state, elapsed_s = report.elapsed_s, "{} finished", timer.label());
    report
}

/// Families in the input that have no registered model.
fn uncovered_families(input: &CalculationInput, catalog: &ModelCatalog) -> Vec<RevetmentFamily> {
    input
        .families()
        .into_iter()
        .filter(|family| !catalog.contains(*family))
        .collect()
}

fn run(
    shared: &Shared,
    input: &CalculationInput,
    catalog: &ModelCatalog,
) -> Vec<Result<LocationDependentOutput, LocationFailure>> {
    let ctx = RunContext {
        input,
        catalog,
        cancel: &shared.cancel,
        halt: &shared.halt,
        completed_steps: &shared.completed_steps,
    };

    input
        .locations()
        .par_iter()
        .enumerate()
        .map(|(index, location)| {
            let outcome = run_location(index, location, &ctx);
            if matches!(outcome, Err(LocationFailure::Fatal(_))) {
                shared.halt.store(true, Ordering::Relaxed);
            }
            outcome
        })
        .collect()
}

/// Fold per-location outcomes into the terminal state and report.
///
/// Exceptions win over cancellation, which wins over errors.
fn summarize(outcomes: Vec<Result<LocationDependentOutput, LocationFailure>>, elapsed_s: f64) -> CalculationReport {
    let mut partial = Vec::with_capacity(outcomes.len());
    let mut events = Vec::new();
    let mut failure = None;
    let mut cancelled = false;

    for outcome in outcomes {
        match outcome {
            Ok(output) => partial.push(Some(output)),
            Err(LocationFailure::Error(event)) => {
                warn!(message = %event.message, "location calculation failed");
                events.push(event);
                partial.push(None);
            }
            Err(LocationFailure::Fatal(err)) => {
                if failure.is_none() {
                    failure = Some(err);
                }
                partial.push(None);
            }
            Err(LocationFailure::Stopped) => {
                cancelled = true;
                partial.push(None);
            }
        }
    }

    if let Some(err) = &failure {
        events.push(Event::error(err.to_string()));
        return CalculationReport {
            state: CalculationState::FinishedWithExceptions,
            result: DataResult::failure(events),
            failure,
            partial,
            elapsed_s,
        };
    }
    if cancelled {
        return CalculationReport {
            state: CalculationState::Cancelled,
            result: DataResult::failure(Vec::new()),
            failure: None,
            partial,
            elapsed_s,
        };
    }
    if !events.is_empty() {
        return CalculationReport {
            state: CalculationState::FinishedWithErrors,
            result: DataResult::failure(events),
            failure: None,
            partial,
            elapsed_s,
        };
    }

    let outputs: Vec<_> = partial.iter().flatten().cloned().collect();
    CalculationReport {
        state: CalculationState::FinishedSuccessfully,
        result: DataResult::success(CalculationOutput::new(outputs), Vec::new()),
        failure: None,
        partial,
        elapsed_s,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
