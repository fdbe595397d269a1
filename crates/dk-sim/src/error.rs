//! Error types for damage calculations.

use dk_core::DkError;
use dk_input::RevetmentFamily;
use thiserror::Error;

/// Recoverable failure reported by a degradation model.
///
/// The run finishes with errors; other locations keep calculating.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Model failed: {message}")]
    Failed { message: String },

    #[error("Model does not support {family} locations")]
    Unsupported { family: RevetmentFamily },
}

/// Fatal failure of a calculation run.
///
/// Any of these ends the run in `FinishedWithExceptions`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Location {location}, time step {step}: diagnostics of {found} returned for a {expected} location")]
    FamilyMismatch {
        location: usize,
        step: usize,
        expected: RevetmentFamily,
        found: RevetmentFamily,
    },

    #[error("Location {location}, time step {step}: missing diagnostic value {field}")]
    MissingDiagnostic {
        location: usize,
        step: usize,
        field: &'static str,
    },

    #[error("Location {location}, time step {step}: {source}")]
    NonFinite {
        location: usize,
        step: usize,
        #[source]
        source: DkError,
    },

    #[error("Location {location}, time step {step}: negative damage increment {increment}")]
    NegativeIncrement { location: usize, step: usize, increment: f64 },

    #[error(
        "Location {location}, time step {step}: damage {damage} differs from {before} + {increment}"
    )]
    InconsistentDamage {
        location: usize,
        step: usize,
        before: f64,
        increment: f64,
        damage: f64,
    },

    #[error("Calculation worker panicked: {message}")]
    WorkerPanic { message: String },
}

pub type CalculationResult<T> = Result<T, CalculationError>;
