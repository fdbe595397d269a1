//! Damage calculation over a built calculation input.
//!
//! Provides:
//! - `DegradationModel` contract and the `ModelCatalog` keyed by revetment family
//! - Per-location sequential damage accumulation with sticky failure times
//! - `Calculator`: background run with progress, cancellation and a terminal state
//! - Serializable per-step, per-location and whole-run outputs

pub mod calculator;
pub mod error;
pub mod model;
pub mod output;

mod location_run;

pub use calculator::{CalculationReport, CalculationState, Calculator};
pub use error::{CalculationError, CalculationResult, ModelError};
pub use model::{
    AsphaltWaveImpactDiagnostics, DegradationModel, GrassOverloadDiagnostics, GrassWaveImpactDiagnostics,
    ModelCatalog, NaturalStoneWaveImpactDiagnostics, StepDiagnostics, StepOutput,
};
pub use output::{CalculationOutput, LocationDependentOutput, TimeDependentOutput};
