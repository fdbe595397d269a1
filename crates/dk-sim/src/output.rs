//! Calculation outputs: per step, per location and per run.

use dk_core::Real;
use serde::{Deserialize, Serialize};

use crate::model::StepDiagnostics;

/// Damage bookkeeping of one location over one time step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeDependentOutput {
    pub increment_damage: Real,
    /// Cumulative damage at the end of the step.
    pub damage: Real,
    /// End time of the step, set only on the step in which failure occurred.
    pub time_of_failure: Option<Real>,
    pub diagnostics: StepDiagnostics,
}

/// All step outputs of one location, in chronological order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationDependentOutput {
    initial_damage: Real,
    time_dependent_outputs: Vec<TimeDependentOutput>,
}

impl LocationDependentOutput {
    pub fn new(initial_damage: Real, time_dependent_outputs: Vec<TimeDependentOutput>) -> Self {
        Self {
            initial_damage,
            time_dependent_outputs,
        }
    }

    pub fn initial_damage(&self) -> Real {
        self.initial_damage
    }

    pub fn time_dependent_outputs(&self) -> &[TimeDependentOutput] {
        &self.time_dependent_outputs
    }

    /// Cumulative damage at the end of each step.
    pub fn damages(&self) -> Vec<Real> {
        self.time_dependent_outputs.iter().map(|o| o.damage).collect()
    }

    /// Damage after the last step, or the initial damage when there are no steps.
    pub fn final_damage(&self) -> Real {
        self.time_dependent_outputs
            .last()
            .map_or(self.initial_damage, |o| o.damage)
    }

    pub fn time_of_failure(&self) -> Option<Real> {
        self.time_dependent_outputs.iter().find_map(|o| o.time_of_failure)
    }

    pub fn failed(&self) -> bool {
        self.time_of_failure().is_some()
    }
}

/// Outputs of a complete run, aligned with the input location order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutput {
    location_outputs: Vec<LocationDependentOutput>,
}

impl CalculationOutput {
    pub fn new(location_outputs: Vec<LocationDependentOutput>) -> Self {
        Self { location_outputs }
    }

    pub fn location_outputs(&self) -> &[LocationDependentOutput] {
        &self.location_outputs
    }
}
