//! Sequential damage accumulation for a single location.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use dk_core::{DkError, Event, Real, Tolerances, ensure_finite, nearly_equal};
use dk_input::{CalculationInput, LocationDependentInput, RevetmentFamily};
use tracing::trace;

use crate::error::{CalculationError, CalculationResult};
use crate::model::{ModelCatalog, StepOutput};
use crate::output::{LocationDependentOutput, TimeDependentOutput};

/// Why a location did not produce an output.
#[derive(Debug)]
pub(crate) enum LocationFailure {
    /// Recoverable; reported as an error event.
    Error(Event),
    Fatal(CalculationError),
    /// The run was cancelled or halted before this location finished.
    Stopped,
}

/// Shared, read-only view of a run handed to every location.
pub(crate) struct RunContext<'a> {
    pub input: &'a CalculationInput,
    pub catalog: &'a ModelCatalog,
    pub cancel: &'a AtomicBool,
    /// Set after a fatal error in any location.
    pub halt: &'a AtomicBool,
    pub completed_steps: &'a AtomicUsize,
}

/// Walk all time steps of one location in order.
///
/// The failure time is recorded on the first step whose damage reaches the
/// failure number and never moved afterwards.
pub(crate) fn run_location(
    index: usize,
    location: &LocationDependentInput,
    ctx: &RunContext<'_>,
) -> Result<LocationDependentOutput, LocationFailure> {
    let family = location.family();
    let x = location.x();
    let Some(model) = ctx.catalog.get(family) else {
        return Err(LocationFailure::Error(Event::error(format!(
            "No degradation model is registered for the {family} location with position {x}."
        ))));
    };

    let failure_number = location.failure_number();
    let mut damage = location.initial_damage();
    let mut failed = false;
    let steps = ctx.input.time_steps();
    let mut outputs = Vec::with_capacity(steps.len());

    for (step_index, step) in steps.iter().enumerate() {
        if ctx.cancel.load(Ordering::Relaxed) || ctx.halt.load(Ordering::Relaxed) {
            return Err(LocationFailure::Stopped);
        }

        let output = model
            .compute_step(damage, step, location, ctx.input.profile())
            .map_err(|e| {
                LocationFailure::Error(Event::error(format!(
                    "The calculation of the {family} location with position {x} failed in time step {step_index}: {e}"
                )))
            })?;
        check_step(index, step_index, family, damage, &output).map_err(LocationFailure::Fatal)?;

        let time_of_failure = if !failed && output.damage >= failure_number {
            failed = true;
            trace!(location = index, time = step.end_time, "location failed");
            Some(step.end_time)
        } else {
            None
        };

        damage = output.damage;
        outputs.push(TimeDependentOutput {
            increment_damage: output.increment_damage,
            damage: output.damage,
            time_of_failure,
            diagnostics: output.diagnostics,
        });
        ctx.completed_steps.fetch_add(1, Ordering::Relaxed);
    }

    Ok(LocationDependentOutput::new(location.initial_damage(), outputs))
}

fn check_step(
    location: usize,
    step: usize,
    family: RevetmentFamily,
    damage_before: Real,
    output: &StepOutput,
) -> CalculationResult<()> {
    let found = output.diagnostics.family();
    if found != family {
        return Err(CalculationError::FamilyMismatch {
            location,
            step,
            expected: family,
            found,
        });
    }
    if let Some(field) = output.diagnostics.missing_field() {
        return Err(CalculationError::MissingDiagnostic { location, step, field });
    }

    let non_finite = |source: DkError| CalculationError::NonFinite { location, step, source };
    ensure_finite(output.increment_damage, "increment damage").map_err(non_finite)?;
    ensure_finite(output.damage, "damage").map_err(non_finite)?;

    if output.increment_damage < 0.0 {
        return Err(CalculationError::NegativeIncrement {
            location,
            step,
            increment: output.increment_damage,
        });
    }
    if !nearly_equal(output.damage, damage_before + output.increment_damage, Tolerances::default()) {
        return Err(CalculationError::InconsistentDamage {
            location,
            step,
            before: damage_before,
            increment: output.increment_damage,
            damage: output.damage,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AsphaltWaveImpactDiagnostics, StepDiagnostics};

    fn asphalt(increment: Real, damage: Real) -> StepOutput {
        StepOutput {
            increment_damage: increment,
            damage,
            diagnostics: StepDiagnostics::AsphaltWaveImpact(AsphaltWaveImpactDiagnostics {
                log_failure_tension: 0.2,
                maximum_peak_stress: 0.1,
                stiffness_relation: 0.35,
                computational_thickness: 0.3,
                equivalent_elastic_modulus: 1.6e4,
                average_number_of_waves: 900.0,
            }),
        }
    }

    #[test]
    fn consistent_step_passes() {
        assert_eq!(check_step(0, 0, RevetmentFamily::AsphaltWaveImpact, 0.1, &asphalt(0.2, 0.3)), Ok(()));
    }

    #[test]
    fn wrong_family_is_fatal() {
        let err = check_step(2, 1, RevetmentFamily::GrassWaveImpact, 0.0, &asphalt(0.1, 0.1)).unwrap_err();
        assert_eq!(
            err,
            CalculationError::FamilyMismatch {
                location: 2,
                step: 1,
                expected: RevetmentFamily::GrassWaveImpact,
                found: RevetmentFamily::AsphaltWaveImpact,
            }
        );
    }

    #[test]
    fn damage_bookkeeping_is_enforced() {
        let family = RevetmentFamily::AsphaltWaveImpact;
        assert!(matches!(
            check_step(0, 0, family, 0.5, &asphalt(-0.1, 0.4)),
            Err(CalculationError::NegativeIncrement { .. })
        ));
        assert!(matches!(
            check_step(0, 0, family, 0.5, &asphalt(0.1, 0.7)),
            Err(CalculationError::InconsistentDamage { .. })
        ));
        assert!(matches!(
            check_step(0, 0, family, 0.5, &asphalt(Real::NAN, 0.5)),
            Err(CalculationError::NonFinite { .. })
        ));
    }
}
