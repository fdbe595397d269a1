//! The frozen product of a successful build.

use dk_geometry::ProfileData;

use crate::location::RevetmentFamily;
use crate::location::input::LocationDependentInput;
use crate::time::TimeDependentInput;

/// Immutable, structurally valid calculation input.
///
/// Only `CalculationInputBuilder::build` creates values of this type.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationInput {
    profile: ProfileData,
    time_steps: Vec<TimeDependentInput>,
    locations: Vec<LocationDependentInput>,
}

impl CalculationInput {
    pub(crate) fn new(
        profile: ProfileData,
        time_steps: Vec<TimeDependentInput>,
        locations: Vec<LocationDependentInput>,
    ) -> Self {
        Self {
            profile,
            time_steps,
            locations,
        }
    }

    pub fn profile(&self) -> &ProfileData {
        &self.profile
    }

    pub fn time_steps(&self) -> &[TimeDependentInput] {
        &self.time_steps
    }

    pub fn locations(&self) -> &[LocationDependentInput] {
        &self.locations
    }

    /// Families present, in first-seen order without duplicates.
    pub fn families(&self) -> Vec<RevetmentFamily> {
        let mut families = Vec::new();
        for location in &self.locations {
            let family = location.family();
            if !families.contains(&family) {
                families.push(family);
            }
        }
        families
    }
}
