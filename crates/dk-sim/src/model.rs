//! Degradation model contract and the family-keyed model catalog.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dk_core::Real;
use dk_geometry::ProfileData;
use dk_input::{LocationDependentInput, RevetmentFamily, TimeDependentInput};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Physics of one revetment family.
///
/// Called once per location per time step, strictly in chronological order
/// for a given location. Implementations must be pure with respect to their
/// arguments; locations are calculated concurrently.
pub trait DegradationModel: Send + Sync {
    /// Advance the damage of `location` over `step`, starting from `damage_before`.
    ///
    /// The returned damage must equal `damage_before + increment_damage` and
    /// the increment must not be negative.
    fn compute_step(
        &self,
        damage_before: Real,
        step: &TimeDependentInput,
        location: &LocationDependentInput,
        profile: &ProfileData,
    ) -> Result<StepOutput, ModelError>;
}

/// Result of one model step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutput {
    pub increment_damage: Real,
    pub damage: Real,
    pub diagnostics: StepDiagnostics,
}

impl StepOutput {
    /// Step output whose damage is `damage_before + increment_damage`.
    pub fn accumulate(damage_before: Real, increment_damage: Real, diagnostics: StepDiagnostics) -> Self {
        Self {
            increment_damage,
            damage: damage_before + increment_damage,
            diagnostics,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AsphaltWaveImpactDiagnostics {
    pub log_failure_tension: Real,
    pub maximum_peak_stress: Real,
    pub stiffness_relation: Real,
    pub computational_thickness: Real,
    pub equivalent_elastic_modulus: Real,
    pub average_number_of_waves: Real,
}

/// Grass wave impact diagnostics; the optional values are required while
/// the revetment is loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrassWaveImpactDiagnostics {
    pub loading_revetment: bool,
    pub upper_limit_loading: Real,
    pub lower_limit_loading: Real,
    pub minimum_wave_height: Option<Real>,
    pub maximum_wave_height: Option<Real>,
    pub wave_angle_impact: Option<Real>,
    pub wave_height_impact: Option<Real>,
}

/// Cumulative overload diagnostics of the run-up and overtopping families.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrassOverloadDiagnostics {
    pub vertical_distance_water_level_elevation: Real,
    pub loading_revetment: bool,
    pub representative_wave_runup: Option<Real>,
    pub cumulative_overload: Option<Real>,
    pub average_number_of_waves: Option<Real>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NaturalStoneWaveImpactDiagnostics {
    pub outer_slope: Real,
    pub slope_upper_level: Real,
    pub slope_lower_level: Real,
    pub loading_revetment: bool,
    pub surf_similarity_parameter: Real,
    pub wave_steepness_deep_water: Real,
    pub upper_limit_loading: Real,
    pub lower_limit_loading: Real,
    pub hydraulic_load: Option<Real>,
    pub wave_angle_impact: Option<Real>,
    pub resistance: Option<Real>,
    pub reference_time_degradation: Option<Real>,
    pub reference_degradation: Option<Real>,
}

/// Family-specific per-step values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum StepDiagnostics {
    AsphaltWaveImpact(AsphaltWaveImpactDiagnostics),
    GrassWaveImpact(GrassWaveImpactDiagnostics),
    GrassWaveRunup(GrassOverloadDiagnostics),
    GrassWaveOvertopping(GrassOverloadDiagnostics),
    NaturalStoneWaveImpact(NaturalStoneWaveImpactDiagnostics),
}

impl StepDiagnostics {
    pub fn family(&self) -> RevetmentFamily {
        match self {
            Self::AsphaltWaveImpact(_) => RevetmentFamily::AsphaltWaveImpact,
            Self::GrassWaveImpact(_) => RevetmentFamily::GrassWaveImpact,
            Self::GrassWaveRunup(_) => RevetmentFamily::GrassWaveRunup,
            Self::GrassWaveOvertopping(_) => RevetmentFamily::GrassWaveOvertopping,
            Self::NaturalStoneWaveImpact(_) => RevetmentFamily::NaturalStoneWaveImpact,
        }
    }

    pub fn loading_revetment(&self) -> bool {
        match self {
            Self::AsphaltWaveImpact(_) => true,
            Self::GrassWaveImpact(d) => d.loading_revetment,
            Self::GrassWaveRunup(d) | Self::GrassWaveOvertopping(d) => d.loading_revetment,
            Self::NaturalStoneWaveImpact(d) => d.loading_revetment,
        }
    }

    /// First value that must be present in this step but is not.
    pub fn missing_field(&self) -> Option<&'static str> {
        if !self.loading_revetment() {
            return None;
        }
        let required: Vec<(&'static str, Option<Real>)> = match self {
            Self::AsphaltWaveImpact(_) => Vec::new(),
            Self::GrassWaveImpact(d) => vec![
                ("minimum_wave_height", d.minimum_wave_height),
                ("maximum_wave_height", d.maximum_wave_height),
                ("wave_angle_impact", d.wave_angle_impact),
                ("wave_height_impact", d.wave_height_impact),
            ],
            Self::GrassWaveRunup(d) | Self::GrassWaveOvertopping(d) => vec![
                ("representative_wave_runup", d.representative_wave_runup),
                ("cumulative_overload", d.cumulative_overload),
                ("average_number_of_waves", d.average_number_of_waves),
            ],
            Self::NaturalStoneWaveImpact(d) => vec![
                ("hydraulic_load", d.hydraulic_load),
                ("wave_angle_impact", d.wave_angle_impact),
                ("resistance", d.resistance),
                ("reference_time_degradation", d.reference_time_degradation),
                ("reference_degradation", d.reference_degradation),
            ],
        };
        required
            .into_iter()
            .find(|(_, value)| value.is_none())
            .map(|(name, _)| name)
    }
}

/// Degradation models keyed by the family they calculate.
#[derive(Clone, Default)]
pub struct ModelCatalog {
    models: HashMap<RevetmentFamily, Arc<dyn DegradationModel>>,
}

impl ModelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `model` for `family`, replacing any earlier registration.
    pub fn register(&mut self, family: RevetmentFamily, model: impl DegradationModel + 'static) {
        self.models.insert(family, Arc::new(model));
    }

    pub fn with_model(mut self, family: RevetmentFamily, model: impl DegradationModel + 'static) -> Self {
        self.register(family, model);
        self
    }

    pub fn get(&self, family: RevetmentFamily) -> Option<&Arc<dyn DegradationModel>> {
        self.models.get(&family)
    }

    pub fn contains(&self, family: RevetmentFamily) -> bool {
        self.models.contains_key(&family)
    }

    /// Registered families in declaration order.
    pub fn families(&self) -> Vec<RevetmentFamily> {
        RevetmentFamily::ALL
            .into_iter()
            .filter(|f| self.models.contains_key(f))
            .collect()
    }
}

impl fmt::Debug for ModelCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelCatalog")
            .field("families", &self.families())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overload(loading: bool, cumulative_overload: Option<Real>) -> GrassOverloadDiagnostics {
        GrassOverloadDiagnostics {
            vertical_distance_water_level_elevation: 1.0,
            loading_revetment: loading,
            representative_wave_runup: Some(2.0),
            cumulative_overload,
            average_number_of_waves: Some(900.0),
        }
    }

    #[test]
    fn unloaded_steps_need_no_optional_values() {
        let diagnostics = StepDiagnostics::GrassWaveRunup(overload(false, None));
        assert_eq!(diagnostics.missing_field(), None);
    }

    #[test]
    fn loaded_steps_name_the_missing_value() {
        let diagnostics = StepDiagnostics::GrassWaveOvertopping(overload(true, None));
        assert_eq!(diagnostics.family(), RevetmentFamily::GrassWaveOvertopping);
        assert_eq!(diagnostics.missing_field(), Some("cumulative_overload"));
    }

    struct Constant;

    impl DegradationModel for Constant {
        fn compute_step(
            &self,
            damage_before: Real,
            _step: &TimeDependentInput,
            _location: &LocationDependentInput,
            _profile: &ProfileData,
        ) -> Result<StepOutput, ModelError> {
            Ok(StepOutput::accumulate(
                damage_before,
                0.0,
                StepDiagnostics::GrassWaveRunup(overload(false, None)),
            ))
        }
    }

    #[test]
    fn catalog_lists_families_in_declaration_order() {
        let catalog = ModelCatalog::new()
            .with_model(RevetmentFamily::NaturalStoneWaveImpact, Constant)
            .with_model(RevetmentFamily::GrassWaveImpact, Constant);
        assert_eq!(
            catalog.families(),
            vec![RevetmentFamily::GrassWaveImpact, RevetmentFamily::NaturalStoneWaveImpact]
        );
        assert!(catalog.get(RevetmentFamily::AsphaltWaveImpact).is_none());
    }
}
