//! Location requests as supplied by callers.
//!
//! Every optional field left at `None` is filled from the top-layer defaults
//! first and the family defaults second when the builder resolves the location.

use dk_core::Real;

use super::{RevetmentFamily, TopLayerType};

/// Asphalt revetment loaded by wave impact.
#[derive(Clone, Debug, PartialEq)]
pub struct AsphaltWaveImpactProperties {
    pub x: Real,
    pub top_layer_type: TopLayerType,
    pub failure_tension: Real,
    pub soil_elasticity: Real,
    pub thickness_upper_layer: Real,
    pub elastic_modulus_upper_layer: Real,
    pub initial_damage: Option<Real>,
    pub failure_number: Option<Real>,
    /// Sub layer is only modelled when both thickness and modulus are given.
    pub thickness_sub_layer: Option<Real>,
    pub elastic_modulus_sub_layer: Option<Real>,
    pub density_of_water: Option<Real>,
    pub average_number_of_waves_ctm: Option<Real>,
    pub fatigue_alpha: Option<Real>,
    pub fatigue_beta: Option<Real>,
    pub impact_number_c: Option<Real>,
    pub stiffness_relation_nu: Option<Real>,
}

impl AsphaltWaveImpactProperties {
    pub fn new(
        x: Real,
        top_layer_type: TopLayerType,
        failure_tension: Real,
        soil_elasticity: Real,
        thickness_upper_layer: Real,
        elastic_modulus_upper_layer: Real,
    ) -> Self {
        Self {
            x,
            top_layer_type,
            failure_tension,
            soil_elasticity,
            thickness_upper_layer,
            elastic_modulus_upper_layer,
            initial_damage: None,
            failure_number: None,
            thickness_sub_layer: None,
            elastic_modulus_sub_layer: None,
            density_of_water: None,
            average_number_of_waves_ctm: None,
            fatigue_alpha: None,
            fatigue_beta: None,
            impact_number_c: None,
            stiffness_relation_nu: None,
        }
    }
}

/// Grass revetment loaded by wave impact.
#[derive(Clone, Debug, PartialEq)]
pub struct GrassWaveImpactProperties {
    pub x: Real,
    pub top_layer_type: TopLayerType,
    pub initial_damage: Option<Real>,
    pub failure_number: Option<Real>,
    pub time_line_agwi: Option<Real>,
    pub time_line_bgwi: Option<Real>,
    pub time_line_cgwi: Option<Real>,
    pub minimum_wave_height_temax: Option<Real>,
    pub maximum_wave_height_temin: Option<Real>,
    pub wave_angle_impact_nwa: Option<Real>,
    pub wave_angle_impact_qwa: Option<Real>,
    pub wave_angle_impact_rwa: Option<Real>,
    pub upper_limit_loading_aul: Option<Real>,
    pub lower_limit_loading_all: Option<Real>,
}

impl GrassWaveImpactProperties {
    pub fn new(x: Real, top_layer_type: TopLayerType) -> Self {
        Self {
            x,
            top_layer_type,
            initial_damage: None,
            failure_number: None,
            time_line_agwi: None,
            time_line_bgwi: None,
            time_line_cgwi: None,
            minimum_wave_height_temax: None,
            maximum_wave_height_temin: None,
            wave_angle_impact_nwa: None,
            wave_angle_impact_qwa: None,
            wave_angle_impact_rwa: None,
            upper_limit_loading_aul: None,
            lower_limit_loading_all: None,
        }
    }
}

/// Grass revetment loaded by wave run-up on the outer slope.
#[derive(Clone, Debug, PartialEq)]
pub struct GrassWaveRunupProperties {
    pub x: Real,
    pub top_layer_type: TopLayerType,
    /// Tangent of the outer slope angle.
    pub outer_slope: Real,
    pub initial_damage: Option<Real>,
    pub failure_number: Option<Real>,
    pub critical_cumulative_overload: Option<Real>,
    pub critical_front_velocity: Option<Real>,
    pub increased_load_transition_alpha_m: Option<Real>,
    pub reduced_strength_transition_alpha_s: Option<Real>,
    pub average_number_of_waves_ctm: Option<Real>,
    pub fixed_number_of_waves: Option<u32>,
    pub front_velocity_cu: Option<Real>,
    pub representative_wave_runup_gammab: Option<Real>,
    pub representative_wave_runup_gammaf: Option<Real>,
}

impl GrassWaveRunupProperties {
    pub fn new(x: Real, top_layer_type: TopLayerType, outer_slope: Real) -> Self {
        Self {
            x,
            top_layer_type,
            outer_slope,
            initial_damage: None,
            failure_number: None,
            critical_cumulative_overload: None,
            critical_front_velocity: None,
            increased_load_transition_alpha_m: None,
            reduced_strength_transition_alpha_s: None,
            average_number_of_waves_ctm: None,
            fixed_number_of_waves: None,
            front_velocity_cu: None,
            representative_wave_runup_gammab: None,
            representative_wave_runup_gammaf: None,
        }
    }
}

/// Grass revetment on the crest or inner slope loaded by overtopping waves.
#[derive(Clone, Debug, PartialEq)]
pub struct GrassWaveOvertoppingProperties {
    pub x: Real,
    pub top_layer_type: TopLayerType,
    pub initial_damage: Option<Real>,
    pub failure_number: Option<Real>,
    pub critical_cumulative_overload: Option<Real>,
    pub critical_front_velocity: Option<Real>,
    pub increased_load_transition_alpha_m: Option<Real>,
    pub reduced_strength_transition_alpha_s: Option<Real>,
    pub average_number_of_waves_ctm: Option<Real>,
    pub fixed_number_of_waves: Option<u32>,
    pub acceleration_alpha_a_for_crest: Option<Real>,
    pub acceleration_alpha_a_for_inner_slope: Option<Real>,
    pub front_velocity_cwo: Option<Real>,
    /// Defaults to the height of the outer crest.
    pub dike_height: Option<Real>,
}

impl GrassWaveOvertoppingProperties {
    pub fn new(x: Real, top_layer_type: TopLayerType) -> Self {
        Self {
            x,
            top_layer_type,
            initial_damage: None,
            failure_number: None,
            critical_cumulative_overload: None,
            critical_front_velocity: None,
            increased_load_transition_alpha_m: None,
            reduced_strength_transition_alpha_s: None,
            average_number_of_waves_ctm: None,
            fixed_number_of_waves: None,
            acceleration_alpha_a_for_crest: None,
            acceleration_alpha_a_for_inner_slope: None,
            front_velocity_cwo: None,
            dike_height: None,
        }
    }
}

/// Placed natural stone revetment loaded by wave impact.
#[derive(Clone, Debug, PartialEq)]
pub struct NaturalStoneWaveImpactProperties {
    pub x: Real,
    pub top_layer_type: TopLayerType,
    pub thickness_top_layer: Real,
    pub relative_density: Real,
    pub initial_damage: Option<Real>,
    pub failure_number: Option<Real>,
    pub hydraulic_load_ap: Option<Real>,
    pub hydraulic_load_bp: Option<Real>,
    pub hydraulic_load_cp: Option<Real>,
    pub hydraulic_load_np: Option<Real>,
    pub hydraulic_load_as: Option<Real>,
    pub hydraulic_load_bs: Option<Real>,
    pub hydraulic_load_cs: Option<Real>,
    pub hydraulic_load_ns: Option<Real>,
    pub hydraulic_load_xib: Option<Real>,
    pub slope_upper_level_aus: Option<Real>,
    pub slope_lower_level_als: Option<Real>,
    pub upper_limit_loading_aul: Option<Real>,
    pub upper_limit_loading_bul: Option<Real>,
    pub upper_limit_loading_cul: Option<Real>,
    pub lower_limit_loading_all: Option<Real>,
    pub lower_limit_loading_bll: Option<Real>,
    pub lower_limit_loading_cll: Option<Real>,
    pub distance_maximum_wave_elevation_asmax: Option<Real>,
    pub distance_maximum_wave_elevation_bsmax: Option<Real>,
    pub normative_width_of_wave_impact_awi: Option<Real>,
    pub normative_width_of_wave_impact_bwi: Option<Real>,
    pub wave_angle_impact_betamax: Option<Real>,
}

impl NaturalStoneWaveImpactProperties {
    pub fn new(x: Real, top_layer_type: TopLayerType, thickness_top_layer: Real, relative_density: Real) -> Self {
        Self {
            x,
            top_layer_type,
            thickness_top_layer,
            relative_density,
            initial_damage: None,
            failure_number: None,
            hydraulic_load_ap: None,
            hydraulic_load_bp: None,
            hydraulic_load_cp: None,
            hydraulic_load_np: None,
            hydraulic_load_as: None,
            hydraulic_load_bs: None,
            hydraulic_load_cs: None,
            hydraulic_load_ns: None,
            hydraulic_load_xib: None,
            slope_upper_level_aus: None,
            slope_lower_level_als: None,
            upper_limit_loading_aul: None,
            upper_limit_loading_bul: None,
            upper_limit_loading_cul: None,
            lower_limit_loading_all: None,
            lower_limit_loading_bll: None,
            lower_limit_loading_cll: None,
            distance_maximum_wave_elevation_asmax: None,
            distance_maximum_wave_elevation_bsmax: None,
            normative_width_of_wave_impact_awi: None,
            normative_width_of_wave_impact_bwi: None,
            wave_angle_impact_betamax: None,
        }
    }
}

/// A location request of any family.
#[derive(Clone, Debug, PartialEq)]
pub enum LocationConstructionProperties {
    AsphaltWaveImpact(AsphaltWaveImpactProperties),
    GrassWaveImpact(GrassWaveImpactProperties),
    GrassWaveRunup(GrassWaveRunupProperties),
    GrassWaveOvertopping(GrassWaveOvertoppingProperties),
    NaturalStoneWaveImpact(NaturalStoneWaveImpactProperties),
}

impl LocationConstructionProperties {
    pub fn family(&self) -> RevetmentFamily {
        match self {
            Self::AsphaltWaveImpact(_) => RevetmentFamily::AsphaltWaveImpact,
            Self::GrassWaveImpact(_) => RevetmentFamily::GrassWaveImpact,
            Self::GrassWaveRunup(_) => RevetmentFamily::GrassWaveRunup,
            Self::GrassWaveOvertopping(_) => RevetmentFamily::GrassWaveOvertopping,
            Self::NaturalStoneWaveImpact(_) => RevetmentFamily::NaturalStoneWaveImpact,
        }
    }

    pub fn x(&self) -> Real {
        match self {
            Self::AsphaltWaveImpact(p) => p.x,
            Self::GrassWaveImpact(p) => p.x,
            Self::GrassWaveRunup(p) => p.x,
            Self::GrassWaveOvertopping(p) => p.x,
            Self::NaturalStoneWaveImpact(p) => p.x,
        }
    }

    pub fn top_layer_type(&self) -> TopLayerType {
        match self {
            Self::AsphaltWaveImpact(p) => p.top_layer_type,
            Self::GrassWaveImpact(p) => p.top_layer_type,
            Self::GrassWaveRunup(p) => p.top_layer_type,
            Self::GrassWaveOvertopping(p) => p.top_layer_type,
            Self::NaturalStoneWaveImpact(p) => p.top_layer_type,
        }
    }
}

impl From<AsphaltWaveImpactProperties> for LocationConstructionProperties {
    fn from(p: AsphaltWaveImpactProperties) -> Self {
        Self::AsphaltWaveImpact(p)
    }
}

impl From<GrassWaveImpactProperties> for LocationConstructionProperties {
    fn from(p: GrassWaveImpactProperties) -> Self {
        Self::GrassWaveImpact(p)
    }
}

impl From<GrassWaveRunupProperties> for LocationConstructionProperties {
    fn from(p: GrassWaveRunupProperties) -> Self {
        Self::GrassWaveRunup(p)
    }
}

impl From<GrassWaveOvertoppingProperties> for LocationConstructionProperties {
    fn from(p: GrassWaveOvertoppingProperties) -> Self {
        Self::GrassWaveOvertopping(p)
    }
}

impl From<NaturalStoneWaveImpactProperties> for LocationConstructionProperties {
    fn from(p: NaturalStoneWaveImpactProperties) -> Self {
        Self::NaturalStoneWaveImpact(p)
    }
}
