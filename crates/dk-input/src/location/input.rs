//! Resolved, immutable location inputs.

use dk_core::Real;

use super::{RevetmentFamily, TopLayerType};

/// Fields every location carries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocationBase {
    pub x: Real,
    /// Profile height at `x`.
    pub z: Real,
    pub top_layer_type: TopLayerType,
    pub initial_damage: Real,
    pub failure_number: Real,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsphaltLayer {
    pub thickness: Real,
    pub elastic_modulus: Real,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsphaltFatigue {
    pub alpha: Real,
    pub beta: Real,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AsphaltWaveImpactInput {
    pub base: LocationBase,
    pub failure_tension: Real,
    pub soil_elasticity: Real,
    pub density_of_water: Real,
    pub upper_layer: AsphaltLayer,
    pub sub_layer: Option<AsphaltLayer>,
    pub average_number_of_waves_ctm: Real,
    pub fatigue: AsphaltFatigue,
    pub impact_number_c: Real,
    pub stiffness_relation_nu: Real,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrassWaveImpactTimeLine {
    pub a: Real,
    pub b: Real,
    pub c: Real,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrassWaveAngleImpact {
    pub nwa: Real,
    pub qwa: Real,
    pub rwa: Real,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GrassWaveImpactInput {
    pub base: LocationBase,
    pub time_line: GrassWaveImpactTimeLine,
    pub minimum_wave_height_temax: Real,
    pub maximum_wave_height_temin: Real,
    pub wave_angle_impact: GrassWaveAngleImpact,
    pub upper_limit_loading_aul: Real,
    pub lower_limit_loading_all: Real,
}

/// Cumulative overload parameters shared by run-up and overtopping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrassCumulativeOverload {
    pub critical_cumulative_overload: Real,
    pub critical_front_velocity: Real,
    pub increased_load_transition_alpha_m: Real,
    pub reduced_strength_transition_alpha_s: Real,
    pub average_number_of_waves_ctm: Real,
    pub fixed_number_of_waves: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepresentativeWaveRunup {
    pub gammab: Real,
    pub gammaf: Real,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GrassWaveRunupInput {
    pub base: LocationBase,
    pub outer_slope: Real,
    pub overload: GrassCumulativeOverload,
    pub front_velocity_cu: Real,
    pub representative_wave_runup: RepresentativeWaveRunup,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccelerationAlphaA {
    pub crest: Real,
    pub inner_slope: Real,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GrassWaveOvertoppingInput {
    pub base: LocationBase,
    pub overload: GrassCumulativeOverload,
    pub acceleration_alpha_a: AccelerationAlphaA,
    pub front_velocity_cwo: Real,
    pub dike_height: Real,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NaturalStoneHydraulicLoads {
    pub ap: Real,
    pub bp: Real,
    pub cp: Real,
    pub np: Real,
    pub as_: Real,
    pub bs: Real,
    pub cs: Real,
    pub ns: Real,
    pub xib: Real,
}

/// `a`, `b`, `c` coefficients of a loading limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NaturalStoneLimitLoading {
    pub a: Real,
    pub b: Real,
    pub c: Real,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NaturalStoneWaveImpactInput {
    pub base: LocationBase,
    pub thickness_top_layer: Real,
    pub relative_density: Real,
    pub hydraulic_loads: NaturalStoneHydraulicLoads,
    pub slope_upper_level_aus: Real,
    pub slope_lower_level_als: Real,
    pub upper_limit_loading: NaturalStoneLimitLoading,
    pub lower_limit_loading: NaturalStoneLimitLoading,
    pub distance_maximum_wave_elevation_asmax: Real,
    pub distance_maximum_wave_elevation_bsmax: Real,
    pub normative_width_of_wave_impact_awi: Real,
    pub normative_width_of_wave_impact_bwi: Real,
    pub wave_angle_impact_betamax: Real,
}

/// A location ready for calculation.
#[derive(Clone, Debug, PartialEq)]
pub enum LocationDependentInput {
    AsphaltWaveImpact(AsphaltWaveImpactInput),
    GrassWaveImpact(GrassWaveImpactInput),
    GrassWaveRunup(GrassWaveRunupInput),
    GrassWaveOvertopping(GrassWaveOvertoppingInput),
    NaturalStoneWaveImpact(NaturalStoneWaveImpactInput),
}

impl LocationDependentInput {
    pub fn family(&self) -> RevetmentFamily {
        match self {
            Self::AsphaltWaveImpact(_) => RevetmentFamily::AsphaltWaveImpact,
            Self::GrassWaveImpact(_) => RevetmentFamily::GrassWaveImpact,
            Self::GrassWaveRunup(_) => RevetmentFamily::GrassWaveRunup,
            Self::GrassWaveOvertopping(_) => RevetmentFamily::GrassWaveOvertopping,
            Self::NaturalStoneWaveImpact(_) => RevetmentFamily::NaturalStoneWaveImpact,
        }
    }

    pub fn base(&self) -> &LocationBase {
        match self {
            Self::AsphaltWaveImpact(l) => &l.base,
            Self::GrassWaveImpact(l) => &l.base,
            Self::GrassWaveRunup(l) => &l.base,
            Self::GrassWaveOvertopping(l) => &l.base,
            Self::NaturalStoneWaveImpact(l) => &l.base,
        }
    }

    pub fn x(&self) -> Real {
        self.base().x
    }

    pub fn initial_damage(&self) -> Real {
        self.base().initial_damage
    }

    pub fn failure_number(&self) -> Real {
        self.base().failure_number
    }
}
