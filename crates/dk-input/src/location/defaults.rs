//! Default constants per revetment family and per top-layer type.
//!
//! A parameter resolves as: explicit caller value, then the top-layer
//! default, then the family default. Type-specific family values equal the
//! constants of the family's reference top layer.

use dk_core::Real;

use super::TopLayerType;
use super::input::NaturalStoneHydraulicLoads;

/// Apply the three-tier override chain.
#[inline]
pub fn resolve<T: Copy>(explicit: Option<T>, top_layer: Option<T>, family: T) -> T {
    explicit.or(top_layer).unwrap_or(family)
}

pub const INITIAL_DAMAGE: Real = 0.0;
pub const FAILURE_NUMBER: Real = 1.0;

// ---------------------------------------------------------------------------
// Asphalt wave impact

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsphaltFamilyDefaults {
    pub density_of_water: Real,
    pub average_number_of_waves_ctm: Real,
    pub fatigue_alpha: Real,
    pub fatigue_beta: Real,
    pub impact_number_c: Real,
    pub stiffness_relation_nu: Real,
}

pub const ASPHALT_WAVE_IMPACT: AsphaltFamilyDefaults = AsphaltFamilyDefaults {
    density_of_water: 1025.0,
    average_number_of_waves_ctm: 1.0,
    fatigue_alpha: 0.42,
    fatigue_beta: 4.76,
    impact_number_c: 1.0,
    stiffness_relation_nu: 0.35,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AsphaltTopLayerDefaults {
    pub fatigue_alpha: Option<Real>,
    pub fatigue_beta: Option<Real>,
}

pub fn asphalt_top_layer_defaults(top_layer: TopLayerType) -> Option<AsphaltTopLayerDefaults> {
    match top_layer {
        TopLayerType::HydraulicAsphaltConcrete => Some(AsphaltTopLayerDefaults {
            fatigue_alpha: Some(0.42),
            fatigue_beta: Some(4.76),
        }),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Grass wave impact

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrassWaveImpactFamilyDefaults {
    pub time_line_agwi: Real,
    pub time_line_bgwi: Real,
    pub time_line_cgwi: Real,
    pub minimum_wave_height_temax: Real,
    pub maximum_wave_height_temin: Real,
    pub wave_angle_impact_nwa: Real,
    pub wave_angle_impact_qwa: Real,
    pub wave_angle_impact_rwa: Real,
    pub upper_limit_loading_aul: Real,
    pub lower_limit_loading_all: Real,
}

pub const GRASS_WAVE_IMPACT: GrassWaveImpactFamilyDefaults = GrassWaveImpactFamilyDefaults {
    time_line_agwi: 1.0,
    time_line_bgwi: -0.000009722,
    time_line_cgwi: 0.25,
    minimum_wave_height_temax: 3_600_000.0,
    maximum_wave_height_temin: 3.6,
    wave_angle_impact_nwa: 2.0 / 3.0,
    wave_angle_impact_qwa: 0.35,
    wave_angle_impact_rwa: 10.0,
    upper_limit_loading_aul: 0.0,
    lower_limit_loading_all: 0.5,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GrassWaveImpactTopLayerDefaults {
    pub time_line_agwi: Option<Real>,
    pub time_line_bgwi: Option<Real>,
    pub time_line_cgwi: Option<Real>,
}

pub fn grass_wave_impact_top_layer_defaults(
    top_layer: TopLayerType,
) -> Option<GrassWaveImpactTopLayerDefaults> {
    match top_layer {
        TopLayerType::GrassClosedSod => Some(GrassWaveImpactTopLayerDefaults {
            time_line_agwi: Some(1.0),
            time_line_bgwi: Some(-0.000009722),
            time_line_cgwi: Some(0.25),
        }),
        TopLayerType::GrassOpenSod => Some(GrassWaveImpactTopLayerDefaults {
            time_line_agwi: Some(0.8),
            time_line_bgwi: Some(-0.00001944),
            time_line_cgwi: None,
        }),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Grass cumulative overload (run-up and overtopping)

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrassOverloadFamilyDefaults {
    pub critical_cumulative_overload: Real,
    pub critical_front_velocity: Real,
    pub increased_load_transition_alpha_m: Real,
    pub reduced_strength_transition_alpha_s: Real,
    pub average_number_of_waves_ctm: Real,
    pub fixed_number_of_waves: u32,
}

pub const GRASS_CUMULATIVE_OVERLOAD: GrassOverloadFamilyDefaults = GrassOverloadFamilyDefaults {
    critical_cumulative_overload: 7000.0,
    critical_front_velocity: 6.6,
    increased_load_transition_alpha_m: 1.0,
    reduced_strength_transition_alpha_s: 1.0,
    average_number_of_waves_ctm: 0.92,
    fixed_number_of_waves: 10_000,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GrassOverloadTopLayerDefaults {
    pub critical_cumulative_overload: Option<Real>,
    pub critical_front_velocity: Option<Real>,
}

pub fn grass_overload_top_layer_defaults(
    top_layer: TopLayerType,
) -> Option<GrassOverloadTopLayerDefaults> {
    match top_layer {
        TopLayerType::GrassClosedSod => Some(GrassOverloadTopLayerDefaults {
            critical_cumulative_overload: Some(7000.0),
            critical_front_velocity: Some(6.6),
        }),
        TopLayerType::GrassOpenSod => Some(GrassOverloadTopLayerDefaults {
            critical_cumulative_overload: None,
            critical_front_velocity: Some(4.3),
        }),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrassRunupFamilyDefaults {
    pub front_velocity_cu: Real,
    pub representative_wave_runup_gammab: Real,
    pub representative_wave_runup_gammaf: Real,
}

pub const GRASS_WAVE_RUNUP: GrassRunupFamilyDefaults = GrassRunupFamilyDefaults {
    front_velocity_cu: 1.1,
    representative_wave_runup_gammab: 1.0,
    representative_wave_runup_gammaf: 1.0,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrassOvertoppingFamilyDefaults {
    pub acceleration_alpha_a_for_crest: Real,
    pub acceleration_alpha_a_for_inner_slope: Real,
    pub front_velocity_cwo: Real,
}

pub const GRASS_WAVE_OVERTOPPING: GrassOvertoppingFamilyDefaults = GrassOvertoppingFamilyDefaults {
    acceleration_alpha_a_for_crest: 1.0,
    acceleration_alpha_a_for_inner_slope: 1.4,
    front_velocity_cwo: 1.45,
};

// ---------------------------------------------------------------------------
// Natural stone wave impact

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NaturalStoneFamilyDefaults {
    pub hydraulic_loads: NaturalStoneHydraulicLoads,
    pub slope_upper_level_aus: Real,
    pub slope_lower_level_als: Real,
    pub upper_limit_loading_aul: Real,
    pub upper_limit_loading_bul: Real,
    pub upper_limit_loading_cul: Real,
    pub lower_limit_loading_all: Real,
    pub lower_limit_loading_bll: Real,
    pub lower_limit_loading_cll: Real,
    pub distance_maximum_wave_elevation_asmax: Real,
    pub distance_maximum_wave_elevation_bsmax: Real,
    pub normative_width_of_wave_impact_awi: Real,
    pub normative_width_of_wave_impact_bwi: Real,
    pub wave_angle_impact_betamax: Real,
}

const NORDIC_STONE_HYDRAULIC_LOADS: NaturalStoneHydraulicLoads = NaturalStoneHydraulicLoads {
    ap: 4.0,
    bp: 0.0,
    cp: 0.0,
    np: -0.9,
    as_: 0.8,
    bs: 0.0,
    cs: 0.0,
    ns: 0.6,
    xib: 2.0,
};

pub const NATURAL_STONE_WAVE_IMPACT: NaturalStoneFamilyDefaults = NaturalStoneFamilyDefaults {
    hydraulic_loads: NORDIC_STONE_HYDRAULIC_LOADS,
    slope_upper_level_aus: 0.05,
    slope_lower_level_als: 1.5,
    upper_limit_loading_aul: 0.1,
    upper_limit_loading_bul: 0.6,
    upper_limit_loading_cul: 4.0,
    lower_limit_loading_all: 0.1,
    lower_limit_loading_bll: 0.2,
    lower_limit_loading_cll: 4.0,
    distance_maximum_wave_elevation_asmax: 0.42,
    distance_maximum_wave_elevation_bsmax: 0.9,
    normative_width_of_wave_impact_awi: 0.96,
    normative_width_of_wave_impact_bwi: 0.11,
    wave_angle_impact_betamax: 78.0,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NaturalStoneTopLayerDefaults {
    pub hydraulic_loads: Option<NaturalStoneHydraulicLoads>,
}

pub fn natural_stone_top_layer_defaults(top_layer: TopLayerType) -> Option<NaturalStoneTopLayerDefaults> {
    match top_layer {
        TopLayerType::NordicStone => Some(NaturalStoneTopLayerDefaults {
            hydraulic_loads: Some(NORDIC_STONE_HYDRAULIC_LOADS),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_explicit_then_top_layer() {
        assert_eq!(resolve(Some(1.0), Some(2.0), 3.0), 1.0);
        assert_eq!(resolve(None, Some(2.0), 3.0), 2.0);
        assert_eq!(resolve(None, None, 3.0), 3.0);
        assert_eq!(resolve::<u32>(None, None, 10_000), 10_000);
    }

    #[test]
    fn sod_types_have_published_overload_constants() {
        let closed = grass_overload_top_layer_defaults(TopLayerType::GrassClosedSod).unwrap();
        let open = grass_overload_top_layer_defaults(TopLayerType::GrassOpenSod).unwrap();
        let family = GRASS_CUMULATIVE_OVERLOAD;

        assert_eq!(resolve(None, closed.critical_cumulative_overload, family.critical_cumulative_overload), 7000.0);
        assert_eq!(resolve(None, closed.critical_front_velocity, family.critical_front_velocity), 6.6);
        assert_eq!(resolve(None, open.critical_cumulative_overload, family.critical_cumulative_overload), 7000.0);
        assert_eq!(resolve(None, open.critical_front_velocity, family.critical_front_velocity), 4.3);
    }

    #[test]
    fn providers_reject_foreign_top_layers() {
        assert!(asphalt_top_layer_defaults(TopLayerType::GrassOpenSod).is_none());
        assert!(grass_wave_impact_top_layer_defaults(TopLayerType::NordicStone).is_none());
        assert!(grass_overload_top_layer_defaults(TopLayerType::HydraulicAsphaltConcrete).is_none());
        assert!(natural_stone_top_layer_defaults(TopLayerType::GrassClosedSod).is_none());
    }
}
