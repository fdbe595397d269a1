//! Routing from location requests to resolved location inputs.

use dk_core::Real;

use super::construction::{
    AsphaltWaveImpactProperties, GrassWaveImpactProperties, GrassWaveOvertoppingProperties,
    GrassWaveRunupProperties, LocationConstructionProperties, NaturalStoneWaveImpactProperties,
};
use super::defaults::{self, resolve};
use super::input::{
    AccelerationAlphaA, AsphaltFatigue, AsphaltLayer, AsphaltWaveImpactInput, GrassCumulativeOverload,
    GrassWaveAngleImpact, GrassWaveImpactInput, GrassWaveImpactTimeLine, GrassWaveOvertoppingInput,
    GrassWaveRunupInput, LocationBase, LocationDependentInput, NaturalStoneHydraulicLoads,
    NaturalStoneLimitLoading, NaturalStoneWaveImpactInput, RepresentativeWaveRunup,
};
use super::TopLayerType;

/// Geometry facts a location needs from the profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocationContext {
    /// Profile height at the location.
    pub z: Real,
    /// Height of the outer crest.
    pub dike_height: Real,
}

/// Resolve a request into an immutable location input.
///
/// Returns `None` when the family has no default provider for the requested
/// top-layer type; reporting that is up to the caller.
pub fn resolve_location(
    properties: &LocationConstructionProperties,
    context: &LocationContext,
) -> Option<LocationDependentInput> {
    match properties {
        LocationConstructionProperties::AsphaltWaveImpact(p) => {
            asphalt_wave_impact(p, context).map(LocationDependentInput::AsphaltWaveImpact)
        }
        LocationConstructionProperties::GrassWaveImpact(p) => {
            grass_wave_impact(p, context).map(LocationDependentInput::GrassWaveImpact)
        }
        LocationConstructionProperties::GrassWaveRunup(p) => {
            grass_wave_runup(p, context).map(LocationDependentInput::GrassWaveRunup)
        }
        LocationConstructionProperties::GrassWaveOvertopping(p) => {
            grass_wave_overtopping(p, context).map(LocationDependentInput::GrassWaveOvertopping)
        }
        LocationConstructionProperties::NaturalStoneWaveImpact(p) => {
            natural_stone_wave_impact(p, context).map(LocationDependentInput::NaturalStoneWaveImpact)
        }
    }
}

fn base(
    x: Real,
    top_layer_type: TopLayerType,
    initial_damage: Option<Real>,
    failure_number: Option<Real>,
    context: &LocationContext,
) -> LocationBase {
    LocationBase {
        x,
        z: context.z,
        top_layer_type,
        initial_damage: resolve(initial_damage, None, defaults::INITIAL_DAMAGE),
        failure_number: resolve(failure_number, None, defaults::FAILURE_NUMBER),
    }
}

fn asphalt_wave_impact(
    p: &AsphaltWaveImpactProperties,
    context: &LocationContext,
) -> Option<AsphaltWaveImpactInput> {
    let top = defaults::asphalt_top_layer_defaults(p.top_layer_type)?;
    let family = defaults::ASPHALT_WAVE_IMPACT;

    let sub_layer = match (p.thickness_sub_layer, p.elastic_modulus_sub_layer) {
        (Some(thickness), Some(elastic_modulus)) => Some(AsphaltLayer {
            thickness,
            elastic_modulus,
        }),
        _ => None,
    };

    Some(AsphaltWaveImpactInput {
        base: base(p.x, p.top_layer_type, p.initial_damage, p.failure_number, context),
        failure_tension: p.failure_tension,
        soil_elasticity: p.soil_elasticity,
        density_of_water: resolve(p.density_of_water, None, family.density_of_water),
        upper_layer: AsphaltLayer {
            thickness: p.thickness_upper_layer,
            elastic_modulus: p.elastic_modulus_upper_layer,
        },
        sub_layer,
        average_number_of_waves_ctm: resolve(
            p.average_number_of_waves_ctm,
            None,
            family.average_number_of_waves_ctm,
        ),
        fatigue: AsphaltFatigue {
            alpha: resolve(p.fatigue_alpha, top.fatigue_alpha, family.fatigue_alpha),
            beta: resolve(p.fatigue_beta, top.fatigue_beta, family.fatigue_beta),
        },
        impact_number_c: resolve(p.impact_number_c, None, family.impact_number_c),
        stiffness_relation_nu: resolve(p.stiffness_relation_nu, None, family.stiffness_relation_nu),
    })
}

fn grass_wave_impact(p: &GrassWaveImpactProperties, context: &LocationContext) -> Option<GrassWaveImpactInput> {
    let top = defaults::grass_wave_impact_top_layer_defaults(p.top_layer_type)?;
    let family = defaults::GRASS_WAVE_IMPACT;

    Some(GrassWaveImpactInput {
        base: base(p.x, p.top_layer_type, p.initial_damage, p.failure_number, context),
        time_line: GrassWaveImpactTimeLine {
            a: resolve(p.time_line_agwi, top.time_line_agwi, family.time_line_agwi),
            b: resolve(p.time_line_bgwi, top.time_line_bgwi, family.time_line_bgwi),
            c: resolve(p.time_line_cgwi, top.time_line_cgwi, family.time_line_cgwi),
        },
        minimum_wave_height_temax: resolve(p.minimum_wave_height_temax, None, family.minimum_wave_height_temax),
        maximum_wave_height_temin: resolve(p.maximum_wave_height_temin, None, family.maximum_wave_height_temin),
        wave_angle_impact: GrassWaveAngleImpact {
            nwa: resolve(p.wave_angle_impact_nwa, None, family.wave_angle_impact_nwa),
            qwa: resolve(p.wave_angle_impact_qwa, None, family.wave_angle_impact_qwa),
            rwa: resolve(p.wave_angle_impact_rwa, None, family.wave_angle_impact_rwa),
        },
        upper_limit_loading_aul: resolve(p.upper_limit_loading_aul, None, family.upper_limit_loading_aul),
        lower_limit_loading_all: resolve(p.lower_limit_loading_all, None, family.lower_limit_loading_all),
    })
}

struct OverloadRequest {
    top_layer_type: TopLayerType,
    critical_cumulative_overload: Option<Real>,
    critical_front_velocity: Option<Real>,
    alpha_m: Option<Real>,
    alpha_s: Option<Real>,
    ctm: Option<Real>,
    fixed_number_of_waves: Option<u32>,
}

fn cumulative_overload(request: OverloadRequest) -> Option<GrassCumulativeOverload> {
    let top = defaults::grass_overload_top_layer_defaults(request.top_layer_type)?;
    let family = defaults::GRASS_CUMULATIVE_OVERLOAD;

    Some(GrassCumulativeOverload {
        critical_cumulative_overload: resolve(
            request.critical_cumulative_overload,
            top.critical_cumulative_overload,
            family.critical_cumulative_overload,
        ),
        critical_front_velocity: resolve(
            request.critical_front_velocity,
            top.critical_front_velocity,
            family.critical_front_velocity,
        ),
        increased_load_transition_alpha_m: resolve(request.alpha_m, None, family.increased_load_transition_alpha_m),
        reduced_strength_transition_alpha_s: resolve(
            request.alpha_s,
            None,
            family.reduced_strength_transition_alpha_s,
        ),
        average_number_of_waves_ctm: resolve(request.ctm, None, family.average_number_of_waves_ctm),
        fixed_number_of_waves: resolve(request.fixed_number_of_waves, None, family.fixed_number_of_waves),
    })
}

fn grass_wave_runup(p: &GrassWaveRunupProperties, context: &LocationContext) -> Option<GrassWaveRunupInput> {
    let overload = cumulative_overload(OverloadRequest {
        top_layer_type: p.top_layer_type,
        critical_cumulative_overload: p.critical_cumulative_overload,
        critical_front_velocity: p.critical_front_velocity,
        alpha_m: p.increased_load_transition_alpha_m,
        alpha_s: p.reduced_strength_transition_alpha_s,
        ctm: p.average_number_of_waves_ctm,
        fixed_number_of_waves: p.fixed_number_of_waves,
    })?;
    let family = defaults::GRASS_WAVE_RUNUP;

    Some(GrassWaveRunupInput {
        base: base(p.x, p.top_layer_type, p.initial_damage, p.failure_number, context),
        outer_slope: p.outer_slope,
        overload,
        front_velocity_cu: resolve(p.front_velocity_cu, None, family.front_velocity_cu),
        representative_wave_runup: RepresentativeWaveRunup {
            gammab: resolve(
                p.representative_wave_runup_gammab,
                None,
                family.representative_wave_runup_gammab,
            ),
            gammaf: resolve(
                p.representative_wave_runup_gammaf,
                None,
                family.representative_wave_runup_gammaf,
            ),
        },
    })
}

fn grass_wave_overtopping(
    p: &GrassWaveOvertoppingProperties,
    context: &LocationContext,
) -> Option<GrassWaveOvertoppingInput> {
    let overload = cumulative_overload(OverloadRequest {
        top_layer_type: p.top_layer_type,
        critical_cumulative_overload: p.critical_cumulative_overload,
        critical_front_velocity: p.critical_front_velocity,
        alpha_m: p.increased_load_transition_alpha_m,
        alpha_s: p.reduced_strength_transition_alpha_s,
        ctm: p.average_number_of_waves_ctm,
        fixed_number_of_waves: p.fixed_number_of_waves,
    })?;
    let family = defaults::GRASS_WAVE_OVERTOPPING;

    Some(GrassWaveOvertoppingInput {
        base: base(p.x, p.top_layer_type, p.initial_damage, p.failure_number, context),
        overload,
        acceleration_alpha_a: AccelerationAlphaA {
            crest: resolve(p.acceleration_alpha_a_for_crest, None, family.acceleration_alpha_a_for_crest),
            inner_slope: resolve(
                p.acceleration_alpha_a_for_inner_slope,
                None,
                family.acceleration_alpha_a_for_inner_slope,
            ),
        },
        front_velocity_cwo: resolve(p.front_velocity_cwo, None, family.front_velocity_cwo),
        dike_height: resolve(p.dike_height, None, context.dike_height),
    })
}

fn natural_stone_wave_impact(
    p: &NaturalStoneWaveImpactProperties,
    context: &LocationContext,
) -> Option<NaturalStoneWaveImpactInput> {
    let top = defaults::natural_stone_top_layer_defaults(p.top_layer_type)?;
    let family = defaults::NATURAL_STONE_WAVE_IMPACT;
    let loads = |pick: fn(&NaturalStoneHydraulicLoads) -> Real| top.hydraulic_loads.as_ref().map(pick);
    let fam = &family.hydraulic_loads;

    Some(NaturalStoneWaveImpactInput {
        base: base(p.x, p.top_layer_type, p.initial_damage, p.failure_number, context),
        thickness_top_layer: p.thickness_top_layer,
        relative_density: p.relative_density,
        hydraulic_loads: NaturalStoneHydraulicLoads {
            ap: resolve(p.hydraulic_load_ap, loads(|h| h.ap), fam.ap),
            bp: resolve(p.hydraulic_load_bp, loads(|h| h.bp), fam.bp),
            cp: resolve(p.hydraulic_load_cp, loads(|h| h.cp), fam.cp),
            np: resolve(p.hydraulic_load_np, loads(|h| h.np), fam.np),
            as_: resolve(p.hydraulic_load_as, loads(|h| h.as_), fam.as_),
            bs: resolve(p.hydraulic_load_bs, loads(|h| h.bs), fam.bs),
            cs: resolve(p.hydraulic_load_cs, loads(|h| h.cs), fam.cs),
            ns: resolve(p.hydraulic_load_ns, loads(|h| h.ns), fam.ns),
            xib: resolve(p.hydraulic_load_xib, loads(|h| h.xib), fam.xib),
        },
        slope_upper_level_aus: resolve(p.slope_upper_level_aus, None, family.slope_upper_level_aus),
        slope_lower_level_als: resolve(p.slope_lower_level_als, None, family.slope_lower_level_als),
        upper_limit_loading: NaturalStoneLimitLoading {
            a: resolve(p.upper_limit_loading_aul, None, family.upper_limit_loading_aul),
            b: resolve(p.upper_limit_loading_bul, None, family.upper_limit_loading_bul),
            c: resolve(p.upper_limit_loading_cul, None, family.upper_limit_loading_cul),
        },
        lower_limit_loading: NaturalStoneLimitLoading {
            a: resolve(p.lower_limit_loading_all, None, family.lower_limit_loading_all),
            b: resolve(p.lower_limit_loading_bll, None, family.lower_limit_loading_bll),
            c: resolve(p.lower_limit_loading_cll, None, family.lower_limit_loading_cll),
        },
        distance_maximum_wave_elevation_asmax: resolve(
            p.distance_maximum_wave_elevation_asmax,
            None,
            family.distance_maximum_wave_elevation_asmax,
        ),
        distance_maximum_wave_elevation_bsmax: resolve(
            p.distance_maximum_wave_elevation_bsmax,
            None,
            family.distance_maximum_wave_elevation_bsmax,
        ),
        normative_width_of_wave_impact_awi: resolve(
            p.normative_width_of_wave_impact_awi,
            None,
            family.normative_width_of_wave_impact_awi,
        ),
        normative_width_of_wave_impact_bwi: resolve(
            p.normative_width_of_wave_impact_bwi,
            None,
            family.normative_width_of_wave_impact_bwi,
        ),
        wave_angle_impact_betamax: resolve(p.wave_angle_impact_betamax, None, family.wave_angle_impact_betamax),
    })
}
