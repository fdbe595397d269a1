//! Semantic range checks over a built calculation input.

use dk_core::{DataResult, Event, Real, error_count, in_closed_range, in_open_range};
use tracing::debug;

use crate::calculation_input::CalculationInput;
use crate::location::input::{
    AsphaltWaveImpactInput, GrassCumulativeOverload, GrassWaveImpactInput, GrassWaveOvertoppingInput,
    GrassWaveRunupInput, LocationDependentInput, NaturalStoneWaveImpactInput,
};

/// Whether an input is fit for calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationVerdict {
    Successful,
    Failed,
}

/// Stateless validator; see [`Validator::validate`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Validator;

impl Validator {
    /// Range-check every part of `input`.
    ///
    /// Errors make the verdict `Failed`; warnings are advisory. The input is
    /// never changed and the calculator does not depend on this verdict.
    pub fn validate(input: &CalculationInput) -> DataResult<ValidationVerdict> {
        let mut events = Vec::new();

        validate_profile(input, &mut events);
        validate_time_steps(input, &mut events);
        for location in input.locations() {
            validate_location(location, input, &mut events);
        }

        let verdict = if error_count(&events) > 0 {
            ValidationVerdict::Failed
        } else {
            ValidationVerdict::Successful
        };
        debug!(?verdict, events = events.len(), "validated calculation input");
        DataResult::success(verdict, events)
    }
}

fn validate_profile(input: &CalculationInput, events: &mut Vec<Event>) {
    let profile = input.profile();

    if !in_closed_range(profile.dike_orientation(), 0.0, 360.0) {
        events.push(Event::error(format!(
            "The dike orientation ({}) must be in range [0, 360].",
            profile.dike_orientation()
        )));
    }

    for segment in profile.segments() {
        let roughness = segment.roughness_coefficient();
        if !(roughness > 0.0 && roughness <= 1.0) {
            events.push(Event::error(format!(
                "The roughness coefficient ({roughness}) of the dike profile segment starting at {} must be in range (0, 1].",
                segment.start_point()
            )));
        }
    }

    if let Some(foreshore) = profile.foreshore()
        && foreshore.slope <= 0.0
    {
        events.push(Event::error(format!(
            "The foreshore slope ({}) must be larger than 0.",
            foreshore.slope
        )));
    }
}

fn validate_time_steps(input: &CalculationInput, events: &mut Vec<Event>) {
    for (i, step) in input.time_steps().iter().enumerate() {
        if !(step.wave_height_hm0 > 0.0) {
            events.push(Event::error(format!(
                "The wave height Hm0 ({}) of time step {i} must be larger than 0.",
                step.wave_height_hm0
            )));
        }
        if !(step.wave_period_tm10 > 0.0) {
            events.push(Event::error(format!(
                "The wave period Tm10 ({}) of time step {i} must be larger than 0.",
                step.wave_period_tm10
            )));
        }
        if !(step.wave_angle > -180.0 && step.wave_angle <= 180.0) {
            events.push(Event::error(format!(
                "The wave angle ({}) of time step {i} must be in range (-180, 180].",
                step.wave_angle
            )));
        }
    }

    if let Some(dike_height) = input.profile().dike_height() {
        let exceeding = input
            .time_steps()
            .iter()
            .filter(|s| s.water_level > dike_height)
            .count();
        if exceeding > 0 {
            events.push(Event::warning(format!(
                "The water level exceeds the dike height in {exceeding} time step(s)."
            )));
        }
    }
}

fn positive(value: Real, name: &str, x: Real, events: &mut Vec<Event>) {
    if !(value > 0.0) {
        events.push(Event::error(format!(
            "{name} ({value}) of the location with position {x} must be larger than 0."
        )));
    }
}

fn non_negative(value: Real, name: &str, x: Real, events: &mut Vec<Event>) {
    if !(value >= 0.0) {
        events.push(Event::error(format!(
            "{name} ({value}) of the location with position {x} must be equal to or larger than 0."
        )));
    }
}

fn validate_location(location: &LocationDependentInput, input: &CalculationInput, events: &mut Vec<Event>) {
    let base = location.base();
    let x = base.x;

    non_negative(base.initial_damage, "The initial damage", x, events);
    if !(base.failure_number >= base.initial_damage) {
        events.push(Event::error(format!(
            "The failure number ({}) of the location with position {x} must be equal to or larger than the initial damage ({}).",
            base.failure_number, base.initial_damage
        )));
    }

    match location {
        LocationDependentInput::AsphaltWaveImpact(l) => validate_asphalt(l, events),
        LocationDependentInput::GrassWaveImpact(l) => validate_grass_wave_impact(l, events),
        LocationDependentInput::GrassWaveRunup(l) => validate_grass_wave_runup(l, events),
        LocationDependentInput::GrassWaveOvertopping(l) => validate_grass_wave_overtopping(l, input, events),
        LocationDependentInput::NaturalStoneWaveImpact(l) => validate_natural_stone(l, events),
    }
}

fn validate_asphalt(l: &AsphaltWaveImpactInput, events: &mut Vec<Event>) {
    let x = l.base.x;
    positive(l.failure_tension, "The failure tension", x, events);
    positive(l.soil_elasticity, "The soil elasticity", x, events);
    positive(l.upper_layer.thickness, "The thickness of the upper layer", x, events);
    positive(l.upper_layer.elastic_modulus, "The elastic modulus of the upper layer", x, events);
    if let Some(sub_layer) = &l.sub_layer {
        positive(sub_layer.thickness, "The thickness of the sub layer", x, events);
        positive(sub_layer.elastic_modulus, "The elastic modulus of the sub layer", x, events);
    }
    if !in_closed_range(l.density_of_water, 950.0, 1050.0) {
        events.push(Event::error(format!(
            "The density of water ({}) of the location with position {x} must be in range [950, 1050].",
            l.density_of_water
        )));
    }
    positive(l.average_number_of_waves_ctm, "The average number of waves factor ctm", x, events);
    positive(l.fatigue.alpha, "The fatigue alpha", x, events);
    if !(l.fatigue.beta > 1.0) {
        events.push(Event::error(format!(
            "The fatigue beta ({}) of the location with position {x} must be larger than 1.",
            l.fatigue.beta
        )));
    }
    positive(l.impact_number_c, "The impact number c", x, events);
    if !in_open_range(l.stiffness_relation_nu, 0.0, 1.0) {
        events.push(Event::error(format!(
            "The stiffness relation nu ({}) of the location with position {x} must be in range (0, 1).",
            l.stiffness_relation_nu
        )));
    }
}

fn validate_grass_wave_impact(l: &GrassWaveImpactInput, events: &mut Vec<Event>) {
    let x = l.base.x;
    positive(l.time_line.a, "The time line coefficient a", x, events);
    if !(l.time_line.b < 0.0) {
        events.push(Event::error(format!(
            "The time line coefficient b ({}) of the location with position {x} must be smaller than 0.",
            l.time_line.b
        )));
    }
    non_negative(l.time_line.c, "The time line coefficient c", x, events);
    positive(l.maximum_wave_height_temin, "The maximum wave height Temin", x, events);
    if !(l.minimum_wave_height_temax > l.maximum_wave_height_temin) {
        events.push(Event::error(format!(
            "The minimum wave height Temax ({}) of the location with position {x} must be larger than the maximum wave height Temin ({}).",
            l.minimum_wave_height_temax, l.maximum_wave_height_temin
        )));
    }
    positive(l.wave_angle_impact.nwa, "The wave angle impact factor Nwa", x, events);
    non_negative(l.wave_angle_impact.qwa, "The wave angle impact factor Qwa", x, events);
    positive(l.wave_angle_impact.rwa, "The wave angle impact factor Rwa", x, events);
}

fn validate_overload(overload: &GrassCumulativeOverload, x: Real, events: &mut Vec<Event>) {
    positive(overload.critical_cumulative_overload, "The critical cumulative overload", x, events);
    non_negative(overload.critical_front_velocity, "The critical front velocity", x, events);
    non_negative(overload.increased_load_transition_alpha_m, "The increased load transition alpha M", x, events);
    non_negative(
        overload.reduced_strength_transition_alpha_s,
        "The reduced strength transition alpha S",
        x,
        events,
    );
    positive(overload.average_number_of_waves_ctm, "The average number of waves factor ctm", x, events);
    if overload.fixed_number_of_waves == 0 {
        events.push(Event::error(format!(
            "The fixed number of waves of the location with position {x} must be larger than 0."
        )));
    }
}

fn validate_grass_wave_runup(l: &GrassWaveRunupInput, events: &mut Vec<Event>) {
    let x = l.base.x;
    positive(l.outer_slope, "The outer slope", x, events);
    validate_overload(&l.overload, x, events);
    positive(l.front_velocity_cu, "The front velocity factor Cu", x, events);
    positive(l.representative_wave_runup.gammab, "The berm factor gammab", x, events);
    positive(l.representative_wave_runup.gammaf, "The roughness factor gammaf", x, events);
}

fn validate_grass_wave_overtopping(l: &GrassWaveOvertoppingInput, input: &CalculationInput, events: &mut Vec<Event>) {
    let x = l.base.x;
    validate_overload(&l.overload, x, events);
    positive(l.acceleration_alpha_a.crest, "The acceleration alpha A for the crest", x, events);
    positive(l.acceleration_alpha_a.inner_slope, "The acceleration alpha A for the inner slope", x, events);
    positive(l.front_velocity_cwo, "The front velocity factor Cwo", x, events);

    if let Some(crest_height) = input.profile().dike_height()
        && l.dike_height < crest_height
    {
        events.push(Event::warning(format!(
            "The dike height ({}) of the location with position {x} is lower than the outer crest ({crest_height}).",
            l.dike_height
        )));
    }
}

fn validate_natural_stone(l: &NaturalStoneWaveImpactInput, events: &mut Vec<Event>) {
    let x = l.base.x;
    if !(l.relative_density > 0.0 && l.relative_density < 10.0) {
        events.push(Event::error(format!(
            "The relative density ({}) of the location with position {x} must be in range (0, 10).",
            l.relative_density
        )));
    }
    if !(l.thickness_top_layer > 0.0 && l.thickness_top_layer <= 1.0) {
        events.push(Event::error(format!(
            "The thickness of the top layer ({}) of the location with position {x} must be in range (0, 1].",
            l.thickness_top_layer
        )));
    }
    positive(l.slope_upper_level_aus, "The slope upper level Aus", x, events);
    positive(l.slope_lower_level_als, "The slope lower level Als", x, events);
    positive(
        l.distance_maximum_wave_elevation_asmax,
        "The distance maximum wave elevation Asmax",
        x,
        events,
    );
    positive(l.normative_width_of_wave_impact_awi, "The normative width of wave impact Awi", x, events);
    positive(l.wave_angle_impact_betamax, "The wave angle impact betamax", x, events);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CalculationInputBuilder;
    use crate::location::TopLayerType;
    use crate::location::construction::{GrassWaveImpactProperties, NaturalStoneWaveImpactProperties};
    use dk_core::EventKind;
    use dk_geometry::CharacteristicPointType;

    fn builder_with_profile() -> CalculationInputBuilder {
        let mut builder = CalculationInputBuilder::new();
        builder.add_dike_profile_segment(0.0, 0.0, 10.0, 5.0);
        builder.add_dike_profile_point(0.0, CharacteristicPointType::OuterToe);
        builder.add_dike_profile_point(10.0, CharacteristicPointType::OuterCrest);
        builder
    }

    #[test]
    fn clean_input_validates() {
        let mut builder = builder_with_profile();
        builder.add_time_step(0.0, 100.0, 2.0, 1.0, 4.0, 0.0);
        builder.add_grass_wave_impact_location(GrassWaveImpactProperties::new(5.0, TopLayerType::GrassClosedSod));
        let input = builder.build().into_result().unwrap();

        let result = Validator::validate(&input);
        assert_eq!(result.data(), Some(&ValidationVerdict::Successful));
        assert!(result.events().is_empty());
    }

    #[test]
    fn high_water_is_only_a_warning() {
        let mut builder = builder_with_profile();
        builder.add_time_step(0.0, 100.0, 6.0, 1.0, 4.0, 0.0);
        builder.add_time_step(100.0, 200.0, 7.0, 1.0, 4.0, 0.0);
        builder.add_grass_wave_impact_location(GrassWaveImpactProperties::new(5.0, TopLayerType::GrassOpenSod));
        let input = builder.build().into_result().unwrap();

        let result = Validator::validate(&input);
        assert_eq!(result.data(), Some(&ValidationVerdict::Successful));
        assert_eq!(
            result.events(),
            &[Event::warning("The water level exceeds the dike height in 2 time step(s).")]
        );
    }

    #[test]
    fn range_violations_fail_the_verdict() {
        let mut builder = builder_with_profile();
        builder.add_time_step(0.0, 100.0, 2.0, 0.0, -1.0, 200.0);
        let mut stone = NaturalStoneWaveImpactProperties::new(5.0, TopLayerType::NordicStone, 1.5, 12.0);
        stone.initial_damage = Some(2.0);
        builder.add_natural_stone_wave_impact_location(stone);
        let input = builder.build().into_result().unwrap();

        let result = Validator::validate(&input);
        assert_eq!(result.data(), Some(&ValidationVerdict::Failed));
        let errors = result.events().iter().filter(|e| e.kind == EventKind::Error).count();
        // Hm0, Tm10, angle, failure number < initial damage, relative density, thickness
        assert_eq!(errors, 6);
    }
}
