//! Integration tests for semantic validation of built inputs.

use dk_core::{Event, EventKind};
use dk_geometry::CharacteristicPointType;
use dk_input::{
    AsphaltWaveImpactProperties, CalculationInputBuilder, GrassWaveOvertoppingProperties, TopLayerType,
    ValidationVerdict, Validator,
};

fn overtopping_builder(dike_height: Option<f64>) -> CalculationInputBuilder {
    let mut builder = CalculationInputBuilder::new();
    builder.add_dike_profile_segment(0.0, 0.0, 10.0, 5.0);
    builder.add_dike_profile_segment(10.0, 5.0, 15.0, 5.0);
    builder.add_dike_profile_segment(15.0, 5.0, 25.0, 0.0);
    builder.add_dike_profile_point(0.0, CharacteristicPointType::OuterToe);
    builder.add_dike_profile_point(10.0, CharacteristicPointType::OuterCrest);
    builder.add_dike_profile_point(15.0, CharacteristicPointType::InnerCrest);
    builder.add_dike_profile_point(25.0, CharacteristicPointType::InnerToe);
    builder.add_time_step(0.0, 3600.0, 3.0, 1.0, 4.0, 30.0);

    let mut properties = GrassWaveOvertoppingProperties::new(12.0, TopLayerType::GrassClosedSod);
    properties.dike_height = dike_height;
    builder.add_grass_wave_overtopping_location(properties);
    builder
}

#[test]
fn crest_height_default_validates_cleanly() {
    let input = overtopping_builder(None).build().into_result().unwrap();
    let result = Validator::validate(&input);
    assert_eq!(result.data(), Some(&ValidationVerdict::Successful));
    assert!(result.events().is_empty());
}

#[test]
fn low_explicit_dike_height_warns() {
    let input = overtopping_builder(Some(4.0)).build().into_result().unwrap();
    let result = Validator::validate(&input);
    assert_eq!(result.data(), Some(&ValidationVerdict::Successful));
    assert_eq!(
        result.events(),
        &[Event::warning(
            "The dike height (4) of the location with position 12 is lower than the outer crest (5)."
        )]
    );
}

#[test]
fn dike_orientation_and_asphalt_ranges_are_checked() {
    let mut builder = CalculationInputBuilder::new();
    builder.add_dike_profile_segment(0.0, 0.0, 10.0, 5.0);
    builder.add_dike_profile_point(0.0, CharacteristicPointType::OuterToe);
    builder.add_dike_profile_point(10.0, CharacteristicPointType::OuterCrest);
    builder.add_dike_orientation(400.0);
    builder.add_time_step(0.0, 3600.0, 3.0, 1.0, 4.0, 0.0);
    let mut asphalt = AsphaltWaveImpactProperties::new(5.0, TopLayerType::HydraulicAsphaltConcrete, 1.6, 55.0, 0.3, 1.6e4);
    asphalt.density_of_water = Some(900.0);
    asphalt.fatigue_beta = Some(1.0);
    asphalt.stiffness_relation_nu = Some(1.0);
    builder.add_asphalt_wave_impact_location(asphalt);

    let input = builder.build().into_result().unwrap();
    let result = Validator::validate(&input);
    assert_eq!(result.data(), Some(&ValidationVerdict::Failed));

    let errors: Vec<_> = result
        .events()
        .iter()
        .filter(|e| e.kind == EventKind::Error)
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(
        errors,
        vec![
            "The dike orientation (400) must be in range [0, 360].",
            "The density of water (900) of the location with position 5 must be in range [950, 1050].",
            "The fatigue beta (1) of the location with position 5 must be larger than 1.",
            "The stiffness relation nu (1) of the location with position 5 must be in range (0, 1).",
        ]
    );
}

#[test]
fn validation_leaves_the_input_untouched() {
    let input = overtopping_builder(Some(4.0)).build().into_result().unwrap();
    let before = input.clone();
    let _ = Validator::validate(&input);
    assert_eq!(input, before);
}
