//! Property tests for the calculation input builder.

use std::sync::Arc;

use dk_core::Real;
use dk_geometry::CharacteristicPointType;
use dk_input::{
    CalculationInputBuilder, GrassWaveImpactProperties, GrassWaveOvertoppingProperties, TopLayerType,
    build_from_log,
};
use proptest::prelude::*;

const CHAIN_MESSAGE: &str = "must be equal to the end point of the previous dike profile segment";

/// Vertices of a rising chain with integer coordinates, starting at the origin.
fn chain_points(steps: &[(u8, u8)]) -> Vec<(Real, Real)> {
    let mut points = vec![(0.0, 0.0)];
    let (mut x, mut z) = (0.0, 0.0);
    for &(dx, dz) in steps {
        x += Real::from(dx);
        z += Real::from(dz);
        points.push((x, z));
    }
    points
}

/// Segments between `points`; the start of segment `gap.0` is lifted by `gap.1`.
fn chained_builder(points: &[(Real, Real)], gap: Option<(usize, u8)>) -> CalculationInputBuilder {
    let mut builder = CalculationInputBuilder::new();
    for (i, pair) in points.windows(2).enumerate() {
        let (sx, mut sz) = pair[0];
        let (ex, ez) = pair[1];
        if let Some((index, lift)) = gap
            && index == i
        {
            sz += Real::from(lift);
        }
        builder.add_dike_profile_segment(sx, sz, ex, ez);
    }
    let (toe, crest) = (points[0].0, points[points.len() - 1].0);
    builder.add_dike_profile_point(toe, CharacteristicPointType::OuterToe);
    builder.add_dike_profile_point(crest, CharacteristicPointType::OuterCrest);
    builder.add_time_step(0.0, 100.0, 1.0, 1.0, 4.0, 0.0);
    builder.add_grass_wave_impact_location(GrassWaveImpactProperties::new(
        (toe + crest) / 2.0,
        TopLayerType::GrassClosedSod,
    ));
    builder
}

/// Builder calls drawn from every kind of command.
#[derive(Clone, Debug)]
enum Op {
    Segment(u8, u8, u8, u8),
    Point(u8, CharacteristicPointType),
    Orientation(u16),
    Foreshore(u8, i8),
    TimeStep(u8, u8),
    GrassImpact(u8),
    Overtopping(u8),
}

fn op() -> impl Strategy<Value = Op> {
    let kind = prop_oneof![
        Just(CharacteristicPointType::OuterToe),
        Just(CharacteristicPointType::OuterCrest),
        Just(CharacteristicPointType::InnerCrest),
        Just(CharacteristicPointType::InnerToe),
    ];
    prop_oneof![
        4 => (0..20u8, 0..10u8, 0..20u8, 0..10u8).prop_map(|(a, b, c, d)| Op::Segment(a, b, c, d)),
        3 => (0..20u8, kind).prop_map(|(x, k)| Op::Point(x, k)),
        1 => (0..360u16).prop_map(Op::Orientation),
        1 => (1..10u8, -5..0i8).prop_map(|(s, z)| Op::Foreshore(s, z)),
        2 => (0..10u8, 0..10u8).prop_map(|(b, e)| Op::TimeStep(b, e)),
        2 => (0..20u8).prop_map(Op::GrassImpact),
        1 => (0..20u8).prop_map(Op::Overtopping),
    ]
}

fn apply(builder: &mut CalculationInputBuilder, op: &Op) {
    match *op {
        Op::Segment(a, b, c, d) => {
            builder.add_dike_profile_segment(a.into(), b.into(), c.into(), d.into());
        }
        Op::Point(x, kind) => builder.add_dike_profile_point(x.into(), kind),
        Op::Orientation(degrees) => builder.add_dike_orientation(degrees.into()),
        Op::Foreshore(slope, bottom) => builder.add_foreshore(Real::from(slope) / 100.0, bottom.into()),
        Op::TimeStep(begin, end) => builder.add_time_step(begin.into(), end.into(), 1.0, 1.0, 4.0, 0.0),
        Op::GrassImpact(x) => {
            builder.add_grass_wave_impact_location(GrassWaveImpactProperties::new(
                x.into(),
                TopLayerType::GrassOpenSod,
            ));
        }
        Op::Overtopping(x) => {
            builder.add_grass_wave_overtopping_location(GrassWaveOvertoppingProperties::new(
                x.into(),
                TopLayerType::GrassClosedSod,
            ));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn segment_chain_breaks_are_reported_exactly(
        steps in prop::collection::vec((1..5u8, 0..4u8), 1..6),
        gap in prop::option::of((0..6usize, 1..3u8)),
    ) {
        let points = chain_points(&steps);
        // the first segment has no predecessor to break from
        let gap = gap.filter(|&(index, _)| index > 0 && index < steps.len());
        let result = chained_builder(&points, gap).build();

        match gap {
            Some((index, lift)) => {
                prop_assert!(!result.successful());
                let (x, z) = points[index];
                let expected = format!(
                    "The start point of the dike profile segment ({x}, {}) must be equal to the end point of the previous dike profile segment ({x}, {z}).",
                    z + Real::from(lift)
                );
                let chain_errors: Vec<_> = result
                    .events()
                    .iter()
                    .filter(|e| e.message.contains(CHAIN_MESSAGE))
                    .map(|e| e.message.clone())
                    .collect();
                prop_assert_eq!(chain_errors, vec![expected]);
            }
            None => {
                prop_assert!(result.successful(), "{:?}", result.events());
                let input = result.data().unwrap();
                let segments = input.profile().segments();
                prop_assert_eq!(segments.len(), steps.len());
                for pair in segments.windows(2) {
                    prop_assert!(Arc::ptr_eq(pair[0].end_point(), pair[1].start_point()));
                }
            }
        }
    }

    #[test]
    fn build_is_repeatable_and_leaves_the_log_alone(ops in prop::collection::vec(op(), 0..24)) {
        let mut builder = CalculationInputBuilder::new();
        for op in &ops {
            apply(&mut builder, op);
        }
        let log = builder.commands().to_vec();
        prop_assert_eq!(log.len(), ops.len());

        let first = builder.build();
        let second = builder.build();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &build_from_log(&log));
        prop_assert_eq!(builder.commands(), log.as_slice());
        prop_assert_eq!(first.successful(), !first.has_errors());
    }
}
