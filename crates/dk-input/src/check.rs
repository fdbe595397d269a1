//! Structural checks run by the builder before anything is frozen.
//!
//! Every check appends to a shared event list and never stops the pipeline.

use std::collections::BTreeMap;

use dk_core::{Event, Real, in_closed_range};
use dk_geometry::{CharacteristicPointType, ProfilePoint};

use crate::location::RevetmentFamily;
use crate::location::construction::LocationConstructionProperties;
use crate::time::TimeDependentInput;

/// Segment as added to the builder, before points are shared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SegmentDraft {
    pub start: ProfilePoint,
    pub end: ProfilePoint,
    pub roughness: Real,
}

/// Characteristic point positions that passed their own checks.
pub(crate) type Landmarks = BTreeMap<CharacteristicPointType, Real>;

pub(crate) fn check_segments(segments: &[SegmentDraft], events: &mut Vec<Event>) {
    if segments.is_empty() {
        events.push(Event::error("At least 1 dike profile segment is required."));
        return;
    }

    for pair in segments.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if previous.end != current.start {
            events.push(Event::error(format!(
                "The start point of the dike profile segment {} must be equal to the end point of the previous dike profile segment {}.",
                current.start, previous.end
            )));
        }
    }
}

pub(crate) fn check_time_steps(steps: &[TimeDependentInput], events: &mut Vec<Event>) {
    if steps.is_empty() {
        events.push(Event::error("At least 1 time step is required."));
        return;
    }

    for (i, step) in steps.iter().enumerate() {
        if !(step.begin_time < step.end_time) {
            events.push(Event::error(format!(
                "The begin time of the time step ({}) must be smaller than the end time of the time step ({}).",
                step.begin_time, step.end_time
            )));
        }
        if i > 0 {
            let previous_end = steps[i - 1].end_time;
            if step.begin_time != previous_end {
                events.push(Event::error(format!(
                    "The begin time of the time step ({}) must be equal to the end time of the previous time step ({}).",
                    step.begin_time, previous_end
                )));
            }
        }
    }
}

fn is_segment_endpoint(segments: &[SegmentDraft], x: Real) -> bool {
    segments.iter().any(|s| s.start.x == x || s.end.x == x)
}

/// Check presence and placement of characteristic points.
///
/// Returns the points that sit on a segment endpoint.
pub(crate) fn check_characteristic_points(
    points: &BTreeMap<CharacteristicPointType, Real>,
    segments: &[SegmentDraft],
    families: &[RevetmentFamily],
    events: &mut Vec<Event>,
) -> Landmarks {
    let mut required = vec![CharacteristicPointType::OuterToe, CharacteristicPointType::OuterCrest];
    if families.iter().any(|f| f.requires_inner_slope()) {
        required.push(CharacteristicPointType::InnerCrest);
        required.push(CharacteristicPointType::InnerToe);
    }

    for kind in required {
        if !points.contains_key(&kind) {
            events.push(Event::error(format!("The {kind} is required.")));
        }
    }

    let mut landmarks = Landmarks::new();
    for (&kind, &x) in points {
        if is_segment_endpoint(segments, x) {
            landmarks.insert(kind, x);
        } else {
            events.push(Event::error(format!(
                "The {kind} must be on a start or end point of a profile segment."
            )));
        }
    }
    landmarks
}

pub(crate) fn check_location_count(locations: &[&LocationConstructionProperties], events: &mut Vec<Event>) {
    if locations.is_empty() {
        events.push(Event::error("At least 1 location is required."));
    }
}

/// Top-layer check. Returns whether the location may be resolved.
pub(crate) fn check_top_layer(location: &LocationConstructionProperties, events: &mut Vec<Event>) -> bool {
    if location.family().accepts(location.top_layer_type()) {
        true
    } else {
        events.push(Event::error(format!(
            "The location with position {} has an invalid top layer type.",
            location.x()
        )));
        false
    }
}

pub(crate) fn check_location_position(
    location: &LocationConstructionProperties,
    landmarks: &Landmarks,
    events: &mut Vec<Event>,
) {
    let x = location.x();
    let landmark = |kind: CharacteristicPointType| landmarks.get(&kind).copied();

    if location.family().is_on_outer_slope() {
        if let Some(toe) = landmark(CharacteristicPointType::OuterToe)
            && x <= toe
        {
            events.push(Event::error(format!(
                "The location with position {x} must be greater than the x coordinate of the outer toe ({toe})."
            )));
        }
        if let Some(crest) = landmark(CharacteristicPointType::OuterCrest)
            && x >= crest
        {
            events.push(Event::error(format!(
                "The location with position {x} must be smaller than the x coordinate of the outer crest ({crest})."
            )));
        }
    } else {
        if let Some(crest) = landmark(CharacteristicPointType::OuterCrest)
            && x < crest
        {
            events.push(Event::error(format!(
                "The location with position {x} must be equal to or greater than the x coordinate of the outer crest ({crest})."
            )));
        }
        if let Some(toe) = landmark(CharacteristicPointType::InnerToe)
            && x > toe
        {
            events.push(Event::error(format!(
                "The location with position {x} must be equal to or smaller than the x coordinate of the inner toe ({toe})."
            )));
        }
    }
}

/// Geometry requirements of overtopping locations: rough enough outer slope,
/// non-rising inner slope. One event per offending segment.
pub(crate) fn check_overtopping_geometry(
    segments: &[SegmentDraft],
    landmarks: &Landmarks,
    events: &mut Vec<Event>,
) {
    let between = |from: CharacteristicPointType, to: CharacteristicPointType| -> Vec<&SegmentDraft> {
        match (landmarks.get(&from), landmarks.get(&to)) {
            (Some(&a), Some(&b)) => segments
                .iter()
                .filter(|s| s.start.x >= a && s.end.x <= b)
                .collect(),
            _ => Vec::new(),
        }
    };

    for segment in between(CharacteristicPointType::OuterToe, CharacteristicPointType::OuterCrest) {
        if !in_closed_range(segment.roughness, 0.5, 1.0) {
            events.push(Event::error(format!(
                "The roughness coefficient of the dike profile segment starting at {} must be in range [0.5, 1].",
                segment.start
            )));
        }
    }

    for segment in between(CharacteristicPointType::InnerCrest, CharacteristicPointType::InnerToe) {
        if segment.end.z > segment.start.z {
            events.push(Event::error(format!(
                "The dike profile segment starting at {} on the inner slope must be monotonically descending.",
                segment.start
            )));
        }
    }
}

pub(crate) fn check_foreshore(has_foreshore: bool, families: &[RevetmentFamily], events: &mut Vec<Event>) {
    if !has_foreshore && families.iter().any(|f| f.requires_foreshore()) {
        events.push(Event::error("The foreshore is required."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::TopLayerType;
    use crate::location::construction::{GrassWaveImpactProperties, GrassWaveOvertoppingProperties};

    fn draft(x1: Real, z1: Real, x2: Real, z2: Real, roughness: Real) -> SegmentDraft {
        SegmentDraft {
            start: ProfilePoint::new(x1, z1),
            end: ProfilePoint::new(x2, z2),
            roughness,
        }
    }

    #[test]
    fn broken_chain_names_both_points() {
        let mut events = Vec::new();
        check_segments(&[draft(0.0, 10.0, 10.0, 20.0, 1.0), draft(11.0, 20.0, 12.0, 21.0, 1.0)], &mut events);
        assert_eq!(
            events,
            vec![Event::error(
                "The start point of the dike profile segment (11, 20) must be equal to the end point of the previous dike profile segment (10, 20)."
            )]
        );
    }

    #[test]
    fn time_step_errors_accumulate() {
        let mut events = Vec::new();
        let steps = [
            TimeDependentInput::new(0.0, 10.0, 0.0, 1.0, 4.0, 0.0),
            TimeDependentInput::new(12.0, 12.0, 0.0, 1.0, 4.0, 0.0),
        ];
        check_time_steps(&steps, &mut events);
        assert_eq!(events.len(), 2);
        assert!(events[0].message.contains("(12) must be smaller than the end time of the time step (12)"));
        assert!(events[1].message.contains("must be equal to the end time of the previous time step (10)"));
    }

    #[test]
    fn nan_times_break_ordering() {
        let mut events = Vec::new();
        check_time_steps(&[TimeDependentInput::new(f64::NAN, 2.2, 0.0, 1.0, 4.0, 0.0)], &mut events);
        assert_eq!(
            events,
            vec![Event::error(
                "The begin time of the time step (NaN) must be smaller than the end time of the time step (2.2)."
            )]
        );
    }

    #[test]
    fn inner_points_only_required_for_overtopping() {
        let segments = [draft(0.0, 0.0, 10.0, 5.0, 1.0)];
        let mut points = BTreeMap::new();
        points.insert(CharacteristicPointType::OuterToe, 0.0);
        points.insert(CharacteristicPointType::OuterCrest, 10.0);

        let mut events = Vec::new();
        check_characteristic_points(&points, &segments, &[RevetmentFamily::GrassWaveImpact], &mut events);
        assert!(events.is_empty());

        check_characteristic_points(&points, &segments, &[RevetmentFamily::GrassWaveOvertopping], &mut events);
        let messages: Vec<_> = events.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["The inner crest is required.", "The inner toe is required."]);
    }

    #[test]
    fn off_endpoint_landmark_is_dropped() {
        let segments = [draft(0.0, 0.0, 10.0, 5.0, 1.0)];
        let mut points = BTreeMap::new();
        points.insert(CharacteristicPointType::OuterToe, 0.0);
        points.insert(CharacteristicPointType::OuterCrest, 9.0);

        let mut events = Vec::new();
        let landmarks = check_characteristic_points(&points, &segments, &[], &mut events);
        assert_eq!(
            events,
            vec![Event::error("The outer crest must be on a start or end point of a profile segment.")]
        );
        assert!(!landmarks.contains_key(&CharacteristicPointType::OuterCrest));
    }

    #[test]
    fn outer_slope_bounds_are_exclusive() {
        let mut landmarks = Landmarks::new();
        landmarks.insert(CharacteristicPointType::OuterToe, 0.0);
        landmarks.insert(CharacteristicPointType::OuterCrest, 10.0);

        for x in [0.0, 10.0] {
            let mut events = Vec::new();
            let location = GrassWaveImpactProperties::new(x, TopLayerType::GrassClosedSod).into();
            check_location_position(&location, &landmarks, &mut events);
            assert_eq!(events.len(), 1, "x = {x}");
        }
    }

    #[test]
    fn overtopping_bounds_are_inclusive() {
        let mut landmarks = Landmarks::new();
        landmarks.insert(CharacteristicPointType::OuterCrest, 10.0);
        landmarks.insert(CharacteristicPointType::InnerToe, 20.0);

        for x in [10.0, 15.0, 20.0] {
            let mut events = Vec::new();
            let location = GrassWaveOvertoppingProperties::new(x, TopLayerType::GrassOpenSod).into();
            check_location_position(&location, &landmarks, &mut events);
            assert!(events.is_empty(), "x = {x}");
        }
    }

    #[test]
    fn overtopping_geometry_reports_every_violation() {
        let segments = [
            draft(0.0, 0.0, 5.0, 2.0, 0.4),
            draft(5.0, 2.0, 10.0, 5.0, 1.1),
            draft(10.0, 5.0, 12.0, 5.0, 1.0),
            draft(12.0, 5.0, 15.0, 6.0, 1.0),
            draft(15.0, 6.0, 20.0, 0.0, 1.0),
        ];
        let mut landmarks = Landmarks::new();
        landmarks.insert(CharacteristicPointType::OuterToe, 0.0);
        landmarks.insert(CharacteristicPointType::OuterCrest, 10.0);
        landmarks.insert(CharacteristicPointType::InnerCrest, 12.0);
        landmarks.insert(CharacteristicPointType::InnerToe, 20.0);

        let mut events = Vec::new();
        check_overtopping_geometry(&segments, &landmarks, &mut events);
        let messages: Vec<_> = events.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "The roughness coefficient of the dike profile segment starting at (0, 0) must be in range [0.5, 1].",
                "The roughness coefficient of the dike profile segment starting at (5, 2) must be in range [0.5, 1].",
                "The dike profile segment starting at (12, 5) on the inner slope must be monotonically descending.",
            ]
        );
    }
}
