//! Incremental calculation input builder.

use std::collections::BTreeMap;
use std::sync::Arc;

use dk_core::{DataResult, Event, Real, error_count};
use dk_geometry::{
    CharacteristicPoint, CharacteristicPointType, Foreshore, ProfileData, ProfilePoint, ProfileSegment,
    vertical_height,
};
use tracing::{debug, info, warn};

use crate::calculation_input::CalculationInput;
use crate::check::{self, SegmentDraft};
use crate::location::RevetmentFamily;
use crate::location::construction::{
    AsphaltWaveImpactProperties, GrassWaveImpactProperties, GrassWaveOvertoppingProperties,
    GrassWaveRunupProperties, LocationConstructionProperties, NaturalStoneWaveImpactProperties,
};
use crate::location::input::LocationDependentInput;
use crate::location::registry::{LocationContext, resolve_location};
use crate::time::TimeDependentInput;

/// One recorded builder call.
#[derive(Clone, Debug, PartialEq)]
pub enum BuilderCommand {
    AddSegment {
        start: ProfilePoint,
        end: ProfilePoint,
        roughness_coefficient: Real,
    },
    AddCharacteristicPoint {
        x: Real,
        kind: CharacteristicPointType,
    },
    SetDikeOrientation(Real),
    SetForeshore(Foreshore),
    AddTimeStep(TimeDependentInput),
    AddLocation(LocationConstructionProperties),
}

/// Builder for constructing a calculation input incrementally.
///
/// The `add_*` methods only record commands; nothing is checked until
/// `build()`, which can be called any number of times and never changes the
/// recorded log.
#[derive(Clone, Debug, Default)]
pub struct CalculationInputBuilder {
    log: Vec<BuilderCommand>,
}

impl CalculationInputBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, oldest first.
    pub fn commands(&self) -> &[BuilderCommand] {
        &self.log
    }

    /// Append a segment from `(start_x, start_z)` to `(end_x, end_z)`, in metres,
    /// with the default roughness coefficient.
    pub fn add_dike_profile_segment(&mut self, start_x: Real, start_z: Real, end_x: Real, end_z: Real) {
        self.add_dike_profile_segment_with_roughness(
            start_x,
            start_z,
            end_x,
            end_z,
            dk_geometry::profile::DEFAULT_ROUGHNESS_COEFFICIENT,
        );
    }

    /// Same as [`Self::add_dike_profile_segment`] with an explicit roughness.
    pub fn add_dike_profile_segment_with_roughness(
        &mut self,
        start_x: Real,
        start_z: Real,
        end_x: Real,
        end_z: Real,
        roughness_coefficient: Real,
    ) {
        self.log.push(BuilderCommand::AddSegment {
            start: ProfilePoint::new(start_x, start_z),
            end: ProfilePoint::new(end_x, end_z),
            roughness_coefficient,
        });
    }

    /// Mark a characteristic point; a later call for the same kind wins.
    pub fn add_dike_profile_point(&mut self, x: Real, kind: CharacteristicPointType) {
        self.log.push(BuilderCommand::AddCharacteristicPoint { x, kind });
    }

    /// Dike normal in degrees relative to north. Last call wins; 0 when never set.
    pub fn add_dike_orientation(&mut self, degrees: Real) {
        self.log.push(BuilderCommand::SetDikeOrientation(degrees));
    }

    /// Foreshore slope (dimensionless) and bottom level in metres.
    ///
    /// Last call wins. Required by grass wave run-up locations.
    pub fn add_foreshore(&mut self, slope: Real, bottom_z: Real) {
        self.log.push(BuilderCommand::SetForeshore(Foreshore::new(slope, bottom_z)));
    }

    /// Append a time step.
    ///
    /// Times are in seconds, water level and Hm0 wave height in metres, Tm10
    /// wave period in seconds and wave angle in degrees. Steps must follow
    /// each other without gaps.
    pub fn add_time_step(
        &mut self,
        begin_time: Real,
        end_time: Real,
        water_level: Real,
        wave_height_hm0: Real,
        wave_period_tm10: Real,
        wave_angle: Real,
    ) {
        self.log.push(BuilderCommand::AddTimeStep(TimeDependentInput::new(
            begin_time,
            end_time,
            water_level,
            wave_height_hm0,
            wave_period_tm10,
            wave_angle,
        )));
    }

    /// Append a location of any family. Locations keep their call order.
    pub fn add_location(&mut self, properties: impl Into<LocationConstructionProperties>) {
        self.log.push(BuilderCommand::AddLocation(properties.into()));
    }

    /// [`Self::add_location`] for an asphalt wave impact location.
    pub fn add_asphalt_wave_impact_location(&mut self, properties: AsphaltWaveImpactProperties) {
        self.add_location(properties);
    }

    /// [`Self::add_location`] for a grass wave impact location.
    pub fn add_grass_wave_impact_location(&mut self, properties: GrassWaveImpactProperties) {
        self.add_location(properties);
    }

    /// [`Self::add_location`] for a grass wave run-up location.
    pub fn add_grass_wave_runup_location(&mut self, properties: GrassWaveRunupProperties) {
        self.add_location(properties);
    }

    /// [`Self::add_location`] for a grass wave overtopping location.
    pub fn add_grass_wave_overtopping_location(&mut self, properties: GrassWaveOvertoppingProperties) {
        self.add_location(properties);
    }

    /// [`Self::add_location`] for a natural stone wave impact location.
    pub fn add_natural_stone_wave_impact_location(&mut self, properties: NaturalStoneWaveImpactProperties) {
        self.add_location(properties);
    }

    /// Check the recorded commands and freeze them into a `CalculationInput`.
    pub fn build(&self) -> DataResult<CalculationInput> {
        build_from_log(&self.log)
    }
}

/// Commands folded into their last-write-wins / append-order shape.
#[derive(Default)]
struct Collected<'a> {
    segments: Vec<SegmentDraft>,
    points: BTreeMap<CharacteristicPointType, Real>,
    dike_orientation: Option<Real>,
    foreshore: Option<Foreshore>,
    time_steps: Vec<TimeDependentInput>,
    locations: Vec<&'a LocationConstructionProperties>,
}

impl<'a> Collected<'a> {
    fn from_log(log: &'a [BuilderCommand]) -> Self {
        let mut collected = Self::default();
        for command in log {
            match command {
                BuilderCommand::AddSegment {
                    start,
                    end,
                    roughness_coefficient,
                } => collected.segments.push(SegmentDraft {
                    start: *start,
                    end: *end,
                    roughness: *roughness_coefficient,
                }),
                BuilderCommand::AddCharacteristicPoint { x, kind } => {
                    collected.points.insert(*kind, *x);
                }
                BuilderCommand::SetDikeOrientation(degrees) => collected.dike_orientation = Some(*degrees),
                BuilderCommand::SetForeshore(foreshore) => collected.foreshore = Some(*foreshore),
                BuilderCommand::AddTimeStep(step) => collected.time_steps.push(*step),
                BuilderCommand::AddLocation(location) => collected.locations.push(location),
            }
        }
        collected
    }

    fn families(&self) -> Vec<RevetmentFamily> {
        let mut families: Vec<_> = self.locations.iter().map(|l| l.family()).collect();
        families.sort();
        families.dedup();
        families
    }
}

/// Run the structural pipeline over a command log.
///
/// Pure: the same log always yields an equal result.
pub fn build_from_log(log: &[BuilderCommand]) -> DataResult<CalculationInput> {
    let collected = Collected::from_log(log);
    let families = collected.families();
    debug!(
        segments = collected.segments.len(),
        time_steps = collected.time_steps.len(),
        locations = collected.locations.len(),
        "building calculation input"
    );

    let mut events = Vec::new();
    check::check_segments(&collected.segments, &mut events);
    check::check_time_steps(&collected.time_steps, &mut events);
    let landmarks =
        check::check_characteristic_points(&collected.points, &collected.segments, &families, &mut events);
    check::check_location_count(&collected.locations, &mut events);

    let mut accepted = Vec::with_capacity(collected.locations.len());
    for &location in &collected.locations {
        if check::check_top_layer(location, &mut events) {
            accepted.push(location);
        }
        check::check_location_position(location, &landmarks, &mut events);
    }

    if families.iter().any(|f| f.requires_inner_slope()) {
        check::check_overtopping_geometry(&collected.segments, &landmarks, &mut events);
    }
    check::check_foreshore(collected.foreshore.is_some(), &families, &mut events);

    if error_count(&events) > 0 {
        warn!(errors = error_count(&events), "calculation input rejected");
        return DataResult::failure(events);
    }

    let profile = freeze_profile(&collected);
    let locations = match resolve_locations(&accepted, &profile) {
        Ok(locations) => locations,
        Err(event) => {
            events.push(event);
            warn!(errors = error_count(&events), "calculation input rejected");
            return DataResult::failure(events);
        }
    };

    info!(
        segments = profile.segments().len(),
        time_steps = collected.time_steps.len(),
        locations = locations.len(),
        "calculation input built"
    );
    DataResult::success(CalculationInput::new(profile, collected.time_steps, locations), events)
}

/// Chain the segments so each joint is a single shared point instance.
fn freeze_profile(collected: &Collected<'_>) -> ProfileData {
    let mut segments: Vec<ProfileSegment> = Vec::with_capacity(collected.segments.len());
    for draft in &collected.segments {
        let start = match segments.last() {
            Some(previous) if **previous.end_point() == draft.start => Arc::clone(previous.end_point()),
            _ => Arc::new(draft.start),
        };
        segments.push(ProfileSegment::new(start, Arc::new(draft.end), draft.roughness));
    }

    let characteristic_points = collected
        .points
        .iter()
        .filter_map(|(&kind, &x)| {
            shared_point_at(&segments, x).map(|point| CharacteristicPoint::new(point, kind))
        })
        .collect();

    ProfileData::new(
        segments,
        characteristic_points,
        collected.dike_orientation.unwrap_or(0.0),
        collected.foreshore,
    )
}

fn shared_point_at(segments: &[ProfileSegment], x: Real) -> Option<Arc<ProfilePoint>> {
    segments.iter().find_map(|s| {
        if s.start_point().x == x {
            Some(Arc::clone(s.start_point()))
        } else if s.end_point().x == x {
            Some(Arc::clone(s.end_point()))
        } else {
            None
        }
    })
}

fn resolve_locations(
    accepted: &[&LocationConstructionProperties],
    profile: &ProfileData,
) -> Result<Vec<LocationDependentInput>, Event> {
    let dike_height = profile.dike_height().unwrap_or(0.0);
    let mut locations = Vec::with_capacity(accepted.len());
    for &properties in accepted {
        let x = properties.x();
        let z = vertical_height(profile.segments(), x).ok_or_else(|| {
            Event::error(format!(
                "The location with position {x} could not be located on the dike profile."
            ))
        })?;
        if let Some(location) = resolve_location(properties, &LocationContext { z, dike_height }) {
            locations.push(location);
        }
    }
    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_only_records() {
        let mut builder = CalculationInputBuilder::new();
        builder.add_dike_profile_segment(0.0, 0.0, 1.0, 1.0);
        builder.add_dike_profile_point(0.0, CharacteristicPointType::OuterToe);
        builder.add_time_step(0.0, 1.0, 0.0, 1.0, 4.0, 0.0);

        assert_eq!(builder.commands().len(), 3);
        assert!(matches!(
            builder.commands()[0],
            BuilderCommand::AddSegment {
                roughness_coefficient, ..
            } if roughness_coefficient == 1.0
        ));
    }

    #[test]
    fn last_characteristic_point_wins() {
        let mut builder = CalculationInputBuilder::new();
        builder.add_dike_profile_point(3.0, CharacteristicPointType::OuterCrest);
        builder.add_dike_profile_point(7.0, CharacteristicPointType::OuterCrest);
        let collected = Collected::from_log(builder.commands());
        assert_eq!(collected.points.get(&CharacteristicPointType::OuterCrest), Some(&7.0));
    }

    #[test]
    fn empty_builder_reports_every_missing_part() {
        let result = CalculationInputBuilder::new().build();
        assert!(!result.successful());
        let messages: Vec<_> = result.events().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "At least 1 dike profile segment is required.",
                "At least 1 time step is required.",
                "The outer toe is required.",
                "The outer crest is required.",
                "At least 1 location is required.",
            ]
        );
    }
}
