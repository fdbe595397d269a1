//! Frozen dike profile: segment chain, landmarks, orientation and foreshore.

use std::sync::Arc;

use dk_core::Real;

use crate::interpolation;
use crate::point::{CharacteristicPoint, CharacteristicPointType, ProfilePoint};

/// Roughness used when a segment is added without one.
pub const DEFAULT_ROUGHNESS_COEFFICIENT: Real = 1.0;

/// A straight piece of the profile.
///
/// Adjacent segments in a `ProfileData` share their joint point instance.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileSegment {
    start: Arc<ProfilePoint>,
    end: Arc<ProfilePoint>,
    roughness_coefficient: Real,
}

impl ProfileSegment {
    pub fn new(start: Arc<ProfilePoint>, end: Arc<ProfilePoint>, roughness_coefficient: Real) -> Self {
        Self {
            start,
            end,
            roughness_coefficient,
        }
    }

    pub fn start_point(&self) -> &Arc<ProfilePoint> {
        &self.start
    }

    pub fn end_point(&self) -> &Arc<ProfilePoint> {
        &self.end
    }

    pub fn roughness_coefficient(&self) -> Real {
        self.roughness_coefficient
    }

    /// dz/dx, `None` for a vertical segment.
    pub fn slope(&self) -> Option<Real> {
        let dx = self.end.x - self.start.x;
        if dx == 0.0 {
            None
        } else {
            Some((self.end.z - self.start.z) / dx)
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.end.z > self.start.z
    }

    /// True when x lies on the closed horizontal extent of the segment.
    pub fn spans_x(&self, x: Real) -> bool {
        let (lo, hi) = min_max(self.start.x, self.end.x);
        x >= lo && x <= hi
    }

    /// True when z lies on the closed vertical extent of the segment.
    pub fn spans_z(&self, z: Real) -> bool {
        let (lo, hi) = min_max(self.start.z, self.end.z);
        z >= lo && z <= hi
    }
}

fn min_max(a: Real, b: Real) -> (Real, Real) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Shallow-water geometry seaward of the outer toe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Foreshore {
    pub slope: Real,
    pub bottom_z: Real,
}

impl Foreshore {
    pub fn new(slope: Real, bottom_z: Real) -> Self {
        Self { slope, bottom_z }
    }
}

/// Immutable geometry of one dike cross-section.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileData {
    segments: Vec<ProfileSegment>,
    characteristic_points: Vec<CharacteristicPoint>,
    dike_orientation: Real,
    foreshore: Option<Foreshore>,
}

impl ProfileData {
    /// Freeze geometry. Callers are expected to have validated the chain.
    pub fn new(
        segments: Vec<ProfileSegment>,
        characteristic_points: Vec<CharacteristicPoint>,
        dike_orientation: Real,
        foreshore: Option<Foreshore>,
    ) -> Self {
        Self {
            segments,
            characteristic_points,
            dike_orientation,
            foreshore,
        }
    }

    pub fn segments(&self) -> &[ProfileSegment] {
        &self.segments
    }

    pub fn characteristic_points(&self) -> &[CharacteristicPoint] {
        &self.characteristic_points
    }

    pub fn characteristic_point(&self, kind: CharacteristicPointType) -> Option<&CharacteristicPoint> {
        self.characteristic_points.iter().find(|p| p.kind() == kind)
    }

    /// Dike orientation in degrees relative to north.
    pub fn dike_orientation(&self) -> Real {
        self.dike_orientation
    }

    pub fn foreshore(&self) -> Option<&Foreshore> {
        self.foreshore.as_ref()
    }

    /// Height of the outer crest, the reference dike height.
    pub fn dike_height(&self) -> Option<Real> {
        self.characteristic_point(CharacteristicPointType::OuterCrest)
            .map(CharacteristicPoint::z)
    }

    /// Profile height at horizontal position `x`.
    pub fn vertical_height(&self, x: Real) -> Option<Real> {
        interpolation::vertical_height(&self.segments, x)
    }

    /// First horizontal position where the profile reaches height `z`.
    pub fn horizontal_position(&self, z: Real) -> Option<Real> {
        interpolation::horizontal_position(&self.segments, z)
    }
}
