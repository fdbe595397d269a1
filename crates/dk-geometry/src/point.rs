//! Profile points and characteristic landmarks.

use core::fmt;
use std::sync::Arc;

use dk_core::Real;

/// A vertex on the dike cross-section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfilePoint {
    pub x: Real,
    pub z: Real,
}

impl ProfilePoint {
    pub fn new(x: Real, z: Real) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for ProfilePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Named landmark kinds along the cross-section, seaward to landward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacteristicPointType {
    OuterToe,
    CrestOuterBerm,
    NotchOuterBerm,
    OuterCrest,
    InnerCrest,
    InnerToe,
}

impl CharacteristicPointType {
    pub const ALL: [CharacteristicPointType; 6] = [
        CharacteristicPointType::OuterToe,
        CharacteristicPointType::CrestOuterBerm,
        CharacteristicPointType::NotchOuterBerm,
        CharacteristicPointType::OuterCrest,
        CharacteristicPointType::InnerCrest,
        CharacteristicPointType::InnerToe,
    ];

    /// Lowercase name as used in diagnostic messages.
    pub fn name(self) -> &'static str {
        match self {
            CharacteristicPointType::OuterToe => "outer toe",
            CharacteristicPointType::CrestOuterBerm => "crest outer berm",
            CharacteristicPointType::NotchOuterBerm => "notch outer berm",
            CharacteristicPointType::OuterCrest => "outer crest",
            CharacteristicPointType::InnerCrest => "inner crest",
            CharacteristicPointType::InnerToe => "inner toe",
        }
    }
}

impl fmt::Display for CharacteristicPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A landmark bound to the profile point instance it sits on.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacteristicPoint {
    point: Arc<ProfilePoint>,
    kind: CharacteristicPointType,
}

impl CharacteristicPoint {
    pub fn new(point: Arc<ProfilePoint>, kind: CharacteristicPointType) -> Self {
        Self { point, kind }
    }

    pub fn point(&self) -> &Arc<ProfilePoint> {
        &self.point
    }

    pub fn kind(&self) -> CharacteristicPointType {
        self.kind
    }

    pub fn x(&self) -> Real {
        self.point.x
    }

    pub fn z(&self) -> Real {
        self.point.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_lowercase() {
        for kind in CharacteristicPointType::ALL {
            assert_eq!(kind.name(), kind.name().to_lowercase());
        }
        assert_eq!(CharacteristicPointType::OuterToe.to_string(), "outer toe");
    }

    #[test]
    fn point_display_uses_shortest_form() {
        assert_eq!(ProfilePoint::new(20.0, 30.5).to_string(), "(20, 30.5)");
    }
}
