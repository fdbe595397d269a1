//! Revetment locations: requests, defaults, registry and resolved inputs.

use core::fmt;

pub mod construction;
pub mod defaults;
pub mod input;
pub mod registry;

/// Closed set of revetment families with their own degradation model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RevetmentFamily {
    AsphaltWaveImpact,
    GrassWaveImpact,
    GrassWaveRunup,
    GrassWaveOvertopping,
    NaturalStoneWaveImpact,
}

impl RevetmentFamily {
    pub const ALL: [RevetmentFamily; 5] = [
        RevetmentFamily::AsphaltWaveImpact,
        RevetmentFamily::GrassWaveImpact,
        RevetmentFamily::GrassWaveRunup,
        RevetmentFamily::GrassWaveOvertopping,
        RevetmentFamily::NaturalStoneWaveImpact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RevetmentFamily::AsphaltWaveImpact => "asphalt wave impact",
            RevetmentFamily::GrassWaveImpact => "grass wave impact",
            RevetmentFamily::GrassWaveRunup => "grass wave run-up",
            RevetmentFamily::GrassWaveOvertopping => "grass wave overtopping",
            RevetmentFamily::NaturalStoneWaveImpact => "natural stone wave impact",
        }
    }

    /// Locations of this family sit strictly between the outer toe and outer crest.
    pub fn is_on_outer_slope(self) -> bool {
        !matches!(self, RevetmentFamily::GrassWaveOvertopping)
    }

    /// Inner crest and inner toe must be present.
    pub fn requires_inner_slope(self) -> bool {
        matches!(self, RevetmentFamily::GrassWaveOvertopping)
    }

    pub fn requires_foreshore(self) -> bool {
        matches!(self, RevetmentFamily::GrassWaveRunup)
    }

    /// Top-layer types this family has default constants for.
    pub fn accepts(self, top_layer: TopLayerType) -> bool {
        match self {
            RevetmentFamily::AsphaltWaveImpact => top_layer == TopLayerType::HydraulicAsphaltConcrete,
            RevetmentFamily::GrassWaveImpact
            | RevetmentFamily::GrassWaveRunup
            | RevetmentFamily::GrassWaveOvertopping => {
                matches!(top_layer, TopLayerType::GrassClosedSod | TopLayerType::GrassOpenSod)
            }
            RevetmentFamily::NaturalStoneWaveImpact => top_layer == TopLayerType::NordicStone,
        }
    }
}

impl fmt::Display for RevetmentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Material variant of the revetment surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TopLayerType {
    HydraulicAsphaltConcrete,
    GrassClosedSod,
    GrassOpenSod,
    NordicStone,
}
