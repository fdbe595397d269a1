//! dk-input: calculation input construction and validation.
//!
//! Provides:
//! - Time-dependent hydraulic intervals
//! - Revetment location requests, default providers and the location registry
//! - `CalculationInputBuilder`: append-only command log with a pure, repeatable `build`
//! - `Validator`: semantic range checks over a built input
//!
//! # Example
//!
//! ```
//! use dk_geometry::CharacteristicPointType;
//! use dk_input::{CalculationInputBuilder, GrassWaveImpactProperties, TopLayerType};
//!
//! let mut builder = CalculationInputBuilder::new();
//! builder.add_dike_profile_segment(0.0, 10.0, 10.0, 20.0);
//! builder.add_dike_profile_point(0.0, CharacteristicPointType::OuterToe);
//! builder.add_dike_profile_point(10.0, CharacteristicPointType::OuterCrest);
//! builder.add_time_step(1.1, 2.2, 12.0, 1.0, 4.0, 0.0);
//! builder.add_grass_wave_impact_location(GrassWaveImpactProperties::new(5.0, TopLayerType::GrassClosedSod));
//!
//! let result = builder.build();
//! assert!(result.successful());
//! assert_eq!(result.data().unwrap().locations().len(), 1);
//! ```

pub mod builder;
pub mod calculation_input;
pub(crate) mod check;
pub mod location;
pub mod time;
pub mod validator;

// Re-exports for ergonomics
pub use builder::{BuilderCommand, CalculationInputBuilder, build_from_log};
pub use calculation_input::CalculationInput;
pub use location::construction::{
    AsphaltWaveImpactProperties, GrassWaveImpactProperties, GrassWaveOvertoppingProperties,
    GrassWaveRunupProperties, LocationConstructionProperties, NaturalStoneWaveImpactProperties,
};
pub use location::input::{
    AsphaltWaveImpactInput, GrassWaveImpactInput, GrassWaveOvertoppingInput, GrassWaveRunupInput,
    LocationBase, LocationDependentInput, NaturalStoneWaveImpactInput,
};
pub use location::registry::{LocationContext, resolve_location};
pub use location::{RevetmentFamily, TopLayerType};
pub use time::TimeDependentInput;
pub use validator::{ValidationVerdict, Validator};
