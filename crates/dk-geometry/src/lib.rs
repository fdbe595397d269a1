//! dk-geometry: dike cross-section model.
//!
//! Provides:
//! - Profile points and named characteristic points
//! - Chained straight profile segments with shared endpoints
//! - Frozen `ProfileData` with landmark and height queries
//! - Vertical and horizontal interpolation along the profile
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use dk_geometry::{ProfilePoint, ProfileSegment};
//!
//! let toe = Arc::new(ProfilePoint::new(0.0, 10.0));
//! let crest = Arc::new(ProfilePoint::new(10.0, 20.0));
//! let segment = ProfileSegment::new(toe, crest, 1.0);
//!
//! assert_eq!(segment.slope(), Some(1.0));
//! assert!(segment.is_ascending());
//! ```

pub mod interpolation;
pub mod point;
pub mod profile;

// Re-exports for ergonomics
pub use interpolation::{horizontal_position, vertical_height};
pub use point::{CharacteristicPoint, CharacteristicPointType, ProfilePoint};
pub use profile::{Foreshore, ProfileData, ProfileSegment};
