//! dk-core: shared foundation for the dike revetment kernel.
//!
//! Contains:
//! - error (shared error types)
//! - numeric (Real + tolerances + float helpers)
//! - event (diagnostic events and the uniform result shape)
//! - timing (wall-clock timer for run logging)

pub mod error;
pub mod event;
pub mod numeric;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use error::{DkError, DkResult};
pub use event::{DataResult, Event, EventKind, error_count};
pub use numeric::*;
pub use timing::Timer;
