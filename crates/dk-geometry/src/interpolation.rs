//! Linear interpolation along a segment chain.

use dk_core::Real;

use crate::profile::ProfileSegment;

#[inline]
fn lerp(v: Real, v1: Real, w1: Real, v2: Real, w2: Real) -> Real {
    w1 + (w2 - w1) * (v - v1) / (v2 - v1)
}

/// Height of the first segment spanning `x`.
///
/// Vertical segments report their start height.
pub fn vertical_height(segments: &[ProfileSegment], x: Real) -> Option<Real> {
    let segment = segments.iter().find(|s| s.spans_x(x))?;
    let (a, b) = (segment.start_point(), segment.end_point());
    if a.x == b.x {
        return Some(a.z);
    }
    Some(lerp(x, a.x, a.z, b.x, b.z))
}

/// Horizontal position of the first segment spanning `z`.
///
/// Flat segments report their start position.
pub fn horizontal_position(segments: &[ProfileSegment], z: Real) -> Option<Real> {
    let segment = segments.iter().find(|s| s.spans_z(z))?;
    let (a, b) = (segment.start_point(), segment.end_point());
    if a.z == b.z {
        return Some(a.x);
    }
    Some(lerp(z, a.z, a.x, b.z, b.x))
}
