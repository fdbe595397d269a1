use crate::{DkError, DkResult};

/// Floating point type used throughout the kernel
pub type Real = f64;

/// Absolute/relative tolerance pair for damage bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Pass `v` through, or name it in the error when it is NaN or infinite.
pub fn ensure_finite(v: Real, what: &'static str) -> DkResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DkError::NonFinite { what, value: v })
    }
}

/// `lower <= v <= upper`, false for NaN.
#[inline]
pub fn in_closed_range(v: Real, lower: Real, upper: Real) -> bool {
    v >= lower && v <= upper
}

/// `lower < v < upper`, false for NaN.
#[inline]
pub fn in_open_range(v: Real, lower: Real, upper: Real) -> bool {
    v > lower && v < upper
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
            prop_assert!(nearly_equal(a, a, tol));
        }

        #[test]
        fn finite_values_pass_unchanged(v in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
            prop_assert_eq!(ensure_finite(v, "value"), Ok(v));
        }

        #[test]
        fn closed_range_contains_open_range(v in -2.0_f64..2.0) {
            if in_open_range(v, -1.0, 1.0) {
                prop_assert!(in_closed_range(v, -1.0, 1.0));
            }
        }
    }
}
