use crate::error::{CoreError, CoreResult};

/// Scalar type for all property values.
pub type Real = f64;

/// Absolute plus relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Tolerance for unit-conversion round trips. The factors are
    /// exact multipliers, so the relative part has ample slack; the
    /// absolute part covers temperatures crossing zero.
    pub const ROUND_TRIP: Self = Self {
        abs: 1e-9,
        rel: 1e-6,
    };
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within `tol`, absolutely or relatively.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Pass `v` through unless it is NaN or infinite.
pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if !v.is_finite() {
        return Err(CoreError::NonFinite { what, value: v });
    }
    Ok(v)
}
