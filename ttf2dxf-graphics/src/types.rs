//! Core types and numeric constants shared across the geometry engine.
//!
//! Vector arithmetic (add, subtract, scale, dot, magnitude) comes from
//! `kurbo`'s `Point`/`Vec2` operator impls; only the zero-safe
//! normalization in [`unit`] is bespoke.

pub use kurbo::{Point, Vec2};

/// Convenience alias. Coordinates are f64 end to end and only rounded
/// at record-emission time.
pub type Scalar = f64;

/// Arc denominators below this magnitude mean the arc's endpoints are
/// collinear with its entry tangent; the arc degrades to a straight
/// segment. Tuned empirically; do not retune without test evidence.
pub const ARC_COLLINEAR_EPS: Scalar = 1e-10;

/// Number of fixed parameter steps used to estimate a Bezier segment's
/// length by polyline sampling.
pub const CURVE_STEPS: u32 = 100;

/// Approximate curve length, in output font units, covered by one biarc
/// pair. Longer curves get proportionally more subdivisions.
pub const ARC_SPACING: Scalar = 200.0;

/// Normalize a vector, mapping the zero vector to itself.
///
/// Tangents fed to the biarc fitter can be zero (degenerate control
/// polygons); callers get a zero direction back rather than NaN and must
/// tolerate it.
#[must_use]
pub fn unit(v: Vec2) -> Vec2 {
    let m = v.length();
    if m == 0.0 { Vec2::ZERO } else { v / m }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn unit_zero_vector() {
        assert_eq!(unit(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn unit_has_unit_length() {
        for v in [
            Vec2::new(3.0, 4.0),
            Vec2::new(-1.0, 0.0),
            Vec2::new(0.5, -0.5),
        ] {
            let u = unit(v);
            assert!((u.length() - 1.0).abs() < 1e-12, "length of {u:?}");
        }
    }

    #[test]
    fn unit_preserves_direction() {
        let u = unit(Vec2::new(10.0, 0.0));
        assert_eq!(u, Vec2::new(1.0, 0.0));
    }
}
