//! Adaptive flattening of Bezier segments into biarc sequences.
//!
//! Arc length has no closed form for Beziers, so a fixed-resolution
//! polyline sample supplies a cheap length estimate (and feeds the
//! extents tracker along the way). The biarc subdivision count scales
//! with that estimated length, decoupling geometric fidelity from
//! parameter range: long curves get more arc pairs, short ones the
//! minimum of two.

use crate::bezier::{CubicSegment, QuadSegment};
use crate::biarc::{self, Biarc, PolyVertex};
use crate::extents::Extents;
use crate::types::{Point, Scalar, Vec2, ARC_SPACING, CURVE_STEPS};

/// Knobs for curve flattening.
#[derive(Debug, Clone, Copy)]
pub struct FlattenParams {
    /// Parameter steps for the length-estimation sample.
    pub curve_steps: u32,
    /// Approximate curve length covered by one biarc pair.
    pub arc_spacing: Scalar,
}

impl Default for FlattenParams {
    fn default() -> Self {
        Self {
            curve_steps: CURVE_STEPS,
            arc_spacing: ARC_SPACING,
        }
    }
}

/// Flatten a quadratic segment into biarc vertices.
///
/// Every length-estimation sample is merged into `extents`, so the box
/// tracks the sampled curve itself, not just the subdivision endpoints.
pub fn flatten_quad(
    seg: &QuadSegment,
    params: &FlattenParams,
    extents: &mut Extents,
    emit: impl FnMut(PolyVertex),
) {
    let len = sampled_length(|t| seg.eval(t), params.curve_steps, extents);
    subdivide(|t| (seg.eval(t), seg.eval_deriv(t)), len, params, emit);
}

/// Flatten a cubic segment into biarc vertices. See [`flatten_quad`].
pub fn flatten_cubic(
    seg: &CubicSegment,
    params: &FlattenParams,
    extents: &mut Extents,
    emit: impl FnMut(PolyVertex),
) {
    let len = sampled_length(|t| seg.eval(t), params.curve_steps, extents);
    subdivide(|t| (seg.eval(t), seg.eval_deriv(t)), len, params, emit);
}

/// Polyline length of `eval` over [0, 1] at `steps` resolution.
///
/// The start point is not merged into `extents` — it is the walker's
/// cursor and was already accounted for by the event that put it there.
fn sampled_length(
    eval: impl Fn(Scalar) -> Point,
    steps: u32,
    extents: &mut Extents,
) -> Scalar {
    let mut prev = eval(0.0);
    let mut len = 0.0;
    for i in 1..=steps {
        let p = eval(Scalar::from(i) / Scalar::from(steps));
        len += (p - prev).length();
        extents.add_point(p);
        prev = p;
    }
    len
}

/// Walk the curve in `max(2, len/arc_spacing)` equal parameter
/// increments, fitting a biarc between consecutive point/tangent pairs.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn subdivide(
    sample: impl Fn(Scalar) -> (Point, Vec2),
    len: Scalar,
    params: &FlattenParams,
    mut emit: impl FnMut(PolyVertex),
) {
    let steps = (len / params.arc_spacing).max(2.0) as u32;
    let (mut ps, mut ts) = sample(0.0);
    for i in 1..=steps {
        let (p, t) = sample(Scalar::from(i) / Scalar::from(steps));
        match biarc::fit(ps, ts, p, t, 1.0) {
            Biarc::Line(end) => emit(PolyVertex::line(end)),
            Biarc::Arcs(a1, a2) => {
                emit(a1);
                emit(a2);
            }
        }
        ps = p;
        ts = t;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
