//! Biarc fitting: interpolate two point/tangent pairs with a pair of
//! tangent-continuous circular arcs.
//!
//! Arcs come out in the DXF polyline-arc convention: a bulge value
//! (tangent of one quarter of the arc's included angle, positive for
//! counterclockwise sweeps) rides on the vertex *preceding* the arc,
//! followed by the arc's endpoint. Degenerate configurations fall back to
//! straight vertices; nothing in this module is an error.

use std::f64::consts::TAU;

use crate::types::{unit, Point, Scalar, Vec2, ARC_COLLINEAR_EPS};

// ---------------------------------------------------------------------------
// PolyVertex
// ---------------------------------------------------------------------------

/// A polyline vertex produced by the geometry engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyVertex {
    /// Bulge of the arc ending at `end`; `None` for a straight segment.
    pub bulge: Option<Scalar>,
    /// Segment endpoint.
    pub end: Point,
}

impl PolyVertex {
    /// A straight-segment vertex.
    #[must_use]
    pub const fn line(end: Point) -> Self {
        Self { bulge: None, end }
    }
}

// ---------------------------------------------------------------------------
// Biarc solve
// ---------------------------------------------------------------------------

/// Result of a biarc fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Biarc {
    /// No valid biarc exists; take a straight segment to the endpoint.
    Line(Point),
    /// Two arcs joined tangentially at an interior point. Either arc may
    /// itself have degraded to a straight vertex if its chord is
    /// collinear with the entry tangent.
    Arcs(PolyVertex, PolyVertex),
}

/// Fit one or two circular arcs from `p0` (exit tangent `ts`) to `p4`
/// (exit tangent `te`), with arc radius ratio `r`.
///
/// Solves the quadratic `a·β² + b·β + c = 0` in the chord parameter and
/// keeps the larger root. The fit degrades to a straight segment when the
/// tangent configuration admits no solution (`a == 0`, negative
/// discriminant) or the root is non-positive. Tangents need not be
/// normalized; zero tangents are tolerated.
#[must_use]
pub fn fit(p0: Point, ts: Vec2, p4: Point, te: Vec2, r: Scalar) -> Biarc {
    let ts = unit(ts);
    let te = unit(te);

    let v = p0 - p4;

    let c = v.dot(v);
    let b = 2.0 * v.dot(ts * r + te);
    let a = 2.0 * r * (ts.dot(te) - 1.0);

    let disc = b * b - 4.0 * a * c;
    if a == 0.0 || disc < 0.0 {
        return Biarc::Line(p4);
    }

    let disq = disc.sqrt();
    let beta1 = (-b - disq) / 2.0 / a;
    let beta2 = (-b + disq) / 2.0 / a;
    let beta = beta1.max(beta2);
    if beta <= 0.0 {
        return Biarc::Line(p4);
    }

    let alpha = beta * r;
    let ab = alpha + beta;
    let p1 = p0 + ts * alpha;
    let p3 = p4 - te * beta;
    let p2 = p1.lerp(p3, alpha / ab);
    let tm = p3 - p2;

    Biarc::Arcs(arc_vertex(p0, p2, ts), arc_vertex(p2, p4, tm))
}

// ---------------------------------------------------------------------------
// Single arc → bulge vertex
// ---------------------------------------------------------------------------

/// Convert the arc from `p1` to `p2`, entered with tangent direction `d`,
/// into a bulge-carrying vertex.
///
/// When the chord is collinear with the tangent the arc has no finite
/// center and the vertex degrades to a straight segment.
#[must_use]
pub fn arc_vertex(p1: Point, p2: Point, d: Vec2) -> PolyVertex {
    let d = unit(d);
    let p = p2 - p1;
    let den = 2.0 * (p.y * d.x - p.x * d.y);

    if den.abs() < ARC_COLLINEAR_EPS {
        return PolyVertex::line(p2);
    }

    let r = -p.dot(p) / den;
    let center = p1 + Vec2::new(d.y * r, -d.x * r);
    let start = (p1 - center).atan2();
    let mut end = (p2 - center).atan2();

    // Wind the end angle so the sweep direction matches the radius sign:
    // negative radius sweeps counterclockwise (increasing angle).
    if r < 0.0 {
        while end <= start {
            end += TAU;
        }
    } else {
        while end >= start {
            end -= TAU;
        }
    }

    let mut bulge = ((end - start).abs() / 4.0).tan();
    if r > 0.0 {
        bulge = -bulge;
    }
    PolyVertex {
        bulge: Some(bulge),
        end: p2,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
