//! Bezier segment evaluation.
//!
//! TrueType outlines carry quadratic (conic) segments; CFF outlines carry
//! cubics. Neither is emitted directly — the flattener samples them and
//! hands consecutive point/tangent pairs to the biarc fitter.

use crate::types::{Point, Scalar, Vec2};

// ---------------------------------------------------------------------------
// QuadSegment
// ---------------------------------------------------------------------------

/// Three control points of a quadratic Bezier segment.
#[derive(Debug, Clone, Copy)]
pub struct QuadSegment {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl QuadSegment {
    /// Create a new quadratic segment from three control points.
    #[must_use]
    pub const fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluate the point at parameter `t` in [0, 1].
    #[must_use]
    pub fn eval(&self, t: Scalar) -> Point {
        let s = 1.0 - t;
        let a = s * s;
        let b = 2.0 * s * t;
        let c = t * t;
        Point::new(
            c.mul_add(self.p2.x, a.mul_add(self.p0.x, b * self.p1.x)),
            c.mul_add(self.p2.y, a.mul_add(self.p0.y, b * self.p1.y)),
        )
    }

    /// Evaluate the derivative (tangent vector) at parameter `t` in [0, 1].
    #[must_use]
    pub fn eval_deriv(&self, t: Scalar) -> Vec2 {
        let a = 2.0 * (1.0 - t);
        let b = 2.0 * t;
        Vec2::new(
            a.mul_add(self.p1.x - self.p0.x, b * (self.p2.x - self.p1.x)),
            a.mul_add(self.p1.y - self.p0.y, b * (self.p2.y - self.p1.y)),
        )
    }
}

// ---------------------------------------------------------------------------
// CubicSegment
// ---------------------------------------------------------------------------

/// Four control points of a cubic Bezier segment.
#[derive(Debug, Clone, Copy)]
pub struct CubicSegment {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicSegment {
    /// Create a new cubic segment from four control points.
    #[must_use]
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate the point at parameter `t` in [0, 1].
    #[allow(clippy::many_single_char_names, reason = "standard Bezier math names")]
    #[must_use]
    pub fn eval(&self, t: Scalar) -> Point {
        let s = 1.0 - t;
        let a = s * s * s;
        let b = 3.0 * s * s * t;
        let c = 3.0 * s * t * t;
        let d = t * t * t;
        Point::new(
            d.mul_add(
                self.p3.x,
                a.mul_add(self.p0.x, b.mul_add(self.p1.x, c * self.p2.x)),
            ),
            d.mul_add(
                self.p3.y,
                a.mul_add(self.p0.y, b.mul_add(self.p1.y, c * self.p2.y)),
            ),
        )
    }

    /// Evaluate the derivative (tangent vector) at parameter `t` in [0, 1].
    #[must_use]
    pub fn eval_deriv(&self, t: Scalar) -> Vec2 {
        let s = 1.0 - t;
        let a = 3.0 * s * s;
        let b = 6.0 * s * t;
        let c = 3.0 * t * t;
        Vec2::new(
            a.mul_add(
                self.p1.x - self.p0.x,
                b.mul_add(self.p2.x - self.p1.x, c * (self.p3.x - self.p2.x)),
            ),
            a.mul_add(
                self.p1.y - self.p0.y,
                b.mul_add(self.p2.y - self.p1.y, c * (self.p3.y - self.p2.y)),
            ),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const EPS: Scalar = 1e-12;

    #[test]
    fn quad_eval_endpoints() {
        let q = QuadSegment::new(
            Point::new(0.0, 0.0),
            Point::new(5.0, 10.0),
            Point::new(10.0, 0.0),
        );
        assert_eq!(q.eval(0.0), q.p0);
        assert_eq!(q.eval(1.0), q.p2);
    }

    #[test]
    fn quad_eval_midpoint() {
        // Symmetric parabola: apex at half the control height.
        let q = QuadSegment::new(
            Point::new(0.0, 0.0),
            Point::new(5.0, 10.0),
            Point::new(10.0, 0.0),
        );
        let m = q.eval(0.5);
        assert!((m.x - 5.0).abs() < EPS);
        assert!((m.y - 5.0).abs() < EPS);
    }

    #[test]
    fn quad_deriv_at_endpoints() {
        let q = QuadSegment::new(
            Point::new(0.0, 0.0),
            Point::new(2.0, 4.0),
            Point::new(6.0, 4.0),
        );
        // B'(0) = 2(p1 - p0), B'(1) = 2(p2 - p1)
        assert_eq!(q.eval_deriv(0.0), Vec2::new(4.0, 8.0));
        assert_eq!(q.eval_deriv(1.0), Vec2::new(8.0, 0.0));
    }

    #[test]
    fn cubic_eval_endpoints() {
        let c = CubicSegment::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 3.0),
            Point::new(4.0, 3.0),
            Point::new(5.0, 0.0),
        );
        assert_eq!(c.eval(0.0), c.p0);
        assert_eq!(c.eval(1.0), c.p3);
    }

    #[test]
    fn cubic_deriv_at_endpoints() {
        let c = CubicSegment::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 3.0),
            Point::new(4.0, 3.0),
            Point::new(5.0, 0.0),
        );
        // B'(0) = 3(p1 - p0), B'(1) = 3(p3 - p2)
        assert_eq!(c.eval_deriv(0.0), Vec2::new(3.0, 9.0));
        assert_eq!(c.eval_deriv(1.0), Vec2::new(3.0, -9.0));
    }

    #[test]
    fn collinear_cubic_stays_on_line() {
        let c = CubicSegment::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
        );
        for i in 0..=10 {
            let p = c.eval(Scalar::from(i) / 10.0);
            assert!((p.x - p.y).abs() < EPS, "off the diagonal at {p:?}");
        }
    }
}
