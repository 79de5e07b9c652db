//! Integer extents tracking over a stream of points.
//!
//! One [`Extents`] instance accumulates per glyph (reset before each
//! glyph), another per line of text (reset once, merged from the glyph
//! boxes). The emitted dimension records carry these bounds as integers.

use crate::types::Point;

/// Sentinel magnitude for freshly reset bounds; exceeds any plausible
/// font-unit coordinate.
const BIG: i64 = 2_000_000_000;

/// Axis-aligned integer bounding box in output font units.
///
/// After a reset the min fields hold `+BIG` and the max fields `-BIG`,
/// so the first merged point claims all four bounds. Bounds only ever
/// widen between resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extents {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Extents {
    /// An empty (inverted) box.
    pub const EMPTY: Self = Self {
        min_x: BIG,
        max_x: -BIG,
        min_y: BIG,
        max_y: -BIG,
    };

    /// Reset to the empty (inverted) state.
    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }

    /// Widen the bounds to include `p`.
    ///
    /// Coordinates are truncated toward zero; the record format carries
    /// integer metric values.
    #[allow(clippy::cast_possible_truncation, reason = "truncation is the metric contract")]
    pub fn add_point(&mut self, p: Point) {
        let (x, y) = (p.x as i64, p.y as i64);
        if x > self.max_x {
            self.max_x = x;
        }
        if y > self.max_y {
            self.max_y = y;
        }
        if x < self.min_x {
            self.min_x = x;
        }
        if y < self.min_y {
            self.min_y = y;
        }
    }

    /// Widen `self` to include all of `other`.
    ///
    /// Merging an empty box is a no-op; the sentinels compare away.
    pub fn add_extents(&mut self, other: &Self) {
        if other.max_x > self.max_x {
            self.max_x = other.max_x;
        }
        if other.max_y > self.max_y {
            self.max_y = other.max_y;
        }
        if other.min_x < self.min_x {
            self.min_x = other.min_x;
        }
        if other.min_y < self.min_y {
            self.min_y = other.min_y;
        }
    }
}

impl Default for Extents {
    fn default() -> Self {
        Self::EMPTY
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_point_claims_all_bounds() {
        let mut e = Extents::EMPTY;
        e.add_point(Point::new(12.0, -7.0));
        assert_eq!(
            e,
            Extents {
                min_x: 12,
                max_x: 12,
                min_y: -7,
                max_y: -7
            }
        );
    }

    #[test]
    fn bounds_are_monotonic() {
        let mut e = Extents::EMPTY;
        let points = [
            Point::new(5.0, 5.0),
            Point::new(-3.0, 8.0),
            Point::new(4.0, 4.0),
            Point::new(10.0, -2.0),
        ];
        let mut prev_span = (0i64, 0i64);
        for p in points {
            e.add_point(p);
            let span = (e.max_x - e.min_x, e.max_y - e.min_y);
            assert!(span.0 >= prev_span.0, "x span shrank at {p:?}");
            assert!(span.1 >= prev_span.1, "y span shrank at {p:?}");
            prev_span = span;
        }
        assert_eq!(
            e,
            Extents {
                min_x: -3,
                max_x: 10,
                min_y: -2,
                max_y: 8
            }
        );
    }

    #[test]
    fn reset_restores_sentinels() {
        let mut e = Extents::EMPTY;
        e.add_point(Point::new(1.0, 1.0));
        e.reset();
        assert_eq!(e, Extents::EMPTY);
    }

    #[test]
    fn truncates_toward_zero() {
        let mut e = Extents::EMPTY;
        e.add_point(Point::new(3.9, -3.9));
        assert_eq!(e.max_x, 3);
        assert_eq!(e.min_y, -3);
    }

    #[test]
    fn merge_is_associative() {
        let from_points = |pts: &[Point]| {
            let mut e = Extents::EMPTY;
            for &p in pts {
                e.add_point(p);
            }
            e
        };
        let a = from_points(&[Point::new(0.0, 0.0), Point::new(2.0, 2.0)]);
        let b = from_points(&[Point::new(-5.0, 1.0)]);
        let c = from_points(&[Point::new(3.0, -4.0), Point::new(1.0, 9.0)]);

        let mut left = a;
        left.add_extents(&b);
        left.add_extents(&c);

        let mut right = b;
        right.add_extents(&c);
        let mut outer = a;
        outer.add_extents(&right);

        let direct = from_points(&[
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(-5.0, 1.0),
            Point::new(3.0, -4.0),
            Point::new(1.0, 9.0),
        ]);

        assert_eq!(left, outer);
        assert_eq!(left, direct);
    }

    #[test]
    fn merging_empty_is_noop() {
        let mut e = Extents::EMPTY;
        e.add_point(Point::new(1.0, 2.0));
        let before = e;
        e.add_extents(&Extents::EMPTY);
        assert_eq!(e, before);
    }
}
