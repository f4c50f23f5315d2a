//! Line segments in the plane.

use re::math::{
    Angle, ApproxEq, Point2, Vec2,
    float::{self, Float},
    rotate2, translate2,
};

/// A line segment between two points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineSegment<Sc = f64> {
    pub start: Point2<Sc>,
    pub end: Point2<Sc>,
}

/// Line segment with `f64` coordinates.
pub type LineSegment2d = LineSegment<f64>;
/// Line segment with `f32` coordinates.
pub type LineSegment2f = LineSegment<f32>;

impl<Sc: Float> LineSegment<Sc> {
    /// Returns a new line segment from `start` to `end`.
    pub const fn new(start: Point2<Sc>, end: Point2<Sc>) -> Self {
        Self { start, end }
    }

    /// Returns the vector from `start` to `end`.
    pub fn dir(&self) -> Vec2<Sc> {
        self.end - self.start
    }

    /// Returns the length of `self`.
    pub fn len(&self) -> Sc {
        self.start.distance(&self.end)
    }

    /// Returns the point at parameter `t`, where `start` is at 0 and `end`
    /// at 1. Values outside [0, 1] extrapolate along the line.
    pub fn point_at(&self, t: Sc) -> Point2<Sc> {
        self.start + self.dir() * t
    }

    /// Returns the point on `self` closest to `p`.
    ///
    /// A degenerate segment returns its single point.
    pub fn closest_point(&self, p: &Point2<Sc>) -> Point2<Sc> {
        let d = self.dir();
        let len_sqr = d.len_sqr();
        if len_sqr == Sc::ZERO {
            return self.start;
        }
        let t = (*p - self.start).dot(&d) / len_sqr;
        self.point_at(float::saturate(t))
    }

    /// Returns whether `p` lies on `self`, within the default tolerance.
    pub fn contains(&self, p: &Point2<Sc>) -> bool {
        self.closest_point(p).approx_eq(p)
    }

    /// Returns the intersection point of `self` and `other`, if any.
    ///
    /// If the segments are collinear and overlap, returns the point of the
    /// overlap closest to `self.start`.
    ///
    /// # Examples
    /// ```
    /// use geoprim_geom::segment::LineSegment;
    /// use re::math::pt2;
    ///
    /// //   D   B
    /// //    \ /
    /// //     X
    /// //    / \
    /// //   A   C
    /// let ab = LineSegment::new(pt2(0.0, 0.0), pt2(1.0, 1.0));
    /// let cd = LineSegment::new(pt2(1.0, 0.0), pt2(0.0, 1.0));
    /// assert_eq!(ab.intersection(&cd), Some(pt2(0.5, 0.5)));
    /// ```
    pub fn intersection(&self, other: &Self) -> Option<Point2<Sc>> {
        let (r, s) = (self.dir(), other.dir());
        let qp = other.start - self.start;
        let denom = r.perp_dot(&s);

        if denom.approx_eq(&Sc::ZERO) {
            if !qp.perp_dot(&r).approx_eq(&Sc::ZERO) {
                // Parallel, disjoint
                return None;
            }
            // Collinear
            let rr = r.len_sqr();
            if rr == Sc::ZERO {
                return other.contains(&self.start).then_some(self.start);
            }
            let t0 = qp.dot(&r) / rr;
            let t1 = (other.end - self.start).dot(&r) / rr;
            let lo = float::max(Sc::ZERO, float::min(t0, t1));
            let hi = float::min(Sc::ONE, float::max(t0, t1));
            return (lo <= hi).then(|| self.point_at(lo));
        }

        let t = qp.perp_dot(&s) / denom;
        let u = qp.perp_dot(&r) / denom;
        let unit = Sc::ZERO..=Sc::ONE;
        (unit.contains(&t) && unit.contains(&u)).then(|| self.point_at(t))
    }

    /// Returns `self` translated by `v`.
    #[must_use]
    pub fn translate(&self, v: Vec2<Sc>) -> Self {
        Self::new(self.start + v, self.end + v)
    }

    /// Returns `self` rotated counter-clockwise by `angle` about its
    /// midpoint.
    #[must_use]
    pub fn rotate(&self, angle: Angle<Sc>) -> Self {
        let c = self.start.midpoint(&self.end).to_vec();
        let m = translate2(c) * rotate2(angle) * translate2(-c);
        Self::new(m.apply(&self.start), m.apply(&self.end))
    }
}
