//! Rectangles defined by their four corners.

use re::math::{
    Angle, Point2, Vec2,
    float::{Float, Scalar},
    pt2, rotate2, translate2,
};
use re::{Error, Result};

/// A rectangle in the plane, defined by its four corners in
/// counter-clockwise order.
///
/// Rectangles built by [`from_corners`][Self::from_corners] or
/// [`from_points`][Self::from_points] are axis-aligned, with `a` at the
/// minimum and `c` at the maximum corner. [Rotating][Self::rotate] a
/// rectangle keeps it a rectangle but not axis-aligned; the bounding-box
/// operations then use its axis-aligned bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rectangle<Sc = f64> {
    pub a: Point2<Sc>,
    pub b: Point2<Sc>,
    pub c: Point2<Sc>,
    pub d: Point2<Sc>,
}

/// Rectangle with `f64` coordinates.
pub type Rect2d = Rectangle<f64>;
/// Rectangle with `f32` coordinates.
pub type Rect2f = Rectangle<f32>;
/// Rectangle with `i32` coordinates.
pub type Rect2i = Rectangle<i32>;

impl<Sc: Scalar> Rectangle<Sc> {
    /// Returns the axis-aligned rectangle with `p` and `q` as opposite
    /// corners.
    ///
    /// The corners may be given in any order; the result always has its
    /// corners at `(min, min)`, `(max, min)`, `(max, max)` and `(min, max)`.
    ///
    /// # Examples
    /// ```
    /// use geoprim_geom::rect::Rectangle;
    /// use re::math::pt2;
    ///
    /// let r = Rectangle::from_corners(pt2(3, -1), pt2(-2, 4));
    /// assert_eq!(r.a, pt2(-2, -1));
    /// assert_eq!(r.c, pt2(3, 4));
    /// ```
    pub fn from_corners(p: Point2<Sc>, q: Point2<Sc>) -> Self {
        let (lo, hi) = (p.min(&q), p.max(&q));
        Self {
            a: lo,
            b: pt2(hi.x(), lo.y()),
            c: hi,
            d: pt2(lo.x(), hi.y()),
        }
    }

    /// Returns the axis-aligned bounding rectangle of `pts`.
    ///
    /// # Errors
    /// If `pts` has fewer than two points.
    pub fn from_points(pts: &[Point2<Sc>]) -> Result<Self> {
        if pts.len() < 2 {
            return Err(Error::TooFewPoints {
                expected: 2,
                actual: pts.len(),
            });
        }
        let lo = Point2::<Sc>::min_of(pts.iter().copied());
        let hi = Point2::<Sc>::max_of(pts.iter().copied());
        Ok(Self::from_corners(lo, hi))
    }

    /// Returns the corners of `self` in counter-clockwise order.
    pub fn corners(&self) -> [Point2<Sc>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Returns the minimum corner of the axis-aligned bounds of `self`.
    pub fn min(&self) -> Point2<Sc> {
        Point2::<Sc>::min_of(self.corners())
    }

    /// Returns the maximum corner of the axis-aligned bounds of `self`.
    pub fn max(&self) -> Point2<Sc> {
        Point2::<Sc>::max_of(self.corners())
    }

    /// Returns the width of the axis-aligned bounds of `self`.
    pub fn width(&self) -> Sc {
        self.max().x() - self.min().x()
    }

    /// Returns the height of the axis-aligned bounds of `self`.
    pub fn height(&self) -> Sc {
        self.max().y() - self.min().y()
    }

    /// Returns the center of `self`, the midpoint of its diagonal.
    ///
    /// Integer rectangles round the center toward zero.
    pub fn center(&self) -> Point2<Sc> {
        self.a.midpoint(&self.c)
    }

    /// Returns the area of `self`.
    pub fn area(&self) -> Sc {
        // Shoelace formula relative to `a`, so that integer coordinates
        // far from the origin do not overflow
        let [b, c, d] = [self.b - self.a, self.c - self.a, self.d - self.a];
        let twice = b.perp_dot(&c) + c.perp_dot(&d);
        (twice / Sc::from_count(2)).abs()
    }

    /// Returns whether `p` lies inside or on the boundary of `self`.
    pub fn contains(&self, p: &Point2<Sc>) -> bool {
        let [a, b, c, d] = self.corners();
        let sides = [(a, b), (b, c), (c, d), (d, a)]
            .map(|(s, e)| (e - s).perp_dot(&(*p - s)));
        sides.iter().all(|&s| s >= Sc::ZERO)
            || sides.iter().all(|&s| s <= Sc::ZERO)
    }

    /// Returns whether the axis-aligned bounds of `self` and `other`
    /// overlap. Rectangles that only share an edge or a corner intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        let lo = self.min().max(&other.min());
        let hi = self.max().min(&other.max());
        lo.x() <= hi.x() && lo.y() <= hi.y()
    }

    /// Returns the overlap of the axis-aligned bounds of `self` and
    /// `other`, or `None` if they do not intersect.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        self.intersects(other).then(|| {
            let lo = self.min().max(&other.min());
            let hi = self.max().min(&other.max());
            Self::from_corners(lo, hi)
        })
    }

    /// Returns `self` translated by `v`.
    #[must_use]
    pub fn translate(&self, v: Vec2<Sc>) -> Self {
        let [a, b, c, d] = self.corners().map(|p| p + v);
        Self { a, b, c, d }
    }
}

impl<Sc: Float> Rectangle<Sc> {
    /// Returns `self` rotated counter-clockwise by `angle` about its center.
    #[must_use]
    pub fn rotate(&self, angle: Angle<Sc>) -> Self {
        let c = self.center().to_vec();
        let m = translate2(c) * rotate2(angle) * translate2(-c);
        let [a, b, c, d] = self.corners().map(|p| m.apply(&p));
        Self { a, b, c, d }
    }
}

#[cfg(test)]
mod tests {
    use re::assert_approx_eq;
    use re::math::{degs, vec2};

    use super::*;

    #[test]
    fn from_corners_normalizes() {
        let expected = Rect2d {
            a: pt2(-1.0, -2.0),
            b: pt2(3.0, -2.0),
            c: pt2(3.0, 4.0),
            d: pt2(-1.0, 4.0),
        };
        let (p, q) = (pt2(-1.0, -2.0), pt2(3.0, 4.0));
        assert_eq!(Rectangle::from_corners(p, q), expected);
        assert_eq!(Rectangle::from_corners(q, p), expected);
        assert_eq!(
            Rectangle::from_corners(pt2(-1.0, 4.0), pt2(3.0, -2.0)),
            expected
        );
    }

    #[test]
    fn from_points_bounds() {
        let pts = [pt2(1, 5), pt2(-3, 2), pt2(4, -1), pt2(0, 0)];
        let r = Rect2i::from_points(&pts).unwrap();
        assert_eq!(r.min(), pt2(-3, -1));
        assert_eq!(r.max(), pt2(4, 5));
        assert_eq!(r.width(), 7);
        assert_eq!(r.height(), 6);
        assert_eq!(r.area(), 42);
    }

    #[test]
    fn area_far_from_origin() {
        let r: Rect2i =
            Rectangle::from_corners(pt2(50_000, 50_000), pt2(50_001, 50_001));
        assert_eq!(r.area(), 1);
        let r: Rect2i = Rectangle::from_corners(
            pt2(i32::MAX - 3, i32::MIN),
            pt2(i32::MAX, i32::MIN + 2),
        );
        assert_eq!(r.area(), 6);
    }

    #[test]
    fn from_points_too_few() {
        let res = Rect2f::from_points(&[pt2(1.0, 1.0)]);
        assert!(matches!(
            res,
            Err(Error::TooFewPoints { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn contains_is_inclusive() {
        let r = Rectangle::from_corners(pt2(0, 0), pt2(4, 2));
        assert!(r.contains(&pt2(2, 1)));
        assert!(r.contains(&pt2(0, 0)));
        assert!(r.contains(&pt2(4, 1)));
        assert!(!r.contains(&pt2(5, 1)));
        assert!(!r.contains(&pt2(2, -1)));
    }

    #[test]
    fn intersection_of_overlapping() {
        let r = Rectangle::from_corners(pt2(0.0, 0.0), pt2(4.0, 4.0));
        let s = Rectangle::from_corners(pt2(2.0, -1.0), pt2(6.0, 3.0));
        assert!(r.intersects(&s));
        assert_eq!(
            r.intersection(&s),
            Some(Rectangle::from_corners(pt2(2.0, 0.0), pt2(4.0, 3.0)))
        );
    }

    #[test]
    fn touching_rectangles_intersect() {
        let r = Rectangle::from_corners(pt2(0, 0), pt2(1, 1));
        let s = Rectangle::from_corners(pt2(1, 1), pt2(2, 2));
        assert_eq!(r.intersection(&s).map(|i| i.area()), Some(0));
    }

    #[test]
    fn disjoint_rectangles() {
        let r = Rectangle::from_corners(pt2(0, 0), pt2(1, 1));
        let s = Rectangle::from_corners(pt2(2, 0), pt2(3, 1));
        assert!(!r.intersects(&s));
        assert_eq!(r.intersection(&s), None);
    }

    #[test]
    fn translate_moves_all_corners() {
        let r = Rectangle::from_corners(pt2(0, 0), pt2(2, 1));
        let t = r.translate(vec2(3, -1));
        assert_eq!(t, Rectangle::from_corners(pt2(3, -1), pt2(5, 0)));
    }

    #[test]
    fn rotate_about_center() {
        let r = Rectangle::from_corners(pt2(-2.0, -1.0), pt2(2.0, 1.0));
        let rot = r.rotate(degs(90.0));

        assert_approx_eq!(rot.center(), r.center());
        assert_approx_eq!(rot.a, pt2(1.0, -2.0));
        assert_approx_eq!(rot.c, pt2(-1.0, 2.0));
        assert_approx_eq!(rot.width(), 2.0);
        assert_approx_eq!(rot.height(), 4.0);
        assert_approx_eq!(rot.area(), 8.0);
        assert!(rot.contains(&pt2(0.0, 1.5)));
        assert!(!rot.contains(&pt2(1.5, 0.0)));
    }

    #[test]
    fn center_of_int_rectangle_truncates() {
        let r = Rectangle::from_corners(pt2(0, 0), pt2(3, 3));
        assert_eq!(r.center(), pt2(1, 1));
    }
}
