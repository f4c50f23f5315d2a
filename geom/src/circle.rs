//! Circles in the plane.

use re::math::{Angle, Point2, Vec2, float::Float, rotate2, splat, translate2};

use crate::rect::Rectangle;

/// A circle with a center point and a radius.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Circle<Sc = f64> {
    pub center: Point2<Sc>,
    pub radius: Sc,
}

/// Circle with `f64` coordinates.
pub type Circle2d = Circle<f64>;
/// Circle with `f32` coordinates.
pub type Circle2f = Circle<f32>;

impl<Sc: Float> Circle<Sc> {
    /// Returns a new circle.
    pub const fn new(center: Point2<Sc>, radius: Sc) -> Self {
        Self { center, radius }
    }

    /// Returns the area of `self`.
    pub fn area(&self) -> Sc {
        Sc::PI * self.radius * self.radius
    }

    /// Returns whether `p` lies inside or on the boundary of `self`.
    pub fn contains(&self, p: &Point2<Sc>) -> bool {
        self.center.distance_sqr(p) <= self.radius * self.radius
    }

    /// Returns whether `self` and `other` overlap or touch.
    pub fn intersects(&self, other: &Self) -> bool {
        let r = self.radius + other.radius;
        self.center.distance_sqr(&other.center) <= r * r
    }

    /// Returns `self` translated by `v`.
    #[must_use]
    pub fn translate(&self, v: Vec2<Sc>) -> Self {
        Self::new(self.center + v, self.radius)
    }

    /// Returns `self` rotated counter-clockwise by `angle` about `pivot`.
    ///
    /// Only the center moves; rotating about the center is a no-op.
    #[must_use]
    pub fn rotate(&self, angle: Angle<Sc>, pivot: &Point2<Sc>) -> Self {
        let p = pivot.to_vec();
        let m = translate2(p) * rotate2(angle) * translate2(-p);
        Self::new(m.apply(&self.center), self.radius)
    }

    /// Returns the axis-aligned bounding rectangle of `self`.
    pub fn bounds(&self) -> Rectangle<Sc> {
        let r: Vec2<Sc> = splat(self.radius);
        Rectangle::from_corners(self.center - r, self.center + r)
    }
}
