//! Basic geometric primitives.

use crate::math::{
    Affine, Linear, Point, Point2, Point3,
    float::{Float, Scalar},
};

/// A ray, or a half line, composed of an initial point and a direction vector.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Ray<T: Affine>(pub T, pub T::Diff);

/// Ray in two-dimensional space.
pub type Ray2<Sc = f64, B = ()> = Ray<Point2<Sc, B>>;

/// Ray in three-dimensional space.
pub type Ray3<Sc = f64, B = ()> = Ray<Point3<Sc, B>>;

impl<Sc: Scalar, Sp, const N: usize> Ray<Point<[Sc; N], Sp>> {
    /// Returns the point at parameter `t` along `self`, that is,
    /// `origin + t * direction`.
    ///
    /// Negative values of `t` yield points behind the origin.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::geom::Ray;
    /// use geoprim_core::math::{pt3, vec3};
    ///
    /// let r = Ray(pt3(1.0, 0.0, 0.0), vec3(0.0, 2.0, 0.0));
    /// assert_eq!(r.point_at(1.5), pt3(1.0, 3.0, 0.0));
    /// ```
    pub fn point_at(&self, t: Sc) -> Point<[Sc; N], Sp> {
        self.0.add(&self.1.mul(t))
    }

    /// Returns the origin of `self`.
    pub fn origin(&self) -> Point<[Sc; N], Sp> {
        self.0
    }
}

impl<Sc: Float, Sp, const N: usize> Ray<Point<[Sc; N], Sp>> {
    /// Returns `self` with its direction normalized to unit length.
    pub fn normalize(&self) -> Self {
        Ray(self.0, self.1.normalize())
    }
}
