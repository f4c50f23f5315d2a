//! Linear algebra and other useful mathematics.
//!
//! Includes [vectors][self::vec], [points][point], [matrices][mat],
//! [angles][angle], [direction sampling][sample] and
//! [pseudo-random numbers][rand], as well as utilities such as approximate
//! equality comparisons and linear interpolation.
//!
//! Every geometric type is generic over its component [scalar][float::Scalar]
//! type: `f64`, `f32` or `i32`. Vectors and points are additionally tagged
//! with the *space* they're embedded in, and values in different spaces
//! cannot be mixed without explicit conversion. Matrices, similarly, are
//! tagged by both source and destination space, and can only be applied to
//! matching vectors and points.

pub use {
    angle::{Angle, acos, asin, atan2, degs, rads, turns},
    approx::ApproxEq,
    float::{Float, Scalar},
    mat::{
        Mat3, Mat3d, Mat3f, Mat4, Mat4d, Mat4f, Matrix, RealToReal, look_at,
        perspective, rotate, rotate_x, rotate_y, rotate_z, rotate2, scale2,
        scale3, translate2, translate3,
    },
    point::{
        Point, Point2, Point2d, Point2f, Point2i, Point3, Point3d, Point3f,
        pt2, pt3,
    },
    rand::Distrib,
    space::{Affine, Linear},
    vec::{
        Vec2, Vec2d, Vec2f, Vec2i, Vec3, Vec3d, Vec3f, Vector, splat, vec2,
        vec3,
    },
};

pub mod angle;
pub mod approx;
pub mod float;
pub mod mat;
pub mod point;
pub mod rand;
pub mod sample;
pub mod space;
pub mod vec;

/// Trait for linear interpolation between two values.
pub trait Lerp<Sc = f64>: Sized {
    /// Linearly interpolates between `self` and `other`.
    ///
    /// if `t` = 0, returns `self`; if `t` = 1, returns `other`.
    /// For 0 < `t` < 1, returns the weighted average of `self` and `other`
    /// ```text
    /// (1 - t) * self + t * other
    /// ```
    /// If `t < 0.0` or `t > 1.0`, returns the appropriate extrapolated value.
    /// If `t` is NaN, the result is unspecified.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::{Lerp, Point2, Vec2, pt2, vec2};
    ///
    /// assert_eq!(2.0.lerp(&5.0, 0.25), 2.75);
    ///
    /// let v0: Vec2 = vec2(-2.0, 1.0);
    /// assert_eq!(v0.lerp(&vec2(2.0, -1.0), 0.75), vec2(1.0, -0.5));
    ///
    /// let p0: Point2 = pt2(-10.0, 5.0);
    /// assert_eq!(p0.lerp(&pt2(-5.0, 0.0), 0.4), pt2(-8.0, 3.0));
    /// ```
    fn lerp(&self, other: &Self, t: Sc) -> Self;

    /// Returns the (unweighted) average of `self` and `other`.
    fn midpoint(&self, other: &Self) -> Self;
}

/// Linearly interpolates between two values.
///
/// For examples and more information, see [`Lerp::lerp`].
#[inline]
pub fn lerp<T: Lerp<Sc>, Sc>(t: Sc, from: T, to: T) -> T {
    from.lerp(&to, t)
}

/// Returns the relative position of `t` between `min` and `max`.
///
/// That is, returns 0 when `t` = `min`, 1 when `t` = `max`, and linearly
/// interpolates in between.
///
/// The result is unspecified if any of the parameters is non-finite, or if
/// `min` = `max`.
///
/// # Examples
/// ```
/// use geoprim_core::math::inv_lerp;
///
/// // Two is one fourth of the way from one to five
/// assert_eq!(inv_lerp(2.0, 1.0, 5.0), 0.25);
///
/// // Zero is halfway between -2 and 2
/// assert_eq!(inv_lerp(0.0, -2.0, 2.0), 0.5);
/// ```
#[inline]
pub fn inv_lerp<Sc: Float>(t: Sc, min: Sc, max: Sc) -> Sc {
    (t - min) / (max - min)
}

impl<T, Sc> Lerp<Sc> for T
where
    T: Affine<Diff: Linear<Scalar = Sc>>,
    Sc: Float,
{
    /// Linearly interpolates between `self` and `other`, computed as
    /// ```text
    /// self + t * (other - self)
    /// ```
    fn lerp(&self, other: &Self, t: Sc) -> Self {
        self.add(&other.sub(self).mul(t))
    }

    fn midpoint(&self, other: &Self) -> Self {
        self.lerp(other, Sc::lit(0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_scalars() {
        assert_eq!(2.0.lerp(&5.0, 0.0), 2.0);
        assert_eq!(2.0.lerp(&5.0, 0.75), 4.25);
        assert_eq!(2.0.lerp(&5.0, 1.0), 5.0);
        assert_eq!(2.0f32.lerp(&4.0, 1.5), 5.0);
    }

    #[test]
    fn lerp_fn_extrapolates() {
        let v: Vec3 = lerp(-1.0, vec3(0.0, 1.0, 2.0), vec3(1.0, 1.0, 0.0));
        assert_eq!(v, vec3(-1.0, 1.0, 4.0));
    }

    #[test]
    fn vector_midpoint() {
        let v: Vec2f = vec2(1.0, -2.0);
        assert_eq!(v.midpoint(&vec2(3.0, 2.0)), vec2(2.0, 0.0));
    }

    #[test]
    fn inv_lerp_inverts_lerp() {
        let t = inv_lerp(3.5, 2.0, 8.0);
        assert_eq!(t, 0.25);
        assert_eq!(2.0.lerp(&8.0, t), 3.5);
    }
}
