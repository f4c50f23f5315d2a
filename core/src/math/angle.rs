//! Angular quantities.

use core::fmt::{self, Debug, Display};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};

use crate::math::approx::ApproxEq;
use crate::math::float::{self, Float};
use crate::math::space::{Affine, Linear};

//
// Types
//

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getter methods to obtain the angle as a raw scalar value.
///
/// The value is stored in radians, in the floating-point type `Sc`.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle<Sc = f64>(Sc);

//
// Free fns and consts
//

/// Returns an angle of `a` radians.
pub const fn rads<Sc>(a: Sc) -> Angle<Sc> {
    Angle(a)
}

/// Returns an angle of `a` degrees.
pub fn degs<Sc: Float>(a: Sc) -> Angle<Sc> {
    Angle(a * (Sc::PI / Sc::lit(180.0)))
}

/// Returns an angle of `a` turns.
pub fn turns<Sc: Float>(a: Sc) -> Angle<Sc> {
    Angle(a * Sc::TAU)
}

/// Returns the arcsine of `x` as an `Angle`.
///
/// The return value is in the range [-90°, 90°], or NaN if `x` is
/// outside the range [-1.0, 1.0].
///
/// # Examples
/// ```
/// # use geoprim_core::assert_approx_eq;
/// # use geoprim_core::math::angle::*;
/// assert_approx_eq!(asin(1.0), degs(90.0));
/// assert_approx_eq!(asin(-1.0), degs(-90.0));
/// ```
pub fn asin<Sc: Float>(x: Sc) -> Angle<Sc> {
    Angle(x.asin())
}

/// Returns the arccosine of `x` as an `Angle`.
///
/// The return value is in the range [0°, 180°], or NaN if `x` is
/// outside the range [-1.0, 1.0].
///
/// # Examples
/// ```
/// # use geoprim_core::math::angle::*;
/// assert_eq!(acos(1.0), degs(0.0));
/// ```
pub fn acos<Sc: Float>(x: Sc) -> Angle<Sc> {
    Angle(x.acos())
}

/// Returns the four-quadrant arctangent of `y` and `x` as an `Angle`.
///
/// # Examples
/// ```
/// # use geoprim_core::assert_approx_eq;
/// # use geoprim_core::math::angle::*;
/// assert_eq!(atan2(0.0, 1.0), degs(0.0));
/// assert_approx_eq!(atan2(2.0, 2.0), degs(45.0));
/// assert_approx_eq!(atan2(3.0, 0.0), degs(90.0));
/// ```
pub fn atan2<Sc: Float>(y: Sc, x: Sc) -> Angle<Sc> {
    Angle(y.atan2(x))
}

//
// Inherent impls
//

impl<Sc: Float> Angle<Sc> {
    /// A zero degree angle.
    pub const ZERO: Self = Self(Sc::ZERO);
    /// A 360 degree angle.
    pub const FULL: Self = Self(Sc::TAU);
    /// A 180 degree angle.
    pub const STRAIGHT: Self = Self(Sc::PI);

    /// Returns a 90 degree angle.
    pub fn right() -> Self {
        Self(Sc::PI / Sc::lit(2.0))
    }

    /// Returns the value of `self` in radians.
    /// # Examples
    /// ```
    /// # use geoprim_core::assert_approx_eq;
    /// # use geoprim_core::math::degs;
    /// assert_approx_eq!(degs(180.0).to_rads(), core::f64::consts::PI);
    /// ```
    pub fn to_rads(self) -> Sc {
        self.0
    }
    /// Returns the value of `self` in degrees.
    /// # Examples
    /// ```
    /// # use geoprim_core::assert_approx_eq;
    /// # use geoprim_core::math::turns;
    /// assert_approx_eq!(turns(2.0).to_degs(), 720.0);
    /// ```
    pub fn to_degs(self) -> Sc {
        self.0 * (Sc::lit(180.0) / Sc::PI)
    }
    /// Returns the value of `self` in turns.
    /// # Examples
    /// ```
    /// # use geoprim_core::assert_approx_eq;
    /// # use geoprim_core::math::degs;
    /// assert_approx_eq!(degs(180.0).to_turns(), 0.5);
    /// ```
    pub fn to_turns(self) -> Sc {
        self.0 / Sc::TAU
    }

    /// Returns the minimum of `self` and `other`.
    pub fn min(self, other: Self) -> Self {
        Self(float::min(self.0, other.0))
    }
    /// Returns the maximum of `self` and `other`.
    pub fn max(self, other: Self) -> Self {
        Self(float::max(self.0, other.0))
    }
    /// Returns `self` clamped to the range `min..=max`.
    ///
    /// # Examples
    /// ```
    /// # use geoprim_core::math::angle::degs;
    /// let (min, max) = (degs(0.0), degs(45.0));
    ///
    /// assert_eq!(degs(100.0).clamp(min, max), max);
    ///
    /// assert_eq!(degs(30.0).clamp(min, max), degs(30.0));
    ///
    /// assert_eq!(degs(-10.0).clamp(min, max), min);
    /// ```
    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(float::clamp(self.0, min.0, max.0))
    }

    /// Returns the sine of `self`.
    /// # Examples
    /// ```
    /// # use geoprim_core::assert_approx_eq;
    /// # use geoprim_core::math::angle::*;
    /// assert_approx_eq!(degs(30.0).sin(), 0.5)
    /// ```
    pub fn sin(self) -> Sc {
        self.0.sin()
    }
    /// Returns the cosine of `self`.
    /// # Examples
    /// ```
    /// # use geoprim_core::assert_approx_eq;
    /// # use geoprim_core::math::angle::*;
    /// assert_approx_eq!(degs(60.0).cos(), 0.5)
    /// ```
    pub fn cos(self) -> Sc {
        self.0.cos()
    }
    /// Computes the sine and cosine of `self`.
    /// # Examples
    /// ```
    /// # use geoprim_core::assert_approx_eq;
    /// # use geoprim_core::math::angle::*;
    /// let (sin, cos) = degs(90.0).sin_cos();
    /// assert_approx_eq!(sin, 1.0);
    /// assert_approx_eq!(cos, 0.0);
    /// ```
    pub fn sin_cos(self) -> (Sc, Sc) {
        (self.sin(), self.cos())
    }
    /// Returns the tangent of `self`.
    /// # Examples
    /// ```
    /// # use geoprim_core::assert_approx_eq;
    /// # use geoprim_core::math::angle::*;
    /// assert_approx_eq!(degs(45.0).tan(), 1.0)
    /// ```
    pub fn tan(self) -> Sc {
        self.0.tan()
    }

    /// Returns `self` "wrapped around" to the range `min..max`.
    ///
    /// # Examples
    /// ```
    /// # use geoprim_core::assert_approx_eq;
    /// # use geoprim_core::math::angle::*;
    /// assert_approx_eq!(degs(400.0).wrap(Angle::ZERO, Angle::FULL), degs(40.0))
    /// ```
    #[must_use]
    pub fn wrap(self, min: Self, max: Self) -> Self {
        let range = max.0 - min.0;
        let r = (self.0 - min.0) % range;
        let r = if r < Sc::ZERO { r + range } else { r };
        Self(min.0 + r)
    }
}

//
// Local trait impls
//

impl<Sc: Float> ApproxEq for Angle<Sc> {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        self.0.approx_eq_eps(&other.0, &eps.0)
    }
    fn relative_epsilon() -> Self {
        Self(Sc::relative_epsilon())
    }
}

impl<Sc: Float> Affine for Angle<Sc> {
    type Space = ();
    type Diff = Self;
    const DIM: usize = 1;

    #[inline]
    fn add(&self, other: &Self) -> Self {
        *self + *other
    }
    #[inline]
    fn sub(&self, other: &Self) -> Self {
        *self - *other
    }
}

impl<Sc: Float> Linear for Angle<Sc> {
    type Scalar = Sc;

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }
    #[inline]
    fn neg(&self) -> Self {
        -*self
    }
    #[inline]
    fn mul(&self, scalar: Sc) -> Self {
        *self * scalar
    }
}

//
// Foreign trait impls
//

impl<Sc: Float + Display> Display for Angle<Sc> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (val, unit) = if f.alternate() {
            (self.to_rads() / Sc::PI, "𝜋 rad")
        } else {
            (self.to_degs(), "°")
        };
        Display::fmt(&val, f)?;
        f.write_str(unit)
    }
}

impl<Sc: Float + Display> Debug for Angle<Sc> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Angle(")?;
        Display::fmt(self, f)?;
        f.write_str(")")
    }
}

impl<Sc: Float> Add for Angle<Sc> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl<Sc: Float> Sub for Angle<Sc> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
impl<Sc: Float> AddAssign for Angle<Sc> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl<Sc: Float> SubAssign for Angle<Sc> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
impl<Sc: Float> Neg for Angle<Sc> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<Sc: Float> Mul<Sc> for Angle<Sc> {
    type Output = Self;
    fn mul(self, rhs: Sc) -> Self {
        Self(self.0 * rhs)
    }
}
impl<Sc: Float> Div<Sc> for Angle<Sc> {
    type Output = Self;
    fn div(self, rhs: Sc) -> Self {
        Self(self.0 / rhs)
    }
}
impl<Sc: Float> Rem for Angle<Sc> {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self(self.0 % rhs.0)
    }
}
