//! Scalar types and floating-point compatibility API.
//!
//! Every geometry type in this crate is generic over its component type,
//! which must implement [`Scalar`]. The floating-point widths additionally
//! implement [`Float`], which provides square roots, trigonometry, and the
//! per-width tolerance constants used by the vector and matrix code.
//!
//! Floating-point functions are unavailable in `core`. They are provided
//! by the `num-traits` crate, backed either by `std` or by `libm`,
//! depending on which feature is enabled.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub,
    SubAssign,
};

use num_traits::float::Float as Fp;

use crate::math::approx::ApproxEq;

/// Trait for the component types of vectors, points, and matrices.
///
/// Implemented for `f64`, `f32`, and `i32`.
pub trait Scalar:
    Copy
    + Default
    + Debug
    + PartialEq
    + PartialOrd
    + ApproxEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// The bit pattern of a value, used for hashing and interning.
    type Bits: Copy + Eq + Hash + Debug;

    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
    /// The least finite value of `Self`.
    const MIN: Self;
    /// The greatest finite value of `Self`.
    const MAX: Self;

    /// Returns `n` converted to `Self`.
    fn from_count(n: usize) -> Self;
    /// Returns the absolute value of `self`.
    fn abs(self) -> Self;
    /// Returns whether `self` is NaN. Always false for integers.
    fn is_nan(self) -> bool;
    /// Returns whether `self` is infinite. Always false for integers.
    fn is_infinite(self) -> bool;
    /// Returns the raw bit pattern of `self`.
    fn bits(self) -> Self::Bits;
}

/// Trait for floating-point scalars.
pub trait Float: Scalar {
    /// The difference between 1.0 and the next larger representable value.
    const EPSILON: Self;
    /// The lower bound of the length of a vector considered unit length.
    ///
    /// Equal to 1.0 stepped down by three ULPs.
    const UNIT_LEN_MIN: Self;
    /// The upper bound of the length of a vector considered unit length.
    ///
    /// Equal to 1.0 stepped up by one ULP.
    const UNIT_LEN_MAX: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Archimedes' constant, π.
    const PI: Self;
    /// The full circle constant, τ = 2π.
    const TAU: Self;

    /// Returns the `f64` literal `x` converted to `Self`.
    fn lit(x: f64) -> Self;

    fn sqrt(self) -> Self;
    fn recip(self) -> Self;
    fn powf(self, exp: Self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, x: Self) -> Self;

    /// Returns whether `self` is neither infinite nor NaN.
    fn is_finite(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Returns the least value greater than `self`.
    ///
    /// Returns `self` if it is NaN or positive infinity.
    fn ulp_up(self) -> Self;

    /// Returns the greatest value less than `self`.
    ///
    /// Returns `self` if it is NaN or negative infinity.
    fn ulp_down(self) -> Self {
        -(-self).ulp_up()
    }
}

//
// Free fns
//

/// Returns `x` stepped up by `n` units in the last place.
///
/// # Examples
/// ```
/// use geoprim_core::math::float::next_up;
///
/// assert_eq!(next_up(1.0f64, 1), 1.0 + f64::EPSILON);
/// assert_eq!(next_up(1.0f32, 0), 1.0);
/// ```
pub fn next_up<Sc: Float>(x: Sc, n: u32) -> Sc {
    (0..n).fold(x, |x, _| x.ulp_up())
}

/// Returns `x` stepped down by `n` units in the last place.
///
/// # Examples
/// ```
/// use geoprim_core::math::float::next_down;
///
/// assert_eq!(next_down(1.0f64, 2), 1.0 - f64::EPSILON);
/// ```
pub fn next_down<Sc: Float>(x: Sc, n: u32) -> Sc {
    (0..n).fold(x, |x, _| x.ulp_down())
}

/// Returns the lesser of `a` and `b`, or NaN if either is NaN.
#[inline]
pub fn min<Sc: Scalar>(a: Sc, b: Sc) -> Sc {
    if a.is_nan() || b.is_nan() {
        a + b
    } else if b < a {
        b
    } else {
        a
    }
}

/// Returns the greater of `a` and `b`, or NaN if either is NaN.
#[inline]
pub fn max<Sc: Scalar>(a: Sc, b: Sc) -> Sc {
    if a.is_nan() || b.is_nan() {
        a + b
    } else if b > a {
        b
    } else {
        a
    }
}

/// Returns the least of `vals`, or [`Scalar::MAX`] if `vals` is empty.
///
/// # Examples
/// ```
/// use geoprim_core::math::float::min_of;
///
/// assert_eq!(min_of([3, -1, 2]), -1);
/// assert_eq!(min_of::<f32>([]), f32::MAX);
/// ```
pub fn min_of<Sc: Scalar>(vals: impl IntoIterator<Item = Sc>) -> Sc {
    vals.into_iter().fold(Sc::MAX, min)
}

/// Returns the greatest of `vals`, or [`Scalar::MIN`] if `vals` is empty.
pub fn max_of<Sc: Scalar>(vals: impl IntoIterator<Item = Sc>) -> Sc {
    vals.into_iter().fold(Sc::MIN, max)
}

/// Returns `x` clamped to the range `lo..=hi`.
#[inline]
pub fn clamp<Sc: Scalar>(x: Sc, lo: Sc, hi: Sc) -> Sc {
    min(max(x, lo), hi)
}

/// Returns `x` clamped to the range `0..=1`.
#[inline]
pub fn saturate<Sc: Scalar>(x: Sc) -> Sc {
    clamp(x, Sc::ZERO, Sc::ONE)
}

//
// Impls
//

macro_rules! impl_float {
    ($t:ident, $bits:ty, $one:literal, $unit_min:literal, $unit_max:literal) => {
        impl Scalar for $t {
            type Bits = $bits;

            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const MIN: Self = $t::MIN;
            const MAX: Self = $t::MAX;

            #[inline]
            fn from_count(n: usize) -> Self {
                n as $t
            }
            #[inline]
            fn abs(self) -> Self {
                Fp::abs(self)
            }
            #[inline]
            fn is_nan(self) -> bool {
                $t::is_nan(self)
            }
            #[inline]
            fn is_infinite(self) -> bool {
                self == $t::INFINITY || self == $t::NEG_INFINITY
            }
            #[inline]
            fn bits(self) -> Self::Bits {
                self.to_bits()
            }
        }

        impl Float for $t {
            const EPSILON: Self = $t::EPSILON;
            const UNIT_LEN_MIN: Self = $t::from_bits($unit_min);
            const UNIT_LEN_MAX: Self = $t::from_bits($unit_max);
            const INFINITY: Self = $t::INFINITY;
            const PI: Self = core::$t::consts::PI;
            const TAU: Self = core::$t::consts::TAU;

            #[inline]
            fn lit(x: f64) -> Self {
                x as $t
            }
            #[inline]
            fn sqrt(self) -> Self {
                Fp::sqrt(self)
            }
            #[inline]
            fn recip(self) -> Self {
                1.0 / self
            }
            #[inline]
            fn powf(self, exp: Self) -> Self {
                Fp::powf(self, exp)
            }
            #[inline]
            fn sin(self) -> Self {
                Fp::sin(self)
            }
            #[inline]
            fn cos(self) -> Self {
                Fp::cos(self)
            }
            #[inline]
            fn tan(self) -> Self {
                Fp::tan(self)
            }
            #[inline]
            fn asin(self) -> Self {
                Fp::asin(self)
            }
            #[inline]
            fn acos(self) -> Self {
                Fp::acos(self)
            }
            #[inline]
            fn atan2(self, x: Self) -> Self {
                Fp::atan2(self, x)
            }

            fn ulp_up(self) -> Self {
                if $t::is_nan(self) || self == $t::INFINITY {
                    self
                } else if self == 0.0 {
                    // Smallest positive subnormal
                    $t::from_bits(1)
                } else if self > 0.0 {
                    $t::from_bits(self.to_bits() + 1)
                } else {
                    $t::from_bits(self.to_bits() - 1)
                }
            }
        }

        const _: () = assert!($t::from_bits($one) == 1.0);
    };
}

impl_float!(
    f64,
    u64,
    0x3FF0_0000_0000_0000,
    0x3FEF_FFFF_FFFF_FFFD,
    0x3FF0_0000_0000_0001
);
impl_float!(f32, u32, 0x3F80_0000, 0x3F7F_FFFD, 0x3F80_0001);

impl Scalar for i32 {
    type Bits = i32;

    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MIN: Self = i32::MIN;
    const MAX: Self = i32::MAX;

    #[inline]
    fn from_count(n: usize) -> Self {
        n as i32
    }
    #[inline]
    fn abs(self) -> Self {
        i32::abs(self)
    }
    #[inline]
    fn is_nan(self) -> bool {
        false
    }
    #[inline]
    fn is_infinite(self) -> bool {
        false
    }
    #[inline]
    fn bits(self) -> i32 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod double {
        use super::*;

        #[test]
        fn unit_len_band() {
            assert_eq!(f64::UNIT_LEN_MIN, next_down(1.0f64, 3));
            assert_eq!(f64::UNIT_LEN_MAX, next_up(1.0f64, 1));
            assert!(f64::UNIT_LEN_MIN < 1.0 && 1.0 < f64::UNIT_LEN_MAX);
            assert_eq!(1.0 - f64::UNIT_LEN_MIN, 1.5 * f64::EPSILON);
        }

        #[test]
        fn ulp_stepping() {
            assert_eq!(0.0f64.ulp_up(), f64::from_bits(1));
            assert_eq!(0.0f64.ulp_down(), -f64::from_bits(1));
            assert_eq!((-1.0f64).ulp_up(), -1.0 + f64::EPSILON / 2.0);
            assert_eq!(f64::INFINITY.ulp_up(), f64::INFINITY);
            assert_eq!(f64::MAX.ulp_up(), f64::INFINITY);
            assert!(f64::NAN.ulp_up().is_nan());
        }

        #[test]
        fn lit() {
            assert_eq!(<f64 as Float>::lit(0.5), 0.5);
        }
    }

    mod single {
        use super::*;

        #[test]
        fn unit_len_band() {
            assert_eq!(f32::UNIT_LEN_MIN, next_down(1.0f32, 3));
            assert_eq!(f32::UNIT_LEN_MAX, next_up(1.0f32, 1));
            // Not simply the f64 band cast to f32
            assert_ne!(f32::UNIT_LEN_MIN, f64::UNIT_LEN_MIN as f32);
        }

        #[test]
        fn trig() {
            use crate::assert_approx_eq;
            assert_approx_eq!(Float::sin(f32::PI / 6.0), 0.5);
            assert_approx_eq!(Float::cos(f32::PI), -1.0);
            assert_approx_eq!(Float::atan2(1.0f32, 1.0), f32::PI / 4.0);
            assert_eq!(Float::sqrt(16.0f32), 4.0);
        }
    }

    #[test]
    fn min_max_propagate_nan() {
        assert_eq!(min(1.0, 2.0), 1.0);
        assert_eq!(max(1.0, 2.0), 2.0);
        assert!(min(f64::NAN, 2.0).is_nan());
        assert!(max(1.0, f64::NAN).is_nan());
        assert_eq!(min(3, -4), -4);
    }

    #[test]
    fn variadic_min_max() {
        assert_eq!(min_of([3.0, -1.5, 2.0]), -1.5);
        assert_eq!(max_of([3, -1, 7, 2]), 7);
        assert_eq!(max_of::<i32>([]), i32::MIN);
    }

    #[test]
    fn clamp_and_saturate() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-5, 0, 3), 0);
        assert_eq!(saturate(1.5f32), 1.0);
        assert_eq!(saturate(-0.5f64), 0.0);
        assert_eq!(saturate(0.25f64), 0.25);
    }
}
