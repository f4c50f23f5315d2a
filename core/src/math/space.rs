//! Types and traits for representing linear (vector) and affine spaces.

use core::fmt::{Debug, Formatter};
use core::marker::PhantomData;

/// Trait for types representing elements of an affine space.
///
/// An affine space is a set of points together with a vector space of
/// differences: two points can be subtracted to yield a vector, and a vector
/// can be added to a point to yield another point, but points cannot be added
/// to each other or scaled.
pub trait Affine: Sized {
    /// The type of the space that `Self` is the element of.
    type Space;
    /// The (signed) difference of two values of `Self`.
    ///
    /// `Diff` must have the same dimension as `Self`.
    type Diff: Linear;

    /// The dimension of `Self`.
    const DIM: usize;

    /// Adds `diff` to `self` component-wise.
    ///
    /// `add` is commutative and associative.
    fn add(&self, diff: &Self::Diff) -> Self;

    /// Subtracts `other` from `self`, returning the (signed) difference.
    ///
    /// `sub` is anti-commutative: `v.sub(w) == w.sub(v).neg()`.
    fn sub(&self, other: &Self) -> Self::Diff;
}

/// Trait for types representing elements of a linear space (vector space).
///
/// A `Linear` type is a type that is `Affine` and
/// additionally satisfies the following conditions:
///
/// * The difference type [`Diff`][Affine::Diff] is equal to `Self`
/// * The type has an additive identity, returned by the [`zero`][Self::zero] method
/// * Every value has an additive inverse, returned by the [`neg`][Self::neg] method
pub trait Linear: Affine<Diff = Self> {
    /// The scalar type associated with `Self`
    type Scalar: Sized;

    /// Returns the additive identity of `Self`.
    fn zero() -> Self;

    /// Returns the additive inverse of `self`.
    fn neg(&self) -> Self;

    /// Multiplies all components of `self` by `scalar`.
    ///
    /// `mul` is commutative and associative, and distributes over
    /// `add` and `sub` (up to rounding errors):
    /// ```
    /// # use std::ops::Mul;
    /// # use geoprim_core::math::space::Affine;
    /// # let [v, w, x, a] = [1.0f32, 2.0, 3.0, 4.0];
    /// v.mul(w) == w.mul(v);
    /// v.mul(w).mul(x) == v.mul(w.mul(x));
    /// v.mul(a).add(&w.mul(a)) == v.add(&w).mul(a);
    /// v.mul(a).sub(&w.mul(a)) == v.add(&w).sub(&a);
    /// ```
    fn mul(&self, scalar: Self::Scalar) -> Self;
}

/// Tag type for real vector spaces (Euclidean spaces) of dimension `DIM`.
/// For example, the type `Real<3>` corresponds to ℝ³.
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Real<const DIM: usize, Basis = ()>(PhantomData<Basis>);

macro_rules! impl_scalar_space {
    ($($t:ty),+) => {$(
        impl Affine for $t {
            type Space = ();
            type Diff = Self;
            const DIM: usize = 1;

            #[inline]
            fn add(&self, other: &Self) -> Self {
                self + other
            }
            #[inline]
            fn sub(&self, other: &Self) -> Self {
                self - other
            }
        }

        impl Linear for $t {
            type Scalar = Self;

            #[inline]
            fn zero() -> Self {
                0 as $t
            }
            #[inline]
            fn neg(&self) -> Self {
                -*self
            }
            #[inline]
            fn mul(&self, scalar: Self) -> Self {
                self * scalar
            }
        }
    )+};
}

impl_scalar_space!(f32, f64, i32);

impl<const DIM: usize, Basis> Debug for Real<DIM, Basis>
where
    Basis: Debug + Default,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "R{}<{:?}>", DIM, Basis::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_affine_ops() {
        assert_eq!(Affine::add(&2.5f64, &-1.0), 1.5);
        assert_eq!(Affine::sub(&2, &5), -3);
        assert_eq!(Linear::mul(&-1.5f32, 2.0), -3.0);
        assert_eq!(Linear::neg(&4), -4);
        assert_eq!(<f64 as Linear>::zero(), 0.0);
    }

    #[test]
    fn real_debug() {
        assert_eq!(alloc::format!("{:?}", Real::<3>::default()), "R3<()>");
    }
}
