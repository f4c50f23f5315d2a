//! Real vectors: displacements and directions.

use core::{
    array,
    fmt::{Debug, Formatter},
    hash::{Hash, Hasher},
    iter::Sum,
    marker::PhantomData as Pd,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub,
        SubAssign,
    },
};

use crate::error::{Error, Result};
use crate::math::{
    approx::ApproxEq,
    float::{self, Float, Scalar},
    point::Point,
    space::{Affine, Linear, Real},
};

//
// Types
//

/// A generic vector type. Represents an element of a vector space or a
/// module, a generalization of a vector space where the scalars can be
/// integers (technically, the scalar type can be any *ring*-like type).
///
/// # Type parameters
/// * `Repr`: Representation of the scalar components of the vector,
///   for example an array or a SIMD vector.
/// * `Space`: The space that the vector is an element of. A tag type used to
///   prevent mixing up vectors of different spaces and bases.
#[repr(transparent)]
pub struct Vector<Repr, Space = ()>(pub Repr, Pd<Space>);

/// A 2-vector with components of type `Sc`.
pub type Vec2<Sc = f64, Basis = ()> = Vector<[Sc; 2], Real<2, Basis>>;
/// A 3-vector with components of type `Sc`.
pub type Vec3<Sc = f64, Basis = ()> = Vector<[Sc; 3], Real<3, Basis>>;

/// A 2-vector with `f64` components.
pub type Vec2d<Basis = ()> = Vec2<f64, Basis>;
/// A 2-vector with `f32` components.
pub type Vec2f<Basis = ()> = Vec2<f32, Basis>;
/// A 2-vector with `i32` components.
pub type Vec2i<Basis = ()> = Vec2<i32, Basis>;
/// A 3-vector with `f64` components.
pub type Vec3d<Basis = ()> = Vec3<f64, Basis>;
/// A 3-vector with `f32` components.
pub type Vec3f<Basis = ()> = Vec3<f32, Basis>;

//
// Free functions
//

/// Returns a real 2-vector with components `x` and `y`.
pub const fn vec2<Sc>(x: Sc, y: Sc) -> Vec2<Sc> {
    Vector([x, y], Pd)
}

/// Returns a real 3-vector with components `x`, `y`, and `z`.
pub const fn vec3<Sc>(x: Sc, y: Sc, z: Sc) -> Vec3<Sc> {
    Vector([x, y, z], Pd)
}

/// Returns a vector with all components equal to a scalar.
///
/// This operation is also called "broadcast".
///
/// # Examples
/// ```
/// # use geoprim_core::math::vec::{Vec3, splat, vec3};
/// let v: Vec3 = splat(1.23);
/// assert_eq!(v, vec3(1.23, 1.23, 1.23));
/// ```
#[inline]
pub fn splat<Sp, Sc: Copy, const DIM: usize>(s: Sc) -> Vector<[Sc; DIM], Sp> {
    s.into()
}

//
// Inherent impls
//

impl<R, Sp> Vector<R, Sp> {
    /// Returns a new vector with representation `repr`.
    #[inline]
    pub const fn new(repr: R) -> Self {
        Self(repr, Pd)
    }

    /// Returns a vector with value equal to `self` but in space `S`.
    ///
    /// This method can be used to coerce a vector from one space
    /// to another in order to make types match. One use case is
    /// to cast a "generic" vector returned by one of the constructor
    /// functions to a more specific space.
    #[inline]
    pub fn to<S>(self) -> Vector<R, S> {
        Vector::new(self.0)
    }
}

impl<Sc: Copy, Sp, const N: usize> Vector<[Sc; N], Sp> {
    /// Returns the component of `self` at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= N`.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::vec2;
    ///
    /// let v = vec2(1, 2);
    /// assert_eq!(v.component(1).ok(), Some(2));
    /// assert!(v.component(2).is_err());
    /// ```
    pub fn component(&self, index: usize) -> Result<Sc> {
        self.0
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange { index, dim: N })
    }

    /// Returns a vector of the same dimension as `self` by applying `f`
    /// component-wise.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::{vec2, Vec2f};
    ///
    /// let v: Vec2f = vec2(1, -2).map(|c| c as f32);
    /// assert_eq!(v, vec2(1.0, -2.0));
    /// ```
    #[inline]
    pub fn map<T>(self, f: impl FnMut(Sc) -> T) -> Vector<[T; N], Sp> {
        Vector::new(self.0.map(f))
    }

    /// Returns a vector of `f(self[i], other[i])` for every index `i`.
    #[inline]
    pub fn zip_map<T: Copy, U>(
        self,
        other: Vector<[T; N], Sp>,
        mut f: impl FnMut(Sc, T) -> U,
    ) -> Vector<[U; N], Sp> {
        Vector::new(array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// Returns a point with the same components as `self`.
    #[inline]
    pub fn to_pt(self) -> Point<[Sc; N], Sp> {
        Point::new(self.0)
    }
}

impl<Sc: Scalar, Sp, const N: usize> Vector<[Sc; N], Sp> {
    /// A vector with all components equal to [`Scalar::MIN`].
    pub const MIN: Self = Self([Sc::MIN; N], Pd);
    /// A vector with all components equal to [`Scalar::MAX`].
    pub const MAX: Self = Self([Sc::MAX; N], Pd);

    /// Returns the zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self([Sc::ZERO; N], Pd)
    }

    /// Returns the dot product of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::vec3;
    ///
    /// assert_eq!(vec3(1, 2, 3).dot(&vec3(4, -5, 6)), 12);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> Sc {
        let mut res = Sc::ZERO;
        for i in 0..N {
            res += self.0[i] * other.0[i];
        }
        res
    }

    /// Returns the length of `self`, squared.
    ///
    /// Prefer this over [`len`][Self::len] when only comparing magnitudes,
    /// as it avoids a square root.
    #[inline]
    pub fn len_sqr(&self) -> Sc {
        self.dot(self)
    }

    /// Returns the component-wise product of `self` and `other`.
    #[inline]
    pub fn mul_comp(&self, other: &Self) -> Self {
        self.zip_map(*other, |a, b| a * b)
    }

    /// Returns the component-wise quotient of `self` and `other`.
    #[inline]
    pub fn div_comp(&self, other: &Self) -> Self {
        self.zip_map(*other, |a, b| a / b)
    }

    /// Returns `self` with each component replaced by its absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        self.map(Scalar::abs)
    }

    /// Returns the component-wise minimum of `self` and `other`.
    #[inline]
    pub fn min(&self, other: &Self) -> Self {
        self.zip_map(*other, float::min)
    }

    /// Returns the component-wise maximum of `self` and `other`.
    #[inline]
    pub fn max(&self, other: &Self) -> Self {
        self.zip_map(*other, float::max)
    }

    /// Returns the vector from point `from` to point `to`.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::{pt2, vec2, Vector};
    ///
    /// assert_eq!(Vector::direction(&pt2(1, 1), &pt2(3, 0)), vec2(2, -1));
    /// ```
    #[inline]
    pub fn direction(from: &Point<[Sc; N], Sp>, to: &Point<[Sc; N], Sp>) -> Self {
        *to - *from
    }

    /// Returns whether any component of `self` is NaN.
    pub fn has_nans(&self) -> bool {
        self.0.iter().any(|c| c.is_nan())
    }

    /// Returns whether any component of `self` is infinite.
    pub fn has_infinites(&self) -> bool {
        self.0.iter().any(|c| c.is_infinite())
    }

    /// Returns whether all components of `self` are finite.
    pub fn is_finite(&self) -> bool {
        !self.has_nans() && !self.has_infinites()
    }
}

impl<Sc: Float, Sp, const N: usize> Vector<[Sc; N], Sp> {
    /// Returns the length (magnitude) of `self`.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::vec2;
    ///
    /// assert_eq!(vec2(3.0, 4.0).len(), 5.0);
    /// ```
    #[inline]
    pub fn len(&self) -> Sc {
        self.len_sqr().sqrt()
    }

    /// Returns whether the length of `self` lies within the unit tolerance
    /// band [`UNIT_LEN_MIN`][Float::UNIT_LEN_MIN],
    /// [`UNIT_LEN_MAX`][Float::UNIT_LEN_MAX].
    #[inline]
    pub fn is_unit(&self) -> bool {
        let len = self.len();
        Sc::UNIT_LEN_MIN <= len && len <= Sc::UNIT_LEN_MAX
    }

    /// Returns `self` normalized to unit length.
    ///
    /// If `self` is already of [unit length][Self::is_unit], returns `self`
    /// unchanged. Otherwise, divides each component by the length. A zero
    /// vector yields NaN components; it is up to the caller to avoid it.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::assert_approx_eq;
    /// use geoprim_core::math::vec2;
    ///
    /// assert_approx_eq!(vec2(3.0, 4.0).normalize(), vec2(0.6, 0.8));
    /// assert!(vec2(0.0, 0.0).normalize().has_nans());
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        if self.is_unit() {
            *self
        } else {
            *self / self.len()
        }
    }

    /// Returns the unit vector pointing from point `from` to point `to`.
    ///
    /// Coincident points yield a NaN vector.
    #[inline]
    pub fn direction_normalized(
        from: &Point<[Sc; N], Sp>,
        to: &Point<[Sc; N], Sp>,
    ) -> Self {
        Self::direction(from, to).normalize()
    }

    /// Returns the scalar projection of `self` onto `other`
    /// (the length of the component of `self` parallel to `other`).
    pub fn scalar_project(&self, other: &Self) -> Sc {
        self.dot(other) / other.len()
    }

    /// Returns the vector projection of `self` onto `other`
    /// (the vector component of `self` parallel to `other`).
    pub fn vector_project(&self, other: &Self) -> Self {
        *other * (self.dot(other) / other.len_sqr())
    }

    /// Returns the reflection of `self` about the plane with normal `normal`.
    ///
    /// If `is_facing_surface` is true, `self` is taken to be an incident
    /// direction heading *into* the surface, and the result is the mirror
    /// direction `d - 2(d·n)n`, heading away. If `is_facing_surface` is false,
    /// `self` is taken to point away from the surface, as an outgoing
    /// sample does, and the result is the negation `2(d·n)n - d`.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::vec3;
    ///
    /// let n = vec3(0.0, 0.0, 1.0);
    ///
    /// let incoming = vec3(1.0, 0.0, -1.0);
    /// assert_eq!(incoming.reflect(&n, true), vec3(1.0, 0.0, 1.0));
    ///
    /// let outgoing = vec3(1.0, 0.0, 1.0);
    /// assert_eq!(outgoing.reflect(&n, false), vec3(-1.0, 0.0, 1.0));
    /// ```
    pub fn reflect(&self, normal: &Self, is_facing_surface: bool) -> Self {
        let refl = *self - *normal * (Sc::lit(2.0) * self.dot(normal));
        if is_facing_surface { refl } else { -refl }
    }

    /// Returns the refraction of `self` through a surface with normal
    /// `normal` and relative index of refraction `eta`, or `None` in case
    /// of total internal reflection.
    ///
    /// With cos θᵢ = `self·normal` and sin²θₜ = eta²(1 - cos²θᵢ),
    /// returns `None` if sin²θₜ ≥ 1, else
    /// ```text
    /// self * eta - normal * (eta * cos θᵢ + cos θₜ)
    /// ```
    /// # Examples
    /// ```
    /// use geoprim_core::math::vec3;
    ///
    /// let dir = vec3(0.0, 0.0, -1.0);
    /// let n = vec3(0.0, 0.0, 1.0);
    ///
    /// assert_eq!(dir.refract(&n, 1.0), Some(dir));
    /// ```
    pub fn refract(&self, normal: &Self, eta: Sc) -> Option<Self> {
        let cos_theta_i = self.dot(normal);
        let sin_theta_i_sqr = float::max(Sc::ZERO, Sc::ONE - cos_theta_i * cos_theta_i);
        let sin_theta_t_sqr = eta * eta * sin_theta_i_sqr;
        if sin_theta_t_sqr >= Sc::ONE {
            return None;
        }
        let cos_theta_t = (Sc::ONE - sin_theta_t_sqr).sqrt();
        let s = eta * cos_theta_i + cos_theta_t;
        Some(*self * eta - *normal * s)
    }
}

impl<Sc: Copy, B> Vec2<Sc, B> {
    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> Sc {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> Sc {
        self.0[1]
    }
}

impl<Sc: Scalar, B> Vec2<Sc, B> {
    /// Unit vector codirectional with the positive x-axis.
    pub const X: Self = Vector([Sc::ONE, Sc::ZERO], Pd);
    /// Unit vector codirectional with the positive y-axis.
    pub const Y: Self = Vector([Sc::ZERO, Sc::ONE], Pd);

    /// Returns `self` rotated 90° counter-clockwise.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::vec2;
    ///
    /// assert_eq!(vec2(2, 1).perp(), vec2(-1, 2));
    /// ```
    #[inline]
    pub fn perp(&self) -> Self {
        vec2(-self.y(), self.x()).to()
    }

    /// Returns the perpendicular dot product of `self` and `other`,
    /// the z component of their 3D cross product.
    ///
    /// Positive if `other` is counter-clockwise from `self`.
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> Sc {
        self.x() * other.y() - self.y() * other.x()
    }
}

impl<Sc: Copy, B> Vec3<Sc, B> {
    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> Sc {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> Sc {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub fn z(&self) -> Sc {
        self.0[2]
    }
}

impl<Sc: Scalar, B> Vec3<Sc, B> {
    /// Unit vector codirectional with the positive x-axis.
    pub const X: Self = Vector([Sc::ONE, Sc::ZERO, Sc::ZERO], Pd);
    /// Unit vector codirectional with the positive y-axis.
    pub const Y: Self = Vector([Sc::ZERO, Sc::ONE, Sc::ZERO], Pd);
    /// Unit vector codirectional with the positive z-axis.
    pub const Z: Self = Vector([Sc::ZERO, Sc::ZERO, Sc::ONE], Pd);

    /// Returns the cross product of `self` with `other`.
    ///
    /// The result is a vector orthogonal to both input vectors, its length
    /// proportional to the area of the parallelogram formed by the vectors.
    /// The orientation is right-handed:
    ///
    /// ```text
    ///        ^
    ///     r  |
    ///     e  |
    ///     s  |    other
    ///     u  |     ^   - r = self × other
    ///     l  |    /
    ///     t  |   /
    ///        +--------> self
    /// ```
    /// # Examples
    /// ```
    /// use geoprim_core::math::{vec3, Vec3};
    ///
    /// assert_eq!(Vec3::<f64>::X.cross(&Vec3::Y), Vec3::Z);
    /// assert_eq!(Vec3::<i32>::Z.cross(&Vec3::Y), vec3(-1, 0, 0));
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let x = self.y() * other.z() - self.z() * other.y();
        let y = self.z() * other.x() - self.x() * other.z();
        let z = self.x() * other.y() - self.y() * other.x();
        [x, y, z].into()
    }

    /// Returns the scalar triple product `self · (b × c)`, the signed
    /// volume of the parallelepiped spanned by the three vectors.
    #[inline]
    pub fn triple_product(&self, b: &Self, c: &Self) -> Sc {
        self.dot(&b.cross(c))
    }
}

impl<Sc: Float, B> Vec3<Sc, B> {
    /// Returns a unit vector orthogonal to `self`.
    ///
    /// The smallest-magnitude component of the normalized input is dropped,
    /// and the perpendicular is built from the other two. This avoids
    /// cancellation when `self` is nearly axis-aligned.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::{vec3, Vec3};
    ///
    /// let v = vec3(0.0, 0.0, 2.0);
    /// assert_eq!(v.orthogonal(), Vec3::X);
    /// ```
    pub fn orthogonal(&self) -> Self {
        let u = self.normalize();
        let [ax, ay, az] = u.abs().0;
        let [x, y, z] = u.0;
        let o: Self = if ax < ay && ax < az {
            [Sc::ZERO, z, -y].into()
        } else if ay < az {
            [z, Sc::ZERO, -x].into()
        } else {
            [y, -x, Sc::ZERO].into()
        };
        o.normalize()
    }
}

//
// Local trait impls
//

impl<Sc: Scalar, Sp, const N: usize> Affine for Vector<[Sc; N], Sp> {
    type Space = Sp;
    type Diff = Self;
    const DIM: usize = N;

    #[inline]
    fn add(&self, other: &Self) -> Self {
        self.zip_map(*other, |a, b| a + b)
    }
    #[inline]
    fn sub(&self, other: &Self) -> Self {
        self.zip_map(*other, |a, b| a - b)
    }
}

impl<Sc: Scalar, Sp, const N: usize> Linear for Vector<[Sc; N], Sp> {
    type Scalar = Sc;

    #[inline]
    fn zero() -> Self {
        Self::zero()
    }
    #[inline]
    fn neg(&self) -> Self {
        self.map(|c| -c)
    }
    #[inline]
    fn mul(&self, scalar: Sc) -> Self {
        self.map(|c| c * scalar)
    }
}

impl<Sc: ApproxEq, Sp, const N: usize> ApproxEq<Self, Sc>
    for Vector<[Sc; N], Sp>
{
    fn approx_eq_eps(&self, other: &Self, eps: &Sc) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> Sc {
        Sc::relative_epsilon()
    }
}

//
// Foreign trait impls
//

// Manual impls of Copy, Clone, Default, Eq, and PartialEq
// to avoid superfluous where Sp: Trait bounds

impl<R: Copy, Sp> Copy for Vector<R, Sp> {}

impl<R: Clone, Sp> Clone for Vector<R, Sp> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), Pd)
    }
}

impl<R: Default, Sp> Default for Vector<R, Sp> {
    fn default() -> Self {
        Self(R::default(), Pd)
    }
}

impl<R: Eq, Sp> Eq for Vector<R, Sp> {}

impl<R: PartialEq, Sp> PartialEq for Vector<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Hashes the bit patterns of the components.
impl<Sc: Scalar, Sp, const N: usize> Hash for Vector<[Sc; N], Sp> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.map(Scalar::bits).hash(state);
    }
}

impl<R: Debug, Sp: Debug + Default> Debug for Vector<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Vec<{:?}>", Sp::default())?;
        Debug::fmt(&self.0, f)
    }
}

impl<R, Sp> From<R> for Vector<R, Sp> {
    #[inline]
    fn from(els: R) -> Self {
        Self(els, Pd)
    }
}

impl<Sp, Sc: Copy, const DIM: usize> From<Sc> for Vector<[Sc; DIM], Sp> {
    /// Returns a vector with all components equal to `scalar`.
    ///
    /// This operation is also called "splat" or "broadcast".
    #[inline]
    fn from(scalar: Sc) -> Self {
        Self([scalar; DIM], Pd)
    }
}

impl<Sc: Copy, Sp, const N: usize> From<Point<[Sc; N], Sp>>
    for Vector<[Sc; N], Sp>
{
    #[inline]
    fn from(p: Point<[Sc; N], Sp>) -> Self {
        p.to_vec()
    }
}

impl<Sc, Sp, const N: usize> Index<usize> for Vector<[Sc; N], Sp> {
    type Output = Sc;

    /// Returns the component of `self` with index `i`.
    ///
    /// # Panics
    /// If `i >= N`. See [`component`][Self::component] for a fallible
    /// alternative.
    #[inline]
    fn index(&self, i: usize) -> &Sc {
        &self.0[i]
    }
}

impl<Sc: Scalar, Sp, const N: usize> Add for Vector<[Sc; N], Sp> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Affine::add(&self, &rhs)
    }
}

impl<Sc: Scalar, Sp, const N: usize> Sub for Vector<[Sc; N], Sp> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Affine::sub(&self, &rhs)
    }
}

impl<Sc: Scalar, Sp, const N: usize> Neg for Vector<[Sc; N], Sp> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Linear::neg(&self)
    }
}

impl<Sc: Scalar, Sp, const N: usize> Mul<Sc> for Vector<[Sc; N], Sp> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Sc) -> Self {
        Linear::mul(&self, rhs)
    }
}

impl<Sc: Scalar, Sp, const N: usize> Div<Sc> for Vector<[Sc; N], Sp> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Sc) -> Self {
        self.map(|c| c / rhs)
    }
}

impl<Sc: Scalar, Sp, const N: usize> AddAssign for Vector<[Sc; N], Sp> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<Sc: Scalar, Sp, const N: usize> SubAssign for Vector<[Sc; N], Sp> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<Sc: Scalar, Sp, const N: usize> MulAssign<Sc> for Vector<[Sc; N], Sp> {
    #[inline]
    fn mul_assign(&mut self, rhs: Sc) {
        *self = *self * rhs;
    }
}

impl<Sc: Scalar, Sp, const N: usize> DivAssign<Sc> for Vector<[Sc; N], Sp> {
    #[inline]
    fn div_assign(&mut self, rhs: Sc) {
        *self = *self / rhs;
    }
}

impl<Sc: Scalar, Sp, const N: usize> Sum for Vector<[Sc; N], Sp> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

macro_rules! impl_scalar_mul_vec {
    ($($t:ty),+) => {$(
        impl<Sp, const N: usize> Mul<Vector<[$t; N], Sp>> for $t {
            type Output = Vector<[$t; N], Sp>;
            #[inline]
            fn mul(self, rhs: Vector<[$t; N], Sp>) -> Self::Output {
                rhs * self
            }
        }
    )+};
}

impl_scalar_mul_vec!(f32, f64, i32);
