//! Points in real affine spaces.

use core::{
    array,
    fmt::{Debug, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData as Pd,
    ops::{Add, AddAssign, Index, Sub, SubAssign},
};

use crate::error::{Error, Result};
use crate::math::{
    ApproxEq,
    float::{self, Float, Scalar},
    space::{Affine, Real},
    vec::{Vec3, Vector},
};

/// A point in an affine space.
///
/// Unlike a [vector][Vector], a point has a position but no magnitude or
/// direction. Points can be subtracted to get the vector between them, and
/// a vector can be added to a point to get another point, but two points
/// cannot be added together.
#[repr(transparent)]
pub struct Point<Repr, Space = ()>(pub Repr, Pd<Space>);

/// A 2-point with components of type `Sc`.
pub type Point2<Sc = f64, Basis = ()> = Point<[Sc; 2], Real<2, Basis>>;
/// A 3-point with components of type `Sc`.
pub type Point3<Sc = f64, Basis = ()> = Point<[Sc; 3], Real<3, Basis>>;

/// A 2-point with `f64` components.
pub type Point2d<Basis = ()> = Point2<f64, Basis>;
/// A 2-point with `f32` components.
pub type Point2f<Basis = ()> = Point2<f32, Basis>;
/// A 2-point with `i32` components.
pub type Point2i<Basis = ()> = Point2<i32, Basis>;
/// A 3-point with `f64` components.
pub type Point3d<Basis = ()> = Point3<f64, Basis>;
/// A 3-point with `f32` components.
pub type Point3f<Basis = ()> = Point3<f32, Basis>;

/// Returns a real 2-point with `x` and `y` components.
pub const fn pt2<Sc>(x: Sc, y: Sc) -> Point2<Sc> {
    Point([x, y], Pd)
}
/// Returns a real 3-point with `x`, `y`, and `z` components.
pub const fn pt3<Sc>(x: Sc, y: Sc, z: Sc) -> Point3<Sc> {
    Point([x, y, z], Pd)
}

impl<R, Sp> Point<R, Sp> {
    /// Returns a new point with representation `repr`.
    #[inline]
    pub const fn new(repr: R) -> Self {
        Self(repr, Pd)
    }

    /// Returns a point with value equal to `self` but in space `S`.
    #[inline]
    pub fn to<S>(self) -> Point<R, S> {
        Point::new(self.0)
    }
}

impl<Sc: Copy, Sp, const N: usize> Point<[Sc; N], Sp> {
    /// Returns the vector from the origin to `self`.
    #[inline]
    pub fn to_vec(self) -> Vector<[Sc; N], Sp> {
        Vector::new(self.0)
    }

    /// Returns the component of `self` at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= N`.
    pub fn component(&self, index: usize) -> Result<Sc> {
        self.0
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange { index, dim: N })
    }

    /// Returns a point of the same dimension as `self` by applying `f`
    /// component-wise.
    #[inline]
    pub fn map<T>(self, f: impl FnMut(Sc) -> T) -> Point<[T; N], Sp> {
        Point::new(self.0.map(f))
    }
}

impl<Sc: Scalar, Sp, const N: usize> Point<[Sc; N], Sp> {
    /// The point with every component equal to the most negative
    /// representable value. The identity of a [`max`][Self::max] fold.
    pub const MIN: Self = Self([Sc::MIN; N], Pd);
    /// The point with every component equal to the largest representable
    /// value. The identity of a [`min`][Self::min] fold.
    pub const MAX: Self = Self([Sc::MAX; N], Pd);

    /// Returns the origin point.
    #[inline]
    pub fn origin() -> Self {
        Self([Sc::ZERO; N], Pd)
    }

    /// Returns the squared distance between `self` and `other`.
    #[inline]
    pub fn distance_sqr(&self, other: &Self) -> Sc {
        (*self - *other).len_sqr()
    }

    /// Returns the component-wise minimum of `self` and `other`.
    #[inline]
    pub fn min(&self, other: &Self) -> Self {
        Point::new(array::from_fn(|i| float::min(self.0[i], other.0[i])))
    }

    /// Returns the component-wise maximum of `self` and `other`.
    #[inline]
    pub fn max(&self, other: &Self) -> Self {
        Point::new(array::from_fn(|i| float::max(self.0[i], other.0[i])))
    }

    /// Returns the component-wise minimum of all the points in `pts`,
    /// or [`MAX`][Self::MAX] if `pts` is empty.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::{pt2, Point2i};
    ///
    /// let pts = [pt2(1, 5), pt2(-3, 7), pt2(4, 2)];
    /// assert_eq!(Point2i::min_of(pts), pt2(-3, 2));
    /// assert_eq!(Point2i::min_of([] as [Point2i; 0]), Point2i::MAX);
    /// ```
    pub fn min_of(pts: impl IntoIterator<Item = Self>) -> Self {
        pts.into_iter().fold(Self::MAX, |acc, p| acc.min(&p))
    }

    /// Returns the component-wise maximum of all the points in `pts`,
    /// or [`MIN`][Self::MIN] if `pts` is empty.
    pub fn max_of(pts: impl IntoIterator<Item = Self>) -> Self {
        pts.into_iter().fold(Self::MIN, |acc, p| acc.max(&p))
    }

    /// Returns the centroid (arithmetic mean) of `K` points.
    ///
    /// The component sums are divided by `K` converted to `Sc`; for
    /// integer points the division truncates toward zero.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::{pt2, Point2};
    ///
    /// let c = Point2::centroid([pt2(0.0, 0.0), pt2(3.0, 0.0), pt2(0.0, 3.0)]);
    /// assert_eq!(c, pt2(1.0, 1.0));
    /// ```
    pub fn centroid<const K: usize>(pts: [Self; K]) -> Self {
        const { assert!(K > 0, "centroid of zero points") };
        let n = Sc::from_count(K);
        let sum = pts
            .iter()
            .fold([Sc::ZERO; N], |acc, p| array::from_fn(|i| acc[i] + p.0[i]));
        Point::new(sum.map(|c| c / n))
    }

    /// Returns the midpoint of `self` and `other`.
    ///
    /// Equal to the centroid of the two points.
    #[inline]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::centroid([*self, *other])
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

impl<Sc: Float, Sp, const N: usize> Point<[Sc; N], Sp> {
    /// Returns the Euclidean distance between `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::pt2;
    ///
    /// assert_eq!(pt2(1.0, 1.0).distance(&pt2(4.0, 5.0)), 5.0);
    /// ```
    #[inline]
    pub fn distance(&self, other: &Self) -> Sc {
        (*self - *other).len()
    }

    /// Returns the point at barycentric coordinates `bary` of the
    /// triangle `abc`, that is, `a·u + b·v + c·w`.
    ///
    /// The coordinates are expected to sum to one; this is not checked.
    pub fn barycentric_interpolation(
        a: &Self,
        b: &Self,
        c: &Self,
        bary: &Point3<Sc>,
    ) -> Self {
        let [u, v, w] = bary.0;
        Point::new(array::from_fn(|i| a.0[i] * u + b.0[i] * v + c.0[i] * w))
    }
}

impl<Sc: Float, B> Point3<Sc, B> {
    /// Returns whether all the points in `pts` lie on a common plane.
    ///
    /// The plane is spanned by the normalized directions from the first
    /// point to the second and third. Every subsequent point is tested by
    /// the triple product of those directions and the normalized direction
    /// to it, which must be approximately zero. Testing stops at the first
    /// point off the plane.
    ///
    /// If the first three points are collinear, the spanning directions
    /// are parallel and every point passes the test.
    ///
    /// # Errors
    /// [`Error::TooFewPoints`] if `pts` has fewer than three points.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::{pt3, Point3};
    ///
    /// let pts = [
    ///     pt3(0.0, 0.0, 1.0),
    ///     pt3(1.0, 0.0, 1.0),
    ///     pt3(0.0, 1.0, 1.0),
    ///     pt3(5.0, -3.0, 1.0),
    /// ];
    /// assert_eq!(Point3::coplanar(&pts).ok(), Some(true));
    /// assert!(Point3::coplanar(&pts[..2]).is_err());
    /// ```
    pub fn coplanar(pts: &[Self]) -> Result<bool> {
        let [a, b, c, rest @ ..] = pts else {
            return Err(Error::TooFewPoints { expected: 3, actual: pts.len() });
        };
        let v0 = Vec3::<Sc, B>::direction_normalized(a, b);
        let v1 = Vec3::<Sc, B>::direction_normalized(a, c);
        let on_plane = rest.iter().all(|p| {
            let v2 = Vec3::<Sc, B>::direction_normalized(a, p);
            v0.triple_product(&v1, &v2).approx_eq(&Sc::ZERO)
        });
        Ok(on_plane)
    }
}

impl<Sc: Copy, B> Point2<Sc, B> {
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

impl<Sc: Copy, B> Point3<Sc, B> {
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

impl<Sc: Scalar, Sp, const N: usize> Affine for Point<[Sc; N], Sp> {
    type Space = Sp;
    type Diff = Vector<[Sc; N], Sp>;
    const DIM: usize = N;

    #[inline]
    fn add(&self, other: &Self::Diff) -> Self {
        Self(array::from_fn(|i| self.0[i] + other.0[i]), Pd)
    }
    #[inline]
    fn sub(&self, other: &Self) -> Self::Diff {
        Vector::new(array::from_fn(|i| self.0[i] - other.0[i]))
    }
}

impl<Sc: ApproxEq, Sp, const N: usize> ApproxEq<Self, Sc>
    for Point<[Sc; N], Sp>
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

// Manual impls of Copy, Clone, Eq, and PartialEq to avoid
// superfluous where S: Trait bound

impl<R: Copy, S> Copy for Point<R, S> {}

impl<R: Clone, S> Clone for Point<R, S> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), Pd)
    }
}

impl<R: Default, S> Default for Point<R, S> {
    fn default() -> Self {
        Self(R::default(), Pd)
    }
}

impl<R: Debug, Sp: Debug + Default> Debug for Point<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Point<{:?}>", Sp::default())?;
        Debug::fmt(&self.0, f)
    }
}

impl<R: Eq, S> Eq for Point<R, S> {}

impl<R: PartialEq, S> PartialEq for Point<R, S> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Hashes the bit patterns of the components.
impl<Sc: Scalar, Sp, const N: usize> Hash for Point<[Sc; N], Sp> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.map(Scalar::bits).hash(state);
    }
}

impl<R, Sp> From<R> for Point<R, Sp> {
    #[inline]
    fn from(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sc: Copy, Sp, const N: usize> From<Vector<[Sc; N], Sp>>
    for Point<[Sc; N], Sp>
{
    #[inline]
    fn from(v: Vector<[Sc; N], Sp>) -> Self {
        v.to_pt()
    }
}

impl<Sc, Sp, const N: usize> Index<usize> for Point<[Sc; N], Sp> {
    type Output = Sc;

    /// Returns the component of `self` with index `i`.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    fn index(&self, i: usize) -> &Sc {
        &self.0[i]
    }
}

impl<R, Sp> Add<<Self as Affine>::Diff> for Point<R, Sp>
where
    Self: Affine,
{
    type Output = Self;

    fn add(self, other: <Self as Affine>::Diff) -> Self {
        Affine::add(&self, &other)
    }
}

impl<Sc: Scalar, Sp, const N: usize> Sub<Vector<[Sc; N], Sp>>
    for Point<[Sc; N], Sp>
{
    type Output = Self;

    fn sub(self, other: Vector<[Sc; N], Sp>) -> Self {
        Affine::add(&self, &-other)
    }
}

impl<R, Sp> Sub for Point<R, Sp>
where
    Self: Affine,
{
    type Output = <Self as Affine>::Diff;

    fn sub(self, other: Self) -> Self::Output {
        Affine::sub(&self, &other)
    }
}

impl<Sc: Scalar, Sp, const N: usize> AddAssign<Vector<[Sc; N], Sp>>
    for Point<[Sc; N], Sp>
{
    fn add_assign(&mut self, rhs: Vector<[Sc; N], Sp>) {
        *self = *self + rhs;
    }
}

impl<Sc: Scalar, Sp, const N: usize> SubAssign<Vector<[Sc; N], Sp>>
    for Point<[Sc; N], Sp>
{
    fn sub_assign(&mut self, rhs: Vector<[Sc; N], Sp>) {
        *self = *self - rhs;
    }
}
