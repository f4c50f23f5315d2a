//! Matrices and linear and affine transforms.
//!
//! Matrices are stored row-major and tagged with a *map* type that records
//! the source and destination bases of the transform they represent. A 3x3
//! matrix is a transform of the homogeneous plane and acts on 2D points
//! and vectors; a 4x4 matrix acts on 3D points and vectors in the same way.
//!
//! Points and vectors are treated as column vectors and multiplied on the
//! right, so `a.compose(&b)` (or `a * b`) applies `b` first, then `a`.

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData as Pd;
use core::ops::Mul;

use crate::error::{Error, Result};
use crate::geom::{Ray, Ray3};
use crate::math::{
    angle::Angle,
    approx::ApproxEq,
    float::{Float, Scalar},
    point::{Point2, Point3, pt2, pt3},
    space::Real,
    vec::{Vec2, Vec3, vec2, vec3},
};

/// A linear (or affine) map from one space to another.
pub trait LinearMap {
    /// The source space, or domain, of `Self`.
    type Source;
    /// The destination space, or codomain, of `Self`.
    type Dest;
}

/// Dimension-preserving mapping from one real basis to another.
///
/// `DIM` is the dimension of the *non-homogeneous* space: a
/// `RealToReal<2>` is represented by a 3x3 matrix and a `RealToReal<3>`
/// by a 4x4 matrix.
pub struct RealToReal<const DIM: usize, SrcBasis = (), DstBasis = ()>(
    Pd<(SrcBasis, DstBasis)>,
);

/// A generic matrix type.
///
/// # Type parameters
/// * `Repr`: the representation of the elements, a nested array of rows.
/// * `Map`: the mapping the matrix represents, for example [`RealToReal`].
#[repr(transparent)]
pub struct Matrix<Repr, Map>(pub Repr, Pd<Map>);

/// A 3x3 matrix, representing an affine or projective transform of 2D space.
pub type Mat3<Sc = f64, Map = RealToReal<2>> = Matrix<[[Sc; 3]; 3], Map>;
/// A 4x4 matrix, representing an affine or projective transform of 3D space.
pub type Mat4<Sc = f64, Map = RealToReal<3>> = Matrix<[[Sc; 4]; 4], Map>;

/// A 3x3 matrix with `f64` elements.
pub type Mat3d<Map = RealToReal<2>> = Mat3<f64, Map>;
/// A 3x3 matrix with `f32` elements.
pub type Mat3f<Map = RealToReal<2>> = Mat3<f32, Map>;
/// A 4x4 matrix with `f64` elements.
pub type Mat4d<Map = RealToReal<3>> = Mat4<f64, Map>;
/// A 4x4 matrix with `f32` elements.
pub type Mat4f<Map = RealToReal<3>> = Mat4<f32, Map>;

impl<const DIM: usize, S, D> LinearMap for RealToReal<DIM, S, D> {
    type Source = Real<DIM, S>;
    type Dest = Real<DIM, D>;
}

//
// Inherent impls
//

impl<Sc: Copy, Map, const N: usize> Matrix<[[Sc; N]; N], Map> {
    /// Returns a matrix with the given rows.
    #[inline]
    pub const fn new(rows: [[Sc; N]; N]) -> Self {
        Self(rows, Pd)
    }

    /// Returns the element at row `row` and column `col`, both zero-based.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if either index is `N` or greater.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::Mat3;
    ///
    /// let m = Mat3::<f64>::identity();
    /// assert_eq!(m.element(1, 1).ok(), Some(1.0));
    /// assert_eq!(m.element(0, 1).ok(), Some(0.0));
    /// assert!(m.element(0, 3).is_err());
    /// ```
    pub fn element(&self, row: usize, col: usize) -> Result<Sc> {
        let r = self
            .0
            .get(row)
            .ok_or(Error::IndexOutOfRange { index: row, dim: N })?;
        r.get(col)
            .copied()
            .ok_or(Error::IndexOutOfRange { index: col, dim: N })
    }

    /// Returns the row of `self` with index `i`.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    pub fn row(&self, i: usize) -> [Sc; N] {
        self.0[i]
    }

    /// Returns the column of `self` with index `i`.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    pub fn col(&self, i: usize) -> [Sc; N] {
        array::from_fn(|r| self.0[r][i])
    }

    /// Returns `self` with its map type changed to `M`.
    ///
    /// Used to cast a matrix returned by one of the factory functions
    /// to a transform between specific bases.
    #[inline]
    pub fn to<M>(&self) -> Matrix<[[Sc; N]; N], M> {
        Matrix::new(self.0)
    }
}

impl<Sc: Scalar, Map, const N: usize> Matrix<[[Sc; N]; N], Map> {
    /// Returns the `N`x`N` identity matrix.
    pub fn identity() -> Self {
        Self::new(array::from_fn(|r| {
            array::from_fn(|c| if r == c { Sc::ONE } else { Sc::ZERO })
        }))
    }
}

impl<Sc, const N: usize, const DIM: usize, S, D>
    Matrix<[[Sc; N]; N], RealToReal<DIM, S, D>>
where
    Sc: Scalar,
{
    /// Returns the transpose of `self`.
    ///
    /// The map of the transpose is reversed, in the same way as that of the
    /// [inverse][Mat4::inverse]. The transpose of an inverse thus has the
    /// same map as the original matrix, which is how surface normals are
    /// carried through a transform.
    pub fn transpose(&self) -> Matrix<[[Sc; N]; N], RealToReal<DIM, D, S>> {
        Matrix::new(array::from_fn(|r| self.col(r)))
    }

    /// Returns the composite transform `self` ∘ `inner`, applying `inner`
    /// first and `self` second.
    ///
    /// This is the matrix product `self * inner`.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::{pt2, vec2, scale2, translate2};
    ///
    /// let t = translate2(vec2(1.0, 0.0));
    /// let s = scale2(vec2(2.0, 2.0));
    ///
    /// // Scale first, then translate
    /// assert_eq!(t.compose(&s).apply(&pt2(1.0, 1.0)), pt2(3.0, 2.0));
    /// // Translate first, then scale
    /// assert_eq!(s.compose(&t).apply(&pt2(1.0, 1.0)), pt2(4.0, 2.0));
    /// ```
    pub fn compose<I>(
        &self,
        inner: &Matrix<[[Sc; N]; N], RealToReal<DIM, I, S>>,
    ) -> Matrix<[[Sc; N]; N], RealToReal<DIM, I, D>> {
        Matrix::new(array::from_fn(|r| {
            array::from_fn(|c| {
                let mut acc = Sc::ZERO;
                for k in 0..N {
                    acc += self.0[r][k] * inner.0[k][c];
                }
                acc
            })
        }))
    }

    /// Returns the composite transform `outer` ∘ `self`, applying `self`
    /// first and `outer` second.
    ///
    /// Equivalent to `outer.compose(self)`.
    #[inline]
    pub fn then<E>(
        &self,
        outer: &Matrix<[[Sc; N]; N], RealToReal<DIM, D, E>>,
    ) -> Matrix<[[Sc; N]; N], RealToReal<DIM, S, E>> {
        outer.compose(self)
    }
}

impl<Sc: Scalar, S, D> Mat3<Sc, RealToReal<2, S, D>> {
    /// Returns the determinant of `self`.
    pub fn determinant(&self) -> Sc {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Returns whether `self` has an inverse, that is, whether its
    /// determinant is nonzero.
    ///
    /// The comparison is exact: a matrix with a vanishingly small but
    /// nonzero determinant is considered invertible, even though its
    /// inverse may be numerically meaningless.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.determinant() != Sc::ZERO
    }

    /// Maps the point `p` by `self`.
    ///
    /// The homogeneous coordinate of `p` is taken to be one, and the
    /// resulting homogeneous coordinate is discarded.
    pub fn apply(&self, p: &Point2<Sc, S>) -> Point2<Sc, D> {
        let [x, y] = p.0;
        let [r0, r1, _] = self.0;
        pt2(
            r0[0] * x + r0[1] * y + r0[2],
            r1[0] * x + r1[1] * y + r1[2],
        )
        .to()
    }

    /// Maps the vector `v` by `self`, ignoring the translation part.
    pub fn apply_vec(&self, v: &Vec2<Sc, S>) -> Vec2<Sc, D> {
        let [x, y] = v.0;
        let [r0, r1, _] = self.0;
        vec2(r0[0] * x + r0[1] * y, r1[0] * x + r1[1] * y).to()
    }

    /// Maps the vector `v` by the transpose of `self`.
    ///
    /// To transform a surface normal through a transform `m`, call this
    /// on the *inverse* of `m`; this method only does the multiplication.
    pub fn apply_transpose(&self, v: &Vec2<Sc, D>) -> Vec2<Sc, S> {
        let [x, y] = v.0;
        let [c0, c1] = [self.col(0), self.col(1)];
        vec2(c0[0] * x + c0[1] * y, c1[0] * x + c1[1] * y).to()
    }
}

impl<Sc: Float, S, D> Mat3<Sc, RealToReal<2, S, D>> {
    /// Maps the point `p` by `self`, then divides the result by its
    /// homogeneous coordinate.
    ///
    /// A zero homogeneous coordinate is not guarded against and yields
    /// infinite or NaN components.
    pub fn apply_and_divide(&self, p: &Point2<Sc, S>) -> Point2<Sc, D> {
        let [x, y] = p.0;
        let [r0, r1, r2] = self.0;
        let w = r2[0] * x + r2[1] * y + r2[2];
        pt2(
            (r0[0] * x + r0[1] * y + r0[2]) / w,
            (r1[0] * x + r1[1] * y + r1[2]) / w,
        )
        .to()
    }

    /// Returns the inverse of `self`: the adjugate divided by the
    /// determinant.
    ///
    /// # Errors
    /// [`Error::NotInvertible`] if the determinant of `self` is zero.
    pub fn inverse(&self) -> Result<Mat3<Sc, RealToReal<2, D, S>>> {
        let det = self.determinant();
        if det == Sc::ZERO {
            tracing::debug!(target: "geoprim::mat", "refusing to invert singular 3x3 matrix");
            return Err(Error::NotInvertible);
        }
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        let adj = [
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ];
        Ok(Matrix::new(adj.map(|row| row.map(|x| x / det))))
    }
}

impl<Sc: Scalar, S, D> Mat4<Sc, RealToReal<3, S, D>> {
    /// Returns the determinant of `self`, by cofactor expansion along
    /// the first row.
    pub fn determinant(&self) -> Sc {
        let [a, b, c, d] = self.0[0];

        let det3 = |j: usize, k: usize, l: usize| {
            let [r, s, t] = [&self.0[1], &self.0[2], &self.0[3]];
            let [a, b, c] = [r[j], r[k], r[l]];
            let [d, e, f] = [s[j], s[k], s[l]];
            let [g, h, i] = [t[j], t[k], t[l]];

            a * (e * i - f * h) + b * (f * g - d * i) + c * (d * h - e * g)
        };

        a * det3(1, 2, 3) - b * det3(0, 2, 3) + c * det3(0, 1, 3)
            - d * det3(0, 1, 2)
    }

    /// Returns whether `self` has an inverse, that is, whether its
    /// determinant is nonzero.
    ///
    /// The comparison is exact; see [`Mat3::is_invertible`].
    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.determinant() != Sc::ZERO
    }

    /// Maps the point `p` by `self`.
    ///
    /// The homogeneous coordinate of `p` is taken to be one, and the
    /// resulting homogeneous coordinate is discarded.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::math::{pt3, vec3, translate3};
    ///
    /// let m = translate3(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.apply(&pt3(0.0, 5.0, -3.0)), pt3(1.0, 7.0, 0.0));
    /// ```
    pub fn apply(&self, p: &Point3<Sc, S>) -> Point3<Sc, D> {
        let [x, y, z] = p.0;
        let [r0, r1, r2, _] = self.0;
        pt3(
            r0[0] * x + r0[1] * y + r0[2] * z + r0[3],
            r1[0] * x + r1[1] * y + r1[2] * z + r1[3],
            r2[0] * x + r2[1] * y + r2[2] * z + r2[3],
        )
        .to()
    }

    /// Maps the vector `v` by `self`, ignoring the translation part.
    pub fn apply_vec(&self, v: &Vec3<Sc, S>) -> Vec3<Sc, D> {
        let [x, y, z] = v.0;
        let [r0, r1, r2, _] = self.0;
        vec3(
            r0[0] * x + r0[1] * y + r0[2] * z,
            r1[0] * x + r1[1] * y + r1[2] * z,
            r2[0] * x + r2[1] * y + r2[2] * z,
        )
        .to()
    }

    /// Maps the vector `v` by the transpose of `self`.
    ///
    /// To transform a surface normal through a transform `m`, call this
    /// on the *inverse* of `m`; this method only does the multiplication.
    pub fn apply_transpose(&self, v: &Vec3<Sc, D>) -> Vec3<Sc, S> {
        let [x, y, z] = v.0;
        let [c0, c1, c2] = [self.col(0), self.col(1), self.col(2)];
        vec3(
            c0[0] * x + c0[1] * y + c0[2] * z,
            c1[0] * x + c1[1] * y + c1[2] * z,
            c2[0] * x + c2[1] * y + c2[2] * z,
        )
        .to()
    }

    /// Maps the ray `r` by `self`: the origin as a point, the direction
    /// as a vector.
    ///
    /// The direction is not renormalized.
    pub fn apply_ray(&self, r: &Ray3<Sc, S>) -> Ray3<Sc, D> {
        Ray(self.apply(&r.0), self.apply_vec(&r.1))
    }
}

impl<Sc: Float, S, D> Mat4<Sc, RealToReal<3, S, D>> {
    /// Maps the point `p` by `self`, then divides the result by its
    /// homogeneous coordinate.
    ///
    /// Required for points mapped by a [perspective] matrix. A zero
    /// homogeneous coordinate is not guarded against and yields infinite
    /// or NaN components.
    pub fn apply_and_divide(&self, p: &Point3<Sc, S>) -> Point3<Sc, D> {
        let v = [p.x(), p.y(), p.z(), Sc::ONE];
        let [x, y, z, w] = self.0.map(|row| {
            row.iter().zip(&v).fold(Sc::ZERO, |acc, (m, c)| acc + *m * *c)
        });
        pt3(x / w, y / w, z / w).to()
    }

    /// Returns the inverse of `self`: the adjugate divided by the
    /// determinant.
    ///
    /// # Errors
    /// [`Error::NotInvertible`] if the determinant of `self` is zero.
    ///
    /// # Examples
    /// ```
    /// use geoprim_core::assert_approx_eq;
    /// use geoprim_core::math::{pt3, vec3, Mat4, translate3};
    ///
    /// let m = translate3(vec3(1.0, -2.0, 3.0));
    /// let inv = m.inverse().unwrap();
    /// assert_approx_eq!(inv.apply(&pt3(1.0, -2.0, 3.0)), pt3(0.0, 0.0, 0.0));
    ///
    /// let zero = Mat4::<f64>::new([[0.0; 4]; 4]);
    /// assert!(zero.inverse().is_err());
    /// ```
    pub fn inverse(&self) -> Result<Mat4<Sc, RealToReal<3, D, S>>> {
        let det = self.determinant();
        if det == Sc::ZERO {
            tracing::debug!(target: "geoprim::mat", "refusing to invert singular 4x4 matrix");
            return Err(Error::NotInvertible);
        }
        let [
            [m00, m01, m02, m03],
            [m10, m11, m12, m13],
            [m20, m21, m22, m23],
            [m30, m31, m32, m33],
        ] = self.0;

        // 2x2 minors of the top two rows...
        let s0 = m00 * m11 - m10 * m01;
        let s1 = m00 * m12 - m10 * m02;
        let s2 = m00 * m13 - m10 * m03;
        let s3 = m01 * m12 - m11 * m02;
        let s4 = m01 * m13 - m11 * m03;
        let s5 = m02 * m13 - m12 * m03;
        // ...and of the bottom two rows
        let c5 = m22 * m33 - m32 * m23;
        let c4 = m21 * m33 - m31 * m23;
        let c3 = m21 * m32 - m31 * m22;
        let c2 = m20 * m33 - m30 * m23;
        let c1 = m20 * m32 - m30 * m22;
        let c0 = m20 * m31 - m30 * m21;

        let adj = [
            [
                m11 * c5 - m12 * c4 + m13 * c3,
                -m01 * c5 + m02 * c4 - m03 * c3,
                m31 * s5 - m32 * s4 + m33 * s3,
                -m21 * s5 + m22 * s4 - m23 * s3,
            ],
            [
                -m10 * c5 + m12 * c2 - m13 * c1,
                m00 * c5 - m02 * c2 + m03 * c1,
                -m30 * s5 + m32 * s2 - m33 * s1,
                m20 * s5 - m22 * s2 + m23 * s1,
            ],
            [
                m10 * c4 - m11 * c2 + m13 * c0,
                -m00 * c4 + m01 * c2 - m03 * c0,
                m30 * s4 - m31 * s2 + m33 * s0,
                -m20 * s4 + m21 * s2 - m23 * s0,
            ],
            [
                -m10 * c3 + m11 * c1 - m12 * c0,
                m00 * c3 - m01 * c1 + m02 * c0,
                -m30 * s3 + m31 * s1 - m32 * s0,
                m20 * s3 - m21 * s1 + m22 * s0,
            ],
        ];
        Ok(Matrix::new(adj.map(|row| row.map(|x| x / det))))
    }

    /// Converts a ray parameter `t` of `r_old` to the corresponding
    /// parameter of `r_new`, where `r_new` is `r_old` mapped by `self`.
    ///
    /// The point of `r_old` at `t` is mapped and divided, and the distance
    /// from the origin of `r_new` to the result is returned. If `t` is NaN,
    /// zero, or at least [`Scalar::MAX`] (including infinity), it is
    /// returned unchanged.
    pub fn transform_t(
        &self,
        r_old: &Ray3<Sc, S>,
        r_new: &Ray3<Sc, D>,
        t: Sc,
    ) -> Sc {
        if t.is_nan() || t == Sc::ZERO || t >= Sc::MAX {
            return t;
        }
        let p = self.apply_and_divide(&r_old.point_at(t));
        r_new.0.distance(&p)
    }
}

//
// Free functions
//

/// Returns a matrix scaling 2D space by the factors in `s`.
pub fn scale2<Sc: Scalar>(s: Vec2<Sc>) -> Mat3<Sc> {
    let [x, y] = s.0;
    let (z, o) = (Sc::ZERO, Sc::ONE);
    Matrix::new([[x, z, z], [z, y, z], [z, z, o]])
}

/// Returns a matrix translating 2D space by `t`.
pub fn translate2<Sc: Scalar>(t: Vec2<Sc>) -> Mat3<Sc> {
    let [x, y] = t.0;
    let (z, o) = (Sc::ZERO, Sc::ONE);
    Matrix::new([[o, z, x], [z, o, y], [z, z, o]])
}

/// Returns a matrix rotating 2D space counter-clockwise by `a`
/// about the origin.
///
/// # Examples
/// ```
/// use geoprim_core::assert_approx_eq;
/// use geoprim_core::math::{degs, pt2, rotate2};
///
/// let m = rotate2(degs(90.0));
/// assert_approx_eq!(m.apply(&pt2(1.0, 0.0)), pt2(0.0, 1.0));
/// ```
pub fn rotate2<Sc: Float>(a: Angle<Sc>) -> Mat3<Sc> {
    let (s, c) = a.sin_cos();
    let (z, o) = (Sc::ZERO, Sc::ONE);
    Matrix::new([[c, -s, z], [s, c, z], [z, z, o]])
}

/// Returns a matrix scaling 3D space by the factors in `s`.
pub fn scale3<Sc: Scalar>(s: Vec3<Sc>) -> Mat4<Sc> {
    let [x, y, w] = s.0;
    let (z, o) = (Sc::ZERO, Sc::ONE);
    Matrix::new([[x, z, z, z], [z, y, z, z], [z, z, w, z], [z, z, z, o]])
}

/// Returns a matrix translating 3D space by `t`.
pub fn translate3<Sc: Scalar>(t: Vec3<Sc>) -> Mat4<Sc> {
    let [x, y, w] = t.0;
    let (z, o) = (Sc::ZERO, Sc::ONE);
    Matrix::new([[o, z, z, x], [z, o, z, y], [z, z, o, w], [z, z, z, o]])
}

/// Returns a matrix rotating 3D space by `a` about the x axis,
/// following the right-hand rule.
pub fn rotate_x<Sc: Float>(a: Angle<Sc>) -> Mat4<Sc> {
    let (s, c) = a.sin_cos();
    let (z, o) = (Sc::ZERO, Sc::ONE);
    Matrix::new([[o, z, z, z], [z, c, -s, z], [z, s, c, z], [z, z, z, o]])
}

/// Returns a matrix rotating 3D space by `a` about the y axis,
/// following the right-hand rule.
pub fn rotate_y<Sc: Float>(a: Angle<Sc>) -> Mat4<Sc> {
    let (s, c) = a.sin_cos();
    let (z, o) = (Sc::ZERO, Sc::ONE);
    Matrix::new([[c, z, s, z], [z, o, z, z], [-s, z, c, z], [z, z, z, o]])
}

/// Returns a matrix rotating 3D space by `a` about the z axis,
/// following the right-hand rule.
pub fn rotate_z<Sc: Float>(a: Angle<Sc>) -> Mat4<Sc> {
    let (s, c) = a.sin_cos();
    let (z, o) = (Sc::ZERO, Sc::ONE);
    Matrix::new([[c, -s, z, z], [s, c, z, z], [z, z, o, z], [z, z, z, o]])
}

/// Returns a matrix rotating 3D space by `a` about `axis`,
/// following the right-hand rule.
///
/// `axis` need not be of unit length, but must be nonzero.
///
/// # Examples
/// ```
/// use geoprim_core::assert_approx_eq;
/// use geoprim_core::math::{degs, rotate, rotate_y, Vec3};
///
/// let a = degs(30.0);
/// assert_approx_eq!(rotate(Vec3::Y, a), rotate_y(a));
/// ```
pub fn rotate<Sc: Float>(axis: Vec3<Sc>, a: Angle<Sc>) -> Mat4<Sc> {
    let [x, y, w] = axis.normalize().0;
    let (s, c) = a.sin_cos();
    let t = Sc::ONE - c;
    let (z, o) = (Sc::ZERO, Sc::ONE);
    Matrix::new([
        [t * x * x + c, t * x * y - s * w, t * x * w + s * y, z],
        [t * x * y + s * w, t * y * y + c, t * y * w - s * x, z],
        [t * x * w - s * y, t * y * w + s * x, t * w * w + c, z],
        [z, z, z, o],
    ])
}

/// Returns a matrix placing a viewer at `eye`, looking toward `target`.
///
/// Builds an orthonormal frame with the forward axis `w` pointing from
/// `eye` to `target`, the right axis `u = up × w`, and the up axis
/// `v = w × u`. The frame forms the first three columns, and `eye` the
/// translation column, so the matrix maps from the viewer's local space
/// to the space `eye` and `target` are in.
///
/// `up` need not be of unit length or perpendicular to the forward axis,
/// but must not be parallel to it.
pub fn look_at<Sc: Float>(
    eye: Point3<Sc>,
    target: Point3<Sc>,
    up: Vec3<Sc>,
) -> Mat4<Sc> {
    let w = Vec3::direction_normalized(&eye, &target);
    let u = up.normalize().cross(&w).normalize();
    let v = w.cross(&u);
    let (z, o) = (Sc::ZERO, Sc::ONE);
    Matrix::new([
        [u.x(), v.x(), w.x(), eye.x()],
        [u.y(), v.y(), w.y(), eye.y()],
        [u.z(), v.z(), w.z(), eye.z()],
        [z, z, z, o],
    ])
}

/// Returns a perspective projection matrix.
///
/// `fov` is the vertical field of view, `aspect` the ratio of width to
/// height, and `near` and `far` the distances of the near and far
/// clipping planes. The projection looks toward the *positive* z axis:
/// the bottom row is `(0, 0, 1, 0)`, so the homogeneous coordinate of a
/// projected point equals its z coordinate. After the
/// [divide][Mat4::apply_and_divide], depth maps `near` to zero and `far`
/// to one.
///
/// # Examples
/// ```
/// use geoprim_core::assert_approx_eq;
/// use geoprim_core::math::{degs, perspective, pt3};
///
/// let m = perspective(degs(90.0), 1.0, 1.0, 10.0);
/// assert_approx_eq!(m.apply_and_divide(&pt3(0.0, 0.0, 1.0)).z(), 0.0);
/// assert_approx_eq!(m.apply_and_divide(&pt3(0.0, 0.0, 10.0)).z(), 1.0);
/// ```
pub fn perspective<Sc: Float>(
    fov: Angle<Sc>,
    aspect: Sc,
    near: Sc,
    far: Sc,
) -> Mat4<Sc> {
    let f = (fov / Sc::lit(2.0)).tan().recip();
    let depth = far - near;
    let (z, o) = (Sc::ZERO, Sc::ONE);
    Matrix::new([
        [f / aspect, z, z, z],
        [z, f, z, z],
        [z, z, far / depth, -far * near / depth],
        [z, z, o, z],
    ])
}

//
// Local trait impls
//

impl<Sc: ApproxEq, Map, const N: usize> ApproxEq<Self, Sc>
    for Matrix<[[Sc; N]; N], Map>
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

impl<R: Copy, M> Copy for Matrix<R, M> {}

impl<R: Clone, M> Clone for Matrix<R, M> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), Pd)
    }
}

impl<R: PartialEq, M> PartialEq for Matrix<R, M> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: Eq, M> Eq for Matrix<R, M> {}

impl<S: Debug, M: Debug + Default, const N: usize> Debug
    for Matrix<[[S; N]; N], M>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix<{:?}>[", M::default())?;
        for i in 0..N {
            writeln!(f, "    {:6.2?}", self.0[i])?;
        }
        write!(f, "]")
    }
}

impl<const DIM: usize, S, D> Copy for RealToReal<DIM, S, D> {}

impl<const DIM: usize, S, D> Clone for RealToReal<DIM, S, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<const DIM: usize, S, D> Default for RealToReal<DIM, S, D> {
    fn default() -> Self {
        Self(Pd)
    }
}

impl<const DIM: usize, S, D> PartialEq for RealToReal<DIM, S, D> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<const DIM: usize, S, D> Debug for RealToReal<DIM, S, D>
where
    S: Debug + Default,
    D: Debug + Default,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}->{:?}", S::default(), D::default())
    }
}

impl<const N: usize, S, M> From<[[S; N]; N]> for Matrix<[[S; N]; N], M> {
    fn from(els: [[S; N]; N]) -> Self {
        Self(els, Pd)
    }
}

impl<Sc, const N: usize, const DIM: usize, S, I, D>
    Mul<Matrix<[[Sc; N]; N], RealToReal<DIM, I, S>>>
    for Matrix<[[Sc; N]; N], RealToReal<DIM, S, D>>
where
    Sc: Scalar,
{
    type Output = Matrix<[[Sc; N]; N], RealToReal<DIM, I, D>>;

    /// Returns the composite transform `self` ∘ `rhs`.
    /// See [`compose`][Matrix::compose].
    fn mul(self, rhs: Matrix<[[Sc; N]; N], RealToReal<DIM, I, S>>) -> Self::Output {
        self.compose(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::assert_approx_eq;
    use crate::math::angle::degs;

    use super::*;

    #[derive(Debug, Default)]
    struct World;
    #[derive(Debug, Default)]
    struct Model;

    type WorldToModel = RealToReal<3, World, Model>;

    fn sample_mat4() -> Mat4 {
        Matrix::new([
            [2.0, 0.0, 1.0, 3.0],
            [1.0, 3.0, 0.0, -1.0],
            [0.0, 1.0, 4.0, 2.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    mod mat3 {
        use super::*;

        #[test]
        fn determinant() {
            let m: Mat3 = Matrix::new([
                [2.0, -3.0, 1.0],
                [2.0, 0.0, -1.0],
                [1.0, 4.0, 5.0],
            ]);
            assert_eq!(m.determinant(), 49.0);
            assert_eq!(Mat3::<f64>::identity().determinant(), 1.0);
        }

        #[test]
        fn inverse_of_rotation_is_transpose() {
            let m = rotate2(degs(37.0));
            let inv = m.inverse().unwrap();
            assert_approx_eq!(inv.0, m.transpose().0);
        }

        #[test]
        fn inverse_times_self_is_identity() {
            let m: Mat3 = Matrix::new([
                [2.0, -3.0, 1.0],
                [2.0, 0.0, -1.0],
                [1.0, 4.0, 5.0],
            ]);
            let inv = m.inverse().unwrap();
            assert_approx_eq!(m.compose(&inv), Mat3::identity());
            assert_approx_eq!(inv.compose(&m), Mat3::identity());
        }

        #[test]
        fn singular_is_not_invertible() {
            let m: Mat3 = Matrix::new([
                [1.0, 2.0, 3.0],
                [2.0, 4.0, 6.0],
                [0.0, 1.0, 1.0],
            ]);
            assert!(!m.is_invertible());
            assert!(matches!(m.inverse(), Err(Error::NotInvertible)));
        }

        #[test]
        fn apply_scale_translate() {
            let m = translate2(vec2(1.0, 2.0)).compose(&scale2(vec2(3.0, -1.0)));
            assert_eq!(m.apply(&pt2(1.0, 1.0)), pt2(4.0, 1.0));
            assert_eq!(m.apply_vec(&vec2(1.0, 1.0)), vec2(3.0, -1.0));
        }

        #[test]
        fn apply_and_divide_uses_last_row() {
            let m: Mat3 = Matrix::new([
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 2.0],
            ]);
            assert_eq!(m.apply(&pt2(4.0, 2.0)), pt2(4.0, 2.0));
            assert_eq!(m.apply_and_divide(&pt2(4.0, 2.0)), pt2(2.0, 1.0));
        }

        #[test]
        fn rotate_is_counter_clockwise() {
            let m = rotate2(degs(90.0));
            assert_approx_eq!(m.apply(&pt2(1.0, 0.0)), pt2(0.0, 1.0));
            assert_approx_eq!(m.apply_vec(&vec2(0.0, 1.0)), vec2(-1.0, 0.0));
        }

        #[test]
        fn apply_transpose() {
            let m: Mat3 = Matrix::new([
                [1.0, 2.0, 0.0],
                [3.0, 4.0, 0.0],
                [0.0, 0.0, 1.0],
            ]);
            assert_eq!(m.apply_transpose(&vec2(1.0, 1.0)), vec2(4.0, 6.0));
            assert_eq!(
                m.apply_transpose(&vec2(1.0, 1.0)),
                m.transpose().apply_vec(&vec2(1.0, 1.0))
            );
        }

        #[test]
        fn single_width() {
            let m: Mat3f = scale2(vec2(2.0, 4.0));
            let inv = m.inverse().unwrap();
            assert_eq!(inv.apply(&pt2(2.0, 4.0)), pt2(1.0, 1.0));
        }
    }

    mod mat4 {
        use super::*;

        #[test]
        fn determinant() {
            assert_eq!(sample_mat4().determinant(), 25.0);
            assert_eq!(scale3(vec3(2.0, 3.0, 4.0)).determinant(), 24.0);
        }

        #[test]
        fn inverse_of_diagonal() {
            let m = scale3(vec3(2.0, 4.0, -8.0));
            let inv = m.inverse().unwrap();
            assert_eq!(inv, scale3(vec3(0.5, 0.25, -0.125)).to());
        }

        #[test]
        fn inverse_of_translation() {
            let m = translate3(vec3(1.0, -2.0, 3.0));
            assert_eq!(m.inverse().unwrap(), translate3(vec3(-1.0, 2.0, -3.0)));
        }

        #[test]
        fn inverse_times_self_is_identity() {
            let m = sample_mat4();
            let inv = m.inverse().unwrap();
            assert_approx_eq!(m.compose(&inv), Mat4::identity());
            assert_approx_eq!(inv * m, Mat4::identity());
        }

        #[test]
        fn inverse_of_full_matrix() {
            let m: Mat4 = Matrix::new([
                [1.0, 1.0, 1.0, -1.0],
                [1.0, 1.0, -1.0, 1.0],
                [1.0, -1.0, 1.0, 1.0],
                [-1.0, 1.0, 1.0, 1.0],
            ]);
            assert_eq!(m.determinant(), -16.0);
            let inv = m.inverse().unwrap();
            assert_approx_eq!(inv.0, m.0.map(|r| r.map(|x| x / 4.0)));
        }

        #[test]
        fn singular_is_not_invertible() {
            let mut m = sample_mat4();
            m.0[2] = m.0[1];
            assert_eq!(m.determinant(), 0.0);
            assert!(!m.is_invertible());
            assert!(matches!(m.inverse(), Err(Error::NotInvertible)));
        }

        #[test]
        fn tiny_determinant_is_still_invertible() {
            let m = scale3(vec3(1e-100, 1e-100, 1e-100));
            assert!(m.determinant() > 0.0);
            assert!(m.is_invertible());
        }

        #[test]
        fn composition_order() {
            let t = translate3(vec3(1.0, 0.0, 0.0));
            let s = scale3(vec3(2.0, 2.0, 2.0));
            let p = pt3(1.0, 1.0, 1.0);

            assert_eq!(t.compose(&s).apply(&p), pt3(3.0, 2.0, 2.0));
            assert_eq!(s.then(&t).apply(&p), pt3(3.0, 2.0, 2.0));
            assert_eq!((t * s).apply(&p), pt3(3.0, 2.0, 2.0));
            assert_eq!((s * t).apply(&p), pt3(4.0, 2.0, 2.0));
        }

        #[test]
        fn apply_ignores_w_but_apply_and_divide_does_not() {
            let mut m = Mat4::<f64>::identity();
            m.0[3] = [0.0, 0.0, 0.0, 4.0];
            let p = pt3(4.0, 8.0, -4.0);
            assert_eq!(m.apply(&p), p);
            assert_eq!(m.apply_and_divide(&p), pt3(1.0, 2.0, -1.0));
        }

        #[test]
        fn apply_and_divide_by_zero_is_not_finite() {
            let mut m = Mat4::<f64>::identity();
            m.0[3] = [0.0; 4];
            assert!(!m.apply_and_divide(&pt3(1.0, 0.0, 0.0)).is_finite());
        }

        #[test]
        fn axis_rotations() {
            let p = pt3(1.0, 1.0, 1.0);
            assert_approx_eq!(rotate_x(degs(90.0)).apply(&p), pt3(1.0, -1.0, 1.0));
            assert_approx_eq!(rotate_y(degs(90.0)).apply(&p), pt3(1.0, 1.0, -1.0));
            assert_approx_eq!(rotate_z(degs(90.0)).apply(&p), pt3(-1.0, 1.0, 1.0));
        }

        #[test]
        fn axis_angle_matches_axis_rotations() {
            let a = degs(-63.0);
            assert_approx_eq!(rotate(Vec3::X, a), rotate_x(a));
            assert_approx_eq!(rotate(vec3(0.0, 3.0, 0.0), a), rotate_y(a));
            assert_approx_eq!(rotate(Vec3::Z, a), rotate_z(a));
        }

        #[test]
        fn axis_angle_about_diagonal() {
            let m = rotate(vec3(1.0, 1.0, 1.0), degs(120.0));
            assert_approx_eq!(m.apply_vec(&Vec3::X), Vec3::Y);
            assert_approx_eq!(m.apply_vec(&Vec3::Y), Vec3::Z);
        }

        #[test]
        fn look_at_along_z_is_identity() {
            let m = look_at(pt3(0.0, 0.0, 0.0), pt3(0.0, 0.0, 5.0), Vec3::Y);
            assert_approx_eq!(m, Mat4::identity());
        }

        #[test]
        fn look_at_frame_is_orthonormal() {
            let eye = pt3(1.0, 2.0, 3.0);
            let m = look_at(eye, pt3(-2.0, 0.5, 7.0), vec3(0.1, 2.0, 0.0));
            let [u, v, w] = [0, 1, 2].map(|i| {
                let [x, y, z, _] = m.col(i);
                vec3(x, y, z)
            });
            for a in [u, v, w] {
                assert_approx_eq!(a.len(), 1.0);
            }
            assert_approx_eq!(u.dot(&v), 0.0);
            assert_approx_eq!(v.dot(&w), 0.0);
            assert_approx_eq!(w.dot(&u), 0.0);
            assert_eq!(m.apply(&pt3(0.0, 0.0, 0.0)), eye);
        }

        #[test]
        fn perspective_w_row() {
            let m = perspective(degs(60.0), 1.5, 0.1, 100.0);
            assert_eq!(m.row(3), [0.0, 0.0, 1.0, 0.0]);
            let f = 1.0 / degs(30.0).tan();
            assert_approx_eq!(m.element(0, 0).unwrap(), f / 1.5);
            assert_approx_eq!(m.element(1, 1).unwrap(), f);
        }

        #[test]
        fn perspective_maps_near_and_far_planes() {
            let m = perspective(degs(90.0), 1.0, 2.0, 8.0);

            let near = m.apply_and_divide(&pt3(2.0, -2.0, 2.0));
            assert_approx_eq!(near, pt3(1.0, -1.0, 0.0));

            let far = m.apply_and_divide(&pt3(0.0, 8.0, 8.0));
            assert_approx_eq!(far, pt3(0.0, 1.0, 1.0));
        }

        #[test]
        fn apply_ray() {
            let m = translate3(vec3(1.0, 0.0, 0.0)).compose(&scale3(vec3(2.0, 2.0, 2.0)));
            let r = Ray(pt3(0.0, 1.0, 0.0), vec3(0.0, 0.0, 1.0));
            let Ray(o, d) = m.apply_ray(&r);
            assert_eq!(o, pt3(1.0, 2.0, 0.0));
            assert_eq!(d, vec3(0.0, 0.0, 2.0));
        }

        #[test]
        fn transform_t_rescales_distance() {
            let m = scale3(vec3(3.0, 3.0, 3.0));
            let r_old = Ray(pt3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
            let r_new = m.apply_ray(&r_old);
            assert_approx_eq!(m.transform_t(&r_old, &r_new, 2.0), 6.0);
        }

        #[test]
        fn transform_t_passes_through_special_values() {
            let m = scale3(vec3(3.0, 3.0, 3.0));
            let r = Ray(pt3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
            assert_eq!(m.transform_t(&r, &r, 0.0), 0.0);
            assert_eq!(m.transform_t(&r, &r, f64::MAX), f64::MAX);
            assert_eq!(m.transform_t(&r, &r, f64::INFINITY), f64::INFINITY);
            assert!(m.transform_t(&r, &r, f64::NAN).is_nan());
        }

        #[test]
        fn inverse_transpose_carries_normals() {
            let m = scale3(vec3(1.0, 4.0, 1.0));
            let n = vec3(0.0, 1.0, 1.0).normalize();
            let inv = m.inverse().unwrap();
            let n2 = inv.apply_transpose(&n);
            // The tangent (0, 1, -1) maps to (0, 4, -1)
            assert_approx_eq!(n2.dot(&vec3(0.0, 4.0, -1.0)), 0.0);
            assert_eq!(n2, inv.transpose().apply_vec(&n));
        }

        #[test]
        fn map_types() {
            let m: Mat4<f64, WorldToModel> = translate3(vec3(1.0, 2.0, 3.0)).to();
            let p: Point3<f64, World> = pt3(0.0, 0.0, 0.0).to();
            let q: Point3<f64, Model> = m.apply(&p);
            let back: Point3<f64, World> = m.inverse().unwrap().apply(&q);
            assert_eq!(back, p);
        }
    }

    #[test]
    fn element_access() {
        let m = sample_mat4();
        assert_eq!(m.element(2, 3).ok(), Some(2.0));
        assert_eq!(m.row(1), [1.0, 3.0, 0.0, -1.0]);
        assert_eq!(m.col(0), [2.0, 1.0, 0.0, 0.0]);
        assert!(matches!(
            m.element(4, 0),
            Err(Error::IndexOutOfRange { index: 4, dim: 4 })
        ));
        assert!(matches!(
            m.element(0, 7),
            Err(Error::IndexOutOfRange { index: 7, dim: 4 })
        ));
    }

    #[test]
    fn transpose() {
        let m = sample_mat4();
        assert_eq!(m.transpose().row(0), m.col(0));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn matrix_debug() {
        let m: Mat4 = [
            [0.0, 1.0, 2.0, 3.0],
            [10.0, 11.0, 12.0, 13.0],
            [20.0, 21.0, 22.0, 23.0],
            [30.0, 31.0, 32.0, 33.0],
        ]
        .into();

        let expected = r#"Matrix<()->()>[
    [  0.00,   1.00,   2.00,   3.00]
    [ 10.00,  11.00,  12.00,  13.00]
    [ 20.00,  21.00,  22.00,  23.00]
    [ 30.00,  31.00,  32.00,  33.00]
]"#;

        assert_eq!(format!("{:?}", m), expected);
    }
}
