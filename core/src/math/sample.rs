//! Deterministic sampling maps for Monte Carlo integration.
//!
//! Each function maps a point `u` of the unit square `[0, 1)²` to a point
//! or direction in some domain by inverting the domain's cumulative
//! distribution. If `u` is uniformly distributed, so is the result (or
//! distributed according to the matching PDF, for the non-uniform maps).
//! The functions contain no randomness of their own: see [`rand`] for
//! distributions that draw `u` from a pseudo-random generator.
//!
//! Directions are expressed in a local frame whose z axis is the
//! "up" direction of the hemisphere or the axis of the cone.
//!
//! [`rand`]: crate::math::rand

use crate::math::{
    float::{self, Float},
    point::{Point2, Point3, pt2, pt3},
    vec::{Vec3, vec3},
};

/// Returns the direction at polar angle θ and azimuth φ, given cos θ.
fn spherical_dir<Sc: Float>(cos_theta: Sc, phi: Sc) -> Vec3<Sc> {
    let sin_theta = float::max(Sc::ZERO, Sc::ONE - cos_theta * cos_theta).sqrt();
    vec3(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}

/// Maps `u` to a direction uniformly distributed on the upper
/// (z ≥ 0) unit hemisphere.
///
/// # Examples
/// ```
/// use geoprim_core::math::{pt2, vec3, sample::hemisphere_uniform};
///
/// assert_eq!(hemisphere_uniform(pt2(0.0, 0.0)), vec3(1.0, 0.0, 0.0));
/// ```
pub fn hemisphere_uniform<Sc: Float>(u: Point2<Sc>) -> Vec3<Sc> {
    spherical_dir(u.x(), Sc::TAU * u.y())
}

/// Returns the probability density of [`hemisphere_uniform`],
/// which is 1/(2π) everywhere on the hemisphere.
pub fn hemisphere_uniform_pdf<Sc: Float>() -> Sc {
    Sc::TAU.recip()
}

/// Maps `u` to a direction on the upper unit hemisphere, distributed
/// with density proportional to the cosine of the polar angle.
pub fn hemisphere_cosine<Sc: Float>(u: Point2<Sc>) -> Vec3<Sc> {
    let cos_theta = (Sc::ONE - u.x()).sqrt();
    spherical_dir(cos_theta, Sc::TAU * u.y())
}

/// Returns the probability density of [`hemisphere_cosine`] for a
/// direction whose polar angle has cosine `cos_theta`: cos θ / π.
pub fn hemisphere_cosine_pdf<Sc: Float>(cos_theta: Sc) -> Sc {
    cos_theta / Sc::PI
}

/// Maps `u` to a direction on the upper unit hemisphere, distributed
/// with density proportional to cosᵉ θ, where e is `exponent`.
///
/// An exponent of zero gives the uniform distribution, an exponent of one
/// the cosine distribution, and larger exponents concentrate the
/// directions increasingly around the z axis.
pub fn hemisphere_power_cosine<Sc: Float>(
    u: Point2<Sc>,
    exponent: Sc,
) -> Vec3<Sc> {
    let cos_theta = (Sc::ONE - u.y()).powf((exponent + Sc::ONE).recip());
    spherical_dir(cos_theta, Sc::TAU * u.x())
}

/// Returns the probability density of [`hemisphere_power_cosine`] for a
/// direction whose polar angle has cosine `cos_theta`:
/// (e + 1) / 2π · cosᵉ θ.
pub fn hemisphere_power_cosine_pdf<Sc: Float>(cos_theta: Sc, exponent: Sc) -> Sc {
    (exponent + Sc::ONE) / Sc::TAU * cos_theta.powf(exponent)
}

/// Maps `u` to a direction uniformly distributed on the unit sphere.
///
/// # Examples
/// ```
/// use geoprim_core::math::{pt2, vec3, sample::sphere_uniform};
///
/// assert_eq!(sphere_uniform(pt2(0.0, 0.0)), vec3(0.0, 0.0, 1.0));
/// ```
pub fn sphere_uniform<Sc: Float>(u: Point2<Sc>) -> Vec3<Sc> {
    let z = Sc::ONE - Sc::lit(2.0) * u.x();
    spherical_dir(z, Sc::TAU * u.y())
}

/// Returns the probability density of [`sphere_uniform`],
/// which is 1/(4π) everywhere on the sphere.
pub fn sphere_uniform_pdf<Sc: Float>() -> Sc {
    (Sc::lit(2.0) * Sc::TAU).recip()
}

/// Maps `u` to a direction uniformly distributed within the cone about
/// the z axis whose half-angle has cosine `cos_theta_max`.
pub fn cone_uniform<Sc: Float>(u: Point2<Sc>, cos_theta_max: Sc) -> Vec3<Sc> {
    let cos_theta = (Sc::ONE - u.x()) + u.x() * cos_theta_max;
    spherical_dir(cos_theta, Sc::TAU * u.y())
}

/// Returns the probability density of [`cone_uniform`], constant within
/// the cone: 1 / (2π (1 - cos θₘₐₓ)).
///
/// A degenerate cone with `cos_theta_max` equal to one has infinite
/// density.
pub fn cone_uniform_pdf<Sc: Float>(cos_theta_max: Sc) -> Sc {
    (Sc::TAU * (Sc::ONE - cos_theta_max)).recip()
}

/// Maps `u` to barycentric coordinates uniformly distributed over a
/// triangle.
///
/// The returned coordinates `(b0, b1, b2)` sum to one and can be passed to
/// [`Point::barycentric_interpolation`][crate::math::Point::barycentric_interpolation]
/// to get a point within a concrete triangle.
///
/// # Examples
/// ```
/// use geoprim_core::math::{pt2, pt3, sample::sample_triangle_uniform};
///
/// assert_eq!(sample_triangle_uniform(pt2(0.0, 0.5)), pt3(1.0, 0.0, 0.0));
/// assert_eq!(sample_triangle_uniform(pt2(0.25, 0.5)), pt3(0.5, 0.25, 0.25));
/// ```
pub fn sample_triangle_uniform<Sc: Float>(u: Point2<Sc>) -> Point3<Sc> {
    let su0 = u.x().sqrt();
    let b0 = Sc::ONE - su0;
    let b1 = u.y() * su0;
    pt3(b0, b1, Sc::ONE - b0 - b1)
}

/// Maps `u` to a point uniformly distributed in the unit disk, using the
/// concentric mapping of Shirley and Chiu.
///
/// Unlike the naive polar mapping, the concentric mapping preserves
/// relative areas and adjacency, so stratified input points stay
/// well-stratified.
///
/// # Examples
/// ```
/// use geoprim_core::math::{pt2, sample::sample_disk_concentric};
///
/// assert_eq!(sample_disk_concentric(pt2(0.5, 0.5)), pt2(0.0, 0.0));
/// ```
pub fn sample_disk_concentric<Sc: Float>(u: Point2<Sc>) -> Point2<Sc> {
    let two = Sc::lit(2.0);
    let ox = two * u.x() - Sc::ONE;
    let oy = two * u.y() - Sc::ONE;
    if ox == Sc::ZERO && oy == Sc::ZERO {
        return pt2(Sc::ZERO, Sc::ZERO);
    }
    let quarter_pi = Sc::PI / Sc::lit(4.0);
    let (r, theta) = if ox.abs() > oy.abs() {
        (ox, quarter_pi * (oy / ox))
    } else {
        (oy, Sc::PI / two - quarter_pi * (ox / oy))
    };
    pt2(r * theta.cos(), r * theta.sin())
}
