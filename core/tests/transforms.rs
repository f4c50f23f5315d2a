use std::io::ErrorKind;

use geoprim_core::assert_approx_eq;
use geoprim_core::geom::Ray;
use geoprim_core::math::{
    Mat3, Mat3d, Mat4, Point2, Point3, Vec3f, degs, look_at, perspective, pt2,
    pt3, rads, rotate, rotate_z, scale2, scale3, translate2, translate3, vec2,
    vec3,
};
use geoprim_core::util::io::Decode;
use geoprim_core::{Error, Result};

#[test]
fn translate_then_scale_2d_point() {
    let p: Point2 = pt2(1.0, 2.0);
    assert_eq!(translate2(vec2(1.0, 2.0)).apply(&p), pt2(2.0, 4.0));
    assert_eq!(scale2(vec2(1.0, 2.0)).apply(&p), pt2(1.0, 4.0));
}

#[test]
fn composition_applies_right_operand_first() {
    let s = scale2(vec2(2.0, 3.0));
    let t = translate2(vec2(1.0, -1.0));
    let p = pt2(1.0, 1.0);

    // Scale, then translate
    assert_eq!((t * s).apply(&p), pt2(3.0, 2.0));
    assert_eq!(s.then(&t).apply(&p), pt2(3.0, 2.0));
    // Translate, then scale
    assert_eq!((s * t).apply(&p), pt2(4.0, 0.0));
}

#[test]
fn composition_3d() {
    let m = translate3(vec3(0.0, 0.0, 5.0)) * scale3(vec3(2.0, 2.0, 2.0));
    assert_eq!(m.apply(&pt3(1.0, 1.0, 1.0)), pt3(2.0, 2.0, 7.0));
}

#[test]
fn refraction_at_unit_eta_passes_straight_through() {
    // The refraction formula yields `d` itself here, not its negation
    let d: Vec3f = vec3(0.0, 0.0, -1.0);
    let n = vec3(0.0, 0.0, 1.0);
    assert_eq!(d.refract(&n, 1.0), Some(d));
}

#[test]
fn total_internal_reflection_has_no_refraction() {
    let d = vec3(1.0, 0.0, -0.1).normalize();
    let n = vec3(0.0, 0.0, 1.0);
    assert_eq!(d.refract(&n, 1.5), None);
}

#[test]
fn reflection_sign_conventions() {
    let d = vec3(1.0, -1.0, 0.0);
    let n = vec3(0.0, 1.0, 0.0);
    // Heading into the surface: mirrored back out
    assert_eq!(d.reflect(&n, true), vec3(1.0, 1.0, 0.0));
    // Heading away from it: the negated mirror direction
    assert_eq!(d.reflect(&n, false), vec3(-1.0, -1.0, 0.0));
}

#[test]
fn any_three_points_are_coplanar() -> Result<()> {
    let pts = [pt3(1.0, 2.0, 3.0), pt3(-4.0, 0.5, 9.0), pt3(0.0, 0.0, -7.0)];
    assert!(Point3::coplanar(&pts)?);
    Ok(())
}

#[test]
fn off_plane_point_is_not_coplanar() -> Result<()> {
    let a = pt3(0.0, 0.0, 0.0);
    let b = pt3(1.0, 0.0, 0.0);
    let c = pt3(0.0, 1.0, 0.0);
    assert!(Point3::coplanar(&[a, b, c, pt3(3.0, -2.0, 0.0)])?);
    assert!(!Point3::coplanar(&[a, b, c, pt3(1.0, 1.0, 0.5)])?);
    Ok(())
}

#[test]
fn coplanar_needs_three_points() {
    let res = Point3::coplanar(&[pt3(0.0, 0.0, 0.0), pt3(1.0, 0.0, 0.0)]);
    assert!(matches!(
        res,
        Err(Error::TooFewPoints { expected: 3, actual: 2 })
    ));
}

#[test]
fn component_out_of_range() {
    let p = pt2(1.0, 2.0);
    assert_eq!(p.component(1).ok(), Some(2.0));
    assert!(matches!(
        p.component(2),
        Err(Error::IndexOutOfRange { index: 2, dim: 2 })
    ));
}

#[test]
fn singular_matrix_has_no_inverse() {
    let m: Mat3d = scale2(vec2(1.0, 0.0));
    assert!(!m.is_invertible());
    assert!(matches!(m.inverse(), Err(Error::NotInvertible)));
}

#[test]
fn tiny_determinant_is_still_invertible() {
    let m: Mat4 = scale3(vec3(1e-100, 1e-100, 1e-100));
    assert!(m.is_invertible());
    assert!(m.inverse().is_ok());
}

#[test]
fn inverse_transpose_carries_normals() -> Result<()> {
    // Non-uniform scale squashes a 45° surface; its normal must follow
    let m = scale3(vec3(2.0, 1.0, 1.0));
    let n = vec3(1.0, 1.0, 0.0);
    let tangent = vec3(1.0, -1.0, 0.0);

    let n_new = m.inverse()?.transpose().apply_vec(&n);
    let t_new = m.apply_vec(&tangent);
    assert_approx_eq!(n_new.dot(&t_new), 0.0);
    Ok(())
}

#[test]
fn rotation_about_axis_matches_rotate_z() {
    let a = rotate(vec3(0.0, 0.0, 3.0), degs(30.0));
    let b = rotate_z(rads(core::f64::consts::FRAC_PI_6));
    assert_approx_eq!(a, b);
}

#[test]
fn look_at_maps_origin_to_eye() {
    let eye = pt3(1.0, 2.0, 3.0);
    let m = look_at(eye, pt3(1.0, 2.0, 10.0), vec3(0.0, 1.0, 0.0));
    assert_approx_eq!(m.apply(&pt3(0.0, 0.0, 0.0)), eye);
    assert_approx_eq!(m.apply_vec(&vec3(0.0, 0.0, 1.0)), vec3(0.0, 0.0, 1.0));
}

#[test]
fn perspective_divides_by_view_depth() {
    let m = perspective(degs(90.0), 1.0, 1.0, 100.0);
    assert_eq!(m.row(3), [0.0, 0.0, 1.0, 0.0]);

    let near = m.apply_and_divide(&pt3(0.0, 0.0, 1.0));
    let far = m.apply_and_divide(&pt3(0.0, 0.0, 100.0));
    assert_approx_eq!(near.z(), 0.0);
    assert_approx_eq!(far.z(), 1.0);

    let p = m.apply_and_divide(&pt3(2.0, -2.0, 4.0));
    assert_approx_eq!(p.x(), 0.5);
    assert_approx_eq!(p.y(), -0.5);
}

#[test]
fn transform_t_between_spaces() {
    let m = scale3(vec3(3.0, 3.0, 3.0));
    let r_old = Ray(pt3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
    let r_new = m.apply_ray(&r_old);
    assert_approx_eq!(m.transform_t(&r_old, &r_new, 2.0), 6.0);
    assert!(m.transform_t(&r_old, &r_new, f64::NAN).is_nan());
    assert_eq!(m.transform_t(&r_old, &r_new, 0.0), 0.0);
    assert_eq!(m.transform_t(&r_old, &r_new, f64::MAX), f64::MAX);
}

#[test]
fn empty_stream_is_io_error() {
    let empty: &[u8] = &[];
    let res = Point2::<f64>::decode(&mut &empty[..]);
    assert!(matches!(
        res,
        Err(Error::Io(e)) if e.kind() == ErrorKind::UnexpectedEof
    ));
    let res = Mat3::<f32>::decode(&mut &empty[..]);
    assert!(res.is_err());
}
