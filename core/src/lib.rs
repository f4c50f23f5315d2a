//! Core functionality of the `geoprim` project.
//!
//! Includes a strongly typed math library with vectors, points, matrices,
//! and angles, generic over `f64`, `f32` and `i32` components; direction
//! sampling and pseudo-random numbers; rays; interning of repeated values;
//! and fixed-width binary framing.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available items requiring I/O or timekeeping, and uses the
//!   standard library for floating-point functions not included in `core`,
//!   such as square roots and trigonometric functions.
//!
//!   If this feature is disabled, the crate only depends on `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate, for `no_std` targets.
//!
//! `std` is enabled by default. At least one of `std` and `libm` must be
//! enabled.

#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("one of the features `std` or `libm` must be enabled");

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

pub mod error;
pub mod geom;
pub mod math;
pub mod util;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::math::{
        Affine, Angle, ApproxEq, Distrib, Float, Lerp, Linear, Mat3, Mat4,
        Matrix, Point, Point2, Point3, Scalar, Vec2, Vec3, Vector, degs,
        pt2, pt3, rads, splat, turns, vec2, vec3,
    };

    pub use crate::geom::{Ray, Ray2, Ray3};

    pub use crate::util::intern::Interner;
    #[cfg(feature = "std")]
    pub use crate::util::io::{Decode, Encode};

    pub use crate::Error;
}
