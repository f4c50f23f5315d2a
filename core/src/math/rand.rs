//! Pseudo-random number generation and distributions.
//!
//! The direction distributions here feed pseudo-random points of the unit
//! square to the deterministic maps in [`sample`][crate::math::sample].

use core::{array, ops::Range};

use crate::math::{
    point::{Point, Point2, Point3, pt2},
    sample,
    vec::{Vec3, Vector},
};

//
// Traits and types
//

type DefaultRng = Xorshift64;

/// Trait for generating values sampled from a probability distribution.
pub trait Distrib<R = DefaultRng>: Clone {
    /// The type of the elements of the sample space of `Self`, also called
    /// "outcomes".
    type Sample;

    /// Returns a pseudo-random value sampled from `self`.
    fn sample(&self, rng: &mut R) -> Self::Sample;

    /// Returns an iterator that yields samples from `self`.
    fn iter(&self, rng: R) -> Iter<Self, R> {
        Iter(self.clone(), rng)
    }
}

/// A pseudo-random number generator (PRNG) that uses a [Xorshift algorithm][^1]
/// to generate 64 bits of randomness at a time, represented by a `u64`.
///
/// Xorshift is a type of linear-feedback shift register that uses only three
/// left- or right-shifts and three xor operations per generated number.
/// Xorshift64 has a period of 2<sup>64</sup>-1: it yields every number in the
/// interval [1, 2<sup>64</sup>) exactly once before repeating.
///
/// [^1]: Marsaglia, G. (2003). Xorshift RNGs. Journal of Statistical Software,
///     8(14), 1–6. <https://doi.org/10.18637/jss.v008.i14>
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct Xorshift64(pub u64);

/// A uniform distribution of values in the given half-open range.
#[derive(Clone, Debug)]
pub struct Uniform<T>(pub Range<T>);

/// A uniform distribution of points inside the unit disk.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnitDisk;

/// A uniform distribution of directions on the unit sphere.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnitSphere;

/// A uniform distribution of directions on the upper (z ≥ 0) unit
/// hemisphere.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnitHemisphere;

/// A cosine-weighted distribution of directions on the upper unit
/// hemisphere.
#[derive(Copy, Clone, Debug, Default)]
pub struct CosineHemisphere;

/// A distribution of directions on the upper unit hemisphere with density
/// proportional to cosᵉ θ, where e is the wrapped exponent.
#[derive(Copy, Clone, Debug)]
pub struct PowerCosineHemisphere(pub f64);

/// A uniform distribution of directions within a cone about the z axis,
/// given the cosine of the cone's half-angle.
#[derive(Copy, Clone, Debug)]
pub struct UniformCone(pub f64);

/// A uniform distribution of barycentric coordinates over a triangle.
#[derive(Copy, Clone, Debug, Default)]
pub struct UniformTriangle;

/// Iterator returned by the [Distrib::iter()] method.
pub struct Iter<D, R>(D, R);

//
// Inherent impls
//

impl Xorshift64 {
    /// A random 64-bit prime, used to initialize the generator returned by
    /// [`Xorshift64::default()`].
    pub const DEFAULT_SEED: u64 = 378682147834061;

    /// Returns a new `Xorshift64` seeded by the given number.
    ///
    /// Two `Xorshift64` instances generate the same sequence of pseudo-random
    /// numbers if and only if they were created with the same seed.
    ///
    /// # Examples
    /// ```
    /// # use geoprim_core::math::rand::Xorshift64;
    /// let mut g = Xorshift64::from_seed(123);
    /// assert_eq!(g.next_bits(), 133101616827);
    /// assert_eq!(g.next_bits(), 12690785413091508870);
    /// assert_eq!(g.next_bits(), 7516749944291143043);
    /// ```
    ///
    /// # Panics
    ///
    /// If `seed` equals 0.
    pub fn from_seed(seed: u64) -> Self {
        assert_ne!(seed, 0, "xorshift seed cannot be zero");
        Self(seed)
    }

    /// Returns a new `Xorshift64` seeded by the current system time.
    ///
    /// Falls back to [`DEFAULT_SEED`][Self::DEFAULT_SEED] if the system
    /// clock reads earlier than the Unix epoch.
    #[cfg(feature = "std")]
    pub fn from_time() -> Self {
        let seed = std::time::SystemTime::UNIX_EPOCH
            .elapsed()
            .map_or(Self::DEFAULT_SEED, |t| t.as_micros() as u64);
        Self(seed.max(1))
    }

    /// Returns 64 bits of pseudo-randomness.
    ///
    /// Successive calls to this function (with the same `self`) will yield
    /// every value in the interval [1, 2<sup>64</sup>) exactly once before
    /// starting to repeat the sequence.
    pub fn next_bits(&mut self) -> u64 {
        let Self(x) = self;
        *x ^= *x << 13;
        *x ^= *x >> 7;
        *x ^= *x << 17;
        *x
    }
}

//
// Foreign trait impls
//

impl<D: Distrib> Iterator for Iter<D, DefaultRng> {
    type Item = D::Sample;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.sample(&mut self.1))
    }
}

impl Default for Xorshift64 {
    /// Returns a `Xorshift64` seeded by [`DEFAULT_SEED`][Self::DEFAULT_SEED].
    fn default() -> Self {
        Self::from_seed(Self::DEFAULT_SEED)
    }
}

//
// Local trait impls
//

impl Distrib for Uniform<i32> {
    type Sample = i32;

    /// Returns a uniformly distributed `i32` in the given range.
    ///
    /// Uses the high 32 bits of the generator output scaled to the width
    /// of the range by a widening multiply.
    fn sample(&self, rng: &mut DefaultRng) -> i32 {
        let Range { start, end } = self.0;
        let width = end.wrapping_sub(start) as u32 as u64;
        let offset = ((rng.next_bits() >> 32) * width) >> 32;
        start.wrapping_add(offset as i32)
    }
}

impl Distrib for Uniform<f32> {
    type Sample = f32;

    /// Returns a uniformly distributed `f32` in the given range.
    fn sample(&self, rng: &mut DefaultRng) -> f32 {
        let Range { start, end } = self.0;
        // Bit repr of a random f32 in range 1.0..2.0
        let bits = 127 << 23 | rng.next_bits() >> 41;
        let unit = f32::from_bits(bits as u32) - 1.0;
        unit * (end - start) + start
    }
}

impl Distrib for Uniform<f64> {
    type Sample = f64;

    /// Returns a uniformly distributed `f64` in the given range.
    fn sample(&self, rng: &mut DefaultRng) -> f64 {
        let Range { start, end } = self.0;
        // Bit repr of a random f64 in range 1.0..2.0
        let bits = 1023 << 52 | rng.next_bits() >> 12;
        let unit = f64::from_bits(bits) - 1.0;
        unit * (end - start) + start
    }
}

impl<T, O, const N: usize> Distrib for Uniform<[T; N]>
where
    T: Copy,
    Uniform<T>: Distrib<Sample = O>,
{
    type Sample = [O; N];

    /// Returns an array of values that represents a uniformly distributed point
    /// within the N-dimensional rectangular volume bounded by `self.0`.
    fn sample(&self, rng: &mut DefaultRng) -> [O; N] {
        array::from_fn(|i| Uniform(self.0.start[i]..self.0.end[i]).sample(rng))
    }
}

impl<Sc, Sp, const DIM: usize> Distrib for Uniform<Vector<[Sc; DIM], Sp>>
where
    Sc: Copy,
    Uniform<[Sc; DIM]>: Distrib<Sample = [Sc; DIM]>,
{
    type Sample = Vector<[Sc; DIM], Sp>;

    /// Returns a uniformly distributed vector within the rectangular volume
    /// bounded by the range `self.0`.
    fn sample(&self, rng: &mut DefaultRng) -> Self::Sample {
        Uniform(self.0.start.0..self.0.end.0).sample(rng).into()
    }
}

impl<Sc, Sp, const DIM: usize> Distrib for Uniform<Point<[Sc; DIM], Sp>>
where
    Sc: Copy,
    Uniform<[Sc; DIM]>: Distrib<Sample = [Sc; DIM]>,
{
    type Sample = Point<[Sc; DIM], Sp>;

    /// Returns a uniformly distributed point within the rectangular volume
    /// bounded by the range `self.0`.
    fn sample(&self, rng: &mut DefaultRng) -> Self::Sample {
        Uniform(self.0.start.0..self.0.end.0).sample(rng).into()
    }
}

/// Returns a point uniformly distributed in the unit square [0, 1)².
fn unit_square(rng: &mut DefaultRng) -> Point2 {
    Uniform(pt2(0.0, 0.0)..pt2(1.0, 1.0)).sample(rng)
}

impl Distrib for UnitDisk {
    type Sample = Point2;

    /// Returns a point uniformly distributed within the unit disk.
    fn sample(&self, rng: &mut DefaultRng) -> Point2 {
        sample::sample_disk_concentric(unit_square(rng))
    }
}

impl Distrib for UnitSphere {
    type Sample = Vec3;

    /// Returns a direction uniformly distributed on the unit sphere.
    fn sample(&self, rng: &mut DefaultRng) -> Vec3 {
        sample::sphere_uniform(unit_square(rng))
    }
}

impl Distrib for UnitHemisphere {
    type Sample = Vec3;

    /// Returns a direction uniformly distributed on the upper hemisphere.
    fn sample(&self, rng: &mut DefaultRng) -> Vec3 {
        sample::hemisphere_uniform(unit_square(rng))
    }
}

impl Distrib for CosineHemisphere {
    type Sample = Vec3;

    /// Returns a cosine-distributed direction on the upper hemisphere.
    fn sample(&self, rng: &mut DefaultRng) -> Vec3 {
        sample::hemisphere_cosine(unit_square(rng))
    }
}

impl Distrib for PowerCosineHemisphere {
    type Sample = Vec3;

    fn sample(&self, rng: &mut DefaultRng) -> Vec3 {
        sample::hemisphere_power_cosine(unit_square(rng), self.0)
    }
}

impl Distrib for UniformCone {
    type Sample = Vec3;

    fn sample(&self, rng: &mut DefaultRng) -> Vec3 {
        sample::cone_uniform(unit_square(rng), self.0)
    }
}

impl Distrib for UniformTriangle {
    type Sample = Point3;

    /// Returns barycentric coordinates uniformly distributed over a
    /// triangle.
    fn sample(&self, rng: &mut DefaultRng) -> Point3 {
        sample::sample_triangle_uniform(unit_square(rng))
    }
}
