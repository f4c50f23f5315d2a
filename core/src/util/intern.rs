//! Caller-owned interning of frequently repeated values.
//!
//! An [`Interner`] maps each distinct value to a single canonical copy.
//! Values are compared by the bit patterns of their components, so `0.0` and
//! `-0.0` are distinct keys while two NaNs with identical payloads coincide.
//!
//! The table grows without bound until [`clear`][Interner::clear]ed. It is
//! not synchronized; share it across threads behind a lock if needed.

use core::{fmt::Debug, hash::Hash};

use hashbrown::HashMap;

use crate::math::{Matrix, Point, Vector, float::Scalar};

/// Trait for values that can be stored in an [`Interner`].
pub trait Intern: Copy {
    /// The hashable identity of a value.
    type Key: Copy + Eq + Hash + Debug;

    /// Returns the key identifying `self`.
    fn key(&self) -> Self::Key;
}

/// An unbounded table of canonical values.
///
/// # Examples
/// ```
/// use geoprim_core::math::{Point3, pt3};
/// use geoprim_core::util::intern::Interner;
///
/// let mut pts = Interner::<Point3>::new();
/// let a = pts.intern(pt3(1.0, 2.0, 3.0));
/// let b = pts.intern(pt3(1.0, 2.0, 3.0));
/// assert_eq!(a, b);
/// assert_eq!(pts.len(), 1);
///
/// pts.clear();
/// assert!(pts.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Interner<T: Intern> {
    table: HashMap<T::Key, T>,
}

impl<T: Intern> Interner<T> {
    /// Returns a new, empty interner.
    pub fn new() -> Self {
        Self { table: HashMap::new() }
    }

    /// Returns the canonical copy of `value`, inserting `value` itself if no
    /// equal value has been interned yet.
    pub fn intern(&mut self, value: T) -> T {
        *self.table.entry(value.key()).or_insert_with(|| {
            tracing::trace!(target: "geoprim::intern", key = ?value.key(), "insert");
            value
        })
    }

    /// Returns whether a value equal to `value` has been interned.
    pub fn contains(&self, value: &T) -> bool {
        self.table.contains_key(&value.key())
    }

    /// Returns the number of distinct interned values.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns whether `self` holds no values.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Removes every interned value.
    pub fn clear(&mut self) {
        tracing::trace!(target: "geoprim::intern", len = self.len(), "clear");
        self.table.clear();
    }
}

impl<T: Intern> Default for Interner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Sc: Scalar, Sp, const N: usize> Intern for Vector<[Sc; N], Sp> {
    type Key = [Sc::Bits; N];

    fn key(&self) -> Self::Key {
        self.0.map(Scalar::bits)
    }
}

impl<Sc: Scalar, Sp, const N: usize> Intern for Point<[Sc; N], Sp> {
    type Key = [Sc::Bits; N];

    fn key(&self) -> Self::Key {
        self.0.map(Scalar::bits)
    }
}

impl<Sc: Scalar, M, const N: usize> Intern for Matrix<[[Sc; N]; N], M> {
    type Key = [[Sc::Bits; N]; N];

    fn key(&self) -> Self::Key {
        self.0.map(|row| row.map(Scalar::bits))
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{
        Mat4, Point2f, Vec2i, Vec3, pt2, translate3, vec2, vec3,
    };

    use super::*;

    #[test]
    fn equal_values_share_an_entry() {
        let mut vs = Interner::<Vec3>::new();
        vs.intern(vec3(1.0, 2.0, 3.0));
        vs.intern(vec3(1.0, 2.0, 3.0));
        vs.intern(vec3(3.0, 2.0, 1.0));
        assert_eq!(vs.len(), 2);
        assert!(vs.contains(&vec3(3.0, 2.0, 1.0)));
        assert!(!vs.contains(&vec3(0.0, 0.0, 0.0)));
    }

    #[test]
    fn signed_zeros_are_distinct() {
        let mut pts = Interner::<Point2f>::new();
        let a = pts.intern(pt2(0.0, 0.0));
        let b = pts.intern(pt2(-0.0, 0.0));
        assert_eq!(pts.len(), 2);
        assert_eq!(a.x().to_bits(), 0.0f32.to_bits());
        assert_eq!(b.x().to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn nans_coincide() {
        let mut vs = Interner::<Vec3>::default();
        vs.intern(vec3(f64::NAN, 0.0, 0.0));
        vs.intern(vec3(f64::NAN, 0.0, 0.0));
        assert_eq!(vs.len(), 1);
    }

    #[test]
    fn int_vectors() {
        let mut vs = Interner::<Vec2i>::new();
        for i in 0..10 {
            vs.intern(vec2(i % 3, 0));
        }
        assert_eq!(vs.len(), 3);
    }

    #[test]
    fn matrices() {
        let mut ms = Interner::<Mat4>::new();
        let m = translate3(vec3(1.0, 2.0, 3.0));
        assert_eq!(ms.intern(m), m);
        assert_eq!(ms.intern(Mat4::identity()), Mat4::identity());
        assert_eq!(ms.intern(m), m);
        assert_eq!(ms.len(), 2);
    }

    #[test]
    fn clear_empties() {
        let mut vs = Interner::<Vec3>::new();
        vs.intern(vec3(1.0, 0.0, 0.0));
        vs.clear();
        assert!(vs.is_empty());
        assert!(!vs.contains(&vec3(1.0, 0.0, 0.0)));
    }
}
