//! Fixed-width binary framing of geometry values.
//!
//! Every value is written as its scalar fields in declaration order, each in
//! big-endian byte order: 8 bytes per `f64`, 4 bytes per `f32` or `i32`.
//! There is no length prefix or version tag; the reader must know the type
//! it expects. Matrices are written row by row, rays as origin followed by
//! direction.
//!
//! A truncated stream yields [`Error::Io`][crate::Error::Io] wrapping an
//! [`UnexpectedEof`][std::io::ErrorKind::UnexpectedEof].

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::{
    Result,
    geom::Ray,
    math::{Matrix, Point, Vector, float::Scalar},
};

/// Trait for values that can be written to a binary stream.
pub trait Encode {
    /// Writes `self` to `w`.
    fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()>;
}

/// Trait for values that can be read from a binary stream.
pub trait Decode: Sized {
    /// Reads a value of type `Self` from `r`.
    fn decode<R: Read + ?Sized>(r: &mut R) -> Result<Self>;
}

impl Encode for f64 {
    fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        Ok(w.write_f64::<BigEndian>(*self)?)
    }
}
impl Decode for f64 {
    fn decode<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(r.read_f64::<BigEndian>()?)
    }
}

impl Encode for f32 {
    fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        Ok(w.write_f32::<BigEndian>(*self)?)
    }
}
impl Decode for f32 {
    fn decode<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(r.read_f32::<BigEndian>()?)
    }
}

impl Encode for i32 {
    fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        Ok(w.write_i32::<BigEndian>(*self)?)
    }
}
impl Decode for i32 {
    fn decode<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(r.read_i32::<BigEndian>()?)
    }
}

fn encode_all<T, W>(vals: &[T], w: &mut W) -> Result<()>
where
    T: Encode,
    W: Write + ?Sized,
{
    vals.iter().try_for_each(|v| v.encode(w))
}

fn decode_array<Sc, R, const N: usize>(r: &mut R) -> Result<[Sc; N]>
where
    Sc: Scalar + Decode,
    R: Read + ?Sized,
{
    let mut arr = [Sc::ZERO; N];
    for c in &mut arr {
        *c = Sc::decode(r)?;
    }
    Ok(arr)
}

impl<Sc: Encode, Sp, const N: usize> Encode for Vector<[Sc; N], Sp> {
    fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        encode_all(&self.0, w)
    }
}
impl<Sc: Scalar + Decode, Sp, const N: usize> Decode for Vector<[Sc; N], Sp> {
    fn decode<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        decode_array(r).map(Self::new)
    }
}

impl<Sc: Encode, Sp, const N: usize> Encode for Point<[Sc; N], Sp> {
    fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        encode_all(&self.0, w)
    }
}
impl<Sc: Scalar + Decode, Sp, const N: usize> Decode for Point<[Sc; N], Sp> {
    fn decode<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        decode_array(r).map(Self::new)
    }
}

impl<Sc: Encode, M, const N: usize> Encode for Matrix<[[Sc; N]; N], M> {
    fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        self.0.iter().try_for_each(|row| encode_all(row, w))
    }
}
impl<Sc: Scalar + Decode, M, const N: usize> Decode
    for Matrix<[[Sc; N]; N], M>
{
    fn decode<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        let mut rows = [[Sc::ZERO; N]; N];
        for row in &mut rows {
            *row = decode_array(r)?;
        }
        Ok(Self::new(rows))
    }
}

impl<Sc, Sp, const N: usize> Encode for Ray<Point<[Sc; N], Sp>>
where
    Sc: Scalar + Encode,
{
    fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        self.0.encode(w)?;
        self.1.encode(w)
    }
}
impl<Sc, Sp, const N: usize> Decode for Ray<Point<[Sc; N], Sp>>
where
    Sc: Scalar + Decode,
{
    fn decode<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        let orig = Point::decode(r)?;
        let dir = Vector::decode(r)?;
        Ok(Ray(orig, dir))
    }
}
