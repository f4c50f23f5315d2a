//! Tagged union of all shape types, with tag-prefixed binary framing.
//!
//! A framed shape is a 4-byte big-endian `i32` [tag][ShapeTag] followed by
//! the shape's fields, each encoded as in [`re::util::io`]:
//!
//! | Shape         | Fields                    |
//! |---------------|---------------------------|
//! | Circle        | `center`, `radius`        |
//! | LineSegment   | `start`, `end`            |
//! | Rectangle     | `a`, `b`, `c`, `d`        |

use re::{Error, Result};

use crate::{
    circle::{Circle2d, Circle2f},
    rect::{Rect2d, Rect2f, Rect2i},
    segment::{LineSegment2d, LineSegment2f},
};

/// Identifies the concrete type of a framed [`Shape`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(i32)]
pub enum ShapeTag {
    Circle2d = 1,
    Circle2f = 2,
    LineSegment2d = 3,
    LineSegment2f = 4,
    Rectangle2d = 5,
    Rectangle2f = 6,
    Rectangle2i = 7,
}

/// Any of the shape types of this crate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Circle2d(Circle2d),
    Circle2f(Circle2f),
    LineSegment2d(LineSegment2d),
    LineSegment2f(LineSegment2f),
    Rectangle2d(Rect2d),
    Rectangle2f(Rect2f),
    Rectangle2i(Rect2i),
}

impl Shape {
    /// Returns the tag identifying the variant of `self`.
    pub fn tag(&self) -> ShapeTag {
        match self {
            Self::Circle2d(_) => ShapeTag::Circle2d,
            Self::Circle2f(_) => ShapeTag::Circle2f,
            Self::LineSegment2d(_) => ShapeTag::LineSegment2d,
            Self::LineSegment2f(_) => ShapeTag::LineSegment2f,
            Self::Rectangle2d(_) => ShapeTag::Rectangle2d,
            Self::Rectangle2f(_) => ShapeTag::Rectangle2f,
            Self::Rectangle2i(_) => ShapeTag::Rectangle2i,
        }
    }
}

impl TryFrom<i32> for ShapeTag {
    type Error = Error;

    /// Returns the tag with the given value.
    ///
    /// # Errors
    /// [`Error::UnsupportedTag`] if `tag` does not name a shape type.
    fn try_from(tag: i32) -> Result<Self> {
        Ok(match tag {
            1 => Self::Circle2d,
            2 => Self::Circle2f,
            3 => Self::LineSegment2d,
            4 => Self::LineSegment2f,
            5 => Self::Rectangle2d,
            6 => Self::Rectangle2f,
            7 => Self::Rectangle2i,
            _ => {
                tracing::debug!(
                    target: "geoprim::shape",
                    tag,
                    "unsupported shape tag"
                );
                return Err(Error::UnsupportedTag(tag));
            }
        })
    }
}

impl From<ShapeTag> for i32 {
    fn from(tag: ShapeTag) -> Self {
        tag as i32
    }
}

macro_rules! impl_from_shape {
    ($($var:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(s: $ty) -> Self {
                    Self::$var(s)
                }
            }
        )+
    };
}

impl_from_shape!(
    Circle2d(Circle2d),
    Circle2f(Circle2f),
    LineSegment2d(LineSegment2d),
    LineSegment2f(LineSegment2f),
    Rectangle2d(Rect2d),
    Rectangle2f(Rect2f),
    Rectangle2i(Rect2i),
);

#[cfg(feature = "std")]
mod framing {
    use std::io::{Read, Write};

    use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
    use re::Result;
    use re::math::Scalar;
    use re::util::io::{Decode, Encode};

    use crate::{circle::Circle, rect::Rectangle, segment::LineSegment};

    use super::{Shape, ShapeTag};

    impl<Sc: Encode> Encode for Circle<Sc> {
        fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
            self.center.encode(w)?;
            self.radius.encode(w)
        }
    }
    impl<Sc: Decode + Scalar> Decode for Circle<Sc> {
        fn decode<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
            Ok(Self {
                center: Decode::decode(r)?,
                radius: Sc::decode(r)?,
            })
        }
    }

    impl<Sc: Encode> Encode for LineSegment<Sc> {
        fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
            self.start.encode(w)?;
            self.end.encode(w)
        }
    }
    impl<Sc: Decode + Scalar> Decode for LineSegment<Sc> {
        fn decode<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
            Ok(Self {
                start: Decode::decode(r)?,
                end: Decode::decode(r)?,
            })
        }
    }

    impl<Sc: Encode> Encode for Rectangle<Sc> {
        fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
            self.a.encode(w)?;
            self.b.encode(w)?;
            self.c.encode(w)?;
            self.d.encode(w)
        }
    }
    impl<Sc: Decode + Scalar> Decode for Rectangle<Sc> {
        /// Reads the four corners `a`, `b`, `c`, `d` in order.
        ///
        /// The corners are taken as-is and not checked to form a
        /// rectangle, so that rotated rectangles, whose corners are only
        /// approximately orthogonal, read back bit for bit.
        fn decode<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
            Ok(Self {
                a: Decode::decode(r)?,
                b: Decode::decode(r)?,
                c: Decode::decode(r)?,
                d: Decode::decode(r)?,
            })
        }
    }

    impl Encode for Shape {
        /// Writes the tag of `self` followed by its fields.
        fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
            w.write_i32::<BigEndian>(self.tag().into())?;
            match self {
                Self::Circle2d(s) => s.encode(w),
                Self::Circle2f(s) => s.encode(w),
                Self::LineSegment2d(s) => s.encode(w),
                Self::LineSegment2f(s) => s.encode(w),
                Self::Rectangle2d(s) => s.encode(w),
                Self::Rectangle2f(s) => s.encode(w),
                Self::Rectangle2i(s) => s.encode(w),
            }
        }
    }

    impl Decode for Shape {
        /// Reads a tag and dispatches to the shape type it names.
        ///
        /// # Errors
        /// [`Error::UnsupportedTag`][re::Error::UnsupportedTag] if the tag
        /// is unknown, [`Error::Io`][re::Error::Io] if the stream ends early.
        fn decode<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
            let tag = ShapeTag::try_from(r.read_i32::<BigEndian>()?)?;
            Ok(match tag {
                ShapeTag::Circle2d => Self::Circle2d(Decode::decode(r)?),
                ShapeTag::Circle2f => Self::Circle2f(Decode::decode(r)?),
                ShapeTag::LineSegment2d => {
                    Self::LineSegment2d(Decode::decode(r)?)
                }
                ShapeTag::LineSegment2f => {
                    Self::LineSegment2f(Decode::decode(r)?)
                }
                ShapeTag::Rectangle2d => Self::Rectangle2d(Decode::decode(r)?),
                ShapeTag::Rectangle2f => Self::Rectangle2f(Decode::decode(r)?),
                ShapeTag::Rectangle2i => Self::Rectangle2i(Decode::decode(r)?),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use re::math::pt2;

    use crate::{circle::Circle, rect::Rectangle, segment::LineSegment};

    use super::*;

    #[test]
    fn tags_round_trip() {
        for t in 1..=7 {
            let tag = ShapeTag::try_from(t).unwrap();
            assert_eq!(i32::from(tag), t);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        for t in [0, 8, -1, i32::MAX] {
            assert!(matches!(
                ShapeTag::try_from(t),
                Err(Error::UnsupportedTag(u)) if u == t
            ));
        }
    }

    #[test]
    fn variant_tags() {
        let c: Shape = Circle2f::new(pt2(0.0, 0.0), 1.0).into();
        assert_eq!(c.tag(), ShapeTag::Circle2f);
        let r: Shape = Rectangle::from_corners(pt2(0, 0), pt2(1, 1)).into();
        assert_eq!(r.tag(), ShapeTag::Rectangle2i);
    }

    #[cfg(feature = "std")]
    mod framing {
        use std::io::ErrorKind;
        use std::vec::Vec;

        use re::util::io::{Decode, Encode};

        use super::*;

        fn frame(s: &Shape) -> Vec<u8> {
            let mut buf = Vec::new();
            s.encode(&mut buf).unwrap();
            buf
        }

        #[test]
        fn rectangle_frame_layout() {
            let r: Rect2i = Rectangle::from_corners(pt2(0, 0), pt2(2, 3));
            let buf = frame(&r.into());
            // Tag plus four points of two i32s each
            assert_eq!(buf.len(), 4 + 4 * 8);
            assert_eq!(buf[..4], [0, 0, 0, 7]);
            // Corner b = (2, 0)
            assert_eq!(buf[12..20], [0, 0, 0, 2, 0, 0, 0, 0]);
        }

        #[test]
        fn every_variant_round_trips() {
            let shapes: [Shape; 7] = [
                Circle::new(pt2(1.0, 2.0), 3.0).into(),
                Circle::new(pt2(1.0f32, 2.0), 3.0).into(),
                LineSegment::new(pt2(0.0, 0.0), pt2(1.0, -1.0)).into(),
                LineSegment::new(pt2(0.0f32, 0.0), pt2(1.0, -1.0)).into(),
                Rectangle::from_corners(pt2(0.0, 0.0), pt2(1.5, 2.5)).into(),
                Rectangle::from_corners(pt2(0.0f32, 0.0), pt2(1.5, 2.5))
                    .into(),
                Rectangle::from_corners(pt2(-1, -1), pt2(1, 1)).into(),
            ];
            for s in shapes {
                let buf = frame(&s);
                assert_eq!(Shape::decode(&mut &buf[..]).ok(), Some(s));
            }
        }

        #[test]
        fn rotated_rectangle_reads_back_exactly() {
            let r = Rectangle::from_corners(pt2(0.0, 0.0), pt2(3.0, 1.0))
                .rotate(re::math::degs(30.0));
            let mut buf = Vec::new();
            r.encode(&mut buf).unwrap();
            let s = Rect2d::decode(&mut &buf[..]).unwrap();
            assert_eq!(s, r);
        }

        #[test]
        fn shapes_in_sequence() {
            let a: Shape = Circle::new(pt2(0.0, 0.0), 1.0).into();
            let b: Shape = Rectangle::from_corners(pt2(0, 0), pt2(1, 1)).into();
            let mut buf = frame(&a);
            buf.extend(frame(&b));

            let mut r = &buf[..];
            assert_eq!(Shape::decode(&mut r).ok(), Some(a));
            assert_eq!(Shape::decode(&mut r).ok(), Some(b));
            assert!(r.is_empty());
        }

        #[test]
        fn decode_unknown_tag() {
            let buf: [u8; 8] = [0, 0, 0, 42, 1, 2, 3, 4];
            assert!(matches!(
                Shape::decode(&mut &buf[..]),
                Err(Error::UnsupportedTag(42))
            ));
        }

        #[test]
        fn decode_truncated() {
            let s: Shape = Circle::new(pt2(1.0, 2.0), 3.0).into();
            let buf = frame(&s);
            let res = Shape::decode(&mut &buf[..buf.len() - 1]);
            assert!(matches!(
                res,
                Err(Error::Io(e)) if e.kind() == ErrorKind::UnexpectedEof
            ));
        }
    }
}
