//! Shapes built on `geoprim-core`.
//!
//! Provides [rectangles][rect], [circles][circle] and
//! [line segments][segment] in the plane, and a [`Shape`] sum type that
//! frames any of them in a binary stream behind a type tag.

#![no_std]

extern crate core;
#[cfg(feature = "std")]
extern crate std;

pub mod circle;
pub mod rect;
pub mod segment;
pub mod shape;

pub use {
    circle::{Circle, Circle2d, Circle2f},
    rect::{Rect2d, Rect2f, Rect2i, Rectangle},
    segment::{LineSegment, LineSegment2d, LineSegment2f},
    shape::{Shape, ShapeTag},
};
