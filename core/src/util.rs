//! Various utility types and functions.

pub mod intern;
#[cfg(feature = "std")]
pub mod io;
