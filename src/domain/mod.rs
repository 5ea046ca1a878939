//! Pure domain types with minimal dependencies
//!
//! Types here have no rendering or backend dependencies so that the
//! session reducer and the geometry engine can share them freely.

pub mod geometry;
pub mod selection;

pub use geometry::*;
pub use selection::*;
