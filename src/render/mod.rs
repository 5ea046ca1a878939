//! Overlay rendering module
//!
//! This module contains:
//! - Geometry calculations shared between hit-testing and drawing
//! - The overlay view model derived from session state
//! - Image rendering using tiny-skia

pub mod geometry;
pub mod image;
pub mod overlay;
