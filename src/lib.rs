//! Interactive region selection for screen capture
//!
//! A full-screen overlay lets the user draw, move and resize a rectangle,
//! then confirm it (reported in physical pixels) or cancel. The session
//! reducer is independent of any window system; hosts feed it input events
//! and render the derived `OverlayView`.

pub mod capture;
pub mod config;
pub mod core;
pub mod domain;
pub mod input;
pub mod localize;
pub mod render;
pub mod session;

pub use capture::CaptureData;
pub use config::RegionSnapConfig;
pub use crate::core::backend::{CaptureBackend, FileBackend};
pub use crate::core::response::CaptureResponse;
pub use session::CaptureSession;
