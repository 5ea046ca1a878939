//! Capture session management module
//!
//! This module contains:
//! - Session state management
//! - Message types for pointer and keyboard interactions
//! - The reducer applying messages to state
//! - The controller wiring the reducer to a backend

pub mod controller;
pub mod messages;
pub mod shortcuts;
pub mod state;
pub mod update;

pub use controller::CaptureSession;
pub use messages::{Effect, Msg, PointerMsg};
pub use state::SessionState;
