//! Message types for a capture session
//!
//! This module contains:
//! - Msg enum with nested pointer messages
//! - Effect enum for the terminal calls a session can make

use std::time::Duration;

use crate::capture::image::ScreenshotImage;
use crate::domain::{PhysicalRegion, Point, VirtualScreenInfo};

// ============================================================================
// Pointer Types
// ============================================================================

/// Pointer messages in overlay-local logical coordinates
#[derive(Debug, Clone, Copy)]
pub enum PointerMsg {
    /// Button pressed, with the host timestamp of the press
    Down(Point, Duration),
    /// Pointer moved
    Move(Point),
    /// Button released
    Up(Point),
    /// Pointer left the overlay surface
    Leave,
}

// ============================================================================
// Main Message Enum
// ============================================================================

#[derive(Debug, Clone)]
pub enum Msg {
    /// Pointer input
    Pointer(PointerMsg),
    /// Host reported a double-click
    DoubleClick,
    /// Confirm the current selection (Enter)
    Confirm,
    /// Abort the session (Escape)
    Cancel,
    /// Background fetch succeeded
    CaptureDataLoaded {
        background: Option<ScreenshotImage>,
        virtual_screen: VirtualScreenInfo,
    },
    /// Background fetch failed with a user-facing message
    CaptureDataFailed(String),
}

impl Msg {
    pub fn pointer_down(x: f64, y: f64, at: Duration) -> Self {
        Msg::Pointer(PointerMsg::Down(Point::new(x, y), at))
    }

    pub fn pointer_move(x: f64, y: f64) -> Self {
        Msg::Pointer(PointerMsg::Move(Point::new(x, y)))
    }

    pub fn pointer_up(x: f64, y: f64) -> Self {
        Msg::Pointer(PointerMsg::Up(Point::new(x, y)))
    }

    pub fn pointer_leave() -> Self {
        Msg::Pointer(PointerMsg::Leave)
    }

    pub fn double_click() -> Self {
        Msg::DoubleClick
    }

    pub fn confirm() -> Self {
        Msg::Confirm
    }

    pub fn cancel() -> Self {
        Msg::Cancel
    }
}

/// Terminal outcome of a session, dispatched to the backend exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Report the selected area in physical pixels
    Confirm(PhysicalRegion),
    /// Report that the user aborted
    Cancel,
}
