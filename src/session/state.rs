//! Session state owned by the selection reducer

use std::time::Duration;

use crate::capture::image::ScreenshotImage;
use crate::domain::{CaptureState, DragOrigin, HandlePosition, Point, Region, Size, VirtualScreenInfo};

/// What the backend supplied at mount time
#[derive(Clone, Debug, Default)]
pub struct BackdropState {
    /// Desktop screenshot drawn behind the overlay, None for a live desktop
    pub background: Option<ScreenshotImage>,
    /// Needed for scaling; confirm is unavailable while this is None
    pub virtual_screen: Option<VirtualScreenInfo>,
    /// Fetch failure shown in place of the hint
    pub error: Option<String>,
    /// Fetch still outstanding
    pub pending: bool,
}

/// Tracks pointer-down timing so a double-click can confirm the region
/// that existed before its click sequence started
#[derive(Clone, Debug)]
pub struct ClickTracker {
    pub window: Duration,
    pub last_down: Option<Duration>,
    pub snapshot: Option<Region>,
}

impl ClickTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_down: None,
            snapshot: None,
        }
    }

    /// Record a pointer-down; a gap of at least `window` starts a new sequence
    pub fn on_pointer_down(&mut self, at: Duration, committed: Option<Region>) {
        let new_sequence = match self.last_down {
            None => true,
            Some(prev) => at.saturating_sub(prev) >= self.window,
        };
        if new_sequence {
            self.snapshot = committed;
        }
        self.last_down = Some(at);
    }
}

/// The single owned record a capture session mutates
#[derive(Clone, Debug)]
pub struct SessionState {
    pub capture: CaptureState,
    pub region: Option<Region>,
    pub handle: Option<HandlePosition>,
    pub drag: Option<DragOrigin>,
    /// Last pointer position seen, used when the pointer leaves mid-drag
    pub last_pointer: Option<Point>,
    pub clicks: ClickTracker,
    pub backdrop: BackdropState,
    /// A terminal call has been made; all further input is ignored
    pub finished: bool,
}

impl SessionState {
    pub fn new(double_click_window: Duration) -> Self {
        Self {
            capture: CaptureState::Idle,
            region: None,
            handle: None,
            drag: None,
            last_pointer: None,
            clicks: ClickTracker::new(double_click_window),
            backdrop: BackdropState {
                pending: true,
                ..Default::default()
            },
            finished: false,
        }
    }

    /// Region shown with handles, only while in the selected state
    pub fn committed_region(&self) -> Option<Region> {
        match self.capture {
            CaptureState::Selected => self.region,
            _ => None,
        }
    }

    /// Logical size of the overlay, known once the virtual screen arrives
    pub fn container_size(&self) -> Option<Size> {
        self.backdrop
            .virtual_screen
            .as_ref()
            .map(VirtualScreenInfo::logical_size)
    }

    pub fn clear_gesture(&mut self) {
        self.drag = None;
        self.handle = None;
    }

    /// Back to idle with nothing selected
    pub fn reset(&mut self) {
        self.capture = CaptureState::Idle;
        self.region = None;
        self.clear_gesture();
    }
}
