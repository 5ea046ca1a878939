//! Selection state types for the capture overlay

use super::geometry::{Point, Region};

/// Phase of the selection gesture state machine
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Nothing selected yet
    #[default]
    Idle,
    /// Rubber-band drawing a new region
    Creating,
    /// A committed region is shown with handles
    Selected,
    /// Dragging the whole region
    Moving,
    /// Dragging one of the eight handles
    Resizing,
}

impl CaptureState {
    /// Whether a pointer gesture is in progress
    pub fn is_dragging(self) -> bool {
        matches!(
            self,
            CaptureState::Creating | CaptureState::Moving | CaptureState::Resizing
        )
    }
}

/// Resize handle anchored on the selection boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlePosition {
    /// North-West corner
    NW,
    /// North edge
    N,
    /// North-East corner
    NE,
    /// West edge
    W,
    /// East edge
    E,
    /// South-West corner
    SW,
    /// South edge
    S,
    /// South-East corner
    SE,
}

impl HandlePosition {
    /// All handles in hit-test priority order
    pub const ALL: [HandlePosition; 8] = [
        HandlePosition::NW,
        HandlePosition::N,
        HandlePosition::NE,
        HandlePosition::W,
        HandlePosition::E,
        HandlePosition::SW,
        HandlePosition::S,
        HandlePosition::SE,
    ];

    pub fn has_west(self) -> bool {
        matches!(self, HandlePosition::NW | HandlePosition::W | HandlePosition::SW)
    }

    pub fn has_east(self) -> bool {
        matches!(self, HandlePosition::NE | HandlePosition::E | HandlePosition::SE)
    }

    pub fn has_north(self) -> bool {
        matches!(self, HandlePosition::NW | HandlePosition::N | HandlePosition::NE)
    }

    pub fn has_south(self) -> bool {
        matches!(self, HandlePosition::SW | HandlePosition::S | HandlePosition::SE)
    }
}

/// Where a drag started, paired with the region as it was at that moment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOrigin {
    pub anchor: Point,
    pub snapshot: Region,
}

impl DragOrigin {
    pub fn new(anchor: Point, snapshot: Region) -> Self {
        Self { anchor, snapshot }
    }
}
