//! Overlay view model
//!
//! Everything the overlay draws is derived here from the session state, so
//! the renderer owns no state of its own.

use crate::domain::{CaptureState, HandlePosition, Point, Region, Size};
use crate::fl;
use crate::session::state::SessionState;

use super::geometry::{self, DimBands};

/// A resize handle marker, centred on its anchor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleMarker {
    pub position: HandlePosition,
    pub anchor: Point,
    pub bounds: Region,
}

/// Snapshot of what the overlay shows for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayView {
    pub container: Size,
    pub has_background: bool,
    pub bands: DimBands,
    pub selection: Option<Region>,
    pub handles: Vec<HandleMarker>,
    pub hint: String,
}

impl OverlayView {
    /// `marker_size` is the side length of each drawn handle marker
    pub fn build(state: &SessionState, container: Size, marker_size: f64) -> Self {
        let selection = state.region;
        let bands = match &selection {
            Some(region) => geometry::dim_bands(region, container),
            None => DimBands::full(container),
        };

        let handles = match (state.capture, selection) {
            (CaptureState::Selected, Some(region)) => handle_markers(&region, marker_size),
            _ => Vec::new(),
        };

        Self {
            container,
            has_background: state.backdrop.background.is_some(),
            bands,
            selection,
            handles,
            hint: hint_text(state),
        }
    }
}

fn handle_markers(region: &Region, size: f64) -> Vec<HandleMarker> {
    let half = size / 2.0;
    HandlePosition::ALL
        .into_iter()
        .map(|position| {
            let anchor = geometry::handle_anchor(region, position);
            HandleMarker {
                position,
                anchor,
                bounds: Region::new(
                    anchor.x - half,
                    anchor.y - half,
                    size,
                    size,
                ),
            }
        })
        .collect()
}

/// One line of guidance; a fetch error always wins
pub fn hint_text(state: &SessionState) -> String {
    if let Some(error) = &state.backdrop.error {
        return error.clone();
    }
    if state.backdrop.pending && state.capture == CaptureState::Idle {
        return fl!("hint-loading");
    }
    match state.capture {
        CaptureState::Idle => fl!("hint-idle"),
        CaptureState::Creating => fl!("hint-creating"),
        CaptureState::Selected => fl!("hint-selected"),
        CaptureState::Moving => fl!("hint-moving"),
        CaptureState::Resizing => fl!("hint-resizing"),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::VirtualScreenInfo;

    const CONTAINER: Size = Size {
        width: 400.0,
        height: 300.0,
    };
    const MARKER: f64 = 8.0;

    fn loaded() -> SessionState {
        let mut state = SessionState::new(Duration::from_millis(400));
        state.backdrop.pending = false;
        state.backdrop.virtual_screen = Some(VirtualScreenInfo {
            offset_x: 0,
            offset_y: 0,
            total_width: 400,
            total_height: 300,
            scale_factor: 1.0,
        });
        state
    }

    #[test]
    fn test_idle_dims_everything() {
        let view = OverlayView::build(&loaded(), CONTAINER, MARKER);
        assert_eq!(view.bands, DimBands::full(CONTAINER));
        assert!(view.selection.is_none());
        assert!(view.handles.is_empty());
        assert!(!view.has_background);
        assert_eq!(view.hint, fl!("hint-idle"));
    }

    #[test]
    fn test_selected_shows_eight_handles() {
        let mut state = loaded();
        state.capture = CaptureState::Selected;
        state.region = Some(Region::new(50.0, 50.0, 100.0, 70.0));
        let view = OverlayView::build(&state, CONTAINER, MARKER);
        assert_eq!(view.handles.len(), 8);
        let se = view
            .handles
            .iter()
            .find(|h| h.position == HandlePosition::SE)
            .unwrap();
        assert_eq!(se.bounds, Region::new(146.0, 116.0, 8.0, 8.0));
        assert_eq!(view.bands.top.height, 50.0);
        assert_eq!(view.hint, fl!("hint-selected"));
    }

    #[test]
    fn test_marker_size_sets_handle_bounds() {
        let mut state = loaded();
        state.capture = CaptureState::Selected;
        state.region = Some(Region::new(50.0, 50.0, 100.0, 70.0));
        let view = OverlayView::build(&state, CONTAINER, 16.0);
        for marker in &view.handles {
            assert_eq!(marker.bounds.width, 16.0);
            assert_eq!(marker.bounds.x + 8.0, marker.anchor.x);
            assert_eq!(marker.bounds.y + 8.0, marker.anchor.y);
        }
    }

    #[test]
    fn test_handles_hidden_while_dragging() {
        let mut state = loaded();
        state.region = Some(Region::new(50.0, 50.0, 100.0, 70.0));
        for capture in [CaptureState::Creating, CaptureState::Moving, CaptureState::Resizing] {
            state.capture = capture;
            let view = OverlayView::build(&state, CONTAINER, MARKER);
            assert!(view.handles.is_empty());
            assert!(view.selection.is_some());
        }
    }

    #[test]
    fn test_hints_differ_by_state() {
        let mut state = loaded();
        let mut seen = Vec::new();
        for capture in [
            CaptureState::Idle,
            CaptureState::Creating,
            CaptureState::Selected,
            CaptureState::Moving,
            CaptureState::Resizing,
        ] {
            state.capture = capture;
            let hint = hint_text(&state);
            assert!(!hint.is_empty());
            assert!(!seen.contains(&hint));
            seen.push(hint);
        }
    }

    #[test]
    fn test_error_takes_precedence() {
        let mut state = loaded();
        state.capture = CaptureState::Selected;
        state.backdrop.error = Some("backend unavailable".into());
        assert_eq!(hint_text(&state), "backend unavailable");
    }

    #[test]
    fn test_pending_fetch_shows_loading() {
        let state = SessionState::new(Duration::from_millis(400));
        assert_eq!(hint_text(&state), fl!("hint-loading"));
    }
}
