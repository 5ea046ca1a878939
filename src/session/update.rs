//! Selection reducer
//!
//! `update` is the only place a `SessionState` changes. It is keyed on
//! `(state, message)` and returns the terminal effect, if any, for the
//! caller to dispatch. Nothing here touches the backend or the renderer.

use crate::domain::{CaptureState, DragOrigin, Point, Region};
use crate::render::geometry::{self, region};

use super::messages::{Effect, Msg, PointerMsg};
use super::state::SessionState;

/// Apply one message to the session state
pub fn update(state: &mut SessionState, msg: Msg) -> Option<Effect> {
    if state.finished {
        log::debug!("Session already finished, ignoring {msg:?}");
        return None;
    }

    let effect = match msg {
        Msg::Pointer(pointer) => {
            handle_pointer(state, pointer);
            None
        }
        Msg::DoubleClick => handle_double_click(state),
        Msg::Confirm => handle_confirm(state),
        Msg::Cancel => Some(Effect::Cancel),
        Msg::CaptureDataLoaded {
            background,
            virtual_screen,
        } => {
            log::debug!(
                "Capture data loaded: {}x{} @ {}x, background: {}",
                virtual_screen.total_width,
                virtual_screen.total_height,
                virtual_screen.scale_factor,
                background.is_some()
            );
            state.backdrop.background = background;
            state.backdrop.virtual_screen = Some(virtual_screen);
            state.backdrop.error = None;
            state.backdrop.pending = false;
            None
        }
        Msg::CaptureDataFailed(error) => {
            log::error!("Failed to load capture data: {error}");
            state.backdrop.background = None;
            state.backdrop.virtual_screen = None;
            state.backdrop.error = Some(error);
            state.backdrop.pending = false;
            None
        }
    };

    if effect.is_some() {
        state.finished = true;
    }
    effect
}

fn handle_pointer(state: &mut SessionState, pointer: PointerMsg) {
    match pointer {
        PointerMsg::Down(point, at) => {
            // A press while a drag is still open means the release was lost
            if state.capture.is_dragging() {
                if let Some(last) = state.last_pointer {
                    finish_gesture(state, last);
                }
            }
            let committed = state.committed_region();
            state.clicks.on_pointer_down(at, committed);
            state.last_pointer = Some(point);
            pointer_down(state, point);
        }
        PointerMsg::Move(point) => {
            state.last_pointer = Some(point);
            drag_to(state, point);
        }
        PointerMsg::Up(point) => {
            state.last_pointer = Some(point);
            finish_gesture(state, point);
        }
        PointerMsg::Leave => {
            if let Some(last) = state.last_pointer {
                finish_gesture(state, last);
            }
        }
    }
}

fn pointer_down(state: &mut SessionState, point: Point) {
    if let Some(current) = state.committed_region() {
        if let Some(handle) = geometry::hit_test_handle(&current, point) {
            log::debug!("Resizing from handle {handle:?}");
            state.capture = CaptureState::Resizing;
            state.handle = Some(handle);
            state.drag = Some(DragOrigin::new(point, current));
            return;
        }
        if geometry::point_in_region(&current, point) {
            log::debug!("Moving selection");
            state.capture = CaptureState::Moving;
            state.handle = None;
            state.drag = Some(DragOrigin::new(point, current));
            return;
        }
    }

    let fresh = Region::at(point);
    state.capture = CaptureState::Creating;
    state.region = Some(fresh);
    state.handle = None;
    state.drag = Some(DragOrigin::new(point, fresh));
}

fn drag_to(state: &mut SessionState, point: Point) {
    let Some(origin) = state.drag else {
        return;
    };
    let delta = point.delta_from(origin.anchor);

    let next = match (state.capture, state.handle) {
        (CaptureState::Creating, _) => Region::from_corners(origin.anchor, point),
        (CaptureState::Moving, _) => geometry::translate_region(&origin.snapshot, delta),
        (CaptureState::Resizing, Some(handle)) => {
            geometry::clamp_resize(&origin.snapshot, handle, delta)
        }
        _ => return,
    };
    state.region = Some(next);
}

fn finish_gesture(state: &mut SessionState, point: Point) {
    if !state.capture.is_dragging() {
        return;
    }
    drag_to(state, point);

    match state.capture {
        CaptureState::Creating => {
            let committed = state.region.filter(|r| r.exceeds(region::MIN_SIZE));
            match committed {
                Some(r) => {
                    log::debug!("Selection committed: {r:?}");
                    state.capture = CaptureState::Selected;
                    state.clear_gesture();
                }
                None => {
                    log::debug!("Selection too small, discarded");
                    state.reset();
                }
            }
        }
        CaptureState::Moving | CaptureState::Resizing => {
            state.capture = CaptureState::Selected;
            state.clear_gesture();
        }
        CaptureState::Idle | CaptureState::Selected => {}
    }
}

fn handle_confirm(state: &SessionState) -> Option<Effect> {
    let Some(screen) = state.backdrop.virtual_screen else {
        log::warn!("Confirm ignored: virtual screen geometry is unavailable");
        return None;
    };
    let selection = state
        .committed_region()
        .filter(geometry::is_valid_selection)?;
    Some(Effect::Confirm(geometry::to_physical(
        &selection,
        screen.scale_factor,
    )))
}

fn handle_double_click(state: &SessionState) -> Option<Effect> {
    let Some(screen) = state.backdrop.virtual_screen else {
        log::warn!("Double-click ignored: virtual screen geometry is unavailable");
        return None;
    };
    let physical = match state.clicks.snapshot.filter(geometry::is_valid_selection) {
        Some(selection) => geometry::to_physical(&selection, screen.scale_factor),
        None => geometry::full_screen(&screen),
    };
    Some(Effect::Confirm(physical))
}
