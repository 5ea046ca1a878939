//! Keyboard shortcuts for the selection overlay

use crate::domain::CaptureState;
use crate::session::messages::Msg;
use crate::session::state::SessionState;

/// Keys the overlay distinguishes; everything else is ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Other(String),
}

impl Key {
    /// Map a host key name (DOM/winit style) to a key
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Enter" | "Return" | "NumpadEnter" => Key::Enter,
            other => Key::Other(other.to_string()),
        }
    }
}

pub fn handle_key_event(state: &SessionState, key: Key) -> Option<Msg> {
    if state.finished {
        return None;
    }

    match key {
        Key::Escape => Some(Msg::cancel()),
        // Enter only confirms a committed selection, never a drag in progress
        Key::Enter if state.capture == CaptureState::Selected => Some(Msg::confirm()),
        Key::Enter => None,
        Key::Other(_) => None,
    }
}
