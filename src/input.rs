//! Host input events
//!
//! These events are the decoupled interface between whatever window system
//! hosts the overlay and the session's message system. A host translates
//! its native events into `InputEvent`s; `to_msg` turns them into `Msg`s.

use std::time::Duration;

use serde::Deserialize;

use crate::session::messages::Msg;
use crate::session::shortcuts::{self, Key};
use crate::session::state::SessionState;

/// One host input event in overlay-local logical coordinates
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Button press with the host timestamp in milliseconds
    Down { x: f64, y: f64, at_ms: u64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Leave,
    DoubleClick,
    /// Key press by name, e.g. "Escape" or "Enter"
    Key { key: String },
}

impl InputEvent {
    /// Translate to a session message; keys without a binding yield None
    pub fn to_msg(&self, state: &SessionState) -> Option<Msg> {
        match self {
            InputEvent::Down { x, y, at_ms } => {
                Some(Msg::pointer_down(*x, *y, Duration::from_millis(*at_ms)))
            }
            InputEvent::Move { x, y } => Some(Msg::pointer_move(*x, *y)),
            InputEvent::Up { x, y } => Some(Msg::pointer_up(*x, *y)),
            InputEvent::Leave => Some(Msg::pointer_leave()),
            InputEvent::DoubleClick => Some(Msg::double_click()),
            InputEvent::Key { key } => shortcuts::handle_key_event(state, Key::from_name(key)),
        }
    }
}

/// Parse a JSON array of input events
pub fn parse_script(raw: &str) -> anyhow::Result<Vec<InputEvent>> {
    Ok(serde_json::from_str(raw)?)
}
