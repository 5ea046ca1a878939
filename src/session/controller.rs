//! Capture session controller
//!
//! Owns the session state and the backend. Input is applied through the
//! reducer one message at a time; any terminal effect is dispatched to the
//! backend immediately and the session stops accepting input.

use crate::config::RegionSnapConfig;
use crate::core::backend::CaptureBackend;
use crate::domain::Size;
use crate::input::InputEvent;
use crate::render::overlay::OverlayView;

use super::messages::{Effect, Msg};
use super::state::SessionState;
use super::update::update;

pub struct CaptureSession<B: CaptureBackend> {
    backend: B,
    state: SessionState,
    marker_size: f64,
}

impl<B: CaptureBackend> CaptureSession<B> {
    pub fn new(backend: B, config: &RegionSnapConfig) -> Self {
        Self {
            backend,
            state: SessionState::new(config.double_click_window()),
            marker_size: f64::from(config.handle_marker_size),
        }
    }

    /// Fetch capture data once; failure leaves the overlay in degraded mode
    pub async fn mount(&mut self) {
        let msg = match self.backend.get_capture_data().await {
            Ok(data) => {
                let (background, virtual_screen) = data.into_parts();
                Msg::CaptureDataLoaded {
                    background,
                    virtual_screen,
                }
            }
            Err(err) => Msg::CaptureDataFailed(format!("{err:#}")),
        };
        self.update(msg);
    }

    /// Apply one message and dispatch its effect, if any
    pub fn update(&mut self, msg: Msg) {
        if let Some(effect) = update(&mut self.state, msg) {
            self.dispatch(effect);
        }
    }

    /// Translate and apply a host input event
    pub fn handle_input(&mut self, event: &InputEvent) {
        if let Some(msg) = event.to_msg(&self.state) {
            self.update(msg);
        }
    }

    fn dispatch(&self, effect: Effect) {
        match effect {
            Effect::Confirm(region) => self.backend.confirm(region),
            Effect::Cancel => self.backend.cancel(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    /// Build the current frame for a container of the given logical size
    pub fn view(&self, container: Size) -> OverlayView {
        OverlayView::build(&self.state, container, self.marker_size)
    }
}
