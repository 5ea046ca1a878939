//! Backend collaborator seam
//!
//! The overlay talks to its host through three calls: one fetch at mount
//! time and two fire-and-forget terminal notifications.

use std::path::PathBuf;

use anyhow::Context;
use tokio::sync::mpsc::UnboundedSender;

use super::response::CaptureResponse;
use crate::capture::CaptureData;
use crate::domain::PhysicalRegion;

/// The host process behind the overlay
#[allow(async_fn_in_trait)]
pub trait CaptureBackend {
    /// Fetch the background screenshot and virtual-screen geometry
    async fn get_capture_data(&self) -> anyhow::Result<CaptureData>;

    /// Report the confirmed region in physical pixels
    fn confirm(&self, region: PhysicalRegion);

    /// Report that the user aborted the capture
    fn cancel(&self);
}

/// Backend that reads capture data from a JSON file and forwards the
/// terminal response over a channel
pub struct FileBackend {
    data_path: PathBuf,
    tx: UnboundedSender<CaptureResponse>,
}

impl FileBackend {
    pub fn new(data_path: impl Into<PathBuf>, tx: UnboundedSender<CaptureResponse>) -> Self {
        Self {
            data_path: data_path.into(),
            tx,
        }
    }

    fn send(&self, response: CaptureResponse) {
        if let Err(err) = self.tx.send(response) {
            log::error!("Failed to deliver capture response: {err}");
        }
    }
}

impl CaptureBackend for FileBackend {
    async fn get_capture_data(&self) -> anyhow::Result<CaptureData> {
        let raw = tokio::fs::read_to_string(&self.data_path)
            .await
            .with_context(|| format!("failed to read {}", self.data_path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid capture data in {}", self.data_path.display()))
    }

    fn confirm(&self, region: PhysicalRegion) {
        log::info!("Capture confirmed: {region:?}");
        self.send(CaptureResponse::Success(region));
    }

    fn cancel(&self) {
        log::info!("Capture cancelled");
        self.send(CaptureResponse::Cancelled);
    }
}
