//! Screenshot image type for the overlay background

use anyhow::Context;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{ImageFormat, RgbaImage};

/// A decoded desktop screenshot shown behind the selection overlay
#[derive(Clone, Debug)]
pub struct ScreenshotImage {
    pub rgba: RgbaImage,
}

impl ScreenshotImage {
    /// Decode a base64 string holding PNG bytes
    pub fn from_base64_png(encoded: &str) -> anyhow::Result<Self> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .context("screenshot is not valid base64")?;
        let rgba = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .context("screenshot is not a valid PNG")?
            .to_rgba8();
        log::debug!(
            "ScreenshotImage decoded: {}x{} pixels",
            rgba.width(),
            rgba.height()
        );
        Ok(Self { rgba })
    }

    /// Get the width of the image
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    /// Get the height of the image
    pub fn height(&self) -> u32 {
        self.rgba.height()
    }
}
