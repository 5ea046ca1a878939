//! Capture data supplied by the backend at mount time
//!
//! This module consolidates:
//! - The wire payload returned by `get_capture_data` (CaptureData)
//! - The decoded background screenshot (image.rs)

pub mod image;

use serde::{Deserialize, Serialize};

use crate::domain::VirtualScreenInfo;
use self::image::ScreenshotImage;

/// Payload returned by the backend's `get_capture_data` call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptureData {
    /// Base64-encoded PNG of the desktop, absent for a live transparent overlay
    #[serde(default)]
    pub screenshot: Option<String>,
    pub virtual_screen: VirtualScreenInfo,
}

impl CaptureData {
    /// Decode the screenshot, falling back to no background if it is unusable
    pub fn into_parts(self) -> (Option<ScreenshotImage>, VirtualScreenInfo) {
        let background = match self.screenshot.as_deref() {
            Some(encoded) => match ScreenshotImage::from_base64_png(encoded) {
                Ok(image) => Some(image),
                Err(err) => {
                    log::warn!("Ignoring undecodable capture background: {err:#}");
                    None
                }
            },
            None => None,
        };
        (background, self.virtual_screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> VirtualScreenInfo {
        VirtualScreenInfo {
            offset_x: 0,
            offset_y: 0,
            total_width: 200,
            total_height: 100,
            scale_factor: 2.0,
        }
    }

    #[test]
    fn test_deserialize_without_screenshot() {
        let json = r#"{"virtual_screen":{"offsetX":0,"offsetY":0,"totalWidth":200,"totalHeight":100,"scaleFactor":2.0}}"#;
        let data: CaptureData = serde_json::from_str(json).unwrap();
        assert_eq!(data.screenshot, None);
        assert_eq!(data.virtual_screen, screen());
    }

    #[test]
    fn test_bad_screenshot_keeps_virtual_screen() {
        let data = CaptureData {
            screenshot: Some("not base64 at all!".to_string()),
            virtual_screen: screen(),
        };
        let (background, virtual_screen) = data.into_parts();
        assert!(background.is_none());
        assert_eq!(virtual_screen, screen());
    }

    #[test]
    fn test_valid_screenshot_is_decoded() {
        let encoded = super::image::tests::encode_png(4, 3, [10, 20, 30, 255]);
        let data = CaptureData {
            screenshot: Some(encoded),
            virtual_screen: screen(),
        };
        let (background, _) = data.into_parts();
        let background = background.unwrap();
        assert_eq!((background.width(), background.height()), (4, 3));
    }
}
