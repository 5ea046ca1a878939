//! Image rendering for the overlay using tiny-skia
//!
//! Paints an `OverlayView` onto an RgbaImage, used by the host harness to
//! produce a frame without a window system.

use anyhow::Context;
use image::{RgbaImage, imageops::FilterType};
use tiny_skia::{ColorU8, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::overlay::OverlayView;
use crate::capture::image::ScreenshotImage;
use crate::config::{OverlayColor, RegionSnapConfig};
use crate::domain::Region;

/// Convert RgbaImage to Pixmap, apply drawing function, and copy back
fn with_pixmap(img: &mut RgbaImage, f: impl FnOnce(&mut Pixmap)) -> anyhow::Result<()> {
    let (w, h) = (img.width(), img.height());
    let mut pixmap = Pixmap::new(w, h).context("overlay canvas has zero size")?;

    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(img.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }

    f(&mut pixmap);

    // Copy back, undoing premultiplication
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        dst.0 = [c.red(), c.green(), c.blue(), c.alpha()];
    }
    Ok(())
}

fn paint_for(color: OverlayColor) -> Paint<'static> {
    let [r, g, b, a] = color.to_rgba_u8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = false;
    paint
}

/// Logical region to a device rect; None for empty areas
fn device_rect(region: &Region, scale: f32) -> Option<Rect> {
    Rect::from_xywh(
        region.x as f32 * scale,
        region.y as f32 * scale,
        region.width as f32 * scale,
        region.height as f32 * scale,
    )
}

/// Start from the screenshot scaled to the canvas, or a transparent canvas
fn base_canvas(background: Option<&ScreenshotImage>, width: u32, height: u32) -> RgbaImage {
    match background {
        Some(bg) if bg.width() == width && bg.height() == height => bg.rgba.clone(),
        Some(bg) => image::imageops::resize(&bg.rgba, width, height, FilterType::Triangle),
        None => RgbaImage::new(width, height),
    }
}

/// Paint the overlay view at the given logical-to-device scale
pub fn render_overlay(
    view: &OverlayView,
    background: Option<&ScreenshotImage>,
    config: &RegionSnapConfig,
    scale: f64,
) -> anyhow::Result<RgbaImage> {
    let width = (view.container.width * scale).round().max(0.0) as u32;
    let height = (view.container.height * scale).round().max(0.0) as u32;
    let scale = scale as f32;

    let mut img = base_canvas(background, width, height);

    with_pixmap(&mut img, |pixmap| {
        let dim = paint_for(config.dim_color);
        for band in view.bands.iter() {
            if let Some(rect) = device_rect(band, scale) {
                pixmap.fill_rect(rect, &dim, Transform::identity(), None);
            }
        }

        if let Some(path) = view
            .selection
            .as_ref()
            .and_then(|s| device_rect(s, scale))
            .map(PathBuilder::from_rect)
        {
            let stroke = Stroke {
                width: config.selection_thickness * scale,
                ..Default::default()
            };
            let outline = paint_for(config.selection_color);
            pixmap.stroke_path(&path, &outline, &stroke, Transform::identity(), None);
        }

        let fill = paint_for(config.handle_color);
        for marker in &view.handles {
            if let Some(rect) = device_rect(&marker.bounds, scale) {
                pixmap.fill_rect(rect, &fill, Transform::identity(), None);
            }
        }
    })?;

    Ok(img)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{CaptureState, Size};
    use crate::session::state::SessionState;

    fn selected_view_with_markers(marker_size: f64) -> OverlayView {
        let mut state = SessionState::new(Duration::from_millis(400));
        state.capture = CaptureState::Selected;
        state.region = Some(Region::new(20.0, 20.0, 50.0, 40.0));
        OverlayView::build(&state, Size::new(100.0, 80.0), marker_size)
    }

    fn selected_view() -> OverlayView {
        selected_view_with_markers(8.0)
    }

    fn opaque_background(width: u32, height: u32) -> ScreenshotImage {
        ScreenshotImage {
            rgba: RgbaImage::from_pixel(width, height, image::Rgba([200, 200, 200, 255])),
        }
    }

    #[test]
    fn test_transparent_canvas_dims_outside_only() {
        let config = RegionSnapConfig::default();
        let img = render_overlay(&selected_view(), None, &config, 1.0).unwrap();
        assert_eq!((img.width(), img.height()), (100, 80));

        let outside = img.get_pixel(5, 5).0;
        assert_eq!(outside[3], 128);

        let inside = img.get_pixel(45, 40).0;
        assert_eq!(inside[3], 0);
    }

    #[test]
    fn test_background_darkened_outside() {
        let config = RegionSnapConfig::default();
        let bg = opaque_background(100, 80);
        let img = render_overlay(&selected_view(), Some(&bg), &config, 1.0).unwrap();

        assert_eq!(img.get_pixel(45, 40).0, [200, 200, 200, 255]);
        let outside = img.get_pixel(90, 70).0;
        assert!(outside[0] < 120 && outside[0] > 80, "{outside:?}");
        assert_eq!(outside[3], 255);
    }

    #[test]
    fn test_handles_drawn_at_corners() {
        let config = RegionSnapConfig::default();
        let img = render_overlay(&selected_view(), None, &config, 1.0).unwrap();
        // Inner half of the NW marker, away from the outline stroke
        assert_eq!(img.get_pixel(22, 23).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_drawn_markers_match_view_bounds() {
        let config = RegionSnapConfig::default();
        let view = selected_view_with_markers(16.0);
        let img = render_overlay(&view, None, &config, 1.0).unwrap();
        for marker in &view.handles {
            let (x, y) = (marker.bounds.x as u32 + 1, marker.bounds.y as u32 + 1);
            assert_eq!(img.get_pixel(x, y).0, [255, 255, 255, 255], "{marker:?}");
        }
        // NW anchor at (20, 20); a 16px marker reaches (27, 27), an 8px one does not
        assert_eq!(img.get_pixel(26, 26).0, [255, 255, 255, 255]);
        let img = render_overlay(&selected_view(), None, &config, 1.0).unwrap();
        assert_ne!(img.get_pixel(26, 26).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_canvas_follows_scale() {
        let config = RegionSnapConfig::default();
        let bg = opaque_background(10, 10);
        let img = render_overlay(&selected_view(), Some(&bg), &config, 2.0).unwrap();
        assert_eq!((img.width(), img.height()), (200, 160));
        assert_eq!(img.get_pixel(90, 80).0, [200, 200, 200, 255]);
    }

    #[test]
    fn test_zero_container_is_an_error() {
        let state = SessionState::new(Duration::from_millis(400));
        let view = OverlayView::build(&state, Size::new(0.0, 0.0), 8.0);
        assert!(render_overlay(&view, None, &RegionSnapConfig::default(), 1.0).is_err());
    }
}
