//! Geometric types for capture regions and coordinates

use serde::{Deserialize, Serialize};

/// Point in overlay-local logical coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to this point
    pub fn delta_from(&self, origin: Point) -> Point {
        Point {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

/// Logical size of the overlay surface
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Logical position and size of a selection rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-sized region anchored at a point
    pub fn at(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    /// Bounding box of two arbitrary corner points
    pub fn from_corners(a: Point, b: Point) -> Self {
        let (left, right) = if a.x < b.x { (a.x, b.x) } else { (b.x, a.x) };
        let (top, bottom) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether both sides are strictly larger than `min`
    pub fn exceeds(&self, min: f64) -> bool {
        self.width > min && self.height > min
    }
}

/// Region in physical display pixels, as reported to the backend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PhysicalRegion {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Bounding box of all connected displays, in physical pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualScreenInfo {
    pub offset_x: i32,
    pub offset_y: i32,
    pub total_width: u32,
    pub total_height: u32,
    pub scale_factor: f64,
}

impl VirtualScreenInfo {
    /// Size of the overlay surface in logical pixels
    pub fn logical_size(&self) -> Size {
        let scale = if self.scale_factor > 0.0 {
            self.scale_factor
        } else {
            1.0
        };
        Size::new(
            f64::from(self.total_width) / scale,
            f64::from(self.total_height) / scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes_direction() {
        let r = Region::from_corners(Point::new(150.0, 120.0), Point::new(50.0, 50.0));
        assert_eq!(r, Region::new(50.0, 50.0, 100.0, 70.0));
        assert_eq!(r.right(), 150.0);
        assert_eq!(r.bottom(), 120.0);
    }

    #[test]
    fn test_exceeds_is_strict() {
        assert!(Region::new(0.0, 0.0, 11.0, 11.0).exceeds(10.0));
        assert!(!Region::new(0.0, 0.0, 10.0, 50.0).exceeds(10.0));
        assert!(!Region::new(0.0, 0.0, 50.0, 10.0).exceeds(10.0));
    }

    #[test]
    fn test_virtual_screen_deserializes_camel_case() {
        let json = r#"{"offsetX":-1920,"offsetY":0,"totalWidth":3840,"totalHeight":1080,"scaleFactor":2.0}"#;
        let info: VirtualScreenInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.offset_x, -1920);
        assert_eq!(info.total_width, 3840);
        assert_eq!(info.logical_size(), Size::new(1920.0, 540.0));
    }

    #[test]
    fn test_logical_size_ignores_bogus_scale() {
        let info = VirtualScreenInfo {
            offset_x: 0,
            offset_y: 0,
            total_width: 800,
            total_height: 600,
            scale_factor: 0.0,
        };
        assert_eq!(info.logical_size(), Size::new(800.0, 600.0));
    }
}
