//! Shared geometry calculations for the selection overlay
//!
//! Everything here is pure: the session reducer uses these functions to edit
//! the region and the overlay view uses the same math to place handles and
//! dim bands, so hit areas always line up with what is drawn.

use crate::domain::{HandlePosition, PhysicalRegion, Point, Region, Size, VirtualScreenInfo};

/// Selection region constants
pub mod region {
    /// Smallest edge length a committed selection may have, in logical pixels
    pub const MIN_SIZE: f64 = 10.0;
}

/// Resize handle constants
pub mod handle {
    /// Hit tolerance around each handle anchor on both axes, in logical pixels
    pub const SIZE: f64 = 8.0;
}

/// Anchor coordinate of a handle on the region boundary
pub fn handle_anchor(region: &Region, handle: HandlePosition) -> Point {
    let x = if handle.has_west() {
        region.x
    } else if handle.has_east() {
        region.right()
    } else {
        region.x + region.width / 2.0
    };
    let y = if handle.has_north() {
        region.y
    } else if handle.has_south() {
        region.bottom()
    } else {
        region.y + region.height / 2.0
    };
    Point::new(x, y)
}

/// Find the handle under `point`, first match in canonical order wins
pub fn hit_test_handle(region: &Region, point: Point) -> Option<HandlePosition> {
    HandlePosition::ALL.into_iter().find(|&h| {
        let anchor = handle_anchor(region, h);
        (point.x - anchor.x).abs() <= handle::SIZE && (point.y - anchor.y).abs() <= handle::SIZE
    })
}

/// Half-open containment: left/top edges inclusive, right/bottom exclusive
pub fn point_in_region(region: &Region, point: Point) -> bool {
    point.x >= region.x
        && point.x < region.right()
        && point.y >= region.y
        && point.y < region.bottom()
}

/// Whether a selection is large enough to confirm
///
/// Creation commits only above [`region::MIN_SIZE`], but a resize clamp may
/// leave an edge exactly at the minimum, which is still confirmable.
pub fn is_valid_selection(selection: &Region) -> bool {
    selection.width >= region::MIN_SIZE && selection.height >= region::MIN_SIZE
}

/// Shift a region by a pointer delta without changing its size
pub fn translate_region(snapshot: &Region, delta: Point) -> Region {
    Region::new(
        snapshot.x + delta.x,
        snapshot.y + delta.y,
        snapshot.width,
        snapshot.height,
    )
}

/// Apply a handle drag to the region captured at drag start
///
/// Edges not named by the handle never move. When an edge length would drop
/// below [`region::MIN_SIZE`] it is pinned there, keeping the opposite edge
/// where it was in `snapshot`.
pub fn clamp_resize(snapshot: &Region, handle: HandlePosition, delta: Point) -> Region {
    let mut out = *snapshot;

    if handle.has_west() {
        out.x = snapshot.x + delta.x;
        out.width = snapshot.width - delta.x;
    } else if handle.has_east() {
        out.width = snapshot.width + delta.x;
    }

    if handle.has_north() {
        out.y = snapshot.y + delta.y;
        out.height = snapshot.height - delta.y;
    } else if handle.has_south() {
        out.height = snapshot.height + delta.y;
    }

    if out.width < region::MIN_SIZE {
        out.width = region::MIN_SIZE;
        if handle.has_west() {
            out.x = snapshot.right() - region::MIN_SIZE;
        }
    }

    if out.height < region::MIN_SIZE {
        out.height = region::MIN_SIZE;
        if handle.has_north() {
            out.y = snapshot.bottom() - region::MIN_SIZE;
        }
    }

    out
}

/// The four rectangles around a selection that get darkened
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DimBands {
    pub top: Region,
    pub bottom: Region,
    pub left: Region,
    pub right: Region,
}

impl DimBands {
    /// Bands that darken the whole container, used before anything is selected
    pub fn full(container: Size) -> Self {
        Self {
            top: Region::new(0.0, 0.0, container.width, container.height),
            bottom: Region::new(0.0, container.height, container.width, 0.0),
            left: Region::new(0.0, 0.0, 0.0, 0.0),
            right: Region::new(container.width, 0.0, 0.0, 0.0),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        [&self.top, &self.bottom, &self.left, &self.right].into_iter()
    }
}

/// Split the area outside `region` into four bands clipped to the container
///
/// Top and bottom span the full width; left and right fill the gap beside
/// the selection between them.
pub fn dim_bands(region: &Region, container: Size) -> DimBands {
    let (w, h) = (container.width.max(0.0), container.height.max(0.0));
    let top = region.y.clamp(0.0, h);
    let bottom = region.bottom().clamp(top, h);
    let left = region.x.clamp(0.0, w);
    let right = region.right().clamp(left, w);

    DimBands {
        top: Region::new(0.0, 0.0, w, top),
        bottom: Region::new(0.0, bottom, w, h - bottom),
        left: Region::new(0.0, top, left, bottom - top),
        right: Region::new(right, top, w - right, bottom - top),
    }
}

/// Scale a logical region to physical pixels, rounding to nearest
pub fn to_physical(region: &Region, scale_factor: f64) -> PhysicalRegion {
    PhysicalRegion::new(
        (region.x * scale_factor).round() as i32,
        (region.y * scale_factor).round() as i32,
        (region.width * scale_factor).round().max(0.0) as u32,
        (region.height * scale_factor).round().max(0.0) as u32,
    )
}

/// The whole virtual desktop as a physical region in overlay-local coordinates
pub fn full_screen(screen: &VirtualScreenInfo) -> PhysicalRegion {
    PhysicalRegion::new(0, 0, screen.total_width, screen.total_height)
}
