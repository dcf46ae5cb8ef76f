//! Camera framing for the presentation layer.
//!
//! Pure computation only: the host decides what to do with the numbers.

use serde::Serialize;

use crate::types::GridSize;

/// Where an orthographic camera should sit to show the whole grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraFraming {
    pub center_x: f32,
    pub center_y: f32,
    /// Half of the visible height in world units.
    pub ortho_size: f32,
}

/// Center the camera on the grid and fit it to the given width/height ratio.
///
/// Returns `None` for an empty grid or a non-positive aspect ratio.
pub fn frame_for_grid(size: GridSize, aspect_ratio: f32) -> Option<CameraFraming> {
    if size.is_empty() || aspect_ratio <= 0.0 || !aspect_ratio.is_finite() {
        return None;
    }
    let w = size.x as f32;
    let h = size.y as f32;
    Some(CameraFraming {
        center_x: (w - 1.0) / 2.0,
        center_y: (h - 1.0) / 2.0,
        ortho_size: (w / (2.0 * aspect_ratio)).max(h / 2.0),
    })
}
