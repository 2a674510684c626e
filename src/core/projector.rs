// Section-relative pixel placements -> decoration scene coordinates.

use super::constants::{SCENE_SPAN_X, SCENE_SPAN_Y};
use super::geometry::{Rect, Viewport};
use super::placement::PlacementSpec;
use glam::Vec3;
use serde::Serialize;

/// Scene units covered by normalized [-1, 1] coordinates on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSpan {
    pub x: f32,
    pub y: f32,
}

impl Default for SceneSpan {
    fn default() -> Self {
        Self {
            x: SCENE_SPAN_X,
            y: SCENE_SPAN_Y,
        }
    }
}

/// A placement resolved into scene space for the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResolvedPlacement {
    pub position: Vec3,
    pub scale: f32,
    pub rotation: Option<Vec3>,
    pub visible: bool,
}

impl Default for ResolvedPlacement {
    fn default() -> Self {
        Self::hidden()
    }
}

impl ResolvedPlacement {
    pub const fn hidden() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
            rotation: None,
            visible: false,
        }
    }
}

/// Project `spec` against the live box of its anchor section.
///
/// Screen y grows downward and scene y upward, hence the inversion.
/// A viewport without area cannot be normalized and yields a hidden placement.
pub fn project(
    rect: &Rect,
    viewport: &Viewport,
    spec: &PlacementSpec,
    span: &SceneSpan,
) -> ResolvedPlacement {
    if !viewport.has_area() {
        return ResolvedPlacement::hidden();
    }
    let px = rect.center_x() + spec.offset_x;
    let py = rect.center_y() + spec.offset_y;
    let nx = (px / viewport.width) * 2.0 - 1.0;
    let ny = -(py / viewport.height) * 2.0 + 1.0;
    ResolvedPlacement {
        position: Vec3::new(nx * span.x, ny * span.y, spec.depth),
        scale: spec.scale,
        rotation: spec.rotation.map(Vec3::from_array),
        visible: spec.visible,
    }
}
